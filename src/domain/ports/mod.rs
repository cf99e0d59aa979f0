//! Port trait definitions (Hexagonal Architecture)
//!
//! This module defines the interfaces infrastructure adapters implement:
//! - CredentialsStore: lookup of task credentials by identifier
//! - AuditSink: audit trail for credentials requests
//! - CredentialsEncoder: wire encoding of response payloads
//!
//! Stores and sinks are shared across concurrently handled requests, so
//! every port requires `Send + Sync`.

pub mod audit_sink;
pub mod credentials_store;
pub mod encoder;
pub mod null_audit;

pub use audit_sink::AuditSink;
pub use credentials_store::CredentialsStore;
pub use encoder::{CredentialsEncoder, JsonEncoder};
pub use null_audit::NoopAuditLogger;
