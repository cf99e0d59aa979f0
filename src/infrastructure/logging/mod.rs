//! Logging infrastructure
//!
//! Structured logging using tracing and tracing-subscriber:
//! - JSON or pretty stdout output
//! - Rolling JSON log files
//! - Credentials audit trail

pub mod audit;
pub mod logger;

pub use audit::{AuditEntry, FileAuditLogger};
pub use logger::LoggerImpl;
