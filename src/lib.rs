//! Task Credentials - task-scoped IAM role credentials endpoint
//!
//! Resolves an opaque credentials identifier supplied by a task container to
//! the temporary IAM role credentials registered for it, answering with the
//! credentials or with a structured error, and auditing every request.
//!
//! # Architecture
//!
//! This crate follows Clean Architecture / Hexagonal Architecture principles:
//!
//! - **Domain Layer** (`domain`): Credentials model, error classification, ports
//! - **Service Layer** (`services`): Credentials resolution
//! - **Adapters** (`adapters`): HTTP routes, request extraction, response emission
//! - **Infrastructure Layer** (`infrastructure`): Config, logging, audit log, stores
//! - **CLI Layer** (`cli`): Command-line interface
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use task_credentials::{
//!     CredentialsHttpServer, CredentialsService, InMemoryCredentialsManager, NoopAuditLogger,
//!     ServerConfig,
//! };
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let store = Arc::new(InMemoryCredentialsManager::new());
//!     let service = CredentialsService::new(store);
//!     CredentialsHttpServer::new(service, Arc::new(NoopAuditLogger), ServerConfig::default())
//!         .serve()
//!         .await
//! }
//! ```

pub mod adapters;
pub mod cli;
pub mod domain;
pub mod infrastructure;
pub mod services;

// Re-export commonly used types for convenience
pub use adapters::http::CredentialsHttpServer;
pub use domain::models::{
    AuditEventType, Config, ErrorCode, ErrorMessage, IamRoleCredentials, LogRequest,
    ServerConfig, TaskCredentials,
};
pub use domain::ports::{AuditSink, CredentialsEncoder, CredentialsStore, JsonEncoder, NoopAuditLogger};
pub use domain::{EncodeError, ResolveError, StoreError};
pub use infrastructure::config::{ConfigError, ConfigLoader};
pub use infrastructure::credentials::InMemoryCredentialsManager;
pub use infrastructure::logging::{FileAuditLogger, LoggerImpl};
pub use services::{CredentialsService, Resolution};
