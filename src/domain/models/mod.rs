pub mod audit;
pub mod config;
pub mod credentials;
pub mod error_message;

pub use audit::{AuditEventType, LogRequest};
pub use config::{
    AuditConfig, Config, CredentialsConfig, LogFormat, LoggingConfig, RotationPolicy, ServerConfig,
};
pub use credentials::{
    IamRoleCredentials, TaskCredentials, APPLICATION_ROLE_TYPE, EXECUTION_ROLE_TYPE,
};
pub use error_message::{ErrorCode, ErrorMessage};
