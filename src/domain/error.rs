use thiserror::Error;

use super::models::error_message::{ErrorCode, ErrorMessage};

/// Message returned in place of internal failure details
pub const INTERNAL_SERVER_ERROR_MESSAGE: &str = "Internal server error";

/// Reasons a credentials request does not produce credentials
///
/// Each variant carries the version prefix of the endpoint that received the
/// request (`CredentialsV1Request: `).
#[derive(Error, Debug)]
pub enum ResolveError {
    #[error("{prefix}No Credential ID in the request")]
    NoIdInRequest { prefix: String },

    #[error("{prefix}Credentials not found")]
    CredentialsNotFound { prefix: String },

    #[error("{prefix}Credentials uninitialized for ID")]
    CredentialsUninitialized { prefix: String },

    #[error("{prefix}Error marshaling credentials")]
    Marshal {
        prefix: String,
        #[source]
        source: EncodeError,
    },
}

impl ResolveError {
    pub const fn code(&self) -> ErrorCode {
        match self {
            Self::NoIdInRequest { .. } => ErrorCode::NoIdInRequest,
            Self::CredentialsNotFound { .. } => ErrorCode::InvalidIdInRequest,
            Self::CredentialsUninitialized { .. } => ErrorCode::CredentialsUninitialized,
            Self::Marshal { .. } => ErrorCode::InternalServerError,
        }
    }

    /// Caller-facing error body
    ///
    /// Marshal failures are reported generically; their detail stays in the
    /// server log.
    pub fn error_message(&self) -> ErrorMessage {
        match self {
            Self::Marshal { .. } => ErrorMessage::new(self.code(), INTERNAL_SERVER_ERROR_MESSAGE),
            _ => ErrorMessage::new(self.code(), self.to_string()),
        }
    }
}

/// Payload encoding failures
#[derive(Error, Debug)]
pub enum EncodeError {
    #[error("JSON encoding failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Encoding failed: {0}")]
    Other(String),
}

/// Credentials store errors
#[derive(Error, Debug, PartialEq, Eq)]
pub enum StoreError {
    #[error("Credentials identifier cannot be empty")]
    EmptyCredentialsId,
}
