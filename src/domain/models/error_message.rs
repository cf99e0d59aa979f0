//! Error responses returned by the credentials endpoint

use axum::http::StatusCode;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Error codes carried in the `code` field of an error response.
///
/// The variant names are the wire strings and must not change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorCode {
    /// No credentials identifier was supplied
    NoIdInRequest,
    /// The identifier is unknown to the credentials store
    InvalidIdInRequest,
    /// Reserved for wire compatibility; never produced by the resolver
    NoCredentialsAssociated,
    /// Credentials exist but have not been populated yet
    CredentialsUninitialized,
    /// Something failed on the server side
    InternalServerError,
}

impl ErrorCode {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::NoIdInRequest => "NoIdInRequest",
            Self::InvalidIdInRequest => "InvalidIdInRequest",
            Self::NoCredentialsAssociated => "NoCredentialsAssociated",
            Self::CredentialsUninitialized => "CredentialsUninitialized",
            Self::InternalServerError => "InternalServerError",
        }
    }

    /// HTTP status returned alongside this code
    pub const fn status(self) -> StatusCode {
        match self {
            Self::NoIdInRequest | Self::InvalidIdInRequest | Self::NoCredentialsAssociated => {
                StatusCode::BAD_REQUEST
            }
            Self::CredentialsUninitialized => StatusCode::SERVICE_UNAVAILABLE,
            Self::InternalServerError => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error body written for every failed request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorMessage {
    pub code: ErrorCode,
    pub message: String,

    /// Status the body is sent with; not part of the body itself
    #[serde(skip, default = "default_status")]
    pub http_status: StatusCode,
}

const fn default_status() -> StatusCode {
    StatusCode::INTERNAL_SERVER_ERROR
}

impl ErrorMessage {
    /// Build a message whose status follows from the code
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            http_status: code.status(),
        }
    }
}
