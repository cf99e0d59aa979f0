//! Audit trail model for credentials requests

use serde::{Deserialize, Serialize};
use std::fmt;
use std::net::SocketAddr;

use super::credentials::{APPLICATION_ROLE_TYPE, EXECUTION_ROLE_TYPE};

/// Audit event types for credentials requests
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AuditEventType {
    /// Task application role credentials were requested
    GetCredentials,
    /// Task execution role credentials were requested
    GetCredentialsExecutionRole,
    /// The resolved record carried an unrecognized role type
    GetCredentialsInvalidRoleType,
}

impl AuditEventType {
    /// Derive the event type from a credentials role type
    pub fn from_role_type(role_type: &str) -> Self {
        match role_type {
            APPLICATION_ROLE_TYPE => Self::GetCredentials,
            EXECUTION_ROLE_TYPE => Self::GetCredentialsExecutionRole,
            _ => Self::GetCredentialsInvalidRoleType,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::GetCredentials => "GetCredentials",
            Self::GetCredentialsExecutionRole => "GetCredentialsExecutionRole",
            Self::GetCredentialsInvalidRoleType => "GetCredentialsInvalidRoleType",
        }
    }
}

impl fmt::Display for AuditEventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The parts of an inbound request recorded in the audit trail
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LogRequest {
    /// Caller address, when the transport exposes it
    pub source_addr: Option<SocketAddr>,
    /// Path and query as received
    pub request_uri: String,
    pub user_agent: Option<String>,
    /// ARN of the task owning the resolved credentials, empty when unknown
    pub arn: String,
}

impl LogRequest {
    /// Attach the resolved task ARN
    #[must_use]
    pub fn with_arn(mut self, arn: impl Into<String>) -> Self {
        self.arn = arn.into();
        self
    }
}
