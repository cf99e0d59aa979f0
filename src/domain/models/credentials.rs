//! Task credentials domain model
//!
//! Read-only snapshots of the credentials a store associates with a
//! credentials identifier. Field names on the wire match the credential
//! provider contract consumed by AWS SDKs, so they are renamed explicitly.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Role type of credentials issued for a task's application containers
pub const APPLICATION_ROLE_TYPE: &str = "TaskApplication";

/// Role type of credentials issued for the task execution role
pub const EXECUTION_ROLE_TYPE: &str = "TaskExecution";

/// Temporary IAM role credential material
///
/// This is the only part of a [`TaskCredentials`] record that is ever
/// returned to callers.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IamRoleCredentials {
    #[serde(rename = "RoleArn", default)]
    pub role_arn: String,

    #[serde(rename = "AccessKeyId", default)]
    pub access_key_id: String,

    #[serde(rename = "SecretAccessKey", default)]
    pub secret_access_key: String,

    /// Session token
    #[serde(rename = "Token", default)]
    pub session_token: String,

    /// Expiration timestamp, RFC 3339
    #[serde(rename = "Expiration", default)]
    pub expiration: String,

    /// Role type tag (`TaskApplication`, `TaskExecution`, ...)
    #[serde(rename = "RoleType", default)]
    pub role_type: String,
}

impl IamRoleCredentials {
    /// True when every field holds its empty value
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

// Secrets must never reach log output through `{:?}`.
impl fmt::Debug for IamRoleCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IamRoleCredentials")
            .field("role_arn", &self.role_arn)
            .field("access_key_id", &self.access_key_id)
            .field("secret_access_key", &"[REDACTED]")
            .field("session_token", &"[REDACTED]")
            .field("expiration", &self.expiration)
            .field("role_type", &self.role_type)
            .finish()
    }
}

/// Credentials associated with a task
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskCredentials {
    /// ARN of the owning task, empty until the task is known
    #[serde(rename = "ARN", default)]
    pub arn: String,

    #[serde(rename = "IAMRoleCredentials", default)]
    pub iam_role_credentials: IamRoleCredentials,
}

impl TaskCredentials {
    pub fn new(arn: impl Into<String>, iam_role_credentials: IamRoleCredentials) -> Self {
        Self {
            arn: arn.into(),
            iam_role_credentials,
        }
    }

    /// A record is uninitialized when both its task ARN and its credential
    /// material are empty.
    ///
    /// Stores hand out such records while they are still reconciling state
    /// after a restart; callers should retry later.
    pub fn is_uninitialized(&self) -> bool {
        self.arn.is_empty() && self.iam_role_credentials.is_empty()
    }

    pub fn role_type(&self) -> &str {
        &self.iam_role_credentials.role_type
    }
}
