use crate::domain::error::EncodeError;
use crate::domain::models::{ErrorMessage, IamRoleCredentials};

/// Port for encoding response payloads
pub trait CredentialsEncoder: Send + Sync {
    /// Encode the credential material returned on success
    fn encode_credentials(&self, credentials: &IamRoleCredentials) -> Result<Vec<u8>, EncodeError>;

    /// Encode an error body
    fn encode_error(&self, message: &ErrorMessage) -> Result<Vec<u8>, EncodeError>;
}

/// JSON encoder backed by `serde_json`
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonEncoder;

impl CredentialsEncoder for JsonEncoder {
    fn encode_credentials(&self, credentials: &IamRoleCredentials) -> Result<Vec<u8>, EncodeError> {
        Ok(serde_json::to_vec(credentials)?)
    }

    fn encode_error(&self, message: &ErrorMessage) -> Result<Vec<u8>, EncodeError> {
        Ok(serde_json::to_vec(message)?)
    }
}
