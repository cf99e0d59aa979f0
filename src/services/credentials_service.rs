//! Credentials resolution
//!
//! Looks up the credentials behind an identifier and classifies the outcome.
//! Checks run in a fixed order and the first failing one decides the result:
//!
//! 1. empty identifier
//! 2. identifier unknown to the store
//! 3. record still uninitialized
//! 4. credential material fails to encode
//!
//! Anything else is a success.

use std::sync::Arc;
use tracing::{error, info};

use crate::domain::error::ResolveError;
use crate::domain::models::AuditEventType;
use crate::domain::ports::{CredentialsEncoder, CredentialsStore, JsonEncoder};

/// Outcome of resolving one credentials identifier
#[derive(Debug)]
pub struct Resolution {
    /// ARN of the owning task; empty unless a record was found
    pub arn: String,
    /// Role type of the found record; `None` if no record was reached
    pub role_type: Option<String>,
    /// Encoded credential material, or the reason there is none
    pub outcome: Result<Vec<u8>, ResolveError>,
}

impl Resolution {
    fn rejected(error: ResolveError) -> Self {
        Self {
            arn: String::new(),
            role_type: None,
            outcome: Err(error),
        }
    }

    /// Audit event type for this outcome
    pub fn event_type(&self) -> Option<AuditEventType> {
        self.role_type.as_deref().map(AuditEventType::from_role_type)
    }
}

/// Resolves credentials identifiers against an injected store
#[derive(Clone)]
pub struct CredentialsService {
    store: Arc<dyn CredentialsStore>,
    encoder: Arc<dyn CredentialsEncoder>,
}

impl CredentialsService {
    pub fn new(store: Arc<dyn CredentialsStore>) -> Self {
        Self::with_encoder(store, Arc::new(JsonEncoder))
    }

    pub fn with_encoder(
        store: Arc<dyn CredentialsStore>,
        encoder: Arc<dyn CredentialsEncoder>,
    ) -> Self {
        Self { store, encoder }
    }

    pub fn encoder(&self) -> &dyn CredentialsEncoder {
        self.encoder.as_ref()
    }

    /// Resolve `credentials_id` to encoded credential material
    ///
    /// `error_prefix` is prepended to every error message, identifying the
    /// endpoint version that received the request.
    pub fn resolve(&self, credentials_id: &str, error_prefix: &str) -> Resolution {
        if credentials_id.is_empty() {
            let err = ResolveError::NoIdInRequest {
                prefix: error_prefix.to_string(),
            };
            error!(error = %err, "error processing credential request");
            return Resolution::rejected(err);
        }

        let Some(credentials) = self.store.task_credentials(credentials_id) else {
            let err = ResolveError::CredentialsNotFound {
                prefix: error_prefix.to_string(),
            };
            error!(error = %err, "error processing credential request");
            return Resolution::rejected(err);
        };

        let role_type = credentials.role_type().to_string();
        info!(
            credential_type = %role_type,
            task_arn = %credentials.arn,
            "processing credential request"
        );

        if credentials.is_uninitialized() {
            // Expected while the store reconciles state after a restart.
            let err = ResolveError::CredentialsUninitialized {
                prefix: error_prefix.to_string(),
            };
            error!(
                credential_type = %role_type,
                task_arn = %credentials.arn,
                error = %err,
                "error processing credential request"
            );
            return Resolution {
                arn: credentials.arn,
                role_type: Some(role_type),
                outcome: Err(err),
            };
        }

        let outcome = self
            .encoder
            .encode_credentials(&credentials.iam_role_credentials)
            .map_err(|source| {
                error!(
                    credential_type = %role_type,
                    task_arn = %credentials.arn,
                    error = %source,
                    "error processing credential request: error marshaling credentials"
                );
                ResolveError::Marshal {
                    prefix: error_prefix.to_string(),
                    source,
                }
            });

        Resolution {
            arn: credentials.arn,
            role_type: Some(role_type),
            outcome,
        }
    }
}
