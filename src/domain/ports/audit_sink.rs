use axum::http::StatusCode;

use crate::domain::models::{AuditEventType, LogRequest};

/// Port for the credentials audit trail
///
/// Logging is fire-and-forget: implementations deal with their own failures
/// and must never prevent the response from being written.
pub trait AuditSink: Send + Sync {
    /// Record one credentials request outcome
    ///
    /// `event_type` is `None` when the request never reached a credentials
    /// record.
    fn log(&self, request: &LogRequest, status: StatusCode, event_type: Option<AuditEventType>);
}
