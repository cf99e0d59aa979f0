//! Null audit sink implementation.
//!
//! Used when the audit trail is disabled in configuration.

use axum::http::StatusCode;

use super::AuditSink;
use crate::domain::models::{AuditEventType, LogRequest};

/// An audit sink that records nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopAuditLogger;

impl NoopAuditLogger {
    pub const fn new() -> Self {
        Self
    }
}

impl AuditSink for NoopAuditLogger {
    fn log(&self, _request: &LogRequest, _status: StatusCode, _event_type: Option<AuditEventType>) {}
}
