//! Audit logging for credentials requests
//!
//! Every request served by the credentials endpoint leaves one JSON line in
//! the audit log, whatever its outcome.

use anyhow::{Context, Result};
use axum::http::StatusCode;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::Path;
use std::sync::{Arc, Mutex};
use tracing::{info, warn};

use crate::domain::models::{AuditConfig, AuditEventType, LogRequest};
use crate::domain::ports::AuditSink;

/// Placeholder written for fields with no value
const UNKNOWN_FIELD: &str = "-";

/// Audit logger appending to a JSON-lines file
#[derive(Clone)]
pub struct FileAuditLogger {
    log_file: Arc<Mutex<File>>,
    cluster: String,
    container_instance_arn: String,
}

/// One audit log record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditEntry {
    pub timestamp: DateTime<Utc>,
    pub status: u16,
    pub source_addr: String,
    pub request_uri: String,
    pub user_agent: String,
    pub task_arn: String,
    pub event_type: String,
    pub cluster: String,
    pub container_instance_arn: String,
}

fn or_unknown(value: Option<&str>) -> String {
    value
        .filter(|v| !v.is_empty())
        .unwrap_or(UNKNOWN_FIELD)
        .to_string()
}

impl FileAuditLogger {
    /// Create a new audit logger writing to the specified file
    ///
    /// Creates parent directories if they don't exist
    /// Opens file in append mode to preserve existing audit trail
    pub async fn new(log_path: impl AsRef<Path>) -> Result<Self> {
        let log_path = log_path.as_ref();

        if let Some(parent) = log_path.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .context("failed to create audit log directory")?;
        }

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(log_path)
            .context("failed to open audit log file")?;

        Ok(Self {
            log_file: Arc::new(Mutex::new(file)),
            cluster: UNKNOWN_FIELD.to_string(),
            container_instance_arn: UNKNOWN_FIELD.to_string(),
        })
    }

    /// Create an audit logger from configuration
    pub async fn from_config(config: &AuditConfig) -> Result<Self> {
        let logger = Self::new(&config.path).await?;
        Ok(logger.with_instance(
            config.cluster.as_deref(),
            config.container_instance_arn.as_deref(),
        ))
    }

    /// Stamp records with the cluster and container instance serving them
    #[must_use]
    pub fn with_instance(mut self, cluster: Option<&str>, container_instance_arn: Option<&str>) -> Self {
        self.cluster = or_unknown(cluster);
        self.container_instance_arn = or_unknown(container_instance_arn);
        self
    }

    fn entry(
        &self,
        request: &LogRequest,
        status: StatusCode,
        event_type: Option<AuditEventType>,
    ) -> AuditEntry {
        AuditEntry {
            timestamp: Utc::now(),
            status: status.as_u16(),
            source_addr: request
                .source_addr
                .map_or_else(|| UNKNOWN_FIELD.to_string(), |addr| addr.to_string()),
            request_uri: or_unknown(Some(&request.request_uri)),
            user_agent: or_unknown(request.user_agent.as_deref()),
            task_arn: or_unknown(Some(&request.arn)),
            event_type: or_unknown(event_type.map(AuditEventType::as_str)),
            cluster: self.cluster.clone(),
            container_instance_arn: self.container_instance_arn.clone(),
        }
    }

    /// Write an entry as a JSON line
    pub fn write_entry(&self, entry: &AuditEntry) -> Result<()> {
        let json = serde_json::to_string(entry).context("failed to serialize audit entry")?;

        let mut file = self
            .log_file
            .lock()
            .map_err(|e| anyhow::anyhow!("audit log mutex poisoned: {e}"))?;

        writeln!(file, "{json}").context("failed to write audit entry")?;
        file.flush().context("failed to flush audit log")?;
        Ok(())
    }
}

impl AuditSink for FileAuditLogger {
    fn log(&self, request: &LogRequest, status: StatusCode, event_type: Option<AuditEventType>) {
        let entry = self.entry(request, status, event_type);

        if let Err(e) = self.write_entry(&entry) {
            warn!(error = %e, status = entry.status, "failed to write audit entry");
        }

        info!(
            status = entry.status,
            task_arn = %entry.task_arn,
            event_type = %entry.event_type,
            request_uri = %entry.request_uri,
            "audit event"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn read_entries(path: &Path) -> Vec<AuditEntry> {
        std::fs::read_to_string(path)
            .unwrap()
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect()
    }

    fn request() -> LogRequest {
        LogRequest {
            source_addr: Some("172.17.0.2:41234".parse().unwrap()),
            request_uri: "/v1/credentials?id=task789".to_string(),
            user_agent: Some("aws-sdk-rust/1.0".to_string()),
            arn: "arn:aws:ecs:us-west-2:123:task/789".to_string(),
        }
    }

    #[tokio::test]
    async fn test_audit_logger_creates_parent_dirs() {
        let temp_dir = TempDir::new().unwrap();
        let log_path = temp_dir.path().join("logs/audit/credentials.log");

        let _logger = FileAuditLogger::new(&log_path).await.unwrap();
        assert!(log_path.exists());
    }

    #[tokio::test]
    async fn test_log_writes_json_line() {
        let temp_dir = TempDir::new().unwrap();
        let log_path = temp_dir.path().join("audit.log");

        let logger = FileAuditLogger::new(&log_path)
            .await
            .unwrap()
            .with_instance(Some("default"), Some("arn:aws:ecs:container-instance/1"));

        logger.log(&request(), StatusCode::OK, Some(AuditEventType::GetCredentials));

        let entries = read_entries(&log_path);
        assert_eq!(entries.len(), 1);

        let entry = &entries[0];
        assert_eq!(entry.status, 200);
        assert_eq!(entry.source_addr, "172.17.0.2:41234");
        assert_eq!(entry.request_uri, "/v1/credentials?id=task789");
        assert_eq!(entry.user_agent, "aws-sdk-rust/1.0");
        assert_eq!(entry.task_arn, "arn:aws:ecs:us-west-2:123:task/789");
        assert_eq!(entry.event_type, "GetCredentials");
        assert_eq!(entry.cluster, "default");
        assert_eq!(entry.container_instance_arn, "arn:aws:ecs:container-instance/1");
    }

    #[tokio::test]
    async fn test_unknown_fields_use_placeholder() {
        let temp_dir = TempDir::new().unwrap();
        let log_path = temp_dir.path().join("audit.log");

        let logger = FileAuditLogger::new(&log_path).await.unwrap();
        let request = LogRequest {
            request_uri: "/v1/credentials".to_string(),
            ..Default::default()
        };

        logger.log(&request, StatusCode::BAD_REQUEST, None);

        let entry = &read_entries(&log_path)[0];
        assert_eq!(entry.status, 400);
        assert_eq!(entry.source_addr, "-");
        assert_eq!(entry.user_agent, "-");
        assert_eq!(entry.task_arn, "-");
        assert_eq!(entry.event_type, "-");
        assert_eq!(entry.cluster, "-");
    }

    #[tokio::test]
    async fn test_from_config() {
        let temp_dir = TempDir::new().unwrap();
        let config = AuditConfig {
            enabled: true,
            path: temp_dir.path().join("audit.log").display().to_string(),
            cluster: Some("prod".to_string()),
            container_instance_arn: None,
        };

        let logger = FileAuditLogger::from_config(&config).await.unwrap();
        logger.log(&request(), StatusCode::SERVICE_UNAVAILABLE, None);

        let entry = &read_entries(Path::new(&config.path))[0];
        assert_eq!(entry.cluster, "prod");
        assert_eq!(entry.container_instance_arn, "-");
        assert_eq!(entry.status, 503);
    }

    #[tokio::test]
    async fn test_concurrent_writes() {
        let temp_dir = TempDir::new().unwrap();
        let log_path = temp_dir.path().join("audit.log");

        let logger = FileAuditLogger::new(&log_path).await.unwrap();

        let mut handles = vec![];
        for i in 0..10 {
            let logger = logger.clone();
            handles.push(tokio::spawn(async move {
                let request = request().with_arn(format!("arn:aws:ecs:task/{i}"));
                logger.log(&request, StatusCode::OK, Some(AuditEventType::GetCredentials));
            }));
        }

        for handle in handles {
            handle.await.unwrap();
        }

        assert_eq!(read_entries(&log_path).len(), 10);
    }
}
