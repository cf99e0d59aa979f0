//! `serve` command
//!
//! Wires the credentials store, audit sink and HTTP server together and runs
//! until Ctrl-C.

use anyhow::{Context, Result};
use std::sync::Arc;
use tracing::{info, warn};

use crate::adapters::http::CredentialsHttpServer;
use crate::cli::types::ServeArgs;
use crate::domain::models::Config;
use crate::domain::ports::{AuditSink, NoopAuditLogger};
use crate::infrastructure::config::ConfigLoader;
use crate::infrastructure::credentials::InMemoryCredentialsManager;
use crate::infrastructure::logging::FileAuditLogger;
use crate::services::CredentialsService;

/// Apply command-line overrides on top of the loaded configuration
pub fn apply_overrides(mut config: Config, args: ServeArgs) -> Result<Config> {
    if let Some(host) = args.host {
        config.server.host = host;
    }
    if let Some(port) = args.port {
        config.server.port = port;
    }
    if let Some(seed) = args.seed {
        config.credentials.seed_file = Some(seed);
    }

    ConfigLoader::validate(&config)?;
    Ok(config)
}

/// Build the credentials store described by the configuration
pub fn build_store(config: &Config) -> Result<InMemoryCredentialsManager> {
    let store = match config.credentials.seed_file {
        Some(ref path) => InMemoryCredentialsManager::from_seed_file(path)?,
        None => InMemoryCredentialsManager::new(),
    };

    if store.is_empty() {
        warn!("no credentials loaded; every lookup will be rejected");
    }
    Ok(store)
}

/// Build the audit sink described by the configuration
pub async fn build_audit_sink(config: &Config) -> Result<Arc<dyn AuditSink>> {
    if !config.audit.enabled {
        info!("credentials audit log disabled");
        return Ok(Arc::new(NoopAuditLogger::new()));
    }

    let logger = FileAuditLogger::from_config(&config.audit)
        .await
        .with_context(|| format!("Failed to open audit log {}", config.audit.path))?;
    Ok(Arc::new(logger))
}

pub async fn execute(args: ServeArgs, config: Config) -> Result<()> {
    let config = apply_overrides(config, args)?;

    let store = Arc::new(build_store(&config)?);
    let audit = build_audit_sink(&config).await?;
    let service = CredentialsService::new(store);

    CredentialsHttpServer::new(service, audit, config.server)
        .serve_with_shutdown(shutdown_signal())
        .await
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("shutdown signal received");
}
