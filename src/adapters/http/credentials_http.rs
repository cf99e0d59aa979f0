//! Task Credentials HTTP Server.
//!
//! Serves temporary IAM role credentials to task containers:
//!
//! - `GET /v1/credentials?id=<credentials id>`
//! - `GET /v2/credentials/<credentials id>`
//!
//! Every request is audited exactly once, before its response is written.

use anyhow::{Context, Result};
use axum::{
    extract::{rejection::PathRejection, ConnectInfo, Path, Request, State},
    http::{header, StatusCode},
    response::Response,
    routing::get,
    Router,
};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::{debug, error};

use super::response::{empty_failure_response, value_from_request, write_json_response, RequestKind};
use crate::domain::models::{AuditEventType, LogRequest, ServerConfig};
use crate::domain::ports::AuditSink;
use crate::services::CredentialsService;

/// Query parameter carrying the credentials identifier on the v1 route
pub const CREDENTIALS_ID_QUERY_PARAMETER: &str = "id";

/// v1 route; the identifier is a query parameter
pub const V1_CREDENTIALS_PATH: &str = "/v1/credentials";

/// v2 route prefix; the rest of the path is the identifier
pub const V2_CREDENTIALS_PATH: &str = "/v2/credentials";

/// Credentials API versions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiVersion {
    V1,
    V2,
}

impl ApiVersion {
    const fn number(self) -> u8 {
        match self {
            Self::V1 => 1,
            Self::V2 => 2,
        }
    }

    /// Prefix identifying the endpoint version in error messages
    pub fn error_prefix(self) -> String {
        format!("CredentialsV{}Request: ", self.number())
    }
}

/// Shared state for the credentials HTTP server.
struct AppState {
    service: CredentialsService,
    audit: Arc<dyn AuditSink>,
}

/// Task Credentials HTTP Server.
pub struct CredentialsHttpServer {
    config: ServerConfig,
    state: Arc<AppState>,
}

impl CredentialsHttpServer {
    pub fn new(service: CredentialsService, audit: Arc<dyn AuditSink>, config: ServerConfig) -> Self {
        Self {
            config,
            state: Arc::new(AppState { service, audit }),
        }
    }

    /// Build the router.
    pub fn router(&self) -> Router {
        Router::new()
            .route(V1_CREDENTIALS_PATH, get(get_credentials_v1))
            .route(V2_CREDENTIALS_PATH, get(get_credentials_v2_without_id))
            .route("/v2/credentials/", get(get_credentials_v2_without_id))
            .route("/v2/credentials/{*id}", get(get_credentials_v2))
            .with_state(Arc::clone(&self.state))
            .layer(TraceLayer::new_for_http())
    }

    /// Start the server.
    pub async fn serve(self) -> Result<()> {
        self.serve_with_shutdown(std::future::pending()).await
    }

    /// Start the server with a shutdown signal.
    pub async fn serve_with_shutdown<F>(self, shutdown: F) -> Result<()>
    where
        F: std::future::Future<Output = ()> + Send + 'static,
    {
        let listener = TcpListener::bind((self.config.host.as_str(), self.config.port))
            .await
            .with_context(|| {
                format!("Failed to bind {}:{}", self.config.host, self.config.port)
            })?;

        self.serve_listener(listener, shutdown).await
    }

    /// Serve on an already bound listener until `shutdown` resolves.
    pub async fn serve_listener<F>(self, listener: TcpListener, shutdown: F) -> Result<()>
    where
        F: std::future::Future<Output = ()> + Send + 'static,
    {
        let router = self.router();
        tracing::info!(addr = ?listener.local_addr().ok(), "task credentials server listening");

        axum::serve(
            listener,
            router.into_make_service_with_connect_info::<SocketAddr>(),
        )
        .with_graceful_shutdown(shutdown)
        .await
        .context("Credentials server terminated with an error")
    }
}

// Handler functions

async fn get_credentials_v1(State(state): State<Arc<AppState>>, request: Request) -> Response {
    let credentials_id =
        value_from_request(request.uri(), CREDENTIALS_ID_QUERY_PARAMETER).unwrap_or_default();
    handle_credentials_request(&state, &request, &credentials_id, ApiVersion::V1)
}

async fn get_credentials_v2(
    State(state): State<Arc<AppState>>,
    credentials_id: Result<Path<String>, PathRejection>,
    request: Request,
) -> Response {
    // Identifiers that do not decode are looked up verbatim and so end up
    // classified like any other unknown identifier.
    let credentials_id = match credentials_id {
        Ok(Path(id)) => id,
        Err(rejection) => {
            debug!(error = %rejection, "undecodable credentials id");
            raw_v2_identifier(request.uri().path()).to_string()
        }
    };
    handle_credentials_request(&state, &request, &credentials_id, ApiVersion::V2)
}

/// Everything after the v2 route prefix, still percent-encoded
fn raw_v2_identifier(path: &str) -> &str {
    path.strip_prefix(V2_CREDENTIALS_PATH)
        .and_then(|rest| rest.strip_prefix('/'))
        .unwrap_or_default()
}

async fn get_credentials_v2_without_id(
    State(state): State<Arc<AppState>>,
    request: Request,
) -> Response {
    handle_credentials_request(&state, &request, "", ApiVersion::V2)
}

/// Capture the request details recorded in the audit trail
fn audit_details(request: &Request) -> LogRequest {
    LogRequest {
        source_addr: request
            .extensions()
            .get::<ConnectInfo<SocketAddr>>()
            .map(|ConnectInfo(addr)| *addr),
        request_uri: request
            .uri()
            .path_and_query()
            .map_or_else(|| request.uri().path().to_string(), ToString::to_string),
        user_agent: request
            .headers()
            .get(header::USER_AGENT)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string),
        arn: String::new(),
    }
}

/// Resolve the identifier and write the audited response
fn handle_credentials_request(
    state: &AppState,
    request: &Request,
    credentials_id: &str,
    version: ApiVersion,
) -> Response {
    let resolution = state.service.resolve(credentials_id, &version.error_prefix());
    let event_type = resolution.event_type();
    let log_request = audit_details(request).with_arn(resolution.arn);

    match resolution.outcome {
        Ok(payload) => emit_response(
            state.audit.as_ref(),
            &log_request,
            StatusCode::OK,
            event_type,
            payload,
        ),
        Err(err) => {
            let message = err.error_message();
            let body = match state.service.encoder().encode_error(&message) {
                Ok(body) => body,
                Err(e) => {
                    error!(error = %e, code = %message.code, "failed to encode error response");
                    return empty_failure_response();
                }
            };
            emit_response(
                state.audit.as_ref(),
                &log_request,
                message.http_status,
                event_type,
                body,
            )
        }
    }
}

/// Audit the outcome, then build the response carrying `body`
pub fn emit_response(
    audit: &dyn AuditSink,
    request: &LogRequest,
    status: StatusCode,
    event_type: Option<AuditEventType>,
    body: Vec<u8>,
) -> Response {
    audit.log(request, status, event_type);
    write_json_response(status, body, RequestKind::Credentials)
}
