//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router with all handlers
//! - Wire up middleware (tracing, body limit, request ID, timeout)
//! - Serve the lookup page, the lookup API and the health endpoint
//! - Graceful shutdown on Ctrl+C or programmatic trigger

use std::sync::Arc;
use std::time::Duration;

use axum::extract::State;
use axum::response::Html;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower::ServiceBuilder;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::request_id::{PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::config::ServiceConfig;
use crate::http::page::LOOKUP_PAGE;
use crate::http::request::MakeRequestUuid;
use crate::http::response::ApiError;
use crate::lookup::{find_record, Cpf, StudentRecord};
use crate::source::RecordSource;

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub source: Arc<RecordSource>,
}

/// HTTP server for the lookup service.
pub struct HttpServer {
    router: Router,
    config: ServiceConfig,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    pub fn new(config: ServiceConfig) -> Self {
        let source = Arc::new(RecordSource::from_config(&config.source));
        let state = AppState { source };

        let router = Self::build_router(&config, state);
        Self { router, config }
    }

    /// Build the Axum router with all middleware layers.
    fn build_router(config: &ServiceConfig, state: AppState) -> Router {
        Router::new()
            .route("/", get(index_handler))
            .route("/consulta", post(consulta_handler))
            .route("/health", get(health_handler))
            .with_state(state)
            .layer(
                ServiceBuilder::new()
                    .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
                    .layer(PropagateRequestIdLayer::x_request_id())
                    .layer(TraceLayer::new_for_http())
                    .layer(RequestBodyLimitLayer::new(config.limits.max_body_size))
                    .layer(TimeoutLayer::new(Duration::from_secs(
                        config.timeouts.request_secs,
                    ))),
            )
    }

    /// Run the server until the listener fails or shutdown is signalled.
    pub async fn run(
        self,
        listener: TcpListener,
        shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown_signal(shutdown))
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }
}

/// Request body of `POST /consulta`.
#[derive(Debug, Serialize, Deserialize)]
pub struct ConsultaRequest {
    pub cpf: String,
}

/// Liveness payload of `GET /health`.
#[derive(Debug, Serialize, Deserialize)]
pub struct ServiceStatus {
    pub version: String,
    pub status: String,
}

/// Serve the embedded lookup page.
async fn index_handler() -> Html<&'static str> {
    Html(LOOKUP_PAGE)
}

/// Main lookup handler.
///
/// Validates the key, fetches the table once and scans it. The key must
/// reduce to exactly 11 digits before any fetch happens.
async fn consulta_handler(
    State(state): State<AppState>,
    Json(request): Json<ConsultaRequest>,
) -> Result<Json<StudentRecord>, ApiError> {
    let key: Cpf = request.cpf.parse().map_err(|e| {
        tracing::debug!(error = %e, "Rejected lookup key before fetch");
        ApiError::InvalidCpf
    })?;

    let table = state.source.fetch_table().await?;

    match find_record(&table, &key) {
        Some(record) => {
            tracing::info!(cpf = %key.masked(), "Record found");
            Ok(Json(record))
        }
        None => {
            tracing::info!(cpf = %key.masked(), "No row matched");
            Err(ApiError::NotFound)
        }
    }
}

async fn health_handler() -> Json<ServiceStatus> {
    Json(ServiceStatus {
        version: env!("CARGO_PKG_VERSION").to_string(),
        status: "operational".to_string(),
    })
}

/// Wait for shutdown: Ctrl+C or the coordinator's broadcast.
async fn shutdown_signal(mut shutdown: broadcast::Receiver<()>) {
    tokio::select! {
        _ = tokio::signal::ctrl_c() => {
            tracing::info!("Shutdown signal received");
        }
        _ = shutdown.recv() => {
            tracing::info!("Shutdown triggered");
        }
    }
}
