//! Axum app: settings, shared state, router and handlers.
//!
//! Routes:
//! - `POST /generate-docs`: run the generation pipeline for one control record.
//! - `GET /health`: liveness probe.

use std::sync::Arc;
use std::time::Duration;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use soxflow::{ControlRecord, DocGenerator, GenerationError};
use tracing::{error, info, warn};

use crate::response::{ErrorResponse, GenerateDocsResponse, HealthResponse};

pub(crate) const SERVICE_NAME: &str = "SOXFlow AI Engine";

const DEFAULT_ADDR: &str = "127.0.0.1:8000";
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 60;

/// Server settings.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServeConfig {
    /// Listen address.
    pub addr: String,
    /// Upper bound on one pipeline run, backend call included.
    pub request_timeout: Duration,
}

impl Default for ServeConfig {
    fn default() -> Self {
        Self {
            addr: DEFAULT_ADDR.to_string(),
            request_timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
        }
    }
}

impl ServeConfig {
    /// Builds settings from environment variables, falling back to [`Default`] for unset or
    /// invalid values.
    ///
    /// - `SOXFLOW_ADDR` (default `127.0.0.1:8000`)
    /// - `SOXFLOW_REQUEST_TIMEOUT_SECS` (default 60; 0 is invalid)
    pub fn from_env() -> Self {
        let default = Self::default();
        Self {
            addr: std::env::var("SOXFLOW_ADDR")
                .ok()
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .unwrap_or(default.addr),
            request_timeout: std::env::var("SOXFLOW_REQUEST_TIMEOUT_SECS")
                .ok()
                .and_then(|s| s.trim().parse::<u64>().ok())
                .filter(|secs| *secs > 0)
                .map(Duration::from_secs)
                .unwrap_or(default.request_timeout),
        }
    }
}

/// Shared state: the generator (which owns the backend client) and the request bound.
/// Read-only after startup.
pub(crate) struct AppState {
    pub(crate) generator: DocGenerator,
    pub(crate) request_timeout: Duration,
}

/// Builds the Axum router.
pub(crate) fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/generate-docs", post(generate_docs))
        .route("/health", get(health))
        .with_state(state)
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        service: SERVICE_NAME.to_string(),
    })
}

fn reject(status: StatusCode, error: String) -> Response {
    (status, Json(ErrorResponse { error })).into_response()
}

/// Handles `POST /generate-docs`.
///
/// Malformed bodies and blank fields are rejected before any backend call. Generation
/// failures (backend error or timeout) still answer 200 with a tagged error payload.
async fn generate_docs(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<ControlRecord>, JsonRejection>,
) -> Response {
    let record = match payload {
        Ok(Json(record)) => record,
        Err(rejection) => {
            warn!(status = %rejection.status(), error = %rejection.body_text(), "rejected generate-docs body");
            return reject(rejection.status(), rejection.body_text());
        }
    };
    if let Err(e) = record.validate() {
        warn!(control_id = %record.control_id, error = %e, "rejected generate-docs body");
        return reject(StatusCode::UNPROCESSABLE_ENTITY, e.to_string());
    }

    info!(control_id = %record.control_id, process = %record.process_name, "generate-docs");
    let outcome = tokio::time::timeout(state.request_timeout, state.generator.generate(&record))
        .await
        .unwrap_or(Err(GenerationError::Timeout(state.request_timeout)));

    let body = match outcome {
        Ok(docs) => GenerateDocsResponse::from(docs),
        Err(e) => {
            error!(control_id = %record.control_id, error = %e, "generation failed");
            GenerateDocsResponse::failed(&e)
        }
    };
    Json(body).into_response()
}
