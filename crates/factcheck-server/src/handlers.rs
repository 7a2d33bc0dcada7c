//! HTTP request handlers for the fact-checking service.
//!
//! Implements the upload and health check endpoints using axum.

use crate::pipeline::{ensure_pdf_filename, FactCheckError, FactChecker};
use axum::{
    extract::{
        multipart::{MultipartError, MultipartRejection},
        DefaultBodyLimit, Multipart, State,
    },
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::{get, post},
    Router as AxumRouter,
};
use factcheck_domain::{FactCheckResult, LlmProvider, SearchProvider};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::{error, info, info_span, warn, Instrument};
use uuid::Uuid;

/// Multipart field carrying the document
pub const FILE_FIELD: &str = "file";

/// Shared application state
pub struct AppState<L, S>
where
    L: LlmProvider,
    S: SearchProvider,
{
    /// Document pipeline shared by all requests
    pub checker: Arc<FactChecker<L, S>>,
}

impl<L, S> AppState<L, S>
where
    L: LlmProvider,
    S: SearchProvider,
{
    /// Wrap a pipeline for sharing across requests
    pub fn new(checker: FactChecker<L, S>) -> Self {
        Self {
            checker: Arc::new(checker),
        }
    }
}

impl<L, S> Clone for AppState<L, S>
where
    L: LlmProvider,
    S: SearchProvider,
{
    fn clone(&self) -> Self {
        Self {
            checker: Arc::clone(&self.checker),
        }
    }
}

/// Health check response
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthCheckResponse {
    /// Always "healthy" while the process serves requests
    pub status: String,
    /// Service name
    pub service: String,
}

/// Error response
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error message
    pub detail: String,
}

/// Application error type
#[derive(Debug)]
pub enum AppError {
    /// Request is not a multipart form
    NotMultipart(MultipartRejection),
    /// No `file` field in the form
    MissingFile,
    /// Form body could not be read
    Multipart(MultipartError),
    /// Pipeline failure
    FactCheck(FactCheckError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::NotMultipart(rejection) => (rejection.status(), rejection.body_text()),
            AppError::MissingFile => (StatusCode::BAD_REQUEST, "No file uploaded".to_string()),
            AppError::Multipart(e) => {
                // Body-limit rejections keep their 413
                let status = match e.status() {
                    StatusCode::PAYLOAD_TOO_LARGE => StatusCode::PAYLOAD_TOO_LARGE,
                    _ => StatusCode::BAD_REQUEST,
                };
                (status, e.body_text())
            }
            AppError::FactCheck(e) if e.is_client_error() => (StatusCode::BAD_REQUEST, e.to_string()),
            AppError::FactCheck(e) => {
                error!(error = %e, "Fact check failed");
                (StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
            }
        };

        let body = Json(ErrorResponse { detail: message });
        (status, body).into_response()
    }
}

impl From<MultipartRejection> for AppError {
    fn from(rejection: MultipartRejection) -> Self {
        AppError::NotMultipart(rejection)
    }
}

impl From<MultipartError> for AppError {
    fn from(e: MultipartError) -> Self {
        AppError::Multipart(e)
    }
}

impl From<FactCheckError> for AppError {
    fn from(e: FactCheckError) -> Self {
        AppError::FactCheck(e)
    }
}

/// POST /fact-check - Extract and verify the claims in an uploaded PDF
async fn fact_check<L, S>(
    State(state): State<AppState<L, S>>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<Vec<FactCheckResult>>, AppError>
where
    L: LlmProvider + 'static,
    S: SearchProvider + 'static,
{
    let span = info_span!(
        "fact_check",
        request_id = %Uuid::now_v7(),
        filename = tracing::field::Empty
    );

    async move {
        let (filename, bytes) = read_upload(multipart?).await?;
        tracing::Span::current().record("filename", filename.as_str());
        info!(bytes = bytes.len(), "Received upload");

        let results = state.checker.check_document(&filename, bytes).await?;
        info!(results = results.len(), "Fact check complete");
        Ok::<_, AppError>(Json(results))
    }
    .instrument(span)
    .await
}

/// Pull the `file` field out of the form; the name is checked before the
/// body is read
async fn read_upload(mut multipart: Multipart) -> Result<(String, Vec<u8>), AppError> {
    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some(FILE_FIELD) {
            continue;
        }

        let filename = field.file_name().unwrap_or_default().to_string();
        if let Err(e) = ensure_pdf_filename(&filename) {
            warn!(filename = %filename, "Rejected non-PDF upload");
            return Err(e.into());
        }

        let bytes = field.bytes().await?;
        return Ok((filename, bytes.to_vec()));
    }

    Err(AppError::MissingFile)
}

/// GET /health - Liveness check
async fn health_check() -> Json<HealthCheckResponse> {
    Json(HealthCheckResponse {
        status: "healthy".to_string(),
        service: "fact-checking-backend".to_string(),
    })
}

/// Create the axum router with all routes
pub fn create_router<L, S>(state: AppState<L, S>, max_upload_bytes: usize) -> AxumRouter
where
    L: LlmProvider + 'static,
    S: SearchProvider + 'static,
{
    AxumRouter::new()
        .route("/fact-check", post(fact_check::<L, S>))
        .route("/health", get(health_check))
        .layer(DefaultBodyLimit::max(max_upload_bytes))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
