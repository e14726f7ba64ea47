use crate::config::ConfigError;
use crate::scoring::import::PropertyImportError;
use crate::telemetry::TelemetryError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

/// Failures surfaced by the scoring service and its command-line harness.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("locality scoring configuration invalid: {0}")]
    Config(#[from] ConfigError),
    #[error("scoring telemetry could not start: {0}")]
    Telemetry(#[from] TelemetryError),
    #[error("scoring service io failure: {0}")]
    Io(#[from] std::io::Error),
    #[error("scoring HTTP server failed: {0}")]
    Server(#[from] axum::Error),
    #[error("listing import rejected: {0}")]
    Import(#[from] PropertyImportError),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Import(_) => StatusCode::BAD_REQUEST,
            AppError::Config(_)
            | AppError::Telemetry(_)
            | AppError::Io(_)
            | AppError::Server(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let body = Json(json!({ "error": self.to_string() }));
        (self.status(), body).into_response()
    }
}
