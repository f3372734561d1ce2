use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use phq_core::error::CoreError;
use phq_export::error::ExportError;
use phq_instruments::error::InstrumentError;

/// Unified API error type for all route handlers.
#[derive(Debug)]
pub enum ApiError {
    NotFound(String),
    BadRequest(String),
    /// Results requested before the questionnaire was submitted.
    Conflict(String),
    /// Export failed; scoring is unaffected and the caller may carry on.
    ExportUnavailable(String),
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::Conflict(msg) => (StatusCode::CONFLICT, msg),
            ApiError::ExportUnavailable(msg) => {
                tracing::warn!("export failed: {msg}");
                (
                    StatusCode::SERVICE_UNAVAILABLE,
                    format!("export is unavailable: {msg}"),
                )
            }
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}

impl From<InstrumentError> for ApiError {
    fn from(e: InstrumentError) -> Self {
        match e {
            InstrumentError::UnknownInstrument(_) => ApiError::NotFound(e.to_string()),
            InstrumentError::Core(core) => core.into(),
            other => ApiError::BadRequest(other.to_string()),
        }
    }
}

impl From<CoreError> for ApiError {
    fn from(e: CoreError) -> Self {
        match e {
            CoreError::ResultNotReady => {
                ApiError::Conflict("submit the questionnaire before viewing results".to_string())
            }
            CoreError::InvalidItem(_) | CoreError::InvalidPoints { .. } => {
                ApiError::BadRequest(e.to_string())
            }
        }
    }
}

impl From<ExportError> for ApiError {
    fn from(e: ExportError) -> Self {
        ApiError::ExportUnavailable(e.to_string())
    }
}
