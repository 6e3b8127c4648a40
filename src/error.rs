//! Error handling

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::synthetic::VALID_UNITS;

pub type AppResult<T> = Result<T, AppError>;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Missing or non-integer mode parameter
    #[error("invalid mode parameter: {0}")]
    InvalidMode(String),

    /// Business unit code outside the recognized set
    #[error("invalid business unit: {0}")]
    InvalidBusinessUnit(String),

    /// Named data file absent or not valid JSON
    #[error("{0} not found or invalid")]
    DataFileNotFound(String),

    /// Backing store failure that was not recoverable by fallback
    #[error("database operation failed: {0}")]
    Database(#[from] sqlx::Error),

    /// Anything else
    #[error("internal error: {0}")]
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            AppError::InvalidMode(param) => (
                StatusCode::BAD_REQUEST,
                json!({
                    "status": "error",
                    "message": "Invalid mode parameter",
                    "details": format!("expected an integer mode, got '{param}'"),
                }),
            ),
            AppError::InvalidBusinessUnit(unit) => {
                tracing::debug!("Rejected business unit '{unit}'");
                (
                    StatusCode::BAD_REQUEST,
                    json!({
                        "status": "error",
                        "message": "Invalid business unit",
                        "valid_units": VALID_UNITS,
                    }),
                )
            }
            AppError::DataFileNotFound(name) => (
                StatusCode::NOT_FOUND,
                json!({ "detail": format!("{name} not found or invalid") }),
            ),
            AppError::Database(err) => {
                tracing::error!("Database error: {err}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({
                        "status": "error",
                        "message": "Database operation failed",
                        "details": "backing store error, see server logs",
                    }),
                )
            }
            AppError::Internal(msg) => {
                tracing::error!("Unexpected error: {msg}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({
                        "status": "error",
                        "message": "An unexpected error occurred",
                        "details": "see server logs",
                    }),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}
