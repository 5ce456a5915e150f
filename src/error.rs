//! Error types for the climate API.
//!
//! A single error enum covers store access, stored-data problems and the
//! startup concerns (configuration, IO, server binding).

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

/// The main error type for climate API operations.
#[derive(Error, Debug)]
pub enum ClimateError {
    /// The store could not be reached (no session could be opened)
    #[error("Connection error: {message}")]
    Connection { message: String },

    /// A query against the store failed
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A date read back from the store is not in `YYYY-MM-DD` form
    #[error("Invalid stored date: {value}")]
    InvalidStoredDate { value: String },

    /// Configuration errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Server errors
    #[error("Server error: {message}")]
    Server { message: String },
}

impl ClimateError {
    /// HTTP status reported to the client for this error.
    ///
    /// Every failure this service can hit while answering a request is on the
    /// server side: user supplied dates are never validated, so there is no
    /// client error class.
    pub fn status_code(&self) -> StatusCode {
        StatusCode::INTERNAL_SERVER_ERROR
    }

    /// Short label used in structured logs
    pub fn kind(&self) -> &'static str {
        match self {
            ClimateError::Connection { .. } => "store_unreachable",
            ClimateError::Database(_) => "query_failed",
            ClimateError::InvalidStoredDate { .. } => "bad_stored_date",
            ClimateError::Config { .. } => "config",
            ClimateError::Io(_) => "io",
            ClimateError::Json(_) => "json",
            ClimateError::Server { .. } => "server",
        }
    }

    /// Render the error as a JSON body tagged with the request id.
    pub fn into_response_with_id(self, request_id: &str) -> Response {
        (
            self.status_code(),
            Json(serde_json::json!({
                "error": self.to_string(),
                "request_id": request_id
            })),
        )
            .into_response()
    }
}

impl IntoResponse for ClimateError {
    fn into_response(self) -> Response {
        (
            self.status_code(),
            Json(serde_json::json!({ "error": self.to_string() })),
        )
            .into_response()
    }
}

/// Convenience type alias for Results with ClimateError
pub type Result<T> = std::result::Result<T, ClimateError>;
