//! Unified error types for the academic records service.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Unified error type for the service.
#[derive(Error, Debug)]
pub enum ServiceError {
    /// Configuration loading error.
    #[error("configuration error: {0}")]
    Config(#[from] envy::Error),

    /// IPS computation error (business rule).
    #[error(transparent)]
    Ips(#[from] IpsError),

    /// Database connection/query error.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// IO error.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// IPS computation errors. These are client-facing business-rule failures;
/// every variant aborts the computation entirely.
#[derive(Error, Debug)]
pub enum IpsError {
    /// No KRS rows exist for the requested NIM.
    #[error("no KRS data found for NIM {nim}")]
    NotFound {
        /// The NIM that was queried.
        nim: String,
    },

    /// A grade token is outside the fixed weight table.
    #[error("unrecognized grade '{token}', expected one of: {accepted}")]
    InvalidGrade {
        /// The offending token, after normalization.
        token: String,
        /// The accepted grade tokens.
        accepted: String,
    },

    /// Total SKS summed to zero, the average is undefined.
    #[error("total SKS is 0, IPS cannot be computed")]
    ZeroCreditHours,
}

/// Converts a `ServiceError` into an HTTP response.
///
/// Business-rule failures map to 404/400 with their own message; anything
/// from the storage layer is a 500 carrying the underlying message.
impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            ServiceError::Ips(IpsError::NotFound { .. }) => {
                (StatusCode::NOT_FOUND, self.to_string())
            }
            ServiceError::Ips(_) => (StatusCode::BAD_REQUEST, self.to_string()),
            ServiceError::Database(e) => {
                tracing::error!(error = ?e, "database error");
                (StatusCode::INTERNAL_SERVER_ERROR, self.to_string())
            }
            ServiceError::Config(_) | ServiceError::Io(_) => {
                tracing::error!(error = %self, "internal error");
                (StatusCode::INTERNAL_SERVER_ERROR, self.to_string())
            }
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}

/// Convenient Result type alias.
pub type Result<T> = std::result::Result<T, ServiceError>;
