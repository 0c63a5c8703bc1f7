use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use cinetrack_core::error::CoreError;
use cinetrack_omdb::OmdbApiError;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds storage and upstream
/// variants. Implements [`IntoResponse`] to produce the service's
/// `{ "error": <message> }` JSON error bodies.
///
/// Unlike a multi-tenant deployment, 500 bodies carry the underlying
/// detail: the single user owns the store and the provider key, and the
/// frontend displays the message as-is.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `cinetrack_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A database error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A failed call to the OMDb provider.
    #[error("API request failed: {0}")]
    Upstream(#[from] OmdbApiError),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::Core(core) => match core {
                CoreError::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
                CoreError::Coercion(msg) => {
                    tracing::error!(error = %msg, "Field coercion failed");
                    (StatusCode::INTERNAL_SERVER_ERROR, msg.clone())
                }
                CoreError::Internal(msg) => {
                    tracing::error!(error = %msg, "Internal error");
                    (StatusCode::INTERNAL_SERVER_ERROR, core.to_string())
                }
            },

            AppError::Database(err) => {
                tracing::error!(error = %err, "Database error");
                (StatusCode::INTERNAL_SERVER_ERROR, self.to_string())
            }

            AppError::Upstream(err) => {
                tracing::error!(error = %err, "OMDb request failed");
                (StatusCode::INTERNAL_SERVER_ERROR, self.to_string())
            }
        };

        let body = json!({ "error": message });

        (status, axum::Json(body)).into_response()
    }
}
