use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use marquee_core::error::CoreError;
use serde_json::json;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds request-shape failures.
/// Implements [`IntoResponse`]:
///
/// - validation failures become `400 {"error": [violation, ...]}`
/// - every other error becomes `{"message": ...}` with its status code
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `marquee_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A bad request with a human-readable message.
    #[error("Bad request: {0}")]
    BadRequest(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    /// Not-found error for a movie id.
    pub fn movie_not_found(id: impl Into<String>) -> Self {
        AppError::Core(CoreError::NotFound {
            entity: "Movie",
            id: id.into(),
        })
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::Core(core) => match core {
                CoreError::Validation(failure) => {
                    let body = json!({ "error": failure.violations });
                    return (StatusCode::BAD_REQUEST, axum::Json(body)).into_response();
                }
                CoreError::NotFound { entity, .. } => {
                    (StatusCode::NOT_FOUND, format!("{entity} not found"))
                }
            },

            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
        };

        (status, axum::Json(json!({ "message": message }))).into_response()
    }
}

