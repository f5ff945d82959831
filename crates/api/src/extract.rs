//! Request extractors that reject with [`AppError`] instead of Axum's
//! default plain-text rejections.

use axum::extract::{FromRequest, Request};
use axum::Json;
use serde_json::Value;

use crate::error::AppError;

/// An untyped JSON request body.
///
/// Malformed JSON or a missing `Content-Type: application/json` header is
/// rejected as a 400 `{"message": ...}`. Shape checking is left to the
/// validator so field errors come back as a structured list.
pub struct JsonBody(pub Value);

impl<S> FromRequest<S> for JsonBody
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<Value>::from_request(req, state).await {
            Ok(Json(value)) => Ok(JsonBody(value)),
            Err(rejection) => Err(AppError::BadRequest(rejection.body_text())),
        }
    }
}
