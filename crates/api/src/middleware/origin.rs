//! Origin allow-list gate.
//!
//! Browsers attach an `Origin` header to cross-origin requests. Requests
//! without one (same-origin, curl, server-to-server) pass through, and an
//! empty header counts as absent. Requests
//! whose origin is not on the allow-list are refused with `403` before
//! routing, preflights included.

use axum::extract::{Request, State};
use axum::http::header::ORIGIN;
use axum::http::StatusCode;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};

use crate::state::AppState;

/// Body sent with a rejected request.
pub const REJECTION_MESSAGE: &str = "Not allowed by CORS";

/// Axum middleware enforcing [`ServerConfig::cors_origins`].
///
/// [`ServerConfig::cors_origins`]: crate::config::ServerConfig::cors_origins
pub async fn require_allowed_origin(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let origin = request.headers().get(ORIGIN).filter(|o| !o.is_empty());

    if let Some(origin) = origin {
        let allowed = origin
            .to_str()
            .is_ok_and(|o| state.config.is_origin_allowed(o));

        if !allowed {
            tracing::warn!(
                origin = ?origin,
                method = %request.method(),
                uri = %request.uri(),
                "Rejected request from disallowed origin",
            );
            return (StatusCode::FORBIDDEN, REJECTION_MESSAGE).into_response();
        }
    }

    next.run(request).await
}
