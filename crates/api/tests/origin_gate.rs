//! Integration tests for the origin allow-list gate and CORS headers.

mod common;

use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use common::{body_bytes, build_test_app, get, send, ALLOWED_ORIGIN};
use marquee_api::middleware::origin::REJECTION_MESSAGE;

fn request_with_origin(method: Method, uri: &str, origin: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("Origin", origin)
        .body(Body::empty())
        .unwrap()
}

fn preflight(uri: &str, origin: &str, method: &str) -> Request<Body> {
    Request::builder()
        .method(Method::OPTIONS)
        .uri(uri)
        .header("Origin", origin)
        .header("Access-Control-Request-Method", method)
        .header("Access-Control-Request-Headers", "content-type")
        .body(Body::empty())
        .unwrap()
}

// ---------------------------------------------------------------------------
// Simple requests
// ---------------------------------------------------------------------------

#[tokio::test]
async fn request_without_origin_passes() {
    let response = get(build_test_app(), "/movies").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(response
        .headers()
        .get("access-control-allow-origin")
        .is_none());
}

#[tokio::test]
async fn allowed_origin_passes_with_cors_header() {
    for origin in [ALLOWED_ORIGIN, "http://localhost:1234", "https://movies.com"] {
        let request = request_with_origin(Method::GET, "/movies/1", origin);
        let response = send(build_test_app(), request).await;

        assert_eq!(response.status(), StatusCode::OK, "origin {origin}");
        let allow_origin = response
            .headers()
            .get("access-control-allow-origin")
            .expect("Missing Access-Control-Allow-Origin header")
            .to_str()
            .unwrap();
        assert_eq!(allow_origin, origin);
    }
}

#[tokio::test]
async fn disallowed_origin_is_rejected_before_handlers() {
    let request = request_with_origin(Method::DELETE, "/movies/1", "https://evil.example");
    let app = build_test_app();
    let response = send(app.clone(), request).await;

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    assert_eq!(body_bytes(response).await, REJECTION_MESSAGE.as_bytes());

    // The delete never reached the handler.
    assert_eq!(get(app, "/movies/1").await.status(), StatusCode::OK);
}

#[tokio::test]
async fn empty_origin_is_treated_as_absent() {
    let request = request_with_origin(Method::GET, "/movies", "");
    let response = send(build_test_app(), request).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert!(response
        .headers()
        .get("access-control-allow-origin")
        .is_none());
}

#[tokio::test]
async fn origin_match_is_exact() {
    let request = request_with_origin(Method::GET, "/movies", "https://movies.com.evil.example");
    let response = send(build_test_app(), request).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

// ---------------------------------------------------------------------------
// Preflight
// ---------------------------------------------------------------------------

#[tokio::test]
async fn preflight_from_allowed_origin_lists_methods() {
    let response = send(build_test_app(), preflight("/movies/1", ALLOWED_ORIGIN, "PATCH")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let headers = response.headers();
    assert_eq!(
        headers.get("access-control-allow-origin").unwrap(),
        ALLOWED_ORIGIN
    );
    let allow_methods = headers
        .get("access-control-allow-methods")
        .expect("Missing Access-Control-Allow-Methods header")
        .to_str()
        .unwrap();
    for method in ["GET", "POST", "PATCH", "DELETE", "OPTIONS"] {
        assert!(
            allow_methods.contains(method),
            "Allow-Methods should contain {method}, got: {allow_methods}"
        );
    }
}

#[tokio::test]
async fn preflight_from_disallowed_origin_is_rejected() {
    let response = send(
        build_test_app(),
        preflight("/movies/1", "http://localhost:3000", "DELETE"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}
