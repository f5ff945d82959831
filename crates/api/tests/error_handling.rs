//! Tests for `AppError` -> HTTP response mapping.
//!
//! These call `IntoResponse` directly on `AppError` values; no router is
//! involved.

use axum::http::StatusCode;
use axum::response::IntoResponse;
use http_body_util::BodyExt;
use marquee_api::error::AppError;
use marquee_core::error::CoreError;
use marquee_core::validation::validate_full;
use serde_json::json;

/// Convert an `AppError` into its status code and parsed JSON body.
async fn error_to_response(err: AppError) -> (StatusCode, serde_json::Value) {
    let response = err.into_response();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    (status, json)
}

#[tokio::test]
async fn not_found_error_returns_404_message() {
    let (status, json) = error_to_response(AppError::movie_not_found("42")).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json, json!({ "message": "Movie not found" }));
}

#[tokio::test]
async fn validation_error_returns_400_with_violation_list() {
    let failure = validate_full(&json!({ "title": "Only a title" })).unwrap_err();
    let expected = failure.violations.len();

    let (status, json) = error_to_response(AppError::Core(CoreError::Validation(failure))).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    let errors = json["error"].as_array().expect("error should be an array");
    assert_eq!(errors.len(), expected);
    for violation in errors {
        assert!(violation["field"].is_string());
        assert!(violation["code"].is_string());
        assert!(violation["message"].is_string());
    }
}

#[tokio::test]
async fn bad_request_error_returns_400_message() {
    let (status, json) = error_to_response(AppError::BadRequest("bad body".into())).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["message"], "bad body");
}
