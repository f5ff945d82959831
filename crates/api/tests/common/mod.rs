//! Shared helpers for HTTP-level integration tests.
//!
//! Every test builds its own router over its own store, so tests never see
//! each other's mutations.

#![allow(dead_code)]

use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use marquee_api::config::ServerConfig;
use marquee_api::router::build_app_router;
use marquee_api::state::AppState;
use marquee_core::genre::Genre;
use marquee_db::models::movie::Movie;
use marquee_db::{create_store, MovieStore, SharedStore};
use serde_json::Value;
use tower::ServiceExt;

/// An allow-listed origin under the default configuration.
pub const ALLOWED_ORIGIN: &str = "http://localhost:8080";

/// Build a test `ServerConfig` with the default origin allow-list.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        ..ServerConfig::default()
    }
}

/// The single-movie seed used by most tests: id `"1"`, Drama + Action.
pub fn seed_movie() -> Movie {
    Movie {
        id: "1".to_string(),
        title: "Heat".to_string(),
        year: 1995,
        director: "Michael Mann".to_string(),
        duration: 170,
        poster: "https://example.com/heat.jpg".to_string(),
        genre: vec![Genre::Drama, Genre::Action],
        rate: 8.3,
    }
}

/// A second seed movie with no Drama genre.
pub fn comedy_movie() -> Movie {
    Movie {
        id: "2".to_string(),
        title: "Groundhog Day".to_string(),
        year: 1993,
        director: "Harold Ramis".to_string(),
        duration: 101,
        poster: "https://example.com/groundhog.jpg".to_string(),
        genre: vec![Genre::Comedy, Genre::Fantasy],
        rate: 8.0,
    }
}

/// Build the full application router over a store seeded with `movies`.
///
/// Returns the store handle too so tests can assert on it directly.
pub fn build_test_app_with(movies: Vec<Movie>) -> (Router, SharedStore) {
    let store = create_store(MovieStore::from_seed(movies).expect("seed ids must be unique"));
    let app = build_app_router(AppState::new(store.clone(), test_config()));
    (app, store)
}

/// Build the full application router over the single [`seed_movie`].
pub fn build_test_app() -> Router {
    build_test_app_with(vec![seed_movie()]).0
}

/// A valid create payload.
pub fn new_movie_payload() -> Value {
    serde_json::json!({
        "title": "The Godfather",
        "year": 1972,
        "director": "Francis Ford Coppola",
        "duration": 175,
        "poster": "https://example.com/godfather.jpg",
        "genre": ["Crime", "Drama"],
        "rate": 9.2
    })
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

pub async fn send(app: Router, request: Request<Body>) -> Response<Body> {
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

pub async fn delete(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::DELETE)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

pub async fn post_json(app: Router, uri: &str, body: Value) -> Response<Body> {
    send_json(app, Method::POST, uri, body).await
}

pub async fn patch_json(app: Router, uri: &str, body: Value) -> Response<Body> {
    send_json(app, Method::PATCH, uri, body).await
}

async fn send_json(app: Router, method: Method, uri: &str, body: Value) -> Response<Body> {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

/// Collect a response body into bytes.
pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec()
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}
