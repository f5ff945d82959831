//! Handlers for the movie collection.
//!
//! Bodies are bare JSON (no envelope): a movie, an array of movies, or a
//! `{"message": ...}` confirmation. Validation failures are returned as
//! `400 {"error": [...]}` by [`AppError`].

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use marquee_core::error::CoreError;
use marquee_core::validation::{validate_full, validate_partial};
use marquee_db::models::movie::MovieListParams;
use marquee_db::repositories::MovieRepo;
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::extract::JsonBody;
use crate::state::AppState;

/// Plain confirmation payload.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

/// GET /movies
///
/// List all movies in store order, or only those with a genre matching
/// `?genre=` (case-insensitive). Query pairs are read raw so a repeated
/// `genre` key cannot fail the request; the first value wins.
pub async fn list_movies(
    State(state): State<AppState>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> AppResult<impl IntoResponse> {
    let params = MovieListParams::from_query_pairs(pairs);
    let movies = MovieRepo::list(&state.store, &params).await;

    Ok(Json(movies))
}

/// GET /movies/{id}
pub async fn get_movie(
    State(state): State<AppState>,
    Path(movie_id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let movie = MovieRepo::find_by_id(&state.store, &movie_id)
        .await
        .ok_or_else(|| AppError::movie_not_found(&movie_id))?;

    Ok(Json(movie))
}

/// POST /movies
///
/// Validate the full payload and append it under a generated id.
pub async fn create_movie(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody,
) -> AppResult<impl IntoResponse> {
    let fields = validate_full(&payload).map_err(CoreError::from)?;
    let movie = MovieRepo::create(&state.store, fields).await;

    tracing::info!(movie_id = %movie.id, title = %movie.title, "Movie created");

    Ok((StatusCode::CREATED, Json(movie)))
}

/// PATCH /movies/{id}
///
/// Validate only the fields present, then merge them over the stored movie.
/// The body is validated before the id is looked up.
pub async fn update_movie(
    State(state): State<AppState>,
    Path(movie_id): Path<String>,
    JsonBody(payload): JsonBody,
) -> AppResult<impl IntoResponse> {
    let patch = validate_partial(&payload).map_err(CoreError::from)?;
    let movie = MovieRepo::update(&state.store, &movie_id, patch)
        .await
        .ok_or_else(|| AppError::movie_not_found(&movie_id))?;

    tracing::info!(movie_id = %movie.id, "Movie updated");

    Ok(Json(movie))
}

/// DELETE /movies/{id}
pub async fn delete_movie(
    State(state): State<AppState>,
    Path(movie_id): Path<String>,
) -> AppResult<impl IntoResponse> {
    if !MovieRepo::delete(&state.store, &movie_id).await {
        return Err(AppError::movie_not_found(movie_id));
    }

    tracing::info!(movie_id = %movie_id, "Movie deleted");

    Ok(Json(MessageResponse {
        message: "Movie deleted",
    }))
}
