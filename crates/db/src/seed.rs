//! Seed dataset loading.
//!
//! The store is seeded once at startup, either from the dataset embedded at
//! build time or from a JSON file given by `MOVIES_SEED_PATH`. Every seed
//! record must carry a string `id` and pass full validation.

use std::path::{Path, PathBuf};

use marquee_core::types::MovieId;
use marquee_core::validation::{validate_full, ValidationFailure};
use serde_json::Value;

use crate::models::movie::Movie;
use crate::store::MovieStore;

/// Dataset compiled into the binary.
pub const EMBEDDED_MOVIES: &str = include_str!("../data/movies.json");

#[derive(Debug, thiserror::Error)]
pub enum SeedError {
    #[error("Failed to read seed file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Seed dataset is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Seed dataset must be a JSON array of movies")]
    NotAnArray,

    #[error("Seed movie #{index} has no string id")]
    MissingId { index: usize },

    #[error("Seed movie #{index} ({id}) is invalid: {failure}")]
    Invalid {
        index: usize,
        id: MovieId,
        #[source]
        failure: ValidationFailure,
    },

    #[error("Duplicate movie id '{0}' in seed dataset")]
    DuplicateId(MovieId),
}

/// Parse and validate a JSON array of movie records.
pub fn parse_movies(json: &str) -> Result<Vec<Movie>, SeedError> {
    let value: Value = serde_json::from_str(json)?;
    let Value::Array(records) = value else {
        return Err(SeedError::NotAnArray);
    };

    records
        .iter()
        .enumerate()
        .map(|(index, record)| {
            let id = record
                .get("id")
                .and_then(Value::as_str)
                .filter(|id| !id.is_empty())
                .ok_or(SeedError::MissingId { index })?
                .to_string();
            let fields = validate_full(record).map_err(|failure| SeedError::Invalid {
                index,
                id: id.clone(),
                failure,
            })?;
            Ok(Movie::from_fields(id, fields))
        })
        .collect()
}

/// Build a store from the embedded dataset.
pub fn load_embedded() -> Result<MovieStore, SeedError> {
    MovieStore::from_seed(parse_movies(EMBEDDED_MOVIES)?)
}

/// Build a store from a JSON file on disk.
pub async fn load_from_path(path: &Path) -> Result<MovieStore, SeedError> {
    let json = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| SeedError::Io {
            path: path.to_path_buf(),
            source,
        })?;
    MovieStore::from_seed(parse_movies(&json)?)
}

/// Build the startup store: from `path` when given, otherwise embedded.
pub async fn load(path: Option<&Path>) -> Result<MovieStore, SeedError> {
    let store = match path {
        Some(path) => load_from_path(path).await?,
        None => load_embedded()?,
    };
    tracing::info!(
        movies = store.len(),
        source = %path.map_or_else(|| "embedded".to_string(), |p| p.display().to_string()),
        "Movie store seeded",
    );
    Ok(store)
}
