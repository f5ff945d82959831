//! Repository for the movie collection.
//!
//! Composes the [`MovieStore`] primitives into the resource operations the
//! HTTP layer exposes. Every mutating operation holds the write lock for its
//! whole lookup-then-mutate sequence.

use marquee_core::validation::{MovieFields, MoviePatch};
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::models::movie::{Movie, MovieListParams};
use crate::store::MovieStore;

/// Provides access to the movie collection.
pub struct MovieRepo;

impl MovieRepo {
    /// List movies in store order, optionally filtered by genre.
    ///
    /// A movie is included when any of its genres equals the filter,
    /// ignoring case.
    pub async fn list(store: &RwLock<MovieStore>, params: &MovieListParams) -> Vec<Movie> {
        let store = store.read().await;
        match params.genre_filter() {
            Some(genre) => store
                .list()
                .iter()
                .filter(|m| m.has_genre(genre))
                .cloned()
                .collect(),
            None => store.list().to_vec(),
        }
    }

    /// Number of stored movies.
    pub async fn count(store: &RwLock<MovieStore>) -> usize {
        store.read().await.len()
    }

    /// Find a movie by exact id.
    pub async fn find_by_id(store: &RwLock<MovieStore>, id: &str) -> Option<Movie> {
        store.read().await.find_by_id(id).cloned()
    }

    /// Append a new movie with a freshly generated id.
    pub async fn create(store: &RwLock<MovieStore>, fields: MovieFields) -> Movie {
        let mut store = store.write().await;

        let mut id = Uuid::new_v4().to_string();
        while store.find_by_id(&id).is_some() {
            id = Uuid::new_v4().to_string();
        }

        let movie = Movie::from_fields(id, fields);
        store.append(movie.clone());
        movie
    }

    /// Merge `patch` over the movie with `id`.
    ///
    /// Returns `None` if no movie has that id.
    pub async fn update(
        store: &RwLock<MovieStore>,
        id: &str,
        patch: MoviePatch,
    ) -> Option<Movie> {
        let mut store = store.write().await;
        let index = store.find_index_by_id(id)?;

        let mut updated = store.list()[index].clone();
        updated.apply_patch(patch);
        store.replace_at(index, updated.clone());
        Some(updated)
    }

    /// Remove the movie with `id`.
    ///
    /// Returns `true` if a movie was removed.
    pub async fn delete(store: &RwLock<MovieStore>, id: &str) -> bool {
        let mut store = store.write().await;
        match store.find_index_by_id(id) {
            Some(index) => {
                store.remove_at(index);
                true
            }
            None => false,
        }
    }
}
