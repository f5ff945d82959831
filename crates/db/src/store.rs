//! The ordered in-memory movie collection.
//!
//! `MovieStore` has no locking of its own; share it through
//! [`crate::SharedStore`] and hold the lock across any read-then-write.

use crate::models::movie::Movie;
use crate::seed::SeedError;

/// Ordered sequence of movies with unique ids.
#[derive(Debug, Clone, Default)]
pub struct MovieStore {
    movies: Vec<Movie>,
}

impl MovieStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from seed records, rejecting duplicate ids.
    pub fn from_seed(movies: Vec<Movie>) -> Result<Self, SeedError> {
        let mut store = Self::with_capacity(movies.len());
        for movie in movies {
            if store.find_index_by_id(&movie.id).is_some() {
                return Err(SeedError::DuplicateId(movie.id));
            }
            store.append(movie);
        }
        Ok(store)
    }

    fn with_capacity(capacity: usize) -> Self {
        Self {
            movies: Vec::with_capacity(capacity),
        }
    }

    /// All movies in store order.
    pub fn list(&self) -> &[Movie] {
        &self.movies
    }

    pub fn find_by_id(&self, id: &str) -> Option<&Movie> {
        self.movies.iter().find(|m| m.id == id)
    }

    pub fn find_index_by_id(&self, id: &str) -> Option<usize> {
        self.movies.iter().position(|m| m.id == id)
    }

    /// Append a movie. Callers guarantee its id is not already present.
    pub fn append(&mut self, movie: Movie) {
        debug_assert!(self.find_by_id(&movie.id).is_none(), "duplicate movie id");
        self.movies.push(movie);
    }

    /// Remove and return the movie at `index`, shifting later movies down.
    ///
    /// # Panics
    /// If `index` is out of bounds.
    pub fn remove_at(&mut self, index: usize) -> Movie {
        self.movies.remove(index)
    }

    /// Replace the movie at `index`, returning the previous record.
    ///
    /// # Panics
    /// If `index` is out of bounds.
    pub fn replace_at(&mut self, index: usize, movie: Movie) -> Movie {
        std::mem::replace(&mut self.movies[index], movie)
    }

    pub fn len(&self) -> usize {
        self.movies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }
}
