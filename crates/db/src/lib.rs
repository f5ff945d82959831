//! In-memory movie storage: the movie model, the store, seed loading, and
//! the repository layer handlers call into.

use std::sync::Arc;

use tokio::sync::RwLock;

pub mod models;
pub mod repositories;
pub mod seed;
pub mod store;

pub use store::MovieStore;

/// The store handle shared across request handlers.
pub type SharedStore = Arc<RwLock<MovieStore>>;

/// Wrap a store so it can be shared across handlers.
pub fn create_store(store: MovieStore) -> SharedStore {
    Arc::new(RwLock::new(store))
}
