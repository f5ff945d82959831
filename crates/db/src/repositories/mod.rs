//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async operations that
//! accept the store lock as the first argument.

pub mod movie_repo;

pub use movie_repo::MovieRepo;
