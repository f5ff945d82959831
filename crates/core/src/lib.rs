//! Pure domain logic for the movie catalogue: error taxonomy, the genre
//! enumeration, and payload validation. No I/O lives here.

pub mod error;
pub mod genre;
pub mod types;
pub mod validation;
