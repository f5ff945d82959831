//! The closed genre enumeration a movie's `genre` set is drawn from.
//!
//! Input strings are matched case-insensitively and normalized to the
//! canonical spelling returned by [`Genre::as_str`].

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Genre
// ---------------------------------------------------------------------------

/// A permitted movie genre.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Genre {
    Action,
    Adventure,
    Animation,
    Biography,
    Comedy,
    Crime,
    Drama,
    Fantasy,
    Horror,
    Romance,
    #[serde(rename = "Sci-Fi")]
    SciFi,
    Thriller,
}

impl Genre {
    /// Every genre, in canonical order.
    pub const ALL: [Genre; 12] = [
        Genre::Action,
        Genre::Adventure,
        Genre::Animation,
        Genre::Biography,
        Genre::Comedy,
        Genre::Crime,
        Genre::Drama,
        Genre::Fantasy,
        Genre::Horror,
        Genre::Romance,
        Genre::SciFi,
        Genre::Thriller,
    ];

    /// Canonical spelling, as serialized in JSON.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Action => "Action",
            Self::Adventure => "Adventure",
            Self::Animation => "Animation",
            Self::Biography => "Biography",
            Self::Comedy => "Comedy",
            Self::Crime => "Crime",
            Self::Drama => "Drama",
            Self::Fantasy => "Fantasy",
            Self::Horror => "Horror",
            Self::Romance => "Romance",
            Self::SciFi => "Sci-Fi",
            Self::Thriller => "Thriller",
        }
    }

    /// Case-insensitive exact comparison against a query token.
    pub fn matches(&self, token: &str) -> bool {
        self.as_str().eq_ignore_ascii_case(token)
    }

    /// Comma-separated list of canonical names, for error messages.
    pub fn allowed_list() -> String {
        Self::ALL
            .iter()
            .map(Genre::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for Genre {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string is not one of the permitted genres.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invalid genre '{0}'")]
pub struct UnknownGenre(pub String);

impl FromStr for Genre {
    type Err = UnknownGenre;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|g| g.matches(s))
            .ok_or_else(|| UnknownGenre(s.to_string()))
    }
}
