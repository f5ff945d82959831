//! Movie model and list query parameters.

use marquee_core::genre::Genre;
use marquee_core::types::MovieId;
use marquee_core::validation::{MovieFields, MoviePatch};
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Entity
// ---------------------------------------------------------------------------

/// A stored movie record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    pub id: MovieId,
    pub title: String,
    pub year: i32,
    pub director: String,
    pub duration: u32,
    pub poster: String,
    pub genre: Vec<Genre>,
    pub rate: f64,
}

impl Movie {
    /// Build a record from validated fields and an assigned id.
    pub fn from_fields(id: MovieId, fields: MovieFields) -> Self {
        Self {
            id,
            title: fields.title,
            year: fields.year,
            director: fields.director,
            duration: fields.duration,
            poster: fields.poster,
            genre: fields.genre,
            rate: fields.rate,
        }
    }

    /// Overwrite every field present in `patch`. The id never changes.
    pub fn apply_patch(&mut self, patch: MoviePatch) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(year) = patch.year {
            self.year = year;
        }
        if let Some(director) = patch.director {
            self.director = director;
        }
        if let Some(duration) = patch.duration {
            self.duration = duration;
        }
        if let Some(poster) = patch.poster {
            self.poster = poster;
        }
        if let Some(genre) = patch.genre {
            self.genre = genre;
        }
        if let Some(rate) = patch.rate {
            self.rate = rate;
        }
    }

    /// True if any of this movie's genres equals `token`, ignoring case.
    pub fn has_genre(&self, token: &str) -> bool {
        self.genre.iter().any(|g| g.matches(token))
    }
}

// ---------------------------------------------------------------------------
// Query DTOs
// ---------------------------------------------------------------------------

/// Query parameters for `GET /movies`.
#[derive(Debug, Clone, Default)]
pub struct MovieListParams {
    /// Case-insensitive genre filter. Empty is treated as absent.
    pub genre: Option<String>,
}

impl MovieListParams {
    /// Build params from raw query pairs. A repeated `genre` key keeps its
    /// first value; unknown keys are ignored.
    pub fn from_query_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let genre = pairs
            .into_iter()
            .find(|(key, _)| key == "genre")
            .map(|(_, value)| value);
        Self { genre }
    }

    /// The effective genre filter, if any.
    pub fn genre_filter(&self) -> Option<&str> {
        self.genre.as_deref().filter(|g| !g.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Movie {
        Movie {
            id: "1".into(),
            title: "Heat".into(),
            year: 1995,
            director: "Michael Mann".into(),
            duration: 170,
            poster: "https://example.com/heat.jpg".into(),
            genre: vec![Genre::Drama, Genre::Action],
            rate: 8.3,
        }
    }

    #[test]
    fn apply_patch_overwrites_only_present_fields() {
        let mut movie = sample();
        movie.apply_patch(MoviePatch {
            year: Some(1999),
            ..Default::default()
        });

        let mut expected = sample();
        expected.year = 1999;
        assert_eq!(movie, expected);
    }

    #[test]
    fn empty_patch_is_a_no_op() {
        let mut movie = sample();
        movie.apply_patch(MoviePatch::default());
        assert_eq!(movie, sample());
    }

    #[test]
    fn has_genre_ignores_case() {
        let movie = sample();
        assert!(movie.has_genre("drama"));
        assert!(movie.has_genre("ACTION"));
        assert!(!movie.has_genre("Comedy"));
    }

    #[test]
    fn serializes_id_first_with_canonical_genres() {
        let json = serde_json::to_string(&sample()).unwrap();
        assert!(json.starts_with("{\"id\":\"1\""));
        assert!(json.contains("\"genre\":[\"Drama\",\"Action\"]"));
    }

    #[test]
    fn empty_genre_param_is_no_filter() {
        let params = MovieListParams {
            genre: Some(String::new()),
        };
        assert_eq!(params.genre_filter(), None);
    }

    #[test]
    fn query_pairs_keep_first_genre() {
        let params = MovieListParams::from_query_pairs(vec![
            ("sort".to_string(), "year".to_string()),
            ("genre".to_string(), "Drama".to_string()),
            ("genre".to_string(), "Action".to_string()),
        ]);
        assert_eq!(params.genre_filter(), Some("Drama"));
    }

    #[test]
    fn query_pairs_without_genre_have_no_filter() {
        let params = MovieListParams::from_query_pairs(Vec::new());
        assert_eq!(params.genre_filter(), None);
    }
}
