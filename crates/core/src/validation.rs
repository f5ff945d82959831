//! Movie payload validation.
//!
//! An untyped JSON payload is decoded field by field into a typed
//! [`MovieCandidate`] (every field optional), then checked against the
//! per-field rules declared with `validator` attributes. The two entry
//! points differ only in whether absent fields are violations:
//!
//! - [`validate_full`] requires every field and yields [`MovieFields`].
//! - [`validate_partial`] accepts any subset and yields a [`MoviePatch`].
//!
//! Both return a [`ValidationFailure`] carrying every violation found, in
//! schema field order. Unknown keys (including a client-supplied `id`) are
//! ignored.

use std::borrow::Cow;
use std::fmt;

use chrono::Datelike;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use validator::{Validate, ValidationError, ValidationErrors};

use crate::genre::Genre;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Earliest accepted release year.
pub const MIN_YEAR: i32 = 1900;

/// Lowest accepted rating.
pub const MIN_RATE: f64 = 0.0;

/// Highest accepted rating.
pub const MAX_RATE: f64 = 10.0;

/// Pseudo-field used for violations about the payload as a whole.
pub const BODY_FIELD: &str = "body";

/// Movie fields in schema order. Violations are reported in this order.
pub const MOVIE_FIELDS: [&str; 7] = [
    "title", "year", "director", "duration", "poster", "genre", "rate",
];

/// Latest accepted release year: next calendar year (UTC).
pub fn max_year() -> i32 {
    chrono::Utc::now().year() + 1
}

// ---------------------------------------------------------------------------
// Violation types
// ---------------------------------------------------------------------------

/// A single field-level rule violation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldViolation {
    pub field: String,
    pub code: String,
    pub message: String,
}

impl FieldViolation {
    pub fn new(field: &str, code: &str, message: impl Into<String>) -> Self {
        Self {
            field: field.to_string(),
            code: code.to_string(),
            message: message.into(),
        }
    }
}

/// Every violation found in one payload. Never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationFailure {
    pub violations: Vec<FieldViolation>,
}

impl ValidationFailure {
    fn new(mut violations: Vec<FieldViolation>) -> Self {
        violations.sort_by_key(|v| field_rank(&v.field));
        Self { violations }
    }
}

impl fmt::Display for ValidationFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self
            .violations
            .iter()
            .map(|v| format!("{}: {}", v.field, v.message))
            .collect();
        f.write_str(&parts.join("; "))
    }
}

impl std::error::Error for ValidationFailure {}

fn field_rank(field: &str) -> usize {
    if field == BODY_FIELD {
        return 0;
    }
    MOVIE_FIELDS
        .iter()
        .position(|f| *f == field)
        .map_or(MOVIE_FIELDS.len() + 1, |i| i + 1)
}

// ---------------------------------------------------------------------------
// Candidate
// ---------------------------------------------------------------------------

/// A decoded, not yet validated movie payload.
#[derive(Debug, Clone, Default, PartialEq, Validate)]
pub struct MovieCandidate {
    #[validate(length(min = 1, message = "title must not be empty"))]
    pub title: Option<String>,

    #[validate(custom(function = "validate_year"))]
    pub year: Option<i32>,

    #[validate(length(min = 1, message = "director must not be empty"))]
    pub director: Option<String>,

    #[validate(range(min = 1, message = "duration must be at least 1 minute"))]
    pub duration: Option<u32>,

    #[validate(url(message = "poster must be a valid URL"))]
    pub poster: Option<String>,

    #[validate(length(min = 1, message = "genre must contain at least one genre"))]
    pub genre: Option<Vec<Genre>>,

    #[validate(range(min = 0.0, max = 10.0, message = "rate must be between 0 and 10"))]
    pub rate: Option<f64>,
}

fn validate_year(year: i32) -> Result<(), ValidationError> {
    let max = max_year();
    if year < MIN_YEAR || year > max {
        return Err(ValidationError::new("range").with_message(Cow::Owned(format!(
            "year must be between {MIN_YEAR} and {max}, got {year}"
        ))));
    }
    Ok(())
}

impl MovieCandidate {
    /// Decode the fields of a JSON object.
    ///
    /// Fields whose JSON value has the wrong type (or is `null`) are left
    /// `None` and reported as `invalid_type`; unknown genres are reported as
    /// `invalid_enum`. Duplicate genres collapse to their first occurrence.
    fn decode(obj: &Map<String, Value>, violations: &mut Vec<FieldViolation>) -> Self {
        Self {
            title: take(obj, "title", "a string", violations),
            year: take_whole(obj, "year", "an integer", violations),
            director: take(obj, "director", "a string", violations),
            duration: take_whole(obj, "duration", "a positive integer", violations),
            poster: take(obj, "poster", "a string", violations),
            genre: take::<Vec<String>>(obj, "genre", "an array of strings", violations)
                .and_then(|names| parse_genres(&names, violations)),
            rate: take(obj, "rate", "a number", violations),
        }
    }

    /// Names of schema fields that are absent from this candidate.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let present = [
            self.title.is_some(),
            self.year.is_some(),
            self.director.is_some(),
            self.duration.is_some(),
            self.poster.is_some(),
            self.genre.is_some(),
            self.rate.is_some(),
        ];
        MOVIE_FIELDS
            .iter()
            .zip(present)
            .filter(|(_, present)| !present)
            .map(|(name, _)| *name)
            .collect()
    }

    /// Run the declared per-field rules, returning violations (possibly empty).
    fn rule_violations(&self) -> Vec<FieldViolation> {
        match self.validate() {
            Ok(()) => Vec::new(),
            Err(errors) => violations_from(&errors),
        }
    }
}

fn take<T: DeserializeOwned>(
    obj: &Map<String, Value>,
    field: &'static str,
    expected: &str,
    violations: &mut Vec<FieldViolation>,
) -> Option<T> {
    let value = obj.get(field)?;
    match T::deserialize(value) {
        Ok(v) => Some(v),
        Err(_) => {
            violations.push(FieldViolation::new(
                field,
                "invalid_type",
                format!("{field} must be {expected}"),
            ));
            None
        }
    }
}

/// Decode an integer field. JSON has a single number type, so `1972.0` is
/// the same value as `1972`; only a fractional part or an out-of-range value
/// is a type error.
fn take_whole<T: TryFrom<i64>>(
    obj: &Map<String, Value>,
    field: &'static str,
    expected: &str,
    violations: &mut Vec<FieldViolation>,
) -> Option<T> {
    let value = obj.get(field)?;
    let whole = value.as_i64().or_else(|| {
        value
            .as_f64()
            .filter(|n| n.fract() == 0.0)
            .map(|n| n as i64)
    });

    match whole.and_then(|n| T::try_from(n).ok()) {
        Some(v) => Some(v),
        None => {
            violations.push(FieldViolation::new(
                field,
                "invalid_type",
                format!("{field} must be {expected}"),
            ));
            None
        }
    }
}

fn parse_genres(names: &[String], violations: &mut Vec<FieldViolation>) -> Option<Vec<Genre>> {
    let mut genres: Vec<Genre> = Vec::with_capacity(names.len());
    let mut all_known = true;

    for name in names {
        match name.parse::<Genre>() {
            Ok(g) => {
                if !genres.contains(&g) {
                    genres.push(g);
                }
            }
            Err(e) => {
                all_known = false;
                violations.push(FieldViolation::new(
                    "genre",
                    "invalid_enum",
                    format!("{e}. Must be one of: {}", Genre::allowed_list()),
                ));
            }
        }
    }

    all_known.then_some(genres)
}

fn violations_from(errors: &ValidationErrors) -> Vec<FieldViolation> {
    errors
        .field_errors()
        .into_iter()
        .flat_map(|(field, errs)| {
            let field = field.to_string();
            errs.iter().map(move |e| FieldViolation {
                field: field.clone(),
                code: e.code.to_string(),
                message: e
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("{field} is invalid")),
            })
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Validated outputs
// ---------------------------------------------------------------------------

/// A complete, validated set of movie fields (everything except `id`).
#[derive(Debug, Clone, PartialEq)]
pub struct MovieFields {
    pub title: String,
    pub year: i32,
    pub director: String,
    pub duration: u32,
    pub poster: String,
    pub genre: Vec<Genre>,
    pub rate: f64,
}

/// A validated partial update. Absent fields are left untouched on merge.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MoviePatch {
    pub title: Option<String>,
    pub year: Option<i32>,
    pub director: Option<String>,
    pub duration: Option<u32>,
    pub poster: Option<String>,
    pub genre: Option<Vec<Genre>>,
    pub rate: Option<f64>,
}

impl MoviePatch {
    /// True when the patch changes nothing.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

impl From<MovieCandidate> for MoviePatch {
    fn from(c: MovieCandidate) -> Self {
        Self {
            title: c.title,
            year: c.year,
            director: c.director,
            duration: c.duration,
            poster: c.poster,
            genre: c.genre,
            rate: c.rate,
        }
    }
}

// ---------------------------------------------------------------------------
// Entry points
// ---------------------------------------------------------------------------

/// Validate a create payload: every field must be present and valid.
pub fn validate_full(payload: &Value) -> Result<MovieFields, ValidationFailure> {
    let candidate = decode_and_check(payload, true)?;

    match candidate {
        MovieCandidate {
            title: Some(title),
            year: Some(year),
            director: Some(director),
            duration: Some(duration),
            poster: Some(poster),
            genre: Some(genre),
            rate: Some(rate),
        } => Ok(MovieFields {
            title,
            year,
            director,
            duration,
            poster,
            genre,
            rate,
        }),
        // decode_and_check reports every absent field when `require_all` is set.
        other => Err(ValidationFailure::new(
            other
                .missing_fields()
                .into_iter()
                .map(required_violation)
                .collect(),
        )),
    }
}

/// Validate a patch payload: any subset of fields, each checked if present.
///
/// An empty object is accepted and yields an empty patch.
pub fn validate_partial(payload: &Value) -> Result<MoviePatch, ValidationFailure> {
    decode_and_check(payload, false).map(MoviePatch::from)
}

fn decode_and_check(payload: &Value, require_all: bool) -> Result<MovieCandidate, ValidationFailure> {
    let Some(obj) = payload.as_object() else {
        return Err(ValidationFailure::new(vec![FieldViolation::new(
            BODY_FIELD,
            "invalid_type",
            "body must be a JSON object",
        )]));
    };

    let mut violations = Vec::new();
    let candidate = MovieCandidate::decode(obj, &mut violations);

    if require_all {
        violations.extend(
            MOVIE_FIELDS
                .iter()
                .filter(|f| !obj.contains_key(**f))
                .map(|f| required_violation(f)),
        );
    }

    violations.extend(candidate.rule_violations());

    if violations.is_empty() {
        Ok(candidate)
    } else {
        Err(ValidationFailure::new(violations))
    }
}

fn required_violation(field: &str) -> FieldViolation {
    FieldViolation::new(field, "required", format!("{field} is required"))
}
