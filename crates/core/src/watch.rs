//! Provider payload coercion for recording a watch event.
//!
//! OMDb returns every field as free text (`"136 min"`, `"8.7"`,
//! `"N/A"`). Runtime and rating are parsed best-effort and default to
//! zero, matching what the watch log has always stored for `"N/A"`
//! values. Year is required to be numeric; a bad year is a
//! [`CoreError::Coercion`] that the handler surfaces as a 500.

use serde::Deserialize;

use crate::error::CoreError;

/// The `movieData` request body, shaped exactly like an OMDb detail
/// response so the frontend can pass provider objects straight through.
#[derive(Debug, Clone, Deserialize)]
pub struct MoviePayload {
    #[serde(rename = "Title", default)]
    pub title: Option<String>,
    #[serde(rename = "Year", default)]
    pub year: Option<String>,
    #[serde(rename = "imdbID", default)]
    pub imdb_id: Option<String>,
    #[serde(rename = "Director", default)]
    pub director: Option<String>,
    #[serde(rename = "Writer", default)]
    pub writer: Option<String>,
    #[serde(rename = "Actors", default)]
    pub actors: Option<String>,
    #[serde(rename = "Genre", default)]
    pub genre: Option<String>,
    #[serde(rename = "Runtime", default)]
    pub runtime: Option<String>,
    #[serde(rename = "imdbRating", default)]
    pub imdb_rating: Option<String>,
    #[serde(rename = "Plot", default)]
    pub plot: Option<String>,
    #[serde(rename = "Poster", default)]
    pub poster: Option<String>,
}

/// Parse a runtime string like `"136 min"` into whole minutes.
///
/// Takes the first whitespace-separated token; anything that is not an
/// integer (`"N/A"`, empty, missing) yields 0.
pub fn parse_runtime(raw: Option<&str>) -> i64 {
    raw.and_then(|s| s.split_whitespace().next())
        .and_then(|token| token.parse::<i64>().ok())
        .unwrap_or(0)
}

/// Parse an IMDb rating string into a float, defaulting to 0.0 for
/// `"N/A"` or missing values.
pub fn parse_rating(raw: Option<&str>) -> f64 {
    raw.and_then(|s| s.trim().parse::<f64>().ok()).unwrap_or(0.0)
}

/// Parse a release year. A missing year is stored as 0; a present but
/// non-numeric year (e.g. a series range like `"1999-2003"`) is a
/// coercion error.
pub fn parse_year(raw: Option<&str>) -> Result<i64, CoreError> {
    match raw {
        None => Ok(0),
        Some(s) => s
            .trim()
            .parse::<i64>()
            .map_err(|e| CoreError::Coercion(format!("Invalid year '{s}': {e}"))),
    }
}
