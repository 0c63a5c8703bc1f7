//! Watch-log row model and insert DTO.

use serde::Serialize;
use sqlx::FromRow;

use cinetrack_core::error::CoreError;
use cinetrack_core::types::DbId;
use cinetrack_core::watch::{parse_rating, parse_runtime, parse_year, MoviePayload};

/// A row from the `watched_movies` table. One row per watch event;
/// append-only, immutable except for deletion.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct WatchedMovie {
    pub id: DbId,
    pub imdb_id: String,
    pub title: String,
    pub year: i64,
    /// Comma-separated name list, stored as free text.
    pub director: String,
    pub writers: String,
    pub actors: String,
    /// Comma-separated genre list, stored as free text.
    pub genre: String,
    /// Whole minutes; 0 when the provider value was unparseable.
    pub runtime: i64,
    pub rating: f64,
    pub plot: String,
    pub poster_url: String,
    /// `YYYY-MM-DD`.
    pub watch_date: String,
}

/// DTO for inserting a watch event.
#[derive(Debug, Clone)]
pub struct NewWatchedMovie {
    pub imdb_id: String,
    pub title: String,
    pub year: i64,
    pub director: String,
    pub writers: String,
    pub actors: String,
    pub genre: String,
    pub runtime: i64,
    pub rating: f64,
    pub plot: String,
    pub poster_url: String,
    pub watch_date: String,
}

impl NewWatchedMovie {
    /// Build an insertable record from a provider-shaped payload,
    /// coercing the numeric fields. Runtime and rating degrade to zero;
    /// a non-numeric year is a [`CoreError::Coercion`].
    pub fn from_payload(movie: MoviePayload, watch_date: String) -> Result<Self, CoreError> {
        let year = parse_year(movie.year.as_deref())?;
        let runtime = parse_runtime(movie.runtime.as_deref());
        let rating = parse_rating(movie.imdb_rating.as_deref());

        Ok(Self {
            imdb_id: movie.imdb_id.unwrap_or_default(),
            title: movie.title.unwrap_or_default(),
            year,
            director: movie.director.unwrap_or_default(),
            writers: movie.writer.unwrap_or_default(),
            actors: movie.actors.unwrap_or_default(),
            genre: movie.genre.unwrap_or_default(),
            runtime,
            rating,
            plot: movie.plot.unwrap_or_default(),
            poster_url: movie.poster.unwrap_or_default(),
            watch_date,
        })
    }
}
