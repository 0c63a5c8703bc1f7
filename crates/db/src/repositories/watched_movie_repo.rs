//! Repository for the `watched_movies` table.

use sqlx::SqlitePool;

use cinetrack_core::types::DbId;

use crate::models::watched_movie::{NewWatchedMovie, WatchedMovie};

const COLUMNS: &str = "id, imdb_id, title, year, director, writers, actors, genre, \
     runtime, rating, plot, poster_url, watch_date";

/// Ordering of the watch log by `watch_date`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WatchOrder {
    Ascending,
    Descending,
}

/// Provides the watch-log operations: insert, list, delete.
pub struct WatchedMovieRepo;

impl WatchedMovieRepo {
    /// Insert a new watch event, returning the created row with its
    /// store-assigned id.
    pub async fn insert(
        pool: &SqlitePool,
        input: &NewWatchedMovie,
    ) -> Result<WatchedMovie, sqlx::Error> {
        let query = format!(
            "INSERT INTO watched_movies \
                (imdb_id, title, year, director, writers, actors, genre, \
                 runtime, rating, plot, poster_url, watch_date) \
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, WatchedMovie>(&query)
            .bind(&input.imdb_id)
            .bind(&input.title)
            .bind(input.year)
            .bind(&input.director)
            .bind(&input.writers)
            .bind(&input.actors)
            .bind(&input.genre)
            .bind(input.runtime)
            .bind(input.rating)
            .bind(&input.plot)
            .bind(&input.poster_url)
            .bind(&input.watch_date)
            .fetch_one(pool)
            .await
    }

    /// List the full watch log ordered by `watch_date`.
    pub async fn list(
        pool: &SqlitePool,
        order: WatchOrder,
    ) -> Result<Vec<WatchedMovie>, sqlx::Error> {
        let order_clause = match order {
            WatchOrder::Ascending => "ASC",
            WatchOrder::Descending => "DESC",
        };

        let query = format!("SELECT {COLUMNS} FROM watched_movies ORDER BY watch_date {order_clause}");
        sqlx::query_as::<_, WatchedMovie>(&query)
            .fetch_all(pool)
            .await
    }

    /// Delete a watch event by id. Deleting an absent id is a no-op
    /// that still succeeds.
    pub async fn delete(pool: &SqlitePool, id: DbId) -> Result<(), sqlx::Error> {
        sqlx::query("DELETE FROM watched_movies WHERE id = ?")
            .bind(id)
            .execute(pool)
            .await?;

        Ok(())
    }
}
