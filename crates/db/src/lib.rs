pub mod models;
pub mod repositories;

use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

pub type DbPool = sqlx::SqlitePool;

/// Create a connection pool from a database URL, creating the database
/// file if it does not exist yet.
pub async fn create_pool(database_url: &str) -> Result<DbPool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);

    SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await
}

/// Create the `watched_movies` table if it is absent. Runs at startup;
/// there is no further migration machinery.
pub async fn init_schema(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query(
        "CREATE TABLE IF NOT EXISTS watched_movies ( \
             id INTEGER PRIMARY KEY AUTOINCREMENT, \
             imdb_id TEXT NOT NULL, \
             title TEXT NOT NULL, \
             year INTEGER NOT NULL, \
             director TEXT NOT NULL, \
             writers TEXT NOT NULL, \
             actors TEXT NOT NULL, \
             genre TEXT NOT NULL, \
             runtime INTEGER NOT NULL, \
             rating REAL NOT NULL, \
             plot TEXT NOT NULL, \
             poster_url TEXT NOT NULL, \
             watch_date TEXT NOT NULL \
         )",
    )
    .execute(pool)
    .await?;

    Ok(())
}

/// Cheap connectivity probe used by the health endpoint.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}
