pub mod health;
pub mod pages;
pub mod search;
pub mod visualizations;
pub mod watch;

use axum::Router;

use crate::state::AppState;

/// Build the application route tree.
///
/// Route hierarchy:
///
/// ```text
/// /                        landing page (GET)
/// /health                  service + database health (GET)
///
/// /search                  OMDb title search proxy (POST)
/// /movie/{imdb_id}         OMDb detail proxy (GET)
///
/// /movie/watch             record a watch event (POST)
/// /movie/watch/{id}        delete a watch event (DELETE)
/// /movies/watched          full watch log, newest first (GET)
///
/// /visualizations/data     aggregated network/patterns/distribution (GET)
/// ```
pub fn app_routes() -> Router<AppState> {
    Router::new()
        .merge(pages::router())
        .merge(health::router())
        .merge(search::router())
        .merge(watch::router())
        .merge(visualizations::router())
}
