//! Visualization data endpoint: recomputes all three aggregates over
//! the full watch history on every request.

use axum::extract::State;
use axum::{routing::get, Json, Router};
use chrono::NaiveDate;
use indexmap::IndexMap;
use serde::Serialize;

use cinetrack_core::error::CoreError;
use cinetrack_core::viz::{
    build_creators_network, build_runtime_distribution, build_viewing_patterns, CreatorsNetwork,
    ViewingPattern, WatchRecord,
};
use cinetrack_db::models::watched_movie::WatchedMovie;
use cinetrack_db::repositories::{WatchOrder, WatchedMovieRepo};

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Response for `GET /visualizations/data`.
#[derive(Debug, Serialize)]
pub struct VisualizationData {
    pub creators_network: CreatorsNetwork,
    pub viewing_patterns: Vec<ViewingPattern>,
    pub runtime_distribution: IndexMap<String, Vec<i64>>,
}

/// Project a stored row into the aggregation input, parsing the watch
/// date up front so the aggregation functions stay total.
fn to_watch_record(row: WatchedMovie) -> Result<WatchRecord, AppError> {
    let watch_date = NaiveDate::parse_from_str(&row.watch_date, "%Y-%m-%d").map_err(|e| {
        CoreError::Internal(format!("Invalid watch_date '{}': {e}", row.watch_date))
    })?;

    Ok(WatchRecord {
        title: row.title,
        director: row.director,
        writers: row.writers,
        genre: row.genre,
        runtime: row.runtime,
        watch_date,
    })
}

/// GET /visualizations/data -- creator network, weekly viewing
/// cadence, and runtime-by-genre distribution over the whole log.
async fn visualization_data(
    State(state): State<AppState>,
) -> AppResult<Json<VisualizationData>> {
    let rows = WatchedMovieRepo::list(&state.pool, WatchOrder::Ascending).await?;

    let records = rows
        .into_iter()
        .map(to_watch_record)
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Json(VisualizationData {
        creators_network: build_creators_network(&records),
        viewing_patterns: build_viewing_patterns(&records),
        runtime_distribution: build_runtime_distribution(&records),
    }))
}

/// Mount the visualization route.
pub fn router() -> Router<AppState> {
    Router::new().route("/visualizations/data", get(visualization_data))
}
