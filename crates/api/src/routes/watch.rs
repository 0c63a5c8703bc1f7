//! Watch-log endpoints: record, list, and delete watch events.

use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::routing::{delete, get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};

use cinetrack_core::error::CoreError;
use cinetrack_core::types::DbId;
use cinetrack_core::watch::MoviePayload;
use cinetrack_db::models::watched_movie::{NewWatchedMovie, WatchedMovie};
use cinetrack_db::repositories::{WatchOrder, WatchedMovieRepo};

use crate::error::AppResult;
use crate::state::AppState;

/// Request body for `POST /movie/watch`: a watch date plus the
/// provider-shaped movie object the frontend got from a detail lookup.
#[derive(Debug, Deserialize)]
pub struct WatchRequest {
    #[serde(rename = "watchDate")]
    pub watch_date: Option<String>,
    #[serde(rename = "movieData")]
    pub movie_data: Option<MoviePayload>,
}

/// `{ "success": true }` acknowledgement for writes.
#[derive(Debug, Serialize)]
struct SuccessResponse {
    success: bool,
}

/// POST /movie/watch -- append a watch event to the log.
async fn add_watched_movie(
    State(state): State<AppState>,
    body: Bytes,
) -> AppResult<Json<SuccessResponse>> {
    let body: WatchRequest = serde_json::from_slice(&body)
        .map_err(|_| CoreError::Validation("No data provided".to_string()))?;

    let Some(watch_date) = body.watch_date else {
        return Err(CoreError::Validation("No watch date provided".into()).into());
    };
    let Some(movie_data) = body.movie_data else {
        return Err(CoreError::Validation("No movie data provided".into()).into());
    };

    let record = NewWatchedMovie::from_payload(movie_data, watch_date)?;
    let row = WatchedMovieRepo::insert(&state.pool, &record).await?;
    tracing::debug!(id = row.id, title = %row.title, "Recorded watch event");

    Ok(Json(SuccessResponse { success: true }))
}

/// GET /movies/watched -- the full watch log, newest watch date first.
async fn get_watched_movies(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<WatchedMovie>>> {
    let rows = WatchedMovieRepo::list(&state.pool, WatchOrder::Descending).await?;

    Ok(Json(rows))
}

/// DELETE /movie/watch/{id} -- remove a watch event.
///
/// Deleting an id that is already gone still acknowledges success.
async fn delete_watched_movie(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<SuccessResponse>> {
    WatchedMovieRepo::delete(&state.pool, id).await?;

    Ok(Json(SuccessResponse { success: true }))
}

/// Mount the watch-log routes.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/movie/watch", post(add_watched_movie))
        .route("/movie/watch/{id}", delete(delete_watched_movie))
        .route("/movies/watched", get(get_watched_movies))
}
