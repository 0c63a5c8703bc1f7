//! OMDb proxy endpoints: title search and by-id detail lookup.
//!
//! Both relay the provider's JSON unmodified -- the provider's response
//! shape is the service's own response shape, including OMDb-native
//! `"Response": "False"` error payloads on a 200 status.

use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Deserialize;
use serde_json::Value;

use cinetrack_core::error::CoreError;

use crate::error::AppResult;
use crate::state::AppState;

/// Request body for `POST /search`.
#[derive(Debug, Deserialize)]
pub struct SearchRequest {
    pub query: Option<String>,
}

/// POST /search -- proxy a free-text title search to OMDb.
///
/// A missing/unparseable body or missing/empty `query` is rejected
/// with 400 before the provider is contacted. The body is read as raw
/// bytes so those rejections share the `{ "error": ... }` shape
/// instead of the framework's default rejection.
async fn search_movies(State(state): State<AppState>, body: Bytes) -> AppResult<Json<Value>> {
    let body: SearchRequest = serde_json::from_slice(&body)
        .map_err(|_| CoreError::Validation("No data provided".to_string()))?;

    let query = body.query.unwrap_or_default();
    if query.is_empty() {
        return Err(CoreError::Validation("No query provided".into()).into());
    }

    tracing::debug!(%query, "Proxying OMDb title search");
    let envelope = state.omdb.search(&query).await?;

    Ok(Json(envelope))
}

/// GET /movie/{imdb_id} -- proxy a full-plot detail lookup to OMDb.
async fn get_movie_details(
    State(state): State<AppState>,
    Path(imdb_id): Path<String>,
) -> AppResult<Json<Value>> {
    let detail = state.omdb.find_by_id(&imdb_id).await?;

    Ok(Json(detail))
}

/// Mount the OMDb proxy routes.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/search", post(search_movies))
        .route("/movie/{imdb_id}", get(get_movie_details))
}
