//! Shared helpers for the API integration tests.
//!
//! `build_test_app` mirrors the router construction in `main.rs` so
//! tests exercise the same middleware stack (CORS, request ID,
//! timeout, tracing, panic recovery) that production uses.

#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use sqlx::SqlitePool;
use tower::ServiceExt;

use cinetrack_api::config::ServerConfig;
use cinetrack_api::router::build_app_router;
use cinetrack_api::state::AppState;
use cinetrack_omdb::OmdbApi;

/// Build a test `ServerConfig` with safe defaults.
///
/// The OMDb base URL points at an unroutable local port: tests that
/// must never reach the provider fail loudly if a handler tries.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        database_url: "sqlite::memory:".to_string(),
        omdb_api_key: "test-key".to_string(),
        omdb_base_url: "http://127.0.0.1:9/".to_string(),
        request_timeout_secs: 30,
    }
}

/// Build the full application router against the given pool, creating
/// the schema first.
pub async fn build_test_app(pool: SqlitePool) -> Router {
    let config = test_config();
    build_test_app_with_omdb(pool, config.omdb_base_url).await
}

/// Like [`build_test_app`], but pointing the OMDb client at the given
/// base URL (a stub upstream).
pub async fn build_test_app_with_omdb(pool: SqlitePool, omdb_base_url: String) -> Router {
    cinetrack_db::init_schema(&pool)
        .await
        .expect("Failed to create schema");

    let mut config = test_config();
    config.omdb_base_url = omdb_base_url;

    let omdb = Arc::new(OmdbApi::new(
        config.omdb_base_url.clone(),
        config.omdb_api_key.clone(),
    ));
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
        omdb,
    };

    build_app_router(state, &config)
}

/// Serve a stub OMDb upstream returning the given JSON for every
/// request, on an ephemeral local port. Returns its base URL.
pub async fn spawn_omdb_stub(status: axum::http::StatusCode, body: serde_json::Value) -> String {
    let app = Router::new().route(
        "/",
        axum::routing::get(move || {
            let body = body.clone();
            async move { (status, axum::Json(body)) }
        }),
    );

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://{addr}/")
}

/// Issue a GET request against the app.
pub async fn get(app: Router, uri: &str) -> Response {
    app.oneshot(
        Request::builder()
            .method(Method::GET)
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    )
    .await
    .unwrap()
}

/// Issue a DELETE request against the app.
pub async fn delete(app: Router, uri: &str) -> Response {
    app.oneshot(
        Request::builder()
            .method(Method::DELETE)
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    )
    .await
    .unwrap()
}

/// Issue a POST request with a JSON body.
pub async fn post_json(app: Router, uri: &str, body: &serde_json::Value) -> Response {
    app.oneshot(
        Request::builder()
            .method(Method::POST)
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
    .unwrap()
}

/// Issue a POST request with no body at all.
pub async fn post_empty(app: Router, uri: &str) -> Response {
    app.oneshot(
        Request::builder()
            .method(Method::POST)
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    )
    .await
    .unwrap()
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// A watch request body matching the shape the frontend sends.
pub fn sample_watch_body(title: &str, watch_date: &str) -> serde_json::Value {
    serde_json::json!({
        "watchDate": watch_date,
        "movieData": {
            "Title": title,
            "Year": "1999",
            "imdbID": "tt0133093",
            "Director": "Lana Wachowski, Lilly Wachowski",
            "Writer": "Lana Wachowski, Lilly Wachowski",
            "Actors": "Keanu Reeves, Laurence Fishburne, Carrie-Anne Moss",
            "Plot": "A computer programmer discovers a mysterious world...",
            "Genre": "Action, Sci-Fi",
            "Runtime": "136 min",
            "imdbRating": "8.7",
            "Poster": "https://example.com/matrix.jpg"
        }
    })
}
