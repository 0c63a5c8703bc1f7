//! Integration tests for the watch-log endpoints.

mod common;

use axum::http::StatusCode;
use common::{body_json, delete, get, post_empty, post_json, sample_watch_body};
use serde_json::json;
use sqlx::SqlitePool;

#[sqlx::test]
async fn add_watch_then_list_round_trips(pool: SqlitePool) {
    let app = common::build_test_app(pool).await;

    let response = post_json(
        app.clone(),
        "/movie/watch",
        &sample_watch_body("The Matrix", "2024-10-23"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!({"success": true}));

    let response = get(app, "/movies/watched").await;
    assert_eq!(response.status(), StatusCode::OK);

    let list = body_json(response).await;
    let list = list.as_array().unwrap();
    assert_eq!(list.len(), 1);
    assert_eq!(list[0]["title"], "The Matrix");
    assert_eq!(list[0]["watch_date"], "2024-10-23");
    assert_eq!(list[0]["runtime"], 136);
    assert_eq!(list[0]["rating"], 8.7);
    assert_eq!(list[0]["year"], 1999);
}

#[sqlx::test]
async fn repeated_watches_append_without_dedup(pool: SqlitePool) {
    let app = common::build_test_app(pool).await;
    let body = sample_watch_body("The Matrix", "2024-10-23");

    for _ in 0..3 {
        let response = post_json(app.clone(), "/movie/watch", &body).await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    let response = get(app, "/movies/watched").await;
    let list = body_json(response).await;
    assert_eq!(list.as_array().unwrap().len(), 3);
}

#[sqlx::test]
async fn list_is_ordered_newest_first(pool: SqlitePool) {
    let app = common::build_test_app(pool).await;

    post_json(
        app.clone(),
        "/movie/watch",
        &sample_watch_body("Older", "2024-01-01"),
    )
    .await;
    post_json(
        app.clone(),
        "/movie/watch",
        &sample_watch_body("Newer", "2024-06-15"),
    )
    .await;

    let list = body_json(get(app, "/movies/watched").await).await;
    let list = list.as_array().unwrap();
    assert_eq!(list[0]["title"], "Newer");
    assert_eq!(list[1]["title"], "Older");
}

#[sqlx::test]
async fn add_watch_without_body_returns_400(pool: SqlitePool) {
    let app = common::build_test_app(pool).await;
    let response = post_empty(app, "/movie/watch").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["error"], "No data provided");
}

#[sqlx::test]
async fn add_watch_without_watch_date_returns_400(pool: SqlitePool) {
    let app = common::build_test_app(pool).await;
    let mut body = sample_watch_body("The Matrix", "2024-10-23");
    body.as_object_mut().unwrap().remove("watchDate");

    let response = post_json(app, "/movie/watch", &body).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["error"], "No watch date provided");
}

#[sqlx::test]
async fn add_watch_without_movie_data_returns_400(pool: SqlitePool) {
    let app = common::build_test_app(pool).await;

    let response = post_json(app, "/movie/watch", &json!({"watchDate": "2024-10-23"})).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["error"], "No movie data provided");
}

#[sqlx::test]
async fn add_watch_with_unparseable_year_returns_500(pool: SqlitePool) {
    let app = common::build_test_app(pool).await;
    let mut body = sample_watch_body("The Matrix", "2024-10-23");
    body["movieData"]["Year"] = json!("1999-2003");

    let response = post_json(app, "/movie/watch", &body).await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let json = body_json(response).await;
    assert!(!json["error"].as_str().unwrap().is_empty());
}

#[sqlx::test]
async fn unparseable_runtime_and_rating_default_to_zero(pool: SqlitePool) {
    let app = common::build_test_app(pool).await;
    let mut body = sample_watch_body("Old Short", "2024-03-03");
    body["movieData"]["Runtime"] = json!("N/A");
    body["movieData"]["imdbRating"] = json!("N/A");

    let response = post_json(app.clone(), "/movie/watch", &body).await;
    assert_eq!(response.status(), StatusCode::OK);

    let list = body_json(get(app, "/movies/watched").await).await;
    assert_eq!(list[0]["runtime"], 0);
    assert_eq!(list[0]["rating"], 0.0);
}

#[sqlx::test]
async fn delete_removes_watch_and_is_idempotent(pool: SqlitePool) {
    let app = common::build_test_app(pool).await;

    post_json(
        app.clone(),
        "/movie/watch",
        &sample_watch_body("Doomed", "2024-02-02"),
    )
    .await;

    let list = body_json(get(app.clone(), "/movies/watched").await).await;
    let id = list[0]["id"].as_i64().unwrap();

    let response = delete(app.clone(), &format!("/movie/watch/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!({"success": true}));

    let list = body_json(get(app.clone(), "/movies/watched").await).await;
    assert!(list.as_array().unwrap().is_empty());

    // Deleting the same id again still reports success.
    let response = delete(app, &format!("/movie/watch/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!({"success": true}));
}
