use axum::response::Html;
use axum::{routing::get, Router};

use crate::state::AppState;

/// GET / -- serve the single-page frontend shell.
async fn index() -> Html<&'static str> {
    Html(include_str!("../../assets/index.html"))
}

/// Mount the landing page route.
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(index))
}
