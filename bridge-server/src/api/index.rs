//! The operator form
//!
//! A static page: a textarea for item codes, a variant selector, and a
//! submit button posting to `/print_labels`.

use axum::{Router, response::Html, routing::get};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().route("/", get(index))
}

async fn index() -> Html<&'static str> {
    Html(include_str!("../../assets/index.html"))
}
