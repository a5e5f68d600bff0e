//! Batch label printing endpoint
//!
//! | Path | Method | Description | Auth |
//! |------|--------|-------------|------|
//! | /print_labels | POST | print one label per submitted item code | none |

pub mod handler;

use axum::{Router, routing::post};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().route("/print_labels", post(handler::print_labels))
}
