//! API route modules
//!
//! # Structure
//!
//! - [`index`] - the operator form
//! - [`health`] - liveness check
//! - [`print_labels`] - the batch print endpoint

pub mod health;
pub mod index;
pub mod print_labels;

use axum::Router;

use crate::core::ServerState;

/// Build the complete application router
pub fn router() -> Router<ServerState> {
    Router::new()
        .merge(index::router())
        .merge(health::router())
        .merge(print_labels::router())
}
