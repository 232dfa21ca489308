use axum::{Router, routing::get};

use crate::api::State;

pub mod courier;
pub mod health;

pub fn router() -> Router<State> {
    Router::new()
        .merge(courier::router())
        .route("/health", get(health::handle))
}
