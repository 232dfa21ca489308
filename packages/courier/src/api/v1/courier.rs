//! Courier account endpoints.

use axum::{
    Router,
    routing::{delete, post},
};

use crate::api::State;

pub mod create;
pub mod login;
pub mod remove;

pub fn router() -> Router<State> {
    Router::new()
        .route("/courier", post(create::handle))
        .route("/courier/login", post(login::handle))
        .route("/courier/{id}", delete(remove::handle))
}
