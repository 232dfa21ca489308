use aerosol::axum::Dep;
use axum::{http::StatusCode, response::IntoResponse};
use tracing::info;

use crate::accounts::Accounts;

/// Health check endpoint.
#[tracing::instrument(skip(accounts))]
pub async fn handle(Dep(accounts): Dep<Accounts>) -> impl IntoResponse {
    info!(accounts = accounts.len(), "health.ping.success");
    StatusCode::OK
}
