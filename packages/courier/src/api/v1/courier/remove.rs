//! Remove courier endpoint.

use aerosol::axum::Dep;
use axum::{Json, extract::Path, http::StatusCode, response::IntoResponse};
use clients::courier::v1::message;
use serde_json::json;
use tracing::info;

use crate::accounts::{AccountId, Accounts};

/// Remove a courier account by the id returned from login.
///
/// Ids that are not integers cannot name an account and are reported the
/// same way as unknown ones.
#[tracing::instrument(skip(accounts))]
pub async fn handle(Dep(accounts): Dep<Accounts>, Path(id): Path<String>) -> Response {
    let Ok(id) = id.parse::<i64>().map(AccountId::from_i64) else {
        info!(%id, "courier.remove.malformed_id");
        return Response::NotFound;
    };
    if accounts.remove(id) {
        info!(%id, "courier.remove.success");
        Response::Removed
    } else {
        info!(%id, "courier.remove.not_found");
        Response::NotFound
    }
}

#[derive(Debug)]
pub enum Response {
    Removed,
    NotFound,
}

impl IntoResponse for Response {
    fn into_response(self) -> axum::response::Response {
        match self {
            Response::Removed => (StatusCode::OK, Json(json!({ "ok": true }))).into_response(),
            Response::NotFound => (
                StatusCode::NOT_FOUND,
                Json(json!({ "code": 404, "message": message::COURIER_ID_NOT_FOUND })),
            )
                .into_response(),
        }
    }
}
