//! Authenticate courier endpoint.

use aerosol::axum::Dep;
use axum::{Json, http::StatusCode, response::IntoResponse};
use clients::courier::v1::message;
use derive_more::Debug;
use serde::Deserialize;
use serde_json::json;
use tracing::info;

use crate::accounts::{AccountId, Accounts};

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub login: Option<String>,

    #[serde(default)]
    #[debug(skip)]
    pub password: Option<String>,
}

/// Authenticate a courier account, returning its id.
///
/// An unknown login and a wrong password are indistinguishable to the caller.
#[tracing::instrument(skip(accounts))]
pub async fn handle(Dep(accounts): Dep<Accounts>, Json(request): Json<LoginRequest>) -> Response {
    let login = request.login.unwrap_or_default();
    let password = request.password.unwrap_or_default();
    if login.is_empty() || password.is_empty() {
        info!("courier.login.missing_data");
        return Response::MissingData;
    }

    match accounts.authenticate(&login, &password) {
        Some(id) => {
            info!(%id, %login, "courier.login.success");
            Response::Authenticated(id)
        }
        None => {
            info!(%login, "courier.login.not_found");
            Response::NotFound
        }
    }
}

#[derive(Debug)]
pub enum Response {
    Authenticated(AccountId),
    MissingData,
    NotFound,
}

impl IntoResponse for Response {
    fn into_response(self) -> axum::response::Response {
        match self {
            Response::Authenticated(id) => {
                (StatusCode::OK, Json(json!({ "id": id.as_i64() }))).into_response()
            }
            Response::MissingData => (
                StatusCode::BAD_REQUEST,
                Json(json!({ "code": 400, "message": message::LOGIN_MISSING_DATA })),
            )
                .into_response(),
            Response::NotFound => (
                StatusCode::NOT_FOUND,
                Json(json!({ "code": 404, "message": message::ACCOUNT_NOT_FOUND })),
            )
                .into_response(),
        }
    }
}
