//! Register courier endpoint.

use aerosol::axum::Dep;
use axum::{Json, http::StatusCode, response::IntoResponse};
use clients::courier::v1::message;
use derive_more::Debug;
use serde::Deserialize;
use serde_json::json;
use tracing::info;

use crate::accounts::Accounts;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCourierRequest {
    #[serde(default)]
    pub login: Option<String>,

    #[serde(default)]
    #[debug(skip)]
    pub password: Option<String>,

    #[serde(default)]
    pub first_name: Option<String>,
}

/// Register a new courier account.
///
/// Login and password must both be present and non-empty; the first name is
/// optional.
#[tracing::instrument(skip(accounts))]
pub async fn handle(
    Dep(accounts): Dep<Accounts>,
    Json(request): Json<CreateCourierRequest>,
) -> Response {
    let login = request.login.unwrap_or_default();
    let password = request.password.unwrap_or_default();
    if login.is_empty() || password.is_empty() {
        info!("courier.create.missing_data");
        return Response::MissingData;
    }

    let first_name = request.first_name.unwrap_or_default();
    match accounts.create(&login, &password, &first_name) {
        Ok(id) => {
            info!(%id, %login, "courier.create.success");
            Response::Created
        }
        Err(taken) => {
            info!(login = %taken.login, "courier.create.login_taken");
            Response::LoginTaken
        }
    }
}

#[derive(Debug)]
pub enum Response {
    Created,
    MissingData,
    LoginTaken,
}

impl IntoResponse for Response {
    fn into_response(self) -> axum::response::Response {
        match self {
            Response::Created => (StatusCode::CREATED, Json(json!({ "ok": true }))).into_response(),
            Response::MissingData => (
                StatusCode::BAD_REQUEST,
                Json(json!({ "code": 400, "message": message::CREATE_MISSING_DATA })),
            )
                .into_response(),
            Response::LoginTaken => (
                StatusCode::CONFLICT,
                Json(json!({ "code": 409, "message": message::LOGIN_TAKEN })),
            )
                .into_response(),
        }
    }
}
