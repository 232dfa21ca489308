//! Courier account v1 API types and client.

use bon::Builder;
use color_eyre::{Result, Section, SectionExt, eyre::Context};
use derive_more::{Debug, Display};
use http::StatusCode;
use serde::{Deserialize, Deserializer, Serialize};
use tracing::{instrument, trace};

#[cfg(feature = "client")]
mod client;

#[cfg(feature = "client")]
pub use client::Client;

/// Messages the service reports in the `message` field of error bodies.
///
/// These are part of the contract: callers compare them byte for byte.
pub mod message {
    /// Registration was missing a login or password.
    pub const CREATE_MISSING_DATA: &str = "Недостаточно данных для создания учетной записи";

    /// Registration used a login that already belongs to another account.
    pub const LOGIN_TAKEN: &str = "Этот логин уже используется. Попробуйте другой.";

    /// Authentication was missing a login or password.
    pub const LOGIN_MISSING_DATA: &str = "Недостаточно данных для входа";

    /// Authentication named an account that does not exist.
    pub const ACCOUNT_NOT_FOUND: &str = "Учетная запись не найдена";

    /// Removal named an id that does not exist.
    pub const COURIER_ID_NOT_FOUND: &str = "Курьера с таким id нет.";
}

/// A courier's credentials and profile fragment.
///
/// Every field is always serialized, including empty strings: the service
/// treats an empty field and an omitted field differently and scenarios rely
/// on sending exactly what the record holds.
#[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize, Builder)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct Courier {
    /// The login, unique within the service once registered.
    #[builder(into)]
    pub login: String,

    /// The password.
    #[builder(into)]
    #[debug("[redacted]")]
    pub password: String,

    /// Display name; not significant to the contract.
    #[builder(into, default)]
    pub first_name: String,
}

/// The subset of a [`Courier`] sent when authenticating.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize)]
#[non_exhaustive]
pub struct Credentials<'a> {
    pub login: &'a str,

    #[debug("[redacted]")]
    pub password: &'a str,
}

impl<'a> From<&'a Courier> for Credentials<'a> {
    fn from(courier: &'a Courier) -> Self {
        Self {
            login: &courier.login,
            password: &courier.password,
        }
    }
}

/// The identifier the service assigns to an account.
///
/// The service only reveals it on successful authentication. On the wire it
/// may be either a JSON number or a JSON string; both parse into this type and
/// render as the bare value for use in request paths.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Display, Serialize)]
#[display("{_0}")]
#[debug("{_0}")]
#[serde(transparent)]
pub struct CourierId(String);

impl CourierId {
    /// View the identifier as a string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl<S: Into<String>> From<S> for CourierId {
    fn from(s: S) -> Self {
        Self(s.into())
    }
}

impl<'de> Deserialize<'de> for CourierId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Wire {
            Signed(i64),
            Unsigned(u64),
            Text(String),
        }

        match Wire::deserialize(deserializer)? {
            Wire::Signed(id) => Ok(Self(id.to_string())),
            Wire::Unsigned(id) => Ok(Self(id.to_string())),
            Wire::Text(id) => Ok(Self(id)),
        }
    }
}

/// The structured body of a service response.
///
/// Success and error responses use different shapes (`{ok}`, `{message}`,
/// `{id}`), so every field is optional and none are assumed to coexist.
#[derive(Clone, PartialEq, Eq, Debug, Default, Deserialize)]
#[non_exhaustive]
pub struct ResponseBody {
    /// Present on successful registration and removal.
    #[serde(default)]
    pub ok: Option<bool>,

    /// Present on error responses.
    #[serde(default)]
    pub message: Option<String>,

    /// Present on successful authentication.
    #[serde(default)]
    pub id: Option<CourierId>,
}

/// A response exactly as the service returned it.
///
/// The client never interprets responses: any status, including 4xx and 5xx,
/// is returned as a `RawResponse` and left to the caller to judge.
#[derive(Clone, PartialEq, Eq, Debug, Builder)]
#[non_exhaustive]
pub struct RawResponse {
    /// The HTTP status code.
    pub status: StatusCode,

    /// The URL that produced the response.
    #[builder(into)]
    pub url: String,

    /// The `x-request-id` header, if the service set one.
    #[builder(into)]
    pub request_id: Option<String>,

    /// The response body as text.
    #[builder(into, default)]
    pub body: String,
}

impl RawResponse {
    /// Parse the body as a [`ResponseBody`].
    #[instrument(name = "RawResponse::json", skip(self), fields(status = %self.status))]
    pub fn json(&self) -> Result<ResponseBody> {
        let parsed = serde_json::from_str::<ResponseBody>(&self.body)
            .context("parse response body")
            .with_section(|| self.body.clone().header("Body:"))
            .with_section(|| self.url.clone().header("Url:"))?;
        trace!(?parsed, "parsed response body");
        Ok(parsed)
    }

    /// The request id, or a placeholder when the service did not set one.
    pub fn request_id_or_placeholder(&self) -> &str {
        self.request_id.as_deref().unwrap_or("<not set>")
    }
}
