//! HTTP client for the courier account v1 API.

use std::sync::Arc;

use color_eyre::{
    Result,
    eyre::{Context, bail, eyre},
};
use derive_more::{Debug, Display};
use reqwest::Response;
use tap::Pipe;
use tracing::{debug, instrument};
use url::Url;

use super::{Courier, CourierId, Credentials, RawResponse};
use crate::{ContentType, REQUEST_ID_HEADER};

/// Client for the courier account API.
///
/// The client sends requests exactly as described by its arguments and hands
/// back whatever the service answered; it performs no local validation, no
/// retries, and never turns an HTTP status into an error. Only transport
/// failures (connection refused, timeouts, unreadable bodies) are errors.
///
/// ## Cloning
///
/// This type is cheaply cloneable, and clones share the underlying HTTP
/// connection pool.
#[derive(Clone, Debug, Display)]
#[display("{base}")]
pub struct Client {
    #[debug("{:?}", base.as_str())]
    base: Arc<Url>,

    #[debug(skip)]
    http: reqwest::Client,
}

impl Client {
    /// Create a new client with the given base URL.
    ///
    /// Endpoint paths are joined onto the base URL, so a base with a path
    /// component should end with a trailing slash.
    pub fn new(base: Url) -> Result<Self> {
        let http = reqwest::Client::builder()
            .build()
            .context("build http client")?;

        Ok(Self {
            base: Arc::new(base),
            http,
        })
    }

    /// The base URL requests are sent to.
    pub fn base(&self) -> &Url {
        &self.base
    }

    /// Register a new courier account.
    ///
    /// Sends `login`, `password` and `firstName` as they are, empty strings
    /// included.
    #[instrument(name = "Client::register", skip(self))]
    pub async fn register(&self, courier: &Courier) -> Result<RawResponse> {
        let url = self.base.join("api/v1/courier")?;
        let response = self
            .http
            .post(url)
            .header(ContentType::ACCEPT, ContentType::Json.value())
            .json(courier)
            .send()
            .await
            .context("send")?;
        read(response).await
    }

    /// Authenticate a courier account.
    ///
    /// Only `login` and `password` are sent. On success the service includes
    /// the account's [`CourierId`] in the body.
    #[instrument(name = "Client::authenticate", skip(self))]
    pub async fn authenticate(&self, courier: &Courier) -> Result<RawResponse> {
        let url = self.base.join("api/v1/courier/login")?;
        let response = self
            .http
            .post(url)
            .header(ContentType::ACCEPT, ContentType::Json.value())
            .json(&Credentials::from(courier))
            .send()
            .await
            .context("send")?;
        read(response).await
    }

    /// Remove a courier account.
    ///
    /// The service only supports removal by the id returned from
    /// [`Client::authenticate`]; there is no removal by login. The id is sent
    /// as a single escaped path segment, so ids containing `/`, `?` or `#`
    /// still address `api/v1/courier/{id}`.
    #[instrument(name = "Client::remove", skip(self))]
    pub async fn remove(&self, id: &CourierId) -> Result<RawResponse> {
        let url = self.removal_url(id)?;
        let response = self
            .http
            .delete(url)
            .header(ContentType::ACCEPT, ContentType::Json.value())
            .send()
            .await
            .context("send")?;
        read(response).await
    }

    /// The URL addressing `id` under the courier collection.
    fn removal_url(&self, id: &CourierId) -> Result<Url> {
        // Dot segments are dropped by URL normalization and an empty segment
        // addresses the collection, so none of them can name an account.
        if matches!(id.as_str(), "" | "." | "..") {
            bail!("courier id {:?} cannot be used as a path segment", id.as_str());
        }

        let mut url = self.base.join("api/v1/courier")?;
        url.path_segments_mut()
            .map_err(|()| eyre!("base URL cannot have a path: {}", self.base))?
            .push(id.as_str());
        Ok(url)
    }
}

/// Buffer a response into a [`RawResponse`].
async fn read(response: Response) -> Result<RawResponse> {
    let status = response.status();
    let url = response.url().to_string();
    let request_id = request_id(&response);
    let body = response.text().await.context("read body")?;
    debug!(%status, %url, ?request_id, "courier.response");

    RawResponse::builder()
        .status(status)
        .url(url)
        .maybe_request_id(request_id)
        .body(body)
        .build()
        .pipe(Ok)
}

/// Extract the request ID from a response header.
fn request_id(response: &Response) -> Option<String> {
    response
        .headers()
        .get(REQUEST_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .map(String::from)
}
