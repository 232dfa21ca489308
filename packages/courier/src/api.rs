//! API endpoint handlers for the reference courier account server.
//!
//! ## Dependency injection
//!
//! We use [`aerosol`][^1] to manage dependencies and inject them into handlers.
//! Reference [`State`] for the list of dependencies. Items in the list can be
//! extracted in handlers using the [`Dep`](aerosol::axum::Dep) extractor.
//!
//! [^1]: https://docs.rs/aerosol
//!
//! ## Response types
//!
//! Handlers return an enum per endpoint that implements
//! [`IntoResponse`](axum::response::IntoResponse), one variant per outcome the
//! contract describes. This keeps every status/body pair the endpoint can
//! produce visible in one place.

use std::time::{Duration, Instant};

use aerosol::Aero;
use axum::{
    Router,
    extract::Request,
    http::{HeaderValue, StatusCode},
    middleware::Next,
    response::Response,
};
use clients::REQUEST_ID_HEADER;
use tower::ServiceBuilder;
use tower_http::timeout::TimeoutLayer;
use tracing::Instrument;
use uuid::Uuid;

pub mod v1;

/// Every endpoint is a small in-memory operation; anything slower than this
/// is a hung connection.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

pub type State = Aero![crate::accounts::Accounts];

pub fn router(state: State) -> Router {
    let middleware = ServiceBuilder::new().layer(TimeoutLayer::with_status_code(
        StatusCode::REQUEST_TIMEOUT,
        REQUEST_TIMEOUT,
    ));

    Router::new()
        .nest("/api/v1", v1::router())
        .layer(middleware)
        .layer(axum::middleware::from_fn(trace_request))
        .with_state(state)
}

async fn trace_request(request: Request, next: Next) -> Response {
    let id = request
        .headers()
        .get(REQUEST_ID_HEADER)
        .and_then(|id| id.to_str().map(|id| id.to_string()).ok())
        .unwrap_or_else(|| Uuid::new_v4().to_string());

    let start = Instant::now();
    let url = request.uri().to_string();
    let method = request.method().to_string();

    let span = tracing::info_span!("http.request", %id, %url, %method);
    async move {
        let mut response = next.run(request).await;
        let status = response.status();
        let duration = start.elapsed();
        tracing::info!(%id, %url, %method, %status, ?duration, "http.request.response");

        if let Ok(id) = HeaderValue::from_str(&id) {
            response.headers_mut().insert(REQUEST_ID_HEADER, id);
        }
        response
    }
    .instrument(span)
    .await
}
