//! Assertions over service responses.
//!
//! Each assertion either passes or returns an error naming what was expected
//! and what the service actually sent, with the raw body, URL and request id
//! attached as report sections. Responses that fail to parse are errors too;
//! no unrecognized shape passes silently.

use std::fmt::Display;

use clients::courier::v1::{CourierId, RawResponse};
use color_eyre::{
    Result, Section, SectionExt,
    eyre::{Report, eyre},
};
use http::StatusCode;

/// The response has `status` and reports `ok: true`.
pub fn ok(response: &RawResponse, status: StatusCode) -> Result<()> {
    self::status(response, status)?;
    match response.json()?.ok {
        Some(true) => Ok(()),
        other => Err(mismatch(response, "ok", "Some(true)", format!("{other:?}"))),
    }
}

/// The response has `status` and reports exactly `text` as its message.
pub fn message(response: &RawResponse, status: StatusCode, text: &str) -> Result<()> {
    self::status(response, status)?;
    match response.json()?.message {
        Some(message) if message == text => Ok(()),
        other => Err(mismatch(
            response,
            "message",
            format!("{:?}", Some(text)),
            format!("{other:?}"),
        )),
    }
}

/// The response is a successful authentication carrying an id.
pub fn id(response: &RawResponse) -> Result<CourierId> {
    self::status(response, StatusCode::OK)?;
    response
        .json()?
        .id
        .ok_or_else(|| mismatch(response, "id", "<present>", "<absent>"))
}

/// The response has `expected` as its status.
pub fn status(response: &RawResponse, expected: StatusCode) -> Result<()> {
    if response.status == expected {
        Ok(())
    } else {
        Err(mismatch(response, "status", expected, response.status))
    }
}

fn mismatch(
    response: &RawResponse,
    field: &str,
    expected: impl Display,
    actual: impl Display,
) -> Report {
    let expected = expected.to_string();
    let actual = actual.to_string();
    eyre!("unexpected {field}: expected {expected}, got {actual}")
        .section(expected.header("Expected:"))
        .section(actual.header("Actual:"))
        .section(response.body.clone().header("Body:"))
        .section(response.url.clone().header("Url:"))
        .section(response.request_id_or_placeholder().to_string().header("Request ID:"))
}
