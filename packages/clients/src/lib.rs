//! Shared client library for the courier account API.
//!
//! This library provides type definitions and the HTTP client for the courier
//! account service. Types are always available, while HTTP client code is
//! gated behind the `client` feature so that the reference server can share
//! the wire types without pulling in `reqwest`.
//!
//! ## Use of `#[non_exhaustive]`
//!
//! We use `#[non_exhaustive]` on structs and enums to prevent users manually
//! constructing the types while still allowing their fields to be `pub` for
//! reading. Users construct the types either by:
//! - Using constructors on the types
//! - Using builder methods
//! - Using deserialization

use derive_more::Display;
use enum_assoc::Assoc;
use http::header::{self, HeaderName, HeaderValue};

pub mod courier;

/// The latest courier account client version.
#[cfg(feature = "client")]
pub type CourierClient = courier::v1::Client;

/// Courier account v1 client.
#[cfg(feature = "client")]
pub type CourierV1 = courier::v1::Client;

/// The name of the header used to correlate requests with server logs.
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Content types used by the library.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Display, Assoc)]
#[func(pub const fn value(&self) -> HeaderValue)]
#[func(pub const fn to_str(&self) -> &'static str)]
#[display("{}", self.to_str())]
pub enum ContentType {
    #[assoc(to_str = "application/json")]
    #[assoc(value = HeaderValue::from_static(self.to_str()))]
    Json,
}

impl ContentType {
    pub const HEADER: HeaderName = header::CONTENT_TYPE;
    pub const ACCEPT: HeaderName = header::ACCEPT;
}

impl PartialEq<ContentType> for HeaderValue {
    fn eq(&self, other: &ContentType) -> bool {
        self == other.value()
    }
}

impl PartialEq<ContentType> for &HeaderValue {
    fn eq(&self, other: &ContentType) -> bool {
        *self == other.value()
    }
}
