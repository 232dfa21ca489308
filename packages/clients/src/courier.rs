//! Courier account API types and HTTP client.

pub mod v1;
