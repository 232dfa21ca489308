//! Reference implementation of the courier account API.
//!
//! Accounts are held in memory. Test fixtures serve [`api::router`] on a
//! local port to exercise the client and the contract scenarios without a
//! real service.

pub mod accounts;
pub mod api;
