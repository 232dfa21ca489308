//! Contract verification for the courier account API.
//!
//! The harness drives a live service through a catalog of [`Scenario`]s. Each
//! scenario gets a freshly generated courier, exercises the service through
//! the `clients` HTTP client, and asserts on the exact status codes and
//! messages the contract promises. Whatever a scenario leaves behind is
//! removed afterwards on a best-effort basis; cleanup problems are logged to
//! a [`Sink`](diagnostics::Sink) and never decide whether a scenario passed.
//!
//! ```no_run
//! # async fn example() -> color_eyre::Result<()> {
//! use contract::{Config, Harness, Scenario};
//!
//! let config = Config::builder()
//!     .base_url("http://localhost:3000".parse()?)
//!     .verbose(true)
//!     .build();
//! let harness = Harness::new(config)?;
//! for report in harness.run_all(Scenario::ALL).await {
//!     report.into_result()?;
//! }
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod diagnostics;
pub mod expect;
pub mod factory;
pub mod harness;
pub mod scenario;

pub use config::Config;
pub use factory::CourierFactory;
pub use harness::{Cleanup, Harness, ScenarioReport};
pub use scenario::Scenario;
