//! Scenario orchestration.
//!
//! A [`Harness`] runs one scenario at a time through a fixed lifecycle:
//!
//! 1. Generate a fresh [`Courier`]; no network call happens here.
//! 2. Hand a mutable copy to the scenario, which may alter it and then drive
//!    the service through [`Harness::register`], [`Harness::authenticate`]
//!    and [`Harness::remove`], asserting on the responses.
//! 3. Tear down using the original, unaltered courier: authenticate it to
//!    recover the service-assigned id and remove the account if one exists.
//!
//! Teardown runs on every exit path, including scenario errors and panics.
//! Teardown failures are written to the diagnostic sink and reported in
//! [`ScenarioReport::cleanup`], but never change the scenario's outcome.

use std::{
    ops::AsyncFnOnce,
    panic::AssertUnwindSafe,
    sync::{Arc, Mutex, PoisonError},
};

use clients::courier::v1::{Client, Courier, CourierId, RawResponse};
use color_eyre::{
    Result, Section, SectionExt,
    eyre::{Context, Report, eyre},
};
use derive_more::Debug;
use futures::FutureExt;
use http::StatusCode;
use tracing::{debug, info, instrument, warn};

use crate::{
    Config, Scenario,
    diagnostics::{Sink, TracingSink},
    factory::CourierFactory,
};

/// Runs scenarios against a courier account service.
#[derive(Debug)]
pub struct Harness {
    config: Config,
    client: Client,

    #[debug(skip)]
    factory: Mutex<CourierFactory>,

    sink: Arc<dyn Sink>,
}

impl Harness {
    /// Create a harness for the configured service.
    ///
    /// Couriers are generated from OS entropy and diagnostics go to
    /// `tracing`; use [`Harness::with_factory`] and [`Harness::with_sink`] to
    /// substitute either.
    pub fn new(config: Config) -> Result<Self> {
        let client = Client::new(config.endpoint_base()).context("create client")?;
        Ok(Self {
            config,
            client,
            factory: Mutex::new(CourierFactory::from_entropy()),
            sink: Arc::new(TracingSink),
        })
    }

    /// Generate couriers from the provided factory.
    pub fn with_factory(self, factory: CourierFactory) -> Self {
        Self {
            factory: Mutex::new(factory),
            ..self
        }
    }

    /// Write diagnostics to the provided sink.
    pub fn with_sink(self, sink: impl Sink + 'static) -> Self {
        Self {
            sink: Arc::new(sink),
            ..self
        }
    }

    /// The harness configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// The client used for every request.
    pub fn client(&self) -> &Client {
        &self.client
    }

    /// Register a courier, logging the response body when verbose.
    pub async fn register(&self, courier: &Courier) -> Result<RawResponse> {
        let response = self
            .client
            .register(courier)
            .await
            .context("register courier")?;
        self.log_response("register courier", &response);
        Ok(response)
    }

    /// Authenticate a courier, logging the response body when verbose.
    pub async fn authenticate(&self, courier: &Courier) -> Result<RawResponse> {
        let response = self
            .client
            .authenticate(courier)
            .await
            .context("authenticate courier")?;
        self.log_response("authenticate courier", &response);
        Ok(response)
    }

    /// Remove a courier by id, logging the response body when verbose.
    pub async fn remove(&self, id: &CourierId) -> Result<RawResponse> {
        let response = self
            .client
            .remove(id)
            .await
            .with_context(|| format!("remove courier {id}"))?;
        self.log_response("remove courier", &response);
        Ok(response)
    }

    /// Run a scenario with a freshly generated courier, then tear down.
    ///
    /// The scenario receives a mutable copy of the courier; teardown always
    /// uses the original. If the scenario panics, teardown still runs and the
    /// panic resumes afterwards.
    #[instrument(name = "Harness::run", skip(self, scenario))]
    pub async fn run<F>(&self, name: &str, scenario: F) -> ScenarioReport
    where
        F: AsyncFnOnce(&mut Courier) -> Result<()>,
    {
        let original = self.generate();
        let mut courier = original.clone();
        info!(login = %original.login, "scenario.start");

        let outcome = AssertUnwindSafe(scenario(&mut courier))
            .catch_unwind()
            .await;
        let cleanup = self.teardown(&original).await;
        let outcome = match outcome {
            Ok(outcome) => outcome,
            Err(panic) => std::panic::resume_unwind(panic),
        };

        match &outcome {
            Ok(()) => info!("scenario.pass"),
            Err(error) => info!(error = %error, "scenario.fail"),
        }
        ScenarioReport {
            name: name.to_string(),
            outcome,
            cleanup,
        }
    }

    /// Run each scenario in order, one at a time.
    pub async fn run_all(
        &self,
        scenarios: impl IntoIterator<Item = Scenario>,
    ) -> Vec<ScenarioReport> {
        let mut reports = Vec::new();
        for scenario in scenarios {
            reports.push(scenario.run(self).await);
        }
        reports
    }

    /// Authenticate the courier and remove whatever account comes back.
    ///
    /// Never fails: every problem is routed to the diagnostic sink and
    /// described by the returned [`Cleanup`].
    #[instrument(name = "Harness::teardown", skip(self))]
    pub async fn teardown(&self, courier: &Courier) -> Cleanup {
        let cleanup = match self.try_teardown(courier).await {
            Ok(cleanup) => cleanup,
            Err(error) => Cleanup::Failed(error),
        };

        match &cleanup {
            Cleanup::Removed(id) => debug!(%id, "scenario.teardown.removed"),
            Cleanup::NothingToRemove { status } => {
                debug!(%status, "scenario.teardown.nothing_to_remove");
                self.sink.write(&format!(
                    "teardown: no account to remove for login {:?} (login returned {status})",
                    courier.login
                ));
            }
            Cleanup::Failed(error) => {
                warn!(%error, "scenario.teardown.failed");
                self.sink.write(&format!(
                    "teardown: cleanup failed for login {:?}: {error:#}",
                    courier.login
                ));
            }
        }
        cleanup
    }

    async fn try_teardown(&self, courier: &Courier) -> Result<Cleanup> {
        let login = self.authenticate(courier).await?;
        let Some(id) = login.json()?.id else {
            return Ok(Cleanup::NothingToRemove {
                status: login.status,
            });
        };

        let removed = self.remove(&id).await?;
        if !removed.status.is_success() {
            return Err(eyre!(
                "remove courier {id}: unexpected status {}",
                removed.status
            ))
            .with_section(|| removed.body.clone().header("Body:"))
            .with_section(|| removed.url.clone().header("Url:"));
        }
        Ok(Cleanup::Removed(id))
    }

    fn generate(&self) -> Courier {
        self.factory
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .generate()
    }

    fn log_response(&self, step: &str, response: &RawResponse) {
        if self.config.verbose {
            self.sink
                .write(&format!("{step}: {} {}", response.status, response.body));
        }
    }
}

/// What teardown did with the scenario's account.
#[derive(Debug)]
pub enum Cleanup {
    /// The account existed and was removed.
    Removed(CourierId),

    /// Authentication returned no id, so there was nothing to remove. This is
    /// expected for scenarios that never registered the courier.
    NothingToRemove { status: StatusCode },

    /// Cleanup could not complete.
    Failed(Report),
}

impl Cleanup {
    /// Whether the account is known not to remain on the service.
    pub fn is_clean(&self) -> bool {
        matches!(self, Cleanup::Removed(_) | Cleanup::NothingToRemove { .. })
    }
}

/// The result of running one scenario.
#[derive(Debug)]
pub struct ScenarioReport {
    /// The scenario name.
    pub name: String,

    /// The scenario's own result, unaffected by teardown.
    pub outcome: Result<()>,

    /// What teardown did.
    pub cleanup: Cleanup,
}

impl ScenarioReport {
    /// Whether the scenario passed.
    pub fn passed(&self) -> bool {
        self.outcome.is_ok()
    }

    /// The scenario's outcome, naming the scenario on failure.
    pub fn into_result(self) -> Result<()> {
        let name = self.name;
        self.outcome.wrap_err_with(|| format!("scenario {name}"))
    }
}
