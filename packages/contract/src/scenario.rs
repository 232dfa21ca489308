//! The catalog of contract scenarios.

use clients::courier::v1::{Courier, message};
use color_eyre::{Result, eyre::Context};
use derive_more::Display;
use enum_assoc::Assoc;
use http::StatusCode;

use crate::{Harness, ScenarioReport, expect};

/// A contract scenario for the courier account API.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Display, Assoc)]
#[func(pub const fn name(&self) -> &'static str)]
#[func(pub const fn description(&self) -> &'static str)]
#[display("{}", self.name())]
pub enum Scenario {
    #[assoc(name = "create_courier")]
    #[assoc(description = "registering a new courier reports ok")]
    CreateCourier,

    #[assoc(name = "create_without_login")]
    #[assoc(description = "registering with an empty login is rejected")]
    CreateWithoutLogin,

    #[assoc(name = "create_without_password")]
    #[assoc(description = "registering with an empty password is rejected")]
    CreateWithoutPassword,

    #[assoc(name = "create_duplicate")]
    #[assoc(description = "registering an existing login is a conflict")]
    CreateDuplicate,

    #[assoc(name = "create_without_login_repeated")]
    #[assoc(description = "rejected registrations can be repeated with the same result")]
    CreateWithoutLoginRepeated,

    #[assoc(name = "login_without_login")]
    #[assoc(description = "logging in with an empty login is rejected")]
    LoginWithoutLogin,

    #[assoc(name = "login_without_password")]
    #[assoc(description = "logging in with an empty password is rejected")]
    LoginWithoutPassword,

    #[assoc(name = "login_nonexistent")]
    #[assoc(description = "logging in as an unregistered courier is not found")]
    LoginNonexistent,

    #[assoc(name = "login_existing")]
    #[assoc(description = "logging in as a registered courier returns its id")]
    LoginExisting,

    #[assoc(name = "delete_existing")]
    #[assoc(description = "a registered courier can be removed by its id")]
    DeleteExisting,
}

impl Scenario {
    /// Every scenario, in the order they are run.
    pub const ALL: [Scenario; 10] = [
        Scenario::CreateCourier,
        Scenario::CreateWithoutLogin,
        Scenario::CreateWithoutPassword,
        Scenario::CreateDuplicate,
        Scenario::CreateWithoutLoginRepeated,
        Scenario::LoginWithoutLogin,
        Scenario::LoginWithoutPassword,
        Scenario::LoginNonexistent,
        Scenario::LoginExisting,
        Scenario::DeleteExisting,
    ];

    /// Find a scenario by its name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|scenario| scenario.name() == name)
    }

    /// Run the scenario, including teardown.
    pub async fn run(self, harness: &Harness) -> ScenarioReport {
        harness
            .run(self.name(), async |courier| self.act(harness, courier).await)
            .await
    }

    async fn act(self, harness: &Harness, courier: &mut Courier) -> Result<()> {
        match self {
            Scenario::CreateCourier => {
                let response = harness.register(courier).await?;
                expect::ok(&response, StatusCode::CREATED)
            }
            Scenario::CreateWithoutLogin => {
                courier.login.clear();
                let response = harness.register(courier).await?;
                expect::message(
                    &response,
                    StatusCode::BAD_REQUEST,
                    message::CREATE_MISSING_DATA,
                )
            }
            Scenario::CreateWithoutPassword => {
                courier.password.clear();
                let response = harness.register(courier).await?;
                expect::message(
                    &response,
                    StatusCode::BAD_REQUEST,
                    message::CREATE_MISSING_DATA,
                )
            }
            Scenario::CreateDuplicate => {
                harness.register(courier).await?;
                let response = harness.register(courier).await?;
                expect::message(&response, StatusCode::CONFLICT, message::LOGIN_TAKEN)
            }
            Scenario::CreateWithoutLoginRepeated => {
                courier.login.clear();
                for attempt in 1..=2 {
                    let response = harness.register(courier).await?;
                    expect::message(
                        &response,
                        StatusCode::BAD_REQUEST,
                        message::CREATE_MISSING_DATA,
                    )
                    .with_context(|| format!("attempt {attempt}"))?;
                }
                Ok(())
            }
            Scenario::LoginWithoutLogin => {
                courier.login.clear();
                let response = harness.authenticate(courier).await?;
                expect::message(
                    &response,
                    StatusCode::BAD_REQUEST,
                    message::LOGIN_MISSING_DATA,
                )
            }
            Scenario::LoginWithoutPassword => {
                courier.password.clear();
                let response = harness.authenticate(courier).await?;
                expect::message(
                    &response,
                    StatusCode::BAD_REQUEST,
                    message::LOGIN_MISSING_DATA,
                )
            }
            Scenario::LoginNonexistent => {
                let response = harness.authenticate(courier).await?;
                expect::message(&response, StatusCode::NOT_FOUND, message::ACCOUNT_NOT_FOUND)
            }
            Scenario::LoginExisting => {
                harness.register(courier).await?;
                let response = harness.authenticate(courier).await?;
                expect::id(&response).map(drop)
            }
            Scenario::DeleteExisting => {
                harness.register(courier).await?;
                let response = harness.authenticate(courier).await?;
                let id = expect::id(&response)?;
                harness.remove(&id).await?;
                Ok(())
            }
        }
    }
}
