//! Global test helpers for courier integration tests.

use aerosol::Aero;
use clients::courier::v1::{Client, Courier};
use color_eyre::{Result, eyre::Context};
use courier::{accounts::Accounts, api};
use url::Url;

/// Test fixture containing a spawned server.
pub struct TestFixture {
    /// Base URL of the server.
    pub base_url: Url,

    /// The courier account client pointed at the server.
    pub client: Client,

    /// The server's account store, for direct inspection in tests.
    pub accounts: Accounts,
}

impl TestFixture {
    /// Spawn a new test server with an empty account store.
    pub async fn spawn() -> Result<Self> {
        let accounts = Accounts::default();
        let router = api::router(Aero::new().with(accounts.clone()));

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .context("bind test server")?;
        let local_addr = listener.local_addr().context("get local addr")?;
        let base_url = Url::parse(&format!("http://{local_addr}/")).context("parse base URL")?;

        // The server is shut down when the test runtime ends.
        tokio::task::spawn(async move {
            axum::serve(listener, router)
                .await
                .expect("test server failed");
        });

        let client = Client::new(base_url.clone())?;
        Ok(Self {
            base_url,
            client,
            accounts,
        })
    }
}

/// A courier with fixed, distinct field values.
pub fn courier(login: &str) -> Courier {
    Courier::builder()
        .login(login)
        .password(format!("{login}-password"))
        .first_name(format!("{login}-name"))
        .build()
}
