//! Global test helpers for contract integration tests.

use aerosol::Aero;
use color_eyre::{Result, eyre::Context};
use contract::{Config, CourierFactory, Harness, diagnostics::MemorySink};
use courier::{accounts::Accounts, api};
use url::Url;

/// Test fixture containing a spawned reference server and a harness pointed
/// at it.
pub struct TestFixture {
    /// The harness under test.
    pub harness: Harness,

    /// Diagnostic lines the harness wrote.
    pub diagnostics: MemorySink,

    /// The server's account store, for direct inspection in tests.
    pub accounts: Accounts,
}

impl TestFixture {
    /// Spawn a server and a verbose harness with a seeded courier factory.
    pub async fn spawn() -> Result<Self> {
        Self::spawn_with_seed(0).await
    }

    /// Like [`TestFixture::spawn`], with a specific factory seed.
    pub async fn spawn_with_seed(seed: u64) -> Result<Self> {
        let accounts = Accounts::default();
        let router = api::router(Aero::new().with(accounts.clone()));

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .context("bind test server")?;
        let local_addr = listener.local_addr().context("get local addr")?;
        let base_url = Url::parse(&format!("http://{local_addr}")).context("parse base URL")?;

        // The server is shut down when the test runtime ends.
        tokio::task::spawn(async move {
            axum::serve(listener, router)
                .await
                .expect("test server failed");
        });

        let diagnostics = MemorySink::default();
        let config = Config::builder().base_url(base_url).verbose(true).build();
        let harness = Harness::new(config)?
            .with_factory(CourierFactory::seeded(seed))
            .with_sink(diagnostics.clone());

        Ok(Self {
            harness,
            diagnostics,
            accounts,
        })
    }
}
