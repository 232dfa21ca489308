//! The binary entrypoint for `courier-contract`, which verifies a courier
//! account service against its HTTP contract.

use clap::{Parser, Subcommand};
use color_eyre::Result;
use tracing::level_filters::LevelFilter;
use tracing_error::ErrorLayer;
use tracing_subscriber::{fmt::format::FmtSpan, layer::SubscriberExt, util::SubscriberInitExt};

mod cmd;

#[derive(Parser)]
#[command(
    name = "courier-contract",
    about = "Verify a courier account service against its contract",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Clone, Subcommand)]
enum Command {
    /// Run contract scenarios against a service
    Run(cmd::run::Options),

    /// List the available scenarios
    List,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    color_eyre::install()?;

    tracing_subscriber::registry()
        .with(ErrorLayer::default())
        .with(
            tracing_subscriber::fmt::layer()
                .with_level(true)
                .with_target(false)
                .with_span_events(FmtSpan::CLOSE)
                .with_writer(std::io::stderr),
        )
        .with(
            tracing_subscriber::EnvFilter::builder()
                .with_default_directive(LevelFilter::WARN.into())
                .with_env_var("COURIER_CONTRACT_LOG")
                .from_env_lossy(),
        )
        .init();

    match cli.command {
        Command::Run(options) => cmd::run::exec(options).await,
        Command::List => cmd::list::exec(),
    }
}
