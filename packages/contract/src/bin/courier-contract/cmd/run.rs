use clap::Args;
use color_eyre::{
    Result,
    eyre::{Context as _, bail, eyre},
};
use colored::Colorize as _;
use contract::{Cleanup, Config, CourierFactory, Harness, Scenario, diagnostics::TracingSink};
use derive_more::Debug;
use tracing::instrument;

#[derive(Clone, Args, Debug)]
pub struct Options {
    #[command(flatten)]
    config: Config,

    /// Only run the named scenarios; may be repeated.
    #[arg(long = "scenario", value_name = "NAME")]
    only: Vec<String>,

    /// Seed the courier generator to reproduce a previous run.
    #[arg(long, env = "COURIER_CONTRACT_SEED")]
    seed: Option<u64>,
}

#[instrument]
pub async fn exec(options: Options) -> Result<()> {
    let scenarios = select(&options.only)?;
    let factory = match options.seed {
        Some(seed) => CourierFactory::seeded(seed),
        None => CourierFactory::from_entropy(),
    };
    let harness = Harness::new(options.config)
        .context("create harness")?
        .with_factory(factory)
        .with_sink(TracingSink);

    println!(
        "Running {} scenarios against {}",
        scenarios.len(),
        harness.client()
    );

    let mut failed = 0usize;
    for scenario in &scenarios {
        let report = scenario.run(&harness).await;
        match &report.outcome {
            Ok(()) => println!("{} {}", "PASS".green().bold(), report.name),
            Err(error) => {
                failed += 1;
                println!("{} {}", "FAIL".red().bold(), report.name);
                println!("{error:?}");
            }
        }
        if let Cleanup::Failed(error) = &report.cleanup {
            println!("{} cleanup for {}: {error:#}", "WARN".yellow().bold(), report.name);
        }
    }

    println!(
        "{} passed, {} failed",
        scenarios.len() - failed,
        failed
    );
    if failed > 0 {
        bail!("{failed} of {} scenarios failed", scenarios.len());
    }
    Ok(())
}

fn select(names: &[String]) -> Result<Vec<Scenario>> {
    if names.is_empty() {
        return Ok(Scenario::ALL.to_vec());
    }
    names
        .iter()
        .map(|name| {
            Scenario::from_name(name).ok_or_else(|| {
                eyre!("unknown scenario {name:?}; run `courier-contract list` to see them all")
            })
        })
        .collect()
}
