use color_eyre::Result;
use colored::Colorize as _;
use contract::Scenario;

pub fn exec() -> Result<()> {
    for scenario in Scenario::ALL {
        println!("{:<32} {}", scenario.name().bold(), scenario.description());
    }
    Ok(())
}
