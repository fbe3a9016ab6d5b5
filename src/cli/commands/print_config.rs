use clap::Args;

use crate::config::ChartConfig;
use crate::errors::AppResult;

/// Print the effective chart configuration
#[derive(Args)]
pub struct PrintConfigCommand {}

impl PrintConfigCommand {
    pub fn run(&self, config: &ChartConfig) -> AppResult<()> {
        print!("{}", config.to_toml()?);
        Ok(())
    }
}
