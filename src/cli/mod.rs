use crate::config::ChartConfig;
use crate::errors::AppResult;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub mod commands;

/// Web Log Report Chart Extractor
#[derive(Parser)]
#[command(name = "report-charts")]
#[command(about = "Turn rendered web usage report tables into aligned chart series")]
#[command(version)]
pub struct Cli {
    /// Chart configuration file (defaults to ./report-charts.toml if present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Chart the daily usage table of a monthly report page
    Daily(commands::usage::DailyCommand),
    /// Chart the hourly usage table of a monthly report page
    Hourly(commands::usage::HourlyCommand),
    /// Chart the country usage table of a monthly report page
    Country(commands::usage::CountryCommand),
    /// Chart the monthly summary table of the index page
    Monthly(commands::usage::MonthlyCommand),
    /// Extract every chart from one or more report pages into JSON payload files
    Page(commands::page::PageCommand),
    /// Print the effective chart configuration as TOML
    PrintConfig(commands::print_config::PrintConfigCommand),
}

pub fn run() -> AppResult<()> {
    // Uses RUST_LOG environment variable (defaults to "error" if not set)
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("error")),
        )
        .with_writer(std::io::stderr)
        .try_init();

    let cli = Cli::parse();
    let config = ChartConfig::load(cli.config.as_deref())?;

    match cli.command {
        Commands::Daily(command) => command.run(&config),
        Commands::Hourly(command) => command.run(&config),
        Commands::Country(command) => command.run(&config),
        Commands::Monthly(command) => command.run(&config),
        Commands::Page(command) => command.run(&config),
        Commands::PrintConfig(command) => command.run(&config),
    }
}
