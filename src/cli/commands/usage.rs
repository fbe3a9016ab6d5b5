//! Single-report chart commands
//!
//! Each command reads one rendered report page, extracts its table and
//! prints the chart in the requested format.

use clap::Args;
use std::path::PathBuf;

use super::{country_total, emit, load_page, log_extraction, MAX_MONTH_COUNT};
use crate::chart::{
    build_country_chart, build_daily_chart, build_hourly_chart, build_monthly_chart,
    DEFAULT_MONTH_COUNT,
};
use crate::config::ChartConfig;
use crate::errors::{AppError, AppResult};
use crate::layout::ReportKind;
use crate::reports::{OutputFormat, ReportFormatter};
use crate::types::{CountryUsage, YearMonth};

/// Chart the daily usage table
#[derive(Args)]
pub struct DailyCommand {
    /// Monthly usage report page
    #[arg(long)]
    pub input: PathBuf,

    /// Month the report covers (YYYY-MM)
    #[arg(long)]
    pub month: YearMonth,

    /// Output format (console, json, plotly or csv)
    #[arg(long, default_value = "console")]
    pub format: String,

    /// Write output to this file instead of stdout
    #[arg(long)]
    pub output: Option<PathBuf>,
}

impl DailyCommand {
    pub fn run(&self, config: &ChartConfig) -> AppResult<()> {
        let format: OutputFormat = self.format.parse()?;
        let page = load_page(&self.input)?;

        let usage = page.daily();
        log_extraction(&page, ReportKind::Daily, usage.len());

        let chart = build_daily_chart(&usage, self.month, config);
        let output = ReportFormatter::format_daily(&usage, &chart, &format)?;
        emit(&output, self.output.as_deref(), "Daily usage chart")
    }
}

/// Chart the hourly usage table
#[derive(Args)]
pub struct HourlyCommand {
    /// Monthly usage report page
    #[arg(long)]
    pub input: PathBuf,

    /// Output format (console, json, plotly or csv)
    #[arg(long, default_value = "console")]
    pub format: String,

    /// Write output to this file instead of stdout
    #[arg(long)]
    pub output: Option<PathBuf>,
}

impl HourlyCommand {
    pub fn run(&self, config: &ChartConfig) -> AppResult<()> {
        let format: OutputFormat = self.format.parse()?;
        let page = load_page(&self.input)?;

        let usage = page.hourly();
        log_extraction(&page, ReportKind::Hourly, usage.len());

        let chart = build_hourly_chart(&usage, config);
        let output = ReportFormatter::format_hourly(&usage, &chart, &format)?;
        emit(&output, self.output.as_deref(), "Hourly usage chart")
    }
}

/// Chart the country usage table
#[derive(Args)]
pub struct CountryCommand {
    /// Monthly usage report page
    #[arg(long)]
    pub input: PathBuf,

    /// Total visits for the month (defaults to the page's monthly totals table)
    #[arg(long)]
    pub total_visits: Option<u64>,

    /// Output format (console, json, plotly or csv)
    #[arg(long, default_value = "console")]
    pub format: String,

    /// Write output to this file instead of stdout
    #[arg(long)]
    pub output: Option<PathBuf>,
}

impl CountryCommand {
    pub fn run(&self, config: &ChartConfig) -> AppResult<()> {
        let format: OutputFormat = self.format.parse()?;
        let page = load_page(&self.input)?;

        let usage = if page.has(ReportKind::Country) {
            let total = country_total(&page, self.total_visits, config).ok_or_else(|| {
                AppError::InvalidData(format!(
                    "No visits total for {}: the page has no monthly totals table, pass --total-visits",
                    self.input.display()
                ))
            })?;
            page.country(total)
        } else {
            CountryUsage::default()
        };
        log_extraction(&page, ReportKind::Country, usage.len());

        let chart = build_country_chart(&usage, config);
        let output = ReportFormatter::format_country(&usage, &chart, &format)?;
        emit(&output, self.output.as_deref(), "Country usage chart")
    }
}

/// Chart the monthly summary table of the index page
#[derive(Args)]
pub struct MonthlyCommand {
    /// Index report page
    #[arg(long)]
    pub input: PathBuf,

    /// Number of months on the chart axis
    #[arg(
        long,
        default_value_t = DEFAULT_MONTH_COUNT as u16,
        value_parser = clap::value_parser!(u16).range(1..=MAX_MONTH_COUNT)
    )]
    pub month_count: u16,

    /// First month on the axis (YYYY-MM); defaults to ending at the latest month
    #[arg(long)]
    pub first_month: Option<YearMonth>,

    /// Output format (console, json, plotly or csv)
    #[arg(long, default_value = "console")]
    pub format: String,

    /// Write output to this file instead of stdout
    #[arg(long)]
    pub output: Option<PathBuf>,
}

impl MonthlyCommand {
    pub fn run(&self, config: &ChartConfig) -> AppResult<()> {
        let format: OutputFormat = self.format.parse()?;
        let page = load_page(&self.input)?;

        let summary = page.monthly();
        log_extraction(&page, ReportKind::Monthly, summary.len());

        let chart = build_monthly_chart(
            &summary,
            self.first_month,
            usize::from(self.month_count),
            config,
        );
        let output = ReportFormatter::format_monthly(&summary, &chart, &format)?;
        emit(&output, self.output.as_deref(), "Monthly summary chart")
    }
}
