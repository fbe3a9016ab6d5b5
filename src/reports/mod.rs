//! Report formatting and output generation
//!
//! Provides formatting for extracted series via the [`ReportFormatter`] facade.
//! Supports Console, JSON, Plotly and CSV output formats.

pub mod country;
pub mod usage;
pub mod utils;

use std::str::FromStr;

use crate::chart::{PieChart, UsageChart};
use crate::errors::{AppError, AppResult};
use crate::types::{CountryUsage, DailyUsage, HourlyUsage, MonthlySummary};

/// Output format options for chart reports
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable console summary
    #[default]
    Console,
    /// Extracted series bundle as JSON
    Json,
    /// Plotly.js figure (`{data, layout}`)
    Plotly,
    /// Dense-axis series as CSV
    Csv,
}

impl FromStr for OutputFormat {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "console" => Ok(OutputFormat::Console),
            "json" => Ok(OutputFormat::Json),
            "plotly" => Ok(OutputFormat::Plotly),
            "csv" => Ok(OutputFormat::Csv),
            other => Err(AppError::InvalidData(format!(
                "Unknown output format '{}' (expected console, json, plotly or csv)",
                other
            ))),
        }
    }
}

/// Facade for all report formatting operations
pub struct ReportFormatter;

impl ReportFormatter {
    pub fn format_number(n: u64) -> String {
        utils::format_number(n)
    }

    pub fn format_daily(u: &DailyUsage, c: &UsageChart, f: &OutputFormat) -> AppResult<String> {
        usage::format_daily(u, c, f)
    }
    pub fn format_hourly(u: &HourlyUsage, c: &UsageChart, f: &OutputFormat) -> AppResult<String> {
        usage::format_hourly(u, c, f)
    }
    pub fn format_monthly(
        s: &MonthlySummary,
        c: &UsageChart,
        f: &OutputFormat,
    ) -> AppResult<String> {
        usage::format_monthly(s, c, f)
    }
    pub fn format_country(u: &CountryUsage, c: &PieChart, f: &OutputFormat) -> AppResult<String> {
        country::format_country(u, c, f)
    }
}
