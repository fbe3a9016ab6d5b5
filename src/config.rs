use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::errors::AppResult;

/// Default configuration file name, looked up in the working directory
pub const DEFAULT_CONFIG_NAME: &str = "report-charts";

/// Environment variable prefix (e.g. `REPORT_CHARTS_HITS_COLOR`, `REPORT_CHARTS_UNITS__DECIMAL`)
pub const ENV_PREFIX: &str = "REPORT_CHARTS";

/// Number of pie slices drawn before the remainder is rolled up
pub const PIE_SLICE_COUNT: usize = 10;

const DEFAULT_PIE_COLORS: [&str; PIE_SLICE_COUNT] = [
    "#00805C", "#FF8000", "#0000FF", "#FF0000", "#00C0FF", "#FFFF00", "#800080", "#80FFC0",
    "#FF00FF", "#FFC480",
];

const DEFAULT_SHORT_MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

const DEFAULT_LONG_MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

const DEFAULT_UNIT_PREFIXES: [&str; 7] = ["K", "M", "G", "T", "P", "E", "Z"];

/// Chart appearance configuration loaded from report-charts.toml or environment variables
///
/// Unrecognised keys are ignored and missing keys fall back to the defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    pub background_color: String,
    pub gridline_color: String,
    pub title_color: String,
    pub hits_color: String,
    pub files_color: String,
    pub pages_color: String,
    pub visits_color: String,
    pub hosts_color: String,
    pub xfer_color: String,
    pub weekend_color: String,
    pub pie_other_color: String,
    pub pie_colors: Vec<String>,
    pub short_months: Vec<String>,
    pub long_months: Vec<String>,
    pub units: UnitsConfig,
    pub titles: TitlesConfig,
}

/// Transfer amount display preferences
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UnitsConfig {
    /// Use multiples of 1000 instead of 1024
    pub decimal: bool,
    /// Output classic kilobyte amounts without a unit suffix
    pub classic: bool,
    /// Unit prefixes for each power of the base, starting with kilo
    pub prefixes: Vec<String>,
    /// Unit appended after the prefix
    pub unit: String,
}

/// Series and chart titles, and the report labels read back from pages
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TitlesConfig {
    pub hits: String,
    pub files: String,
    pub pages: String,
    pub visits: String,
    pub hosts: String,
    pub xfer: String,
    pub other: String,
    pub daily_chart: String,
    pub hourly_chart: String,
    pub country_chart: String,
    pub monthly_chart: String,
    /// Label of the visits row in the monthly totals table
    pub total_visits: String,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            background_color: "#E0E0E0".to_string(),
            gridline_color: "#808080".to_string(),
            title_color: "#0000FF".to_string(),
            hits_color: "#00805C".to_string(),
            files_color: "#0000FF".to_string(),
            pages_color: "#00C0FF".to_string(),
            visits_color: "#FFFF00".to_string(),
            hosts_color: "#FF8000".to_string(),
            xfer_color: "#FF0000".to_string(),
            weekend_color: "#00805C".to_string(),
            pie_other_color: "#FFFFFF".to_string(),
            pie_colors: DEFAULT_PIE_COLORS.iter().map(|c| c.to_string()).collect(),
            short_months: DEFAULT_SHORT_MONTHS.iter().map(|m| m.to_string()).collect(),
            long_months: DEFAULT_LONG_MONTHS.iter().map(|m| m.to_string()).collect(),
            units: UnitsConfig::default(),
            titles: TitlesConfig::default(),
        }
    }
}

impl Default for UnitsConfig {
    fn default() -> Self {
        Self {
            decimal: false,
            classic: false,
            prefixes: DEFAULT_UNIT_PREFIXES.iter().map(|p| p.to_string()).collect(),
            unit: "B".to_string(),
        }
    }
}

impl Default for TitlesConfig {
    fn default() -> Self {
        Self {
            hits: "Hits".to_string(),
            files: "Files".to_string(),
            pages: "Pages".to_string(),
            visits: "Visits".to_string(),
            hosts: "Hosts".to_string(),
            xfer: "Transfer".to_string(),
            other: "Other".to_string(),
            daily_chart: "Daily usage".to_string(),
            hourly_chart: "Hourly usage".to_string(),
            country_chart: "Usage by country".to_string(),
            monthly_chart: "Usage summary".to_string(),
            total_visits: "Total Visits".to_string(),
        }
    }
}

impl ChartConfig {
    /// Load configuration from a TOML file and environment variables
    ///
    /// With no explicit path, `report-charts.toml` in the working directory is
    /// used if it exists. Environment variables take precedence over the file.
    pub fn load(path: Option<&Path>) -> AppResult<Self> {
        let file_source = match path {
            Some(path) => File::from(path).required(true),
            None => File::with_name(DEFAULT_CONFIG_NAME).required(false),
        };

        let config = Config::builder()
            .add_source(file_source)
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let chart_config: ChartConfig = config.try_deserialize()?;
        Ok(chart_config.normalised())
    }

    /// Repair fixed-size tables after deserialisation
    ///
    /// The pie colour list is padded from the defaults or truncated to the
    /// slice count; month tables and unit prefixes of the wrong size revert
    /// to the defaults.
    pub fn normalised(mut self) -> Self {
        self.pie_colors.truncate(PIE_SLICE_COUNT);
        for colour in DEFAULT_PIE_COLORS.iter().skip(self.pie_colors.len()) {
            self.pie_colors.push(colour.to_string());
        }

        if self.short_months.len() != 12 {
            self.short_months = DEFAULT_SHORT_MONTHS.iter().map(|m| m.to_string()).collect();
        }
        if self.long_months.len() != 12 {
            self.long_months = DEFAULT_LONG_MONTHS.iter().map(|m| m.to_string()).collect();
        }
        if self.units.prefixes.is_empty() {
            self.units.prefixes = DEFAULT_UNIT_PREFIXES.iter().map(|p| p.to_string()).collect();
        }
        self
    }

    /// Colour of the pie slice at `index`
    pub fn pie_color(&self, index: usize) -> &str {
        self.pie_colors
            .get(index)
            .map(String::as_str)
            .unwrap_or(DEFAULT_PIE_COLORS[index % PIE_SLICE_COUNT])
    }

    /// Render the effective configuration as TOML
    pub fn to_toml(&self) -> AppResult<String> {
        Ok(toml::to_string_pretty(self)?)
    }
}
