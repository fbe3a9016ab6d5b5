//! Batch chart extraction for whole report pages
//!
//! Every page matched by the input pattern becomes one JSON file holding the
//! navigation fragments, help topics and Plotly figures of all report tables
//! found on the page.

use clap::Args;
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use super::{country_total, log_extraction, write_output_to_file, MAX_MONTH_COUNT};
use crate::chart::{
    build_country_chart, build_daily_chart, build_hourly_chart, build_monthly_chart,
    DEFAULT_MONTH_COUNT,
};
use crate::config::ChartConfig;
use crate::errors::{AppError, AppResult};
use crate::extract::{month_in_link, ReportPage};
use crate::layout::ReportKind;
use crate::reports::utils::export_json;
use crate::session::{HelpTopic, PageKind, PageSession};
use crate::types::visualisation::PlotlyChart;
use crate::types::YearMonth;

/// Extract every chart from report pages into JSON payload files
#[derive(Args)]
pub struct PageCommand {
    /// Report page file or glob pattern (e.g. "reports/usage_*.html")
    #[arg(long)]
    pub input: String,

    /// Month of the usage pages (YYYY-MM); defaults to the month in the file name
    #[arg(long)]
    pub month: Option<YearMonth>,

    /// Total visits for the country chart of a single page (defaults to each
    /// page's monthly totals table)
    #[arg(long)]
    pub total_visits: Option<u64>,

    /// Number of months on the monthly summary axis
    #[arg(
        long,
        default_value_t = DEFAULT_MONTH_COUNT as u16,
        value_parser = clap::value_parser!(u16).range(1..=MAX_MONTH_COUNT)
    )]
    pub month_count: u16,

    /// Directory receiving one `<page>.json` per input page
    #[arg(long, default_value = "./output_data/charts")]
    pub output_dir: PathBuf,
}

/// Options shared by every page of a batch
#[derive(Debug, Clone, Copy)]
pub struct PageOptions {
    pub month: Option<YearMonth>,
    pub total_visits: Option<u64>,
    pub month_count: usize,
}

/// Everything a rendered page needs to draw its charts
#[derive(Debug, Clone, Serialize)]
pub struct PagePayload {
    pub page: String,
    /// "usage" or "index"
    pub kind: &'static str,
    pub fragments: Vec<String>,
    pub help_topics: Vec<HelpTopic>,
    /// Plotly figures keyed by report name
    pub charts: BTreeMap<String, PlotlyChart>,
}

impl PageCommand {
    pub fn run(&self, config: &ChartConfig) -> AppResult<()> {
        let paths = glob::glob(&self.input)?.collect::<Result<Vec<_>, _>>()?;
        if paths.is_empty() {
            return Err(AppError::InvalidData(format!(
                "No report pages match '{}'",
                self.input
            )));
        }
        if self.total_visits.is_some() && paths.len() > 1 {
            return Err(AppError::InvalidData(format!(
                "--total-visits applies to a single page, but '{}' matches {} pages",
                self.input,
                paths.len()
            )));
        }

        let options = PageOptions {
            month: self.month,
            total_visits: self.total_visits,
            month_count: usize::from(self.month_count),
        };

        for path in &paths {
            let doc = std::fs::read_to_string(path)?;
            let name = page_name(path);
            let options = PageOptions {
                month: options.month.or_else(|| month_in_link(&name)),
                ..options
            };

            let payload = build_page_payload(&doc, &name, &options, config);
            info!(page = %name, charts = payload.charts.len(), "Extracted page charts");

            let target = self.output_dir.join(format!("{}.json", file_stem(path)));
            write_output_to_file(&target, &export_json(&payload)?, "Page charts")?;
        }
        Ok(())
    }
}

/// Build the chart payload of one page
///
/// A page carrying the monthly summary table is an index page; any other
/// page is a monthly usage page. The daily chart needs the report month and
/// the country chart the month's visits total; each is left out without it.
pub fn build_page_payload(
    doc: &str,
    name: &str,
    options: &PageOptions,
    config: &ChartConfig,
) -> PagePayload {
    let page = ReportPage::parse(doc);
    let kind = if page.has(ReportKind::Monthly) {
        PageKind::Index
    } else {
        PageKind::Usage
    };
    let session = PageSession::from_page(doc, kind);

    let mut charts = BTreeMap::new();
    for report in ReportKind::ALL {
        if !page.has(report) {
            continue;
        }
        let chart = match report {
            ReportKind::Daily => {
                let usage = page.daily();
                log_extraction(&page, report, usage.len());
                match options.month {
                    Some(month) => build_daily_chart(&usage, month, config).to_plotly_chart(),
                    None => {
                        warn!(page = %name, "No report month known, skipping daily chart");
                        continue;
                    }
                }
            }
            ReportKind::Hourly => {
                let usage = page.hourly();
                log_extraction(&page, report, usage.len());
                build_hourly_chart(&usage, config).to_plotly_chart()
            }
            ReportKind::Country => match country_total(&page, options.total_visits, config) {
                Some(total) => {
                    let usage = page.country(total);
                    log_extraction(&page, report, usage.len());
                    build_country_chart(&usage, config).to_plotly_chart()
                }
                None => {
                    warn!(page = %name, "No visits total known, skipping country chart");
                    continue;
                }
            },
            ReportKind::Monthly => {
                let summary = page.monthly();
                log_extraction(&page, report, summary.len());
                build_monthly_chart(&summary, None, options.month_count, config).to_plotly_chart()
            }
        };
        charts.insert(report.to_string(), chart);
    }

    PagePayload {
        page: name.to_string(),
        kind: match kind {
            PageKind::Usage => "usage",
            PageKind::Index => "index",
        },
        fragments: session.fragments().to_vec(),
        help_topics: session.help_topics().to_vec(),
        charts,
    }
}

fn page_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default()
}

fn file_stem(path: &Path) -> String {
    path.file_stem()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| "page".to_string())
}
