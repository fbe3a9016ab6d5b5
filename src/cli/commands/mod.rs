pub mod page;
pub mod print_config;
pub mod usage;

use crate::config::ChartConfig;
use crate::errors::AppResult;
use crate::extract::{ReportPage, TableStatus};
use crate::layout::ReportKind;
use std::path::Path;
use tracing::{debug, info};

/// Upper bound of `--month-count` (a century of months)
pub const MAX_MONTH_COUNT: i64 = 1200;

/// Read and parse a report page
pub(crate) fn load_page(path: &Path) -> AppResult<ReportPage> {
    let doc = std::fs::read_to_string(path)?;
    info!("Parsing report page {}", path.display());
    Ok(ReportPage::parse(&doc))
}

/// Record why a report produced no data
///
/// `extracted` is the number of data points the extractor returned.
pub(crate) fn log_extraction(page: &ReportPage, kind: ReportKind, extracted: usize) {
    match page.status(kind) {
        TableStatus::Missing => {
            debug!(report = %kind, table = kind.table_id(), "Report table not found")
        }
        TableStatus::Unsupported(version) => {
            debug!(report = %kind, version, "Unsupported table version, no data")
        }
        TableStatus::Supported(version) => {
            let rows = page.table(kind).map(|t| t.row_count()).unwrap_or(0);
            if extracted == 0 && rows > 0 {
                debug!(
                    report = %kind,
                    version,
                    rows,
                    "Table rows do not match the layout, no data"
                );
            } else {
                debug!(report = %kind, version, points = extracted, "Extracted report data");
            }
        }
    }
}

/// Month visits total for the country chart
///
/// An explicit total wins; otherwise the page's monthly totals table is
/// read. `None` when neither is available.
pub(crate) fn country_total(
    page: &ReportPage,
    explicit: Option<u64>,
    config: &ChartConfig,
) -> Option<u64> {
    let total = explicit.or_else(|| page.total_visits(&config.titles.total_visits));
    if explicit.is_none() {
        debug!(total = ?total, "Visits total from the monthly totals table");
    }
    total
}

/// Write output to file with safe directory creation
pub(crate) fn write_output_to_file(path: &Path, content: &str, description: &str) -> AppResult<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, content)?;
    println!("{} written to: {}", description, path.display());
    Ok(())
}

/// Print output, or write it when a path is given
pub(crate) fn emit(output: &str, path: Option<&Path>, description: &str) -> AppResult<()> {
    match path {
        Some(path) => write_output_to_file(path, output, description),
        None => {
            print!("{}", output);
            Ok(())
        }
    }
}
