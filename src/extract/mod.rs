//! Series extraction from report tables
//!
//! Each report kind has an extractor that turns collected rows and a
//! resolved layout into a series bundle. The `*_usage` functions run the
//! whole pipeline for one table (version lookup, layout resolution, row
//! collection, extraction) and fall back to an empty bundle for a missing
//! table or an unsupported version.

mod cells;
pub mod country;
pub mod daily;
pub mod hourly;
pub mod monthly;
pub mod totals;

pub use cells::month_in_link;
pub use country::extract_country;
pub use daily::extract_daily;
pub use hourly::extract_hourly;
pub use monthly::{extract_monthly, RowOrder};
pub use totals::{total_by_label, TOTALS_TABLE_ID};

use std::collections::HashMap;

use crate::html::{collect_rows, format_version, ReportTable};
use crate::layout::{resolve, ReportKind};
use crate::types::{CountryUsage, DailyUsage, HourlyUsage, MonthlySummary};

pub fn daily_usage(table: Option<&ReportTable>) -> DailyUsage {
    match resolve(ReportKind::Daily, format_version(table)) {
        Ok(layout) => extract_daily(&collect_rows(table), layout),
        Err(_) => DailyUsage::default(),
    }
}

pub fn hourly_usage(table: Option<&ReportTable>) -> HourlyUsage {
    match resolve(ReportKind::Hourly, format_version(table)) {
        Ok(layout) => extract_hourly(&collect_rows(table), layout),
        Err(_) => HourlyUsage::default(),
    }
}

pub fn country_usage(table: Option<&ReportTable>, total_visits: u64) -> CountryUsage {
    match resolve(ReportKind::Country, format_version(table)) {
        Ok(layout) => extract_country(&collect_rows(table), layout, total_visits),
        Err(_) => CountryUsage::default(),
    }
}

pub fn monthly_summary(table: Option<&ReportTable>, order: RowOrder) -> MonthlySummary {
    match resolve(ReportKind::Monthly, format_version(table)) {
        Ok(layout) => extract_monthly(&collect_rows(table), layout, order),
        Err(_) => MonthlySummary::default(),
    }
}

/// Why a report table can or cannot be charted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableStatus {
    /// No table with the report's id
    Missing,
    /// Declared version has no layout
    Unsupported(u32),
    /// Layout found for this version
    Supported(u32),
}

/// The report tables of one rendered page
#[derive(Debug, Clone, Default)]
pub struct ReportPage {
    tables: HashMap<ReportKind, ReportTable>,
    totals: Option<ReportTable>,
}

impl ReportPage {
    /// Parse a page and keep the tables of every known report kind along
    /// with the monthly totals table
    pub fn parse(doc: &str) -> Self {
        let mut tables = HashMap::new();
        let mut totals = None;
        for table in ReportTable::parse_all(doc) {
            if table.id == TOTALS_TABLE_ID {
                totals.get_or_insert(table);
            } else if let Some(kind) = ReportKind::ALL.into_iter().find(|k| k.table_id() == table.id) {
                tables.entry(kind).or_insert(table);
            }
        }
        Self { tables, totals }
    }

    pub fn table(&self, kind: ReportKind) -> Option<&ReportTable> {
        self.tables.get(&kind)
    }

    pub fn has(&self, kind: ReportKind) -> bool {
        self.tables.contains_key(&kind)
    }

    pub fn status(&self, kind: ReportKind) -> TableStatus {
        match self.table(kind) {
            None => TableStatus::Missing,
            Some(table) => {
                let version = format_version(Some(table));
                match resolve(kind, version) {
                    Ok(_) => TableStatus::Supported(version),
                    Err(_) => TableStatus::Unsupported(version),
                }
            }
        }
    }

    pub fn daily(&self) -> DailyUsage {
        daily_usage(self.table(ReportKind::Daily))
    }

    pub fn hourly(&self) -> HourlyUsage {
        hourly_usage(self.table(ReportKind::Hourly))
    }

    /// Country usage with percentages taken against `total_visits`
    pub fn country(&self, total_visits: u64) -> CountryUsage {
        country_usage(self.table(ReportKind::Country), total_visits)
    }

    /// Visits total of the month from the totals table, found by its row label
    pub fn total_visits(&self, label: &str) -> Option<u64> {
        total_by_label(self.totals.as_ref(), label)
    }

    pub fn monthly(&self) -> MonthlySummary {
        monthly_summary(self.table(ReportKind::Monthly), RowOrder::NewestFirst)
    }
}
