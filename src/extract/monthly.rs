//! Monthly summary extraction

use super::cells;
use crate::html::{skip_footer_groups, Row};
use crate::layout::Layout;
use crate::types::MonthlySummary;

/// Order in which the summary table lists its months
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RowOrder {
    /// Most recent month first, as the report generator writes it
    #[default]
    NewestFirst,
    OldestFirst,
}

/// Read monthly summary rows into chronological (oldest-first) arrays
///
/// Footer row groups are skipped. A data row with the wrong cell count or
/// without a recognisable month key makes the table malformed and yields
/// the empty bundle.
pub fn extract_monthly(rows: &[&Row], layout: &Layout, order: RowOrder) -> MonthlySummary {
    let rows = skip_footer_groups(rows.to_vec(), layout.columns);

    let mut summary = MonthlySummary::default();
    for row in rows {
        if row.len() != layout.columns {
            return MonthlySummary::default();
        }
        let Some(month) = cells::month_key(row, layout) else {
            return MonthlySummary::default();
        };
        summary.push(month, cells::counters(row, layout));
    }

    if order == RowOrder::NewestFirst {
        summary.reverse();
    }
    summary
}
