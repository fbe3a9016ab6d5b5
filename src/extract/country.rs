//! Country usage extraction with the rolled-up "other" slice

use super::cells;
use crate::config::PIE_SLICE_COUNT;
use crate::html::Row;
use crate::layout::{Field, Layout, RawAttr};
use crate::types::{CountryUsage, RollupSlice};
use crate::utils::math::format_percent;

/// Read the top countries by visits
///
/// At most `PIE_SLICE_COUNT` entries are kept, in table order. Percentages
/// are taken against `total`, the visits of the whole month: the table only
/// lists the top countries, so its rows need not add up to it. When more
/// rows exist than are kept and the kept entries fall short of the total,
/// the remainder becomes the rollup slice.
pub fn extract_country(rows: &[&Row], layout: &Layout, total: u64) -> CountryUsage {
    if rows.iter().any(|row| row.len() != layout.columns) {
        return CountryUsage::default();
    }

    let mut usage = CountryUsage {
        total_visits: total,
        ..Default::default()
    };

    for row in rows.iter().take(PIE_SLICE_COUNT) {
        let visits = cells::count(row, layout, Field::Visits);
        let code = cells::raw(row, layout, RawAttr::CountryCode)
            .unwrap_or("")
            .to_string();
        let name = cells::text(row, layout, Field::CountryName).to_string();
        usage.push(code, name, visits, format_percent(visits, total));
    }

    let displayed = usage.displayed_visits();
    if rows.len() > PIE_SLICE_COUNT && displayed < total {
        let visits = total - displayed;
        usage.other = Some(RollupSlice {
            visits,
            percent: format_percent(visits, total),
        });
    }

    usage
}
