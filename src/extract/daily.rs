//! Daily usage extraction

use super::cells;
use crate::html::Row;
use crate::layout::{Field, Layout};
use crate::types::DailyUsage;

/// Read daily usage rows into parallel arrays
///
/// A row whose cell count differs from the layout's, or whose day does not
/// fit a `u32`, makes the whole table malformed: the result is the empty
/// bundle, never a partial one.
pub fn extract_daily(rows: &[&Row], layout: &Layout) -> DailyUsage {
    let mut usage = DailyUsage::default();
    for row in rows {
        if row.len() != layout.columns {
            return DailyUsage::default();
        }
        let day = match u32::try_from(cells::count(row, layout, Field::Day)) {
            Ok(day) => day,
            Err(_) => return DailyUsage::default(),
        };
        usage.push(day, cells::counters(row, layout));
    }
    usage
}
