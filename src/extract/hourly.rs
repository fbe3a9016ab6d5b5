//! Hourly usage extraction

use super::cells;
use crate::html::Row;
use crate::layout::{Field, Layout};
use crate::types::HourlyUsage;

/// Read hourly usage rows; same malformed-table rule as the daily report
pub fn extract_hourly(rows: &[&Row], layout: &Layout) -> HourlyUsage {
    let mut usage = HourlyUsage::default();
    for row in rows {
        if row.len() != layout.columns {
            return HourlyUsage::default();
        }
        let hour = match u32::try_from(cells::count(row, layout, Field::Hour)) {
            Ok(hour) => hour,
            Err(_) => return HourlyUsage::default(),
        };
        usage.push(hour, cells::counters(row, layout));
    }
    usage
}
