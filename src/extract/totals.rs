//! Month totals read back from a usage page
//!
//! The totals table lists one statistic per row: a label cell followed by
//! the value. Country percentages are taken against the month's visits
//! total from this table, since the country table itself only lists the
//! top countries.

use crate::html::ReportTable;

/// Element id of the monthly totals table on a usage page
pub const TOTALS_TABLE_ID: &str = "monthly_totals_table";

/// Value of the first totals row whose label cell reads `label`
///
/// A matching row whose value is not a whole number gives `None`, never a
/// zero total.
///
/// # Examples
/// ```
/// use report_charts::extract::totals::{total_by_label, TOTALS_TABLE_ID};
/// use report_charts::html::ReportTable;
///
/// let doc = "<table id=\"monthly_totals_table\"><tbody>\
///            <tr><th>Total Hits</th><td colspan=\"2\">9120</td></tr>\
///            <tr><th>Total Visits</th><td colspan=\"2\">2000</td></tr>\
///            </tbody></table>";
/// let table = ReportTable::find(doc, TOTALS_TABLE_ID);
/// assert_eq!(total_by_label(table.as_ref(), "Total Visits"), Some(2000));
/// assert_eq!(total_by_label(table.as_ref(), "Total Pages"), None);
/// ```
pub fn total_by_label(table: Option<&ReportTable>, label: &str) -> Option<u64> {
    let label = label.trim();
    table?
        .groups
        .iter()
        .flat_map(|group| group.rows.iter())
        .find(|row| row.cells.first().map(|c| c.text.trim()) == Some(label))
        .and_then(|row| row.cells.get(1))
        .and_then(|cell| cell.text.trim().parse().ok())
}
