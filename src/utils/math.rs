//! Mathematical utility functions for chart inputs
//!
//! Percentages are computed in integer tenths so the one-decimal display
//! strings never carry floating-point artifacts.

/// Percentage of `total` in tenths of a percent, rounded half up.
///
/// Returns 0 if total is zero.
///
/// # Examples
/// ```
/// use report_charts::utils::math::percent_tenths;
///
/// assert_eq!(percent_tenths(150, 1000), 150);
/// assert_eq!(percent_tenths(1, 3), 333);
/// assert_eq!(percent_tenths(2, 3), 667);
/// assert_eq!(percent_tenths(5, 0), 0);  // Zero-division guard
/// ```
#[inline]
pub fn percent_tenths(part: u64, total: u64) -> u64 {
    if total == 0 {
        return 0;
    }
    let scaled = part as u128 * 1000 + total as u128 / 2;
    (scaled / total as u128) as u64
}

/// Percentage formatted to one decimal place with a trailing `%`
///
/// # Examples
/// ```
/// use report_charts::utils::math::format_percent;
///
/// assert_eq!(format_percent(150, 1000), "15.0%");
/// assert_eq!(format_percent(1, 3), "33.3%");
/// assert_eq!(format_percent(0, 0), "0.0%");
/// ```
pub fn format_percent(part: u64, total: u64) -> String {
    let tenths = percent_tenths(part, total);
    format!("{}.{}%", tenths / 10, tenths % 10)
}
