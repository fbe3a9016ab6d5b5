//! Calendar utilities for the daily axis

use chrono::{Datelike, NaiveDate, Weekday};

use crate::types::YearMonth;

/// Check whether a day of the given month falls on a Saturday or Sunday
///
/// Returns false for days that do not exist in the month.
///
/// # Examples
/// ```
/// use report_charts::types::YearMonth;
/// use report_charts::utils::time::is_weekend;
///
/// let nov = YearMonth::new(2020, 11).unwrap();
/// assert!(is_weekend(nov, 1));    // Sunday
/// assert!(!is_weekend(nov, 2));   // Monday
/// assert!(!is_weekend(nov, 31));  // no such day
/// ```
pub fn is_weekend(month: YearMonth, day: u32) -> bool {
    NaiveDate::from_ymd_opt(month.year, month.month, day)
        .map(|date| matches!(date.weekday(), Weekday::Sat | Weekday::Sun))
        .unwrap_or(false)
}

/// Weekend flags for every day of the month, day 1 first
pub fn weekend_days(month: YearMonth) -> Vec<bool> {
    (1..=month.days_in_month())
        .map(|day| is_weekend(month, day))
        .collect()
}
