//! Shared helpers for percentages, calendar days and transfer units

pub mod math;
pub mod time;
pub mod units;
