//! Report Chart Extractor - Type System
//!
//! - `month`: Calendar month keys used by the monthly summary axis
//! - `usage`: Parallel-array series bundles for the daily, hourly and monthly reports
//! - `country`: Country usage bundle with the rolled-up "other" slice
//! - `visualisation`: Plotly chart types consumed by the renderer

pub mod country;
pub mod month;
pub mod usage;
pub mod visualisation;

pub use country::{CountryUsage, RollupSlice};
pub use month::YearMonth;
pub use usage::{DailyUsage, HourlyUsage, MonthlySummary};
