//! Chart data adaptation
//!
//! Turns extracted bundles into renderer payloads: dense point series,
//! axis ceilings, pie slices and month labels.

pub mod adapter;
pub mod builders;
pub mod payload;
pub mod plotly;

pub use builders::{
    build_country_chart, build_daily_chart, build_hourly_chart, build_monthly_chart,
    DEFAULT_MONTH_COUNT,
};
pub use payload::{AxisSlot, ChartAxis, ChartPoint, ChartSeries, PieChart, PieSlice, UsageChart};
