//! Renderer payloads
//!
//! The intermediate chart representation produced from aligned series. It
//! is rebuilt from the page on every run and never persisted; the Plotly
//! conversion in `plotly.rs` is one consumer of it.

use serde::Serialize;

/// Vertical band a series is plotted in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AxisSlot {
    /// Hits, files and pages
    Counts,
    /// Visits and hosts
    Visits,
    /// Transfer amounts
    Transfer,
}

/// One dense-axis position and its value, `None` for a gap
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ChartPoint {
    pub x: u32,
    pub y: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChartSeries {
    pub name: String,
    pub color: String,
    pub axis: AxisSlot,
    pub points: Vec<ChartPoint>,
    /// Display strings per point, when the raw value is not what users read
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tooltips: Option<Vec<Option<String>>>,
}

impl ChartSeries {
    /// Values of the points that carry data
    pub fn present_values(&self) -> Vec<u64> {
        self.points.iter().filter_map(|p| p.y).collect()
    }
}

/// A y-axis with its manual scaling ceiling
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChartAxis {
    pub slot: AxisSlot,
    /// Colour-coded title markup naming the series on this axis
    pub title_html: String,
    pub max: u64,
    /// `max` as shown on the axis (formatted bytes for transfer)
    pub max_label: String,
}

/// Bar chart over a dense category axis
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UsageChart {
    pub title: String,
    pub categories: Vec<String>,
    /// Label colour override per category (weekend days)
    pub category_colors: Vec<Option<String>>,
    /// Hover heading per category
    pub tooltip_labels: Vec<String>,
    pub axes: Vec<ChartAxis>,
    pub series: Vec<ChartSeries>,
    pub background_color: String,
    pub gridline_color: String,
    pub title_color: String,
}

impl UsageChart {
    pub fn axis(&self, slot: AxisSlot) -> Option<&ChartAxis> {
        self.axes.iter().find(|a| a.slot == slot)
    }

    pub fn series(&self, name: &str) -> Option<&ChartSeries> {
        self.series.iter().find(|s| s.name == name)
    }

    /// True when no series has a single data point
    pub fn is_blank(&self) -> bool {
        self.series
            .iter()
            .all(|s| s.points.iter().all(|p| p.y.is_none()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PieSlice {
    pub label: String,
    /// Country code, empty when the table carries none
    pub code: String,
    pub value: u64,
    pub percent: String,
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PieChart {
    pub title: String,
    pub slices: Vec<PieSlice>,
    pub total: u64,
    pub background_color: String,
    pub title_color: String,
}
