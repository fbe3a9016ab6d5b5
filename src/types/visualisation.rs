//! Plotly chart types for data visualisation
//!
//! The renderer payload handed to Plotly.js: `{data: [...], layout: {...}}`.
//! Usage charts stack up to three y-axes in separate vertical domains over a
//! shared category x-axis; the country chart is a single pie trace.

use serde::Serialize;

// ============================================================================
// Font and Styling Types
// ============================================================================

/// Plotly font configuration for titles and labels
#[derive(Debug, Clone, Serialize, Default)]
pub struct PlotlyFont {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub family: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

/// Plotly legend configuration
#[derive(Debug, Clone, Serialize, Default)]
pub struct PlotlyLegend {
    /// Legend orientation: "v" (vertical) or "h" (horizontal)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub orientation: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y: Option<f64>,
    /// Horizontal anchor: "left", "center", "right", "auto"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub xanchor: Option<String>,
}

// ============================================================================
// Chart Types
// ============================================================================

/// Complete Plotly chart data structure
#[derive(Debug, Clone, Serialize)]
pub struct PlotlyChart {
    pub data: Vec<PlotlyData>,
    pub layout: PlotlyLayout,
}

/// One trace of either kind; serialised without a wrapper
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum PlotlyData {
    Bar(PlotlyTrace),
    Pie(PlotlyPie),
}

/// Bar trace over the category x-axis
///
/// `y` holds `null` where the dense axis has no data point.
#[derive(Debug, Clone, Serialize)]
pub struct PlotlyTrace {
    pub x: Vec<String>,
    pub y: Vec<Option<f64>>,
    pub name: String,
    #[serde(rename = "type")]
    pub trace_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub yaxis: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marker: Option<PlotlyMarker>,
    /// Per-point hover text
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hovertemplate: Option<String>,
}

/// Pie trace
#[derive(Debug, Clone, Serialize)]
pub struct PlotlyPie {
    pub labels: Vec<String>,
    pub values: Vec<f64>,
    #[serde(rename = "type")]
    pub trace_type: String,
    pub marker: PlotlyPieMarker,
    /// Per-slice text (percentages)
    pub text: Vec<String>,
    pub textinfo: String,
    /// Keep slices in the given order instead of sorting by value
    pub sort: bool,
}

/// Plotly marker configuration
#[derive(Debug, Clone, Serialize)]
pub struct PlotlyMarker {
    pub color: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct PlotlyPieMarker {
    pub colors: Vec<String>,
}

/// Plotly hover label configuration
#[derive(Debug, Clone, Serialize)]
pub struct PlotlyHoverLabel {
    /// -1 means show full name without truncation
    pub namelength: i32,
}

/// Plotly layout configuration
#[derive(Debug, Clone, Serialize)]
pub struct PlotlyLayout {
    pub title: PlotlyTitle,
    pub xaxis: PlotlyAxis,
    pub yaxis: PlotlyAxis,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub yaxis2: Option<PlotlyAxis>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub yaxis3: Option<PlotlyAxis>,
    pub hovermode: String,
    pub hoverlabel: PlotlyHoverLabel,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bargap: Option<f64>,
    /// Bar mode: "stack", "group", "overlay", "relative"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub barmode: Option<String>,
    /// Legend configuration (position, orientation)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub legend: Option<PlotlyLegend>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub paper_bgcolor: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plot_bgcolor: Option<String>,
}

/// Plotly title configuration
#[derive(Debug, Clone, Serialize)]
pub struct PlotlyTitle {
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font: Option<PlotlyFont>,
}

/// Plotly axis configuration
#[derive(Debug, Clone, Serialize, Default)]
pub struct PlotlyAxis {
    pub title: String,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub axis_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tickangle: Option<i32>,
    /// Fixed axis range, `[0, max]` for manually scaled axes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub range: Option<Vec<f64>>,
    /// Vertical share of the plot area, e.g. `[0.6, 1.0]`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain: Option<Vec<f64>>,
    /// Axis this one is anchored to ("x")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub anchor: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gridcolor: Option<String>,
    /// Category positions with custom tick labels
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tickvals: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ticktext: Option<Vec<String>>,
}

impl PlotlyAxis {
    pub fn titled(title: &str) -> Self {
        Self {
            title: title.to_string(),
            ..Default::default()
        }
    }

    /// Scale manually from zero to `max`; an axis with no data keeps auto-range
    pub fn with_max(mut self, max: u64) -> Self {
        if max > 0 {
            self.range = Some(vec![0.0, max as f64]);
        }
        self
    }

    /// Place the axis in a vertical band of the plot area
    pub fn in_domain(mut self, from: f64, to: f64) -> Self {
        self.domain = Some(vec![from, to]);
        self.anchor = Some("x".to_string());
        self
    }

    pub fn with_gridcolor(mut self, color: &str) -> Self {
        self.gridcolor = Some(color.to_string());
        self
    }

    /// Replace the category tick labels
    pub fn with_ticks(mut self, values: Vec<String>, text: Vec<String>) -> Self {
        self.tickvals = Some(values);
        self.ticktext = Some(text);
        self
    }
}

impl PlotlyLayout {
    /// Create a basic layout with single y-axis
    pub fn basic(title: &str, x_title: &str, y_title: &str) -> Self {
        Self {
            title: PlotlyTitle {
                text: title.to_string(),
                font: None,
            },
            xaxis: PlotlyAxis {
                axis_type: Some("category".to_string()),
                ..PlotlyAxis::titled(x_title)
            },
            yaxis: PlotlyAxis::titled(y_title),
            yaxis2: None,
            yaxis3: None,
            hovermode: "x unified".to_string(),
            hoverlabel: PlotlyHoverLabel { namelength: -1 },
            bargap: None,
            barmode: None,
            legend: None,
            paper_bgcolor: None,
            plot_bgcolor: None,
        }
    }

    /// Add legend configuration
    ///
    /// Standard positioning: `with_legend("v", 1.02, 1.0, "left")` for vertical legend on right
    pub fn with_legend(mut self, orientation: &str, x: f64, y: f64, xanchor: &str) -> Self {
        self.legend = Some(PlotlyLegend {
            orientation: Some(orientation.to_string()),
            x: Some(x),
            y: Some(y),
            xanchor: Some(xanchor.to_string()),
        });
        self
    }

    /// Set title colour
    pub fn with_title_color(mut self, color: &str) -> Self {
        self.title.font = Some(PlotlyFont {
            color: Some(color.to_string()),
            ..Default::default()
        });
        self
    }

    /// Set the page and plot area background
    pub fn with_background(mut self, color: &str) -> Self {
        self.paper_bgcolor = Some(color.to_string());
        self.plot_bgcolor = Some(color.to_string());
        self
    }
}

impl PlotlyTrace {
    /// Create a bar trace
    pub fn bar(x: Vec<String>, y: Vec<Option<f64>>, name: &str, color: &str) -> Self {
        Self {
            x,
            y,
            name: name.to_string(),
            trace_type: "bar".to_string(),
            yaxis: None,
            marker: Some(PlotlyMarker {
                color: color.to_string(),
            }),
            text: None,
            hovertemplate: None,
        }
    }

    /// Plot against another y-axis ("y2", "y3")
    pub fn on_axis(mut self, axis: &str) -> Self {
        self.yaxis = Some(axis.to_string());
        self
    }

    /// Show per-point text instead of the y value on hover
    pub fn with_hover_text(mut self, text: Vec<String>) -> Self {
        self.text = Some(text);
        self.hovertemplate = Some("%{text}".to_string());
        self
    }
}

impl PlotlyPie {
    pub fn new(labels: Vec<String>, values: Vec<f64>, colors: Vec<String>, text: Vec<String>) -> Self {
        Self {
            labels,
            values,
            trace_type: "pie".to_string(),
            marker: PlotlyPieMarker { colors },
            text,
            textinfo: "label+text".to_string(),
            sort: false,
        }
    }
}
