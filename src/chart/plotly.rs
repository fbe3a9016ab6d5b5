//! Conversion of chart payloads into Plotly.js figures

use crate::types::visualisation::{
    PlotlyAxis, PlotlyChart, PlotlyData, PlotlyLayout, PlotlyPie, PlotlyTrace,
};

use super::payload::{PieChart, UsageChart};

/// Vertical bands for one, two or three stacked y-axes, top first
fn axis_domains(count: usize) -> &'static [(f64, f64)] {
    match count {
        0 | 1 => &[(0.0, 1.0)],
        2 => &[(0.35, 1.0), (0.0, 0.3)],
        _ => &[(0.55, 1.0), (0.28, 0.5), (0.0, 0.23)],
    }
}

fn axis_ref(index: usize) -> String {
    match index {
        0 => "y".to_string(),
        n => format!("y{}", n + 1),
    }
}

impl UsageChart {
    /// Stacked bar panes sharing one category axis
    ///
    /// Hover headings double as the category keys so repeated labels (the
    /// same month name in consecutive years) stay distinct; the visible tick
    /// text is the short category, coloured where the chart asks for it.
    pub fn to_plotly_chart(&self) -> PlotlyChart {
        let x = self.tooltip_labels.clone();
        let tick_text: Vec<String> = self
            .categories
            .iter()
            .zip(&self.category_colors)
            .map(|(label, color)| match color {
                Some(color) => format!("<span style=\"color: {}\">{}</span>", color, label),
                None => label.clone(),
            })
            .collect();

        let domains = axis_domains(self.axes.len());
        let mut axes: Vec<PlotlyAxis> = self
            .axes
            .iter()
            .enumerate()
            .map(|(i, axis)| {
                let (from, to) = domains[i.min(domains.len() - 1)];
                PlotlyAxis::titled(&axis.title_html)
                    .with_max(axis.max)
                    .in_domain(from, to)
                    .with_gridcolor(&self.gridline_color)
            })
            .collect();

        let data = self
            .series
            .iter()
            .map(|series| {
                let index = self
                    .axes
                    .iter()
                    .position(|a| a.slot == series.axis)
                    .unwrap_or(0);
                let y = series.points.iter().map(|p| p.y.map(|v| v as f64)).collect();
                let mut trace = PlotlyTrace::bar(x.clone(), y, &series.name, &series.color);
                if index > 0 {
                    trace = trace.on_axis(&axis_ref(index));
                }
                if let Some(tooltips) = &series.tooltips {
                    let text = tooltips
                        .iter()
                        .map(|t| t.clone().unwrap_or_default())
                        .collect();
                    trace = trace.with_hover_text(text);
                }
                PlotlyData::Bar(trace)
            })
            .collect();

        let mut yaxes = axes.drain(..);
        let first = yaxes.next().unwrap_or_default();
        let mut layout = PlotlyLayout::basic(&self.title, "", "")
            .with_title_color(&self.title_color)
            .with_background(&self.background_color)
            .with_legend("h", 0.0, -0.15, "left");
        layout.yaxis = first;
        layout.yaxis2 = yaxes.next();
        layout.yaxis3 = yaxes.next();
        layout.xaxis = layout.xaxis.with_ticks(x, tick_text);
        layout.barmode = Some("group".to_string());
        layout.bargap = Some(0.15);

        PlotlyChart { data, layout }
    }
}

impl PieChart {
    pub fn to_plotly_chart(&self) -> PlotlyChart {
        let pie = PlotlyPie::new(
            self.slices.iter().map(|s| s.label.clone()).collect(),
            self.slices.iter().map(|s| s.value as f64).collect(),
            self.slices.iter().map(|s| s.color.clone()).collect(),
            self.slices.iter().map(|s| s.percent.clone()).collect(),
        );

        let layout = PlotlyLayout::basic(&self.title, "", "")
            .with_title_color(&self.title_color)
            .with_background(&self.background_color)
            .with_legend("v", 1.02, 1.0, "left");

        PlotlyChart {
            data: vec![PlotlyData::Pie(pie)],
            layout,
        }
    }
}
