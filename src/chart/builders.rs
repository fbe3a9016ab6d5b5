//! Chart assembly per report kind
//!
//! Each builder aligns a bundle against its dense axis and reshapes it into
//! a `UsageChart` or `PieChart`. An alignment failure leaves the chart with
//! its full axis and no data points.

use tracing::warn;

use crate::align::{align_months, align_range, IndexRefs};
use crate::config::ChartConfig;
use crate::errors::AlignError;
use crate::layout::ReportKind;
use crate::types::usage::UsageCounters;
use crate::types::{CountryUsage, DailyUsage, HourlyUsage, MonthlySummary, YearMonth};
use crate::utils::time::weekend_days;
use crate::utils::units::format_xfer;

use super::adapter::{
    max_chart_value, month_categories, month_tooltip_labels, pie_slices, series_title_html,
    usage_points, weekend_label_colors,
};
use super::payload::{AxisSlot, ChartAxis, ChartSeries, PieChart, UsageChart};

/// Months shown by the summary chart unless told otherwise
pub const DEFAULT_MONTH_COUNT: usize = 12;

fn refs_or_gaps(result: Result<IndexRefs, AlignError>, len: usize, kind: ReportKind) -> IndexRefs {
    match result {
        Ok(refs) => refs,
        Err(e) => {
            warn!(report = %kind, "Dropping chart data: {}", e);
            IndexRefs::empty(len)
        }
    }
}

/// Builds the series of one chart from a shared dense axis
struct SeriesSet<'a> {
    axis: &'a [u32],
    refs: &'a IndexRefs,
    series: Vec<ChartSeries>,
}

impl<'a> SeriesSet<'a> {
    fn new(axis: &'a [u32], refs: &'a IndexRefs) -> Self {
        Self {
            axis,
            refs,
            series: Vec::new(),
        }
    }

    fn add(&mut self, name: &str, color: &str, slot: AxisSlot, values: &[u64]) {
        self.series.push(ChartSeries {
            name: name.to_string(),
            color: color.to_string(),
            axis: slot,
            points: usage_points(self.axis, self.refs, values),
            tooltips: None,
        });
    }

    fn add_transfer(&mut self, config: &ChartConfig, values: &[u64], display: &[String]) {
        self.add(&config.titles.xfer, &config.xfer_color, AxisSlot::Transfer, values);
        if let Some(series) = self.series.last_mut() {
            series.tooltips = Some(self.refs.project(display));
        }
    }

    /// Axis scaled to the largest point of the series plotted on it
    fn scaled_axis(&self, slot: AxisSlot, config: &ChartConfig) -> ChartAxis {
        let on_axis: Vec<&ChartSeries> = self.series.iter().filter(|s| s.axis == slot).collect();
        let values: Vec<u64> = on_axis.iter().flat_map(|s| s.present_values()).collect();
        let max = max_chart_value(&values);

        let parts: Vec<(&str, &str)> = on_axis
            .iter()
            .map(|s| (s.name.as_str(), s.color.as_str()))
            .collect();

        let max_label = match slot {
            AxisSlot::Transfer => format_xfer(max, &config.units),
            _ => max.to_string(),
        };

        ChartAxis {
            slot,
            title_html: series_title_html(&parts),
            max,
            max_label,
        }
    }

    fn into_chart(
        self,
        title: &str,
        categories: Vec<String>,
        category_colors: Vec<Option<String>>,
        tooltip_labels: Vec<String>,
        slots: &[AxisSlot],
        config: &ChartConfig,
    ) -> UsageChart {
        let axes = slots
            .iter()
            .map(|&slot| self.scaled_axis(slot, config))
            .collect();
        UsageChart {
            title: title.to_string(),
            categories,
            category_colors,
            tooltip_labels,
            axes,
            series: self.series,
            background_color: config.background_color.clone(),
            gridline_color: config.gridline_color.clone(),
            title_color: config.title_color.clone(),
        }
    }
}

/// Daily chart over every day of `month`, weekend labels highlighted
pub fn build_daily_chart(usage: &DailyUsage, month: YearMonth, config: &ChartConfig) -> UsageChart {
    let days = month.days_in_month();
    let axis: Vec<u32> = (1..=days).collect();
    let refs = refs_or_gaps(
        align_range(1..=days, &usage.days),
        axis.len(),
        ReportKind::Daily,
    );

    let titles = &config.titles;
    let mut set = SeriesSet::new(&axis, &refs);
    set.add(&titles.hits, &config.hits_color, AxisSlot::Counts, &usage.hits);
    set.add(&titles.files, &config.files_color, AxisSlot::Counts, &usage.files);
    set.add(&titles.pages, &config.pages_color, AxisSlot::Counts, &usage.pages);
    set.add(&titles.visits, &config.visits_color, AxisSlot::Visits, &usage.visits);
    set.add(&titles.hosts, &config.hosts_color, AxisSlot::Visits, &usage.hosts);
    set.add_transfer(config, &usage.xfer, &usage.xfer_display);

    let categories: Vec<String> = axis.iter().map(|d| d.to_string()).collect();
    let month_name = config
        .long_months
        .get(month.month0())
        .map(String::as_str)
        .unwrap_or_default();
    let tooltip_labels = axis
        .iter()
        .map(|d| format!("{} {}, {}", month_name, d, month.year))
        .collect();

    set.into_chart(
        &titles.daily_chart,
        categories,
        weekend_label_colors(&weekend_days(month), &config.weekend_color),
        tooltip_labels,
        &[AxisSlot::Counts, AxisSlot::Visits, AxisSlot::Transfer],
        config,
    )
}

/// Hourly chart over hours 0-23
pub fn build_hourly_chart(usage: &HourlyUsage, config: &ChartConfig) -> UsageChart {
    let axis: Vec<u32> = (0..=23).collect();
    let refs = refs_or_gaps(
        align_range(0..=23, &usage.hours),
        axis.len(),
        ReportKind::Hourly,
    );

    let titles = &config.titles;
    let mut set = SeriesSet::new(&axis, &refs);
    set.add(&titles.hits, &config.hits_color, AxisSlot::Counts, &usage.hits);
    set.add(&titles.files, &config.files_color, AxisSlot::Counts, &usage.files);
    set.add(&titles.pages, &config.pages_color, AxisSlot::Counts, &usage.pages);
    set.add_transfer(config, &usage.xfer, &usage.xfer_display);

    let categories: Vec<String> = axis.iter().map(|h| h.to_string()).collect();
    let tooltip_labels = axis.iter().map(|h| format!("{:02}:00", h)).collect();

    set.into_chart(
        &titles.hourly_chart,
        categories,
        vec![None; axis.len()],
        tooltip_labels,
        &[AxisSlot::Counts, AxisSlot::Transfer],
        config,
    )
}

/// Monthly summary chart over `count` months
///
/// Without an explicit first month the axis ends at the latest month in the
/// summary. Months outside the axis are left out before alignment. An empty
/// summary with no first month produces a chart with no categories.
pub fn build_monthly_chart(
    summary: &MonthlySummary,
    first: Option<YearMonth>,
    count: usize,
    config: &ChartConfig,
) -> UsageChart {
    let first = first.or_else(|| {
        summary
            .last_month()
            .map(|last| last.offset(1 - count as i64))
    });
    let count = if first.is_some() { count } else { 0 };
    let first = first.unwrap_or_default();

    let window = months_in_window(summary, first, count);
    let axis: Vec<u32> = (0..count as u32).collect();
    let refs = refs_or_gaps(
        align_months(first, count, &window.months),
        count,
        ReportKind::Monthly,
    );

    let titles = &config.titles;
    let mut set = SeriesSet::new(&axis, &refs);
    set.add(&titles.hits, &config.hits_color, AxisSlot::Counts, &window.hits);
    set.add(&titles.files, &config.files_color, AxisSlot::Counts, &window.files);
    set.add(&titles.pages, &config.pages_color, AxisSlot::Counts, &window.pages);
    set.add(&titles.visits, &config.visits_color, AxisSlot::Visits, &window.visits);
    set.add(&titles.hosts, &config.hosts_color, AxisSlot::Visits, &window.hosts);
    set.add_transfer(config, &window.xfer, &window.xfer_display);

    set.into_chart(
        &titles.monthly_chart,
        month_categories(first, count, &config.short_months),
        vec![None; count],
        month_tooltip_labels(first, count, &config.long_months),
        &[AxisSlot::Counts, AxisSlot::Visits, AxisSlot::Transfer],
        config,
    )
}

/// Rows of the summary whose month lies in `[first, first + count)`
fn months_in_window(summary: &MonthlySummary, first: YearMonth, count: usize) -> MonthlySummary {
    let end = first.offset(count as i64);
    let mut out = MonthlySummary::default();
    for i in 0..summary.len() {
        let month = summary.months[i];
        if month >= first && month < end {
            out.push(
                month,
                UsageCounters {
                    hits: summary.hits[i],
                    files: summary.files[i],
                    pages: summary.pages[i],
                    visits: summary.visits[i],
                    hosts: summary.hosts[i],
                    xfer: summary.xfer[i],
                    xfer_display: summary.xfer_display[i].clone(),
                },
            );
        }
    }
    out
}

/// Country pie chart
pub fn build_country_chart(usage: &CountryUsage, config: &ChartConfig) -> PieChart {
    PieChart {
        title: config.titles.country_chart.clone(),
        slices: pie_slices(usage, config),
        total: usage.total_visits,
        background_color: config.background_color.clone(),
        title_color: config.title_color.clone(),
    }
}
