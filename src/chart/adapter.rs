//! Reshaping of extracted series into chart inputs

use crate::align::IndexRefs;
use crate::config::ChartConfig;
use crate::html::html_encode;
use crate::types::{CountryUsage, YearMonth};

use super::payload::{ChartPoint, PieSlice};

/// Dense point pairs: each axis value with its projected sparse value
///
/// # Examples
/// ```
/// use report_charts::align::align_range;
/// use report_charts::chart::adapter::usage_points;
///
/// let refs = align_range(1..=3, &[2]).unwrap();
/// let points = usage_points(&[1, 2, 3], &refs, &[40]);
/// assert_eq!(points[0].y, None);
/// assert_eq!(points[1].y, Some(40));
/// ```
pub fn usage_points(axis: &[u32], refs: &IndexRefs, values: &[u64]) -> Vec<ChartPoint> {
    axis.iter()
        .zip(refs.project(values))
        .map(|(&x, y)| ChartPoint { x, y })
        .collect()
}

/// Largest value of a series, 0 for an empty one
///
/// # Examples
/// ```
/// use report_charts::chart::adapter::max_chart_value;
///
/// assert_eq!(max_chart_value(&[]), 0);
/// assert_eq!(max_chart_value(&[3, 0, 7, 2]), 7);
/// ```
pub fn max_chart_value(values: &[u64]) -> u64 {
    values.iter().copied().max().unwrap_or(0)
}

/// Pie slices for the displayed countries plus the rollup slice
///
/// Displayed slices take the configured slice colours in order; the rollup
/// slice uses the "other" colour and title.
pub fn pie_slices(usage: &CountryUsage, config: &ChartConfig) -> Vec<PieSlice> {
    let mut slices: Vec<PieSlice> = (0..usage.len())
        .map(|i| PieSlice {
            label: usage.names[i].clone(),
            code: usage.codes[i].clone(),
            value: usage.visits[i],
            percent: usage.percents[i].clone(),
            color: config.pie_color(i).to_string(),
        })
        .collect();

    if let Some(other) = &usage.other {
        slices.push(PieSlice {
            label: config.titles.other.clone(),
            code: String::new(),
            value: other.visits,
            percent: other.percent.clone(),
            color: config.pie_other_color.clone(),
        });
    }
    slices
}

/// Month names for `count` positions starting at `first`, wrapping at 12
///
/// # Examples
/// ```
/// use report_charts::chart::adapter::month_categories;
/// use report_charts::config::ChartConfig;
/// use report_charts::types::YearMonth;
///
/// let config = ChartConfig::default();
/// let first = YearMonth::new(2020, 11).unwrap();
/// assert_eq!(
///     month_categories(first, 4, &config.short_months),
///     vec!["Nov", "Dec", "Jan", "Feb"]
/// );
/// ```
pub fn month_categories(first: YearMonth, count: usize, names: &[String]) -> Vec<String> {
    (0..count)
        .map(|i| month_name(names, first.month0() + i))
        .collect()
}

/// Long month name and year for each position, with year carry
pub fn month_tooltip_labels(first: YearMonth, count: usize, long_names: &[String]) -> Vec<String> {
    (0..count)
        .map(|i| {
            let offset = first.month0() + i;
            format!(
                "{} {}",
                month_name(long_names, offset),
                first.year + (offset / 12) as i32
            )
        })
        .collect()
}

fn month_name(names: &[String], offset: usize) -> String {
    if names.is_empty() {
        return String::new();
    }
    names[offset % 12 % names.len()].clone()
}

/// Axis title naming several series, each in its own colour
///
/// # Examples
/// ```
/// use report_charts::chart::adapter::series_title_html;
///
/// assert_eq!(
///     series_title_html(&[("Visits", "#FFFF00")]),
///     "<span style=\"text-shadow: 1px 1px 0 #777; color: #FFFF00\">Visits</span>"
/// );
/// ```
pub fn series_title_html(parts: &[(&str, &str)]) -> String {
    parts
        .iter()
        .map(|(title, color)| {
            format!(
                "<span style=\"text-shadow: 1px 1px 0 #777; color: {}\">{}</span>",
                html_encode(color),
                html_encode(title)
            )
        })
        .collect::<Vec<_>>()
        .join(" / ")
}

/// Label colour per day: the weekend colour on Saturdays and Sundays
pub fn weekend_label_colors(weekends: &[bool], color: &str) -> Vec<Option<String>> {
    weekends
        .iter()
        .map(|&weekend| weekend.then(|| color.to_string()))
        .collect()
}
