//! Chart assembly from extracted pages

use crate::common::{country_row, daily_row, monthly_row, table, usage_page};
use report_charts::chart::{
    build_country_chart, build_daily_chart, build_monthly_chart, AxisSlot,
};
use report_charts::config::ChartConfig;
use report_charts::extract::ReportPage;
use report_charts::types::{MonthlySummary, YearMonth};

fn ym(year: i32, month: u32) -> YearMonth {
    YearMonth::new(year, month).unwrap()
}

fn summary() -> MonthlySummary {
    let rows = vec![
        monthly_row("202102", 30, 3, 3, Some(3000)),
        monthly_row("202101", 20, 2, 2, Some(2000)),
        monthly_row("202011", 10, 1, 1, Some(1000)),
    ];
    ReportPage::parse(&table("monthly_summary_table", Some(2), &rows)).monthly()
}

#[test]
fn test_daily_chart_from_page() {
    let rows = vec![
        daily_row(1, 50, 5, 1, Some(1024)),
        daily_row(6, 75, 8, 2, Some(2048)),
    ];
    let page = ReportPage::parse(&usage_page(&[table("daily_usage_table", Some(2), &rows)]));
    let config = ChartConfig::default();
    let chart = build_daily_chart(&page.daily(), ym(2021, 2), &config);

    assert_eq!(chart.categories.len(), 28);
    assert_eq!(chart.tooltip_labels[5], "February 6, 2021");

    let hits = chart.series("Hits").unwrap();
    assert_eq!(hits.points[0].y, Some(50));
    assert_eq!(hits.points[1].y, None);
    assert_eq!(hits.points[5].y, Some(75));

    // 2021-02-06 and 07 are a Saturday and a Sunday
    assert_eq!(chart.category_colors[5].as_deref(), Some("#00805C"));
    assert_eq!(chart.category_colors[6].as_deref(), Some("#00805C"));
    assert_eq!(chart.category_colors[4], None);

    let visits_axis = chart.axis(AxisSlot::Visits).unwrap();
    assert_eq!(visits_axis.max, 8);
    let xfer_axis = chart.axis(AxisSlot::Transfer).unwrap();
    assert_eq!(xfer_axis.max, 2048);
    assert_eq!(xfer_axis.max_label, "2 KB");

    let xfer = chart.series("Transfer").unwrap();
    let tooltips = xfer.tooltips.as_ref().unwrap();
    assert_eq!(tooltips[5].as_deref(), Some("2 KB"));
    assert_eq!(tooltips[2], None);
}

#[test]
fn test_daily_chart_with_day_outside_month_is_blank() {
    let rows = vec![daily_row(30, 50, 5, 1, None)];
    let page = ReportPage::parse(&usage_page(&[table("daily_usage_table", None, &rows)]));
    let chart = build_daily_chart(&page.daily(), ym(2021, 2), &ChartConfig::default());

    assert_eq!(chart.categories.len(), 28);
    assert!(chart.is_blank());
}

#[test]
fn test_monthly_chart_defaults_to_latest_window() {
    let chart = build_monthly_chart(&summary(), None, 4, &ChartConfig::default());

    assert_eq!(chart.categories, vec!["Nov", "Dec", "Jan", "Feb"]);
    assert_eq!(
        chart.tooltip_labels,
        vec!["November 2020", "December 2020", "January 2021", "February 2021"]
    );
    let hits: Vec<Option<u64>> = chart.series("Hits").unwrap().points.iter().map(|p| p.y).collect();
    assert_eq!(hits, vec![Some(10), None, Some(20), Some(30)]);
    assert_eq!(chart.axis(AxisSlot::Transfer).unwrap().max_label, "2.9 KB");
}

#[test]
fn test_monthly_chart_window_drops_older_months() {
    let chart = build_monthly_chart(&summary(), None, 2, &ChartConfig::default());
    assert_eq!(chart.categories, vec!["Jan", "Feb"]);
    assert_eq!(chart.axis(AxisSlot::Counts).unwrap().max, 30);
    assert!(!chart.is_blank());
}

#[test]
fn test_monthly_chart_explicit_first_month() {
    let chart = build_monthly_chart(&summary(), Some(ym(2021, 2)), 12, &ChartConfig::default());
    assert_eq!(chart.categories.len(), 12);
    assert_eq!(chart.categories[11], "Jan");
    assert_eq!(chart.tooltip_labels[11], "January 2022");
    let present = chart.series("Hits").unwrap().present_values();
    assert_eq!(present, vec![30]);
}

#[test]
fn test_monthly_chart_without_data() {
    let chart = build_monthly_chart(&MonthlySummary::default(), None, 12, &ChartConfig::default());
    assert!(chart.categories.is_empty());
    assert!(chart.is_blank());
}

#[test]
fn test_country_chart_colours_and_rollup() {
    let rows: Vec<String> = (0..12)
        .map(|i| country_row(i + 1, &format!("C{}", i), None, 100 - i as u64))
        .collect();
    let page = ReportPage::parse(&table("country_usage_table", Some(1), &rows));
    let mut config = ChartConfig::default();
    config.titles.other = "Elsewhere".to_string();
    let chart = build_country_chart(&page.country(2000), &config);

    assert_eq!(chart.slices.len(), 11);
    assert_eq!(chart.slices[0].color, "#00805C");
    assert_eq!(chart.slices[9].color, "#FFC480");
    let other = chart.slices.last().unwrap();
    assert_eq!(other.label, "Elsewhere");
    assert_eq!(other.color, "#FFFFFF");
    // 100 + 99 + ... + 91 = 955 displayed
    assert_eq!(other.value, 2000 - 955);
    assert_eq!(chart.total, 2000);
}
