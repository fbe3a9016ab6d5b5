//! Table extraction through whole report pages

use crate::common::{
    country_row, daily_row, hourly_row, monthly_footer, monthly_row, table, table_with_groups,
    totals_table, usage_page,
};
use report_charts::extract::{ReportPage, TableStatus};
use report_charts::layout::ReportKind;
use report_charts::types::YearMonth;

fn daily_page(version: Option<u32>, rows: &[String]) -> ReportPage {
    ReportPage::parse(&usage_page(&[table("daily_usage_table", version, rows)]))
}

#[test]
fn test_daily_v2_reads_raw_transfer() {
    let page = daily_page(
        Some(2),
        &[
            daily_row(1, 120, 12, 2, Some(2100)),
            daily_row(3, 80, 9, 1, Some(900)),
        ],
    );
    let usage = page.daily();

    assert_eq!(usage.days, vec![1, 3]);
    assert_eq!(usage.hits, vec![120, 80]);
    assert_eq!(usage.files, vec![120, 80]);
    assert_eq!(usage.visits, vec![12, 9]);
    assert_eq!(usage.hosts, vec![12, 9]);
    assert_eq!(usage.xfer, vec![2100, 900]);
    assert_eq!(usage.xfer_display, vec!["2 KB", "1 KB"]);
}

#[test]
fn test_daily_without_version_reads_kilobytes() {
    let page = daily_page(None, &[daily_row(5, 10, 1, 7, None)]);
    assert_eq!(page.status(ReportKind::Daily), TableStatus::Supported(1));

    let usage = page.daily();
    assert_eq!(usage.xfer, vec![7 * 1024]);
    assert_eq!(usage.xfer_display, vec!["7"]);
}

#[test]
fn test_daily_unknown_version_is_empty() {
    let page = daily_page(Some(3), &[daily_row(5, 10, 1, 7, None)]);
    assert_eq!(page.status(ReportKind::Daily), TableStatus::Unsupported(3));
    assert!(page.daily().is_empty());
}

#[test]
fn test_daily_short_row_empties_bundle() {
    let short = daily_row(2, 10, 1, 1, None).replacen("<td class=\"pct\">1.0%</td>", "", 1);
    let page = daily_page(Some(1), &[daily_row(1, 10, 1, 1, None), short]);
    assert!(page.daily().is_empty());
}

#[test]
fn test_missing_table() {
    let page = ReportPage::parse(&usage_page(&[]));
    assert_eq!(page.status(ReportKind::Hourly), TableStatus::Missing);
    assert!(page.hourly().is_empty());
    assert!(page.country(100).is_empty());
    assert_eq!(page.total_visits("Total Visits"), None);
}

#[test]
fn test_hourly_rows() {
    let rows: Vec<String> = [0u32, 1, 13]
        .iter()
        .map(|&h| hourly_row(h, u64::from(h) + 5, 1, Some(1000 + u64::from(h))))
        .collect();
    let page = ReportPage::parse(&usage_page(&[table("hourly_usage_table", Some(2), &rows)]));
    let usage = page.hourly();

    assert_eq!(usage.hours, vec![0, 1, 13]);
    assert_eq!(usage.hits, vec![5, 6, 18]);
    assert_eq!(usage.xfer, vec![1000, 1001, 1013]);
}

#[test]
fn test_country_rollup_and_codes() {
    let visits = [300u64, 200, 100, 90, 80, 70, 60, 50, 40, 30, 20, 10];
    let rows: Vec<String> = visits
        .iter()
        .enumerate()
        .map(|(i, v)| country_row(i + 1, &format!("Country {}", i), Some(&format!("c{}", i)), *v))
        .collect();
    let page = ReportPage::parse(&usage_page(&[
        totals_table(9000, 2000),
        table("country_usage_table", Some(2), &rows),
    ]));
    // the listed countries hold 1050 of the month's 2000 visits
    let total = page.total_visits("Total Visits").unwrap();
    let usage = page.country(total);

    assert_eq!(usage.len(), 10);
    assert_eq!(usage.total_visits, 2000);
    assert_eq!(usage.codes[0], "c0");
    assert_eq!(usage.percents[0], "15.0%");
    let other = usage.other.unwrap();
    assert_eq!(other.visits, 980);
    assert_eq!(other.percent, "49.0%");
}

#[test]
fn test_country_v1_has_no_codes() {
    let rows = vec![
        country_row(1, "Germany", Some("de"), 60),
        country_row(2, "France", None, 40),
    ];
    let page = ReportPage::parse(&usage_page(&[table("country_usage_table", None, &rows)]));
    let usage = page.country(100);

    assert_eq!(usage.codes, vec!["", ""]);
    assert_eq!(usage.names, vec!["Germany", "France"]);
    assert_eq!(usage.percents, vec!["60.0%", "40.0%"]);
    assert!(usage.other.is_none());
}

#[test]
fn test_monthly_newest_first_with_footer() {
    let rows = vec![
        monthly_row("202102", 30, 3, 3, Some(3000)),
        monthly_row("202101", 20, 2, 2, Some(2000)),
        monthly_row("202011", 10, 1, 1, Some(1000)),
    ];
    let doc = table_with_groups("monthly_summary_table", Some(2), &rows, &monthly_footer());
    let summary = ReportPage::parse(&doc).monthly();

    let months: Vec<String> = summary.months.iter().map(|m| m.to_string()).collect();
    assert_eq!(months, vec!["2020-11", "2021-01", "2021-02"]);
    assert_eq!(summary.hits, vec![10, 20, 30]);
    assert_eq!(summary.visits, vec![1, 2, 3]);
    assert_eq!(summary.xfer, vec![1000, 2000, 3000]);
    assert_eq!(summary.last_month(), YearMonth::new(2021, 2));
}

#[test]
fn test_monthly_row_without_month_key_is_malformed() {
    let broken = monthly_row("202101", 20, 2, 2, None).replace("usage_202101.html", "summary.html");
    let rows = vec![monthly_row("202102", 30, 3, 3, None), broken];
    let doc = table("monthly_summary_table", Some(1), &rows);
    assert!(ReportPage::parse(&doc).monthly().is_empty());
}

#[test]
fn test_first_table_with_id_wins() {
    let first = table("hourly_usage_table", Some(1), &[hourly_row(4, 10, 1, None)]);
    let second = table("hourly_usage_table", Some(1), &[hourly_row(9, 99, 1, None)]);
    let page = ReportPage::parse(&usage_page(&[first, second]));
    assert_eq!(page.hourly().hours, vec![4]);
}
