//! Output formats of the report formatter facade

use crate::common::{country_row, hourly_row, table, usage_page};
use report_charts::chart::{build_country_chart, build_hourly_chart};
use report_charts::config::ChartConfig;
use report_charts::extract::ReportPage;
use report_charts::reports::{OutputFormat, ReportFormatter};

fn hourly_page() -> ReportPage {
    let rows = vec![hourly_row(0, 12, 1, Some(1536)), hourly_row(2, 3, 1, Some(100))];
    ReportPage::parse(&usage_page(&[table("hourly_usage_table", Some(2), &rows)]))
}

#[test]
fn test_output_format_parsing() {
    assert_eq!("json".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
    assert_eq!("PLOTLY".parse::<OutputFormat>().unwrap(), OutputFormat::Plotly);
    assert_eq!("csv".parse::<OutputFormat>().unwrap(), OutputFormat::Csv);
    assert!("xml".parse::<OutputFormat>().is_err());
}

#[test]
fn test_hourly_csv_has_gaps() {
    let usage = hourly_page().hourly();
    let chart = build_hourly_chart(&usage, &ChartConfig::default());
    let csv = ReportFormatter::format_hourly(&usage, &chart, &OutputFormat::Csv).unwrap();
    let lines: Vec<&str> = csv.lines().collect();

    assert_eq!(lines[0], "label,Hits,Files,Pages,Transfer,Transfer (display)");
    assert_eq!(lines.len(), 25);
    assert_eq!(lines[1], "00:00,12,12,12,1536,1 KB");
    assert_eq!(lines[2], "01:00,,,,,");
}

#[test]
fn test_hourly_plotly_figure() {
    let usage = hourly_page().hourly();
    let chart = build_hourly_chart(&usage, &ChartConfig::default());
    let output = ReportFormatter::format_hourly(&usage, &chart, &OutputFormat::Plotly).unwrap();
    let figure: serde_json::Value = serde_json::from_str(&output).unwrap();

    let data = figure["data"].as_array().unwrap();
    assert_eq!(data.len(), 4);
    assert_eq!(data[0]["name"], "Hits");
    assert_eq!(data[0]["y"][1], serde_json::Value::Null);
    assert_eq!(data[3]["yaxis"], "y2");
    assert_eq!(data[3]["text"][0], "1 KB");
    assert_eq!(figure["layout"]["yaxis"]["range"], serde_json::json!([0.0, 12.0]));
}

#[test]
fn test_hourly_json_is_the_bundle() {
    let usage = hourly_page().hourly();
    let chart = build_hourly_chart(&usage, &ChartConfig::default());
    let output = ReportFormatter::format_hourly(&usage, &chart, &OutputFormat::Json).unwrap();
    let json: serde_json::Value = serde_json::from_str(&output).unwrap();

    assert_eq!(json["hours"], serde_json::json!([0, 2]));
    assert_eq!(json["xfer"], serde_json::json!([1536, 100]));
}

#[test]
fn test_country_console_lists_slices() {
    let rows = vec![
        country_row(1, "Netherlands", Some("nl"), 75),
        country_row(2, "Belgium", Some("be"), 25),
    ];
    let page = ReportPage::parse(&table("country_usage_table", Some(2), &rows));
    let usage = page.country(100);
    let chart = build_country_chart(&usage, &ChartConfig::default());
    let output = ReportFormatter::format_country(&usage, &chart, &OutputFormat::Console).unwrap();

    assert!(output.contains("Total visits: 100"));
    assert!(output.contains("Netherlands"));
    assert!(output.contains("75.0%"));
}

#[test]
fn test_empty_console_output() {
    let page = ReportPage::parse(&usage_page(&[]));
    let usage = page.hourly();
    let chart = build_hourly_chart(&usage, &ChartConfig::default());
    let output = ReportFormatter::format_hourly(&usage, &chart, &OutputFormat::Console).unwrap();
    assert!(output.contains("No hourly usage data found."));
}
