//! Configuration flowing from file and environment into chart payloads

use anyhow::Result;
use report_charts::chart::build_hourly_chart;
use report_charts::config::ChartConfig;
use report_charts::extract::ReportPage;
use serial_test::serial;
use std::env;
use std::fs;
use tempfile::TempDir;

use crate::common::{hourly_row, table, usage_page};

fn hourly_page() -> ReportPage {
    let rows = vec![hourly_row(5, 10, 2000, Some(2_000_000))];
    ReportPage::parse(&usage_page(&[table("hourly_usage_table", Some(2), &rows)]))
}

#[test]
#[serial]
fn test_titles_and_units_from_file() -> Result<()> {
    let dir = TempDir::new()?;
    let path = dir.path().join("charts.toml");
    fs::write(
        &path,
        "hits_color = \"#111111\"\n\n[titles]\nhits = \"Requests\"\n\n[units]\ndecimal = true\n",
    )?;

    let config = ChartConfig::load(Some(path.as_path()))?;
    let chart = build_hourly_chart(&hourly_page().hourly(), &config);

    let hits = chart.series("Requests").unwrap();
    assert_eq!(hits.color, "#111111");
    assert_eq!(chart.axes[1].max_label, "2 MB");
    assert!(chart.axes[0].title_html.contains("Requests"));
    Ok(())
}

#[test]
#[serial]
fn test_environment_overrides_titles() -> Result<()> {
    env::set_var("REPORT_CHARTS_TITLES__HOURLY_CHART", "Traffic by hour");
    let config = ChartConfig::load(None);
    env::remove_var("REPORT_CHARTS_TITLES__HOURLY_CHART");

    let chart = build_hourly_chart(&hourly_page().hourly(), &config?);
    assert_eq!(chart.title, "Traffic by hour");
    assert_eq!(chart.series("Hits").unwrap().color, "#00805C");
    Ok(())
}
