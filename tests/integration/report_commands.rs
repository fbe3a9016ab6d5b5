//! Single-report commands writing to files

use anyhow::Result;
use report_charts::cli::commands::usage::{CountryCommand, DailyCommand, MonthlyCommand};
use report_charts::config::ChartConfig;
use report_charts::types::YearMonth;
use std::fs;
use tempfile::TempDir;

use crate::common::{
    country_row, daily_row, index_page, monthly_row, table, totals_table, usage_page,
};

#[test]
fn test_daily_csv_output() -> Result<()> {
    let dir = TempDir::new()?;
    let input = dir.path().join("usage_202102.html");
    fs::write(
        &input,
        usage_page(&[table(
            "daily_usage_table",
            None,
            &[daily_row(2, 1234, 5, 2, None)],
        )]),
    )?;
    let output = dir.path().join("out/daily.csv");

    DailyCommand {
        input,
        month: YearMonth::new(2021, 2).unwrap(),
        format: "csv".to_string(),
        output: Some(output.clone()),
    }
    .run(&ChartConfig::default())?;

    let csv = fs::read_to_string(output)?;
    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(lines.len(), 29);
    assert_eq!(
        lines[0],
        "label,Hits,Files,Pages,Visits,Hosts,Transfer,Transfer (display)"
    );
    assert_eq!(lines[2], "\"February 2, 2021\",1234,1234,1234,5,5,2048,2");
    Ok(())
}

#[test]
fn test_country_json_output() -> Result<()> {
    let dir = TempDir::new()?;
    let input = dir.path().join("usage_202102.html");
    fs::write(
        &input,
        table(
            "country_usage_table",
            Some(2),
            &[country_row(1, "Japan", Some("jp"), 40)],
        ),
    )?;
    let output = dir.path().join("country.json");

    CountryCommand {
        input,
        total_visits: Some(50),
        format: "json".to_string(),
        output: Some(output.clone()),
    }
    .run(&ChartConfig::default())?;

    let json: serde_json::Value = serde_json::from_str(&fs::read_to_string(output)?)?;
    assert_eq!(json["codes"], serde_json::json!(["jp"]));
    assert_eq!(json["percents"], serde_json::json!(["80.0%"]));
    assert_eq!(json["total_visits"], 50);
    Ok(())
}

#[test]
fn test_country_total_read_from_page() -> Result<()> {
    let dir = TempDir::new()?;
    let input = dir.path().join("usage_202102.html");
    let visits = [300u64, 200, 150, 100, 80, 70, 50, 30, 10, 10, 20, 10];
    let rows: Vec<String> = visits
        .iter()
        .enumerate()
        .map(|(i, v)| country_row(i + 1, &format!("Country {}", i), None, *v))
        .collect();
    fs::write(
        &input,
        usage_page(&[totals_table(8000, 2000), table("country_usage_table", None, &rows)]),
    )?;
    let output = dir.path().join("country.json");

    CountryCommand {
        input,
        total_visits: None,
        format: "json".to_string(),
        output: Some(output.clone()),
    }
    .run(&ChartConfig::default())?;

    let json: serde_json::Value = serde_json::from_str(&fs::read_to_string(output)?)?;
    assert_eq!(json["total_visits"], 2000);
    assert_eq!(json["percents"][0], "15.0%");
    assert_eq!(json["other"]["visits"], 1000);
    assert_eq!(json["other"]["percent"], "50.0%");
    Ok(())
}

#[test]
fn test_country_without_total_is_an_error() -> Result<()> {
    let dir = TempDir::new()?;
    let input = dir.path().join("usage_202102.html");
    fs::write(
        &input,
        usage_page(&[table(
            "country_usage_table",
            Some(2),
            &[country_row(1, "Japan", Some("jp"), 40)],
        )]),
    )?;

    let result = CountryCommand {
        input,
        total_visits: None,
        format: "console".to_string(),
        output: None,
    }
    .run(&ChartConfig::default());
    assert!(result.is_err());
    Ok(())
}

#[test]
fn test_monthly_plotly_output() -> Result<()> {
    let dir = TempDir::new()?;
    let input = dir.path().join("index.html");
    fs::write(
        &input,
        index_page(&table(
            "monthly_summary_table",
            Some(1),
            &[monthly_row("202103", 9, 1, 1, None)],
        )),
    )?;
    let output = dir.path().join("monthly.json");

    MonthlyCommand {
        input,
        month_count: 3,
        first_month: YearMonth::new(2021, 1),
        format: "plotly".to_string(),
        output: Some(output.clone()),
    }
    .run(&ChartConfig::default())?;

    let figure: serde_json::Value = serde_json::from_str(&fs::read_to_string(output)?)?;
    assert_eq!(
        figure["data"][0]["y"],
        serde_json::json!([null, null, 9.0])
    );
    assert_eq!(
        figure["layout"]["xaxis"]["ticktext"],
        serde_json::json!(["Jan", "Feb", "Mar"])
    );
    Ok(())
}

#[test]
fn test_unknown_format_is_rejected() -> Result<()> {
    let dir = TempDir::new()?;
    let input = dir.path().join("page.html");
    fs::write(&input, usage_page(&[]))?;

    let result = DailyCommand {
        input,
        month: YearMonth::new(2021, 2).unwrap(),
        format: "xml".to_string(),
        output: None,
    }
    .run(&ChartConfig::default());
    assert!(result.is_err());
    Ok(())
}

#[test]
fn test_missing_input_is_an_error() {
    let result = DailyCommand {
        input: "/nonexistent/usage_202102.html".into(),
        month: YearMonth::new(2021, 2).unwrap(),
        format: "console".to_string(),
        output: None,
    }
    .run(&ChartConfig::default());
    assert!(result.is_err());
}
