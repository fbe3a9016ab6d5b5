//! Utility functions for report formatting
//!
//! Provides shared formatting helpers used across all report formatters.

use crate::chart::UsageChart;
use crate::errors::{AppError, AppResult};
use serde::Serialize;

/// Format number with thousand separators for console output
///
/// # Examples
///
/// ```
/// # use report_charts::reports::utils::format_number;
/// assert_eq!(format_number(1234), "1,234");
/// assert_eq!(format_number(1234567), "1,234,567");
/// assert_eq!(format_number(0), "0");
/// ```
pub fn format_number(n: u64) -> String {
    let s = n.to_string();
    let mut result = String::new();
    let chars: Vec<char> = s.chars().collect();

    for (i, c) in chars.iter().enumerate() {
        if i > 0 && (chars.len() - i) % 3 == 0 {
            result.push(',');
        }
        result.push(*c);
    }

    result
}

/// Export data as JSON for programmatic use
pub fn export_json<T: Serialize>(data: &T) -> AppResult<String> {
    Ok(serde_json::to_string_pretty(data)?)
}

/// Dense-axis series as CSV: one row per category, one column per series
///
/// Gaps are empty fields. Series with display strings get an extra
/// `<name> (display)` column.
pub fn export_chart_csv(chart: &UsageChart) -> AppResult<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());

    let mut header = vec!["label".to_string()];
    for series in &chart.series {
        header.push(series.name.clone());
        if series.tooltips.is_some() {
            header.push(format!("{} (display)", series.name));
        }
    }
    writer.write_record(&header)?;

    for (i, label) in chart.tooltip_labels.iter().enumerate() {
        let mut record = vec![label.clone()];
        for series in &chart.series {
            let value = series.points.get(i).and_then(|p| p.y);
            record.push(value.map(|v| v.to_string()).unwrap_or_default());
            if let Some(tooltips) = &series.tooltips {
                record.push(tooltips.get(i).cloned().flatten().unwrap_or_default());
            }
        }
        writer.write_record(&record)?;
    }

    let bytes = writer.into_inner()?;
    String::from_utf8(bytes).map_err(|e| AppError::Serialisation(format!("CSV output: {}", e)))
}
