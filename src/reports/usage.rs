//! Daily, hourly and monthly usage report formatters

use super::utils::{export_chart_csv, export_json, format_number};
use super::OutputFormat;
use crate::chart::{AxisSlot, UsageChart};
use crate::errors::AppResult;
use crate::types::{DailyUsage, HourlyUsage, MonthlySummary};

/// Shared output selection; `console` renders the bundle-specific table
fn format_usage<T: serde::Serialize>(
    bundle: &T,
    chart: &UsageChart,
    format: &OutputFormat,
    console: impl FnOnce() -> String,
) -> AppResult<String> {
    match format {
        OutputFormat::Json => export_json(bundle),
        OutputFormat::Plotly => export_json(&chart.to_plotly_chart()),
        OutputFormat::Csv => export_chart_csv(chart),
        OutputFormat::Console => Ok(console()),
    }
}

fn axis_summary(chart: &UsageChart) -> String {
    let mut output = String::new();
    for (slot, label) in [
        (AxisSlot::Counts, "Peak hits/files/pages"),
        (AxisSlot::Visits, "Peak visits/hosts"),
        (AxisSlot::Transfer, "Peak transfer"),
    ] {
        if let Some(axis) = chart.axis(slot) {
            output.push_str(&format!("{:<22} {}\n", format!("{}:", label), axis.max_label));
        }
    }
    output
}

fn header(title: &str) -> String {
    format!(
        "\n📊 {}\n━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━\n\n",
        title
    )
}

/// Format daily usage
pub fn format_daily(
    usage: &DailyUsage,
    chart: &UsageChart,
    format: &OutputFormat,
) -> AppResult<String> {
    format_usage(usage, chart, format, || {
        let mut output = header(&chart.title);
        if usage.is_empty() {
            output.push_str("No daily usage data found.\n");
            return output;
        }

        output.push_str(&format!(
            "Days with data: {} of {}\n",
            usage.len(),
            chart.categories.len()
        ));
        output.push_str(&axis_summary(chart));
        output.push('\n');

        output.push_str(&format!(
            "  {:>3} {:>10} {:>10} {:>10} {:>8} {:>8} {:>12}\n",
            "Day", "Hits", "Files", "Pages", "Visits", "Hosts", "Transfer"
        ));
        output.push_str(&format!(
            "  {:->3} {:->10} {:->10} {:->10} {:->8} {:->8} {:->12}\n",
            "", "", "", "", "", "", ""
        ));
        for i in 0..usage.len() {
            output.push_str(&format!(
                "  {:>3} {:>10} {:>10} {:>10} {:>8} {:>8} {:>12}\n",
                usage.days[i],
                format_number(usage.hits[i]),
                format_number(usage.files[i]),
                format_number(usage.pages[i]),
                format_number(usage.visits[i]),
                format_number(usage.hosts[i]),
                usage.xfer_display[i]
            ));
        }
        output
    })
}

/// Format hourly usage
pub fn format_hourly(
    usage: &HourlyUsage,
    chart: &UsageChart,
    format: &OutputFormat,
) -> AppResult<String> {
    format_usage(usage, chart, format, || {
        let mut output = header(&chart.title);
        if usage.is_empty() {
            output.push_str("No hourly usage data found.\n");
            return output;
        }

        output.push_str(&axis_summary(chart));
        output.push('\n');
        output.push_str(&format!(
            "  {:>5} {:>10} {:>10} {:>10} {:>12}\n",
            "Hour", "Hits", "Files", "Pages", "Transfer"
        ));
        output.push_str(&format!(
            "  {:->5} {:->10} {:->10} {:->10} {:->12}\n",
            "", "", "", "", ""
        ));
        for i in 0..usage.len() {
            output.push_str(&format!(
                "  {:>5} {:>10} {:>10} {:>10} {:>12}\n",
                format!("{:02}:00", usage.hours[i]),
                format_number(usage.hits[i]),
                format_number(usage.files[i]),
                format_number(usage.pages[i]),
                usage.xfer_display[i]
            ));
        }
        output
    })
}

/// Format the monthly summary
pub fn format_monthly(
    summary: &MonthlySummary,
    chart: &UsageChart,
    format: &OutputFormat,
) -> AppResult<String> {
    format_usage(summary, chart, format, || {
        let mut output = header(&chart.title);
        if summary.is_empty() {
            output.push_str("No monthly summary data found.\n");
            return output;
        }

        output.push_str(&format!(
            "Months in table: {}, charted: {}\n",
            summary.len(),
            chart.categories.len()
        ));
        output.push_str(&axis_summary(chart));
        output.push('\n');
        output.push_str(&format!(
            "  {:<8} {:>10} {:>10} {:>10} {:>8} {:>8} {:>12}\n",
            "Month", "Hits", "Files", "Pages", "Visits", "Hosts", "Transfer"
        ));
        output.push_str(&format!(
            "  {:-<8} {:->10} {:->10} {:->10} {:->8} {:->8} {:->12}\n",
            "", "", "", "", "", "", ""
        ));
        for i in 0..summary.len() {
            output.push_str(&format!(
                "  {:<8} {:>10} {:>10} {:>10} {:>8} {:>8} {:>12}\n",
                summary.months[i].to_string(),
                format_number(summary.hits[i]),
                format_number(summary.files[i]),
                format_number(summary.pages[i]),
                format_number(summary.visits[i]),
                format_number(summary.hosts[i]),
                summary.xfer_display[i]
            ));
        }
        output
    })
}
