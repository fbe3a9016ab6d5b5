//! Country usage report formatter

use super::utils::{export_json, format_number};
use super::OutputFormat;
use crate::chart::PieChart;
use crate::errors::{AppError, AppResult};
use crate::types::CountryUsage;

/// Format country usage
///
/// CSV lists one row per pie slice, the rollup slice last.
pub fn format_country(
    usage: &CountryUsage,
    chart: &PieChart,
    format: &OutputFormat,
) -> AppResult<String> {
    match format {
        OutputFormat::Json => export_json(usage),
        OutputFormat::Plotly => export_json(&chart.to_plotly_chart()),
        OutputFormat::Csv => {
            let mut writer = csv::Writer::from_writer(Vec::new());
            writer.write_record(["code", "country", "visits", "percent"])?;
            for slice in &chart.slices {
                let visits = slice.value.to_string();
                writer.write_record([
                    slice.code.as_str(),
                    slice.label.as_str(),
                    visits.as_str(),
                    slice.percent.as_str(),
                ])?;
            }
            let bytes = writer.into_inner()?;
            String::from_utf8(bytes)
                .map_err(|e| AppError::Serialisation(format!("CSV output: {}", e)))
        }
        OutputFormat::Console => {
            let mut output = String::new();
            output.push_str(&format!("\n🌍 {}\n", chart.title));
            output.push_str("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━\n\n");

            if usage.is_empty() {
                output.push_str("No country usage data found.\n");
                return Ok(output);
            }

            output.push_str(&format!(
                "Total visits: {}\n\n",
                format_number(usage.total_visits)
            ));
            output.push_str(&format!(
                "  {:<4} {:<28} {:>10} {:>8}\n",
                "Code", "Country", "Visits", "Share"
            ));
            output.push_str(&format!("  {:-<4} {:-<28} {:->10} {:->8}\n", "", "", "", ""));
            for slice in &chart.slices {
                output.push_str(&format!(
                    "  {:<4} {:<28} {:>10} {:>8}\n",
                    slice.code,
                    slice.label,
                    format_number(slice.value),
                    slice.percent
                ));
            }
            Ok(output)
        }
    }
}
