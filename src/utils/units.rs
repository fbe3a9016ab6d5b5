//! Transfer amount formatting
//!
//! Two independent conventions are selected by `UnitsConfig`: the base
//! (1000 or 1024) and the style (classic kilobytes or human-readable with a
//! unit prefix). The prefix table comes from configuration.

use crate::config::UnitsConfig;

/// Format a byte count for display
///
/// # Examples
/// ```
/// use report_charts::config::UnitsConfig;
/// use report_charts::utils::units::format_xfer;
///
/// let units = UnitsConfig::default();
/// assert_eq!(format_xfer(512, &units), "512");
/// assert_eq!(format_xfer(1536, &units), "1.5 KB");
/// assert_eq!(format_xfer(3 * 1024 * 1024, &units), "3 MB");
/// ```
pub fn format_xfer(bytes: u64, units: &UnitsConfig) -> String {
    let base = if units.decimal { 1000.0 } else { 1024.0 };

    if units.classic {
        return format!("{:.0}", bytes as f64 / base);
    }

    if (bytes as f64) < base || units.prefixes.is_empty() {
        return bytes.to_string();
    }

    let mut value = bytes as f64;
    let mut prefix = 0usize;
    loop {
        value /= base;
        prefix += 1;
        if value < base || prefix >= units.prefixes.len() {
            break;
        }
    }

    // round values print as integers, others with one digit (4.96 -> 5, 4.93 -> 4.9)
    let number = if ((value * 10.0 + 0.5) as u64) % 10 == 0 {
        format!("{}", (value + 0.5) as u64)
    } else {
        format!("{:.1}", value)
    };

    format!("{} {}{}", number, units.prefixes[prefix - 1], units.unit)
}
