//! Field access on report rows through a resolved layout

use lazy_static::lazy_static;
use regex::Regex;

use crate::html::{Cell, Row};
use crate::layout::{Field, Layout, RawAttr};
use crate::types::usage::UsageCounters;
use crate::types::YearMonth;

/// Multiplier from the kilobyte counts of older tables to bytes
const KILOBYTE: u64 = 1024;

lazy_static! {
    /// Monthly report file name embedded in summary links: `usage_YYYYMM.html`
    static ref USAGE_LINK: Regex = Regex::new(r"usage_(\d{6})\.").expect("valid regex");
}

pub(crate) fn cell<'r>(row: &'r Row, layout: &Layout, field: Field) -> Option<&'r Cell> {
    layout.index(field).and_then(|i| row.cells.get(i))
}

/// Raw attribute value, if the layout defines the attribute and the cell has it
pub(crate) fn raw<'r>(row: &'r Row, layout: &Layout, attr: RawAttr) -> Option<&'r str> {
    let key = layout.attribute(attr)?;
    cell(row, layout, attr.field())?.attr(key)
}

/// Base-10 counter; anything unparsable counts as zero
pub(crate) fn parse_count(text: &str) -> u64 {
    text.trim().parse().unwrap_or(0)
}

pub(crate) fn count(row: &Row, layout: &Layout, field: Field) -> u64 {
    cell(row, layout, field)
        .map(|c| parse_count(&c.text))
        .unwrap_or(0)
}

pub(crate) fn text<'r>(row: &'r Row, layout: &Layout, field: Field) -> &'r str {
    cell(row, layout, field)
        .map(|c| c.text.as_str())
        .unwrap_or("")
}

/// Raw transfer bytes and the display string shown in the report
///
/// Tables without the raw attribute carry a kilobyte count as cell text.
pub(crate) fn transfer(row: &Row, layout: &Layout) -> (u64, String) {
    let display = text(row, layout, Field::Xfer).to_string();
    let bytes = match raw(row, layout, RawAttr::Xfer) {
        Some(raw) => parse_count(raw),
        None => parse_count(&display).saturating_mul(KILOBYTE),
    };
    (bytes, display)
}

/// Every counter the layout defines; the rest stay zero
pub(crate) fn counters(row: &Row, layout: &Layout) -> UsageCounters {
    let (xfer, xfer_display) = transfer(row, layout);
    UsageCounters {
        hits: count(row, layout, Field::Hits),
        files: count(row, layout, Field::Files),
        pages: count(row, layout, Field::Pages),
        visits: count(row, layout, Field::Visits),
        hosts: count(row, layout, Field::Hosts),
        xfer,
        xfer_display,
    }
}

/// Month key of a summary row: the `month` attribute, then the link target
pub(crate) fn month_key(row: &Row, layout: &Layout) -> Option<YearMonth> {
    if let Some(month) = raw(row, layout, RawAttr::MonthKey).and_then(YearMonth::parse_compact) {
        return Some(month);
    }
    month_in_link(cell(row, layout, Field::Month)?.link.as_deref()?)
}

/// Month of a monthly report named in a link or file name (`usage_YYYYMM.html`)
pub fn month_in_link(link: &str) -> Option<YearMonth> {
    let caps = USAGE_LINK.captures(link)?;
    YearMonth::parse_compact(caps.get(1)?.as_str())
}
