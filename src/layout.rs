//! Versioned column layouts for the report tables
//!
//! Each report kind keeps an ordered list of layouts, one per format
//! version. Versions only ever add columns or attributes, so resolution is
//! an exact match on a version in `1..=latest`; anything else is
//! unsupported and extraction yields an empty bundle.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// The four charted report tables
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportKind {
    Daily,
    Hourly,
    Country,
    Monthly,
}

impl ReportKind {
    pub const ALL: [ReportKind; 4] = [
        ReportKind::Daily,
        ReportKind::Hourly,
        ReportKind::Country,
        ReportKind::Monthly,
    ];

    /// Element id of the table holding this report
    pub fn table_id(self) -> &'static str {
        match self {
            ReportKind::Daily => "daily_usage_table",
            ReportKind::Hourly => "hourly_usage_table",
            ReportKind::Country => "country_usage_table",
            ReportKind::Monthly => "monthly_summary_table",
        }
    }

    fn layouts(self) -> &'static [Layout] {
        match self {
            ReportKind::Daily => &DAILY_LAYOUTS,
            ReportKind::Hourly => &HOURLY_LAYOUTS,
            ReportKind::Country => &COUNTRY_LAYOUTS,
            ReportKind::Monthly => &MONTHLY_LAYOUTS,
        }
    }

    /// Highest format version this crate understands
    pub fn latest_version(self) -> u32 {
        self.layouts().len() as u32
    }
}

impl fmt::Display for ReportKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ReportKind::Daily => "daily",
            ReportKind::Hourly => "hourly",
            ReportKind::Country => "country",
            ReportKind::Monthly => "monthly",
        };
        write!(f, "{}", name)
    }
}

/// Semantic column of a report row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Day,
    Hour,
    Month,
    Hits,
    Files,
    Pages,
    Visits,
    Hosts,
    Xfer,
    CountryName,
}

/// Raw value carried in a cell attribute next to the display text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RawAttr {
    /// Transfer amount in bytes, on the transfer cell
    Xfer,
    /// Two-letter country code, on the country name cell
    CountryCode,
    /// `YYYYMM` month key, on the month cell
    MonthKey,
}

impl RawAttr {
    /// The column whose cell carries this attribute
    pub fn field(self) -> Field {
        match self {
            RawAttr::Xfer => Field::Xfer,
            RawAttr::CountryCode => Field::CountryName,
            RawAttr::MonthKey => Field::Month,
        }
    }
}

/// Column-index mapping for one report kind and format version
#[derive(Debug, PartialEq, Eq)]
pub struct Layout {
    pub kind: ReportKind,
    pub version: u32,
    /// Exact cell count of a data row
    pub columns: usize,
    fields: &'static [(Field, usize)],
    attrs: &'static [(RawAttr, &'static str)],
}

impl Layout {
    /// Cell index of a field, if this layout defines it
    pub fn index(&self, field: Field) -> Option<usize> {
        self.fields
            .iter()
            .find(|(f, _)| *f == field)
            .map(|(_, i)| *i)
    }

    /// Attribute key (without the `data-` prefix) of a raw value, if defined
    pub fn attribute(&self, attr: RawAttr) -> Option<&'static str> {
        self.attrs
            .iter()
            .find(|(a, _)| *a == attr)
            .map(|(_, key)| *key)
    }

    pub fn supports(&self, field: Field) -> bool {
        self.index(field).is_some()
    }
}

/// Sentinel for a version no layout exists for
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("Unsupported {kind} table version {version}")]
pub struct UnsupportedVersion {
    pub kind: ReportKind,
    pub version: u32,
}

/// Select the layout for a report kind's declared format version
///
/// # Examples
/// ```
/// use report_charts::layout::{resolve, Field, ReportKind};
///
/// let layout = resolve(ReportKind::Daily, 1).unwrap();
/// assert_eq!(layout.columns, 25);
/// assert_eq!(layout.index(Field::Visits), Some(13));
/// assert!(resolve(ReportKind::Daily, 0).is_err());
/// assert!(resolve(ReportKind::Daily, 3).is_err());
/// ```
pub fn resolve(kind: ReportKind, version: u32) -> Result<&'static Layout, UnsupportedVersion> {
    let layouts = kind.layouts();
    version
        .checked_sub(1)
        .and_then(|i| layouts.get(i as usize))
        .filter(|layout| layout.version == version)
        .ok_or(UnsupportedVersion { kind, version })
}

const DAILY_FIELDS: [(Field, usize); 7] = [
    (Field::Day, 0),
    (Field::Hits, 1),
    (Field::Files, 5),
    (Field::Pages, 9),
    (Field::Visits, 13),
    (Field::Hosts, 17),
    (Field::Xfer, 21),
];

const HOURLY_FIELDS: [(Field, usize); 5] = [
    (Field::Hour, 0),
    (Field::Hits, 2),
    (Field::Files, 5),
    (Field::Pages, 8),
    (Field::Xfer, 11),
];

const COUNTRY_FIELDS: [(Field, usize); 5] = [
    (Field::Hits, 1),
    (Field::Files, 3),
    (Field::Xfer, 5),
    (Field::Visits, 7),
    (Field::CountryName, 9),
];

const MONTHLY_FIELDS: [(Field, usize); 7] = [
    (Field::Month, 0),
    (Field::Hosts, 5),
    (Field::Xfer, 6),
    (Field::Visits, 7),
    (Field::Pages, 8),
    (Field::Files, 9),
    (Field::Hits, 10),
];

static DAILY_LAYOUTS: [Layout; 2] = [
    Layout {
        kind: ReportKind::Daily,
        version: 1,
        columns: 25,
        fields: &DAILY_FIELDS,
        attrs: &[],
    },
    Layout {
        kind: ReportKind::Daily,
        version: 2,
        columns: 25,
        fields: &DAILY_FIELDS,
        attrs: &[(RawAttr::Xfer, "xfer")],
    },
];

static HOURLY_LAYOUTS: [Layout; 2] = [
    Layout {
        kind: ReportKind::Hourly,
        version: 1,
        columns: 13,
        fields: &HOURLY_FIELDS,
        attrs: &[],
    },
    Layout {
        kind: ReportKind::Hourly,
        version: 2,
        columns: 13,
        fields: &HOURLY_FIELDS,
        attrs: &[(RawAttr::Xfer, "xfer")],
    },
];

static COUNTRY_LAYOUTS: [Layout; 2] = [
    Layout {
        kind: ReportKind::Country,
        version: 1,
        columns: 10,
        fields: &COUNTRY_FIELDS,
        attrs: &[],
    },
    Layout {
        kind: ReportKind::Country,
        version: 2,
        columns: 10,
        fields: &COUNTRY_FIELDS,
        attrs: &[(RawAttr::Xfer, "xfer"), (RawAttr::CountryCode, "ctry")],
    },
];

static MONTHLY_LAYOUTS: [Layout; 2] = [
    Layout {
        kind: ReportKind::Monthly,
        version: 1,
        columns: 11,
        fields: &MONTHLY_FIELDS,
        attrs: &[],
    },
    Layout {
        kind: ReportKind::Monthly,
        version: 2,
        columns: 11,
        fields: &MONTHLY_FIELDS,
        attrs: &[(RawAttr::Xfer, "xfer"), (RawAttr::MonthKey, "month")],
    },
];
