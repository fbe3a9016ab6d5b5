//! Usage series bundles
//!
//! Each bundle keeps one x-value array and one array per metric. All arrays
//! in a bundle have equal length and correspond by position; rows are only
//! ever added through `push`, which keeps that invariant.

use super::month::YearMonth;
use serde::{Deserialize, Serialize};

/// Counters read from a single usage table row
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct UsageCounters {
    pub hits: u64,
    pub files: u64,
    pub pages: u64,
    pub visits: u64,
    pub hosts: u64,
    /// Raw transfer amount in bytes
    pub xfer: u64,
    /// Human-readable transfer amount as rendered in the report
    pub xfer_display: String,
}

/// Daily usage for one report month; days are 1-based and ascending
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyUsage {
    pub days: Vec<u32>,
    pub hits: Vec<u64>,
    pub files: Vec<u64>,
    pub pages: Vec<u64>,
    pub visits: Vec<u64>,
    pub hosts: Vec<u64>,
    pub xfer: Vec<u64>,
    pub xfer_display: Vec<String>,
}

impl DailyUsage {
    pub fn push(&mut self, day: u32, counters: UsageCounters) {
        self.days.push(day);
        self.hits.push(counters.hits);
        self.files.push(counters.files);
        self.pages.push(counters.pages);
        self.visits.push(counters.visits);
        self.hosts.push(counters.hosts);
        self.xfer.push(counters.xfer);
        self.xfer_display.push(counters.xfer_display);
    }

    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }
}

/// Hourly usage; hours are 0-23. Hourly tables carry no visit or host counts.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HourlyUsage {
    pub hours: Vec<u32>,
    pub hits: Vec<u64>,
    pub files: Vec<u64>,
    pub pages: Vec<u64>,
    pub xfer: Vec<u64>,
    pub xfer_display: Vec<String>,
}

impl HourlyUsage {
    pub fn push(&mut self, hour: u32, counters: UsageCounters) {
        self.hours.push(hour);
        self.hits.push(counters.hits);
        self.files.push(counters.files);
        self.pages.push(counters.pages);
        self.xfer.push(counters.xfer);
        self.xfer_display.push(counters.xfer_display);
    }

    pub fn len(&self) -> usize {
        self.hours.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hours.is_empty()
    }
}

/// Monthly summary in chronological (oldest-first) order
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlySummary {
    pub months: Vec<YearMonth>,
    pub hits: Vec<u64>,
    pub files: Vec<u64>,
    pub pages: Vec<u64>,
    pub visits: Vec<u64>,
    pub hosts: Vec<u64>,
    pub xfer: Vec<u64>,
    pub xfer_display: Vec<String>,
}

impl MonthlySummary {
    pub fn push(&mut self, month: YearMonth, counters: UsageCounters) {
        self.months.push(month);
        self.hits.push(counters.hits);
        self.files.push(counters.files);
        self.pages.push(counters.pages);
        self.visits.push(counters.visits);
        self.hosts.push(counters.hosts);
        self.xfer.push(counters.xfer);
        self.xfer_display.push(counters.xfer_display);
    }

    /// Reverse every array in place, keeping positional correspondence
    pub fn reverse(&mut self) {
        self.months.reverse();
        self.hits.reverse();
        self.files.reverse();
        self.pages.reverse();
        self.visits.reverse();
        self.hosts.reverse();
        self.xfer.reverse();
        self.xfer_display.reverse();
    }

    pub fn len(&self) -> usize {
        self.months.len()
    }

    pub fn is_empty(&self) -> bool {
        self.months.is_empty()
    }

    /// Most recent month present, if any
    pub fn last_month(&self) -> Option<YearMonth> {
        self.months.last().copied()
    }
}
