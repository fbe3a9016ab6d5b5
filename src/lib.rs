//! Web Log Report Chart Extractor
//!
//! Reads the tables of rendered web usage report pages, resolves their
//! versioned column layouts, extracts daily, hourly, country and monthly
//! series, aligns them to dense chart axes and emits chart payloads.

pub mod align;
pub mod chart;
pub mod cli;
pub mod config;
pub mod errors;
pub mod extract;
pub mod html;
pub mod layout;
pub mod reports;
pub mod session;
pub mod types;
pub mod utils;
