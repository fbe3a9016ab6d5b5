//! Integration Tests Module
//!
//! End-to-end runs of the CLI commands over report pages written to disk.

pub mod config_overrides;
pub mod report_commands;
