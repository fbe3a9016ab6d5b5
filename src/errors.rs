use thiserror::Error;

/// Application-wide error type - single point of truth
///
/// Only the I/O, configuration and output layers produce these. Table
/// extraction degrades to empty bundles instead of failing.
#[derive(Error, Debug)]
pub enum AppError {
    /// File I/O operations
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration loading
    #[error("Configuration error: {0}")]
    Config(String),

    /// Data validation/parsing of user-supplied arguments
    #[error("Invalid data: {0}")]
    InvalidData(String),

    /// CSV export
    #[error("CSV export error: {0}")]
    Csv(#[from] csv::Error),

    /// Output serialisation (JSON, TOML)
    #[error("Serialisation error: {0}")]
    Serialisation(String),
}

/// Axis alignment precondition violations
///
/// The sparse x-values handed to the aligner must be a strictly ascending
/// subsequence of the dense axis.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AlignError {
    /// Some sparse values were never matched by the dense scan
    #[error("Sparse axis not aligned: {matched} of {total} values matched the dense axis")]
    Unaligned { matched: usize, total: usize },
}

/// Application-wide result type - single point of truth
pub type AppResult<T> = Result<T, AppError>;

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Serialisation(format!("JSON error: {}", err))
    }
}

impl From<toml::ser::Error> for AppError {
    fn from(err: toml::ser::Error) -> Self {
        AppError::Serialisation(format!("TOML error: {}", err))
    }
}

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        AppError::Config(err.to_string())
    }
}

impl From<glob::PatternError> for AppError {
    fn from(err: glob::PatternError) -> Self {
        AppError::Config(format!("Glob pattern error: {}", err))
    }
}

impl From<glob::GlobError> for AppError {
    fn from(err: glob::GlobError) -> Self {
        AppError::Config(format!("Glob error: {}", err))
    }
}

impl From<csv::IntoInnerError<csv::Writer<Vec<u8>>>> for AppError {
    fn from(err: csv::IntoInnerError<csv::Writer<Vec<u8>>>) -> Self {
        AppError::Serialisation(format!("CSV buffer error: {}", err))
    }
}
