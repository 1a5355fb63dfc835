//! Centralised error types used across the crate.

use std::{error::Error, fmt, io};

use rustyline::error::ReadlineError;

use crate::core::data::ParseCsvError;

/// Faults produced by the pure cleaning pipeline.
#[derive(Debug)]
pub enum CleanError {
    /// Imputation has no non-empty values to compute a statistic from.
    EmptyColumn,
    /// User text is not one of the recognised options.
    InvalidChoice { what: &'static str, got: String },
    /// A cell that should be numeric is not.  Upstream validation is
    /// supposed to rule this out; the core never coerces silently.
    BadFloat { text: String },
}

impl fmt::Display for CleanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CleanError::EmptyColumn => {
                write!(
                    f,
                    "no numeric values available to compute min, max, or average"
                )
            }
            CleanError::InvalidChoice { what, got } => {
                write!(f, "invalid {what} choice '{got}'")
            }
            CleanError::BadFloat { text } => write!(f, "invalid numeric value '{text}'"),
        }
    }
}
impl Error for CleanError {}

/// Precise chart-configuration faults.
#[derive(Debug)]
pub enum ConfigError {
    InvalidUnit { unit: f64 },
    ZeroCap,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidUnit { unit } => {
                write!(f, "units-per-marker must be positive and finite, got {unit}")
            }
            ConfigError::ZeroCap => write!(f, "marker cap must be at least 1"),
        }
    }
}
impl Error for ConfigError {}

/// Top-level error type bubbled up by public APIs.
#[derive(Debug)]
pub enum ChartError {
    Io(io::Error),
    Csv(ParseCsvError),
    Clean(CleanError),
    Config(ConfigError),
    NoSuchColumn { name: String },
    NonNumericColumn { name: String, text: String },
    Prompt(ReadlineError),
    /// User pressed Ctrl-C / Ctrl-D at a prompt.
    Cancelled,
}

impl fmt::Display for ChartError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChartError::Io(e) => write!(f, "{e}"),
            ChartError::Csv(e) => write!(f, "{e}"),
            ChartError::Clean(e) => write!(f, "{e}"),
            ChartError::Config(e) => write!(f, "{e}"),
            ChartError::NoSuchColumn { name } => write!(f, "no column named '{name}'"),
            ChartError::NonNumericColumn { name, text } => {
                write!(f, "column '{name}' contains non-numerical value '{text}'")
            }
            ChartError::Prompt(e) => write!(f, "{e}"),
            ChartError::Cancelled => write!(f, "cancelled"),
        }
    }
}
impl Error for ChartError {}

// automatic conversions
impl From<io::Error> for ChartError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}
impl From<ParseCsvError> for ChartError {
    fn from(e: ParseCsvError) -> Self {
        Self::Csv(e)
    }
}
impl From<CleanError> for ChartError {
    fn from(e: CleanError) -> Self {
        Self::Clean(e)
    }
}
impl From<ConfigError> for ChartError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}
impl From<ReadlineError> for ChartError {
    fn from(e: ReadlineError) -> Self {
        match e {
            ReadlineError::Interrupted | ReadlineError::Eof => Self::Cancelled,
            e => Self::Prompt(e),
        }
    }
}
