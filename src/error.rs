//! Error types shared across the crate

use std::path::PathBuf;
use thiserror::Error;

/// Malformed `HH:MM:SS` text
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseDurationError {
    #[error("empty duration")]
    Empty,

    #[error("expected HH:MM:SS, found {0} field(s)")]
    FieldCount(usize),

    #[error("invalid {field} field: {value:?}")]
    InvalidField { field: &'static str, value: String },

    #[error("{field} out of range: {value} (must be below 60)")]
    OutOfRange { field: &'static str, value: u64 },
}

/// Failures reading or writing the persisted record
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse saved time in {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: ParseDurationError,
    },

    #[error("failed to save time to {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Controller failures
#[derive(Error, Debug)]
pub enum CountdownError {
    #[error("failed to lock countdown state: {0}")]
    LockPoisoned(String),
}

impl<T> From<std::sync::PoisonError<T>> for CountdownError {
    fn from(e: std::sync::PoisonError<T>) -> Self {
        CountdownError::LockPoisoned(e.to_string())
    }
}

/// Failures that end the console session
#[derive(Error, Debug)]
pub enum ConsoleError {
    #[error("console I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Countdown(#[from] CountdownError),
}

/// Rejected console input
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    #[error("Invalid input. Please enter 'h', 'm', 's', 'e', 'f', or 'r'.")]
    InvalidCommand(String),

    #[error("Invalid input. Please enter an integer.")]
    InvalidAdjustment(String),
}
