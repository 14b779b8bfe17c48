use std::path::PathBuf;

use thiserror::Error;

/// A single delimited record that could not be turned into a `Pattern`.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PatternError {
    #[error("expected {expected} comma-separated fields, found {found}")]
    FieldCount { expected: usize, found: usize },
    #[error("field {index} ('{value}') is not a valid number")]
    InvalidNumber { index: usize, value: String },
}

/// Failure while materializing the training set.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("could not read patterns from {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("line {line}: {source}")]
    Record {
        line: usize,
        #[source]
        source: PatternError,
    },
    #[error("pattern data contains no records")]
    Empty,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Everything that can abort a run before the interactive loop starts.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Load(#[from] LoadError),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
