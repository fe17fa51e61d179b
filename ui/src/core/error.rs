//! Error taxonomy for dataset loading, pivoting and configuration.

use thiserror::Error;

/// The product series cannot be aligned month by month.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MalformedDatasetError {
    #[error("dataset contains no product series")]
    Empty,

    #[error("product `{product}` has {found} monthly records, expected {expected}")]
    LengthMismatch {
        product: String,
        expected: usize,
        found: usize,
    },

    #[error("product `{product}` reports month `{found}` at position {index}, expected `{expected}`")]
    MonthMismatch {
        index: usize,
        product: String,
        expected: String,
        found: String,
    },

    #[error("product `{product}` appears more than once")]
    DuplicateProduct { product: String },
}

/// Failure while turning raw dataset JSON into month rows.
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("couldn't parse sales dataset: {0}")]
    Parse(#[from] serde_json::Error),

    #[error(transparent)]
    Malformed(#[from] MalformedDatasetError),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("couldn't parse dashboard config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("couldn't read dashboard config: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid dashboard config: {0}")]
    Invalid(String),
}
