//! Error types for the funnel-analytics system.

use thiserror::Error;

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the funnel-analytics system.
#[derive(Error, Debug)]
pub enum Error {
    /// Input does not have the expected column layout. Fatal for the whole
    /// load: no partial table is ever returned.
    #[error("schema mismatch at row {line}: expected at least {expected} columns, found {found}")]
    Schema {
        /// 1-based row number of the offending row.
        line: usize,
        /// Column count required by the layout.
        expected: usize,
        /// Column count actually present.
        found: usize,
    },

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Data error (invalid or missing data).
    #[error("Data error: {0}")]
    Data(String),

    /// Insufficient data for computation.
    #[error("Insufficient data: {0}")]
    InsufficientData(String),

    /// CSV reader error.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error with message.
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create a schema mismatch error.
    pub fn schema(line: usize, expected: usize, found: usize) -> Self {
        Error::Schema {
            line,
            expected,
            found,
        }
    }

    /// Create a configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Error::Config(msg.into())
    }

    /// Create a data error.
    pub fn data(msg: impl Into<String>) -> Self {
        Error::Data(msg.into())
    }

    /// Create an insufficient data error.
    pub fn insufficient_data(msg: impl Into<String>) -> Self {
        Error::InsufficientData(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_error_message() {
        let err = Error::schema(3, 24, 12);
        let msg = err.to_string();
        assert!(msg.contains("row 3"));
        assert!(msg.contains("24"));
        assert!(msg.contains("12"));
    }
}
