//! Error types for the reporting layer.

use std::path::PathBuf;

use rust_decimal::Decimal;
use thiserror::Error;

use super::config::ConfigError;

/// Errors produced while loading data or answering report queries.
///
/// # Examples
///
/// ```rust
/// use figtally::report::ReportError;
/// use rust_decimal::Decimal;
///
/// let error = ReportError::NoMatchingTransaction {
///     threshold: Decimal::from(200),
/// };
/// assert_eq!(error.to_string(), "no transaction with an amount over 200");
/// ```
#[derive(Debug, Error)]
pub enum ReportError {
    /// A data file could not be read.
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        /// The file that failed.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// A data file is not valid JSON for the expected records.
    #[error("failed to parse {origin}: {source}")]
    Parse {
        /// Where the JSON came from (a path or `"input"`).
        origin: String,
        /// The underlying decode error.
        #[source]
        source: serde_json::Error,
    },
    /// No transaction has an amount above the threshold.
    #[error("no transaction with an amount over {threshold}")]
    NoMatchingTransaction {
        /// The threshold that nothing exceeded.
        threshold: Decimal,
    },
    /// The report configuration is invalid.
    #[error(transparent)]
    Config(#[from] ConfigError),
}
