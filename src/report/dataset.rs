//! Loading transactions and customers from JSON.

use std::fs;
use std::path::Path;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use super::error::ReportError;
use super::record::{Customer, Transaction};

/// Both record collections, fully materialized in memory.
///
/// # Examples
///
/// ```rust
/// use figtally::report::Dataset;
///
/// let dataset = Dataset::from_json_str(r#"{
///     "transactions": [{"amount": 210, "product": "FIG_JAM", "customerId": 1}],
///     "customers": [{"id": 1, "emailAddress": "a@x.com", "firstName": "A", "lastName": "B"}]
/// }"#).unwrap();
///
/// assert_eq!(dataset.transactions.len(), 1);
/// assert_eq!(dataset.customers.len(), 1);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dataset {
    /// Transactions in the order they occurred.
    #[serde(default)]
    pub transactions: Vec<Transaction>,
    /// Known customers.
    #[serde(default)]
    pub customers: Vec<Customer>,
}

impl Dataset {
    /// Creates a dataset from already loaded records.
    pub const fn new(transactions: Vec<Transaction>, customers: Vec<Customer>) -> Self {
        Self {
            transactions,
            customers,
        }
    }

    /// Parses a combined `{"transactions": [...], "customers": [...]}`
    /// document.
    ///
    /// # Errors
    ///
    /// Returns [`ReportError::Parse`] if the text is not a valid dataset.
    pub fn from_json_str(text: &str) -> Result<Self, ReportError> {
        decode(text, "input")
    }

    /// Reads a combined dataset document from `path`.
    ///
    /// # Errors
    ///
    /// Returns [`ReportError::Io`] if the file cannot be read and
    /// [`ReportError::Parse`] if its contents are not a valid dataset.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ReportError> {
        let dataset: Self = read_json(path.as_ref())?;
        dataset.log_loaded();
        Ok(dataset)
    }

    /// Reads transactions and customers from two files, each holding a JSON
    /// array.
    ///
    /// # Errors
    ///
    /// Same as [`Dataset::from_path`], for whichever file fails first.
    pub fn from_paths(
        transactions: impl AsRef<Path>,
        customers: impl AsRef<Path>,
    ) -> Result<Self, ReportError> {
        let dataset = Self::new(
            read_json(transactions.as_ref())?,
            read_json(customers.as_ref())?,
        );
        dataset.log_loaded();
        Ok(dataset)
    }

    fn log_loaded(&self) {
        tracing::info!(
            transactions = self.transactions.len(),
            customers = self.customers.len(),
            "dataset loaded"
        );
    }
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, ReportError> {
    let text = fs::read_to_string(path).map_err(|source| ReportError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    decode(&text, &path.display().to_string())
}

fn decode<T: DeserializeOwned>(text: &str, origin: &str) -> Result<T, ReportError> {
    serde_json::from_str(text).map_err(|source| ReportError::Parse {
        origin: origin.to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn missing_collections_default_to_empty() {
        let dataset = Dataset::from_json_str("{}").unwrap();
        assert_eq!(dataset, Dataset::default());
    }

    #[rstest]
    fn malformed_json_is_a_parse_error() {
        let error = Dataset::from_json_str("{\"transactions\": 3}").unwrap_err();
        assert!(matches!(error, ReportError::Parse { ref origin, .. } if origin == "input"));
    }

    #[rstest]
    fn missing_file_is_an_io_error() {
        let error = Dataset::from_path("/nonexistent/figtally/dataset.json").unwrap_err();
        assert!(matches!(error, ReportError::Io { .. }));
    }

    #[rstest]
    fn separate_files_are_combined() {
        let directory = std::env::temp_dir().join(format!("figtally-dataset-{}", std::process::id()));
        fs::create_dir_all(&directory).unwrap();
        let transactions_path = directory.join("transactions.json");
        let customers_path = directory.join("customers.json");
        fs::write(
            &transactions_path,
            r#"[{"amount": 5, "product": "FIG_JAM", "customerId": "1"}]"#,
        )
        .unwrap();
        fs::write(
            &customers_path,
            r#"[{"id": 1, "emailAddress": "a@x.com", "firstName": "A", "lastName": "B"}]"#,
        )
        .unwrap();

        let dataset = Dataset::from_paths(&transactions_path, &customers_path).unwrap();

        assert_eq!(dataset.transactions.len(), 1);
        assert!(dataset.transactions[0].belongs_to(&dataset.customers[0]));

        fs::remove_dir_all(&directory).unwrap();
    }
}
