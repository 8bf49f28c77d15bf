//! Transaction and customer reports built on the sequence functions.
//!
//! - [`Transaction`], [`Customer`], [`CustomerId`]: The record types
//! - [`Dataset`]: Both collections, loaded from JSON
//! - [`ReportConfig`]: Thresholds and allowed products, from the environment
//! - Queries: [`count_invalid_transactions`], [`count_duplicate_customers`],
//!   [`most_recent_amount_over`], [`tally_by_size`],
//!   [`customers_with_transactions_over`], [`display_names`]
//! - [`Report`]: Every query result for one dataset
//!
//! # Examples
//!
//! ```rust
//! use figtally::report::{Dataset, Report, ReportConfig};
//!
//! let dataset = Dataset::from_json_str(r#"{
//!     "transactions": [
//!         {"amount": 210, "product": "FIG_JAM", "customerId": 1},
//!         {"amount": 90, "product": "FIG_JAM", "customerId": 2},
//!         {"amount": 300, "product": "FIG_JELLY", "customerId": 2}
//!     ],
//!     "customers": [
//!         {"id": 1, "emailAddress": "ada@x.com", "firstName": "Ada", "lastName": "Byron"},
//!         {"id": 2, "emailAddress": "alan@x.com", "firstName": "Alan", "lastName": "Turing"}
//!     ]
//! }"#).unwrap();
//!
//! let report = Report::build(&dataset, &ReportConfig::default());
//! assert_eq!(report.most_recent_over_threshold.unwrap().to_string(), "300");
//! assert_eq!(report.high_value_customer_names, vec!["Ada Byron", "Alan Turing"]);
//! ```

mod config;
mod dataset;
mod error;
mod query;
mod record;
mod summary;

pub use config::{
    ALLOWED_PRODUCTS_VAR, ConfigError, DEFAULT_ALLOWED_PRODUCTS, HIGH_VALUE_THRESHOLD_VAR,
    MEDIUM_BELOW_VAR, ReportConfig, SMALL_BELOW_VAR,
};
pub use dataset::Dataset;
pub use error::ReportError;
pub use query::{
    SizeTally, TransactionSize, classify_amount, count_duplicate_customers,
    count_invalid_transactions, customers_with_transactions_over, display_names,
    is_invalid_transaction, most_recent_amount_over, tally_by_size,
};
pub use record::{Customer, CustomerId, Transaction};
pub use summary::Report;
