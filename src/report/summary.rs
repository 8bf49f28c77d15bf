//! The combined report over a dataset.

use std::fmt;

use rust_decimal::Decimal;
use serde::Serialize;

use super::config::ReportConfig;
use super::dataset::Dataset;
use super::query::{
    SizeTally, count_duplicate_customers, count_invalid_transactions,
    customers_with_transactions_over, display_names, most_recent_amount_over, tally_by_size,
};
use super::record::Customer;

/// Every query result for one dataset.
///
/// Renders as plain text through [`fmt::Display`] and as JSON through
/// `serde`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    /// Transactions with no usable amount or an unknown product.
    pub invalid_transactions: usize,
    /// Duplicate customers (halved self-pair count).
    pub duplicate_customers: usize,
    /// The threshold used for the high value queries.
    pub high_value_threshold: Decimal,
    /// Amount of the most recent transaction above the threshold, if any.
    pub most_recent_over_threshold: Option<Decimal>,
    /// Transactions per size band.
    pub sizes: SizeTally,
    /// Distinct customers with a transaction above the threshold.
    pub high_value_customers: Vec<Customer>,
    /// Display names of `high_value_customers`, in the same order.
    pub high_value_customer_names: Vec<String>,
}

impl Report {
    /// Runs every query over `dataset`.
    ///
    /// A dataset with no transaction above the threshold still produces a
    /// report; `most_recent_over_threshold` is `None` in that case.
    pub fn build(dataset: &Dataset, config: &ReportConfig) -> Self {
        let threshold = config.high_value_threshold;

        let invalid_transactions = count_invalid_transactions(&dataset.transactions, config);
        let duplicate_customers = count_duplicate_customers(&dataset.customers);
        tracing::debug!(invalid_transactions, duplicate_customers, "counted records");

        let most_recent_over_threshold =
            most_recent_amount_over(&dataset.transactions, threshold).ok();
        if most_recent_over_threshold.is_none() {
            tracing::warn!(%threshold, "no transaction above the high value threshold");
        }

        let sizes = tally_by_size(&dataset.transactions, config);
        tracing::debug!(
            small = sizes.small,
            medium = sizes.medium,
            large = sizes.large,
            "tallied transaction sizes"
        );

        let customers =
            customers_with_transactions_over(&dataset.transactions, &dataset.customers, threshold);
        let high_value_customer_names = display_names(&customers);
        tracing::debug!(
            customers = customers.len(),
            %threshold,
            "found high value customers"
        );

        Self {
            invalid_transactions,
            duplicate_customers,
            high_value_threshold: threshold,
            most_recent_over_threshold,
            sizes,
            high_value_customers: customers.into_iter().cloned().collect(),
            high_value_customer_names,
        }
    }
}

impl fmt::Display for Report {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let threshold = self.high_value_threshold;

        writeln!(
            formatter,
            "Number of invalid transactions: {}",
            self.invalid_transactions
        )?;
        writeln!(
            formatter,
            "Number of duplicate customers: {}",
            self.duplicate_customers
        )?;
        match self.most_recent_over_threshold {
            Some(amount) => writeln!(
                formatter,
                "Most recent transaction over ${threshold}: ${amount}"
            )?,
            None => writeln!(formatter, "Most recent transaction over ${threshold}: none")?,
        }
        writeln!(formatter, "Number of small transactions: {}", self.sizes.small)?;
        writeln!(formatter, "Number of medium transactions: {}", self.sizes.medium)?;
        writeln!(formatter, "Number of large transactions: {}", self.sizes.large)?;

        writeln!(formatter, "Customers with transactions over ${threshold}:")?;
        for customer in &self.high_value_customers {
            writeln!(
                formatter,
                "  {} {} <{}>",
                customer.id,
                customer.display_name(),
                customer.email_address
            )?;
        }

        writeln!(
            formatter,
            "Names of customers with transactions over ${threshold}:"
        )?;
        for name in &self.high_value_customer_names {
            writeln!(formatter, "  {name}")?;
        }
        Ok(())
    }
}
