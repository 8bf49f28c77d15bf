//! Report queries composed from the sequence functions.
//!
//! Each query borrows its inputs and never modifies them.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::config::ReportConfig;
use super::error::ReportError;
use super::record::{Customer, Transaction};
use crate::sequence::{filter, find_last, map, pair_if, reduce};

/// Size band of a transaction amount.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TransactionSize {
    /// Below `small_below`.
    Small,
    /// At least `small_below`, below `medium_below`.
    Medium,
    /// Everything else.
    Large,
}

/// Number of transactions in each size band.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SizeTally {
    /// Small transactions.
    pub small: usize,
    /// Medium transactions.
    pub medium: usize,
    /// Large transactions.
    pub large: usize,
}

impl SizeTally {
    /// Counts one more transaction of the given size.
    pub const fn record(&mut self, size: TransactionSize) {
        match size {
            TransactionSize::Small => self.small += 1,
            TransactionSize::Medium => self.medium += 1,
            TransactionSize::Large => self.large += 1,
        }
    }

    /// Total number of transactions counted.
    pub const fn total(&self) -> usize {
        self.small + self.medium + self.large
    }
}

/// Returns `true` when a transaction has no usable amount or an unknown
/// product.
pub fn is_invalid_transaction(transaction: &Transaction, config: &ReportConfig) -> bool {
    transaction.has_no_amount() || !config.is_allowed_product(&transaction.product)
}

/// Counts transactions whose amount is missing or zero, or whose product is
/// not allowed.
///
/// # Examples
///
/// ```rust
/// use figtally::report::{count_invalid_transactions, ReportConfig, Transaction};
/// use rust_decimal::Decimal;
///
/// let transactions = vec![
///     Transaction::new(Some(Decimal::ZERO), "", None),
///     Transaction::new(Some(Decimal::from(50)), "FIG_JAM", None),
///     Transaction::new(None, "FIG_JAM", None),
/// ];
/// assert_eq!(count_invalid_transactions(&transactions, &ReportConfig::default()), 2);
/// ```
pub fn count_invalid_transactions(transactions: &[Transaction], config: &ReportConfig) -> usize {
    filter(transactions, |transaction| {
        is_invalid_transaction(transaction, config)
    })
    .len()
}

/// Counts duplicate customers: distinct ids sharing an email address.
///
/// Self-pairing reports each duplicate pair twice, so the pair count is
/// halved. The result is the number of unordered matching pairs, which only
/// equals the number of extra customer records while no address is shared
/// by more than two customers.
pub fn count_duplicate_customers(customers: &[Customer]) -> usize {
    pair_if(customers, customers, |left, right| {
        left.email_address == right.email_address && left.id != right.id
    })
    .len()
        / 2
}

/// Returns the amount of the last transaction, in input order, whose amount
/// exceeds `threshold`.
///
/// # Errors
///
/// Returns [`ReportError::NoMatchingTransaction`] when no amount exceeds
/// `threshold`.
pub fn most_recent_amount_over(
    transactions: &[Transaction],
    threshold: Decimal,
) -> Result<Decimal, ReportError> {
    find_last(transactions, |transaction| {
        transaction.amount_exceeds(threshold)
    })
    .and_then(|transaction| transaction.amount)
    .ok_or(ReportError::NoMatchingTransaction { threshold })
}

/// Classifies an amount into a size band.
pub fn classify_amount(amount: Decimal, config: &ReportConfig) -> TransactionSize {
    if amount < config.small_below {
        TransactionSize::Small
    } else if amount < config.medium_below {
        TransactionSize::Medium
    } else {
        TransactionSize::Large
    }
}

/// Tallies transactions by size band. Missing amounts count as zero.
///
/// # Examples
///
/// ```rust
/// use figtally::report::{tally_by_size, ReportConfig, SizeTally, Transaction};
/// use rust_decimal::Decimal;
///
/// let transactions: Vec<Transaction> = [10, 25, 74, 75, 500]
///     .into_iter()
///     .map(|amount| Transaction::new(Some(Decimal::from(amount)), "FIG_JAM", None))
///     .collect();
///
/// let tally = tally_by_size(&transactions, &ReportConfig::default());
/// assert_eq!(tally, SizeTally { small: 1, medium: 2, large: 2 });
/// ```
pub fn tally_by_size(transactions: &[Transaction], config: &ReportConfig) -> SizeTally {
    reduce(
        transactions,
        |transaction, mut tally: SizeTally| {
            tally.record(classify_amount(
                transaction.amount.unwrap_or(Decimal::ZERO),
                config,
            ));
            tally
        },
        SizeTally::default(),
    )
}

/// Returns the distinct customers owning at least one transaction whose
/// amount exceeds `threshold`, in order of first appearance.
pub fn customers_with_transactions_over<'a>(
    transactions: &[Transaction],
    customers: &'a [Customer],
    threshold: Decimal,
) -> Vec<&'a Customer> {
    let high_value = filter(transactions, |transaction| {
        transaction.amount_exceeds(threshold)
    });
    let owners = pair_if(&high_value, customers, |transaction, customer| {
        transaction.belongs_to(customer)
    });

    reduce(
        owners,
        |(_, customer), mut distinct: Vec<&'a Customer>| {
            if !distinct.contains(&customer) {
                distinct.push(customer);
            }
            distinct
        },
        Vec::new(),
    )
}

/// Maps customers to `"{first_name} {last_name}"`.
pub fn display_names(customers: &[&Customer]) -> Vec<String> {
    map(customers, |customer| customer.display_name())
}
