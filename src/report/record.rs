//! Transaction and customer records.
//!
//! Records are deserialized from camelCase JSON. A transaction's `amount`
//! may be a number, a numeric string, `null` or missing entirely; the last
//! two both become `None`.

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Identifier shared by customers and the transactions that reference them.
///
/// Accepts either a JSON integer or a JSON string, stored as text so that
/// `1` and `"1"` compare equal.
///
/// # Examples
///
/// ```rust
/// use figtally::report::CustomerId;
///
/// let from_number: CustomerId = serde_json::from_str("17").unwrap();
/// let from_text: CustomerId = serde_json::from_str("\"17\"").unwrap();
/// assert_eq!(from_number, from_text);
/// assert_eq!(from_number.as_str(), "17");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "RawCustomerId", into = "String")]
pub struct CustomerId(String);

#[derive(Deserialize)]
#[serde(untagged)]
enum RawCustomerId {
    Number(i64),
    Text(String),
}

impl CustomerId {
    /// Creates an identifier from its textual form.
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Returns the identifier as text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<RawCustomerId> for CustomerId {
    fn from(raw: RawCustomerId) -> Self {
        match raw {
            RawCustomerId::Number(number) => Self(number.to_string()),
            RawCustomerId::Text(text) => Self(text),
        }
    }
}

impl From<CustomerId> for String {
    fn from(identifier: CustomerId) -> Self {
        identifier.0
    }
}

impl From<i64> for CustomerId {
    fn from(number: i64) -> Self {
        Self(number.to_string())
    }
}

impl From<&str> for CustomerId {
    fn from(text: &str) -> Self {
        Self(text.to_string())
    }
}

impl fmt::Display for CustomerId {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(&self.0)
    }
}

/// A single sale.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    /// Sale amount, `None` when the source had no usable amount.
    #[serde(default)]
    pub amount: Option<Decimal>,
    /// Product tag such as `FIG_JAM`. Empty when missing.
    #[serde(default)]
    pub product: String,
    /// The customer who made the purchase, if recorded.
    #[serde(default)]
    pub customer_id: Option<CustomerId>,
}

impl Transaction {
    /// Creates a transaction.
    pub fn new(
        amount: Option<Decimal>,
        product: impl Into<String>,
        customer_id: Option<CustomerId>,
    ) -> Self {
        Self {
            amount,
            product: product.into(),
            customer_id,
        }
    }

    /// Returns `true` when the amount is present and strictly greater than
    /// `threshold`.
    pub fn amount_exceeds(&self, threshold: Decimal) -> bool {
        self.amount.is_some_and(|amount| amount > threshold)
    }

    /// Returns `true` when the amount is missing or zero.
    pub fn has_no_amount(&self) -> bool {
        self.amount.is_none_or(|amount| amount.is_zero())
    }

    /// Returns `true` when this transaction belongs to `customer`.
    pub fn belongs_to(&self, customer: &Customer) -> bool {
        self.customer_id.as_ref() == Some(&customer.id)
    }
}

/// A customer record.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    /// Unique identifier, referenced by [`Transaction::customer_id`].
    pub id: CustomerId,
    /// Contact address. Two customers with different ids and the same
    /// address are considered duplicates.
    #[serde(default)]
    pub email_address: String,
    /// Given name.
    #[serde(default)]
    pub first_name: String,
    /// Family name.
    #[serde(default)]
    pub last_name: String,
}

impl Customer {
    /// Creates a customer.
    pub fn new(
        id: impl Into<CustomerId>,
        email_address: impl Into<String>,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            email_address: email_address.into(),
            first_name: first_name.into(),
            last_name: last_name.into(),
        }
    }

    /// Returns `"{first_name} {last_name}"`.
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

static_assertions::assert_impl_all!(Transaction: Send, Sync, Clone);
static_assertions::assert_impl_all!(Customer: Send, Sync, Clone);
