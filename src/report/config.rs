//! Report configuration.
//!
//! Thresholds and the allowed product list are read from environment
//! variables, each falling back to a default when unset. A `.env` file in
//! the working directory is loaded first if present.
//!
//! # Environment Variables
//!
//! - `FIGTALLY_HIGH_VALUE_THRESHOLD`: Amount a transaction must exceed to be
//!   "high value" (default: 200)
//! - `FIGTALLY_SMALL_BELOW`: Amounts below this are small (default: 25)
//! - `FIGTALLY_MEDIUM_BELOW`: Amounts below this, and not small, are medium
//!   (default: 75)
//! - `FIGTALLY_ALLOWED_PRODUCTS`: Comma separated product tags (default:
//!   `FIG_JAM,FIG_JELLY,SPICY_FIG_JAM,ORANGE_FIG_JELLY`)
//!
//! # Example
//!
//! ```rust,ignore
//! use figtally::report::ReportConfig;
//!
//! let config = ReportConfig::from_env()?;
//! println!("High value threshold: {}", config.high_value_threshold);
//! ```

use std::env;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::Serialize;
use thiserror::Error;

/// Environment variable for [`ReportConfig::high_value_threshold`].
pub const HIGH_VALUE_THRESHOLD_VAR: &str = "FIGTALLY_HIGH_VALUE_THRESHOLD";
/// Environment variable for [`ReportConfig::small_below`].
pub const SMALL_BELOW_VAR: &str = "FIGTALLY_SMALL_BELOW";
/// Environment variable for [`ReportConfig::medium_below`].
pub const MEDIUM_BELOW_VAR: &str = "FIGTALLY_MEDIUM_BELOW";
/// Environment variable for [`ReportConfig::allowed_products`].
pub const ALLOWED_PRODUCTS_VAR: &str = "FIGTALLY_ALLOWED_PRODUCTS";

/// Products accepted when no list is configured.
pub const DEFAULT_ALLOWED_PRODUCTS: [&str; 4] =
    ["FIG_JAM", "FIG_JELLY", "SPICY_FIG_JAM", "ORANGE_FIG_JELLY"];

/// Configuration error types.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// An environment variable has an invalid value.
    #[error("Invalid value for {key}: {message}")]
    InvalidValue {
        /// The name of the environment variable.
        key: String,
        /// Description of why the value is invalid.
        message: String,
    },
}

/// Thresholds and product rules used by the report queries.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportConfig {
    /// A transaction is high value when its amount is strictly greater.
    pub high_value_threshold: Decimal,
    /// Upper bound (exclusive) of a small transaction.
    pub small_below: Decimal,
    /// Upper bound (exclusive) of a medium transaction.
    pub medium_below: Decimal,
    /// Product tags that make a transaction valid.
    pub allowed_products: Vec<String>,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            high_value_threshold: Decimal::from(200),
            small_below: Decimal::from(25),
            medium_below: Decimal::from(75),
            allowed_products: DEFAULT_ALLOWED_PRODUCTS
                .iter()
                .map(ToString::to_string)
                .collect(),
        }
    }
}

impl ReportConfig {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if a variable is set but cannot
    /// be parsed, or if the resulting configuration is inconsistent.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignores errors if file doesn't exist)
        dotenvy::dotenv().ok();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds configuration from an arbitrary key lookup.
    ///
    /// Unset keys (lookup returns `None`) fall back to the defaults.
    ///
    /// # Errors
    ///
    /// Same as [`ReportConfig::from_env`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use figtally::report::ReportConfig;
    /// use rust_decimal::Decimal;
    ///
    /// let config = ReportConfig::from_lookup(|key| match key {
    ///     "FIGTALLY_HIGH_VALUE_THRESHOLD" => Some("150".to_string()),
    ///     _ => None,
    /// })
    /// .unwrap();
    ///
    /// assert_eq!(config.high_value_threshold, Decimal::from(150));
    /// assert_eq!(config.small_below, Decimal::from(25));
    /// ```
    pub fn from_lookup<L>(lookup: L) -> Result<Self, ConfigError>
    where
        L: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let high_value_threshold =
            parse_optional(&lookup, HIGH_VALUE_THRESHOLD_VAR, defaults.high_value_threshold)?;
        let small_below = parse_optional(&lookup, SMALL_BELOW_VAR, defaults.small_below)?;
        let medium_below = parse_optional(&lookup, MEDIUM_BELOW_VAR, defaults.medium_below)?;
        let allowed_products = lookup(ALLOWED_PRODUCTS_VAR)
            .map_or(defaults.allowed_products, |value| parse_product_list(&value));

        let config = Self {
            high_value_threshold,
            small_below,
            medium_below,
            allowed_products,
        };
        config.validate()?;
        Ok(config)
    }

    /// Returns a copy with a different high value threshold.
    #[must_use]
    pub fn with_high_value_threshold(mut self, threshold: Decimal) -> Self {
        self.high_value_threshold = threshold;
        self
    }

    /// Returns `true` if `product` is one of the allowed tags.
    pub fn is_allowed_product(&self, product: &str) -> bool {
        self.allowed_products.iter().any(|allowed| allowed == product)
    }

    /// Checks the size bands and product list are usable.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` when `small_below` exceeds
    /// `medium_below` or no products are allowed.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.small_below > self.medium_below {
            return Err(ConfigError::InvalidValue {
                key: SMALL_BELOW_VAR.to_string(),
                message: format!(
                    "{} is greater than {MEDIUM_BELOW_VAR} ({})",
                    self.small_below, self.medium_below
                ),
            });
        }
        if self.allowed_products.is_empty() {
            return Err(ConfigError::InvalidValue {
                key: ALLOWED_PRODUCTS_VAR.to_string(),
                message: "no products listed".to_string(),
            });
        }
        Ok(())
    }
}

fn parse_optional<L>(lookup: &L, key: &str, default: Decimal) -> Result<Decimal, ConfigError>
where
    L: Fn(&str) -> Option<String>,
{
    lookup(key).map_or(Ok(default), |value| {
        Decimal::from_str(value.trim()).map_err(|error| ConfigError::InvalidValue {
            key: key.to_string(),
            message: error.to_string(),
        })
    })
}

fn parse_product_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|product| !product.is_empty())
        .map(ToString::to_string)
        .collect()
}
