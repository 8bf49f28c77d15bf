//! # figtally
//!
//! Generic higher-order sequence functions and the transaction/customer
//! reports built on top of them.
//!
//! ## Overview
//!
//! - **Sequence functions**: `filter`, `map`, `pair_if`, `reduce` and the
//!   derived `find_last`, each with a fallible `try_` sibling
//! - **Reports**: invalid transactions, duplicate customers, the most recent
//!   high-value transaction, a size tally and the customers behind high-value
//!   transactions
//!
//! ## Feature Flags
//!
//! - `sequence`: Generic sequence functions
//! - `report`: Record types, report configuration and queries
//! - `cli`: The `figtally` command line binary
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use figtally::prelude::*;
//!
//! let amounts = vec![10, 250, 90, 300];
//! let large = filter(&amounts, |amount| **amount > 200);
//! assert_eq!(large, vec![&250, &300]);
//!
//! let total = reduce(&amounts, |amount, accumulator| accumulator + amount, 0);
//! assert_eq!(total, 650);
//!
//! assert_eq!(find_last(&amounts, |amount| **amount > 200), Some(&300));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports the sequence functions and, with the `report` feature, the
/// report types.
///
/// # Usage
///
/// ```rust
/// use figtally::prelude::*;
/// ```
pub mod prelude {

    #[cfg(feature = "sequence")]
    pub use crate::sequence::*;

    #[cfg(feature = "report")]
    pub use crate::report::*;
}

#[cfg(feature = "sequence")]
pub mod sequence;

#[cfg(feature = "report")]
pub mod report;
