//! Generic higher-order functions over ordered sequences.
//!
//! Every function accepts anything implementing [`IntoIterator`] and returns
//! a freshly allocated result. Passing a reference (`&Vec<T>`, `&[T]`) leaves
//! the input untouched and yields references to its elements; passing an
//! owned collection moves the elements through.
//!
//! - [`filter`]: Keep the elements matching a predicate
//! - [`map`]: Transform every element
//! - [`pair_if`]: Pair elements of two sequences that satisfy a predicate
//! - [`reduce`]: Thread an accumulator through the sequence
//! - [`find_last`]: The last element matching a predicate
//!
//! Callbacks run exactly in sequence order, and that order is part of the
//! contract: callers may observe it through side effects or through the
//! accumulator in [`reduce`].
//!
//! # Failure
//!
//! A callback that panics unwinds straight through these functions. For
//! callbacks that report failure as a `Result`, the `try_` variants stop at
//! the first `Err` and hand it back unchanged.
//!
//! # Laws
//!
//! ```text
//! filter(s, p).len() <= s.len()
//! map(s, f)[i] == f(s[i])
//! reduce([], c, i) == i
//! reduce([x], c, i) == c(x, i)
//! find_last(s, p) == filter(s, p).pop()
//! ```
//!
//! # Examples
//!
//! ```rust
//! use figtally::sequence::{map, pair_if};
//!
//! let owners = vec![(1, "ana"), (2, "bo")];
//! let orders = vec![(10, 2), (11, 1), (12, 2)];
//!
//! let joined = pair_if(&orders, &owners, |order, owner| order.1 == owner.0);
//! let labels = map(&joined, |(order, owner)| format!("{}:{}", order.0, owner.1));
//!
//! assert_eq!(labels, vec!["10:bo", "11:ana", "12:bo"]);
//! ```

mod filter;
mod map;
mod pair;
mod reduce;

pub use filter::{filter, find_last, try_filter, try_find_last};
pub use map::{map, try_map};
pub use pair::{pair_if, try_pair_if};
pub use reduce::{reduce, try_reduce};
