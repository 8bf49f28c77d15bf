//! Filtering and the derived last-match lookup.

/// Returns the elements of `sequence` for which `predicate` holds, in their
/// original relative order.
///
/// `predicate` is called exactly once per element, front to back.
///
/// # Arguments
///
/// * `sequence` - The elements to filter
/// * `predicate` - Decides whether an element is kept
///
/// # Examples
///
/// ```rust
/// use figtally::sequence::filter;
///
/// let values = vec![5, 12, 7, 30];
/// let kept = filter(&values, |value| **value > 6);
/// assert_eq!(kept, vec![&12, &7, &30]);
///
/// // The input is still available.
/// assert_eq!(values.len(), 4);
/// ```
pub fn filter<I, P>(sequence: I, mut predicate: P) -> Vec<I::Item>
where
    I: IntoIterator,
    P: FnMut(&I::Item) -> bool,
{
    let mut result = Vec::new();
    for element in sequence {
        if predicate(&element) {
            result.push(element);
        }
    }
    result
}

/// Fallible version of [`filter`].
///
/// Stops at the first `Err` returned by `predicate` and returns it unchanged.
/// No elements after the failing one are visited.
///
/// # Errors
///
/// Returns whatever error `predicate` produced.
///
/// # Examples
///
/// ```rust
/// use figtally::sequence::try_filter;
///
/// let inputs = vec!["4", "x", "9"];
/// let result = try_filter(&inputs, |text| text.parse::<i32>().map(|n| n > 5));
/// assert!(result.is_err());
///
/// let inputs = vec!["4", "9"];
/// let result = try_filter(&inputs, |text| text.parse::<i32>().map(|n| n > 5));
/// assert_eq!(result, Ok(vec![&"9"]));
/// ```
pub fn try_filter<I, P, E>(sequence: I, mut predicate: P) -> Result<Vec<I::Item>, E>
where
    I: IntoIterator,
    P: FnMut(&I::Item) -> Result<bool, E>,
{
    let mut result = Vec::new();
    for element in sequence {
        if predicate(&element)? {
            result.push(element);
        }
    }
    Ok(result)
}

/// Returns the last element of `sequence` satisfying `predicate`.
///
/// Defined as the last element of [`filter`]`(sequence, predicate)`, so the
/// predicate still sees every element. When nothing matches the result is
/// `None`; there is no fallback value.
///
/// # Examples
///
/// ```rust
/// use figtally::sequence::find_last;
///
/// let amounts = vec![210, 90, 300, 120];
/// assert_eq!(find_last(&amounts, |amount| **amount > 200), Some(&300));
/// assert_eq!(find_last(&amounts, |amount| **amount > 1000), None);
/// ```
pub fn find_last<I, P>(sequence: I, predicate: P) -> Option<I::Item>
where
    I: IntoIterator,
    P: FnMut(&I::Item) -> bool,
{
    filter(sequence, predicate).pop()
}

/// Fallible version of [`find_last`].
///
/// # Errors
///
/// Returns the first error produced by `predicate`.
pub fn try_find_last<I, P, E>(sequence: I, predicate: P) -> Result<Option<I::Item>, E>
where
    I: IntoIterator,
    P: FnMut(&I::Item) -> Result<bool, E>,
{
    try_filter(sequence, predicate).map(|mut matches| matches.pop())
}
