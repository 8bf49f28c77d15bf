//! Left-to-right reduction with an element-first combine function.

/// Folds `sequence` into a single value, starting from `initial`.
///
/// For each element `e` in order, the accumulator becomes
/// `combine(e, accumulator)`. Note the argument order: element first,
/// accumulator second. An empty sequence returns `initial` untouched.
///
/// The accumulator is moved into `combine` and moved back out on every step,
/// so `combine` may mutate it in place and return it. Nothing is cloned
/// between steps.
///
/// # Arguments
///
/// * `sequence` - The elements to fold
/// * `combine` - Takes an element and the current accumulator, returns the
///   next accumulator
/// * `initial` - The starting accumulator
///
/// # Examples
///
/// ```rust
/// use figtally::sequence::reduce;
///
/// // Building up a structure in place.
/// let words = vec!["fig", "jam", "fig"];
/// let seen = reduce(&words, |word, mut accumulator: Vec<&str>| {
///     if !accumulator.contains(word) {
///         accumulator.push(*word);
///     }
///     accumulator
/// }, Vec::new());
/// assert_eq!(seen, vec!["fig", "jam"]);
///
/// // The element comes first.
/// let digits = reduce(vec![1, 2, 3], |digit, text: String| format!("{text}{digit}"), String::new());
/// assert_eq!(digits, "123");
/// ```
pub fn reduce<I, F, Acc>(sequence: I, mut combine: F, initial: Acc) -> Acc
where
    I: IntoIterator,
    F: FnMut(I::Item, Acc) -> Acc,
{
    let mut result = initial;
    for element in sequence {
        result = combine(element, result);
    }
    result
}

/// Fallible version of [`reduce`].
///
/// # Errors
///
/// Returns the first error produced by `combine`. The accumulator built so
/// far is dropped.
///
/// # Examples
///
/// ```rust
/// use figtally::sequence::try_reduce;
///
/// let total = try_reduce(vec![200u8, 50], |value, sum: u8| sum.checked_add(value).ok_or("overflow"), 0);
/// assert_eq!(total, Ok(250));
///
/// let total = try_reduce(vec![200u8, 100], |value, sum: u8| sum.checked_add(value).ok_or("overflow"), 0);
/// assert_eq!(total, Err("overflow"));
/// ```
pub fn try_reduce<I, F, Acc, E>(sequence: I, mut combine: F, initial: Acc) -> Result<Acc, E>
where
    I: IntoIterator,
    F: FnMut(I::Item, Acc) -> Result<Acc, E>,
{
    let mut result = initial;
    for element in sequence {
        result = combine(element, result)?;
    }
    Ok(result)
}
