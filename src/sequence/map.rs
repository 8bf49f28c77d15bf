/// Applies `transform` to every element of `sequence` and collects the results.
///
/// The result has the same length as the input and element `i` is
/// `transform(sequence[i])`. `transform` is called exactly once per element,
/// front to back.
///
/// # Examples
///
/// ```rust
/// use figtally::sequence::map;
///
/// let names = vec![("Ada", "Byron"), ("Alan", "Turing")];
/// let full = map(&names, |(first, last)| format!("{first} {last}"));
/// assert_eq!(full, vec!["Ada Byron", "Alan Turing"]);
/// ```
pub fn map<I, F, U>(sequence: I, mut transform: F) -> Vec<U>
where
    I: IntoIterator,
    F: FnMut(I::Item) -> U,
{
    let iterator = sequence.into_iter();
    let mut result = Vec::with_capacity(iterator.size_hint().0);
    for element in iterator {
        result.push(transform(element));
    }
    result
}

/// Fallible version of [`map`].
///
/// Returns the first `Err` produced by `transform`. No partial result is
/// returned and later elements are not visited.
///
/// # Errors
///
/// Returns whatever error `transform` produced.
///
/// # Examples
///
/// ```rust
/// use figtally::sequence::try_map;
///
/// let parsed: Result<Vec<i32>, _> = try_map(["1", "2", "3"], str::parse::<i32>);
/// assert_eq!(parsed, Ok(vec![1, 2, 3]));
///
/// let parsed: Result<Vec<i32>, _> = try_map(["1", "two", "3"], str::parse::<i32>);
/// assert!(parsed.is_err());
/// ```
pub fn try_map<I, F, U, E>(sequence: I, mut transform: F) -> Result<Vec<U>, E>
where
    I: IntoIterator,
    F: FnMut(I::Item) -> Result<U, E>,
{
    let iterator = sequence.into_iter();
    let mut result = Vec::with_capacity(iterator.size_hint().0);
    for element in iterator {
        match transform(element) {
            Ok(value) => result.push(value),
            Err(error) => return Err(error),
        }
    }
    Ok(result)
}
