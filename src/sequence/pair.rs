//! Pairwise matching of two sequences.
//!
//! The nested loop is intentional: every element of the first sequence is
//! tested against every element of the second, giving `|A| * |B|` predicate
//! calls. Callers joining large inputs on a key should index the inner side
//! themselves.

/// Returns every `(a, b)` with `a` from `first` and `b` from `second` for
/// which `predicate(a, b)` holds.
///
/// Pairs come out in row-major order: for each `a` in order, for each `b` in
/// order. `second` is iterated once per element of `first`, so it must be
/// cheaply cloneable (a reference or a cloneable iterator).
///
/// Pairing a collection with itself yields each matching pair of distinct
/// elements twice, once in each order. Halving that count is up to the
/// caller.
///
/// # Examples
///
/// ```rust
/// use figtally::sequence::pair_if;
///
/// let emails = vec![(1, "a@x.com"), (2, "a@x.com"), (3, "b@x.com")];
/// let duplicates = pair_if(&emails, &emails, |left, right| {
///     left.1 == right.1 && left.0 != right.0
/// });
///
/// assert_eq!(duplicates.len(), 2);
/// assert_eq!(duplicates[0], (&emails[0], &emails[1]));
/// assert_eq!(duplicates[1], (&emails[1], &emails[0]));
/// ```
pub fn pair_if<A, B, P>(first: A, second: B, mut predicate: P) -> Vec<(A::Item, B::Item)>
where
    A: IntoIterator,
    A::Item: Clone,
    B: IntoIterator + Clone,
    P: FnMut(&A::Item, &B::Item) -> bool,
{
    let mut result = Vec::new();
    for left in first {
        for right in second.clone() {
            if predicate(&left, &right) {
                result.push((left.clone(), right));
            }
        }
    }
    result
}

/// Fallible version of [`pair_if`].
///
/// # Errors
///
/// Returns the first error produced by `predicate`; no further pairs are
/// tested.
pub fn try_pair_if<A, B, P, E>(
    first: A,
    second: B,
    mut predicate: P,
) -> Result<Vec<(A::Item, B::Item)>, E>
where
    A: IntoIterator,
    A::Item: Clone,
    B: IntoIterator + Clone,
    P: FnMut(&A::Item, &B::Item) -> Result<bool, E>,
{
    let mut result = Vec::new();
    for left in first {
        for right in second.clone() {
            if predicate(&left, &right)? {
                result.push((left.clone(), right));
            }
        }
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn pair_if_enumerates_in_row_major_order() {
        let rows = vec![1, 2];
        let columns = vec!['a', 'b', 'c'];
        let mut calls = Vec::new();

        let pairs = pair_if(&rows, &columns, |row, column| {
            calls.push((**row, **column));
            true
        });

        let expected = vec![(1, 'a'), (1, 'b'), (1, 'c'), (2, 'a'), (2, 'b'), (2, 'c')];
        assert_eq!(calls, expected);
        assert_eq!(
            pairs.into_iter().map(|(row, column)| (*row, *column)).collect::<Vec<_>>(),
            expected
        );
    }

    #[rstest]
    fn pair_if_evaluates_full_cartesian_product() {
        let mut calls = 0;
        let pairs = pair_if(0..4, 0..5, |_, _| {
            calls += 1;
            false
        });

        assert!(pairs.is_empty());
        assert_eq!(calls, 20);
    }

    #[rstest]
    #[case(vec![], vec![1, 2])]
    #[case(vec![1, 2], vec![])]
    fn pair_if_with_empty_side_is_empty(#[case] first: Vec<i32>, #[case] second: Vec<i32>) {
        assert!(pair_if(&first, &second, |_, _| true).is_empty());
    }

    #[rstest]
    fn pair_if_joins_on_key() {
        let orders = vec![("o1", 2), ("o2", 9), ("o3", 1)];
        let owners = vec![(1, "ana"), (2, "bo")];

        let joined = pair_if(&orders, &owners, |order, owner| order.1 == owner.0);

        assert_eq!(
            joined,
            vec![(&orders[0], &owners[1]), (&orders[2], &owners[0])]
        );
    }

    #[rstest]
    #[should_panic(expected = "bad pair (2, 1)")]
    fn pair_if_lets_predicate_panic_unwind() {
        let values = vec![1, 2];
        let _ = pair_if(&values, &values, |left, right| {
            assert!(!(**left == 2 && **right == 1), "bad pair ({left}, {right})");
            true
        });
    }

    #[rstest]
    fn try_pair_if_propagates_error() {
        let values = vec![1, 2, 3];
        let result: Result<Vec<(&i32, &i32)>, String> =
            try_pair_if(&values, &values, |left, right| {
                if **left == 2 && **right == 3 {
                    Err("stop".to_string())
                } else {
                    Ok(left == right)
                }
            });

        assert_eq!(result, Err("stop".to_string()));
    }

    #[rstest]
    fn try_pair_if_collects_matches() {
        let values = vec![1, 2, 3];
        let result: Result<Vec<(&i32, &i32)>, ()> =
            try_pair_if(&values, &values, |left, right| Ok(**left + **right == 4));

        assert_eq!(result, Ok(vec![(&1, &3), (&2, &2), (&3, &1)]));
    }
}
