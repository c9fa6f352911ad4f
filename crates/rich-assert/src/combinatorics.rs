//! Exhaustive combination and permutation helpers for table-style tests.
//!
//! Tests that sweep attribute grids often want every subset or every ordering
//! of a small input set. [`all_combinations`] yields the power set of the
//! input and [`all_permutations`] every ordering; the `for_each_*` variants
//! visit the results with an optional cap for inputs large enough that the
//! full sweep would dominate the test's runtime.

/// Every combination (subset) of the input, including the empty one.
///
/// Combinations are produced by folding each element over the set built so
/// far, so `[1, 2, 3]` yields `[]`, `[1]`, `[2]`, `[1, 2]`, `[3]`, `[1, 3]`,
/// `[2, 3]`, `[1, 2, 3]`. Within one combination, elements keep their input
/// order.
///
/// # Examples
///
/// ```
/// use rich_assert::combinatorics::all_combinations;
///
/// let combos = all_combinations(&[1, 2]);
/// assert_eq!(combos, [vec![], vec![1], vec![2], vec![1, 2]]);
/// ```
#[must_use]
pub fn all_combinations<T: Clone>(items: &[T]) -> Vec<Vec<T>> {
    items.iter().fold(vec![Vec::new()], |mut combos, item| {
        let extended: Vec<Vec<T>> = combos
            .iter()
            .map(|combo| {
                let mut longer = combo.clone();
                longer.push(item.clone());
                longer
            })
            .collect();
        combos.extend(extended);
        combos
    })
}

/// Every permutation (ordering) of the input.
///
/// Permutations appear in lexicographic order of input positions: `[1, 2, 3]`
/// yields `[1, 2, 3]`, `[1, 3, 2]`, `[2, 1, 3]`, `[2, 3, 1]`, `[3, 1, 2]`,
/// `[3, 2, 1]`. An empty input yields one empty permutation.
#[must_use]
pub fn all_permutations<T: Clone>(items: &[T]) -> Vec<Vec<T>> {
    let mut results = Vec::new();
    let mut current = Vec::with_capacity(items.len());
    permute(&mut current, items.to_vec(), &mut results);
    results
}

fn permute<T: Clone>(current: &mut Vec<T>, remaining: Vec<T>, results: &mut Vec<Vec<T>>) {
    if remaining.is_empty() {
        results.push(current.clone());
        return;
    }
    for index in 0..remaining.len() {
        let mut rest = remaining.clone();
        let item = rest.remove(index);
        current.push(item);
        permute(current, rest, results);
        current.pop();
    }
}

/// Visit up to `max` combinations of `items` (all of them when `None`).
pub fn for_each_combination<T: Clone>(
    items: &[T],
    max: Option<usize>,
    mut visit: impl FnMut(&[T]),
) {
    for combo in all_combinations(items)
        .iter()
        .take(max.unwrap_or(usize::MAX))
    {
        visit(combo);
    }
}

/// Visit up to `max` permutations of `items` (all of them when `None`).
pub fn for_each_permutation<T: Clone>(
    items: &[T],
    max: Option<usize>,
    mut visit: impl FnMut(&[T]),
) {
    for permutation in all_permutations(items)
        .iter()
        .take(max.unwrap_or(usize::MAX))
    {
        visit(permutation);
    }
}

#[cfg(test)]
mod tests {
    use super::{all_combinations, all_permutations, for_each_combination, for_each_permutation};

    #[test]
    fn combinations_form_the_power_set() {
        let combos = all_combinations(&[1, 2, 3]);
        assert_eq!(
            combos,
            [
                vec![],
                vec![1],
                vec![2],
                vec![1, 2],
                vec![3],
                vec![1, 3],
                vec![2, 3],
                vec![1, 2, 3],
            ]
        );
    }

    #[test]
    fn empty_input_has_one_empty_combination() {
        assert_eq!(all_combinations::<i32>(&[]), [Vec::<i32>::new()]);
    }

    #[test]
    fn permutations_cover_every_ordering() {
        let permutations = all_permutations(&[1, 2, 3]);
        assert_eq!(
            permutations,
            [
                vec![1, 2, 3],
                vec![1, 3, 2],
                vec![2, 1, 3],
                vec![2, 3, 1],
                vec![3, 1, 2],
                vec![3, 2, 1],
            ]
        );
    }

    #[test]
    fn empty_input_has_one_empty_permutation() {
        assert_eq!(all_permutations::<i32>(&[]), [Vec::<i32>::new()]);
    }

    #[test]
    fn visiting_respects_the_cap() {
        let mut seen = 0_usize;
        for_each_combination(&[1, 2, 3], Some(5), |_| seen = seen.saturating_add(1));
        assert_eq!(seen, 5);

        let mut orderings = Vec::new();
        for_each_permutation(&[1, 2], None, |p| orderings.push(p.to_vec()));
        assert_eq!(orderings, [vec![1, 2], vec![2, 1]]);
    }
}
