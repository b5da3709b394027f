//! Computation of the derived orders kept by a [`Container`].
//!
//! [`Container`]: crate::Container

/// The derived sequences of a container, recomputed from scratch after each
/// mutation.
#[derive(Clone, Debug)]
pub(crate) struct DerivedOrders<T> {
    pub(crate) ascending: Vec<T>,
    pub(crate) descending: Vec<T>,
    pub(crate) alternating: Vec<T>,
    pub(crate) middle_out: Vec<T>,
}

impl<T> DerivedOrders<T> {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            ascending: Vec::with_capacity(capacity),
            descending: Vec::with_capacity(capacity),
            alternating: Vec::with_capacity(capacity),
            middle_out: Vec::with_capacity(capacity),
        }
    }

    pub(crate) fn clear(&mut self) {
        self.ascending.clear();
        self.descending.clear();
        self.alternating.clear();
        self.middle_out.clear();
    }
}

impl<T: Ord + Clone> DerivedOrders<T> {
    pub(crate) fn compute(elements: &[T]) -> Self {
        let mut ascending = elements.to_vec();
        ascending.sort();
        let descending = ascending.iter().rev().cloned().collect();
        let alternating = alternating_extremes(&ascending);
        let middle_out = middle_out(elements);
        Self {
            ascending,
            descending,
            alternating,
            middle_out,
        }
    }
}

/// Reorder a sorted slice as min, max, second min, second max, ...
///
/// For an odd length, the middle element comes last.
///
/// # Complexity
///
/// This operation should compute in *O*(*n*) time.
pub(crate) fn alternating_extremes<T: Clone>(sorted: &[T]) -> Vec<T> {
    let mut result = Vec::with_capacity(sorted.len());
    if sorted.is_empty() {
        return result;
    }
    let (mut i, mut j) = (0, sorted.len() - 1);
    while i <= j {
        if i == j {
            result.push(sorted[i].clone());
            break;
        }
        result.push(sorted[i].clone());
        result.push(sorted[j].clone());
        i += 1;
        j -= 1;
    }
    result
}

/// Reorder a slice starting from its centre element `n / 2`, then alternately
/// its left and right neighbours moving outwards. Once a side is exhausted
/// the other side is drained.
///
/// Positions are taken from the slice as given, no sorting is involved.
pub(crate) fn middle_out<T: Clone>(elements: &[T]) -> Vec<T> {
    let mut result = Vec::with_capacity(elements.len());
    if elements.is_empty() {
        return result;
    }
    let mid = elements.len() / 2;
    result.push(elements[mid].clone());
    // `left` counts the elements still pending on the left side.
    let mut left = mid;
    let mut right = mid + 1;
    while left > 0 || right < elements.len() {
        if left > 0 {
            left -= 1;
            result.push(elements[left].clone());
        }
        if right < elements.len() {
            result.push(elements[right].clone());
            right += 1;
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::{alternating_extremes, middle_out, DerivedOrders};
    use rstest::rstest;

    #[rstest]
    #[case(&[], &[])]
    #[case(&[7], &[7])]
    #[case(&[1, 2], &[1, 2])]
    #[case(&[1, 2, 3, 4], &[1, 4, 2, 3])]
    #[case(&[1, 2, 3, 4, 5], &[1, 5, 2, 4, 3])]
    #[case(&[1, 1, 2, 2, 2], &[1, 2, 1, 2, 2])]
    fn alternating_from_sorted(#[case] sorted: &[i32], #[case] expected: &[i32]) {
        assert_eq!(alternating_extremes(sorted), expected);
    }

    #[rstest]
    #[case(&[], &[])]
    #[case(&[1], &[1])]
    #[case(&[1, 2], &[2, 1])]
    #[case(&[5, 10, 15], &[10, 5, 15])]
    #[case(&[10, 20, 30, 40], &[30, 20, 40, 10])]
    #[case(&[1, 2, 3, 4, 5], &[3, 2, 4, 1, 5])]
    #[case(&[1, 2, 3, 4, 5, 6], &[4, 3, 5, 2, 6, 1])]
    fn middle_out_keeps_positions(#[case] elements: &[i32], #[case] expected: &[i32]) {
        assert_eq!(middle_out(elements), expected);
    }

    #[test]
    fn derived_orders_compute() {
        let orders = DerivedOrders::compute(&[3, 1, 4, 1, 5]);
        assert_eq!(orders.ascending, [1, 1, 3, 4, 5]);
        assert_eq!(orders.descending, [5, 4, 3, 1, 1]);
        assert_eq!(orders.alternating, [1, 5, 1, 4, 3]);
        assert_eq!(orders.middle_out, [4, 1, 1, 3, 5]);
    }

    #[test]
    fn derived_orders_empty() {
        let orders = DerivedOrders::<u8>::compute(&[]);
        assert!(orders.ascending.is_empty());
        assert!(orders.descending.is_empty());
        assert!(orders.alternating.is_empty());
        assert!(orders.middle_out.is_empty());
    }
}
