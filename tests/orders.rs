use ordered_container::{
    AlternatingCursor, AscendingCursor, Container, DescendingCursor, InsertionCursor,
    MiddleOutCursor, NotFound, ReverseCursor,
};
use rstest::rstest;

fn container_of(values: &[i32]) -> Container<i32> {
    let mut container = Container::new();
    for value in values {
        container.insert(*value);
    }
    container
}

#[rstest]
#[case(&[1, 2, 3, 4, 5], &[1, 5, 2, 4, 3])]
#[case(&[5, 4, 3, 2, 1], &[1, 5, 2, 4, 3])]
#[case(&[7, 15, 6, 1, 2], &[1, 15, 2, 7, 6])]
#[case(&[2, 2, 1], &[1, 2, 2])]
fn alternating_order(#[case] inserted: &[i32], #[case] expected: &[i32]) {
    let container = container_of(inserted);
    let mut seen = Vec::new();
    let mut cursor = AlternatingCursor::begin(&container);
    while cursor != AlternatingCursor::end(&container) {
        seen.push(cursor.get());
        cursor.advance();
    }
    assert_eq!(seen, expected);
}

#[rstest]
#[case(&[5, 10, 15], &[10, 5, 15])]
#[case(&[10, 20, 30, 40], &[30, 20, 40, 10])]
#[case(&[7, 15, 6, 1, 2], &[6, 15, 1, 7, 2])]
#[case(&[3, 1], &[1, 3])]
fn middle_out_order(#[case] inserted: &[i32], #[case] expected: &[i32]) {
    let container = container_of(inserted);
    let mut seen = Vec::new();
    let mut cursor = MiddleOutCursor::begin(&container);
    while cursor != MiddleOutCursor::end(&container) {
        seen.push(cursor.get());
        cursor.advance();
    }
    assert_eq!(seen, expected);
}

#[test]
fn reverse_order() {
    let container = container_of(&[10, 20, 30]);
    let mut seen = Vec::new();
    let mut cursor = ReverseCursor::begin(&container);
    while cursor != ReverseCursor::end(&container) {
        seen.push(cursor.get());
        cursor.advance();
    }
    assert_eq!(seen, [30, 20, 10]);
}

#[test]
fn sorted_orders() {
    let container = container_of(&[7, 15, 6, 1, 2]);
    let ascending: Vec<_> = AscendingCursor::begin(&container).into_iter().copied().collect();
    let descending: Vec<_> = DescendingCursor::begin(&container).into_iter().copied().collect();
    assert_eq!(ascending, [1, 2, 6, 7, 15]);
    assert_eq!(descending, [15, 7, 6, 2, 1]);
}

#[test]
fn insertion_order_with_floats_as_keys() {
    // Ordered wrapper around an f64 bit pattern for a non-integer element.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
    struct Price(u64);

    let mut container = Container::new();
    for price in [1.5_f64, 3.3, 2.2] {
        container.insert(Price(price.to_bits()));
    }
    let seen: Vec<f64> = InsertionCursor::begin(&container)
        .into_iter()
        .map(|p| f64::from_bits(p.0))
        .collect();
    assert_eq!(seen, [1.5, 3.3, 2.2]);
    assert_eq!(
        container.iter_ascending().map(|p| f64::from_bits(p.0)).collect::<Vec<_>>(),
        [1.5, 2.2, 3.3]
    );
}

#[test]
fn empty_container() {
    let mut container = Container::<i32>::new();
    assert_eq!(container.len(), 0);
    assert_eq!(container.remove_all(&5), Err(NotFound { value: 5 }));
    assert_eq!(
        AscendingCursor::begin(&container),
        AscendingCursor::end(&container)
    );
    assert_eq!(container.iter_middle_out().next(), None);
}

#[test]
fn remove_all_twice_fails() {
    let mut container = container_of(&[3, 5, 3, 1]);
    assert_eq!(container.remove_all(&3), Ok(2));
    assert_eq!(container.len(), 2);
    let err = container.remove_all(&3).unwrap_err();
    assert_eq!(err.to_string(), "element 3 not found");
    assert_eq!(container.to_string(), "5 1");
}

#[test]
fn single_element_every_order() {
    let container = container_of(&[99]);
    assert_eq!(container.iter().collect::<Vec<_>>(), [&99]);
    assert_eq!(container.iter_ascending().collect::<Vec<_>>(), [&99]);
    assert_eq!(container.iter_descending().collect::<Vec<_>>(), [&99]);
    assert_eq!(container.iter_alternating().collect::<Vec<_>>(), [&99]);
    assert_eq!(container.iter_middle_out().collect::<Vec<_>>(), [&99]);
    assert_eq!(container.iter_reverse().collect::<Vec<_>>(), [&99]);

    let mut cursor = AscendingCursor::begin(&container);
    cursor.advance();
    assert_eq!(cursor, AscendingCursor::end(&container));
}
