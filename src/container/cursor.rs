use crate::container::iterator::Iter;
use crate::container::Container;
use std::fmt;
use std::marker::PhantomData;
use std::ptr;

/// Selects which sequence of a [`Container`] a [`Cursor`] walks over.
///
/// The implementors are zero-sized tags. Each one picks a slice out of the
/// container; the cursor only keeps a position inside it.
pub trait Traversal {
    /// Name of the order, used in diagnostics.
    const NAME: &'static str;

    /// The sequence of `container` walked by this order.
    fn sequence<T: Clone>(container: &Container<T>) -> &[T];
}

/// Insertion order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Insertion;

/// Non-decreasing order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Ascending;

/// Non-increasing order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Descending;

/// Min, max, second min, second max, ..., ending with the middle element for
/// odd lengths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Alternating;

/// Centre element first, then alternately left and right neighbours moving
/// outwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct MiddleOut;

/// Reverse insertion order.
///
/// The reversed sequence is a snapshot built when the first reverse cursor
/// after a mutation is created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Reverse;

impl Traversal for Insertion {
    const NAME: &'static str = "insertion";
    fn sequence<T: Clone>(container: &Container<T>) -> &[T] {
        container.as_slice()
    }
}

impl Traversal for Ascending {
    const NAME: &'static str = "ascending";
    fn sequence<T: Clone>(container: &Container<T>) -> &[T] {
        container.ascending()
    }
}

impl Traversal for Descending {
    const NAME: &'static str = "descending";
    fn sequence<T: Clone>(container: &Container<T>) -> &[T] {
        container.descending()
    }
}

impl Traversal for Alternating {
    const NAME: &'static str = "alternating";
    fn sequence<T: Clone>(container: &Container<T>) -> &[T] {
        container.alternating()
    }
}

impl Traversal for MiddleOut {
    const NAME: &'static str = "middle-out";
    fn sequence<T: Clone>(container: &Container<T>) -> &[T] {
        container.middle_out()
    }
}

impl Traversal for Reverse {
    const NAME: &'static str = "reverse";
    fn sequence<T: Clone>(container: &Container<T>) -> &[T] {
        container.reversed()
    }
}

/// A cursor over one of the orders of a [`Container`].
///
/// In a sequence with length *n*, there are *n* + 1 valid locations for the
/// cursor, indexed by 0, 1, ..., *n*. The location *n* is the end sentinel;
/// it compares equal to [`Cursor::end`] and holds no element.
///
/// The cursor borrows the container, so the container cannot be mutated while
/// the cursor is alive.
///
/// # Examples
///
/// ```
/// use ordered_container::{AscendingCursor, Container};
///
/// let container = Container::from_iter([3, 1, 2]);
///
/// let mut seen = Vec::new();
/// let mut cursor = AscendingCursor::begin(&container);
/// while cursor != AscendingCursor::end(&container) {
///     seen.push(cursor.get());
///     cursor.advance();
/// }
/// assert_eq!(seen, vec![1, 2, 3]);
/// ```
///
/// A mutation while a cursor is alive is rejected at compile time:
///
/// ```compile_fail
/// use ordered_container::{Container, InsertionCursor};
///
/// let mut container = Container::from_iter([1, 2, 3]);
/// let cursor = InsertionCursor::begin(&container);
///
/// // Won't compile, because container is already borrowed immutably.
/// container.insert(4);
/// println!("{:?}", cursor.current());
/// ```
pub struct Cursor<'a, T: 'a, O> {
    index: usize,
    container: &'a Container<T>,
    _order: PhantomData<O>,
}

/// Cursor in insertion order.
pub type InsertionCursor<'a, T> = Cursor<'a, T, Insertion>;
/// Cursor in non-decreasing order.
pub type AscendingCursor<'a, T> = Cursor<'a, T, Ascending>;
/// Cursor in non-increasing order.
pub type DescendingCursor<'a, T> = Cursor<'a, T, Descending>;
/// Cursor in alternating min/max order.
pub type AlternatingCursor<'a, T> = Cursor<'a, T, Alternating>;
/// Cursor in middle-out order.
pub type MiddleOutCursor<'a, T> = Cursor<'a, T, MiddleOut>;
/// Cursor in reverse insertion order.
pub type ReverseCursor<'a, T> = Cursor<'a, T, Reverse>;

impl<'a, T: Clone + 'a, O: Traversal> Cursor<'a, T, O> {
    fn new(container: &'a Container<T>, index: usize) -> Self {
        Self {
            index,
            container,
            _order: PhantomData,
        }
    }

    pub(crate) fn sequence(&self) -> &'a [T] {
        O::sequence(self.container)
    }

    /// Create a cursor at the first element of the order, or at the end if
    /// the container is empty.
    pub fn begin(container: &'a Container<T>) -> Self {
        Self::new(container, 0)
    }

    /// Create a cursor at the end sentinel of the order.
    pub fn end(container: &'a Container<T>) -> Self {
        Self::new(container, O::sequence(container).len())
    }

    /// The position of the cursor, in `0..=len`.
    pub fn index(&self) -> usize {
        self.index
    }

    /// The length of the walked sequence.
    pub fn len(&self) -> usize {
        self.sequence().len()
    }

    /// Whether the walked sequence is empty.
    pub fn is_empty(&self) -> bool {
        self.sequence().is_empty()
    }

    /// Whether the cursor sits at the end sentinel.
    pub fn is_end(&self) -> bool {
        self.index >= self.len()
    }

    /// The element at the cursor, or `None` at the end.
    pub fn current(&self) -> Option<&'a T> {
        self.sequence().get(self.index)
    }

    /// A copy of the element at the cursor.
    ///
    /// # Panics
    ///
    /// Panics if the cursor is at the end.
    pub fn get(&self) -> T {
        match self.current() {
            Some(element) => element.clone(),
            None => panic!(
                "dereferenced {} cursor at end (index {})",
                O::NAME,
                self.index
            ),
        }
    }

    /// Move the cursor to the next position.
    ///
    /// # Panics
    ///
    /// Panics if the cursor is already at the end.
    pub fn advance(&mut self) {
        assert!(
            !self.is_end(),
            "advanced {} cursor past end (index {})",
            O::NAME,
            self.index
        );
        self.index += 1;
    }
}

impl<'a, T: 'a, O> Clone for Cursor<'a, T, O> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, T: 'a, O> Copy for Cursor<'a, T, O> {}

/// Compare cursors by their positions.
///
/// Only cursors over the same container and at the same position are
/// considered equal.
///
/// # Examples
/// ```
/// use ordered_container::{Container, InsertionCursor};
///
/// let container = Container::from_iter([1, 2, 3]);
/// let cursor1 = InsertionCursor::begin(&container);
/// let mut cursor2 = cursor1;
/// assert_eq!(cursor1, cursor2);
///
/// cursor2.advance();
/// assert_ne!(cursor1, cursor2);
///
/// let another = container.clone();
/// assert_ne!(cursor1, InsertionCursor::begin(&another));
/// ```
impl<'a, T: 'a, O> PartialEq for Cursor<'a, T, O> {
    fn eq(&self, other: &Self) -> bool {
        ptr::eq(self.container, other.container) && self.index == other.index
    }
}

impl<'a, T: 'a, O> Eq for Cursor<'a, T, O> {}

impl<'a, T: fmt::Debug + Clone + 'a, O: Traversal> fmt::Debug for Cursor<'a, T, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cursor")
            .field("order", &O::NAME)
            .field("index", &self.index)
            .field("current", &self.current())
            .finish()
    }
}

impl<'a, T: Clone + 'a, O: Traversal> IntoIterator for Cursor<'a, T, O> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T, O>;

    /// Iterate from the cursor position to the end of its order.
    fn into_iter(self) -> Self::IntoIter {
        Iter::new(self)
    }
}
