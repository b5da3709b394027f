use std::cell::OnceCell;
use std::fmt::{self, Debug, Display, Formatter};

use crate::container::cursor::{
    Alternating, Ascending, Cursor, Descending, Insertion, MiddleOut, Reverse, Traversal,
};
use crate::container::error::NotFound;
use crate::container::iterator::Iter;
use crate::container::orders::DerivedOrders;

pub mod cursor;
pub mod error;
pub mod iterator;

mod algorithms;
mod orders;

/// The `Container` holds comparable elements in insertion order, and keeps a
/// set of derived orders of them up to date.
///
/// The `Container` contains:
/// - the elements in insertion order, which is the only source of truth;
/// - the ascending and descending orders of the elements;
/// - the alternating order: min, max, second min, second max, ...;
/// - the middle-out order: the centre element (by insertion position), then
///   alternately its left and right neighbours moving outwards;
/// - a reversed snapshot of the insertion order, built only when a reverse
///   traversal starts.
///
/// Every mutation recomputes the four eager orders from scratch and drops the
/// reversed snapshot.
///
/// # Examples
///
/// ```
/// use ordered_container::Container;
///
/// let mut container = Container::new();
/// for value in [7, 15, 6, 1, 2] {
///     container.insert(value);
/// }
///
/// assert_eq!(container.ascending(), &[1, 2, 6, 7, 15]);
/// assert_eq!(container.alternating(), &[1, 15, 2, 7, 6]);
/// assert_eq!(container.middle_out(), &[6, 15, 1, 7, 2]);
/// assert_eq!(container.to_string(), "7 15 6 1 2");
/// ```
#[derive(Clone)]
pub struct Container<T> {
    elements: Vec<T>,
    orders: DerivedOrders<T>,
    reversed: OnceCell<Vec<T>>,
}

impl<T> Container<T> {
    /// Create an empty container.
    pub fn new() -> Self {
        Self {
            elements: Vec::new(),
            orders: DerivedOrders::with_capacity(0),
            reversed: OnceCell::new(),
        }
    }

    /// Create an empty container with room for `capacity` elements in each
    /// of its orders.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            elements: Vec::with_capacity(capacity),
            orders: DerivedOrders::with_capacity(capacity),
            reversed: OnceCell::new(),
        }
    }

    /// The number of elements, counting duplicates.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// The elements in insertion order.
    pub fn as_slice(&self) -> &[T] {
        &self.elements
    }

    /// The elements in non-decreasing order.
    pub fn ascending(&self) -> &[T] {
        &self.orders.ascending
    }

    /// The elements in non-increasing order.
    pub fn descending(&self) -> &[T] {
        &self.orders.descending
    }

    /// The elements as min, max, second min, second max, ...
    pub fn alternating(&self) -> &[T] {
        &self.orders.alternating
    }

    /// The elements from the centre outwards, by insertion position.
    pub fn middle_out(&self) -> &[T] {
        &self.orders.middle_out
    }

    /// Consume the container, returning its elements in insertion order.
    pub fn into_vec(self) -> Vec<T> {
        self.elements
    }

    /// Remove all elements.
    pub fn clear(&mut self) {
        self.elements.clear();
        self.orders.clear();
        self.reversed.take();
    }
}

impl<T: Clone> Container<T> {
    /// The elements in reverse insertion order.
    ///
    /// The reversed sequence is built on the first call after a mutation and
    /// reused until the next mutation.
    pub fn reversed(&self) -> &[T] {
        self.reversed.get_or_init(|| {
            trace!("materialising reversed snapshot of {} elements", self.len());
            self.elements.iter().rev().cloned().collect()
        })
    }

    /// Create a cursor at the beginning of the order `O`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_container::{Container, Reverse};
    ///
    /// let container = Container::from_iter([10, 20, 30]);
    /// let mut cursor = container.begin::<Reverse>();
    /// assert_eq!(cursor.get(), 30);
    /// cursor.advance();
    /// assert_eq!(cursor.get(), 20);
    /// ```
    pub fn begin<O: Traversal>(&self) -> Cursor<'_, T, O> {
        Cursor::begin(self)
    }

    /// Create a cursor at the end sentinel of the order `O`.
    pub fn end<O: Traversal>(&self) -> Cursor<'_, T, O> {
        Cursor::end(self)
    }

    /// Iterate in insertion order.
    pub fn iter(&self) -> Iter<'_, T, Insertion> {
        Iter::new(self.begin())
    }

    /// Iterate in non-decreasing order.
    pub fn iter_ascending(&self) -> Iter<'_, T, Ascending> {
        Iter::new(self.begin())
    }

    /// Iterate in non-increasing order.
    pub fn iter_descending(&self) -> Iter<'_, T, Descending> {
        Iter::new(self.begin())
    }

    /// Iterate as min, max, second min, second max, ...
    pub fn iter_alternating(&self) -> Iter<'_, T, Alternating> {
        Iter::new(self.begin())
    }

    /// Iterate from the centre outwards.
    pub fn iter_middle_out(&self) -> Iter<'_, T, MiddleOut> {
        Iter::new(self.begin())
    }

    /// Iterate in reverse insertion order.
    pub fn iter_reverse(&self) -> Iter<'_, T, Reverse> {
        Iter::new(self.begin())
    }
}

impl<T: Ord + Clone> Container<T> {
    /// Append an element, then recompute every derived order.
    ///
    /// This operation should compute in *O*(*n* * log(*n*)) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_container::Container;
    ///
    /// let mut container = Container::new();
    /// container.insert(3);
    /// container.insert(1);
    ///
    /// assert_eq!(container.len(), 2);
    /// assert_eq!(container.as_slice(), &[3, 1]);
    /// assert_eq!(container.descending(), &[3, 1]);
    /// ```
    pub fn insert(&mut self, value: T) {
        trace!("inserting element at position {}", self.len());
        self.elements.push(value);
        self.recompute();
    }

    /// Remove every occurrence of `value`, then recompute every derived order.
    ///
    /// Returns the number of removed occurrences. If there is none, the
    /// container is left unchanged and the value is handed back in a
    /// [`NotFound`] error.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_container::Container;
    ///
    /// let mut container = Container::from_iter([1, 3, 5, 3, 1]);
    ///
    /// assert_eq!(container.remove_all(&3), Ok(2));
    /// assert_eq!(container.as_slice(), &[1, 5, 1]);
    ///
    /// let err = container.remove_all(&3).unwrap_err();
    /// assert_eq!(err.value, 3);
    /// assert_eq!(container.len(), 3);
    /// ```
    pub fn remove_all(&mut self, value: &T) -> Result<usize, NotFound<T>> {
        let before = self.elements.len();
        if !self.contains(value) {
            debug!("remove_all: no occurrence among {} elements", before);
            return Err(NotFound::new(value.clone()));
        }
        self.elements.retain(|element| element != value);
        let removed = before - self.elements.len();
        debug!("remove_all: removed {} occurrences", removed);
        self.recompute();
        Ok(removed)
    }

    pub(crate) fn recompute(&mut self) {
        self.orders = DerivedOrders::compute(&self.elements);
        self.reversed.take();
        debug!("recomputed derived orders of {} elements", self.len());
    }
}

impl<T> Default for Container<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Debug> Debug for Container<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.elements.iter()).finish()
    }
}

/// Write the elements in insertion order, separated by single spaces.
impl<T: Display> Display for Container<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let mut elements = self.elements.iter();
        if let Some(first) = elements.next() {
            write!(f, "{}", first)?;
            for element in elements {
                write!(f, " {}", element)?;
            }
        }
        Ok(())
    }
}
