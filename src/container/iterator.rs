use crate::container::cursor::{Cursor, Insertion, Traversal};
use crate::container::Container;
use std::fmt;
use std::iter::FusedIterator;

/// An iterator over one of the orders of a [`Container`].
///
/// It walks the half-open range from a [`Cursor`] position up to an end
/// index, so it is double-ended.
///
/// The iterator borrows the container immutably, exactly like the cursor it
/// is built from.
///
/// # Examples
///
/// ```compile_fail
/// use ordered_container::Container;
///
/// let mut container = Container::from_iter([1, 2, 3]);
/// let mut iter = container.iter_ascending();
///
/// // Won't compile, because container is already borrowed immutably.
/// container.insert(4);
/// println!("{:?}", iter.next());
/// ```
pub struct Iter<'a, T: 'a, O> {
    start: Cursor<'a, T, O>,
    end: usize,
}

impl<'a, T: Clone + 'a, O: Traversal> Iter<'a, T, O> {
    pub(crate) fn new(start: Cursor<'a, T, O>) -> Self {
        let end = start.len();
        Self { start, end }
    }
}

impl<'a, T: 'a, O> Clone for Iter<'a, T, O> {
    fn clone(&self) -> Self {
        Self {
            start: self.start,
            end: self.end,
        }
    }
}

impl<'a, T: fmt::Debug + Clone + 'a, O: Traversal> fmt::Debug for Iter<'a, T, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let remaining = &self.start.sequence()[self.start.index()..self.end];
        f.debug_tuple("Iter").field(&O::NAME).field(&remaining).finish()
    }
}

impl<'a, T: Clone + 'a, O: Traversal> Iterator for Iter<'a, T, O> {
    type Item = &'a T;

    /// Return the element at `start` and move `start` forward, or return
    /// `None` if `start..end` is already empty.
    fn next(&mut self) -> Option<Self::Item> {
        if self.start.index() == self.end {
            return None;
        }
        let current = self.start.current();
        self.start.advance();
        current
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.end - self.start.index();
        (len, Some(len))
    }

    fn last(mut self) -> Option<Self::Item> {
        self.next_back()
    }
}

impl<'a, T: Clone + 'a, O: Traversal> DoubleEndedIterator for Iter<'a, T, O> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.start.index() == self.end {
            return None;
        }
        self.end -= 1;
        self.start.sequence().get(self.end)
    }
}

impl<'a, T: Clone + 'a, O: Traversal> ExactSizeIterator for Iter<'a, T, O> {}

impl<'a, T: Clone + 'a, O: Traversal> FusedIterator for Iter<'a, T, O> {}

/// An owning iterator over the elements of a `Container`, in insertion order.
///
/// This struct is created by the `into_iter` method on [`Container`].
#[derive(Clone)]
pub struct IntoIter<T> {
    elements: std::vec::IntoIter<T>,
}

impl<T> IntoIter<T> {
    pub(crate) fn new(elements: Vec<T>) -> Self {
        Self {
            elements: elements.into_iter(),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for IntoIter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("IntoIter")
            .field(&self.elements.as_slice())
            .finish()
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.elements.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.elements.size_hint()
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.elements.next_back()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> IntoIterator for Container<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self.into_vec())
    }
}

impl<'a, T: Clone + 'a> IntoIterator for &'a Container<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T, Insertion>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use crate::container::Container;

    #[test]
    fn iter_both_ends() {
        let container = Container::from_iter([3, 1, 2]);
        let mut iter = container.iter_ascending();
        assert_eq!(iter.len(), 3);
        assert_eq!(iter.next(), Some(&1));
        assert_eq!(iter.next_back(), Some(&3));
        assert_eq!(iter.len(), 1);
        assert_eq!(iter.next(), Some(&2));
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next_back(), None);
        assert_eq!(iter.next(), None); // Fused
    }

    #[test]
    fn iter_last_and_rev() {
        let container = Container::from_iter([10, 20, 30]);
        assert_eq!(container.iter().last(), Some(&30));
        assert_eq!(
            container.iter_reverse().rev().copied().collect::<Vec<_>>(),
            [10, 20, 30]
        );
    }

    #[test]
    fn iter_from_cursor_position() {
        let container = Container::from_iter([1, 2, 3, 4, 5]);
        let mut cursor = container.begin::<crate::Alternating>();
        cursor.advance();
        cursor.advance();
        let rest: Vec<_> = cursor.into_iter().copied().collect();
        assert_eq!(rest, [2, 4, 3]);
    }

    #[test]
    fn iter_debug() {
        let container = Container::from_iter([2, 1]);
        let mut iter = container.iter_descending();
        iter.next();
        assert_eq!(format!("{:?}", iter), "Iter(\"descending\", [1])");
    }

    #[test]
    fn into_iter_owned() {
        let container = Container::from_iter(vec![String::from("x"), String::from("y")]);
        let mut iter = container.into_iter();
        assert_eq!(format!("{:?}", iter), "IntoIter([\"x\", \"y\"])");
        assert_eq!(iter.next_back().as_deref(), Some("y"));
        assert_eq!(iter.len(), 1);
        assert_eq!(iter.next().as_deref(), Some("x"));
        assert_eq!(iter.next(), None);
    }

    #[test]
    fn into_iter_borrowed() {
        let container = Container::from_iter([5, 6]);
        let mut sum = 0;
        for element in &container {
            sum += element;
        }
        assert_eq!(sum, 11);
    }
}
