use crate::container::Container;
use std::hash::{Hash, Hasher};

/// Containers are equal when their insertion orders are equal.
impl<T: PartialEq> PartialEq for Container<T> {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Eq> Eq for Container<T> {}

impl<T: Hash> Hash for Container<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_slice().hash(state);
    }
}

impl<T: Ord + Clone> FromIterator<T> for Container<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut container = Self::new();
        container.extend(iter);
        container
    }
}

/// Append every element of the iterator, then recompute the derived orders
/// once.
impl<T: Ord + Clone> Extend<T> for Container<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let before = self.len();
        self.elements.extend(iter);
        if self.len() != before {
            trace!("extended by {} elements", self.len() - before);
            self.recompute();
        }
    }
}

impl<'a, T: Ord + Copy + 'a> Extend<&'a T> for Container<T> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().copied());
    }
}

impl<T> Container<T> {
    /// Returns `true` if the `Container` contains an element equal to the
    /// given value.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_container::Container;
    ///
    /// let container = Container::from_iter([0, 1, 2]);
    ///
    /// assert_eq!(container.contains(&0), true);
    /// assert_eq!(container.contains(&10), false);
    /// ```
    pub fn contains(&self, x: &T) -> bool
    where
        T: PartialEq<T>,
    {
        self.as_slice().contains(x)
    }

    /// Count the elements equal to the given value.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_container::Container;
    ///
    /// let container = Container::from_iter(["a", "b", "a"]);
    ///
    /// assert_eq!(container.count(&"a"), 2);
    /// assert_eq!(container.count(&"c"), 0);
    /// ```
    pub fn count(&self, x: &T) -> usize
    where
        T: PartialEq<T>,
    {
        self.as_slice().iter().filter(|e| *e == x).count()
    }
}
