//! Error type for container removals.

use std::error::Error;
use std::fmt;

/// The value passed to [`Container::remove_all`] has no occurrence in the
/// container.
///
/// The container is left untouched when this error is returned.
///
/// [`Container::remove_all`]: crate::Container::remove_all
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NotFound<T> {
    /// The value that was looked for.
    pub value: T,
}

impl<T> NotFound<T> {
    pub(crate) fn new(value: T) -> Self {
        Self { value }
    }

    /// Take back the value that was not found.
    pub fn into_value(self) -> T {
        self.value
    }
}

impl<T: fmt::Debug> fmt::Display for NotFound<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "element {:?} not found", self.value)
    }
}

impl<T: fmt::Debug> Error for NotFound<T> {}
