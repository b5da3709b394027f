//! This crate provides a container of comparable elements that can be
//! traversed in several orders.
//!
//! The [`Container`] keeps its elements in insertion order and, after every
//! mutation, recomputes the derived orders from scratch. Reading an order is
//! therefore free, while inserting or removing takes *O*(*n* * log(*n*)) time.
//!
//! Here is a quick example showing how the container works.
//!
//! ```
//! use ordered_container::Container;
//!
//! let mut container = Container::new();
//! container.insert(7);
//! container.insert(15);
//! container.insert(6);
//! container.insert(1);
//! container.insert(2);
//!
//! assert_eq!(container.len(), 5);
//! assert_eq!(container.to_string(), "7 15 6 1 2");
//!
//! assert_eq!(Vec::from_iter(container.iter_ascending().copied()), vec![1, 2, 6, 7, 15]);
//! assert_eq!(Vec::from_iter(container.iter_descending().copied()), vec![15, 7, 6, 2, 1]);
//! assert_eq!(Vec::from_iter(container.iter_alternating().copied()), vec![1, 15, 2, 7, 6]);
//! assert_eq!(Vec::from_iter(container.iter_middle_out().copied()), vec![6, 15, 1, 7, 2]);
//! assert_eq!(Vec::from_iter(container.iter_reverse().copied()), vec![2, 1, 6, 15, 7]);
//!
//! // Removal always takes out every occurrence.
//! container.insert(6);
//! assert_eq!(container.remove_all(&6), Ok(2));
//! assert!(container.remove_all(&6).is_err());
//! ```
//!
//! # Orders
//!
//! | Order         | Tag             | Sequence                                        |
//! |---------------|-----------------|-------------------------------------------------|
//! | insertion     | [`Insertion`]   | as inserted                                     |
//! | ascending     | [`Ascending`]   | non-decreasing                                  |
//! | descending    | [`Descending`]  | non-increasing                                  |
//! | alternating   | [`Alternating`] | min, max, second min, second max, ...           |
//! | middle-out    | [`MiddleOut`]   | centre, then left and right neighbours in turn  |
//! | reverse       | [`Reverse`]     | reverse insertion, built when traversal starts  |
//!
//! The middle-out order works on insertion positions, not on values. With
//! *n* elements it starts at index *n* / 2, then takes one element on the
//! left and one on the right, until one side runs out; the other side is
//! then drained.
//!
//! ```
//! use ordered_container::Container;
//!
//! let container = Container::from_iter([10, 20, 30, 40]);
//! assert_eq!(container.middle_out(), &[30, 20, 40, 10]);
//! ```
//!
//! # Cursors
//!
//! A [`Cursor`] walks one order with the classic "begin, end, dereference,
//! advance" loop. There are *n* + 1 valid locations for a cursor, where *n*
//! is the end sentinel.
//!
//! ```
//! use ordered_container::{Container, MiddleOutCursor};
//!
//! let container = Container::from_iter([5, 10, 15]);
//! let mut seen = Vec::new();
//! let mut cursor = MiddleOutCursor::begin(&container);
//! while cursor != MiddleOutCursor::end(&container) {
//!     seen.push(cursor.get());
//!     cursor.advance();
//! }
//! assert_eq!(seen, vec![10, 5, 15]);
//! ```
//!
//! Cursors and iterators borrow the container, so it cannot be mutated while
//! any of them is alive. Dereferencing or advancing a cursor at the end
//! panics.
//!
//! # Logging
//!
//! With the default `log` feature, insertions, removals and recomputations are
//! reported through the [`log`](https://docs.rs/log) facade at the `debug` and
//! `trace` levels.

macro_rules! debug {
    ($($arg:tt)+) => {
        #[cfg(feature = "log")]
        {
            log::debug!($($arg)+);
        }
    };
}

macro_rules! trace {
    ($($arg:tt)+) => {
        #[cfg(feature = "log")]
        {
            log::trace!($($arg)+);
        }
    };
}

#[doc(inline)]
pub use container::cursor::{
    AlternatingCursor, Alternating, Ascending, AscendingCursor, Cursor, Descending,
    DescendingCursor, Insertion, InsertionCursor, MiddleOut, MiddleOutCursor, Reverse,
    ReverseCursor, Traversal,
};
#[doc(inline)]
pub use container::error::NotFound;
#[doc(inline)]
pub use container::iterator::{IntoIter, Iter};
#[doc(inline)]
pub use container::Container;

pub mod container;
