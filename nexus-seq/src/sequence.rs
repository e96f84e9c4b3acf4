//! The positional sequence contract shared by every container.
//!
//! [`GrowableArray`](crate::GrowableArray),
//! [`SinglyLinkedList`](crate::SinglyLinkedList) and
//! [`DoublyLinkedList`](crate::DoublyLinkedList) differ in cost model but
//! agree on semantics: the same operations applied in the same order yield
//! the same elements in the same order.
//!
//! ```
//! use nexus_seq::{DoublyLinkedList, GrowableArray, Sequence, SinglyLinkedList};
//!
//! fn fill<S: Sequence<u32>>(seq: &mut S) {
//!     for i in 0..4 {
//!         seq.push_back(i);
//!     }
//!     seq.erase(1).unwrap();
//!     seq.insert(0, 9).unwrap();
//! }
//!
//! let mut array = GrowableArray::new();
//! let mut singly = SinglyLinkedList::new();
//! let mut doubly = DoublyLinkedList::new();
//! fill(&mut array);
//! fill(&mut singly);
//! fill(&mut doubly);
//!
//! let expected = vec![9, 0, 2, 3];
//! assert_eq!(array.iter().copied().collect::<Vec<_>>(), expected);
//! assert_eq!(singly.iter().copied().collect::<Vec<_>>(), expected);
//! assert_eq!(doubly.iter().copied().collect::<Vec<_>>(), expected);
//! ```

use crate::OutOfRange;

/// An ordered, index-addressable sequence of `T`.
///
/// Indices are 0-based. A failed positional call returns [`OutOfRange`]
/// and does not modify the sequence.
pub trait Sequence<T> {
    /// Front-to-back traversal over the elements.
    type Iter<'a>: Iterator<Item = &'a T>
    where
        Self: 'a,
        T: 'a;

    /// Appends `value` after the last element.
    fn push_back(&mut self, value: T);

    /// Inserts `value` so that it ends up at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`OutOfRange`] if `index > len`.
    fn insert(&mut self, index: usize, value: T) -> Result<(), OutOfRange>;

    /// Removes and returns the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`OutOfRange`] if `index >= len`.
    fn erase(&mut self, index: usize) -> Result<T, OutOfRange>;

    /// Returns the number of elements.
    fn len(&self) -> usize;

    /// Returns `true` if the sequence holds no elements.
    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns a restartable front-to-back traversal.
    fn iter(&self) -> Self::Iter<'_>;
}

/// Writes `items` separated by `", "`.
pub(crate) fn write_joined<'a, T, I>(f: &mut core::fmt::Formatter<'_>, items: I) -> core::fmt::Result
where
    T: core::fmt::Display + 'a,
    I: IntoIterator<Item = &'a T>,
{
    let mut items = items.into_iter();
    if let Some(first) = items.next() {
        write!(f, "{first}")?;
        for item in items {
            write!(f, ", {item}")?;
        }
    }
    Ok(())
}
