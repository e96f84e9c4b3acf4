//! Contiguous growable array with an explicit 1.5x growth policy.
//!
//! Elements occupy the leading `len` slots of a single owned buffer. When an
//! insertion finds the buffer full, capacity grows to
//! `max(old + 1, old + old / 2)`:
//!
//! ```text
//! 0 -> 1 -> 2 -> 3 -> 4 -> 6 -> 9 -> 13 -> 19 -> ...
//! ```
//!
//! Capacity never shrinks. Erasing leaves the freed slot reserved.
//!
//! # Example
//!
//! ```
//! use nexus_seq::GrowableArray;
//!
//! let mut array: GrowableArray<u64> = GrowableArray::new();
//! for i in 0..10 {
//!     array.push_back(i);
//! }
//! assert_eq!(array.len(), 10);
//! assert_eq!(array.capacity(), 13);
//!
//! assert_eq!(array.erase(2), Ok(2));
//! array.insert(0, 10).unwrap();
//! *array.at_mut(1).unwrap() = 99;
//!
//! assert_eq!(array.to_string(), "10, 99, 1, 3, 4, 5, 6, 7, 8, 9");
//! assert!(array.at(10).is_err());
//! ```

use core::fmt;

use crate::sequence::write_joined;
use crate::{OutOfRange, Sequence};

/// A contiguous, resizable, index-addressable sequence.
///
/// Backed by a `Vec<T>` whose reservations are driven by this type's own
/// capacity bookkeeping, so growth follows the 1.5x policy regardless of
/// the standard library's default.
pub struct GrowableArray<T> {
    buf: Vec<T>,
    /// Logical capacity. `buf` always has room for at least this many.
    capacity: usize,
}

impl<T> Default for GrowableArray<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> GrowableArray<T> {
    /// Creates an empty array. Does not allocate.
    #[inline]
    pub const fn new() -> Self {
        Self {
            buf: Vec::new(),
            capacity: 0,
        }
    }

    /// Creates an empty array with room for `capacity` elements.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buf: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Returns the number of elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    /// Returns `true` if the array holds no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Returns the number of slots reserved before the next growth.
    #[inline]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// Appends `value` at index `len`, growing if full.
    #[inline]
    pub fn push_back(&mut self, value: T) {
        self.reserve_one();
        self.buf.push(value);
    }

    /// Inserts `value` at `index`, shifting `[index, len)` one slot right.
    ///
    /// # Errors
    ///
    /// Returns [`OutOfRange`] if `index > len`. The value is dropped.
    pub fn insert(&mut self, index: usize, value: T) -> Result<(), OutOfRange> {
        OutOfRange::check_insert(index, self.len())?;
        self.reserve_one();
        self.buf.insert(index, value);
        Ok(())
    }

    /// Removes and returns the element at `index`, shifting `(index, len)`
    /// one slot left.
    ///
    /// # Errors
    ///
    /// Returns [`OutOfRange`] if `index >= len`.
    pub fn erase(&mut self, index: usize) -> Result<T, OutOfRange> {
        OutOfRange::check_element(index, self.len())?;
        Ok(self.buf.remove(index))
    }

    /// Returns a reference to the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`OutOfRange`] if `index >= len`.
    #[inline]
    pub fn at(&self, index: usize) -> Result<&T, OutOfRange> {
        OutOfRange::check_element(index, self.len())?;
        Ok(&self.buf[index])
    }

    /// Returns a mutable reference to the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`OutOfRange`] if `index >= len`.
    #[inline]
    pub fn at_mut(&mut self, index: usize) -> Result<&mut T, OutOfRange> {
        OutOfRange::check_element(index, self.len())?;
        Ok(&mut self.buf[index])
    }

    /// Returns an iterator over the elements in index order.
    #[inline]
    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.buf.iter()
    }

    /// Removes all elements. Capacity is kept.
    #[inline]
    pub fn clear(&mut self) {
        self.buf.clear();
    }

    /// Grows once if the next insertion would exceed capacity.
    #[inline]
    fn reserve_one(&mut self) {
        if self.buf.len() == self.capacity {
            self.grow();
        }
    }

    #[cold]
    fn grow(&mut self) {
        let old = self.capacity;
        let new = grown_capacity(old);
        self.buf.reserve_exact(new - self.buf.len());
        self.capacity = new;
        tracing::trace!(old_capacity = old, new_capacity = new, "growing array buffer");
    }
}

/// Next capacity under the 1.5x policy. Always strictly larger than `old`.
#[inline]
const fn grown_capacity(old: usize) -> usize {
    let scaled = old.saturating_add(old / 2);
    let bumped = old.saturating_add(1);
    if scaled > bumped { scaled } else { bumped }
}

impl<T> core::ops::Index<usize> for GrowableArray<T> {
    type Output = T;

    /// # Panics
    ///
    /// Panics if `index >= len`. Use [`GrowableArray::at`] for a checked read.
    fn index(&self, index: usize) -> &T {
        match self.at(index) {
            Ok(value) => value,
            Err(err) => panic!("{err}"),
        }
    }
}

impl<T> core::ops::IndexMut<usize> for GrowableArray<T> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        match self.at_mut(index) {
            Ok(value) => value,
            Err(err) => panic!("{err}"),
        }
    }
}

impl<T> Sequence<T> for GrowableArray<T> {
    type Iter<'a>
        = core::slice::Iter<'a, T>
    where
        Self: 'a,
        T: 'a;

    #[inline]
    fn push_back(&mut self, value: T) {
        GrowableArray::push_back(self, value);
    }

    #[inline]
    fn insert(&mut self, index: usize, value: T) -> Result<(), OutOfRange> {
        GrowableArray::insert(self, index, value)
    }

    #[inline]
    fn erase(&mut self, index: usize) -> Result<T, OutOfRange> {
        GrowableArray::erase(self, index)
    }

    #[inline]
    fn len(&self) -> usize {
        GrowableArray::len(self)
    }

    #[inline]
    fn iter(&self) -> Self::Iter<'_> {
        GrowableArray::iter(self)
    }
}

impl<T: Clone> Clone for GrowableArray<T> {
    fn clone(&self) -> Self {
        let mut buf = Vec::with_capacity(self.capacity);
        buf.extend_from_slice(&self.buf);
        Self {
            buf,
            capacity: self.capacity,
        }
    }
}

impl<T: PartialEq> PartialEq for GrowableArray<T> {
    fn eq(&self, other: &Self) -> bool {
        self.buf == other.buf
    }
}

impl<T: Eq> Eq for GrowableArray<T> {}

impl<T: fmt::Debug> fmt::Debug for GrowableArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for GrowableArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_joined(f, self.iter())
    }
}

impl<T> Extend<T> for GrowableArray<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push_back(value);
        }
    }
}

impl<T> FromIterator<T> for GrowableArray<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut array = Self::new();
        array.extend(iter);
        array
    }
}

impl<'a, T> IntoIterator for &'a GrowableArray<T> {
    type Item = &'a T;
    type IntoIter = core::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
