//! Forward-only linked list with arena node storage.
//!
//! Nodes live in a [`slab::Slab`] owned by the list; each node records the
//! slab key of its successor. Only `head` is tracked, so `push_back` walks
//! the whole chain (O(n)). Positional insert and erase walk to the
//! predecessor of the target position.
//!
//! # Example
//!
//! ```
//! use nexus_seq::SinglyLinkedList;
//!
//! let mut list: SinglyLinkedList<u64> = SinglyLinkedList::new();
//! list.push_back(1);
//! list.push_back(3);
//! list.insert(1, 2).unwrap();
//! list.insert(0, 0).unwrap();
//!
//! assert_eq!(list.to_string(), "0, 1, 2, 3");
//! assert_eq!(list.erase(0), Ok(0));
//! assert_eq!(list.len(), 3);
//! assert!(list.erase(3).is_err());
//! ```

use core::fmt;
use core::iter::FusedIterator;

use slab::Slab;

use crate::link::Link;
use crate::sequence::write_joined;
use crate::{OutOfRange, Sequence};

#[derive(Debug, Clone)]
struct Node<T> {
    value: T,
    next: Link,
}

impl<T> Node<T> {
    #[inline]
    fn new(value: T) -> Self {
        Self {
            value,
            next: Link::NONE,
        }
    }
}

/// A singly linked list whose nodes are stored in an owned arena.
///
/// The arena holds exactly `len` nodes: erased nodes are removed from it
/// immediately and their slots reused by later insertions.
#[derive(Clone)]
pub struct SinglyLinkedList<T> {
    nodes: Slab<Node<T>>,
    head: Link,
    len: usize,
}

impl<T> Default for SinglyLinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> SinglyLinkedList<T> {
    /// Creates an empty list.
    #[inline]
    pub fn new() -> Self {
        Self {
            nodes: Slab::new(),
            head: Link::NONE,
            len: 0,
        }
    }

    /// Creates an empty list whose arena has room for `capacity` nodes.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Slab::with_capacity(capacity),
            head: Link::NONE,
            len: 0,
        }
    }

    /// Returns the number of elements in the list.
    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the list is empty.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Appends `value` after the last node.
    ///
    /// Walks from `head` to find the last node, so this is O(n).
    pub fn push_back(&mut self, value: T) {
        let last = self.len.checked_sub(1).map(|index| self.link_at(index));
        let key = Link::to(self.nodes.insert(Node::new(value)));

        match last {
            Some(last) => self.nodes[last.index()].next = key,
            None => self.head = key,
        }
        self.len += 1;
    }

    /// Inserts `value` so that it ends up at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`OutOfRange`] if `index > len`. The value is dropped.
    pub fn insert(&mut self, index: usize, value: T) -> Result<(), OutOfRange> {
        OutOfRange::check_insert(index, self.len)?;

        let mut node = Node::new(value);
        if index == 0 {
            node.next = self.head;
            self.head = Link::to(self.nodes.insert(node));
        } else {
            let prev = self.link_at(index - 1);
            node.next = self.nodes[prev.index()].next;
            let key = Link::to(self.nodes.insert(node));
            self.nodes[prev.index()].next = key;
        }

        self.len += 1;
        Ok(())
    }

    /// Removes and returns the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`OutOfRange`] if `index >= len`.
    pub fn erase(&mut self, index: usize) -> Result<T, OutOfRange> {
        OutOfRange::check_element(index, self.len)?;

        let target = if index == 0 {
            let target = self.head;
            self.head = self.nodes[target.index()].next;
            target
        } else {
            let prev = self.link_at(index - 1);
            let target = self.nodes[prev.index()].next;
            self.nodes[prev.index()].next = self.nodes[target.index()].next;
            target
        };

        self.len -= 1;
        Ok(self.nodes.remove(target.index()).value)
    }

    /// Returns an iterator over references to elements, front to back.
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            nodes: &self.nodes,
            current: self.head,
            remaining: self.len,
        }
    }

    /// Removes all elements.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.head = Link::NONE;
        self.len = 0;
    }

    /// Walks `index` links from `head`. `index` must be `< len`.
    fn link_at(&self, index: usize) -> Link {
        debug_assert!(index < self.len);
        let mut link = self.head;
        for _ in 0..index {
            link = self.nodes[link.index()].next;
        }
        link
    }
}

impl<T> Sequence<T> for SinglyLinkedList<T> {
    type Iter<'a>
        = Iter<'a, T>
    where
        Self: 'a,
        T: 'a;

    #[inline]
    fn push_back(&mut self, value: T) {
        SinglyLinkedList::push_back(self, value);
    }

    #[inline]
    fn insert(&mut self, index: usize, value: T) -> Result<(), OutOfRange> {
        SinglyLinkedList::insert(self, index, value)
    }

    #[inline]
    fn erase(&mut self, index: usize) -> Result<T, OutOfRange> {
        SinglyLinkedList::erase(self, index)
    }

    #[inline]
    fn len(&self) -> usize {
        self.len
    }

    #[inline]
    fn iter(&self) -> Self::Iter<'_> {
        SinglyLinkedList::iter(self)
    }
}

// =============================================================================
// Iterator
// =============================================================================

/// Iterator over references to list elements, front to back.
pub struct Iter<'a, T> {
    nodes: &'a Slab<Node<T>>,
    current: Link,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let key = self.current.key()?;
        let node = &self.nodes[key];
        self.current = node.next;
        self.remaining -= 1;
        Some(&node.value)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            nodes: self.nodes,
            current: self.current,
            remaining: self.remaining,
        }
    }
}

// =============================================================================
// Trait impls
// =============================================================================

impl<T: PartialEq> PartialEq for SinglyLinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for SinglyLinkedList<T> {}

impl<T: fmt::Debug> fmt::Debug for SinglyLinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for SinglyLinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_joined(f, self.iter())
    }
}

impl<T> Extend<T> for SinglyLinkedList<T> {
    /// Appends every item, walking to the tail once rather than per item.
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let mut last = self.len.checked_sub(1).map(|index| self.link_at(index));
        for value in iter {
            let key = Link::to(self.nodes.insert(Node::new(value)));
            match last {
                Some(last) => self.nodes[last.index()].next = key,
                None => self.head = key,
            }
            last = Some(key);
            self.len += 1;
        }
    }
}

impl<T> FromIterator<T> for SinglyLinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

impl<'a, T> IntoIterator for &'a SinglyLinkedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
