//! Doubly linked list with arena node storage.
//!
//! Nodes live in a [`slab::Slab`] owned by the list. Each node records the
//! slab keys of both neighbours; `prev` links are plain keys used only for
//! relinking, the slab alone decides node lifetime.
//!
//! # Invariants
//!
//! - `head.prev` and `tail.next` are absent
//! - for every node `n` with a successor, `n.next.prev == n`
//! - the forward walk from `head` and the backward walk from `tail` both
//!   visit exactly `len` nodes
//!
//! # Example
//!
//! ```
//! use nexus_seq::DoublyLinkedList;
//!
//! let mut list: DoublyLinkedList<u64> = DoublyLinkedList::new();
//! for i in 0..5 {
//!     list.push_back(i);
//! }
//!
//! assert_eq!(list.erase(4), Ok(4));
//! list.insert(0, 9).unwrap();
//!
//! assert_eq!(list.front(), Some(&9));
//! assert_eq!(list.back(), Some(&3));
//! assert_eq!(list.to_string(), "9, 0, 1, 2, 3");
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
    prev: Link,
    next: Link,
}

impl<T> Node<T> {
    /// Creates a new unlinked node.
    #[inline]
    fn new(value: T) -> Self {
        Self {
            value,
            prev: Link::NONE,
            next: Link::NONE,
        }
    }
}

/// A doubly linked list whose nodes are stored in an owned arena.
///
/// The list tracks head, tail, and length. `push_back` is O(1); positional
/// operations walk from whichever end is closer to the target.
#[derive(Clone)]
pub struct DoublyLinkedList<T> {
    nodes: Slab<Node<T>>,
    head: Link,
    tail: Link,
    len: usize,
}

impl<T> Default for DoublyLinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> DoublyLinkedList<T> {
    /// Creates an empty list.
    #[inline]
    pub fn new() -> Self {
        Self {
            nodes: Slab::new(),
            head: Link::NONE,
            tail: Link::NONE,
            len: 0,
        }
    }

    /// Creates an empty list whose arena has room for `capacity` nodes.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Slab::with_capacity(capacity),
            head: Link::NONE,
            tail: Link::NONE,
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

    /// Returns a reference to the front element.
    #[inline]
    pub fn front(&self) -> Option<&T> {
        self.head.key().map(|key| &self.nodes[key].value)
    }

    /// Returns a reference to the back element.
    #[inline]
    pub fn back(&self) -> Option<&T> {
        self.tail.key().map(|key| &self.nodes[key].value)
    }

    /// Appends `value` after the tail. O(1).
    #[inline]
    pub fn push_back(&mut self, value: T) {
        let key = Link::to(self.nodes.insert(Node::new(value)));
        self.link_back(key);
    }

    /// Inserts `value` so that it ends up at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`OutOfRange`] if `index > len`. The value is dropped.
    pub fn insert(&mut self, index: usize, value: T) -> Result<(), OutOfRange> {
        OutOfRange::check_insert(index, self.len)?;

        let key = Link::to(self.nodes.insert(Node::new(value)));
        if index == 0 {
            self.link_front(key);
        } else {
            let after = self.link_at(index - 1);
            self.link_after(after, key);
        }
        Ok(())
    }

    /// Removes and returns the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`OutOfRange`] if `index >= len`.
    pub fn erase(&mut self, index: usize) -> Result<T, OutOfRange> {
        OutOfRange::check_element(index, self.len)?;

        let key = self.link_at(index);
        self.unlink(key);
        Ok(self.nodes.remove(key.index()).value)
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
        self.tail = Link::NONE;
        self.len = 0;
    }

    // ========================================================================
    // Linking (no alloc/dealloc)
    // ========================================================================

    /// Returns the link of the node at `index`, walking from the nearer end.
    /// `index` must be `< len`.
    fn link_at(&self, index: usize) -> Link {
        debug_assert!(index < self.len);
        if index < self.len / 2 {
            let mut link = self.head;
            for _ in 0..index {
                link = self.nodes[link.index()].next;
            }
            link
        } else {
            let mut link = self.tail;
            for _ in index + 1..self.len {
                link = self.nodes[link.index()].prev;
            }
            link
        }
    }

    fn link_front(&mut self, key: Link) {
        let node = &mut self.nodes[key.index()];
        node.next = self.head;
        node.prev = Link::NONE;

        if self.head.is_some() {
            self.nodes[self.head.index()].prev = key;
        } else {
            self.tail = key;
        }

        self.head = key;
        self.len += 1;
    }

    fn link_back(&mut self, key: Link) {
        let node = &mut self.nodes[key.index()];
        node.prev = self.tail;
        node.next = Link::NONE;

        if self.tail.is_some() {
            self.nodes[self.tail.index()].next = key;
        } else {
            self.head = key;
        }

        self.tail = key;
        self.len += 1;
    }

    fn link_after(&mut self, after: Link, key: Link) {
        let next = self.nodes[after.index()].next;
        let node = &mut self.nodes[key.index()];
        node.prev = after;
        node.next = next;

        self.nodes[after.index()].next = key;

        if next.is_some() {
            self.nodes[next.index()].prev = key;
        } else {
            self.tail = key;
        }

        self.len += 1;
    }

    /// Detaches `key` from its neighbours. The node stays in the arena.
    fn unlink(&mut self, key: Link) {
        let node = &self.nodes[key.index()];
        let prev = node.prev;
        let next = node.next;

        if prev.is_some() {
            self.nodes[prev.index()].next = next;
        } else {
            self.head = next;
        }

        if next.is_some() {
            self.nodes[next.index()].prev = prev;
        } else {
            self.tail = prev;
        }

        self.len -= 1;
    }
}

impl<T> Sequence<T> for DoublyLinkedList<T> {
    type Iter<'a>
        = Iter<'a, T>
    where
        Self: 'a,
        T: 'a;

    #[inline]
    fn push_back(&mut self, value: T) {
        DoublyLinkedList::push_back(self, value);
    }

    #[inline]
    fn insert(&mut self, index: usize, value: T) -> Result<(), OutOfRange> {
        DoublyLinkedList::insert(self, index, value)
    }

    #[inline]
    fn erase(&mut self, index: usize) -> Result<T, OutOfRange> {
        DoublyLinkedList::erase(self, index)
    }

    #[inline]
    fn len(&self) -> usize {
        self.len
    }

    #[inline]
    fn iter(&self) -> Self::Iter<'_> {
        DoublyLinkedList::iter(self)
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

impl<T: PartialEq> PartialEq for DoublyLinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for DoublyLinkedList<T> {}

impl<T: fmt::Debug> fmt::Debug for DoublyLinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for DoublyLinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_joined(f, self.iter())
    }
}

impl<T> Extend<T> for DoublyLinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push_back(value);
        }
    }
}

impl<T> FromIterator<T> for DoublyLinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

impl<'a, T> IntoIterator for &'a DoublyLinkedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn values(list: &DoublyLinkedList<u64>) -> Vec<u64> {
        list.iter().copied().collect()
    }

    /// Walks head->tail and tail->head, checking both agree with `len`.
    fn assert_links<T>(list: &DoublyLinkedList<T>) {
        let mut forward = Vec::new();
        let mut link = list.head;
        let mut prev = Link::NONE;
        while let Some(key) = link.key() {
            assert_eq!(list.nodes[key].prev, prev, "prev of {key} is stale");
            forward.push(key);
            prev = link;
            link = list.nodes[key].next;
        }
        assert_eq!(prev, list.tail);

        let mut backward = Vec::new();
        let mut link = list.tail;
        while let Some(key) = link.key() {
            backward.push(key);
            link = list.nodes[key].prev;
        }
        backward.reverse();

        assert_eq!(forward, backward);
        assert_eq!(forward.len(), list.len());
        assert_eq!(list.nodes.len(), list.len());
        if list.is_empty() {
            assert!(list.head.is_none());
            assert!(list.tail.is_none());
        }
    }

    #[test]
    fn new_list_is_empty() {
        let list: DoublyLinkedList<u64> = DoublyLinkedList::new();
        assert!(list.is_empty());
        assert_eq!(list.front(), None);
        assert_eq!(list.back(), None);
        assert_links(&list);
    }

    #[test]
    fn push_back_tracks_tail() {
        let mut list = DoublyLinkedList::new();
        list.push_back(1u64);
        assert_eq!(list.head, list.tail);
        assert_links(&list);

        list.push_back(2);
        list.push_back(3);
        assert_eq!(list.front(), Some(&1));
        assert_eq!(list.back(), Some(&3));
        assert_eq!(values(&list), vec![1, 2, 3]);
        assert_links(&list);
    }

    #[test]
    fn insert_front() {
        let mut list: DoublyLinkedList<u64> = (1..3).collect();
        list.insert(0, 0).unwrap();

        assert_eq!(values(&list), vec![0, 1, 2]);
        assert_eq!(list.front(), Some(&0));
        assert_links(&list);
    }

    #[test]
    fn insert_into_empty_sets_head_and_tail() {
        let mut list = DoublyLinkedList::new();
        list.insert(0, 5u64).unwrap();

        assert_eq!(list.front(), Some(&5));
        assert_eq!(list.back(), Some(&5));
        assert_links(&list);
    }

    #[test]
    fn insert_middle() {
        let mut list: DoublyLinkedList<u64> = (0..4).collect();
        list.insert(2, 9).unwrap();
        assert_eq!(values(&list), vec![0, 1, 9, 2, 3]);
        assert_links(&list);

        list.insert(4, 8).unwrap();
        assert_eq!(values(&list), vec![0, 1, 9, 2, 8, 3]);
        assert_links(&list);
    }

    #[test]
    fn insert_at_len_becomes_tail() {
        let mut list: DoublyLinkedList<u64> = (0..3).collect();
        list.insert(3, 3).unwrap();

        assert_eq!(list.back(), Some(&3));
        assert_eq!(values(&list), vec![0, 1, 2, 3]);
        assert_links(&list);
    }

    #[test]
    fn insert_past_end_fails() {
        let mut list: DoublyLinkedList<u64> = (0..3).collect();

        assert_eq!(list.insert(4, 9), Err(OutOfRange { index: 4, len: 3 }));
        assert_eq!(values(&list), vec![0, 1, 2]);
        assert_links(&list);
    }

    #[test]
    fn erase_head() {
        let mut list: DoublyLinkedList<u64> = (0..3).collect();
        assert_eq!(list.erase(0), Ok(0));

        assert_eq!(list.front(), Some(&1));
        assert_links(&list);
    }

    #[test]
    fn erase_tail() {
        let mut list: DoublyLinkedList<u64> = (0..3).collect();
        assert_eq!(list.erase(2), Ok(2));

        assert_eq!(list.back(), Some(&1));
        list.push_back(7);
        assert_eq!(values(&list), vec![0, 1, 7]);
        assert_links(&list);
    }

    #[test]
    fn erase_middle_from_either_end() {
        let mut list: DoublyLinkedList<u64> = (0..8).collect();

        // Front half walks from head, back half from tail.
        assert_eq!(list.erase(1), Ok(1));
        assert_links(&list);
        assert_eq!(list.erase(5), Ok(6));
        assert_links(&list);

        assert_eq!(values(&list), vec![0, 2, 3, 4, 5, 7]);
    }

    #[test]
    fn erase_only_element() {
        let mut list: DoublyLinkedList<u64> = (0..1).collect();
        assert_eq!(list.erase(0), Ok(0));

        assert!(list.is_empty());
        assert_links(&list);
    }

    #[test]
    fn erase_out_of_range() {
        let mut empty: DoublyLinkedList<u64> = DoublyLinkedList::new();
        assert_eq!(empty.erase(0), Err(OutOfRange { index: 0, len: 0 }));
        assert_links(&empty);

        let mut list: DoublyLinkedList<u64> = (0..3).collect();
        assert!(list.erase(3).is_err());
        assert_eq!(values(&list), vec![0, 1, 2]);
        assert_links(&list);
    }

    #[test]
    fn link_at_matches_position() {
        let list: DoublyLinkedList<u64> = (0..7).collect();
        for index in 0..7 {
            let key = list.link_at(index).index();
            assert_eq!(list.nodes[key].value, index as u64);
        }
    }

    #[test]
    fn scenario() {
        let mut list = DoublyLinkedList::new();
        for i in 0..10u64 {
            list.push_back(i);
        }
        assert_eq!(list.to_string(), "0, 1, 2, 3, 4, 5, 6, 7, 8, 9");

        for index in [2, 4, 5] {
            list.erase(index).unwrap();
            assert_links(&list);
        }
        assert_eq!(list.to_string(), "0, 1, 3, 4, 6, 8, 9");
        assert_eq!(list.len(), 7);

        list.insert(0, 10).unwrap();
        list.insert(4, 20).unwrap();
        list.push_back(30);
        assert_links(&list);
        assert_eq!(list.to_string(), "10, 0, 1, 3, 20, 4, 6, 8, 9, 30");
        assert_eq!(list.len(), 10);
    }

    #[test]
    fn churn_keeps_links_consistent() {
        let mut list = DoublyLinkedList::new();
        let mut model = Vec::new();

        for i in 0..64u64 {
            let index = (i as usize * 7) % (model.len() + 1);
            list.insert(index, i).unwrap();
            model.insert(index, i);
            assert_links(&list);

            if i % 3 == 0 {
                let index = (i as usize * 5) % model.len();
                assert_eq!(list.erase(index), Ok(model.remove(index)));
                assert_links(&list);
            }
        }

        assert_eq!(values(&list), model);
    }

    #[test]
    fn clear_and_reuse() {
        let mut list: DoublyLinkedList<u64> = (0..3).collect();
        list.clear();
        assert_links(&list);

        list.push_back(1);
        assert_eq!(values(&list), vec![1]);
        assert_links(&list);
    }

    #[test]
    fn clone_and_eq() {
        let list: DoublyLinkedList<u64> = (0..3).collect();
        let copy = list.clone();
        assert_eq!(copy, list);
        assert_links(&copy);
        assert_eq!(format!("{copy:?}"), "[0, 1, 2]");
    }

    #[test]
    fn drop_releases_elements() {
        use std::rc::Rc;

        let tracker = Rc::new(());
        {
            let mut list = DoublyLinkedList::new();
            for _ in 0..4 {
                list.push_back(Rc::clone(&tracker));
            }
            drop(list.erase(1).unwrap());
            assert_eq!(Rc::strong_count(&tracker), 4);
        }
        assert_eq!(Rc::strong_count(&tracker), 1);
    }
}
