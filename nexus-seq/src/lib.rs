//! Three interchangeable sequence containers behind one positional contract.
//!
//! | Container | Storage | push_back | insert / erase | Indexed access |
//! |-----------|---------|-----------|----------------|----------------|
//! | [`GrowableArray`] | Contiguous buffer, 1.5x growth | Amortized O(1) | O(n) shift | O(1) |
//! | [`SinglyLinkedList`] | Slab arena, forward links | O(n) walk | O(n) walk | - |
//! | [`DoublyLinkedList`] | Slab arena, forward + back links | O(1) | O(n) walk from nearer end | - |
//!
//! All three implement [`Sequence`]: the same operations applied in the same
//! order produce the same elements in the same order.
//!
//! # Design
//!
//! The linked lists keep their nodes in a [`slab::Slab`] owned by the list
//! and link them by slab key rather than by pointer:
//!
//! ```text
//! Slab<Node<T>>   - owns every node, reuses freed slots
//! head/tail/next  - plain copyable keys, sentinel for "absent"
//! ```
//!
//! Back links are ordinary keys, so the doubly linked list needs no reference
//! counting and no `unsafe`. Dropping a list drops its slab and every
//! remaining element with it.
//!
//! # Quick Start
//!
//! ```
//! use nexus_seq::{DoublyLinkedList, GrowableArray, OutOfRange};
//!
//! let mut array: GrowableArray<u64> = (0..10).collect();
//! array.erase(2)?;
//! array.insert(0, 10)?;
//! assert_eq!(array.at(0), Ok(&10));
//!
//! let mut list: DoublyLinkedList<u64> = (0..3).collect();
//! assert_eq!(list.erase(3), Err(OutOfRange { index: 3, len: 3 }));
//! list.insert(3, 3)?;
//! assert_eq!(list.to_string(), "0, 1, 2, 3");
//! # Ok::<(), OutOfRange>(())
//! ```
//!
//! # Errors
//!
//! Positional operations return [`OutOfRange`] when the index is outside
//! `0..=len` (insert) or `0..len` (erase, access). Validation happens before
//! any mutation, so a failed call leaves the container unchanged.
//!
//! # Logging
//!
//! Array growth is reported at `trace` level and rejected indices at `debug`
//! level through [`tracing`]. No subscriber is installed by this crate.

#![warn(missing_docs)]

pub mod array;
pub mod doubly;
pub mod error;
mod link;
pub mod sequence;
pub mod singly;

pub use array::GrowableArray;
pub use doubly::DoublyLinkedList;
pub use error::OutOfRange;
pub use sequence::Sequence;
pub use singly::SinglyLinkedList;
