//! Linked Binary-Tree Heap for Rust
//!
//! This crate provides a priority-heap container backed by an unbalanced
//! linked binary tree, with the ordering policy supplied as a pluggable
//! heuristic rather than baked into the element type.
//!
//! # Features
//!
//! - **Pluggable ordering**: the heap is generic over a
//!   [`Heuristic`](heuristic::Heuristic) bound once at construction;
//!   [`MaxFirst`](heuristic::MaxFirst) and [`MinFirst`](heuristic::MinFirst)
//!   are provided, custom strategies plug in the same way
//! - **Arbitrary-value removal**: `remove` excises any stored value, not just
//!   the top, using a rank-pruned preorder search
//! - **Owned-tree representation**: each node exclusively owns its children;
//!   no reference counting, no parent back-pointers
//! - **Diagnostic rendering**: a reverse in-order printer shows the tree
//!   shape one node per line
//!
//! The tree is deliberately NOT self-balancing: insertion descends into the
//! left subtree whenever both child slots are taken, so depth is unbounded
//! and adversarial insertion orders degrade operations to O(n). See the
//! [`linked_binary`] module docs for the full complexity picture before
//! reaching for this structure where a `std::collections::BinaryHeap` would
//! do.
//!
//! # Example
//!
//! ```rust
//! use linked_binary_heap::Heap;
//! use linked_binary_heap::heuristic::MaxFirst;
//! use linked_binary_heap::linked_binary::LinkedBinaryHeap;
//!
//! let mut heap: LinkedBinaryHeap<i32, MaxFirst> = LinkedBinaryHeap::new();
//! heap.push(5);
//! heap.push(55);
//! heap.push(13);
//!
//! assert_eq!(heap.peek(), Some(&55));
//! assert!(heap.remove(&55));
//! assert_eq!(heap.pop(), Some(13));
//! assert_eq!(heap.pop(), Some(5));
//! assert_eq!(heap.pop(), None);
//! ```

pub mod heuristic;
pub mod linked_binary;
pub mod traits;

// Re-export the core contracts for convenience
pub use traits::{Heap, HeapValue};
