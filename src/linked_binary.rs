//! Unbalanced linked binary-tree heap
//!
//! [`LinkedBinaryHeap`] keeps its elements in a heap-ordered binary tree of
//! individually owned nodes rather than the contiguous array a classic binary
//! heap uses. Every ordering decision is delegated to the
//! [`Heuristic`](crate::heuristic::Heuristic) bound at construction.
//!
//! The tree carries no balance bookkeeping. Insertion attaches at the first
//! free child slot and otherwise descends into the left subtree only, so
//! repeated insertion skews the tree leftward and node depth is bounded only
//! by the element count. This is a known, intentional limitation of the
//! structure, not something callers can tune away.
//!
//! # Time Complexity
//!
//! | Operation | Complexity |
//! |-----------|------------|
//! | `push`    | O(depth)   |
//! | `peek`    | O(1)       |
//! | `pop`     | O(depth)   |
//! | `remove`  | O(n)       |
//!
//! Depth is O(n) in the worst case; none of the mutating operations restore
//! balance.
//!
//! # Example
//!
//! ```rust
//! use linked_binary_heap::Heap;
//! use linked_binary_heap::heuristic::MaxFirst;
//! use linked_binary_heap::linked_binary::LinkedBinaryHeap;
//!
//! let mut heap: LinkedBinaryHeap<i32, MaxFirst> = LinkedBinaryHeap::new();
//! for value in [5, 55, 13, -9, 0] {
//!     heap.push(value);
//! }
//!
//! assert_eq!(heap.peek(), Some(&55));
//! assert!(heap.remove(&55));
//! assert_eq!(heap.pop(), Some(13));
//! ```

use crate::heuristic::Heuristic;
use crate::traits::{Heap, HeapValue};
use std::cmp::Ordering;
use std::fmt;

/// Tree node owning one value and up to two children
///
/// Ownership is strictly hierarchical: each node is owned by exactly one
/// parent slot (or the heap's root slot), and the restructuring helpers move
/// nodes between slots by value so a node can never appear twice.
#[derive(Debug)]
struct Node<T> {
    value: T,
    left: Option<Box<Node<T>>>,
    right: Option<Box<Node<T>>>,
}

impl<T> Node<T> {
    fn leaf(value: T) -> Box<Self> {
        Box::new(Node {
            value,
            left: None,
            right: None,
        })
    }
}

/// A heap backed by an unbalanced linked binary tree
///
/// The heap owns the root slot and the heuristic bound at construction.
/// For every node with a child, the heuristic ranks the node's value at or
/// above the child's value; that is the only structural guarantee. Subtree
/// shapes are unconstrained, and a hostile insertion order degrades the tree
/// into a list.
///
/// Single-threaded by construction: all mutation goes through `&mut self`,
/// and no internal synchronization is provided. Callers needing shared
/// access must wrap the heap in their own lock.
#[derive(Debug)]
pub struct LinkedBinaryHeap<T: HeapValue, H: Heuristic<T>> {
    root: Option<Box<Node<T>>>,
    heuristic: H,
    len: usize,
}

impl<T: HeapValue, H: Heuristic<T>> LinkedBinaryHeap<T, H> {
    /// Creates an empty heap ordered by the given heuristic
    ///
    /// The heuristic is fixed for the lifetime of the heap.
    pub fn with_heuristic(heuristic: H) -> Self {
        Self {
            root: None,
            heuristic,
            len: 0,
        }
    }

    /// Returns the heuristic this heap is ordered by
    pub fn heuristic(&self) -> &H {
        &self.heuristic
    }

    /// Returns the number of elements in the heap
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the heap is empty
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Inserts a value
    pub fn push(&mut self, value: T) {
        let node = Node::leaf(value);
        self.root = Some(match self.root.take() {
            Some(root) => Self::place(&self.heuristic, root, node),
            None => node,
        });
        self.len += 1;
    }

    /// Returns the top-ranked value without removing it
    pub fn peek(&self) -> Option<&T> {
        self.root.as_deref().map(|node| &node.value)
    }

    /// Removes and returns the top-ranked value
    pub fn pop(&mut self) -> Option<T> {
        let node = self.root.take()?;
        let Node { value, left, right } = *node;
        self.root = Self::percolate(&self.heuristic, left, right);
        self.len -= 1;
        Some(value)
    }

    /// Removes the first value ranking equal to `value`
    ///
    /// The tree is searched in preorder, skipping any branch whose root ranks
    /// below the target. Returns `true` if a match was found and removed; on
    /// `false` the tree is untouched.
    pub fn remove(&mut self, value: &T) -> bool {
        let removed = Self::remove_from(&self.heuristic, &mut self.root, value);
        if removed {
            self.len -= 1;
        }
        removed
    }

    /// Drops every element, leaving the heap empty
    pub fn clear(&mut self) {
        self.root = None;
        self.len = 0;
    }

    /// Checks the heap-order invariant at every edge of the tree
    ///
    /// True when every node ranks at or above each of its children under the
    /// bound heuristic. Always true for a correctly functioning heap; exposed
    /// so tests and debugging sessions can verify the structure directly.
    pub fn is_heap_ordered(&self) -> bool {
        match &self.root {
            Some(root) => Self::subtree_ordered(&self.heuristic, root),
            None => true,
        }
    }

    /// Writes a reverse in-order rendering of the tree to `out`
    ///
    /// One line per node, right subtree first, indented four dashes per depth
    /// level, so the text reads as the tree rotated a quarter turn
    /// counterclockwise. An empty heap renders the single line `--|`.
    pub fn write_in_order<W: fmt::Write>(&self, out: &mut W) -> fmt::Result {
        match &self.root {
            Some(root) => Self::write_node(out, root, 0),
            None => writeln!(out, "--|"),
        }
    }

    /// Prints the reverse in-order rendering to stdout
    pub fn print_in_order(&self) {
        print!("{self}");
    }

    /// Places `node` within the subtree rooted at `sub_root`, returning the
    /// new subtree root
    ///
    /// When the incoming node outranks the subtree root the two swap roles
    /// and the old root is re-placed beneath the newcomer. Otherwise the node
    /// attaches at the first free child slot, left before right; with both
    /// slots taken the descent continues into the left subtree only, which is
    /// where the structure's leftward skew comes from.
    fn place(heuristic: &H, mut sub_root: Box<Node<T>>, node: Box<Node<T>>) -> Box<Node<T>> {
        if heuristic.compare(&sub_root.value, &node.value) == Ordering::Less {
            return Self::place(heuristic, node, sub_root);
        }
        match sub_root.left.take() {
            None => sub_root.left = Some(node),
            Some(left) if sub_root.right.is_none() => {
                sub_root.left = Some(left);
                sub_root.right = Some(node);
            }
            Some(left) => {
                sub_root.left = Some(Self::place(heuristic, left, node));
            }
        }
        sub_root
    }

    /// Searches `slot` in preorder for a value ranking equal to `value`,
    /// excising and repairing the first match
    fn remove_from(heuristic: &H, slot: &mut Option<Box<Node<T>>>, value: &T) -> bool {
        let Some(node) = slot else {
            return false;
        };
        match heuristic.compare(&node.value, value) {
            // Heap order caps every descendant at this node's rank, so a node
            // ranking below the target cannot hold it in its subtree.
            Ordering::Less => false,
            Ordering::Greater => {
                Self::remove_from(heuristic, &mut node.left, value)
                    || Self::remove_from(heuristic, &mut node.right, value)
            }
            Ordering::Equal => {
                if let Some(found) = slot.take() {
                    let Node { left, right, .. } = *found;
                    *slot = Self::percolate(heuristic, left, right);
                }
                true
            }
        }
    }

    /// Rebuilds the subtree left behind by an excised node from its two
    /// former child slots
    ///
    /// With both children present the higher-ranked child takes over (ties go
    /// to the left child, matching the insertion bias) and the loser's whole
    /// subtree moves into the winner's mirror-side slot. If a node already
    /// occupies that slot it is displaced and re-placed within the winner's
    /// subtree through the normal insertion policy.
    fn percolate(
        heuristic: &H,
        left: Option<Box<Node<T>>>,
        right: Option<Box<Node<T>>>,
    ) -> Option<Box<Node<T>>> {
        match (left, right) {
            (None, None) => None,
            (Some(child), None) | (None, Some(child)) => Some(child),
            (Some(left), Some(right)) => {
                if heuristic.compare(&left.value, &right.value) != Ordering::Less {
                    let mut winner = left;
                    Some(match winner.right.take() {
                        Some(displaced) => {
                            winner.right = Some(right);
                            Self::place(heuristic, winner, displaced)
                        }
                        None => {
                            winner.right = Some(right);
                            winner
                        }
                    })
                } else {
                    let mut winner = right;
                    Some(match winner.left.take() {
                        Some(displaced) => {
                            winner.left = Some(left);
                            Self::place(heuristic, winner, displaced)
                        }
                        None => {
                            winner.left = Some(left);
                            winner
                        }
                    })
                }
            }
        }
    }

    fn subtree_ordered(heuristic: &H, node: &Node<T>) -> bool {
        for child in [&node.left, &node.right] {
            if let Some(child) = child {
                if heuristic.compare(&node.value, &child.value) == Ordering::Less {
                    return false;
                }
                if !Self::subtree_ordered(heuristic, child) {
                    return false;
                }
            }
        }
        true
    }

    fn write_node<W: fmt::Write>(out: &mut W, node: &Node<T>, depth: usize) -> fmt::Result {
        if let Some(right) = &node.right {
            Self::write_node(out, right, depth + 1)?;
        }
        for _ in 0..depth {
            out.write_str("----")?;
        }
        if depth > 0 {
            out.write_str(" ")?;
        }
        writeln!(out, "{}", node.value)?;
        if let Some(left) = &node.left {
            Self::write_node(out, left, depth + 1)?;
        }
        Ok(())
    }
}

impl<T: HeapValue, H: Heuristic<T> + Default> LinkedBinaryHeap<T, H> {
    /// Creates an empty heap with the heuristic's default value
    pub fn new() -> Self {
        Self::with_heuristic(H::default())
    }
}

impl<T: HeapValue, H: Heuristic<T> + Default> Default for LinkedBinaryHeap<T, H> {
    fn default() -> Self {
        Self::new()
    }
}

/// Renders the heap through [`LinkedBinaryHeap::write_in_order`]
impl<T: HeapValue, H: Heuristic<T>> fmt::Display for LinkedBinaryHeap<T, H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_in_order(f)
    }
}

impl<T: HeapValue, H: Heuristic<T> + Default> Heap<T> for LinkedBinaryHeap<T, H> {
    fn new() -> Self {
        LinkedBinaryHeap::new()
    }

    fn is_empty(&self) -> bool {
        LinkedBinaryHeap::is_empty(self)
    }

    fn len(&self) -> usize {
        LinkedBinaryHeap::len(self)
    }

    fn push(&mut self, value: T) {
        LinkedBinaryHeap::push(self, value)
    }

    fn peek(&self) -> Option<&T> {
        LinkedBinaryHeap::peek(self)
    }

    fn pop(&mut self) -> Option<T> {
        LinkedBinaryHeap::pop(self)
    }

    fn remove(&mut self, value: &T) -> bool {
        LinkedBinaryHeap::remove(self, value)
    }
}
