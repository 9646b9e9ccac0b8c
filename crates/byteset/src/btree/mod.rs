//! B-Tree Ordered Set
//!
//! An in-memory B-tree over opaque byte-string keys. The module is
//! organized into focused submodules under `node`:
//! - `structure`: node layout
//! - `search`: per-node binary search and membership descent
//! - `insert`: key insertion with split propagation
//! - `split_merge`: node splitting, merging, and sibling borrowing
//! - `delete`: key deletion with rebalancing
//! - `traversal`: full, reverse, pivot-bounded, and prefix-bounded walks
//!
//! # Architecture
//!
//! - Every node holds a sorted run of items; internal nodes hold one more
//!   child than item, and all leaves sit at the same depth.
//! - Mutations descend top-down and repair overflow (split) or underflow
//!   (merge/borrow) bottom-up, so each level is balanced before its parent
//!   observes it.
//! - The handle caches the key count; it is maintained incrementally and
//!   never recomputed by traversal.

pub(crate) mod node;

use crate::compare::{compare_bytes, Comparator};
use node::Node;

/// Upper bound on items per node.
pub(crate) const MAX_ITEMS: usize = 255;

/// Floor on items per non-root node once a delete completes.
pub(crate) const MIN_ITEMS: usize = MAX_ITEMS * 40 / 100;

/// Ordered set of byte-string keys backed by a B-tree.
///
/// Keys are compared through the comparator captured at construction
/// (byte-lexicographic by default); equality is comparator-equality, not
/// byte-identity. The handle owns the root exclusively and nodes own their
/// children exclusively; nothing in here locks — see
/// [`SharedByteSet`](crate::sync::SharedByteSet) for the coarse-grained
/// synchronized wrapper.
#[derive(Debug)]
pub struct ByteSet {
    root: Option<Box<Node>>,
    height: usize,
    length: usize,
    comparator: Comparator,
}

impl ByteSet {
    /// Create an empty set ordered byte-lexicographically.
    pub fn new() -> Self {
        ByteSet::with_comparator(compare_bytes)
    }

    /// Create an empty set ordered by a custom comparator.
    ///
    /// All tree invariants are defined relative to this comparator; it must
    /// not change for the lifetime of the tree.
    pub fn with_comparator(comparator: Comparator) -> Self {
        ByteSet {
            root: None,
            height: 0,
            length: 0,
            comparator,
        }
    }

    /// Number of keys in the set.
    pub fn len(&self) -> usize {
        self.length
    }

    /// Whether the set holds no keys.
    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// Distance from the root to the leaf level (0 for a single-leaf tree
    /// and for the empty tree).
    pub fn height(&self) -> usize {
        self.height
    }

    /// The comparator this set was constructed with.
    pub fn comparator(&self) -> Comparator {
        self.comparator
    }
}

impl Default for ByteSet {
    fn default() -> Self {
        ByteSet::new()
    }
}
