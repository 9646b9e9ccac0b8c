//! Key Comparison
//!
//! Keys are opaque byte strings compared only through the comparator the
//! tree was constructed with. The default order is byte-lexicographic.

use std::cmp::Ordering;

/// Total order over two keys.
///
/// A comparator must form a strict total order. Supplying anything weaker,
/// or swapping comparators on a populated tree, corrupts the tree; neither
/// is defended against.
pub type Comparator = fn(&[u8], &[u8]) -> Ordering;

/// Default byte-lexicographic comparator.
pub fn compare_bytes(a: &[u8], b: &[u8]) -> Ordering {
    a.cmp(b)
}
