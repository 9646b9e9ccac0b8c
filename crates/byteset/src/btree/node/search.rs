//! Key Search
//!
//! Per-node binary search plus the membership descent built on top of it.

use super::super::ByteSet;
use super::structure::Node;
use crate::compare::Comparator;

impl Node {
    /// Binary search for `key` among this node's items.
    ///
    /// Returns `(index, true)` when an item compares equal to `key`,
    /// otherwise `(index, false)` where `index` is the position of the
    /// first item greater than `key` — equivalently, the child slot that
    /// must contain `key` if it is present at all.
    pub(crate) fn find(&self, key: &[u8], comparator: Comparator) -> (usize, bool) {
        match self.items.binary_search_by(|item| comparator(item, key)) {
            Ok(index) => (index, true),
            Err(index) => (index, false),
        }
    }

    /// Right-to-left linear scan for the last item that starts with
    /// `prefix`.
    ///
    /// Prefix matching is not expressible as a single ordering probe, so
    /// this is deliberately not a binary search. An empty prefix never
    /// matches.
    pub(crate) fn find_last(&self, prefix: &[u8]) -> Option<usize> {
        if prefix.is_empty() {
            return None;
        }
        (0..self.items.len())
            .rev()
            .find(|&index| self.items[index].starts_with(prefix))
    }

    fn has(&self, key: &[u8], comparator: Comparator) -> bool {
        let (index, found) = self.find(key, comparator);
        if found {
            return true;
        }
        if self.is_leaf() {
            return false;
        }
        self.children[index].has(key, comparator)
    }
}

impl ByteSet {
    /// Membership test.
    ///
    /// Absence is a normal outcome, not an error.
    pub fn has(&self, key: &[u8]) -> bool {
        match &self.root {
            Some(root) => root.has(key, self.comparator),
            None => false,
        }
    }
}
