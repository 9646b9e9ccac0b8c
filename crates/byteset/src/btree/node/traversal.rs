//! Ordered Traversal
//!
//! The whole family — scan, reverse, ascend, descend, prefix descend —
//! threads the visitor's continuation flag through every recursion level:
//! the first `false` unwinds the entire walk with no further visits.
//! Traversal is synchronous; nothing here suspends or yields.

use super::super::ByteSet;
use super::structure::Node;
use crate::compare::Comparator;

/// Outcome of a prefix-bounded descent through one subtree.
enum PrefixStep {
    /// The visitor asked to stop; unwind with no further visits.
    Stopped,
    /// A starting item was found and this subtree is exhausted; the parent
    /// keeps walking leftward.
    Continue,
    /// No item in this subtree carries the prefix; nothing was visited.
    NotFound,
}

impl Node {
    /// Full ascending in-order walk: child, item, child, ... rightmost
    /// child.
    pub(crate) fn scan<F: FnMut(&[u8]) -> bool>(&self, visitor: &mut F) -> bool {
        if self.is_leaf() {
            for item in &self.items {
                if !visitor(item) {
                    return false;
                }
            }
            return true;
        }
        for (index, item) in self.items.iter().enumerate() {
            if !self.children[index].scan(visitor) {
                return false;
            }
            if !visitor(item) {
                return false;
            }
        }
        self.children[self.items.len()].scan(visitor)
    }

    /// Mirror of `scan`: full descending in-order walk.
    pub(crate) fn reverse<F: FnMut(&[u8]) -> bool>(&self, visitor: &mut F) -> bool {
        if self.is_leaf() {
            for item in self.items.iter().rev() {
                if !visitor(item) {
                    return false;
                }
            }
            return true;
        }
        if !self.children[self.items.len()].reverse(visitor) {
            return false;
        }
        for (index, item) in self.items.iter().enumerate().rev() {
            if !visitor(item) {
                return false;
            }
            if !self.children[index].reverse(visitor) {
                return false;
            }
        }
        true
    }

    /// Visit every key `>= pivot` in ascending order.
    ///
    /// When the pivot is not present, the child at its insertion position
    /// may still hold keys at or above it and is walked first; from there
    /// on the node's items and trailing children are visited in plain scan
    /// order.
    pub(crate) fn ascend<F: FnMut(&[u8]) -> bool>(
        &self,
        pivot: &[u8],
        visitor: &mut F,
        comparator: Comparator,
    ) -> bool {
        let (index, found) = self.find(pivot, comparator);
        if !found && !self.is_leaf() && !self.children[index].ascend(pivot, visitor, comparator) {
            return false;
        }
        for i in index..self.items.len() {
            if !visitor(&self.items[i]) {
                return false;
            }
            if !self.is_leaf() && !self.children[i + 1].scan(visitor) {
                return false;
            }
        }
        true
    }

    /// Visit every key `<= pivot` in descending order.
    pub(crate) fn descend<F: FnMut(&[u8]) -> bool>(
        &self,
        pivot: &[u8],
        visitor: &mut F,
        comparator: Comparator,
    ) -> bool {
        let (index, found) = self.find(pivot, comparator);
        if found {
            return self.walk_down_from(index, visitor);
        }
        if !self.is_leaf() && !self.children[index].descend(pivot, visitor, comparator) {
            return false;
        }
        if index == 0 {
            return true;
        }
        self.walk_down_from(index - 1, visitor)
    }

    /// Like `descend`, but the starting position is the last item carrying
    /// `prefix` rather than an ordering match.
    ///
    /// When no item here matches, the only subtree that can hold prefixed
    /// keys under the byte order is the child at the prefix's insertion
    /// position; the three-way outcome keeps an absent prefix from ever
    /// reaching the visitor.
    fn descend_prefix<F: FnMut(&[u8]) -> bool>(
        &self,
        prefix: &[u8],
        visitor: &mut F,
        comparator: Comparator,
    ) -> PrefixStep {
        if let Some(start) = self.find_last(prefix) {
            return if self.walk_down_from(start, visitor) {
                PrefixStep::Continue
            } else {
                PrefixStep::Stopped
            };
        }
        if self.is_leaf() {
            return PrefixStep::NotFound;
        }
        let (index, _) = self.find(prefix, comparator);
        match self.children[index].descend_prefix(prefix, visitor, comparator) {
            PrefixStep::Continue if index > 0 => {
                if self.walk_down_from(index - 1, visitor) {
                    PrefixStep::Continue
                } else {
                    PrefixStep::Stopped
                }
            }
            outcome => outcome,
        }
    }

    /// The leftward item/left-subtree interleave shared by `descend` and
    /// `descend_prefix` once a starting position is fixed: visit
    /// `items[start]`, reverse its left subtree, and step down to
    /// `items[0]`.
    fn walk_down_from<F: FnMut(&[u8]) -> bool>(&self, start: usize, visitor: &mut F) -> bool {
        let mut i = start;
        loop {
            if !visitor(&self.items[i]) {
                return false;
            }
            if !self.is_leaf() && !self.children[i].reverse(visitor) {
                return false;
            }
            if i == 0 {
                return true;
            }
            i -= 1;
        }
    }
}

impl ByteSet {
    /// Visit every key in ascending order until the visitor returns
    /// `false`.
    pub fn scan<F: FnMut(&[u8]) -> bool>(&self, mut visitor: F) {
        if let Some(root) = &self.root {
            root.scan(&mut visitor);
        }
    }

    /// Visit every key in descending order until the visitor returns
    /// `false`.
    pub fn reverse<F: FnMut(&[u8]) -> bool>(&self, mut visitor: F) {
        if let Some(root) = &self.root {
            root.reverse(&mut visitor);
        }
    }

    /// Visit every key `>= pivot` in ascending order; `None` walks from
    /// the very start.
    ///
    /// The pivot is an ordinary sort key — a pivot that happens to be a
    /// prefix of stored keys gets no special treatment here.
    pub fn ascend<F: FnMut(&[u8]) -> bool>(&self, pivot: Option<&[u8]>, mut visitor: F) {
        let root = match &self.root {
            Some(root) => root,
            None => return,
        };
        match pivot {
            Some(pivot) => root.ascend(pivot, &mut visitor, self.comparator),
            None => root.scan(&mut visitor),
        };
    }

    /// Visit every key `<= pivot` in descending order; `None` walks from
    /// the very end.
    pub fn descend<F: FnMut(&[u8]) -> bool>(&self, pivot: Option<&[u8]>, mut visitor: F) {
        let root = match &self.root {
            Some(root) => root,
            None => return,
        };
        match pivot {
            Some(pivot) => root.descend(pivot, &mut visitor, self.comparator),
            None => root.reverse(&mut visitor),
        };
    }

    /// Visit, in descending order, every key at or below the last key that
    /// has `prefix` as a byte-prefix.
    ///
    /// An empty prefix deliberately matches nothing, and when no stored
    /// key carries the prefix the visitor is never invoked — both unlike
    /// [`descend`](ByteSet::descend), which treats its pivot as a plain
    /// sort key.
    pub fn descend_prefix<F: FnMut(&[u8]) -> bool>(&self, prefix: &[u8], mut visitor: F) {
        if prefix.is_empty() {
            return;
        }
        if let Some(root) = &self.root {
            root.descend_prefix(prefix, &mut visitor, self.comparator);
        }
    }

    /// The smallest key, or `None` for an empty set.
    pub fn first(&self) -> Option<Vec<u8>> {
        let mut first = None;
        self.scan(|key| {
            first = Some(key.to_vec());
            false
        });
        first
    }

    /// The largest key, or `None` for an empty set.
    pub fn last(&self) -> Option<Vec<u8>> {
        let mut last = None;
        self.reverse(|key| {
            last = Some(key.to_vec());
            false
        });
        last
    }
}
