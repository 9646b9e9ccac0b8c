//! Insertion
//!
//! Descent is recursive and top-down. Overflow is repaired bottom-up: any
//! child that returns holding `MAX_ITEMS` items is split and its median
//! promoted into the current node, so each level is back within bounds
//! before its parent inspects it. The root's own overflow is handled by
//! the tree handle, which grows a new root above it.

use super::super::{ByteSet, MAX_ITEMS};
use super::structure::Node;
use crate::compare::Comparator;

impl Node {
    /// Insert `key` into this subtree.
    ///
    /// Returns `true` when the key already existed, in which case nothing
    /// was mutated anywhere in the tree.
    pub(crate) fn set(&mut self, key: &[u8], comparator: Comparator) -> bool {
        let (index, found) = self.find(key, comparator);
        if found {
            return true;
        }
        if self.is_leaf() {
            self.items.insert(index, key.to_vec());
            return false;
        }
        if self.children[index].set(key, comparator) {
            return true;
        }
        if self.children[index].items.len() == MAX_ITEMS {
            let (median, right) = self.children[index].split();
            self.items.insert(index, median);
            self.children.insert(index + 1, right);
        }
        false
    }
}

impl ByteSet {
    /// Insert a key, returning `true` when the key was already present.
    ///
    /// A present key is left untouched and the length does not change; a
    /// new key increments the length by one.
    pub fn set(&mut self, key: &[u8]) -> bool {
        let root = match self.root.as_mut() {
            Some(root) => root,
            None => {
                let mut root = Node::new();
                root.items.push(key.to_vec());
                self.root = Some(Box::new(root));
                self.length = 1;
                return false;
            }
        };

        if root.set(key, self.comparator) {
            return true;
        }

        if root.items.len() == MAX_ITEMS {
            let (median, right) = root.split();
            let old_root = std::mem::replace(root, Box::new(Node::new()));
            root.items.push(median);
            root.children.push(old_root);
            root.children.push(right);
            self.height += 1;
        }
        self.length += 1;
        false
    }
}
