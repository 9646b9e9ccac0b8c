//! Deletion
//!
//! A delete descends recursively, removing from a leaf or — when the hit
//! lands on an internal node — substituting the matched item with the
//! maximum of its left child subtree, extracted by a delete-max descent.
//! After every successful recursive return the affected child is checked
//! against `MIN_ITEMS` and repaired with the split_merge primitives, so
//! underflow never outlives the stack frame that caused it.

use super::super::{ByteSet, MIN_ITEMS};
use super::structure::{Key, Node};
use crate::compare::Comparator;

/// What a delete descent is looking for.
#[derive(Clone, Copy)]
enum Target<'a> {
    /// An exact key.
    Key(&'a [u8]),
    /// The maximum item of the subtree (predecessor extraction).
    Max,
}

impl Node {
    fn delete(&mut self, target: Target<'_>, comparator: Comparator) -> Option<Key> {
        let (mut index, found) = match target {
            Target::Max => (self.items.len() - 1, true),
            Target::Key(key) => self.find(key, comparator),
        };

        if self.is_leaf() {
            if found {
                return Some(self.items.remove(index));
            }
            return None;
        }

        let removed = if found {
            match target {
                Target::Max => {
                    index += 1;
                    self.children[index].delete(Target::Max, comparator)
                }
                Target::Key(_) => {
                    // The separator's predecessor is the greatest key
                    // strictly less than it, so the overwrite preserves
                    // ordering.
                    let predecessor = self.children[index]
                        .delete(Target::Max, comparator)
                        .expect("non-empty subtree yields a maximum");
                    Some(std::mem::replace(&mut self.items[index], predecessor))
                }
            }
        } else {
            self.children[index].delete(target, comparator)
        };

        let removed = removed?;
        if self.children[index].items.len() < MIN_ITEMS {
            self.rebalance_children(index);
        }
        Some(removed)
    }
}

impl ByteSet {
    /// Remove a key, returning `true` when it was present.
    ///
    /// Deleting an absent key — including from an empty tree, or a key
    /// already removed — is a no-op returning `false`.
    pub fn delete(&mut self, key: &[u8]) -> bool {
        let root = match self.root.as_mut() {
            Some(root) => root,
            None => return false,
        };

        if root.delete(Target::Key(key), self.comparator).is_none() {
            return false;
        }

        if root.items.is_empty() && !root.children.is_empty() {
            let collapsed = root.children.remove(0);
            *root = collapsed;
            self.height -= 1;
        }
        self.length -= 1;
        if self.length == 0 {
            self.root = None;
            self.height = 0;
        }
        true
    }
}
