//! Coarse-Grained Synchronized Wrapper
//!
//! A decorator over [`ByteSet`] holding one reader/writer lock around the
//! whole tree: exclusive for mutations, shared for reads. There is no
//! per-node locking; every call is a single critical section, and guards
//! are released on every exit path — early-terminated traversals
//! included — by RAII.

use parking_lot::RwLock;

use crate::btree::ByteSet;
use crate::compare::Comparator;

/// Thread-safe wrapper around [`ByteSet`].
///
/// Visitors run while the read lock is held; a visitor returning `false`
/// releases it exactly as fast as one that runs to completion. Mutating
/// from inside a visitor would deadlock and is not supported.
#[derive(Debug, Default)]
pub struct SharedByteSet {
    inner: RwLock<ByteSet>,
}

impl SharedByteSet {
    /// Create an empty shared set ordered byte-lexicographically.
    pub fn new() -> Self {
        SharedByteSet {
            inner: RwLock::new(ByteSet::new()),
        }
    }

    /// Create an empty shared set ordered by a custom comparator.
    pub fn with_comparator(comparator: Comparator) -> Self {
        SharedByteSet {
            inner: RwLock::new(ByteSet::with_comparator(comparator)),
        }
    }

    /// Insert a key under the write lock; `true` means it already existed.
    pub fn set(&self, key: &[u8]) -> bool {
        self.inner.write().set(key)
    }

    /// Remove a key under the write lock; `true` means it was present.
    pub fn delete(&self, key: &[u8]) -> bool {
        self.inner.write().delete(key)
    }

    /// Membership test under the read lock.
    pub fn has(&self, key: &[u8]) -> bool {
        self.inner.read().has(key)
    }

    /// Number of keys in the set.
    pub fn len(&self) -> usize {
        self.inner.read().len()
    }

    /// Whether the set holds no keys.
    pub fn is_empty(&self) -> bool {
        self.inner.read().is_empty()
    }

    /// Ascending walk under the read lock.
    pub fn scan<F: FnMut(&[u8]) -> bool>(&self, visitor: F) {
        self.inner.read().scan(visitor)
    }

    /// Descending walk under the read lock.
    pub fn reverse<F: FnMut(&[u8]) -> bool>(&self, visitor: F) {
        self.inner.read().reverse(visitor)
    }

    /// Ascending walk from `pivot` under the read lock.
    pub fn ascend<F: FnMut(&[u8]) -> bool>(&self, pivot: Option<&[u8]>, visitor: F) {
        self.inner.read().ascend(pivot, visitor)
    }

    /// Descending walk from `pivot` under the read lock.
    pub fn descend<F: FnMut(&[u8]) -> bool>(&self, pivot: Option<&[u8]>, visitor: F) {
        self.inner.read().descend(pivot, visitor)
    }

    /// Prefix-bounded descending walk under the read lock.
    pub fn descend_prefix<F: FnMut(&[u8]) -> bool>(&self, prefix: &[u8], visitor: F) {
        self.inner.read().descend_prefix(prefix, visitor)
    }

    /// The smallest key, or `None` for an empty set.
    pub fn first(&self) -> Option<Vec<u8>> {
        self.inner.read().first()
    }

    /// The largest key, or `None` for an empty set.
    pub fn last(&self) -> Option<Vec<u8>> {
        self.inner.read().last()
    }

    /// Consume the wrapper, returning the unsynchronized tree.
    pub fn into_inner(self) -> ByteSet {
        self.inner.into_inner()
    }
}
