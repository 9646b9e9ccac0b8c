//! Byteset - In-Memory Ordered Byte-Key Set
//!
//! This crate provides an ordered set of opaque byte-string keys backed by
//! a B-tree: membership testing, insertion, deletion, and a family of
//! ordered traversals (full, reverse, pivot-bounded, prefix-bounded) with
//! cooperative early termination.

pub mod btree;
pub mod compare;
pub mod encoding;
pub mod error;
pub mod sync;

pub use btree::ByteSet;
pub use compare::{compare_bytes, Comparator};
pub use encoding::{value_to_bytes, KeyEncode};
pub use error::ByteSetError;
pub use sync::SharedByteSet;
