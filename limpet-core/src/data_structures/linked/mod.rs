//! Doubly-linked list variants.
//!
//! [`BlockingList`] is the concurrent core: every structural operation is
//! serialized behind one exclusive gate. [`LinkedList`] is the
//! unsynchronized baseline with identical positional semantics. Both are
//! thin shells over [`chain::LinkedChain`], which owns the actual link
//! manipulation on top of an arena of handle-addressed nodes.

mod arena;
mod blocking_list;
mod chain;
mod linked_list;
mod snapshot_iter;

pub use blocking_list::BlockingList;
pub use linked_list::{Iter, LinkedList};
pub use snapshot_iter::SnapshotIter;
