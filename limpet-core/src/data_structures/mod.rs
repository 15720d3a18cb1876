//! Collection data structures.
//!
//! - [`linked`] - the blocking list core and its unsynchronized baseline
//! - [`array`] - contiguous dynamic array
//! - [`hash`] - chained hash set

pub mod array;
pub mod hash;
pub mod linked;

pub use array::DynamicArray;
pub use hash::ChainedHashSet;
pub use linked::{BlockingList, LinkedList, SnapshotIter};
