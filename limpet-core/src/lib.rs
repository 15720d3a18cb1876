//! Coarse-lock concurrent collections.
//!
//! The centerpiece is [`BlockingList`], a doubly-linked list with
//! array-like positional access whose every structural operation is
//! serialized behind a single exclusive gate. [`LinkedList`] is the
//! unsynchronized variant with identical positional semantics, and
//! [`DynamicArray`] / [`ChainedHashSet`] round out the collection set.
//!
//! All indexed types speak the same contract, [`IndexedCollection`],
//! so generic code (and the shared test suites in [`common_tests`])
//! runs unchanged against any of them.

pub mod collection;
pub mod common_tests;
pub mod data_structures;
pub mod error;

pub use collection::{Collection, IndexedCollection};
pub use data_structures::{BlockingList, ChainedHashSet, DynamicArray, LinkedList, SnapshotIter};
pub use error::{CollectionError, CollectionResult};
