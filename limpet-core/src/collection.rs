//! Contract traits for the collection types.
//!
//! # Organization
//!
//! ```text
//! User Code
//!    ↓ uses
//! IndexedCollection (positional contract)
//!    ↑ implemented by
//! DynamicArray, LinkedList, BlockingList
//!    ↑ extends
//! Collection (cardinality + membership + snapshot)
//!    ↑ also implemented by
//! ChainedHashSet
//! ```
//!
//! [`Collection`] doubles as the *source* abstraction for the bulk-add
//! operations: `add_all` accepts any implementor, not only another
//! instance of the same structure.
//!
//! # Absent values
//!
//! Operations that carry a soft-failure channel take `Option<T>` (or
//! `Option<&T>`) and refuse `None` with `false`, leaving the structure
//! untouched. A bad index, by contrast, is a hard failure reported as
//! [`CollectionError`]. Implementors must keep the two channels apart.

use std::cmp::Ordering;

use crate::error::CollectionResult;

/// Base contract: cardinality, membership, and an ordered snapshot.
pub trait Collection<T> {
    /// Number of live elements.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether an element equal to `value` is present.
    fn contains(&self, value: &T) -> bool
    where
        T: PartialEq;

    /// Ordered snapshot of every element.
    ///
    /// The order is the collection's own iteration order; for indexed
    /// collections that is logical index order.
    fn to_vec(&self) -> Vec<T>
    where
        T: Clone;

    /// Removes every element, restoring the empty state.
    fn clear(&mut self);
}

/// Positional contract shared by the array and list collections.
///
/// Logical index `i` denotes the element reached by `i` forward steps
/// from the front, `0 <= i < len`.
pub trait IndexedCollection<T>: Collection<T> {
    /// Appends `value` at the back. Refuses `None`.
    fn add(&mut self, value: Option<T>) -> bool;

    /// Inserts `value` at an existing position.
    ///
    /// Valid positions are `[0, len)`; `index == len` is refused even
    /// though it would read as an append. Refuses `None`.
    fn insert(&mut self, index: usize, value: Option<T>) -> bool;

    /// Copy of the element at `index`.
    fn get(&self, index: usize) -> CollectionResult<T>
    where
        T: Clone;

    /// Overwrites the element at `index` in place. Refuses `None` and a
    /// bad index with `false`.
    fn set(&mut self, value: Option<T>, index: usize) -> bool;

    /// Removes and returns the element at `index`.
    fn remove_at(&mut self, index: usize) -> CollectionResult<T>;

    /// Removes the first element equal to `value` (forward scan).
    /// `false` when `value` is `None` or no match exists.
    fn remove_value(&mut self, value: Option<&T>) -> bool
    where
        T: PartialEq;

    /// Index of the first element equal to `value`.
    fn index_of(&self, value: &T) -> Option<usize>
    where
        T: PartialEq;

    /// Index of the last element equal to `value`.
    fn last_index_of(&self, value: &T) -> Option<usize>
    where
        T: PartialEq;

    /// Index of the first element satisfying `predicate`.
    ///
    /// The list variants recompute the matched element's index through
    /// [`index_of`] on its value, so when equal-comparing elements are
    /// distinguished by the predicate, the earliest equal element's
    /// index is returned there; [`DynamicArray`] reports the matched
    /// position directly. See the implementors' docs.
    ///
    /// [`index_of`]: IndexedCollection::index_of
    /// [`DynamicArray`]: crate::DynamicArray
    fn index_of_where<P>(&self, predicate: P) -> Option<usize>
    where
        P: FnMut(&T) -> bool,
        T: PartialEq;

    /// Index of the last element satisfying `predicate`; same
    /// per-implementor index recomputation as
    /// [`index_of_where`](IndexedCollection::index_of_where).
    fn last_index_of_where<P>(&self, predicate: P) -> Option<usize>
    where
        P: FnMut(&T) -> bool,
        T: PartialEq;

    /// Appends every element of `other`, in `other`'s order.
    fn add_all<C>(&mut self, other: &C)
    where
        C: Collection<T> + ?Sized,
        T: Clone;

    /// Inserts `other`'s elements starting at `index`, each subsequent
    /// element one position further along, so they land as a contiguous
    /// block in their original relative order.
    ///
    /// Each element goes through [`insert`]; one refused by the bounds
    /// check is skipped without aborting the rest.
    ///
    /// [`insert`]: IndexedCollection::insert
    fn add_all_at<C>(&mut self, other: &C, index: usize)
    where
        C: Collection<T> + ?Sized,
        T: Clone;

    /// Removes every element equal to `value`. `false` when `value` is
    /// `None` or nothing matched.
    fn remove_all(&mut self, value: Option<&T>) -> bool
    where
        T: PartialEq;

    /// Removes every element satisfying `predicate` (forward scan).
    /// Returns whether anything was removed.
    fn remove_if<P>(&mut self, predicate: P) -> bool
    where
        P: FnMut(&T) -> bool;

    /// In-place comparator-driven sort.
    ///
    /// Bubble sort over adjacent positions with a shrinking upper bound
    /// and a no-swap early exit. Only `Ordering::Greater` swaps, so
    /// ties keep their relative order. The quadratic algorithm is part
    /// of the contract (equivalence-tested), not an implementation
    /// detail to swap for a faster sort.
    fn sort<F>(&mut self, compare: F)
    where
        F: FnMut(&T, &T) -> Ordering;
}
