//! Index-addressable doubly-linked list behind a single exclusive gate.

use std::cmp::Ordering;
use std::fmt;
use std::sync::atomic::{AtomicUsize, Ordering as AtomicOrdering};
use std::sync::{Mutex, MutexGuard};

use super::chain::LinkedChain;
use super::snapshot_iter::SnapshotIter;
use crate::collection::{Collection, IndexedCollection};
use crate::error::{CollectionError, CollectionResult};

/// Doubly-linked list with positional access, safe for concurrent use
/// from any number of threads.
///
/// # Locking discipline
///
/// One `Mutex` guards the whole of the link structure: arena, head,
/// tail, and chain length. Every operation that traverses or mutates the
/// chain acquires it exactly once, at entry, and holds it for the whole
/// operation, so composite operations ([`sort`], [`add_all_at`],
/// [`remove_if`], ...) are atomic with respect to every other gated
/// operation. A blocked caller waits indefinitely; there is no timeout
/// or cancellation, and no fairness beyond what the platform mutex
/// provides.
///
/// The chain primitives themselves live in `LinkedChain` and never
/// lock, so a composite operation composes them under its single
/// acquisition without any re-entrant acquisition to deadlock on.
///
/// # Size counter
///
/// [`len`] and [`is_empty`] read an atomic mirror of the chain length
/// without taking the gate. Against an in-flight structural change from
/// another thread they are only approximately consistent; they are fast
/// cardinality checks, not synchronization points.
///
/// # Iteration
///
/// [`iter`] copies the elements out under the gate and iterates the
/// detached copy, so an iteration session neither observes later
/// changes nor blocks other threads for its duration.
///
/// [`sort`]: BlockingList::sort
/// [`add_all_at`]: BlockingList::add_all_at
/// [`remove_if`]: BlockingList::remove_if
/// [`len`]: BlockingList::len
/// [`is_empty`]: BlockingList::is_empty
/// [`iter`]: BlockingList::iter
pub struct BlockingList<T> {
    chain: Mutex<LinkedChain<T>>,
    len: AtomicUsize,
}

impl<T> BlockingList<T> {
    pub fn new() -> Self {
        BlockingList {
            chain: Mutex::new(LinkedChain::new()),
            len: AtomicUsize::new(0),
        }
    }

    fn locked(&self) -> MutexGuard<'_, LinkedChain<T>> {
        self.chain.lock().unwrap()
    }

    /// Refreshes the lock-free length mirror. Call with the gate held,
    /// after any structural change.
    fn publish_len(&self, chain: &LinkedChain<T>) {
        self.len.store(chain.len(), AtomicOrdering::Release);
    }

    /// Element count, read without the gate.
    pub fn len(&self) -> usize {
        self.len.load(AtomicOrdering::Acquire)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Appends at the back. Refuses `None`.
    pub fn add(&self, value: Option<T>) -> bool {
        let value = match value {
            Some(value) => value,
            None => return false,
        };
        let mut chain = self.locked();
        chain.push_back(value);
        self.publish_len(&chain);
        true
    }

    /// Inserts at an existing position; see [`IndexedCollection::insert`]
    /// for the boundary rules. Refuses `None`.
    pub fn insert(&self, index: usize, value: Option<T>) -> bool {
        let value = match value {
            Some(value) => value,
            None => return false,
        };
        let mut chain = self.locked();
        let inserted = chain.insert_at(index, value);
        if inserted {
            self.publish_len(&chain);
        }
        inserted
    }

    /// Copy of the element at `index`.
    pub fn get(&self, index: usize) -> CollectionResult<T>
    where
        T: Clone,
    {
        let chain = self.locked();
        match chain.get(index) {
            Some(value) => Ok(value.clone()),
            None => Err(CollectionError::IndexOutOfBounds {
                index,
                len: chain.len(),
            }),
        }
    }

    /// Overwrites the element at `index` in place (no relinking).
    pub fn set(&self, value: Option<T>, index: usize) -> bool {
        let value = match value {
            Some(value) => value,
            None => return false,
        };
        self.locked().set(index, value)
    }

    /// Removes and returns the element at `index`.
    pub fn remove_at(&self, index: usize) -> CollectionResult<T> {
        let mut chain = self.locked();
        match chain.remove_at(index) {
            Some(value) => {
                self.publish_len(&chain);
                Ok(value)
            }
            None => Err(CollectionError::IndexOutOfBounds {
                index,
                len: chain.len(),
            }),
        }
    }

    /// Removes the first element equal to `value`. `false` when `value`
    /// is `None` or no match exists.
    pub fn remove_value(&self, value: Option<&T>) -> bool
    where
        T: PartialEq,
    {
        let value = match value {
            Some(value) => value,
            None => return false,
        };
        let mut chain = self.locked();
        match chain.index_of(value) {
            Some(index) => {
                chain.remove_at(index);
                self.publish_len(&chain);
                true
            }
            None => false,
        }
    }

    pub fn index_of(&self, value: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.locked().index_of(value)
    }

    pub fn last_index_of(&self, value: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.locked().last_index_of(value)
    }

    /// Forward predicate search; the result index is recomputed from the
    /// matched value, see [`IndexedCollection::index_of_where`].
    pub fn index_of_where<P>(&self, predicate: P) -> Option<usize>
    where
        P: FnMut(&T) -> bool,
        T: PartialEq,
    {
        self.locked().index_of_where(predicate)
    }

    pub fn last_index_of_where<P>(&self, predicate: P) -> Option<usize>
    where
        P: FnMut(&T) -> bool,
        T: PartialEq,
    {
        self.locked().last_index_of_where(predicate)
    }

    pub fn contains(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.index_of(value).is_some()
    }

    /// Appends every element of `other` under one gate acquisition.
    ///
    /// The source is snapshotted before the gate is taken, so a source
    /// that is itself gated cannot deadlock against this list.
    pub fn add_all<C>(&self, other: &C)
    where
        C: Collection<T> + ?Sized,
        T: Clone,
    {
        let values = other.to_vec();
        let mut chain = self.locked();
        for value in values {
            chain.push_back(value);
        }
        self.publish_len(&chain);
    }

    /// Inserts `other`'s elements as a contiguous block starting at
    /// `index`, atomically; see [`IndexedCollection::add_all_at`].
    pub fn add_all_at<C>(&self, other: &C, index: usize)
    where
        C: Collection<T> + ?Sized,
        T: Clone,
    {
        let values = other.to_vec();
        let mut chain = self.locked();
        let mut at = index;
        for value in values {
            chain.insert_at(at, value);
            at += 1;
        }
        self.publish_len(&chain);
    }

    /// Removes every element equal to `value` under one gate
    /// acquisition. `false` when `value` is `None` or nothing matched.
    pub fn remove_all(&self, value: Option<&T>) -> bool
    where
        T: PartialEq,
    {
        let value = match value {
            Some(value) => value,
            None => return false,
        };
        let mut chain = self.locked();
        let removed = chain.remove_all(value);
        self.publish_len(&chain);
        removed
    }

    /// Removes every element satisfying `predicate` under one gate
    /// acquisition. Returns whether anything was removed.
    pub fn remove_if<P>(&self, predicate: P) -> bool
    where
        P: FnMut(&T) -> bool,
    {
        let mut chain = self.locked();
        let removed = chain.remove_if(predicate);
        self.publish_len(&chain);
        removed
    }

    /// Sorts in place under one gate acquisition; no other gated
    /// operation can observe a partially sorted list. See
    /// [`IndexedCollection::sort`] for the algorithm contract.
    pub fn sort<F>(&self, compare: F)
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        self.locked().sort(compare)
    }

    pub fn clear(&self) {
        let mut chain = self.locked();
        chain.clear();
        self.publish_len(&chain);
    }

    /// Atomic head-to-tail snapshot.
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.locked().to_vec()
    }

    /// Snapshot iterator: the copy is taken under the gate, the
    /// iteration runs detached from it.
    pub fn iter(&self) -> SnapshotIter<T>
    where
        T: Clone,
    {
        SnapshotIter::new(self.to_vec())
    }

    /// Walks the chain under the gate verifying link reciprocity and
    /// length agreement. Intended for tests that hammer the list from
    /// many threads and then check nothing was torn.
    pub fn verify_links(&self) -> bool {
        let chain = self.locked();
        chain.is_consistent() && chain.len() == self.len.load(AtomicOrdering::Acquire)
    }
}

impl<T> Default for BlockingList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for BlockingList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let chain = self.locked();
        f.debug_list().entries(chain.values()).finish()
    }
}

impl<T> FromIterator<T> for BlockingList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let list = Self::new();
        {
            let mut chain = list.locked();
            for value in iter {
                chain.push_back(value);
            }
            list.publish_len(&chain);
        }
        list
    }
}

impl<T: Clone> IntoIterator for &BlockingList<T> {
    type Item = T;
    type IntoIter = SnapshotIter<T>;

    fn into_iter(self) -> SnapshotIter<T> {
        self.iter()
    }
}

impl<T> Collection<T> for BlockingList<T> {
    fn len(&self) -> usize {
        BlockingList::len(self)
    }

    fn contains(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        BlockingList::contains(self, value)
    }

    fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        BlockingList::to_vec(self)
    }

    fn clear(&mut self) {
        BlockingList::clear(self)
    }
}

impl<T> IndexedCollection<T> for BlockingList<T> {
    fn add(&mut self, value: Option<T>) -> bool {
        BlockingList::add(self, value)
    }

    fn insert(&mut self, index: usize, value: Option<T>) -> bool {
        BlockingList::insert(self, index, value)
    }

    fn get(&self, index: usize) -> CollectionResult<T>
    where
        T: Clone,
    {
        BlockingList::get(self, index)
    }

    fn set(&mut self, value: Option<T>, index: usize) -> bool {
        BlockingList::set(self, value, index)
    }

    fn remove_at(&mut self, index: usize) -> CollectionResult<T> {
        BlockingList::remove_at(self, index)
    }

    fn remove_value(&mut self, value: Option<&T>) -> bool
    where
        T: PartialEq,
    {
        BlockingList::remove_value(self, value)
    }

    fn index_of(&self, value: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        BlockingList::index_of(self, value)
    }

    fn last_index_of(&self, value: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        BlockingList::last_index_of(self, value)
    }

    fn index_of_where<P>(&self, predicate: P) -> Option<usize>
    where
        P: FnMut(&T) -> bool,
        T: PartialEq,
    {
        BlockingList::index_of_where(self, predicate)
    }

    fn last_index_of_where<P>(&self, predicate: P) -> Option<usize>
    where
        P: FnMut(&T) -> bool,
        T: PartialEq,
    {
        BlockingList::last_index_of_where(self, predicate)
    }

    fn add_all<C>(&mut self, other: &C)
    where
        C: Collection<T> + ?Sized,
        T: Clone,
    {
        BlockingList::add_all(self, other)
    }

    fn add_all_at<C>(&mut self, other: &C, index: usize)
    where
        C: Collection<T> + ?Sized,
        T: Clone,
    {
        BlockingList::add_all_at(self, other, index)
    }

    fn remove_all(&mut self, value: Option<&T>) -> bool
    where
        T: PartialEq,
    {
        BlockingList::remove_all(self, value)
    }

    fn remove_if<P>(&mut self, predicate: P) -> bool
    where
        P: FnMut(&T) -> bool,
    {
        BlockingList::remove_if(self, predicate)
    }

    fn sort<F>(&mut self, compare: F)
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        BlockingList::sort(self, compare)
    }
}
