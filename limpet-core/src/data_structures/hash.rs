//! Chained hash set.

use std::collections::hash_map::DefaultHasher;
use std::fmt;
use std::hash::{Hash, Hasher};

use super::linked::SnapshotIter;
use crate::collection::Collection;

const DEFAULT_CAPACITY: usize = 16;
const GROWTH_STEP: usize = 16;
const DEFAULT_LOAD_FACTOR: f64 = 0.75;

/// Hash set with separate chaining.
///
/// Buckets are plain vectors; a value hashes to bucket
/// `hash % capacity`. When the live count exceeds
/// `capacity * load_factor` the table grows by [`GROWTH_STEP`] buckets
/// and every element is redistributed. Single-threaded.
pub struct ChainedHashSet<T> {
    buckets: Vec<Vec<T>>,
    len: usize,
    load_factor: f64,
}

impl<T> ChainedHashSet<T> {
    pub fn new() -> Self {
        Self::with_capacity_and_load_factor(DEFAULT_CAPACITY, DEFAULT_LOAD_FACTOR)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_and_load_factor(capacity, DEFAULT_LOAD_FACTOR)
    }

    pub fn with_capacity_and_load_factor(capacity: usize, load_factor: f64) -> Self {
        let capacity = capacity.max(1);
        let mut buckets = Vec::with_capacity(capacity);
        buckets.resize_with(capacity, Vec::new);
        ChainedHashSet {
            buckets,
            len: 0,
            load_factor,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn capacity(&self) -> usize {
        self.buckets.len()
    }

    fn bucket_index(&self, value: &T) -> usize
    where
        T: Hash,
    {
        let mut hasher = DefaultHasher::new();
        value.hash(&mut hasher);
        (hasher.finish() as usize) % self.buckets.len()
    }

    /// Grows the table by [`GROWTH_STEP`] buckets and rehashes every
    /// element into its new bucket.
    fn redistribute(&mut self)
    where
        T: Hash,
    {
        let new_capacity = self.buckets.len() + GROWTH_STEP;
        let mut new_buckets: Vec<Vec<T>> = Vec::with_capacity(new_capacity);
        new_buckets.resize_with(new_capacity, Vec::new);
        for bucket in self.buckets.drain(..) {
            for value in bucket {
                let mut hasher = DefaultHasher::new();
                value.hash(&mut hasher);
                let index = (hasher.finish() as usize) % new_capacity;
                new_buckets[index].push(value);
            }
        }
        self.buckets = new_buckets;
    }

    /// Adds `value` unless an equal element is already present.
    pub fn insert(&mut self, value: T) -> bool
    where
        T: Hash + PartialEq,
    {
        if self.contains(&value) {
            return false;
        }
        if (self.buckets.len() as f64) * self.load_factor < self.len as f64 {
            self.redistribute();
        }
        let index = self.bucket_index(&value);
        self.buckets[index].push(value);
        self.len += 1;
        true
    }

    pub fn remove(&mut self, value: &T) -> bool
    where
        T: Hash + PartialEq,
    {
        let index = self.bucket_index(value);
        match self.buckets[index].iter().position(|v| v == value) {
            Some(pos) => {
                self.buckets[index].remove(pos);
                self.len -= 1;
                true
            }
            None => false,
        }
    }

    pub fn contains(&self, value: &T) -> bool
    where
        T: Hash + PartialEq,
    {
        let index = self.bucket_index(value);
        self.buckets[index].iter().any(|v| v == value)
    }

    /// Inserts every element of `other`; `true` only when every one was
    /// newly added.
    pub fn add_all<C>(&mut self, other: &C) -> bool
    where
        C: Collection<T> + ?Sized,
        T: Hash + PartialEq + Clone,
    {
        let mut all_new = true;
        for value in other.to_vec() {
            if !self.insert(value) {
                all_new = false;
            }
        }
        all_new
    }

    /// Removes every element of `other`; `true` only when every one was
    /// present.
    pub fn remove_all<C>(&mut self, other: &C) -> bool
    where
        C: Collection<T> + ?Sized,
        T: Hash + PartialEq + Clone,
    {
        let mut all_present = true;
        for value in other.to_vec() {
            if !self.remove(&value) {
                all_present = false;
            }
        }
        all_present
    }

    pub fn contains_all<C>(&self, other: &C) -> bool
    where
        C: Collection<T> + ?Sized,
        T: Hash + PartialEq + Clone,
    {
        other.to_vec().iter().all(|value| self.contains(value))
    }

    /// Keeps only the members of `other`, rebuilding the table. Returns
    /// whether anything was dropped.
    pub fn retain_all<C>(&mut self, other: &C) -> bool
    where
        C: Collection<T> + ?Sized,
        T: Hash + PartialEq + Clone,
    {
        let keep = other.to_vec();
        self.rebuild_keeping(|value| keep.contains(value))
    }

    /// Removes every element satisfying `predicate`, rebuilding the
    /// table. Returns whether anything was removed.
    pub fn remove_if<P>(&mut self, mut predicate: P) -> bool
    where
        P: FnMut(&T) -> bool,
        T: Hash + PartialEq,
    {
        self.rebuild_keeping(|value| !predicate(value))
    }

    fn rebuild_keeping<K>(&mut self, mut keep: K) -> bool
    where
        K: FnMut(&T) -> bool,
        T: Hash + PartialEq,
    {
        let before = self.len;
        let capacity = self.buckets.len();
        let old_buckets = std::mem::take(&mut self.buckets);
        self.buckets.resize_with(capacity, Vec::new);
        self.len = 0;
        for bucket in old_buckets {
            for value in bucket {
                if keep(&value) {
                    let index = self.bucket_index(&value);
                    self.buckets[index].push(value);
                    self.len += 1;
                }
            }
        }
        before != self.len
    }

    pub fn clear(&mut self) {
        for bucket in &mut self.buckets {
            bucket.clear();
        }
        self.len = 0;
    }

    /// Snapshot of every element in bucket order.
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        let mut out = Vec::with_capacity(self.len);
        for bucket in &self.buckets {
            out.extend(bucket.iter().cloned());
        }
        out
    }

    /// Snapshot iterator in bucket order.
    pub fn iter(&self) -> SnapshotIter<T>
    where
        T: Clone,
    {
        SnapshotIter::new(self.to_vec())
    }
}

impl<T> Default for ChainedHashSet<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for ChainedHashSet<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set()
            .entries(self.buckets.iter().flatten())
            .finish()
    }
}

impl<T: Hash + PartialEq> FromIterator<T> for ChainedHashSet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut set = Self::new();
        for value in iter {
            set.insert(value);
        }
        set
    }
}

impl<T: Hash + PartialEq> Collection<T> for ChainedHashSet<T> {
    fn len(&self) -> usize {
        ChainedHashSet::len(self)
    }

    fn contains(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        ChainedHashSet::contains(self, value)
    }

    fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        ChainedHashSet::to_vec(self)
    }

    fn clear(&mut self) {
        ChainedHashSet::clear(self)
    }
}
