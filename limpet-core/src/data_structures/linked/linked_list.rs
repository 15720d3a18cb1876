//! Unsynchronized doubly-linked list with positional access.

use std::cmp::Ordering;
use std::fmt;
use std::iter::FusedIterator;

use super::chain::{LinkedChain, Values};
use crate::collection::{Collection, IndexedCollection};
use crate::error::{CollectionError, CollectionResult};

/// Doubly-linked list with array-like indexed access and no internal
/// synchronization.
///
/// This is the single-threaded baseline for [`BlockingList`]: the two
/// share one chain implementation, so their positional semantics are
/// identical operation for operation; only the admission discipline
/// differs. Unlike the blocking variant, iteration here borrows the
/// list directly instead of snapshotting it.
///
/// [`BlockingList`]: super::BlockingList
pub struct LinkedList<T> {
    chain: LinkedChain<T>,
}

impl<T> LinkedList<T> {
    pub fn new() -> Self {
        LinkedList {
            chain: LinkedChain::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.chain.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chain.len() == 0
    }

    /// Appends at the back. Refuses `None`.
    pub fn add(&mut self, value: Option<T>) -> bool {
        match value {
            Some(value) => {
                self.chain.push_back(value);
                true
            }
            None => false,
        }
    }

    /// Inserts at an existing position; see [`IndexedCollection::insert`]
    /// for the boundary rules. Refuses `None`.
    pub fn insert(&mut self, index: usize, value: Option<T>) -> bool {
        match value {
            Some(value) => self.chain.insert_at(index, value),
            None => false,
        }
    }

    pub fn get(&self, index: usize) -> CollectionResult<T>
    where
        T: Clone,
    {
        match self.chain.get(index) {
            Some(value) => Ok(value.clone()),
            None => Err(CollectionError::IndexOutOfBounds {
                index,
                len: self.chain.len(),
            }),
        }
    }

    pub fn set(&mut self, value: Option<T>, index: usize) -> bool {
        match value {
            Some(value) => self.chain.set(index, value),
            None => false,
        }
    }

    pub fn remove_at(&mut self, index: usize) -> CollectionResult<T> {
        match self.chain.remove_at(index) {
            Some(value) => Ok(value),
            None => Err(CollectionError::IndexOutOfBounds {
                index,
                len: self.chain.len(),
            }),
        }
    }

    pub fn remove_value(&mut self, value: Option<&T>) -> bool
    where
        T: PartialEq,
    {
        let value = match value {
            Some(value) => value,
            None => return false,
        };
        match self.chain.index_of(value) {
            Some(index) => {
                self.chain.remove_at(index);
                true
            }
            None => false,
        }
    }

    pub fn index_of(&self, value: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.chain.index_of(value)
    }

    pub fn last_index_of(&self, value: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.chain.last_index_of(value)
    }

    pub fn index_of_where<P>(&self, predicate: P) -> Option<usize>
    where
        P: FnMut(&T) -> bool,
        T: PartialEq,
    {
        self.chain.index_of_where(predicate)
    }

    pub fn last_index_of_where<P>(&self, predicate: P) -> Option<usize>
    where
        P: FnMut(&T) -> bool,
        T: PartialEq,
    {
        self.chain.last_index_of_where(predicate)
    }

    pub fn contains(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.chain.index_of(value).is_some()
    }

    pub fn add_all<C>(&mut self, other: &C)
    where
        C: Collection<T> + ?Sized,
        T: Clone,
    {
        for value in other.to_vec() {
            self.chain.push_back(value);
        }
    }

    pub fn add_all_at<C>(&mut self, other: &C, index: usize)
    where
        C: Collection<T> + ?Sized,
        T: Clone,
    {
        let mut at = index;
        for value in other.to_vec() {
            self.chain.insert_at(at, value);
            at += 1;
        }
    }

    pub fn remove_all(&mut self, value: Option<&T>) -> bool
    where
        T: PartialEq,
    {
        match value {
            Some(value) => self.chain.remove_all(value),
            None => false,
        }
    }

    pub fn remove_if<P>(&mut self, predicate: P) -> bool
    where
        P: FnMut(&T) -> bool,
    {
        self.chain.remove_if(predicate)
    }

    pub fn sort<F>(&mut self, compare: F)
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        self.chain.sort(compare)
    }

    pub fn clear(&mut self) {
        self.chain.clear()
    }

    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.chain.to_vec()
    }

    /// Borrowing head-to-tail iterator.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            values: self.chain.values(),
        }
    }

    /// Walks the chain verifying link reciprocity and length agreement.
    pub fn verify_links(&self) -> bool {
        self.chain.is_consistent()
    }
}

impl<T> Default for LinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for LinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.chain.values()).finish()
    }
}

impl<T> FromIterator<T> for LinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

impl<T> Extend<T> for LinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.chain.push_back(value);
        }
    }
}

impl<'a, T> IntoIterator for &'a LinkedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

/// Borrowing iterator over a [`LinkedList`].
pub struct Iter<'a, T> {
    values: Values<'a, T>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        self.values.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.values.size_hint()
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}
impl<T> FusedIterator for Iter<'_, T> {}

impl<T> Collection<T> for LinkedList<T> {
    fn len(&self) -> usize {
        LinkedList::len(self)
    }

    fn contains(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        LinkedList::contains(self, value)
    }

    fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        LinkedList::to_vec(self)
    }

    fn clear(&mut self) {
        LinkedList::clear(self)
    }
}

impl<T> IndexedCollection<T> for LinkedList<T> {
    fn add(&mut self, value: Option<T>) -> bool {
        LinkedList::add(self, value)
    }

    fn insert(&mut self, index: usize, value: Option<T>) -> bool {
        LinkedList::insert(self, index, value)
    }

    fn get(&self, index: usize) -> CollectionResult<T>
    where
        T: Clone,
    {
        LinkedList::get(self, index)
    }

    fn set(&mut self, value: Option<T>, index: usize) -> bool {
        LinkedList::set(self, value, index)
    }

    fn remove_at(&mut self, index: usize) -> CollectionResult<T> {
        LinkedList::remove_at(self, index)
    }

    fn remove_value(&mut self, value: Option<&T>) -> bool
    where
        T: PartialEq,
    {
        LinkedList::remove_value(self, value)
    }

    fn index_of(&self, value: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        LinkedList::index_of(self, value)
    }

    fn last_index_of(&self, value: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        LinkedList::last_index_of(self, value)
    }

    fn index_of_where<P>(&self, predicate: P) -> Option<usize>
    where
        P: FnMut(&T) -> bool,
        T: PartialEq,
    {
        LinkedList::index_of_where(self, predicate)
    }

    fn last_index_of_where<P>(&self, predicate: P) -> Option<usize>
    where
        P: FnMut(&T) -> bool,
        T: PartialEq,
    {
        LinkedList::last_index_of_where(self, predicate)
    }

    fn add_all<C>(&mut self, other: &C)
    where
        C: Collection<T> + ?Sized,
        T: Clone,
    {
        LinkedList::add_all(self, other)
    }

    fn add_all_at<C>(&mut self, other: &C, index: usize)
    where
        C: Collection<T> + ?Sized,
        T: Clone,
    {
        LinkedList::add_all_at(self, other, index)
    }

    fn remove_all(&mut self, value: Option<&T>) -> bool
    where
        T: PartialEq,
    {
        LinkedList::remove_all(self, value)
    }

    fn remove_if<P>(&mut self, predicate: P) -> bool
    where
        P: FnMut(&T) -> bool,
    {
        LinkedList::remove_if(self, predicate)
    }

    fn sort<F>(&mut self, compare: F)
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        LinkedList::sort(self, compare)
    }
}
