//! Contiguous dynamic array collection.

use std::cmp::Ordering;
use std::fmt;
use std::slice;

use crate::collection::{Collection, IndexedCollection};
use crate::error::{CollectionError, CollectionResult};

const DEFAULT_CAPACITY: usize = 16;

/// Growable array with contiguous storage and doubling growth.
///
/// Single-threaded; the positional contract matches the list variants
/// except at the last valid index, where `insert` splices before the
/// existing element like every other interior index (the list variants
/// append there instead). Predicate searches report the matched
/// position directly.
pub struct DynamicArray<T> {
    items: Vec<T>,
}

impl<T> DynamicArray<T> {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        DynamicArray {
            items: Vec::with_capacity(capacity),
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Doubles the backing storage when it is full.
    fn grow_if_full(&mut self) {
        if self.items.len() == self.items.capacity() {
            let additional = self.items.capacity().max(DEFAULT_CAPACITY);
            self.items.reserve_exact(additional);
        }
    }

    /// Appends at the back. Refuses `None`.
    pub fn add(&mut self, value: Option<T>) -> bool {
        match value {
            Some(value) => {
                self.grow_if_full();
                self.items.push(value);
                true
            }
            None => false,
        }
    }

    /// Inserts before the element at `index`, shifting the rest right.
    /// Valid positions are `[0, len)`. Refuses `None`.
    pub fn insert(&mut self, index: usize, value: Option<T>) -> bool {
        let value = match value {
            Some(value) => value,
            None => return false,
        };
        if index >= self.items.len() {
            return false;
        }
        self.grow_if_full();
        self.items.insert(index, value);
        true
    }

    pub fn get(&self, index: usize) -> CollectionResult<T>
    where
        T: Clone,
    {
        match self.items.get(index) {
            Some(value) => Ok(value.clone()),
            None => Err(CollectionError::IndexOutOfBounds {
                index,
                len: self.items.len(),
            }),
        }
    }

    pub fn set(&mut self, value: Option<T>, index: usize) -> bool {
        let value = match value {
            Some(value) => value,
            None => return false,
        };
        match self.items.get_mut(index) {
            Some(slot) => {
                *slot = value;
                true
            }
            None => false,
        }
    }

    pub fn remove_at(&mut self, index: usize) -> CollectionResult<T> {
        if index >= self.items.len() {
            return Err(CollectionError::IndexOutOfBounds {
                index,
                len: self.items.len(),
            });
        }
        Ok(self.items.remove(index))
    }

    pub fn remove_value(&mut self, value: Option<&T>) -> bool
    where
        T: PartialEq,
    {
        let value = match value {
            Some(value) => value,
            None => return false,
        };
        match self.index_of(value) {
            Some(index) => {
                self.items.remove(index);
                true
            }
            None => false,
        }
    }

    pub fn index_of(&self, value: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.items.iter().position(|v| v == value)
    }

    pub fn last_index_of(&self, value: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.items.iter().rposition(|v| v == value)
    }

    pub fn index_of_where<P>(&self, predicate: P) -> Option<usize>
    where
        P: FnMut(&T) -> bool,
    {
        self.items.iter().position(predicate)
    }

    pub fn last_index_of_where<P>(&self, predicate: P) -> Option<usize>
    where
        P: FnMut(&T) -> bool,
    {
        self.items.iter().rposition(predicate)
    }

    pub fn contains(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.index_of(value).is_some()
    }

    pub fn add_all<C>(&mut self, other: &C)
    where
        C: Collection<T> + ?Sized,
        T: Clone,
    {
        for value in other.to_vec() {
            self.add(Some(value));
        }
    }

    pub fn add_all_at<C>(&mut self, other: &C, index: usize)
    where
        C: Collection<T> + ?Sized,
        T: Clone,
    {
        let mut at = index;
        for value in other.to_vec() {
            self.insert(at, Some(value));
            at += 1;
        }
    }

    /// Removes every element equal to `value`, scanning back to front so
    /// removals do not disturb the positions still to visit.
    pub fn remove_all(&mut self, value: Option<&T>) -> bool
    where
        T: PartialEq,
    {
        let value = match value {
            Some(value) => value,
            None => return false,
        };
        let before = self.items.len();
        for index in (0..self.items.len()).rev() {
            if self.items[index] == *value {
                self.items.remove(index);
            }
        }
        before != self.items.len()
    }

    /// Removes every element satisfying `predicate`. Returns whether
    /// anything was removed.
    pub fn remove_if<P>(&mut self, mut predicate: P) -> bool
    where
        P: FnMut(&T) -> bool,
    {
        let before = self.items.len();
        for index in (0..self.items.len()).rev() {
            if predicate(&self.items[index]) {
                self.items.remove(index);
            }
        }
        before != self.items.len()
    }

    /// Bubble sort with shrinking bound and no-swap early exit; same
    /// algorithm contract as the list variants.
    pub fn sort<F>(&mut self, mut compare: F)
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        if self.items.len() < 2 {
            return;
        }
        let mut bound = self.items.len() - 1;
        loop {
            let mut swapped = false;
            for i in 0..bound {
                if compare(&self.items[i], &self.items[i + 1]) == Ordering::Greater {
                    self.items.swap(i, i + 1);
                    swapped = true;
                }
            }
            if !swapped {
                break;
            }
            bound -= 1;
        }
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.items.to_vec()
    }

    /// Live borrowing iterator over the backing storage.
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.items.iter()
    }
}

impl<T> Default for DynamicArray<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for DynamicArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.items.iter()).finish()
    }
}

impl<T> FromIterator<T> for DynamicArray<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut array = Self::new();
        array.extend(iter);
        array
    }
}

impl<T> Extend<T> for DynamicArray<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.grow_if_full();
            self.items.push(value);
        }
    }
}

impl<'a, T> IntoIterator for &'a DynamicArray<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> slice::Iter<'a, T> {
        self.items.iter()
    }
}

impl<T> Collection<T> for DynamicArray<T> {
    fn len(&self) -> usize {
        DynamicArray::len(self)
    }

    fn contains(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        DynamicArray::contains(self, value)
    }

    fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        DynamicArray::to_vec(self)
    }

    fn clear(&mut self) {
        DynamicArray::clear(self)
    }
}

impl<T> IndexedCollection<T> for DynamicArray<T> {
    fn add(&mut self, value: Option<T>) -> bool {
        DynamicArray::add(self, value)
    }

    fn insert(&mut self, index: usize, value: Option<T>) -> bool {
        DynamicArray::insert(self, index, value)
    }

    fn get(&self, index: usize) -> CollectionResult<T>
    where
        T: Clone,
    {
        DynamicArray::get(self, index)
    }

    fn set(&mut self, value: Option<T>, index: usize) -> bool {
        DynamicArray::set(self, value, index)
    }

    fn remove_at(&mut self, index: usize) -> CollectionResult<T> {
        DynamicArray::remove_at(self, index)
    }

    fn remove_value(&mut self, value: Option<&T>) -> bool
    where
        T: PartialEq,
    {
        DynamicArray::remove_value(self, value)
    }

    fn index_of(&self, value: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        DynamicArray::index_of(self, value)
    }

    fn last_index_of(&self, value: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        DynamicArray::last_index_of(self, value)
    }

    fn index_of_where<P>(&self, predicate: P) -> Option<usize>
    where
        P: FnMut(&T) -> bool,
        T: PartialEq,
    {
        DynamicArray::index_of_where(self, predicate)
    }

    fn last_index_of_where<P>(&self, predicate: P) -> Option<usize>
    where
        P: FnMut(&T) -> bool,
        T: PartialEq,
    {
        DynamicArray::last_index_of_where(self, predicate)
    }

    fn add_all<C>(&mut self, other: &C)
    where
        C: Collection<T> + ?Sized,
        T: Clone,
    {
        DynamicArray::add_all(self, other)
    }

    fn add_all_at<C>(&mut self, other: &C, index: usize)
    where
        C: Collection<T> + ?Sized,
        T: Clone,
    {
        DynamicArray::add_all_at(self, other, index)
    }

    fn remove_all(&mut self, value: Option<&T>) -> bool
    where
        T: PartialEq,
    {
        DynamicArray::remove_all(self, value)
    }

    fn remove_if<P>(&mut self, predicate: P) -> bool
    where
        P: FnMut(&T) -> bool,
    {
        DynamicArray::remove_if(self, predicate)
    }

    fn sort<F>(&mut self, compare: F)
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        DynamicArray::sort(self, compare)
    }
}
