//! Unsynchronized doubly-linked chain over a node arena.
//!
//! This is the single source of truth for the positional semantics shared
//! by [`LinkedList`] and [`BlockingList`]: both wrap a `LinkedChain` and
//! differ only in how callers are admitted to it. Nothing here takes a
//! lock; every method assumes the caller already holds whatever exclusion
//! the surrounding type requires, so locked contexts can compose these
//! helpers without re-entrant acquisition.
//!
//! [`LinkedList`]: super::LinkedList
//! [`BlockingList`]: super::BlockingList

use std::cmp::Ordering;
use std::iter::FusedIterator;

use super::arena::{NodeArena, NodeHandle};

pub(crate) struct LinkedChain<T> {
    arena: NodeArena<T>,
    head: Option<NodeHandle>,
    tail: Option<NodeHandle>,
    len: usize,
}

impl<T> LinkedChain<T> {
    pub fn new() -> Self {
        LinkedChain {
            arena: NodeArena::new(),
            head: None,
            tail: None,
            len: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    fn in_bounds(&self, index: usize) -> bool {
        index < self.len
    }

    /// Resolves a logical index to its node, walking from whichever end
    /// is nearer. Callers must have bounds-checked `index` already.
    fn node_at(&self, index: usize) -> NodeHandle {
        debug_assert!(index < self.len);
        if index <= self.len / 2 {
            let mut cur = self.head.expect("in-bounds index on a non-empty chain");
            for _ in 0..index {
                cur = self.arena[cur].next.expect("chain shorter than len");
            }
            cur
        } else {
            let mut cur = self.tail.expect("in-bounds index on a non-empty chain");
            for _ in 0..(self.len - 1 - index) {
                cur = self.arena[cur].prev.expect("chain shorter than len");
            }
            cur
        }
    }

    /// Links a new node after the current tail.
    pub fn push_back(&mut self, value: T) {
        let node = self.arena.alloc(value, self.tail, None);
        match self.tail {
            Some(old_tail) => self.arena[old_tail].next = Some(node),
            None => self.head = Some(node),
        }
        self.tail = Some(node);
        self.len += 1;
    }

    /// Inserts at an existing position in `[0, len)`; `len` itself is
    /// refused by the bounds check.
    ///
    /// Index `0` prepends. The last valid index, `len - 1`, links the new
    /// node *after* the current tail rather than splicing before it, so
    /// it behaves as an append. Interior indexes splice the new node
    /// immediately before the node currently holding that index.
    pub fn insert_at(&mut self, index: usize, value: T) -> bool {
        if !self.in_bounds(index) {
            return false;
        }
        if index == 0 {
            let old_head = self.head.expect("non-empty chain has a head");
            let node = self.arena.alloc(value, None, Some(old_head));
            self.arena[old_head].prev = Some(node);
            self.head = Some(node);
        } else if index == self.len - 1 {
            let old_tail = self.tail.expect("non-empty chain has a tail");
            let node = self.arena.alloc(value, Some(old_tail), None);
            self.arena[old_tail].next = Some(node);
            self.tail = Some(node);
        } else {
            let at = self.node_at(index);
            let before = self.arena[at].prev.expect("interior node has a prev");
            let node = self.arena.alloc(value, Some(before), Some(at));
            self.arena[before].next = Some(node);
            self.arena[at].prev = Some(node);
        }
        self.len += 1;
        true
    }

    /// Disconnects `handle` from its neighbors and releases the node.
    fn unlink(&mut self, handle: NodeHandle) -> T {
        let (prev, next) = {
            let node = &self.arena[handle];
            (node.prev, node.next)
        };
        match prev {
            Some(p) => self.arena[p].next = next,
            None => self.head = next,
        }
        match next {
            Some(n) => self.arena[n].prev = prev,
            None => self.tail = prev,
        }
        self.len -= 1;
        self.arena.free(handle)
    }

    pub fn remove_at(&mut self, index: usize) -> Option<T> {
        if !self.in_bounds(index) {
            return None;
        }
        let handle = self.node_at(index);
        Some(self.unlink(handle))
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        if !self.in_bounds(index) {
            return None;
        }
        Some(&self.arena[self.node_at(index)].value)
    }

    pub fn set(&mut self, index: usize, value: T) -> bool {
        if !self.in_bounds(index) {
            return false;
        }
        let handle = self.node_at(index);
        self.arena[handle].value = value;
        true
    }

    pub fn index_of(&self, value: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        let mut index = 0;
        let mut cur = self.head;
        while let Some(handle) = cur {
            if self.arena[handle].value == *value {
                return Some(index);
            }
            index += 1;
            cur = self.arena[handle].next;
        }
        None
    }

    pub fn last_index_of(&self, value: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        let mut index = self.len;
        let mut cur = self.tail;
        while let Some(handle) = cur {
            index -= 1;
            if self.arena[handle].value == *value {
                return Some(index);
            }
            cur = self.arena[handle].prev;
        }
        None
    }

    /// Forward predicate scan. The matched node's index is recomputed
    /// through [`index_of`] on its value, so an earlier equal-comparing
    /// element wins over the node the predicate actually hit.
    ///
    /// [`index_of`]: LinkedChain::index_of
    pub fn index_of_where<P>(&self, mut predicate: P) -> Option<usize>
    where
        P: FnMut(&T) -> bool,
        T: PartialEq,
    {
        let mut cur = self.head;
        while let Some(handle) = cur {
            if predicate(&self.arena[handle].value) {
                return self.index_of(&self.arena[handle].value);
            }
            cur = self.arena[handle].next;
        }
        None
    }

    /// Backward predicate scan, recomputed through [`last_index_of`].
    ///
    /// [`last_index_of`]: LinkedChain::last_index_of
    pub fn last_index_of_where<P>(&self, mut predicate: P) -> Option<usize>
    where
        P: FnMut(&T) -> bool,
        T: PartialEq,
    {
        let mut cur = self.tail;
        while let Some(handle) = cur {
            if predicate(&self.arena[handle].value) {
                return self.last_index_of(&self.arena[handle].value);
            }
            cur = self.arena[handle].prev;
        }
        None
    }

    /// Removes every node equal to `value`, scanning tail to head.
    pub fn remove_all(&mut self, value: &T) -> bool
    where
        T: PartialEq,
    {
        let before = self.len;
        let mut cur = self.tail;
        while let Some(handle) = cur {
            let prev = self.arena[handle].prev;
            if self.arena[handle].value == *value {
                self.unlink(handle);
            }
            cur = prev;
        }
        before != self.len
    }

    /// Removes every node satisfying `predicate`, scanning head to tail.
    pub fn remove_if<P>(&mut self, mut predicate: P) -> bool
    where
        P: FnMut(&T) -> bool,
    {
        let before = self.len;
        let mut cur = self.head;
        while let Some(handle) = cur {
            let next = self.arena[handle].next;
            if predicate(&self.arena[handle].value) {
                self.unlink(handle);
            }
            cur = next;
        }
        before != self.len
    }

    /// Bubble sort over adjacent positions: each pass walks the chain
    /// swapping stored values (never relinking nodes) where `compare`
    /// says `Greater`; the bound shrinks by one per pass and the loop
    /// exits on the first pass with no swap. Ties never swap, so equal
    /// elements keep their relative order.
    pub fn sort<F>(&mut self, mut compare: F)
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        if self.len < 2 {
            return;
        }
        let mut bound = self.len - 1;
        loop {
            let mut swapped = false;
            let mut cur = self.head.expect("non-empty chain has a head");
            for _ in 0..bound {
                let next = self.arena[cur].next.expect("pass bound within chain");
                if compare(&self.arena[cur].value, &self.arena[next].value) == Ordering::Greater {
                    self.arena.swap_values(cur, next);
                    swapped = true;
                }
                cur = next;
            }
            if !swapped {
                break;
            }
            bound -= 1;
        }
    }

    pub fn clear(&mut self) {
        self.arena.reset();
        self.head = None;
        self.tail = None;
        self.len = 0;
    }

    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.values().cloned().collect()
    }

    /// Borrowing head-to-tail walk over the stored values.
    pub fn values(&self) -> Values<'_, T> {
        Values {
            chain: self,
            cur: self.head,
            remaining: self.len,
        }
    }

    /// Structural self-check: walks head to tail verifying neighbor
    /// reciprocity, then confirms the walk length, the tail, and the
    /// arena's live count all agree with `len`.
    pub fn is_consistent(&self) -> bool {
        if self.len == 0 {
            return self.head.is_none() && self.tail.is_none() && self.arena.live() == 0;
        }
        let mut count = 0usize;
        let mut prev: Option<NodeHandle> = None;
        let mut cur = self.head;
        while let Some(handle) = cur {
            if self.arena[handle].prev != prev {
                return false;
            }
            prev = Some(handle);
            cur = self.arena[handle].next;
            count += 1;
            if count > self.len {
                return false;
            }
        }
        count == self.len && prev == self.tail && self.arena.live() == self.len
    }
}

pub(crate) struct Values<'a, T> {
    chain: &'a LinkedChain<T>,
    cur: Option<NodeHandle>,
    remaining: usize,
}

impl<'a, T> Iterator for Values<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        let handle = self.cur?;
        let node = &self.chain.arena[handle];
        self.cur = node.next;
        self.remaining -= 1;
        Some(&node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Values<'_, T> {}
impl<T> FusedIterator for Values<'_, T> {}
