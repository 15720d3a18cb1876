//! Slab-style node storage for the linked list variants.
//!
//! Nodes are addressed by stable [`NodeHandle`]s instead of references,
//! so the chain carries no ownership cycles: the arena owns every node,
//! and `prev`/`next` are plain optional handles. Freed slots are recycled
//! through an intrusive free list and handles stay valid across unrelated
//! insertions and removals.

use std::mem;
use std::ops::{Index, IndexMut};

/// Stable address of a node inside a [`NodeArena`].
///
/// Handles are never handed out past the list types in this module, so
/// there is no generation counter: a handle is live exactly until the
/// node it names is unlinked.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub(crate) struct NodeHandle(usize);

#[derive(Debug)]
pub(crate) struct Node<T> {
    pub value: T,
    pub prev: Option<NodeHandle>,
    pub next: Option<NodeHandle>,
}

#[derive(Debug)]
enum Slot<T> {
    Occupied(Node<T>),
    Free { next_free: Option<usize> },
}

#[derive(Debug)]
pub(crate) struct NodeArena<T> {
    slots: Vec<Slot<T>>,
    free_head: Option<usize>,
    live: usize,
}

impl<T> NodeArena<T> {
    pub fn new() -> Self {
        NodeArena {
            slots: Vec::new(),
            free_head: None,
            live: 0,
        }
    }

    /// Number of occupied slots.
    pub fn live(&self) -> usize {
        self.live
    }

    /// Stores a node and returns its handle, reusing a freed slot when
    /// one is available.
    pub fn alloc(
        &mut self,
        value: T,
        prev: Option<NodeHandle>,
        next: Option<NodeHandle>,
    ) -> NodeHandle {
        let node = Node { value, prev, next };
        self.live += 1;
        match self.free_head {
            Some(index) => {
                self.free_head = match self.slots[index] {
                    Slot::Free { next_free } => next_free,
                    Slot::Occupied(_) => panic!("free list points at an occupied slot"),
                };
                self.slots[index] = Slot::Occupied(node);
                NodeHandle(index)
            }
            None => {
                self.slots.push(Slot::Occupied(node));
                NodeHandle(self.slots.len() - 1)
            }
        }
    }

    /// Releases the node behind `handle` and returns its value. The slot
    /// goes onto the free list; the handle must not be used afterwards.
    pub fn free(&mut self, handle: NodeHandle) -> T {
        let slot = mem::replace(
            &mut self.slots[handle.0],
            Slot::Free {
                next_free: self.free_head,
            },
        );
        match slot {
            Slot::Occupied(node) => {
                self.free_head = Some(handle.0);
                self.live -= 1;
                node.value
            }
            Slot::Free { .. } => panic!("double free of node handle {:?}", handle),
        }
    }

    /// Swaps the stored values of two distinct nodes without touching
    /// their links.
    pub fn swap_values(&mut self, a: NodeHandle, b: NodeHandle) {
        debug_assert_ne!(a.0, b.0);
        let (low, high) = if a.0 < b.0 { (a.0, b.0) } else { (b.0, a.0) };
        let (left, right) = self.slots.split_at_mut(high);
        match (&mut left[low], &mut right[0]) {
            (Slot::Occupied(x), Slot::Occupied(y)) => mem::swap(&mut x.value, &mut y.value),
            _ => panic!("stale node handle in swap"),
        }
    }

    /// Drops every node and empties the free list.
    pub fn reset(&mut self) {
        self.slots.clear();
        self.free_head = None;
        self.live = 0;
    }
}

impl<T> Index<NodeHandle> for NodeArena<T> {
    type Output = Node<T>;

    fn index(&self, handle: NodeHandle) -> &Node<T> {
        match &self.slots[handle.0] {
            Slot::Occupied(node) => node,
            Slot::Free { .. } => panic!("stale node handle {:?}", handle),
        }
    }
}

impl<T> IndexMut<NodeHandle> for NodeArena<T> {
    fn index_mut(&mut self, handle: NodeHandle) -> &mut Node<T> {
        match &mut self.slots[handle.0] {
            Slot::Occupied(node) => node,
            Slot::Free { .. } => panic!("stale node handle {:?}", handle),
        }
    }
}
