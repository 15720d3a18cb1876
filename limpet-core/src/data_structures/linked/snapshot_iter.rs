//! Detached snapshot iteration.

use std::iter::FusedIterator;

/// Iterator over a point-in-time copy of a collection's elements.
///
/// The copy is taken atomically (under the owning collection's gate,
/// where it has one) at construction; from then on the iteration is
/// completely detached. It neither observes later mutation of the
/// source nor blocks it, and it is a single-pass, finite sequence.
pub struct SnapshotIter<T> {
    inner: std::vec::IntoIter<T>,
}

impl<T> SnapshotIter<T> {
    pub(crate) fn new(items: Vec<T>) -> Self {
        SnapshotIter {
            inner: items.into_iter(),
        }
    }
}

impl<T> Iterator for SnapshotIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> ExactSizeIterator for SnapshotIter<T> {}
impl<T> FusedIterator for SnapshotIter<T> {}
