//! Borrowed views over a contiguous range of a [`FixedArray`](crate::FixedArray).
//!
//! Views never own storage. An [`ArrayViewMut`] writes straight into the
//! base array; once it is dropped the array observes every change.

use std::slice;

/// Read-only view over part of an array.
#[derive(Debug, PartialEq, Eq)]
pub struct ArrayView<'a, T> {
    items: &'a [T],
}

impl<T> Clone for ArrayView<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for ArrayView<'_, T> {}

impl<'a, T> ArrayView<'a, T> {
    pub(crate) fn new(items: &'a [T]) -> Self {
        Self { items }
    }

    /// Number of items in the view.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the view is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Borrow the item at `index`, bounded by the view's own length.
    pub fn get(&self, index: usize) -> Option<&'a T> {
        self.items.get(index)
    }

    /// The viewed items.
    pub fn as_slice(&self) -> &'a [T] {
        self.items
    }

    /// Iterate over the viewed items.
    pub fn iter(&self) -> slice::Iter<'a, T> {
        self.items.iter()
    }
}

impl<'a, T> IntoIterator for ArrayView<'a, T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

/// Mutable view over part of an array.
#[derive(Debug, PartialEq, Eq)]
pub struct ArrayViewMut<'a, T> {
    items: &'a mut [T],
}

impl<'a, T> ArrayViewMut<'a, T> {
    pub(crate) fn new(items: &'a mut [T]) -> Self {
        Self { items }
    }

    /// Number of items in the view.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the view is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Borrow the item at `index`, bounded by the view's own length.
    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    /// Mutably borrow the item at `index`.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.items.get_mut(index)
    }

    /// Overwrite the item at `index`. Out-of-range indices are ignored.
    pub fn set(&mut self, index: usize, item: T) {
        if let Some(slot) = self.items.get_mut(index) {
            *slot = item;
        }
    }

    /// The viewed items.
    pub fn as_slice(&self) -> &[T] {
        &*self.items
    }

    /// The viewed items, mutably.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut *self.items
    }

    /// Iterate over the viewed items.
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.items.iter()
    }

    /// Iterate mutably over the viewed items.
    pub fn iter_mut(&mut self) -> slice::IterMut<'_, T> {
        self.items.iter_mut()
    }

    /// Reborrow as a read-only view.
    pub fn as_view(&self) -> ArrayView<'_, T> {
        ArrayView::new(&*self.items)
    }
}
