//! Fixed-capacity arrays.
//!
//! A [`FixedArray`] pre-allocates all of its storage at construction and
//! never grows. Element slots beyond the logical length still hold valid
//! (default-initialised or stale) values, which is why [`FixedArray::get`]
//! is bounded by the storage extent while removal is bounded by the
//! logical length.

use crate::error::RangeError;
use crate::view::{ArrayView, ArrayViewMut};

/// A fixed-capacity array with a logical length.
///
/// # Reserved slot
///
/// [`FixedArray::add`] refuses to fill the final storage slot: an array
/// of capacity `n` holds at most `n - 1` added items. Code that sizes
/// arrays by expected item count relies on this margin, so it is kept
/// as-is rather than treated as an off-by-one.
///
/// # Ordering
///
/// [`FixedArray::remove_swapback`] is O(1) and does not preserve element
/// order. Callers needing stable order must shift elements themselves.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FixedArray<T> {
    /// Backing storage. Always exactly `capacity` slots long.
    items: Vec<T>,
    /// Number of logically occupied slots, `<= items.len()`.
    length: usize,
}

impl<T: Default> FixedArray<T> {
    /// Create an empty array with `capacity` default-initialised slots.
    pub fn new(capacity: usize) -> Self {
        let mut items = Vec::with_capacity(capacity);
        items.resize_with(capacity, T::default);
        Self { items, length: 0 }
    }
}

impl<T> FixedArray<T> {
    /// Total number of storage slots.
    pub fn capacity(&self) -> usize {
        self.items.len()
    }

    /// Logical number of items.
    pub fn len(&self) -> usize {
        self.length
    }

    /// Whether the array holds no items.
    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// Set the logical length directly, clamped to capacity.
    ///
    /// Useful after filling storage through [`FixedArray::set`].
    pub fn set_len(&mut self, len: usize) {
        self.length = len.min(self.items.len());
    }

    /// Append an item, returning a mutable reference to its slot.
    ///
    /// Returns `None`, leaving storage untouched, once
    /// `len() + 1 == capacity()`. See the type-level note on the
    /// reserved slot.
    pub fn add(&mut self, item: T) -> Option<&mut T> {
        if self.length + 1 >= self.items.len() {
            return None;
        }
        let slot = &mut self.items[self.length];
        *slot = item;
        self.length += 1;
        Some(slot)
    }

    /// Borrow the slot at `index`, bounded by capacity.
    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    /// Mutably borrow the slot at `index`, bounded by capacity.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.items.get_mut(index)
    }

    /// Overwrite the slot at `index`. Out-of-range indices are ignored.
    pub fn set(&mut self, index: usize, item: T) {
        if let Some(slot) = self.items.get_mut(index) {
            *slot = item;
        }
    }

    /// The logically occupied items.
    pub fn as_slice(&self) -> &[T] {
        &self.items[..self.length]
    }

    /// The logically occupied items, mutably.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.items[..self.length]
    }

    /// Borrow `len` items starting at `start` as a read-only view.
    ///
    /// The range must lie within the logical length. A zero-length view
    /// may start anywhere up to and including `len()`.
    pub fn view_range(&self, start: usize, len: usize) -> Result<ArrayView<'_, T>, RangeError> {
        let range = self.check_range(start, len)?;
        Ok(ArrayView::new(&self.items[range]))
    }

    /// Borrow `len` items starting at `start` as a mutable view.
    ///
    /// Writes through the view land in this array's storage.
    pub fn view_range_mut(
        &mut self,
        start: usize,
        len: usize,
    ) -> Result<ArrayViewMut<'_, T>, RangeError> {
        let range = self.check_range(start, len)?;
        Ok(ArrayViewMut::new(&mut self.items[range]))
    }

    fn check_range(&self, start: usize, len: usize) -> Result<std::ops::Range<usize>, RangeError> {
        let err = || RangeError {
            start,
            len,
            length: self.length,
        };
        let end = start.checked_add(len).ok_or_else(err)?;
        if end > self.length || (start >= self.length && len != 0) {
            return Err(err());
        }
        Ok(start..end)
    }
}

impl<T: Clone + Default> FixedArray<T> {
    /// Remove the item at `index` by copying the last item into its slot.
    ///
    /// Bounded by the logical length. Returns the removed item, or
    /// `T::default()` without touching the array when `index` is out of
    /// range. The vacated last slot keeps its value; it is only past the
    /// logical end.
    pub fn remove_swapback(&mut self, index: usize) -> T {
        if index >= self.length {
            return T::default();
        }
        self.length -= 1;
        let last = self.items[self.length].clone();
        std::mem::replace(&mut self.items[index], last)
    }

    /// Copy of the slot at `index`, or `T::default()` when out of range.
    pub fn get_value(&self, index: usize) -> T {
        self.items.get(index).cloned().unwrap_or_default()
    }
}

/// Borrow a mutable view over `array[start..start + len]`.
///
/// Free-function form of [`FixedArray::view_range_mut`].
pub fn create_view_from_range<T>(
    array: &mut FixedArray<T>,
    start: usize,
    len: usize,
) -> Result<ArrayViewMut<'_, T>, RangeError> {
    array.view_range_mut(start, len)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled(capacity: usize, values: &[i32]) -> FixedArray<i32> {
        let mut arr = FixedArray::new(capacity);
        for &v in values {
            arr.add(v).unwrap();
        }
        arr
    }

    #[test]
    fn new_is_empty_with_full_storage() {
        let arr: FixedArray<u32> = FixedArray::new(8);
        assert_eq!(arr.capacity(), 8);
        assert_eq!(arr.len(), 0);
        assert!(arr.is_empty());
        assert_eq!(arr.get(7), Some(&0));
    }

    #[test]
    fn add_returns_slot_reference() {
        let mut arr = FixedArray::new(4);
        let slot = arr.add(7).unwrap();
        *slot = 9;
        assert_eq!(arr.as_slice(), &[9]);
    }

    #[test]
    fn add_keeps_one_reserved_slot() {
        let mut arr = FixedArray::new(3);
        assert!(arr.add(1).is_some());
        assert!(arr.add(2).is_some());
        assert!(arr.add(3).is_none());
        assert_eq!(arr.len(), 2);
        assert_eq!(arr.get(2), Some(&0));
    }

    #[test]
    fn add_on_zero_and_one_capacity_fails() {
        let mut zero: FixedArray<u8> = FixedArray::new(0);
        assert!(zero.add(1).is_none());
        let mut one: FixedArray<u8> = FixedArray::new(1);
        assert!(one.add(1).is_none());
        assert!(one.is_empty());
    }

    #[test]
    fn get_is_bounded_by_capacity_not_length() {
        let arr = filled(5, &[1]);
        assert_eq!(arr.get(0), Some(&1));
        assert_eq!(arr.get(4), Some(&0));
        assert_eq!(arr.get(5), None);
    }

    #[test]
    fn get_mut_writes_through() {
        let mut arr = filled(5, &[1, 2]);
        *arr.get_mut(1).unwrap() = 20;
        assert_eq!(arr.as_slice(), &[1, 20]);
    }

    #[test]
    fn get_value_defaults_out_of_range() {
        let arr = filled(5, &[4, 5]);
        assert_eq!(arr.get_value(1), 5);
        assert_eq!(arr.get_value(99), 0);
    }

    #[test]
    fn set_out_of_range_is_noop() {
        let mut arr = filled(3, &[1]);
        let before = arr.clone();
        arr.set(3, 42);
        assert_eq!(arr, before);
        arr.set(2, 42);
        assert_eq!(arr.get(2), Some(&42));
    }

    #[test]
    fn remove_swapback_moves_last_into_hole() {
        let mut arr = filled(5, &[10, 20, 30]);
        let removed = arr.remove_swapback(0);
        assert_eq!(removed, 10);
        assert_eq!(arr.len(), 2);
        assert_eq!(arr.as_slice(), &[30, 20]);
    }

    #[test]
    fn remove_swapback_last_element() {
        let mut arr = filled(5, &[10, 20, 30]);
        assert_eq!(arr.remove_swapback(2), 30);
        assert_eq!(arr.as_slice(), &[10, 20]);
        assert_eq!(arr.get(2), Some(&30));
    }

    #[test]
    fn remove_swapback_leaves_vacated_slot_intact() {
        let mut arr = filled(5, &[10, 20, 30]);
        assert_eq!(arr.remove_swapback(0), 10);
        assert_eq!(arr.get(2), Some(&30));

        assert_eq!(arr.remove_swapback(1), 20);
        assert_eq!(arr.len(), 1);
        assert_eq!(arr.get(1), Some(&20));
    }

    #[test]
    fn remove_swapback_out_of_range_returns_default() {
        let mut arr = filled(5, &[10, 20]);
        assert_eq!(arr.remove_swapback(2), 0);
        assert_eq!(arr.len(), 2);
        assert_eq!(arr.as_slice(), &[10, 20]);
    }

    #[test]
    fn set_len_clamps_to_capacity() {
        let mut arr: FixedArray<u8> = FixedArray::new(4);
        arr.set_len(10);
        assert_eq!(arr.len(), 4);
    }

    #[test]
    fn view_range_reads_sub_range() {
        let arr = filled(10, &[10, 20, 30, 40]);
        let view = arr.view_range(1, 2).unwrap();
        assert_eq!(view.as_slice(), &[20, 30]);
    }

    #[test]
    fn view_range_mut_writes_into_array() {
        let mut arr = filled(10, &[10, 20, 30, 40]);
        {
            let mut view = create_view_from_range(&mut arr, 1, 2).unwrap();
            view.set(0, 99);
        }
        assert_eq!(arr.get(1), Some(&99));
    }

    #[test]
    fn zero_length_view_at_end_is_valid() {
        let arr = filled(10, &[1, 2, 3]);
        let view = arr.view_range(3, 0).unwrap();
        assert!(view.is_empty());
    }

    #[test]
    fn view_range_rejects_out_of_bounds() {
        let arr = filled(10, &[1, 2, 3, 4, 5]);
        assert!(arr.view_range(5, 1).is_err());
        assert!(arr.view_range(3, 3).is_err());
        assert!(arr.view_range(0, 6).is_err());
        assert!(arr.view_range(6, 0).is_err());
        assert_eq!(
            arr.view_range(usize::MAX, 2).unwrap_err(),
            RangeError {
                start: usize::MAX,
                len: 2,
                length: 5,
            }
        );
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn length_never_reaches_capacity(
                capacity in 0usize..32,
                adds in 0usize..64,
            ) {
                let mut arr: FixedArray<usize> = FixedArray::new(capacity);
                for i in 0..adds {
                    let _ = arr.add(i);
                }
                prop_assert!(arr.len() < capacity.max(1));
                prop_assert_eq!(arr.len(), adds.min(capacity.saturating_sub(1)));
            }

            #[test]
            fn swapback_preserves_multiset(
                values in proptest::collection::vec(0u32..1000, 1..20),
                pick in 0usize..20,
            ) {
                let mut arr = FixedArray::new(values.len() + 1);
                for &v in &values {
                    arr.add(v).unwrap();
                }
                let index = pick % values.len();
                let removed = arr.remove_swapback(index);
                prop_assert_eq!(removed, values[index]);

                let mut expected = values.clone();
                expected.remove(index);
                expected.sort_unstable();
                let mut remaining = arr.as_slice().to_vec();
                remaining.sort_unstable();
                prop_assert_eq!(remaining, expected);
            }

            #[test]
            fn view_accepts_exactly_in_bounds_ranges(
                length in 0usize..16,
                start in 0usize..20,
                len in 0usize..20,
            ) {
                let mut arr: FixedArray<u8> = FixedArray::new(16);
                arr.set_len(length);
                let ok = start + len <= length && (start < length || len == 0);
                prop_assert_eq!(arr.view_range(start, len).is_ok(), ok);
            }
        }
    }
}
