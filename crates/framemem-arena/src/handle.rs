//! Allocation handles.
//!
//! A handle records where an allocation lives inside the arena's buffer
//! as a logical byte offset. Handles are `Copy` and hold no borrow, so
//! any number of persistent and ephemeral allocations can be live at
//! once; the arena resolves them to slices or references on demand.
//!
//! The `generation` field is the number of ephemeral resets that had
//! happened when the allocation was made. It is informational only: a
//! handle into a reclaimed region still resolves, to whatever bytes are
//! there now.

use std::fmt;
use std::marker::PhantomData;

/// A raw byte allocation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[must_use]
pub struct ByteHandle {
    pub(crate) offset: usize,
    pub(crate) len: usize,
    pub(crate) generation: u32,
}

impl ByteHandle {
    /// Byte offset of the allocation from the start of the buffer.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Length of the allocation in bytes.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether this is a zero-length allocation.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// One past the last byte of the allocation.
    pub fn end(&self) -> usize {
        self.offset + self.len
    }

    /// Reset generation at allocation time.
    pub fn generation(&self) -> u32 {
        self.generation
    }
}

impl fmt::Display for ByteHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ByteHandle(gen={}, off={}, len={})",
            self.generation, self.offset, self.len
        )
    }
}

/// A single typed value.
#[must_use]
pub struct StructHandle<T> {
    pub(crate) offset: usize,
    pub(crate) generation: u32,
    pub(crate) _marker: PhantomData<fn() -> T>,
}

impl<T> StructHandle<T> {
    pub(crate) fn new(offset: usize, generation: u32) -> Self {
        Self {
            offset,
            generation,
            _marker: PhantomData,
        }
    }

    /// Byte offset of the value (after alignment padding).
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Size of the value in bytes.
    pub fn size(&self) -> usize {
        std::mem::size_of::<T>()
    }

    /// Reset generation at allocation time.
    pub fn generation(&self) -> u32 {
        self.generation
    }
}

/// A contiguous run of typed values.
#[must_use]
pub struct SliceHandle<T> {
    pub(crate) offset: usize,
    pub(crate) len: usize,
    pub(crate) generation: u32,
    pub(crate) _marker: PhantomData<fn() -> T>,
}

impl<T> SliceHandle<T> {
    pub(crate) fn new(offset: usize, len: usize, generation: u32) -> Self {
        Self {
            offset,
            len,
            generation,
            _marker: PhantomData,
        }
    }

    /// Byte offset of the first element (after alignment padding).
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the slice has no elements.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Size of all elements in bytes.
    pub fn byte_len(&self) -> usize {
        self.len * std::mem::size_of::<T>()
    }

    /// Reset generation at allocation time.
    pub fn generation(&self) -> u32 {
        self.generation
    }
}

// Manual impls: derives would wrongly require `T: Clone` etc.

impl<T> Clone for StructHandle<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for StructHandle<T> {}

impl<T> PartialEq for StructHandle<T> {
    fn eq(&self, other: &Self) -> bool {
        self.offset == other.offset && self.generation == other.generation
    }
}

impl<T> Eq for StructHandle<T> {}

impl<T> fmt::Debug for StructHandle<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StructHandle")
            .field("type", &std::any::type_name::<T>())
            .field("offset", &self.offset)
            .field("generation", &self.generation)
            .finish()
    }
}

impl<T> Clone for SliceHandle<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for SliceHandle<T> {}

impl<T> PartialEq for SliceHandle<T> {
    fn eq(&self, other: &Self) -> bool {
        self.offset == other.offset && self.len == other.len && self.generation == other.generation
    }
}

impl<T> Eq for SliceHandle<T> {}

impl<T> fmt::Debug for SliceHandle<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SliceHandle")
            .field("type", &std::any::type_name::<T>())
            .field("offset", &self.offset)
            .field("len", &self.len)
            .field("generation", &self.generation)
            .finish()
    }
}
