//! Bump-pointer arena over a caller-supplied byte buffer.
//!
//! [`Arena`] splits its buffer into two regions:
//!
//! ```text
//! 0      padding        reset_offset           next_offset        capacity
//! |--pad--|--persistent--|------ephemeral-------|-------free--------|
//! ```
//!
//! The lifecycle is:
//! 1. allocate long-lived data (layout tables, fonts, ...)
//! 2. [`Arena::initialize_persistent_memory`] seals it below `reset_offset`
//! 3. per frame: allocate scratch data, then
//!    [`Arena::reset_ephemeral_memory`] reclaims it all in O(1)
//!
//! Nothing is ever zeroed. A handle into a reclaimed region keeps
//! resolving, to whatever the next frame wrote there; callers must not
//! keep ephemeral handles across a reset.

use std::fmt;
use std::mem::{align_of, size_of};

use tracing::{debug, trace};

use crate::config::ArenaConfig;
use crate::error::ArenaError;
use crate::handle::{ByteHandle, SliceHandle, StructHandle};
use crate::raw::{self, Plain};

/// Bump allocator with a persistent and an ephemeral region.
///
/// The arena borrows its buffer for its whole lifetime and never grows
/// it. It is single-threaded: all mutation goes through `&mut self`.
pub struct Arena<'buf> {
    /// Caller-owned backing storage.
    buffer: &'buf mut [u8],
    /// Bump pointer: where the next allocation begins.
    next_offset: usize,
    /// Persistent/ephemeral boundary.
    reset_offset: usize,
    /// `buffer` start address modulo the cache line size.
    base_phase: usize,
    /// Number of ephemeral resets so far.
    generation: u32,
    config: ArenaConfig,
}

impl<'buf> Arena<'buf> {
    /// Create an arena over `buffer` with the default configuration.
    ///
    /// See [`Arena::with_config`].
    pub fn new(buffer: &'buf mut [u8]) -> Result<Self, ArenaError> {
        Self::with_config(buffer, ArenaConfig::default())
    }

    /// Create an arena over `buffer`.
    ///
    /// The first allocation is placed at the first address in the buffer
    /// that is a multiple of `config.cache_line_size`. Returns
    /// [`ArenaError::Alignment`] if that address lies beyond the end of
    /// the buffer. An empty buffer gives a valid arena that can only
    /// satisfy zero-byte requests.
    pub fn with_config(buffer: &'buf mut [u8], config: ArenaConfig) -> Result<Self, ArenaError> {
        config.validate()?;
        let capacity = buffer.len();
        let base_phase = raw::address_phase(buffer, config.cache_line_size);
        let padding = if capacity == 0 {
            0
        } else {
            raw::padding_for(0, base_phase, config.cache_line_size)
        };

        if padding > capacity {
            debug!(
                padding,
                capacity,
                cache_line_size = config.cache_line_size,
                "arena buffer too small for cache line alignment"
            );
            return Err(ArenaError::Alignment {
                padding,
                capacity,
                cache_line_size: config.cache_line_size,
            });
        }

        debug!(
            capacity,
            padding,
            cache_line_size = config.cache_line_size,
            "arena created"
        );
        Ok(Self {
            buffer,
            next_offset: padding,
            reset_offset: 0,
            base_phase,
            generation: 0,
            config,
        })
    }

    /// Reserve `size` raw bytes.
    ///
    /// The bytes are whatever the buffer held before; they are not zeroed.
    /// Fails with [`ArenaError::CapacityExceeded`], leaving the arena
    /// unchanged, when fewer than `size` bytes remain.
    pub fn allocate(&mut self, size: usize) -> Result<ByteHandle, ArenaError> {
        let end = match self.next_offset.checked_add(size) {
            Some(end) if end <= self.capacity() => end,
            _ => {
                debug!(requested = size, remaining = self.remaining(), "byte allocation failed");
                return Err(ArenaError::CapacityExceeded {
                    requested: size,
                    remaining: self.remaining(),
                });
            }
        };
        let handle = ByteHandle {
            offset: self.next_offset,
            len: size,
            generation: self.generation,
        };
        self.next_offset = end;
        Ok(handle)
    }

    /// Reserve and borrow `size` raw bytes in one step.
    ///
    /// Convenience for allocations that are written once and then only
    /// reached through the returned slice.
    pub fn allocate_bytes(&mut self, size: usize) -> Result<&mut [u8], ArenaError> {
        let handle = self.allocate(size)?;
        Ok(self.bytes_mut(&handle))
    }

    /// Reserve space for one `T`, aligned to `align_of::<T>()`.
    ///
    /// The value holds stale buffer contents until written. Fails with
    /// [`ArenaError::StructAllocation`], leaving the arena unchanged, when
    /// the padded value does not fit or when `T`'s alignment exceeds the
    /// configured cache line size.
    pub fn allocate_struct<T: Plain>(&mut self) -> Result<StructHandle<T>, ArenaError> {
        let offset = self.reserve_typed::<T>(1)?;
        Ok(StructHandle::new(offset, self.generation))
    }

    /// Reserve space for one `T` and write `value` into it.
    pub fn allocate_value<T: Plain>(&mut self, value: T) -> Result<StructHandle<T>, ArenaError> {
        let handle = self.allocate_struct::<T>()?;
        *self.get_mut(&handle) = value;
        Ok(handle)
    }

    /// Reserve space for `len` consecutive `T`s.
    ///
    /// Same alignment and failure rules as [`Arena::allocate_struct`].
    pub fn allocate_slice<T: Plain>(&mut self, len: usize) -> Result<SliceHandle<T>, ArenaError> {
        let offset = self.reserve_typed::<T>(len)?;
        Ok(SliceHandle::new(offset, len, self.generation))
    }

    /// Mark everything allocated so far as persistent.
    ///
    /// Later calls move the boundary forward to the then-current bump
    /// pointer; memory below it can never be reclaimed again.
    pub fn initialize_persistent_memory(&mut self) {
        self.reset_offset = self.next_offset;
        debug!(
            reset_offset = self.reset_offset,
            remaining = self.remaining(),
            "persistent region sealed"
        );
    }

    /// Reclaim the whole ephemeral region in O(1).
    ///
    /// No byte is cleared. Handles at or above the persistent boundary
    /// are invalidated by contract.
    pub fn reset_ephemeral_memory(&mut self) {
        let reclaimed = self.next_offset - self.reset_offset;
        self.next_offset = self.reset_offset;
        self.generation = self.generation.wrapping_add(1);
        trace!(generation = self.generation, reclaimed, "ephemeral region reset");
    }

    /// Borrow the bytes of a raw allocation.
    ///
    /// # Panics
    ///
    /// Panics if `handle` does not fit inside this arena's buffer.
    pub fn bytes(&self, handle: &ByteHandle) -> &[u8] {
        &self.buffer[handle.offset..handle.end()]
    }

    /// Mutably borrow the bytes of a raw allocation.
    ///
    /// # Panics
    ///
    /// Panics if `handle` does not fit inside this arena's buffer.
    pub fn bytes_mut(&mut self, handle: &ByteHandle) -> &mut [u8] {
        &mut self.buffer[handle.offset..handle.end()]
    }

    /// Borrow a typed value.
    ///
    /// # Panics
    ///
    /// Panics if `handle` came from a different arena and does not fit,
    /// or is not aligned, inside this one.
    pub fn get<T: Plain>(&self, handle: &StructHandle<T>) -> &T {
        raw::cast_ref(&self.buffer[handle.offset..handle.offset + size_of::<T>()])
    }

    /// Mutably borrow a typed value.
    ///
    /// # Panics
    ///
    /// See [`Arena::get`].
    pub fn get_mut<T: Plain>(&mut self, handle: &StructHandle<T>) -> &mut T {
        raw::cast_mut(&mut self.buffer[handle.offset..handle.offset + size_of::<T>()])
    }

    /// Borrow a typed slice.
    ///
    /// # Panics
    ///
    /// See [`Arena::get`].
    pub fn slice<T: Plain>(&self, handle: &SliceHandle<T>) -> &[T] {
        let end = handle.offset + handle.byte_len();
        raw::cast_slice(&self.buffer[handle.offset..end], handle.len)
    }

    /// Mutably borrow a typed slice.
    ///
    /// # Panics
    ///
    /// See [`Arena::get`].
    pub fn slice_mut<T: Plain>(&mut self, handle: &SliceHandle<T>) -> &mut [T] {
        let end = handle.offset + handle.byte_len();
        raw::cast_slice_mut(&mut self.buffer[handle.offset..end], handle.len)
    }

    /// Total buffer length in bytes.
    pub fn capacity(&self) -> usize {
        self.buffer.len()
    }

    /// Offset at which the next allocation begins.
    pub fn next_offset(&self) -> usize {
        self.next_offset
    }

    /// Persistent/ephemeral boundary. 0 until
    /// [`Arena::initialize_persistent_memory`] is called.
    pub fn reset_offset(&self) -> usize {
        self.reset_offset
    }

    /// Bytes still available for allocation.
    pub fn remaining(&self) -> usize {
        self.capacity() - self.next_offset
    }

    /// Bytes below the persistent boundary.
    pub fn persistent_bytes(&self) -> usize {
        self.reset_offset
    }

    /// Bytes currently allocated in the ephemeral region.
    pub fn ephemeral_bytes(&self) -> usize {
        self.next_offset - self.reset_offset
    }

    /// Number of ephemeral resets performed.
    pub fn generation(&self) -> u32 {
        self.generation
    }

    /// The configuration this arena was built with.
    pub fn config(&self) -> &ArenaConfig {
        &self.config
    }

    /// Pad for `T` and reserve `count` of them. Returns the aligned offset.
    fn reserve_typed<T: Plain>(&mut self, count: usize) -> Result<usize, ArenaError> {
        let align = align_of::<T>();
        let size = size_of::<T>().checked_mul(count);
        let remaining = self.remaining();
        let fail = || {
            debug!(
                type_name = std::any::type_name::<T>(),
                count,
                remaining,
                "typed allocation failed"
            );
            ArenaError::StructAllocation {
                type_name: std::any::type_name::<T>(),
                size: size.unwrap_or(usize::MAX),
                align,
                remaining,
            }
        };

        if align > self.config.cache_line_size {
            return Err(fail());
        }
        let size = size.ok_or_else(fail)?;
        let padding = raw::padding_for(self.next_offset, self.base_phase, align);
        let start = self.next_offset.checked_add(padding).ok_or_else(fail)?;
        let end = start.checked_add(size).ok_or_else(fail)?;
        if end > self.capacity() {
            return Err(fail());
        }

        self.next_offset = end;
        Ok(start)
    }
}

impl fmt::Debug for Arena<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Arena")
            .field("capacity", &self.capacity())
            .field("next_offset", &self.next_offset)
            .field("reset_offset", &self.reset_offset)
            .field("generation", &self.generation)
            .field("cache_line_size", &self.config.cache_line_size)
            .finish()
    }
}
