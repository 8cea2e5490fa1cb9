//! Low-level primitives for arena memory operations.
//!
//! Everything that touches raw addresses or reinterprets bytes lives
//! here. The rest of the crate works in logical byte offsets and is
//! `unsafe`-free. Each `unsafe` block carries a `// SAFETY:` comment.

#![allow(unsafe_code)]

use std::mem::{align_of, size_of};

/// Marker for types that may be stored in arena memory.
///
/// The arena hands out typed views over bytes it never clears, so a
/// typed value may be read from whatever bytes a previous frame left
/// behind.
///
/// # Safety
///
/// Implementors must guarantee that:
/// - every byte pattern of length `size_of::<Self>()` is a valid `Self`
///   (no `bool`, `char`, enums, references or `NonZero*` fields);
/// - the type has no padding bytes, since arena bytes are later readable
///   as plain `u8`s;
/// - the layout is fixed, i.e. the type is a primitive, an array of
///   `Plain`, or a `#[repr(C)]` / `#[repr(transparent)]` struct of
///   `Plain` fields.
pub unsafe trait Plain: Copy + 'static {}

macro_rules! impl_plain {
    ($($ty:ty),* $(,)?) => {
        $(
            // SAFETY: primitive integer and float types accept every bit pattern.
            unsafe impl Plain for $ty {}
        )*
    };
}

impl_plain!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, f32, f64);

// SAFETY: an array of `Plain` elements has no padding between elements and
// accepts every bit pattern its elements accept.
unsafe impl<T: Plain, const N: usize> Plain for [T; N] {}

/// Phase of the buffer's start address relative to `line`.
///
/// This is the only place the arena reads a raw address. `line` must be
/// a power of two.
pub(crate) fn address_phase(buffer: &[u8], line: usize) -> usize {
    (buffer.as_ptr() as usize) & (line - 1)
}

/// Bytes of padding needed after logical `offset` so that the physical
/// address `base + offset + padding` is a multiple of `align`.
///
/// `phase` is `base % line` from [`address_phase`]; `align` must be a
/// power of two no larger than `line`, which makes `phase % align` equal
/// to `base % align`.
pub(crate) fn padding_for(offset: usize, phase: usize, align: usize) -> usize {
    let misalignment = phase.wrapping_add(offset) & (align - 1);
    (align - misalignment) & (align - 1)
}

/// Reinterpret aligned, correctly sized bytes as a `T`.
///
/// # Panics
///
/// Panics if `bytes` is not exactly `size_of::<T>()` long or not aligned
/// for `T`.
pub(crate) fn cast_ref<T: Plain>(bytes: &[u8]) -> &T {
    check_layout::<T>(bytes.as_ptr(), bytes.len(), 1);
    // SAFETY: `check_layout` verified length and alignment, the borrow of
    // `bytes` bounds the lifetime, and `T: Plain` accepts any bytes.
    unsafe { &*(bytes.as_ptr() as *const T) }
}

/// Mutable counterpart of [`cast_ref`].
pub(crate) fn cast_mut<T: Plain>(bytes: &mut [u8]) -> &mut T {
    check_layout::<T>(bytes.as_ptr(), bytes.len(), 1);
    // SAFETY: as in `cast_ref`; the exclusive borrow of `bytes` guarantees
    // no other reference to this memory exists for the returned lifetime.
    unsafe { &mut *(bytes.as_mut_ptr() as *mut T) }
}

/// Reinterpret aligned bytes as `len` consecutive `T`s.
pub(crate) fn cast_slice<T: Plain>(bytes: &[u8], len: usize) -> &[T] {
    check_layout::<T>(bytes.as_ptr(), bytes.len(), len);
    // SAFETY: `check_layout` verified that `bytes` spans exactly `len`
    // aligned `T`s; `T: Plain` accepts any bytes.
    unsafe { std::slice::from_raw_parts(bytes.as_ptr() as *const T, len) }
}

/// Mutable counterpart of [`cast_slice`].
pub(crate) fn cast_slice_mut<T: Plain>(bytes: &mut [u8], len: usize) -> &mut [T] {
    check_layout::<T>(bytes.as_ptr(), bytes.len(), len);
    // SAFETY: as in `cast_slice`, with exclusivity inherited from `bytes`.
    unsafe { std::slice::from_raw_parts_mut(bytes.as_mut_ptr() as *mut T, len) }
}

fn check_layout<T>(ptr: *const u8, byte_len: usize, count: usize) {
    assert_eq!(
        Some(byte_len),
        size_of::<T>().checked_mul(count),
        "byte length does not match {count} x {}",
        std::any::type_name::<T>(),
    );
    assert_eq!(
        ptr as usize % align_of::<T>(),
        0,
        "address not aligned for {}",
        std::any::type_name::<T>(),
    );
}
