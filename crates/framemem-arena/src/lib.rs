//! Bump-pointer arena allocation over a caller-supplied buffer.
//!
//! The arena hands out raw byte ranges and aligned typed values from a
//! single pre-allocated buffer, with two lifetime regions: a persistent
//! prefix that is never reclaimed, and an ephemeral tail reclaimed in
//! O(1) once per frame. This crate is the only one in the workspace that
//! contains `unsafe` code, all of it in `raw.rs`.
//!
//! # Architecture
//!
//! ```text
//! Arena<'buf> (bump pointer + reset boundary)
//! ├── &'buf mut [u8]            (caller-owned storage, never resized)
//! ├── ByteHandle                (raw range: offset + len)
//! ├── StructHandle<T: Plain>    (one aligned value)
//! └── SliceHandle<T: Plain>     (aligned run of values)
//! ```
//!
//! Allocations return `Copy` handles instead of borrows, so persistent and
//! ephemeral allocations can all be held at once; the arena resolves a
//! handle to `&[u8]`, `&T` or `&[T]` on demand.
//!
//! # Example
//!
//! ```
//! use framemem_arena::Arena;
//!
//! let mut memory = vec![0u8; 4096];
//! let mut arena = Arena::new(&mut memory).unwrap();
//!
//! let layout = arena.allocate_value([0u32; 16]).unwrap();
//! arena.initialize_persistent_memory();
//!
//! for frame in 0..3u32 {
//!     let scratch = arena.allocate_slice::<u32>(64).unwrap();
//!     arena.slice_mut(&scratch).fill(frame);
//!     arena.get_mut(&layout)[0] += 1;
//!     arena.reset_ephemeral_memory();
//! }
//! assert_eq!(arena.get(&layout)[0], 3);
//! ```
//!
//! # Ephemeral handles
//!
//! Resetting does not invalidate handles at runtime. Resolving a handle
//! from a reclaimed frame returns whatever bytes are there now. That is
//! memory-safe because only bytes and [`Plain`] values can be resolved,
//! but it is a logic error.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(unsafe_code)]

pub mod arena;
pub mod config;
pub mod error;
pub mod handle;
mod raw;

// Public re-exports for the primary API surface.
pub use arena::Arena;
pub use config::ArenaConfig;
pub use error::ArenaError;
pub use handle::{ByteHandle, SliceHandle, StructHandle};
pub use raw::Plain;
