//! framemem: frame-oriented memory primitives for immediate-mode UIs.
//!
//! This is the top-level facade crate that re-exports the public API from
//! the framemem sub-crates. For most users, adding `framemem` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use framemem::prelude::*;
//!
//! let mut memory = vec![0u8; 64 * 1024];
//! let mut arena = Arena::new(&mut memory).unwrap();
//!
//! // Long-lived state: one slot per element, keyed by element ID.
//! let ids = arena.allocate_slice::<u32>(16).unwrap();
//! arena.initialize_persistent_memory();
//!
//! let opts = HashOptions::default();
//! for frame in 0..2u32 {
//!     let mut visible: FixedArray<u32> = FixedArray::new(8);
//!     for row in 0..4u32 {
//!         let id = HashBuilder::new(0)
//!             .add_string("list", &opts)
//!             .add_number(row, &opts)
//!             .build();
//!         visible.add(id.id);
//!         arena.slice_mut(&ids)[row as usize] = id.id;
//!     }
//!     // Per-frame scratch lives in the ephemeral region.
//!     let scratch = arena.allocate(256).unwrap();
//!     arena.bytes_mut(&scratch).fill(frame as u8);
//!     arena.reset_ephemeral_memory();
//!     assert_eq!(visible.len(), 4);
//! }
//!
//! let first = HashBuilder::new(0)
//!     .add_string("list", &opts)
//!     .add_number(0, &opts)
//!     .build();
//! assert_eq!(arena.slice(&ids)[0], first.id);
//! assert_eq!(first.string_id, "list0");
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`arena`] | `framemem-arena` | `Arena`, handles, `Plain`, `ArenaError` |
//! | [`types`] | `framemem-core` | `FixedArray`, views, `HashBuilder`, `RangeError` |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Bump-pointer arena with persistent and ephemeral regions
/// (`framemem-arena`).
pub use framemem_arena as arena;

/// Fixed arrays, views and hash identifiers (`framemem-core`).
pub use framemem_core as types;

/// Common imports for typical framemem usage.
///
/// ```rust
/// use framemem::prelude::*;
/// ```
pub mod prelude {
    // Arena
    pub use framemem_arena::{Arena, ArenaConfig, ByteHandle, Plain, SliceHandle, StructHandle};

    // Arrays and views
    pub use framemem_core::{create_view_from_range, ArrayView, ArrayViewMut, FixedArray};

    // Hash identifiers
    pub use framemem_core::{
        hash_many_numbers, hash_number, hash_string, HashBuilder, HashElementId, HashOptions,
        Joiner,
    };

    // Errors
    pub use framemem_arena::ArenaError;
    pub use framemem_core::RangeError;
}
