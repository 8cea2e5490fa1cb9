//! Core data structures for the framemem workspace.
//!
//! This is the leaf crate with zero internal dependencies. It provides
//! the small, allocation-free-per-frame utilities that sit alongside the
//! arena:
//!
//! - [`FixedArray`] with bounds-checked access and swap-back removal
//! - [`ArrayView`] / [`ArrayViewMut`] aliasing a sub-range of an array
//! - [`HashBuilder`] producing stable, string-tagged element IDs

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod array;
pub mod error;
pub mod hash;
pub mod view;

pub use array::{create_view_from_range, FixedArray};
pub use error::RangeError;
pub use hash::{
    hash_many_numbers, hash_number, hash_string, HashBuilder, HashElementId, HashOptions, Joiner,
};
pub use view::{ArrayView, ArrayViewMut};
