//! Arena-specific error types.

use std::error::Error;
use std::fmt;

/// Errors that can occur during arena operations.
///
/// None of these are retried internally. A caller that hits a capacity
/// error can only shrink the request or rebuild the arena over a larger
/// buffer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ArenaError {
    /// The padding needed to align the first allocation to the cache line
    /// does not fit in the buffer.
    Alignment {
        /// Bytes of padding required.
        padding: usize,
        /// Buffer length in bytes.
        capacity: usize,
        /// Requested cache line alignment.
        cache_line_size: usize,
    },
    /// A raw byte allocation does not fit in the remaining space.
    CapacityExceeded {
        /// Number of bytes requested.
        requested: usize,
        /// Bytes left between the bump pointer and the end of the buffer.
        remaining: usize,
    },
    /// A typed allocation does not fit, or its type cannot be aligned.
    StructAllocation {
        /// Name of the requested type.
        type_name: &'static str,
        /// Bytes requested, excluding alignment padding.
        size: usize,
        /// Required alignment of the type.
        align: usize,
        /// Bytes left between the bump pointer and the end of the buffer.
        remaining: usize,
    },
    /// The arena configuration is invalid.
    InvalidConfig {
        /// What is wrong with it.
        reason: String,
    },
}

impl fmt::Display for ArenaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Alignment {
                padding,
                capacity,
                cache_line_size,
            } => {
                write!(
                    f,
                    "arena alignment failed: {padding} bytes of padding for a \
                     {cache_line_size}-byte cache line exceed capacity {capacity}"
                )
            }
            Self::CapacityExceeded {
                requested,
                remaining,
            } => {
                write!(
                    f,
                    "arena capacity exceeded: requested {requested} bytes, {remaining} bytes remaining"
                )
            }
            Self::StructAllocation {
                type_name,
                size,
                align,
                remaining,
            } => {
                write!(
                    f,
                    "arena capacity exceeded: cannot allocate {type_name} \
                     ({size} bytes, align {align}) with {remaining} bytes remaining"
                )
            }
            Self::InvalidConfig { reason } => write!(f, "invalid arena config: {reason}"),
        }
    }
}

impl Error for ArenaError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raw_and_struct_failures_are_distinguishable() {
        let raw = ArenaError::CapacityExceeded {
            requested: 8,
            remaining: 4,
        };
        let typed = ArenaError::StructAllocation {
            type_name: "u64",
            size: 8,
            align: 8,
            remaining: 4,
        };
        assert_ne!(raw, typed);
        assert!(raw.to_string().contains("requested 8 bytes"));
        assert!(typed.to_string().contains("cannot allocate u64"));
    }

    #[test]
    fn alignment_message_names_cache_line() {
        let err = ArenaError::Alignment {
            padding: 40,
            capacity: 16,
            cache_line_size: 64,
        };
        assert_eq!(
            err.to_string(),
            "arena alignment failed: 40 bytes of padding for a 64-byte cache line exceed capacity 16"
        );
    }
}
