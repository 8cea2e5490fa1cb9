//! Error types for fixed arrays and views.

use std::error::Error;
use std::fmt;

/// A view was requested over a range that does not lie inside the
/// logical contents of its base array.
///
/// Returned by [`FixedArray::view_range`](crate::FixedArray::view_range)
/// and friends. The range is never truncated to fit.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RangeError {
    /// First requested index.
    pub start: usize,
    /// Requested number of elements.
    pub len: usize,
    /// Logical length of the base array at the time of the request.
    pub length: usize,
}

impl fmt::Display for RangeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "view range {}..{} exceeds the bounds of the base array (length {})",
            self.start,
            self.start.saturating_add(self.len),
            self.length
        )
    }
}

impl Error for RangeError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_range_and_length() {
        let err = RangeError {
            start: 3,
            len: 3,
            length: 5,
        };
        assert_eq!(
            err.to_string(),
            "view range 3..6 exceeds the bounds of the base array (length 5)"
        );
    }

    #[test]
    fn display_does_not_overflow() {
        let err = RangeError {
            start: usize::MAX,
            len: 2,
            length: 0,
        };
        assert!(err.to_string().contains("length 0"));
    }
}
