//! Arena configuration parameters.

use crate::error::ArenaError;

/// Configuration for an [`Arena`](crate::Arena).
///
/// Validated at construction; immutable afterwards.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ArenaConfig {
    /// Alignment, in bytes, of the arena's first allocation.
    ///
    /// Default: 64. Must be a non-zero power of two. Typed allocations
    /// can be aligned to at most this many bytes.
    pub cache_line_size: usize,
}

impl ArenaConfig {
    /// Default cache line size in bytes.
    pub const DEFAULT_CACHE_LINE_SIZE: usize = 64;

    /// Create a config with default values.
    pub fn new() -> Self {
        Self {
            cache_line_size: Self::DEFAULT_CACHE_LINE_SIZE,
        }
    }

    /// Override the cache line size.
    pub fn with_cache_line_size(mut self, cache_line_size: usize) -> Self {
        self.cache_line_size = cache_line_size;
        self
    }

    /// Check that all values are usable.
    pub fn validate(&self) -> Result<(), ArenaError> {
        if !self.cache_line_size.is_power_of_two() {
            return Err(ArenaError::InvalidConfig {
                reason: format!(
                    "cache_line_size must be a non-zero power of two (got {})",
                    self.cache_line_size
                ),
            });
        }
        Ok(())
    }
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_cache_line_is_64() {
        assert_eq!(ArenaConfig::default().cache_line_size, 64);
        assert!(ArenaConfig::default().validate().is_ok());
    }

    #[test]
    fn with_cache_line_size_overrides() {
        let config = ArenaConfig::new().with_cache_line_size(128);
        assert_eq!(config.cache_line_size, 128);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn rejects_zero_and_non_power_of_two() {
        for bad in [0, 3, 48, 100] {
            let err = ArenaConfig::new().with_cache_line_size(bad).validate();
            assert!(matches!(err, Err(ArenaError::InvalidConfig { .. })), "{bad}");
        }
    }
}
