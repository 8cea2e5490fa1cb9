//! Benchmark profiles and utilities for the framemem workspace.
//!
//! Provides pre-built frame workloads shared by the criterion benches:
//!
//! - [`reference_profile`]: a small UI frame (hundreds of elements)
//! - [`stress_profile`]: a large UI frame (tens of thousands of elements)
//! - [`element_labels`]: deterministic element labels via seed

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use framemem_arena::ArenaConfig;

/// Shape of one simulated UI frame.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrameProfile {
    /// Size of the arena backing buffer in bytes.
    pub buffer_size: usize,
    /// Bytes allocated once and sealed as persistent.
    pub persistent_bytes: usize,
    /// Number of elements laid out per frame.
    pub element_count: usize,
    /// Scratch text bytes allocated per element per frame.
    pub text_bytes_per_element: usize,
    /// Arena configuration.
    pub arena: ArenaConfig,
}

/// Reference profile: 256 elements, 16 bytes of text each, 1 MiB buffer.
pub fn reference_profile() -> FrameProfile {
    FrameProfile {
        buffer_size: 1 << 20,
        persistent_bytes: 64 * 1024,
        element_count: 256,
        text_bytes_per_element: 16,
        arena: ArenaConfig::default(),
    }
}

/// Stress profile: 32K elements, 32 bytes of text each, 16 MiB buffer.
///
/// Same shape as [`reference_profile`] at roughly 100x the element count.
pub fn stress_profile() -> FrameProfile {
    FrameProfile {
        buffer_size: 16 << 20,
        persistent_bytes: 1 << 20,
        element_count: 32 * 1024,
        text_bytes_per_element: 32,
        arena: ArenaConfig::default(),
    }
}

/// Generate `n` deterministic element labels such as `"button-17"`.
///
/// The label kind cycles through a fixed set and the numeric suffix is
/// derived from `seed`, so two calls with the same arguments return the
/// same labels.
pub fn element_labels(n: usize, seed: u64) -> Vec<String> {
    const KINDS: [&str; 6] = ["row", "button", "label", "panel", "icon", "scroll"];

    (0..n)
        .map(|i| {
            let mixed = seed
                .wrapping_mul(6364136223846793005)
                .wrapping_add((i as u64).wrapping_mul(1442695040888963407));
            format!("{}-{}", KINDS[i % KINDS.len()], mixed >> 48)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn profiles_fit_their_buffers() {
        for profile in [reference_profile(), stress_profile()] {
            profile.arena.validate().unwrap();
            let per_frame = profile.element_count * (profile.text_bytes_per_element + 64);
            assert!(profile.persistent_bytes + per_frame < profile.buffer_size);
        }
    }

    #[test]
    fn element_labels_deterministic() {
        let a = element_labels(100, 42);
        let b = element_labels(100, 42);
        assert_eq!(a, b);
        assert_eq!(a.len(), 100);
        assert!(a[0].starts_with("row-"));
        assert!(a[1].starts_with("button-"));
    }

    #[test]
    fn element_labels_handle_large_counts() {
        let labels = element_labels(32 * 1024, u64::MAX);
        assert_eq!(labels.len(), 32 * 1024);
        assert!(labels[32 * 1024 - 1].contains('-'));
    }

    #[test]
    fn element_labels_vary_with_seed() {
        assert_ne!(element_labels(8, 1), element_labels(8, 2));
    }
}
