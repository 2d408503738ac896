// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application. Constants are organized by category.
//!
//! # Categories
//!
//! - **Autoplay**: Slide advance interval and its bounds
//! - **Slides**: Where relative slide paths are looked up

// ==========================================================================
// Autoplay Defaults
// ==========================================================================

/// Default delay between two automatic slide advances (in milliseconds).
pub const DEFAULT_AUTOPLAY_INTERVAL_MS: u64 = 4000;

/// Minimum autoplay interval (in milliseconds).
pub const MIN_AUTOPLAY_INTERVAL_MS: u64 = 1000;

/// Maximum autoplay interval (in milliseconds).
pub const MAX_AUTOPLAY_INTERVAL_MS: u64 = 60_000;

/// Whether the slideshow starts playing when shown.
pub const DEFAULT_START_PLAYING: bool = true;

// ==========================================================================
// Slides Defaults
// ==========================================================================

/// Directory (relative to the working directory) holding the default slides.
pub const DEFAULT_SLIDES_DIR: &str = "public";

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(MIN_AUTOPLAY_INTERVAL_MS > 0);
    assert!(MAX_AUTOPLAY_INTERVAL_MS >= MIN_AUTOPLAY_INTERVAL_MS);
    assert!(DEFAULT_AUTOPLAY_INTERVAL_MS >= MIN_AUTOPLAY_INTERVAL_MS);
    assert!(DEFAULT_AUTOPLAY_INTERVAL_MS <= MAX_AUTOPLAY_INTERVAL_MS);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn autoplay_defaults_are_valid() {
        assert_eq!(DEFAULT_AUTOPLAY_INTERVAL_MS, 4000);
        assert!(DEFAULT_AUTOPLAY_INTERVAL_MS >= MIN_AUTOPLAY_INTERVAL_MS);
        assert!(DEFAULT_AUTOPLAY_INTERVAL_MS <= MAX_AUTOPLAY_INTERVAL_MS);
    }

    #[test]
    fn slideshow_starts_playing_by_default() {
        assert!(DEFAULT_START_PLAYING);
    }
}
