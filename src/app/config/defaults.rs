// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for configuration constants.
//!
//! # Categories
//!
//! - **Search**: Pixabay request parameters
//! - **Gallery**: Grid layout and thumbnail cache bounds

// ==========================================================================
// Search Defaults
// ==========================================================================

/// Default API endpoint.
pub const DEFAULT_BASE_URL: &str = crate::infrastructure::pixabay::DEFAULT_BASE_URL;

/// Default image type filter (`photo`, `illustration`, `vector`, `all`).
pub const DEFAULT_IMAGE_TYPE: &str = "photo";

/// Default orientation filter (`horizontal`, `vertical`, `all`).
pub const DEFAULT_ORIENTATION: &str = "horizontal";

/// Safe search is on unless explicitly disabled.
pub const DEFAULT_SAFE_SEARCH: bool = true;

// ==========================================================================
// Gallery Defaults
// ==========================================================================

/// Default number of thumbnail columns.
pub const DEFAULT_GALLERY_COLUMNS: u16 = 4;

/// Minimum number of thumbnail columns.
pub const MIN_GALLERY_COLUMNS: u16 = 1;

/// Maximum number of thumbnail columns.
pub const MAX_GALLERY_COLUMNS: u16 = 8;

/// Default number of decoded thumbnails kept in memory.
pub const DEFAULT_THUMBNAIL_CACHE_SIZE: usize = 240;

/// Minimum thumbnail cache size (two full pages at the widest grid).
pub const MIN_THUMBNAIL_CACHE_SIZE: usize = 24;

/// Maximum thumbnail cache size.
pub const MAX_THUMBNAIL_CACHE_SIZE: usize = 2000;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gallery_defaults_are_within_bounds() {
        assert!((MIN_GALLERY_COLUMNS..=MAX_GALLERY_COLUMNS).contains(&DEFAULT_GALLERY_COLUMNS));
        assert!(
            (MIN_THUMBNAIL_CACHE_SIZE..=MAX_THUMBNAIL_CACHE_SIZE)
                .contains(&DEFAULT_THUMBNAIL_CACHE_SIZE)
        );
    }
}
