// SPDX-License-Identifier: MPL-2.0
//! Decoded thumbnail cache.
//!
//! Thumbnails are keyed by URL and evicted least-recently-used first. A URL
//! enters the cache as [`Thumbnail::Loading`] when its download starts, so
//! the same image is never requested twice while in flight.

use crate::domain::search::ImageItem;
use crate::infrastructure::DownloadError;
use iced::widget::image;
use lru::LruCache;
use std::num::NonZeroUsize;

/// Cache state of one thumbnail.
#[derive(Debug, Clone)]
pub enum Thumbnail {
    Loading,
    Ready(image::Handle),
    /// The download failed; a placeholder is shown instead.
    Failed,
}

pub struct ThumbnailCache {
    entries: LruCache<String, Thumbnail>,
}

impl std::fmt::Debug for ThumbnailCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ThumbnailCache")
            .field("len", &self.entries.len())
            .field("capacity", &self.entries.cap())
            .finish()
    }
}

impl ThumbnailCache {
    /// Creates a cache holding at most `capacity` thumbnails (at least one).
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN);
        Self {
            entries: LruCache::new(capacity),
        }
    }

    /// Marks the thumbnails of `items` that are not cached yet as loading and
    /// returns their URLs, in order, for the caller to download.
    ///
    /// Entries already cached are refreshed as most recently used. At most
    /// `capacity` items are considered, so one call never evicts its own
    /// claims.
    pub fn claim_missing(&mut self, items: &[ImageItem]) -> Vec<String> {
        let mut claimed = Vec::new();
        for item in items.iter().take(self.entries.cap().get()) {
            // `get` marks the entry as most recently used.
            if self.entries.get(&item.thumbnail_url).is_some() {
                continue;
            }
            self.entries.put(item.thumbnail_url.clone(), Thumbnail::Loading);
            claimed.push(item.thumbnail_url.clone());
        }
        claimed
    }

    /// Stores the outcome of a download.
    ///
    /// A URL evicted while its download was in flight is dropped; it is
    /// claimed again once it scrolls back into view.
    pub fn complete(&mut self, url: String, result: Result<Vec<u8>, DownloadError>) {
        let Some(entry) = self.entries.get_mut(&url) else {
            tracing::debug!(%url, "dropping thumbnail evicted while loading");
            return;
        };
        *entry = match result {
            Ok(bytes) => Thumbnail::Ready(image::Handle::from_bytes(bytes)),
            Err(err) => {
                tracing::debug!(%url, error = %err, "thumbnail download failed");
                Thumbnail::Failed
            }
        };
    }

    /// Looks up a thumbnail without touching the LRU order.
    #[must_use]
    pub fn peek(&self, url: &str) -> Option<&Thumbnail> {
        self.entries.peek(url)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Maximum number of thumbnails kept.
    #[must_use]
    pub fn cap(&self) -> usize {
        self.entries.cap().get()
    }
}
