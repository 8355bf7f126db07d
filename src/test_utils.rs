// SPDX-License-Identifier: MPL-2.0
//! Test utilities shared by the controller and UI unit tests.
//!
//! Provides a notification sink that records what it was asked to show and
//! builders for result pages with predictable contents.

use crate::application::port::NotificationSink;
use crate::domain::search::{ImageItem, ResultPage};
use std::ops::Range;

/// Notification sink that records every message key it receives.
#[derive(Debug, Default)]
pub struct RecordingSink {
    pub warnings: Vec<String>,
    pub errors: Vec<String>,
}

impl RecordingSink {
    /// Total number of notifications received.
    pub fn total(&self) -> usize {
        self.warnings.len() + self.errors.len()
    }
}

impl NotificationSink for RecordingSink {
    fn warn(&mut self, message_key: &str) {
        self.warnings.push(message_key.to_string());
    }

    fn error(&mut self, message_key: &str) {
        self.errors.push(message_key.to_string());
    }
}

/// Builds an image item whose URLs and tag are derived from `id`.
pub fn image(id: u64) -> ImageItem {
    ImageItem {
        id,
        thumbnail_url: format!("https://cdn.example/{id}_640.jpg"),
        large_image_url: format!("https://cdn.example/{id}_1280.jpg"),
        tags: vec![format!("tag{id}")],
    }
}

/// Builds a result page holding one item per id in `ids`.
pub fn page_of(ids: Range<u64>, total_hits: u32) -> ResultPage {
    ResultPage::new(ids.map(image).collect(), total_hits)
}
