// SPDX-License-Identifier: MPL-2.0
//! Preview selection state.

use crate::domain::search::Selection;

/// Holds the image currently shown in the preview overlay.
///
/// Independent of the pagination state: clearing or replacing the result
/// set never closes the preview.
#[derive(Debug, Clone, Default)]
pub struct SelectionController {
    current: Option<Selection>,
}

impl SelectionController {
    /// Creates a controller with nothing selected.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Opens the preview for the given image.
    pub fn select(&mut self, large_image_url: impl Into<String>, tags: Vec<String>) {
        let selection = Selection {
            large_image_url: large_image_url.into(),
            tags,
        };
        tracing::debug!(url = %selection.large_image_url, "preview opened");
        self.current = Some(selection);
    }

    /// Closes the preview.
    pub fn clear(&mut self) {
        self.current = None;
    }

    /// Returns the previewed image, if any.
    #[must_use]
    pub fn current(&self) -> Option<&Selection> {
        self.current.as_ref()
    }

    /// Returns whether the preview is open.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.current.is_some()
    }
}
