// SPDX-License-Identifier: MPL-2.0
//! Search result types.

/// One image returned by the search service.
///
/// Opaque to the pagination logic beyond these fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageItem {
    /// Service-assigned identifier.
    pub id: u64,
    /// URL of the small preview shown in the gallery grid.
    pub thumbnail_url: String,
    /// URL of the large image shown in the preview overlay.
    pub large_image_url: String,
    /// Descriptive tags, in the order reported by the service.
    pub tags: Vec<String>,
}

/// Payload of one page fetch.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ResultPage {
    /// Items of this page, in service order.
    pub items: Vec<ImageItem>,
    /// Total number of matching items the service can return for the query.
    pub total_hits: u32,
}

impl ResultPage {
    /// Creates a page from its items and the reported total.
    #[must_use]
    pub fn new(items: Vec<ImageItem>, total_hits: u32) -> Self {
        Self { items, total_hits }
    }

    /// Returns whether the page carries no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// The image currently shown in the preview overlay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    /// URL of the large image to display.
    pub large_image_url: String,
    /// Tags of the selected image.
    pub tags: Vec<String>,
}

impl Selection {
    /// Returns the tags joined for display.
    #[must_use]
    pub fn caption(&self) -> String {
        self.tags.join(", ")
    }
}
