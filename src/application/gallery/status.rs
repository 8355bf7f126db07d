// SPDX-License-Identifier: MPL-2.0
//! Fetch status and the read-only snapshot rendered by the gallery view.

use super::pagination::SearchPaginationController;
use super::selection::SelectionController;
use crate::domain::search::{ImageItem, SearchQuery, Selection};

/// Outcome of the most recent fetch for the active query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FetchStatus {
    /// No query has been submitted yet.
    #[default]
    Idle,
    /// A page request is outstanding.
    Loading,
    /// The last page request succeeded (possibly with zero results).
    Succeeded,
    /// The last page request failed; only a new submission leaves this state.
    Failed,
}

impl FetchStatus {
    /// Returns whether a page request is outstanding.
    #[must_use]
    pub fn is_loading(self) -> bool {
        self == FetchStatus::Loading
    }
}

/// Snapshot of everything the gallery view needs to render.
///
/// Built fresh for each frame; it borrows from the controllers and cannot
/// mutate them.
// Allow excessive bools: read-only UI snapshot with orthogonal flags.
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, Copy)]
pub struct GallerySnapshot<'a> {
    /// Active query, if any.
    pub query: Option<&'a SearchQuery>,
    /// Accumulated results of the active query.
    pub items: &'a [ImageItem],
    /// Total hits reported by the service.
    pub total_hits: u32,
    /// Status of the latest fetch.
    pub status: FetchStatus,
    /// Whether a fetch is outstanding (spinner visible).
    pub is_loading: bool,
    /// Whether the "Load more" action is available.
    pub can_load_more: bool,
    /// Whether the active query returned nothing at all.
    pub is_empty_result: bool,
    /// Image shown in the preview overlay.
    pub selection: Option<&'a Selection>,
}

impl<'a> GallerySnapshot<'a> {
    /// Captures the current state of both controllers.
    #[must_use]
    pub fn capture(
        pagination: &'a SearchPaginationController,
        selection: &'a SelectionController,
    ) -> Self {
        let status = pagination.status();
        Self {
            query: pagination.query(),
            items: pagination.items(),
            total_hits: pagination.total_hits(),
            status,
            is_loading: status.is_loading(),
            can_load_more: pagination.can_load_more(),
            is_empty_result: status == FetchStatus::Succeeded && pagination.items().is_empty(),
            selection: selection.current(),
        }
    }
}
