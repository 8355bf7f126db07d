// SPDX-License-Identifier: MPL-2.0
//! Query/pagination state machine.
//!
//! [`SearchPaginationController`] owns the active query, the current page,
//! the accumulated results and the derived status flags. It never performs
//! I/O itself: submissions and load-more requests return a [`FetchRequest`]
//! that the caller runs against an
//! [`ImageSearchClient`](crate::application::port::ImageSearchClient), and
//! the outcome is fed back through
//! [`on_fetch_settled`](SearchPaginationController::on_fetch_settled).
//!
//! # States
//!
//! ```text
//! Idle ──submit──▶ Loading ──ok, more──▶ Succeeded(has_more) ──load_more──▶ Loading
//!                     │     ──ok, last──▶ Succeeded(done)
//!                     │     ──ok, empty page 1──▶ Succeeded(empty)
//!                     └─────err──▶ Failed
//! any ──submit──▶ Loading (full reset)
//! ```
//!
//! # Stale responses
//!
//! Only the most recently issued request is authoritative. Each request
//! carries a generation number bumped on every accepted submission, so a
//! settlement for an older query, an older page, or an earlier submission of
//! the same keyword never matches and is discarded.

use super::selection::SelectionController;
use super::status::{FetchStatus, GallerySnapshot};
use crate::application::port::{NotificationSink, SearchError};
use crate::domain::search::{ImageItem, PageNumber, ResultPage, SearchQuery};
use std::ops::Range;

/// Warning shown when the submitted keyword is blank.
pub const EMPTY_QUERY_KEY: &str = "notification-empty-query";

/// Warning shown when a fresh query has no results.
pub const NO_RESULTS_KEY: &str = "notification-no-results";

/// Error shown when a page fetch fails.
pub const SEARCH_ERROR_KEY: &str = "notification-search-error";

/// A page fetch the controller expects to be run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchRequest {
    /// Keyword to search for.
    pub query: SearchQuery,
    /// Page to fetch.
    pub page: PageNumber,
    /// Submission this request belongs to.
    generation: u64,
}

/// What a settlement did to the result set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Settlement {
    /// Items were appended; the range indexes the new items.
    Appended(Range<usize>),
    /// The first page of a fresh query came back empty.
    NoResults,
    /// The fetch failed; earlier pages are kept.
    Failed,
    /// The request was superseded and its result ignored.
    Stale,
}

/// Owns the query, page and accumulated results of the gallery.
#[derive(Debug, Clone, Default)]
pub struct SearchPaginationController {
    query: Option<SearchQuery>,
    page: PageNumber,
    items: Vec<ImageItem>,
    status: FetchStatus,
    has_more_pages: bool,
    /// Total reported by the service for the active query.
    total_hits: u32,
    /// The single authoritative outstanding request.
    pending: Option<FetchRequest>,
    generation: u64,
}

impl SearchPaginationController {
    /// Creates an idle controller with no query.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a new search.
    ///
    /// Blank keywords are rejected with a warning and leave every field
    /// untouched. Any other keyword resets the result set to page 1, even
    /// when it equals the active query.
    pub fn submit_query(
        &mut self,
        keyword: &str,
        sink: &mut impl NotificationSink,
    ) -> Option<FetchRequest> {
        let query = match SearchQuery::parse(keyword) {
            Ok(query) => query,
            Err(err) => {
                tracing::debug!(%err, "rejected search submission");
                sink.warn(EMPTY_QUERY_KEY);
                return None;
            }
        };

        self.generation = self.generation.wrapping_add(1);
        self.query = Some(query.clone());
        self.page = PageNumber::FIRST;
        self.items.clear();
        self.has_more_pages = false;
        self.total_hits = 0;
        self.status = FetchStatus::Loading;

        tracing::info!(query = %query, generation = self.generation, "search submitted");
        Some(self.issue(query))
    }

    /// Requests the next page of the active query.
    ///
    /// Returns `None` without touching state unless more pages exist and no
    /// fetch is outstanding.
    pub fn load_more(&mut self) -> Option<FetchRequest> {
        if !self.can_load_more() {
            return None;
        }
        let query = self.query.clone()?;

        self.page = self.page.next();
        self.status = FetchStatus::Loading;

        tracing::info!(query = %query, page = %self.page, "loading next page");
        Some(self.issue(query))
    }

    /// Applies the outcome of `request`.
    ///
    /// Settlements that do not belong to the outstanding request are
    /// discarded without notifying the user.
    pub fn on_fetch_settled(
        &mut self,
        request: &FetchRequest,
        result: Result<ResultPage, SearchError>,
        sink: &mut impl NotificationSink,
    ) -> Settlement {
        if self.pending.as_ref() != Some(request) {
            tracing::debug!(
                query = %request.query,
                page = %request.page,
                generation = request.generation,
                "discarding stale search response"
            );
            return Settlement::Stale;
        }
        self.pending = None;

        match result {
            Ok(page) if page.is_empty() && request.page.is_first() => {
                tracing::info!(query = %request.query, "search returned no results");
                self.has_more_pages = false;
                self.total_hits = 0;
                self.status = FetchStatus::Succeeded;
                sink.warn(NO_RESULTS_KEY);
                Settlement::NoResults
            }
            Ok(page) => {
                // An empty later page means the service ran dry early.
                self.has_more_pages =
                    !page.is_empty() && request.page.has_more_after(page.total_hits);
                self.total_hits = page.total_hits;
                self.status = FetchStatus::Succeeded;

                let start = self.items.len();
                self.items.extend(page.items);
                tracing::info!(
                    query = %request.query,
                    page = %request.page,
                    total_hits = page.total_hits,
                    loaded = self.items.len(),
                    has_more = self.has_more_pages,
                    "search page loaded"
                );
                Settlement::Appended(start..self.items.len())
            }
            Err(err) => {
                tracing::warn!(
                    query = %request.query,
                    page = %request.page,
                    error = %err,
                    "search page failed"
                );
                self.status = FetchStatus::Failed;
                sink.error(SEARCH_ERROR_KEY);
                Settlement::Failed
            }
        }
    }

    /// Returns whether [`load_more`](Self::load_more) would issue a request.
    ///
    /// A failed fetch blocks paging until the next submission, even though
    /// the service may still have pages left.
    #[must_use]
    pub fn can_load_more(&self) -> bool {
        self.has_more_pages && self.status == FetchStatus::Succeeded
    }

    /// Returns the active query, if any.
    #[must_use]
    pub fn query(&self) -> Option<&SearchQuery> {
        self.query.as_ref()
    }

    /// Returns the most recently requested page.
    #[must_use]
    pub fn page(&self) -> PageNumber {
        self.page
    }

    /// Returns the accumulated results of the active query.
    #[must_use]
    pub fn items(&self) -> &[ImageItem] {
        &self.items
    }

    /// Returns the status of the latest fetch.
    #[must_use]
    pub fn status(&self) -> FetchStatus {
        self.status
    }

    /// Returns whether the service reported more pages after the last one.
    #[must_use]
    pub fn has_more_pages(&self) -> bool {
        self.has_more_pages
    }

    /// Returns the total number of hits reported for the active query.
    #[must_use]
    pub fn total_hits(&self) -> u32 {
        self.total_hits
    }

    /// Returns the outstanding request, if any.
    #[must_use]
    pub fn pending(&self) -> Option<&FetchRequest> {
        self.pending.as_ref()
    }

    /// Captures what the gallery view renders, together with `selection`.
    #[must_use]
    pub fn snapshot<'a>(&'a self, selection: &'a SelectionController) -> GallerySnapshot<'a> {
        GallerySnapshot::capture(self, selection)
    }

    fn issue(&mut self, query: SearchQuery) -> FetchRequest {
        let request = FetchRequest {
            query,
            page: self.page,
            generation: self.generation,
        };
        self.pending = Some(request.clone());
        request
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::search::PER_PAGE;
    use crate::test_utils::{image, page_of, RecordingSink};

    fn transport_error() -> SearchError {
        SearchError::Transport("connection refused".to_string())
    }

    #[test]
    fn new_controller_is_idle() {
        let controller = SearchPaginationController::new();
        assert_eq!(controller.status(), FetchStatus::Idle);
        assert!(controller.query().is_none());
        assert!(controller.items().is_empty());
        assert!(controller.pending().is_none());
        assert!(!controller.can_load_more());
    }

    #[test]
    fn blank_submission_warns_once_and_changes_nothing() {
        for keyword in ["", " ", "\t", "  \n  "] {
            let mut sink = RecordingSink::default();
            let mut controller = SearchPaginationController::new();
            let request = controller.submit_query("bees", &mut sink).unwrap();
            controller.on_fetch_settled(&request, Ok(page_of(0..12, 30)), &mut sink);
            let before = controller.clone();

            assert!(controller.submit_query(keyword, &mut sink).is_none());

            assert_eq!(sink.warnings, vec![EMPTY_QUERY_KEY.to_string()]);
            assert!(sink.errors.is_empty());
            assert_eq!(controller.query(), before.query());
            assert_eq!(controller.page(), before.page());
            assert_eq!(controller.items(), before.items());
            assert_eq!(controller.status(), before.status());
            assert_eq!(controller.has_more_pages(), before.has_more_pages());
            assert_eq!(controller.pending(), before.pending());
        }
    }

    #[test]
    fn submission_trims_and_requests_first_page() {
        let mut sink = RecordingSink::default();
        let mut controller = SearchPaginationController::new();

        let request = controller.submit_query("  mountains ", &mut sink).unwrap();

        assert_eq!(request.query.as_str(), "mountains");
        assert_eq!(request.page, PageNumber::FIRST);
        assert_eq!(controller.status(), FetchStatus::Loading);
        assert_eq!(controller.pending(), Some(&request));
        assert_eq!(sink.total(), 0);
    }

    #[test]
    fn pages_accumulate_in_fetch_order() {
        let mut sink = RecordingSink::default();
        let mut controller = SearchPaginationController::new();

        let first = controller.submit_query("cats", &mut sink).unwrap();
        let settled = controller.on_fetch_settled(&first, Ok(page_of(0..12, 30)), &mut sink);
        assert_eq!(settled, Settlement::Appended(0..12));

        let second = controller.load_more().unwrap();
        assert_eq!(second.page.get(), 2);
        let settled = controller.on_fetch_settled(&second, Ok(page_of(12..24, 30)), &mut sink);
        assert_eq!(settled, Settlement::Appended(12..24));

        let ids: Vec<u64> = controller.items().iter().map(|item| item.id).collect();
        assert_eq!(ids, (0..24).collect::<Vec<_>>());
        assert_eq!(sink.total(), 0);
    }

    #[test]
    fn has_more_pages_follows_total_hits() {
        // 30 hits at 12 per page: true, true, false.
        let mut sink = RecordingSink::default();
        let mut controller = SearchPaginationController::new();

        let request = controller.submit_query("cats", &mut sink).unwrap();
        controller.on_fetch_settled(&request, Ok(page_of(0..12, 30)), &mut sink);
        assert!(controller.has_more_pages());

        let request = controller.load_more().unwrap();
        controller.on_fetch_settled(&request, Ok(page_of(12..24, 30)), &mut sink);
        assert!(controller.has_more_pages());

        let request = controller.load_more().unwrap();
        controller.on_fetch_settled(&request, Ok(page_of(24..30, 30)), &mut sink);
        assert!(!controller.has_more_pages());
        assert_eq!(controller.status(), FetchStatus::Succeeded);
        assert_eq!(controller.items().len(), 30);
        assert_eq!(controller.page().get() * PER_PAGE, 36);
    }

    #[test]
    fn zero_hits_on_first_page_warns_and_succeeds() {
        let mut sink = RecordingSink::default();
        let mut controller = SearchPaginationController::new();

        let request = controller.submit_query("zzzyxq", &mut sink).unwrap();
        let settled = controller.on_fetch_settled(&request, Ok(page_of(0..0, 0)), &mut sink);

        assert_eq!(settled, Settlement::NoResults);
        assert!(controller.items().is_empty());
        assert!(!controller.has_more_pages());
        assert_eq!(controller.status(), FetchStatus::Succeeded);
        assert_eq!(sink.warnings, vec![NO_RESULTS_KEY.to_string()]);
        assert!(sink.errors.is_empty());
    }

    #[test]
    fn failed_second_page_keeps_first_page() {
        let mut sink = RecordingSink::default();
        let mut controller = SearchPaginationController::new();

        let request = controller.submit_query("dogs", &mut sink).unwrap();
        controller.on_fetch_settled(&request, Ok(page_of(0..12, 100)), &mut sink);
        let request = controller.load_more().unwrap();
        let settled = controller.on_fetch_settled(&request, Err(transport_error()), &mut sink);

        assert_eq!(settled, Settlement::Failed);
        assert_eq!(controller.items().len(), 12);
        assert_eq!(controller.status(), FetchStatus::Failed);
        assert_eq!(sink.errors, vec![SEARCH_ERROR_KEY.to_string()]);
        assert!(sink.warnings.is_empty());
    }

    #[test]
    fn failure_keeps_remaining_page_count() {
        let mut sink = RecordingSink::default();
        let mut controller = SearchPaginationController::new();

        let request = controller.submit_query("dogs", &mut sink).unwrap();
        controller.on_fetch_settled(&request, Ok(page_of(0..12, 100)), &mut sink);
        let request = controller.load_more().unwrap();
        controller.on_fetch_settled(&request, Err(transport_error()), &mut sink);

        assert!(controller.has_more_pages());
        assert!(!controller.can_load_more());
        assert!(!controller.snapshot(&SelectionController::new()).can_load_more);
    }

    #[test]
    fn failure_is_terminal_until_resubmitted() {
        let mut sink = RecordingSink::default();
        let mut controller = SearchPaginationController::new();

        let request = controller.submit_query("dogs", &mut sink).unwrap();
        controller.on_fetch_settled(&request, Ok(page_of(0..12, 100)), &mut sink);
        let request = controller.load_more().unwrap();
        controller.on_fetch_settled(&request, Err(transport_error()), &mut sink);

        assert!(controller.load_more().is_none());
        assert!(!controller.can_load_more());

        let request = controller.submit_query("dogs", &mut sink).unwrap();
        assert_eq!(request.page, PageNumber::FIRST);
        assert!(controller.items().is_empty());
        assert_eq!(controller.status(), FetchStatus::Loading);
    }

    #[test]
    fn load_more_without_more_pages_is_a_no_op() {
        let mut sink = RecordingSink::default();
        let mut controller = SearchPaginationController::new();

        assert!(controller.load_more().is_none());
        assert_eq!(controller.status(), FetchStatus::Idle);

        let request = controller.submit_query("moss", &mut sink).unwrap();
        controller.on_fetch_settled(&request, Ok(page_of(0..5, 5)), &mut sink);
        let before = controller.clone();

        assert!(controller.load_more().is_none());
        assert_eq!(controller.page(), before.page());
        assert_eq!(controller.status(), before.status());
        assert_eq!(controller.items(), before.items());
        assert!(controller.pending().is_none());
    }

    #[test]
    fn load_more_is_rejected_while_loading() {
        let mut sink = RecordingSink::default();
        let mut controller = SearchPaginationController::new();

        let request = controller.submit_query("birds", &mut sink).unwrap();
        controller.on_fetch_settled(&request, Ok(page_of(0..12, 60)), &mut sink);
        let second = controller.load_more().unwrap();

        assert!(controller.load_more().is_none());
        assert_eq!(controller.page().get(), 2);
        assert_eq!(controller.pending(), Some(&second));
    }

    #[test]
    fn resubmission_during_load_more_discards_old_page() {
        let mut sink = RecordingSink::default();
        let mut controller = SearchPaginationController::new();

        let first = controller.submit_query("cats", &mut sink).unwrap();
        controller.on_fetch_settled(&first, Ok(page_of(0..12, 48)), &mut sink);
        let stale = controller.load_more().unwrap();

        let fresh = controller.submit_query("dogs", &mut sink).unwrap();
        assert_eq!(
            controller.on_fetch_settled(&stale, Ok(page_of(12..24, 48)), &mut sink),
            Settlement::Stale
        );
        assert!(controller.items().is_empty());
        assert_eq!(controller.status(), FetchStatus::Loading);

        controller.on_fetch_settled(&fresh, Ok(page_of(100..112, 20)), &mut sink);
        let ids: Vec<u64> = controller.items().iter().map(|item| item.id).collect();
        assert_eq!(ids, (100..112).collect::<Vec<_>>());
        assert_eq!(controller.query().map(SearchQuery::as_str), Some("dogs"));
        assert_eq!(sink.total(), 0);
    }

    #[test]
    fn stale_response_arriving_after_fresh_one_is_ignored() {
        let mut sink = RecordingSink::default();
        let mut controller = SearchPaginationController::new();

        let old = controller.submit_query("cats", &mut sink).unwrap();
        let fresh = controller.submit_query("dogs", &mut sink).unwrap();

        controller.on_fetch_settled(&fresh, Ok(page_of(0..12, 12)), &mut sink);
        let settled = controller.on_fetch_settled(&old, Err(transport_error()), &mut sink);

        assert_eq!(settled, Settlement::Stale);
        assert_eq!(controller.status(), FetchStatus::Succeeded);
        assert_eq!(controller.items().len(), 12);
        assert!(sink.errors.is_empty());
    }

    #[test]
    fn same_keyword_resubmission_supersedes_previous_request() {
        let mut sink = RecordingSink::default();
        let mut controller = SearchPaginationController::new();

        let old = controller.submit_query("cats", &mut sink).unwrap();
        let fresh = controller.submit_query("cats", &mut sink).unwrap();
        assert_ne!(old, fresh);
        assert_eq!(old.query, fresh.query);
        assert_eq!(old.page, fresh.page);

        assert_eq!(
            controller.on_fetch_settled(&old, Ok(page_of(0..12, 30)), &mut sink),
            Settlement::Stale
        );
        assert!(controller.items().is_empty());

        controller.on_fetch_settled(&fresh, Ok(page_of(0..12, 30)), &mut sink);
        assert_eq!(controller.items().len(), 12);
    }

    #[test]
    fn resubmitting_same_keyword_restarts_from_first_page() {
        let mut sink = RecordingSink::default();
        let mut controller = SearchPaginationController::new();

        let request = controller.submit_query("cats", &mut sink).unwrap();
        controller.on_fetch_settled(&request, Ok(page_of(0..12, 30)), &mut sink);
        let request = controller.load_more().unwrap();
        controller.on_fetch_settled(&request, Ok(page_of(12..24, 30)), &mut sink);

        let request = controller.submit_query("cats", &mut sink).unwrap();
        assert_eq!(request.page, PageNumber::FIRST);
        assert!(controller.items().is_empty());
        assert!(!controller.has_more_pages());
    }

    #[test]
    fn duplicate_settlement_is_applied_once() {
        let mut sink = RecordingSink::default();
        let mut controller = SearchPaginationController::new();

        let request = controller.submit_query("kites", &mut sink).unwrap();
        controller.on_fetch_settled(&request, Ok(page_of(0..12, 50)), &mut sink);
        let again = controller.on_fetch_settled(&request, Ok(page_of(0..12, 50)), &mut sink);

        assert_eq!(again, Settlement::Stale);
        assert_eq!(controller.items().len(), 12);
    }

    #[test]
    fn empty_later_page_stops_pagination() {
        let mut sink = RecordingSink::default();
        let mut controller = SearchPaginationController::new();

        let request = controller.submit_query("rare", &mut sink).unwrap();
        controller.on_fetch_settled(&request, Ok(page_of(0..12, 500)), &mut sink);
        let request = controller.load_more().unwrap();
        let settled = controller.on_fetch_settled(&request, Ok(page_of(0..0, 500)), &mut sink);

        assert_eq!(settled, Settlement::Appended(12..12));
        assert!(!controller.has_more_pages());
        assert!(sink.warnings.is_empty());
    }

    #[test]
    fn appended_items_keep_their_fields() {
        let mut sink = RecordingSink::default();
        let mut controller = SearchPaginationController::new();

        let request = controller.submit_query("tags", &mut sink).unwrap();
        controller.on_fetch_settled(&request, Ok(page_of(3..4, 1)), &mut sink);

        assert_eq!(controller.items(), &[image(3)]);
    }
}
