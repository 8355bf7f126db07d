// SPDX-License-Identifier: MPL-2.0
//! Image search port definition.
//!
//! This module defines the [`ImageSearchClient`] trait for paged keyword
//! search. The Pixabay adapter in `infrastructure::pixabay` implements it;
//! tests substitute scripted clients.

use crate::domain::search::{PageNumber, ResultPage, SearchQuery};
use futures_util::future::BoxFuture;
use thiserror::Error;

// =============================================================================
// SearchError
// =============================================================================

/// Errors that can occur while fetching a result page.
///
/// Variants carry rendered messages rather than source errors so the value
/// can travel inside cloneable UI messages.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    /// No API key is configured, so no request was sent.
    #[error("No API key configured for the search service")]
    MissingApiKey,

    /// The request could not be sent or the connection failed.
    #[error("Search request failed: {0}")]
    Transport(String),

    /// The service answered with a non-success HTTP status.
    #[error("Search service returned HTTP status {0}")]
    Status(u16),

    /// The response body could not be decoded.
    #[error("Invalid search response: {0}")]
    Decode(String),
}

// =============================================================================
// ImageSearchClient Trait
// =============================================================================

/// Port for fetching one page of keyword search results.
///
/// Pages are 1-based and contain at most
/// [`PER_PAGE`](crate::domain::search::PER_PAGE) items.
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync`; the returned future runs on the
/// UI runtime's executor, detached from the caller.
///
/// # Example
///
/// ```ignore
/// use image_finder::application::port::ImageSearchClient;
/// use image_finder::domain::search::{PageNumber, SearchQuery};
///
/// async fn first_page(client: &impl ImageSearchClient) {
///     let query = SearchQuery::parse("lighthouse").unwrap();
///     match client.fetch(&query, PageNumber::FIRST).await {
///         Ok(page) => println!("{} of {} hits", page.items.len(), page.total_hits),
///         Err(e) => eprintln!("search failed: {e}"),
///     }
/// }
/// ```
pub trait ImageSearchClient: Send + Sync {
    /// Fetches `page` of the results for `query`.
    ///
    /// # Errors
    ///
    /// The future resolves to a [`SearchError`] if the request cannot be
    /// sent, the service rejects it, or the response cannot be decoded.
    fn fetch(
        &self,
        query: &SearchQuery,
        page: PageNumber,
    ) -> BoxFuture<'static, Result<ResultPage, SearchError>>;
}
