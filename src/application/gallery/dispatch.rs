// SPDX-License-Identifier: MPL-2.0
//! Bridges fetch requests to the search port.

use super::pagination::FetchRequest;
use crate::application::port::{ImageSearchClient, SearchError};
use crate::domain::search::ResultPage;
use futures_util::FutureExt;
use std::future::Future;

/// A finished fetch, paired with the request that started it.
#[derive(Debug, Clone)]
pub struct FetchOutcome {
    pub request: FetchRequest,
    pub result: Result<ResultPage, SearchError>,
}

/// Runs `request` against `client`.
///
/// The returned future owns everything it needs, so it can be handed to
/// `Task::perform` and outlive the borrow of `client`.
pub fn dispatch(
    client: &dyn ImageSearchClient,
    request: FetchRequest,
) -> impl Future<Output = FetchOutcome> + Send + 'static {
    client
        .fetch(&request.query, request.page)
        .map(move |result| FetchOutcome { request, result })
}
