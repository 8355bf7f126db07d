// SPDX-License-Identifier: MPL-2.0
//! Image search domain types.
//!
//! Value objects shared by the pagination controller, the search port and
//! the infrastructure adapters.

mod newtypes;
mod types;

pub use newtypes::{PageNumber, QueryError, SearchQuery, PER_PAGE};
pub use types::{ImageItem, ResultPage, Selection};
