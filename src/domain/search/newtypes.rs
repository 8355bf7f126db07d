// SPDX-License-Identifier: MPL-2.0
//! Search newtypes.
//!
//! This module provides type-safe wrappers for search values,
//! ensuring they are always valid once constructed.

use std::fmt;
use std::num::NonZeroU32;

/// Number of items requested per page.
///
/// Shared between the pagination controller and every search client so that
/// "has more pages" can be derived from the reported total.
pub const PER_PAGE: u32 = 12;

// =============================================================================
// QueryError
// =============================================================================

/// Reasons a submitted keyword is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryError {
    /// The keyword is empty or whitespace only.
    Empty,
}

impl fmt::Display for QueryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueryError::Empty => write!(f, "Search text is empty"),
        }
    }
}

impl std::error::Error for QueryError {}

// =============================================================================
// SearchQuery
// =============================================================================

/// Active search keyword, guaranteed to be trimmed and non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SearchQuery(String);

impl SearchQuery {
    /// Parses a raw keyword as typed by the user.
    ///
    /// Surrounding whitespace is removed; a keyword that is empty afterwards
    /// is rejected.
    ///
    /// # Errors
    ///
    /// Returns [`QueryError::Empty`] for empty or whitespace-only input.
    pub fn parse(raw: &str) -> Result<Self, QueryError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(QueryError::Empty);
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Returns the keyword.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SearchQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// =============================================================================
// PageNumber
// =============================================================================

/// 1-based page index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PageNumber(NonZeroU32);

impl PageNumber {
    /// The first page of every query.
    pub const FIRST: Self = Self(NonZeroU32::MIN);

    /// Creates a page number, returning `None` for zero.
    #[must_use]
    pub fn new(page: u32) -> Option<Self> {
        NonZeroU32::new(page).map(Self)
    }

    /// Returns the raw 1-based value.
    #[must_use]
    pub fn get(self) -> u32 {
        self.0.get()
    }

    /// Returns whether this is the first page.
    #[must_use]
    pub fn is_first(self) -> bool {
        self == Self::FIRST
    }

    /// Returns the following page.
    ///
    /// Saturates at `u32::MAX`; no search service reports that many pages.
    #[must_use]
    pub fn next(self) -> Self {
        Self(self.0.saturating_add(1))
    }

    /// Returns whether items remain beyond this page for the given total.
    ///
    /// True iff `page * PER_PAGE < total_hits`.
    #[must_use]
    pub fn has_more_after(self, total_hits: u32) -> bool {
        u64::from(self.get()) * u64::from(PER_PAGE) < u64::from(total_hits)
    }
}

impl Default for PageNumber {
    fn default() -> Self {
        Self::FIRST
    }
}

impl fmt::Display for PageNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_is_trimmed() {
        let query = SearchQuery::parse("  cats \t").unwrap();
        assert_eq!(query.as_str(), "cats");
    }

    #[test]
    fn blank_queries_are_rejected() {
        for raw in ["", " ", "\t\n", "   "] {
            assert_eq!(SearchQuery::parse(raw), Err(QueryError::Empty));
        }
    }

    #[test]
    fn inner_whitespace_is_kept() {
        let query = SearchQuery::parse(" red fox ").unwrap();
        assert_eq!(query.to_string(), "red fox");
    }

    #[test]
    fn page_zero_is_invalid() {
        assert!(PageNumber::new(0).is_none());
        assert_eq!(PageNumber::new(1), Some(PageNumber::FIRST));
    }

    #[test]
    fn next_advances_by_one() {
        let page = PageNumber::FIRST.next().next();
        assert_eq!(page.get(), 3);
        assert!(!page.is_first());
    }

    #[test]
    fn has_more_after_follows_page_size() {
        // 30 hits at 12 per page: pages 1 and 2 leave more, page 3 does not.
        let first = PageNumber::FIRST;
        assert!(first.has_more_after(30));
        assert!(first.next().has_more_after(30));
        assert!(!first.next().next().has_more_after(30));
    }

    #[test]
    fn exact_multiple_has_no_more() {
        assert!(!PageNumber::FIRST.has_more_after(PER_PAGE));
        assert!(!PageNumber::FIRST.has_more_after(0));
    }

    #[test]
    fn large_pages_do_not_overflow() {
        let page = PageNumber::new(u32::MAX).unwrap();
        assert!(!page.has_more_after(u32::MAX));
        assert_eq!(page.next(), page);
    }
}
