// SPDX-License-Identifier: MPL-2.0
//! Pixabay search adapter.
//!
//! Implements [`ImageSearchClient`] on top of the Pixabay REST API:
//!
//! ```text
//! GET {base_url}?key=..&q=..&page=..&per_page=12&image_type=photo&orientation=horizontal&safesearch=true
//! → { "total": n, "totalHits": n, "hits": [{ "id", "webformatURL", "largeImageURL", "tags" }] }
//! ```
//!
//! `tags` arrives as one comma-separated string and is split into an ordered
//! list of trimmed, non-empty tags.

use crate::application::port::{ImageSearchClient, SearchError};
use crate::domain::search::{ImageItem, PageNumber, ResultPage, SearchQuery, PER_PAGE};
use futures_util::future::BoxFuture;
use futures_util::FutureExt;
use serde::Deserialize;

/// Default API endpoint.
pub const DEFAULT_BASE_URL: &str = "https://pixabay.com/api/";

/// Request parameters that do not change between searches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixabaySettings {
    /// API endpoint.
    pub base_url: String,
    /// Account key; searches fail with [`SearchError::MissingApiKey`] without one.
    pub api_key: Option<String>,
    /// `photo`, `illustration`, `vector` or `all`.
    pub image_type: String,
    /// `horizontal`, `vertical` or `all`.
    pub orientation: String,
    /// Filters results unsuitable for all ages.
    pub safe_search: bool,
}

impl Default for PixabaySettings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: None,
            image_type: "photo".to_string(),
            orientation: "horizontal".to_string(),
            safe_search: true,
        }
    }
}

// =============================================================================
// Wire format
// =============================================================================

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SearchResponse {
    total_hits: u32,
    hits: Vec<Hit>,
}

#[derive(Debug, Deserialize)]
struct Hit {
    id: u64,
    #[serde(rename = "webformatURL")]
    webformat_url: String,
    #[serde(rename = "largeImageURL")]
    large_image_url: String,
    #[serde(default)]
    tags: String,
}

impl From<Hit> for ImageItem {
    fn from(hit: Hit) -> Self {
        Self {
            id: hit.id,
            thumbnail_url: hit.webformat_url,
            large_image_url: hit.large_image_url,
            tags: split_tags(&hit.tags),
        }
    }
}

impl From<SearchResponse> for ResultPage {
    fn from(response: SearchResponse) -> Self {
        ResultPage::new(
            response.hits.into_iter().map(ImageItem::from).collect(),
            response.total_hits,
        )
    }
}

fn split_tags(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(String::from)
        .collect()
}

// =============================================================================
// PixabayClient
// =============================================================================

/// Search client for the Pixabay API.
#[derive(Debug, Clone)]
pub struct PixabayClient {
    http: reqwest::Client,
    settings: PixabaySettings,
}

impl PixabayClient {
    /// Creates a client on top of the shared HTTP client.
    #[must_use]
    pub fn with_client(http: reqwest::Client, settings: PixabaySettings) -> Self {
        Self { http, settings }
    }

    /// Builds the query string parameters, excluding the API key.
    fn query_params(&self, query: &SearchQuery, page: PageNumber) -> Vec<(&'static str, String)> {
        vec![
            ("q", query.as_str().to_string()),
            ("page", page.get().to_string()),
            ("per_page", PER_PAGE.to_string()),
            ("image_type", self.settings.image_type.clone()),
            ("orientation", self.settings.orientation.clone()),
            ("safesearch", self.settings.safe_search.to_string()),
        ]
    }
}

impl ImageSearchClient for PixabayClient {
    fn fetch(
        &self,
        query: &SearchQuery,
        page: PageNumber,
    ) -> BoxFuture<'static, Result<ResultPage, SearchError>> {
        let Some(api_key) = self.settings.api_key.clone() else {
            return futures_util::future::ready(Err(SearchError::MissingApiKey)).boxed();
        };

        let request = self
            .http
            .get(self.settings.base_url.as_str())
            .query(&[("key", api_key)])
            .query(&self.query_params(query, page));

        async move {
            let response = request
                .send()
                .await
                .map_err(|e| SearchError::Transport(e.to_string()))?;

            let status = response.status();
            if !status.is_success() {
                return Err(SearchError::Status(status.as_u16()));
            }

            let body: SearchResponse = response.json().await.map_err(|e| {
                if e.is_decode() {
                    SearchError::Decode(e.to_string())
                } else {
                    SearchError::Transport(e.to_string())
                }
            })?;
            Ok(ResultPage::from(body))
        }
        .boxed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "total": 4692,
        "totalHits": 500,
        "hits": [
            {
                "id": 195893,
                "pageURL": "https://pixabay.com/en/blossom-bloom-flower-195893/",
                "type": "photo",
                "tags": "blossom, bloom, flower",
                "previewURL": "https://cdn.pixabay.com/photo/2013/10/15/09/12/flower-195893_150.jpg",
                "webformatURL": "https://pixabay.com/get/35bbf209e13e39d2_640.jpg",
                "largeImageURL": "https://pixabay.com/get/ed6a99fd0a76647_1280.jpg",
                "views": 7671,
                "likes": 74
            },
            {
                "id": 73424,
                "webformatURL": "https://pixabay.com/get/73424_640.jpg",
                "largeImageURL": "https://pixabay.com/get/73424_1280.jpg",
                "tags": ""
            }
        ]
    }"#;

    #[test]
    fn response_maps_to_result_page() {
        let response: SearchResponse = serde_json::from_str(SAMPLE).expect("sample parses");
        let page = ResultPage::from(response);

        assert_eq!(page.total_hits, 500);
        assert_eq!(page.items.len(), 2);

        let first = &page.items[0];
        assert_eq!(first.id, 195_893);
        assert_eq!(first.thumbnail_url, "https://pixabay.com/get/35bbf209e13e39d2_640.jpg");
        assert_eq!(first.large_image_url, "https://pixabay.com/get/ed6a99fd0a76647_1280.jpg");
        assert_eq!(first.tags, vec!["blossom", "bloom", "flower"]);

        assert!(page.items[1].tags.is_empty());
    }

    #[test]
    fn empty_response_maps_to_empty_page() {
        let response: SearchResponse =
            serde_json::from_str(r#"{"total":0,"totalHits":0,"hits":[]}"#).expect("parses");
        let page = ResultPage::from(response);
        assert!(page.is_empty());
        assert_eq!(page.total_hits, 0);
    }

    #[test]
    fn split_tags_drops_blank_entries() {
        assert_eq!(split_tags(" sea ,, sky ,"), vec!["sea", "sky"]);
        assert!(split_tags("").is_empty());
    }

    #[test]
    fn query_params_carry_page_and_page_size() {
        let client = PixabayClient::with_client(reqwest::Client::new(), PixabaySettings::default());
        let query = SearchQuery::parse("yellow flowers").unwrap();
        let params = client.query_params(&query, PageNumber::new(3).unwrap());

        assert!(params.contains(&("q", "yellow flowers".to_string())));
        assert!(params.contains(&("page", "3".to_string())));
        assert!(params.contains(&("per_page", "12".to_string())));
        assert!(params.contains(&("image_type", "photo".to_string())));
        assert!(params.contains(&("safesearch", "true".to_string())));
        assert!(params.iter().all(|(name, _)| *name != "key"));
    }

    #[test]
    fn missing_api_key_fails_without_request() {
        let client = PixabayClient::with_client(reqwest::Client::new(), PixabaySettings::default());
        let query = SearchQuery::parse("cats").unwrap();
        let result = client
            .fetch(&query, PageNumber::FIRST)
            .now_or_never()
            .expect("resolves immediately");
        assert_eq!(result, Err(SearchError::MissingApiKey));
    }
}
