// SPDX-License-Identifier: MPL-2.0
//! Shared HTTP client and image byte downloads.
//!
//! Thumbnails and large previews are plain image URLs returned by the search
//! service; Iced cannot load remote images itself, so the bytes are fetched
//! here and turned into image handles by the UI layer.

use std::future::Future;
use std::time::Duration;
use thiserror::Error;

/// User agent sent with every request.
pub const USER_AGENT: &str = concat!("ImageFinder/", env!("CARGO_PKG_VERSION"));

/// Maximum time a single request may take before it is treated as failed.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(20);

/// Builds the HTTP client shared by all adapters.
///
/// # Errors
///
/// Returns an error if the TLS backend cannot be initialized.
pub fn build_client() -> reqwest::Result<reqwest::Client> {
    reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::limited(10))
        .user_agent(USER_AGENT)
        .timeout(REQUEST_TIMEOUT)
        .build()
}

/// Errors that can occur while downloading image bytes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DownloadError {
    /// The request could not be sent or the body could not be read.
    #[error("Image download failed: {0}")]
    Transport(String),

    /// The server answered with a non-success HTTP status.
    #[error("Image download returned HTTP status {0}")]
    Status(u16),
}

/// Downloads image bytes for thumbnails and previews.
#[derive(Debug, Clone)]
pub struct ImageDownloader {
    http: reqwest::Client,
}

impl ImageDownloader {
    /// Creates a downloader sharing an existing client.
    #[must_use]
    pub fn with_client(http: reqwest::Client) -> Self {
        Self { http }
    }

    /// Fetches the raw bytes behind `url`.
    pub fn fetch_bytes(
        &self,
        url: String,
    ) -> impl Future<Output = Result<Vec<u8>, DownloadError>> + Send + 'static {
        let request = self.http.get(url);
        async move {
            let response = request
                .send()
                .await
                .map_err(|e| DownloadError::Transport(e.to_string()))?;

            let status = response.status();
            if !status.is_success() {
                return Err(DownloadError::Status(status.as_u16()));
            }

            let bytes = response
                .bytes()
                .await
                .map_err(|e| DownloadError::Transport(e.to_string()))?;
            Ok(bytes.to_vec())
        }
    }
}
