// SPDX-License-Identifier: MPL-2.0
//! Infrastructure layer adapters.
//!
//! This module contains concrete implementations of the port traits defined in
//! `application::port`. These adapters wrap external dependencies like the
//! HTTP stack and remote web services.
//!
//! # Available Adapters
//!
//! - [`pixabay`]: Keyword image search via the Pixabay REST API
//!   (implements [`ImageSearchClient`])
//! - [`http`]: Shared HTTP client setup and raw image downloads
//!
//! # Design Notes
//!
//! - Adapters implement traits from `application::port`
//! - Transport errors are mapped to port error types at the boundary
//!
//! [`ImageSearchClient`]: crate::application::port::ImageSearchClient

pub mod http;
pub mod pixabay;

// Re-export main types for convenience
pub use http::{DownloadError, ImageDownloader};
pub use pixabay::{PixabayClient, PixabaySettings};
