// SPDX-License-Identifier: MPL-2.0
//! `image_finder` is a keyword image search gallery built with the Iced GUI
//! framework.
//!
//! Results come from the Pixabay API twelve at a time and accumulate in a
//! thumbnail grid; clicking a thumbnail opens a modal preview of the large
//! image with its tags.
//!
//! # Layers
//!
//! - [`domain`] - Search query, page and result types
//! - [`application`] - Pagination and selection controllers, ports
//! - [`infrastructure`] - Pixabay adapter and image downloads
//! - [`ui`] - Iced components
//! - [`app`] - Application root, config, localization

pub mod app;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod logging;
pub mod ui;

#[cfg(test)]
mod test_utils;
