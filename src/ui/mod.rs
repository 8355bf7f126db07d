// SPDX-License-Identifier: MPL-2.0
//! User interface components.
//!
//! Components follow the Elm-style "state down, messages up" pattern: each
//! one renders from borrowed state and reports user intent as messages that
//! the application routes to the gallery controllers.
//!
//! # Components
//!
//! - [`searchbar`] - Keyword input and Search button
//! - [`gallery`] - Thumbnail grid, spinner and "Load more"
//! - [`preview`] - Modal overlay with the large image
//! - [`notifications`] - Toasts for warnings and errors
//!
//! # Shared Infrastructure
//!
//! - [`widgets`] - Custom Iced widgets (spinner)
//! - [`styles`] - Button and container styles
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management

pub mod design_tokens;
pub mod gallery;
pub mod notifications;
pub mod preview;
pub mod searchbar;
pub mod styles;
pub mod theming;
pub mod widgets;
