// SPDX-License-Identifier: MPL-2.0
//! Port definitions (traits) for dependency inversion.
//!
//! This module defines abstract interfaces that infrastructure adapters implement.
//! These traits use only domain types, ensuring the application layer remains
//! independent of concrete implementations.
//!
//! # Available Ports
//!
//! - [`search`]: Paged keyword image search
//! - [`notification`]: Fire-and-forget user notifications
//!
//! # Design Notes
//!
//! - All traits use domain types only (no Iced handles, no HTTP types)
//! - The search port returns a boxed `'static` future so callers can hand it
//!   straight to Iced's `Task::perform`
//! - Notification calls return nothing; the controller never waits on them

pub mod notification;
pub mod search;

pub use notification::NotificationSink;
pub use search::{ImageSearchClient, SearchError};
