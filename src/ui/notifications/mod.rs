// SPDX-License-Identifier: MPL-2.0
//! Toast notifications for search feedback.
//!
//! The gallery controllers report problems through
//! [`NotificationSink`](crate::application::port::NotificationSink); the
//! [`Manager`] implements that port, keeps the toast queue, and mirrors every
//! notification into the log.
//!
//! # Components
//!
//! - [`notification`] - `Notification` with its severity
//! - [`manager`] - queueing, auto-dismiss and the sink implementation
//! - [`toast`] - rendering of the visible toasts
//!
//! Warnings disappear after 5s, errors stay until dismissed. At most three
//! toasts are visible; the rest wait in a queue.

mod manager;
mod notification;
mod toast;

pub use manager::{Manager, Message as NotificationMessage, MAX_VISIBLE};
pub use notification::{Notification, NotificationId, Severity};
pub use toast::Toast;
