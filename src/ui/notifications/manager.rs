// SPDX-License-Identifier: MPL-2.0
//! Notification lifecycle management.
//!
//! The `Manager` handles queuing, display timing, and dismissal of
//! notifications, and is the application's [`NotificationSink`].

use super::notification::{Notification, NotificationId, Severity};
use crate::application::port::NotificationSink;
use std::collections::VecDeque;
use std::time::Instant;

/// Maximum number of notifications visible at once.
pub const MAX_VISIBLE: usize = 3;

/// Messages for notification state changes.
#[derive(Debug, Clone)]
pub enum Message {
    /// Dismiss a specific notification by ID.
    Dismiss(NotificationId),
    /// Periodic check of auto-dismiss timers.
    Tick(Instant),
}

/// Manages the notification queue and visible notifications.
#[derive(Debug, Default)]
pub struct Manager {
    /// Currently visible notifications (newest first).
    visible: VecDeque<Notification>,
    /// Notifications waiting for a free slot.
    queue: VecDeque<Notification>,
}

impl Manager {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Shows `notification` now if a slot is free, otherwise queues it.
    pub fn push(&mut self, notification: Notification) {
        match notification.severity() {
            Severity::Warning => tracing::warn!(key = notification.message_key(), "notification"),
            Severity::Error => tracing::error!(key = notification.message_key(), "notification"),
        }

        if self.visible.len() < MAX_VISIBLE {
            self.visible.push_front(notification);
        } else {
            self.queue.push_back(notification);
        }
    }

    /// Dismisses a notification by its ID.
    ///
    /// Returns `true` if the notification was found and removed.
    pub fn dismiss(&mut self, id: NotificationId) -> bool {
        if let Some(pos) = self.visible.iter().position(|n| n.id() == id) {
            self.visible.remove(pos);
            self.promote_from_queue();
            return true;
        }

        if let Some(pos) = self.queue.iter().position(|n| n.id() == id) {
            self.queue.remove(pos);
            return true;
        }

        false
    }

    /// Removes visible notifications whose delay elapsed at `now`.
    pub fn tick(&mut self, now: Instant) {
        let before = self.visible.len();
        self.visible.retain(|n| !n.is_expired_at(now));
        if self.visible.len() < before {
            self.promote_from_queue();
        }
    }

    pub fn handle_message(&mut self, message: &Message) {
        match message {
            Message::Dismiss(id) => {
                self.dismiss(*id);
            }
            Message::Tick(now) => self.tick(*now),
        }
    }

    pub fn visible(&self) -> impl Iterator<Item = &Notification> {
        self.visible.iter()
    }

    #[must_use]
    pub fn visible_count(&self) -> usize {
        self.visible.len()
    }

    #[must_use]
    pub fn queued_count(&self) -> usize {
        self.queue.len()
    }

    /// Returns whether there are any notifications (visible or queued).
    #[must_use]
    pub fn has_notifications(&self) -> bool {
        !self.visible.is_empty() || !self.queue.is_empty()
    }

    /// Returns whether a visible notification will dismiss itself.
    ///
    /// Queued ones only surface after a visible one leaves, so they are not
    /// counted. The tick subscription only runs while this is true.
    #[must_use]
    pub fn has_expiring(&self) -> bool {
        self.visible
            .iter()
            .any(|n| n.severity().auto_dismiss_duration().is_some())
    }

    fn promote_from_queue(&mut self) {
        while self.visible.len() < MAX_VISIBLE {
            match self.queue.pop_front() {
                Some(notification) => self.visible.push_back(notification),
                None => break,
            }
        }
    }
}

impl NotificationSink for Manager {
    fn warn(&mut self, message_key: &str) {
        self.push(Notification::warning(message_key));
    }

    fn error(&mut self, message_key: &str) {
        self.push(Notification::error(message_key));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn new_manager_is_empty() {
        let manager = Manager::new();
        assert_eq!(manager.visible_count(), 0);
        assert_eq!(manager.queued_count(), 0);
        assert!(!manager.has_notifications());
    }

    #[test]
    fn push_queues_when_visible_is_full() {
        let mut manager = Manager::new();
        for i in 0..MAX_VISIBLE {
            manager.push(Notification::warning(format!("test-{i}")));
        }
        assert_eq!(manager.visible_count(), MAX_VISIBLE);
        assert_eq!(manager.queued_count(), 0);

        manager.push(Notification::error("queued"));
        assert_eq!(manager.visible_count(), MAX_VISIBLE);
        assert_eq!(manager.queued_count(), 1);
    }

    #[test]
    fn dismiss_promotes_from_queue() {
        let mut manager = Manager::new();
        let first = Notification::error("visible-0");
        let first_id = first.id();
        manager.push(first);
        for i in 1..=MAX_VISIBLE {
            manager.push(Notification::error(format!("more-{i}")));
        }
        assert_eq!(manager.queued_count(), 1);

        assert!(manager.dismiss(first_id));
        assert_eq!(manager.visible_count(), MAX_VISIBLE);
        assert_eq!(manager.queued_count(), 0);
    }

    #[test]
    fn dismiss_unknown_id_returns_false() {
        let mut manager = Manager::new();
        let stray = Notification::warning("temp").id();
        assert!(!manager.dismiss(stray));
    }

    #[test]
    fn handle_message_dismiss() {
        let mut manager = Manager::new();
        let notification = Notification::warning("test");
        let id = notification.id();
        manager.push(notification);

        manager.handle_message(&Message::Dismiss(id));
        assert_eq!(manager.visible_count(), 0);
    }

    #[test]
    fn tick_removes_expired_warnings_but_keeps_errors() {
        let mut manager = Manager::new();
        manager.warn("notification-no-results");
        manager.error("notification-search-error");
        assert_eq!(manager.visible_count(), 2);

        manager.handle_message(&Message::Tick(Instant::now() + Duration::from_secs(6)));

        let keys: Vec<_> = manager.visible().map(Notification::message_key).collect();
        assert_eq!(keys, vec!["notification-search-error"]);
    }

    #[test]
    fn tick_before_deadline_keeps_warnings() {
        let mut manager = Manager::new();
        manager.warn("notification-empty-query");
        manager.tick(Instant::now());
        assert_eq!(manager.visible_count(), 1);
    }

    #[test]
    fn sink_methods_map_to_severities() {
        let mut manager = Manager::new();
        manager.warn("w");
        manager.error("e");
        let severities: Vec<_> = manager.visible().map(Notification::severity).collect();
        // Newest first.
        assert_eq!(severities, vec![Severity::Error, Severity::Warning]);
    }

    #[test]
    fn only_warnings_need_the_tick() {
        let mut manager = Manager::new();
        manager.error("notification-search-error");
        assert!(manager.has_notifications());
        assert!(!manager.has_expiring());

        manager.warn("notification-no-results");
        assert!(manager.has_expiring());
    }

    #[test]
    fn queued_warning_behind_errors_does_not_tick() {
        let mut manager = Manager::new();
        for _ in 0..MAX_VISIBLE {
            manager.error("notification-search-error");
        }
        manager.warn("notification-no-results");
        assert_eq!(manager.queued_count(), 1);
        assert!(!manager.has_expiring());

        let first = manager.visible().next().map(Notification::id).expect("visible");
        manager.dismiss(first);
        assert!(manager.has_expiring());
    }
}
