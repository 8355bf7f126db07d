// SPDX-License-Identifier: MPL-2.0
//! Event and timer subscriptions for the application.
//!
//! Every subscription is conditional so the event loop stays idle when
//! nothing is animating, nothing is queued for dismissal and the preview is
//! closed.

use super::Message;
use crate::ui::notifications::NotificationMessage;
use iced::keyboard::{self, key::Named, Key};
use iced::{event, time, Subscription};
use std::time::Duration;

/// Interval for notification auto-dismiss checks.
const NOTIFICATION_TICK: Duration = Duration::from_millis(250);

/// Interval for spinner frames (about 60 per second).
const SPINNER_TICK: Duration = Duration::from_millis(16);

/// Routes Escape to the application while the preview is open.
///
/// The event status is ignored: the search input may still hold focus under
/// the overlay and would otherwise swallow the key.
pub fn create_event_subscription(preview_open: bool) -> Subscription<Message> {
    if !preview_open {
        return Subscription::none();
    }
    event::listen_with(|event, _status, _window_id| match event {
        event::Event::Keyboard(keyboard::Event::KeyPressed {
            key: Key::Named(Named::Escape),
            ..
        }) => Some(Message::EscapePressed),
        _ => None,
    })
}

/// Creates the notification auto-dismiss tick, running only while a visible
/// notification can expire.
pub fn create_notification_subscription(has_expiring: bool) -> Subscription<Message> {
    if has_expiring {
        time::every(NOTIFICATION_TICK)
            .map(|instant| Message::Notification(NotificationMessage::Tick(instant)))
    } else {
        Subscription::none()
    }
}

/// Creates the spinner animation tick, running only while something loads.
pub fn create_spinner_subscription(is_loading: bool) -> Subscription<Message> {
    if is_loading {
        time::every(SPINNER_TICK).map(|_| Message::SpinnerTick)
    } else {
        Subscription::none()
    }
}
