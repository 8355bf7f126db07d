// SPDX-License-Identifier: MPL-2.0
//! User notification port definition.
//!
//! Controllers report user-facing outcomes (validation warnings, empty
//! results, failures) through [`NotificationSink`] instead of calling a
//! global toast API, so every transition can be checked in tests.

/// Port for showing short messages to the user.
///
/// Messages are i18n keys resolved at render time. Calls are
/// fire-and-forget: nothing is returned and nothing is awaited.
pub trait NotificationSink {
    /// Shows a warning (non-blocking, auto-dismissed).
    fn warn(&mut self, message_key: &str);

    /// Shows an error (stays until dismissed).
    fn error(&mut self, message_key: &str);
}
