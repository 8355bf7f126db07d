// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::application::gallery::FetchOutcome;
use crate::infrastructure::DownloadError;
use crate::ui::gallery;
use crate::ui::notifications;
use crate::ui::preview;
use crate::ui::searchbar;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Searchbar(searchbar::Message),
    Gallery(gallery::Message),
    Preview(preview::Message),
    Notification(notifications::NotificationMessage),
    /// A page fetch finished, successfully or not.
    FetchSettled(FetchOutcome),
    ThumbnailLoaded {
        url: String,
        result: Result<Vec<u8>, DownloadError>,
    },
    PreviewLoaded {
        url: String,
        result: Result<Vec<u8>, DownloadError>,
    },
    /// Escape was pressed while the preview overlay was open.
    EscapePressed,
    /// Advances the loading spinner animation.
    SpinnerTick,
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Keyword searched for as soon as the window opens.
    pub initial_query: Option<String>,
    /// Optional data directory override (for the log file).
    /// Takes precedence over `IMAGE_FINDER_DATA_DIR` environment variable.
    pub data_dir: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `IMAGE_FINDER_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
}
