// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the search bar, the
//! gallery and the preview overlay.
//!
//! The `App` struct owns the gallery controllers and the UI component state,
//! and translates messages into side effects: page fetches, image downloads
//! and notifications. Controllers stay pure; every future is created here.

pub mod config;
pub mod i18n;
mod message;
pub mod paths;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::application::gallery::{SearchPaginationController, SelectionController};
use crate::application::port::ImageSearchClient;
use crate::infrastructure::{ImageDownloader, PixabayClient};
use crate::ui::gallery::{ScrollPosition, ThumbnailCache};
use crate::ui::notifications;
use crate::ui::preview::{self, LargeImage};
use crate::ui::searchbar;
use crate::ui::theming::ColorScheme;
use config::Config;
use i18n::fluent::I18n;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::sync::Arc;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    search: Arc<dyn ImageSearchClient>,
    downloader: ImageDownloader,
    pagination: SearchPaginationController,
    selection: SelectionController,
    searchbar: searchbar::State,
    preview: preview::State,
    thumbnails: ThumbnailCache,
    /// Last reported grid viewport; decides which thumbnails to load.
    scroll: ScrollPosition,
    /// Toast notification manager for user feedback.
    notifications: notifications::Manager,
    /// Resolved once at startup; system detection is not free.
    theme: Theme,
    colors: ColorScheme,
    columns: u16,
    spinner_rotation: f32,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("query", &self.pagination.query())
            .field("items", &self.pagination.items().len())
            .field("status", &self.pagination.status())
            .field("preview_open", &self.selection.is_open())
            .finish()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 760;
pub const WINDOW_DEFAULT_WIDTH: u32 = 1100;
pub const MIN_WINDOW_HEIGHT: u32 = 480;
pub const MIN_WINDOW_WIDTH: u32 = 560;

/// Builds the window settings
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
///
/// `http` is shared by the search adapter and the image downloader.
pub fn run(flags: Flags, http: reqwest::Client) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some((flags, http)));
    let boot = move || {
        let (flags, http) = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags, http)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Loads config and translations, wires the Pixabay adapter and kicks
    /// off the initial search when one was given on the command line.
    fn new(flags: Flags, http: reqwest::Client) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        let i18n = I18n::new(flags.lang.clone(), &config);

        let settings = config.pixabay_settings();
        if settings.api_key.is_none() {
            tracing::warn!(
                env = config::ENV_API_KEY,
                "no search API key configured; searches will fail"
            );
        }
        let search: Arc<dyn ImageSearchClient> =
            Arc::new(PixabayClient::with_client(http.clone(), settings));
        let downloader = ImageDownloader::with_client(http);

        let mut app = Self::with_services(&config, i18n, search, downloader);

        if let Some(key) = config_warning {
            app.notifications
                .push(notifications::Notification::warning(key));
        }

        let mut tasks = vec![searchbar::focus()];
        if let Some(query) = flags.initial_query {
            app.searchbar = searchbar::State::with_input(query.clone());
            tasks.push(update::submit_search(&mut app.ctx(), &query));
        }

        (app, Task::batch(tasks))
    }

    /// Builds the state around already constructed services.
    fn with_services(
        config: &Config,
        i18n: I18n,
        search: Arc<dyn ImageSearchClient>,
        downloader: ImageDownloader,
    ) -> Self {
        let theme_mode = config.general.theme_mode;
        Self {
            i18n,
            search,
            downloader,
            pagination: SearchPaginationController::new(),
            selection: SelectionController::new(),
            searchbar: searchbar::State::default(),
            preview: preview::State::default(),
            thumbnails: ThumbnailCache::new(config.thumbnail_cache_size()),
            scroll: ScrollPosition::default(),
            notifications: notifications::Manager::new(),
            theme: theme_mode.iced_theme(),
            colors: ColorScheme::for_mode(theme_mode),
            columns: config.gallery_columns(),
            spinner_rotation: 0.0,
        }
    }

    fn ctx(&mut self) -> update::UpdateContext<'_> {
        update::UpdateContext {
            search: &self.search,
            downloader: &self.downloader,
            pagination: &mut self.pagination,
            selection: &mut self.selection,
            searchbar: &mut self.searchbar,
            preview: &mut self.preview,
            thumbnails: &mut self.thumbnails,
            scroll: &mut self.scroll,
            columns: self.columns,
            notifications: &mut self.notifications,
            spinner_rotation: &mut self.spinner_rotation,
        }
    }

    fn title(&self) -> String {
        let app_name = self.i18n.tr("window-title");
        match self.pagination.query() {
            Some(query) => format!("{query} - {app_name}"),
            None => app_name,
        }
    }

    fn theme(&self) -> Theme {
        self.theme.clone()
    }

    /// Whether any spinner is on screen.
    fn is_animating(&self) -> bool {
        self.pagination.status().is_loading()
            || (self.selection.is_open() && matches!(self.preview.image(), LargeImage::Loading))
    }

    fn subscription(&self) -> Subscription<Message> {
        let event_sub = subscription::create_event_subscription(self.selection.is_open());
        let notification_sub =
            subscription::create_notification_subscription(self.notifications.has_expiring());
        let spinner_sub = subscription::create_spinner_subscription(self.is_animating());

        Subscription::batch([event_sub, notification_sub, spinner_sub])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = self.ctx();

        match message {
            Message::Searchbar(searchbar_message) => {
                update::handle_searchbar_message(&mut ctx, searchbar_message)
            }
            Message::Gallery(gallery_message) => {
                update::handle_gallery_message(&mut ctx, gallery_message)
            }
            Message::Preview(preview_message) => {
                update::handle_preview_message(&mut ctx, preview_message)
            }
            Message::EscapePressed => update::close_preview(&mut ctx),
            Message::FetchSettled(outcome) => update::handle_fetch_settled(&mut ctx, outcome),
            Message::ThumbnailLoaded { url, result } => {
                update::handle_thumbnail_loaded(&mut ctx, url, result)
            }
            Message::PreviewLoaded { url, result } => {
                update::handle_preview_loaded(&mut ctx, &url, result)
            }
            Message::Notification(notification_message) => {
                ctx.notifications.handle_message(&notification_message);
                Task::none()
            }
            Message::SpinnerTick => update::handle_spinner_tick(&mut ctx),
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            snapshot: self.pagination.snapshot(&self.selection),
            searchbar: &self.searchbar,
            preview: &self.preview,
            thumbnails: &self.thumbnails,
            notifications: &self.notifications,
            colors: &self.colors,
            columns: self.columns,
            spinner_rotation: self.spinner_rotation,
        })
    }
}
