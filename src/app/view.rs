// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! The window is a single screen: the search bar above the gallery, with
//! the preview overlay and the toasts stacked on top when present.

use super::Message;
use crate::app::i18n::fluent::I18n;
use crate::application::gallery::GallerySnapshot;
use crate::ui::design_tokens::spacing;
use crate::ui::gallery::{self, ThumbnailCache};
use crate::ui::notifications::{self, Toast};
use crate::ui::preview;
use crate::ui::searchbar;
use crate::ui::theming::ColorScheme;
use iced::widget::{container, Column, Stack};
use iced::{Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub snapshot: GallerySnapshot<'a>,
    pub searchbar: &'a searchbar::State,
    pub preview: &'a preview::State,
    pub thumbnails: &'a ThumbnailCache,
    pub notifications: &'a notifications::Manager,
    pub colors: &'a ColorScheme,
    pub columns: u16,
    pub spinner_rotation: f32,
}

/// Renders the whole window.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let searchbar = ctx
        .searchbar
        .view(searchbar::ViewContext { i18n: ctx.i18n })
        .map(Message::Searchbar);

    let gallery = gallery::view(gallery::ViewContext {
        i18n: ctx.i18n,
        snapshot: ctx.snapshot,
        thumbnails: ctx.thumbnails,
        colors: ctx.colors,
        columns: ctx.columns,
        spinner_rotation: ctx.spinner_rotation,
    })
    .map(Message::Gallery);

    let content = container(
        Column::new()
            .spacing(spacing::MD)
            .push(searchbar)
            .push(gallery),
    )
    .padding(spacing::MD)
    .width(Length::Fill)
    .height(Length::Fill);

    let mut layers = Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(content);

    if let Some(selection) = ctx.snapshot.selection {
        let overlay = preview::view(preview::ViewContext {
            i18n: ctx.i18n,
            selection,
            state: ctx.preview,
            colors: ctx.colors,
            spinner_rotation: ctx.spinner_rotation,
        })
        .map(Message::Preview);
        layers = layers.push(overlay);
    }

    if ctx.notifications.has_notifications() {
        layers = layers
            .push(Toast::view_overlay(ctx.notifications, ctx.i18n).map(Message::Notification));
    }

    layers.into()
}
