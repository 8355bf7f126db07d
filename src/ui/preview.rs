// SPDX-License-Identifier: MPL-2.0
//! Preview overlay for the selected image.
//!
//! The overlay is modal: it dims the gallery, shows the large image with its
//! tags, and closes on a backdrop click, the close button, or Escape (the
//! key is routed by the application subscription).

use crate::app::i18n::fluent::I18n;
use crate::domain::search::Selection;
use crate::infrastructure::DownloadError;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::theming::ColorScheme;
use crate::ui::widgets::AnimatedSpinner;
use iced::widget::{
    button, center, container, image, mouse_area, opaque, Column, Container, Row, Space, Text,
};
use iced::{alignment, ContentFit, Element, Length};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    Close,
}

/// Download state of the large image.
#[derive(Debug, Clone, Default)]
pub enum LargeImage {
    #[default]
    Loading,
    Ready(image::Handle),
    Failed,
}

/// Tracks the large image behind the current selection.
#[derive(Debug, Clone, Default)]
pub struct State {
    url: Option<String>,
    image: LargeImage,
}

impl State {
    /// Starts tracking `url`. Returns `true` when it must be downloaded.
    pub fn open(&mut self, url: &str) -> bool {
        if self.url.as_deref() == Some(url) && !matches!(self.image, LargeImage::Failed) {
            return false;
        }
        self.url = Some(url.to_string());
        self.image = LargeImage::Loading;
        true
    }

    /// Stores a finished download; results for another URL are ignored.
    pub fn complete(&mut self, url: &str, result: Result<Vec<u8>, DownloadError>) {
        if self.url.as_deref() != Some(url) {
            tracing::debug!(%url, "ignoring preview for a closed selection");
            return;
        }
        self.image = match result {
            Ok(bytes) => LargeImage::Ready(image::Handle::from_bytes(bytes)),
            Err(err) => {
                tracing::warn!(%url, error = %err, "preview download failed");
                LargeImage::Failed
            }
        };
    }

    pub fn close(&mut self) {
        self.url = None;
        self.image = LargeImage::Loading;
    }

    #[must_use]
    pub fn image(&self) -> &LargeImage {
        &self.image
    }
}

/// Contextual data needed to render the overlay.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub selection: &'a Selection,
    pub state: &'a State,
    pub colors: &'a ColorScheme,
    pub spinner_rotation: f32,
}

/// Renders the modal layer: a dimmed backdrop that closes on click, with
/// the image panel centred on it. The caller stacks it over the gallery.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let backdrop = container(center(opaque(panel(&ctx))).padding(spacing::XL))
        .width(Length::Fill)
        .height(Length::Fill)
        .style(styles::container::backdrop(ctx.colors));

    opaque(mouse_area(backdrop).on_press(Message::Close))
}

fn panel<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let close = button(Text::new("×").size(typography::BODY_LG))
        .on_press(Message::Close)
        .padding([spacing::XXS, spacing::XS])
        .style(styles::button::overlay_close);

    let header = Row::new()
        .align_y(alignment::Vertical::Center)
        .push(Space::new().width(Length::Fill))
        .push(close);

    let caption = if ctx.selection.tags.is_empty() {
        ctx.i18n.tr("preview-no-tags")
    } else {
        ctx.selection.caption()
    };

    let content = Column::new()
        .spacing(spacing::SM)
        .push(header)
        .push(image_area(ctx))
        .push(
            Text::new(caption)
                .size(typography::CAPTION)
                .color(ctx.colors.text_secondary),
        );

    Container::new(content)
        .padding(spacing::MD)
        .max_width(sizing::PREVIEW_MAX_WIDTH)
        .max_height(sizing::PREVIEW_MAX_HEIGHT)
        .style(styles::container::panel)
        .into()
}

fn image_area<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let height = Length::Fixed(sizing::PREVIEW_IMAGE_HEIGHT);

    match ctx.state.image() {
        LargeImage::Ready(handle) => image(handle.clone())
            .content_fit(ContentFit::Contain)
            .width(Length::Fill)
            .height(height)
            .into(),
        LargeImage::Loading => center(
            AnimatedSpinner::new(ctx.colors.brand_primary, ctx.spinner_rotation).into_element(),
        )
        .height(height)
        .into(),
        LargeImage::Failed => center(
            Text::new(ctx.i18n.tr("gallery-thumbnail-unavailable")).size(typography::BODY),
        )
        .height(height)
        .into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_requests_download_once_per_url() {
        let mut state = State::default();
        assert!(state.open("a.jpg"));
        assert!(!state.open("a.jpg"));
        assert!(state.open("b.jpg"));
    }

    #[test]
    fn failed_download_can_be_retried_by_reopening() {
        let mut state = State::default();
        state.open("a.jpg");
        state.complete("a.jpg", Err(DownloadError::Status(500)));
        assert!(matches!(state.image(), LargeImage::Failed));
        assert!(state.open("a.jpg"));
    }

    #[test]
    fn completion_for_previous_url_is_ignored() {
        let mut state = State::default();
        state.open("a.jpg");
        state.open("b.jpg");
        state.complete("a.jpg", Ok(vec![1, 2, 3]));
        assert!(matches!(state.image(), LargeImage::Loading));

        state.complete("b.jpg", Ok(vec![1, 2, 3]));
        assert!(matches!(state.image(), LargeImage::Ready(_)));
    }

    #[test]
    fn close_forgets_url() {
        let mut state = State::default();
        state.open("a.jpg");
        state.close();
        state.complete("a.jpg", Ok(vec![1]));
        assert!(matches!(state.image(), LargeImage::Loading));
        assert!(state.open("a.jpg"));
    }
}
