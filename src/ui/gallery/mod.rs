// SPDX-License-Identifier: MPL-2.0
//! Gallery grid: thumbnails of the accumulated results, the loading spinner
//! and the "Load more" button.
//!
//! The view is a pure function of a [`GallerySnapshot`]; clicks are reported
//! back as [`Message`]s and handled by the application.

mod thumbnails;

pub use thumbnails::{Thumbnail, ThumbnailCache};

use crate::app::i18n::fluent::I18n;
use crate::application::gallery::{FetchStatus, GallerySnapshot};
use crate::domain::search::ImageItem;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::theming::ColorScheme;
use crate::ui::widgets::AnimatedSpinner;
use iced::widget::scrollable::Viewport;
use iced::widget::{button, container, image, scrollable, Column, Container, Row, Space, Text};
use iced::{alignment, ContentFit, Element, Length};
use std::ops::Range;

/// Vertical distance between the tops of two grid rows.
pub const ROW_PITCH: f32 = sizing::THUMBNAIL_HEIGHT + spacing::MD;

/// Rows kept warm above and below the viewport.
const ROW_MARGIN: usize = 2;

/// Viewport height assumed until the grid reports its first scroll.
const DEFAULT_VIEWPORT_HEIGHT: f32 = 720.0;

/// Contextual data needed to render the gallery.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub snapshot: GallerySnapshot<'a>,
    pub thumbnails: &'a ThumbnailCache,
    pub colors: &'a ColorScheme,
    pub columns: u16,
    pub spinner_rotation: f32,
}

/// Where the grid is scrolled to, in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollPosition {
    pub top: f32,
    pub height: f32,
}

impl Default for ScrollPosition {
    fn default() -> Self {
        Self {
            top: 0.0,
            height: DEFAULT_VIEWPORT_HEIGHT,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Message {
    /// A thumbnail was clicked; the index points into the snapshot items.
    Select(usize),
    LoadMore,
    Scrolled(ScrollPosition),
}

/// Indexes of the items on screen at `position`, widened by a few rows on
/// each side and clamped to `len`.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn visible_range(position: ScrollPosition, columns: u16, len: usize) -> Range<usize> {
    let columns = usize::from(columns.max(1));
    let first_row = (position.top.max(0.0) / ROW_PITCH).floor() as usize;
    let rows = (position.height.max(0.0) / ROW_PITCH).ceil() as usize;

    let start = (first_row.saturating_sub(ROW_MARGIN) * columns).min(len);
    let end = ((first_row + rows + ROW_MARGIN) * columns).min(len);
    start..end
}

/// What the area below the search bar should show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Body {
    /// Nothing searched yet.
    Placeholder,
    /// A search finished without any image.
    Empty,
    /// Results, a pending first page, or a failed one.
    Grid,
}

fn body_for(snapshot: &GallerySnapshot<'_>) -> Body {
    if snapshot.status == FetchStatus::Idle {
        Body::Placeholder
    } else if snapshot.is_empty_result {
        Body::Empty
    } else {
        Body::Grid
    }
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let body: Element<'a, Message> = match body_for(&ctx.snapshot) {
        Body::Placeholder => centered_message(ctx.i18n.tr("gallery-placeholder")),
        Body::Empty => centered_message(ctx.i18n.tr("gallery-empty")),
        Body::Grid => grid_view(&ctx),
    };

    Container::new(body)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn grid_view<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let snapshot = &ctx.snapshot;
    let mut content = Column::new()
        .spacing(spacing::MD)
        .padding(spacing::MD)
        .width(Length::Fill);

    if !snapshot.items.is_empty() {
        let count = snapshot.items.len().to_string();
        let total = snapshot.total_hits.to_string();
        content = content.push(
            Text::new(
                ctx.i18n
                    .tr_with_args("gallery-result-count", &[("count", &count), ("total", &total)]),
            )
            .size(typography::CAPTION)
            .color(ctx.colors.text_secondary),
        );
    }

    let columns = usize::from(ctx.columns.max(1));
    for (row_index, chunk) in snapshot.items.chunks(columns).enumerate() {
        let mut row = Row::new().spacing(spacing::SM).width(Length::Fill);
        for (offset, item) in chunk.iter().enumerate() {
            row = row.push(thumbnail_cell(ctx, row_index * columns + offset, item));
        }
        // Pad the last row so cells keep the same width.
        for _ in chunk.len()..columns {
            row = row.push(Space::new().width(Length::Fill));
        }
        content = content.push(row);
    }

    if snapshot.is_loading {
        content = content.push(
            container(AnimatedSpinner::new(ctx.colors.brand_primary, ctx.spinner_rotation).into_element())
                .center_x(Length::Fill),
        );
    } else if snapshot.can_load_more {
        let load_more = button(Text::new(ctx.i18n.tr("gallery-load-more")).size(typography::BODY))
            .on_press(Message::LoadMore)
            .padding([spacing::XS, spacing::LG])
            .style(styles::button::primary);
        content = content.push(container(load_more).center_x(Length::Fill));
    }

    scrollable(content)
        .height(Length::Fill)
        .on_scroll(|viewport: Viewport| {
            Message::Scrolled(ScrollPosition {
                top: viewport.absolute_offset().y,
                height: viewport.bounds().height,
            })
        })
        .into()
}

fn thumbnail_cell<'a>(ctx: &ViewContext<'a>, index: usize, item: &'a ImageItem) -> Element<'a, Message> {
    let height = Length::Fixed(sizing::THUMBNAIL_HEIGHT);

    let content: Element<'a, Message> = match ctx.thumbnails.peek(&item.thumbnail_url) {
        Some(Thumbnail::Ready(handle)) => image(handle.clone())
            .content_fit(ContentFit::Cover)
            .width(Length::Fill)
            .height(height)
            .into(),
        Some(Thumbnail::Failed) => placeholder(ctx, height, Some(ctx.i18n.tr("gallery-thumbnail-unavailable"))),
        Some(Thumbnail::Loading) | None => placeholder(ctx, height, None),
    };

    button(content)
        .on_press(Message::Select(index))
        .padding(0)
        .width(Length::Fill)
        .style(styles::button::thumbnail)
        .into()
}

fn placeholder<'a>(ctx: &ViewContext<'a>, height: Length, label: Option<String>) -> Element<'a, Message> {
    let text = Text::new(label.unwrap_or_default()).size(typography::CAPTION);
    Container::new(text)
        .width(Length::Fill)
        .height(height)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .style(styles::container::placeholder(ctx.colors))
        .into()
}

fn centered_message<'a>(message: String) -> Element<'a, Message> {
    Container::new(Text::new(message).size(typography::TITLE_SM))
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .padding(spacing::XL)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::gallery::{SearchPaginationController, SelectionController};
    use crate::test_utils::{page_of, RecordingSink};

    #[test]
    fn idle_gallery_shows_placeholder() {
        let pagination = SearchPaginationController::new();
        let selection = SelectionController::new();
        let snapshot = GallerySnapshot::capture(&pagination, &selection);
        assert_eq!(body_for(&snapshot), Body::Placeholder);
    }

    #[test]
    fn loading_first_page_shows_grid_for_spinner() {
        let mut sink = RecordingSink::default();
        let mut pagination = SearchPaginationController::new();
        let selection = SelectionController::new();
        pagination.submit_query("kites", &mut sink);

        let snapshot = GallerySnapshot::capture(&pagination, &selection);
        assert_eq!(body_for(&snapshot), Body::Grid);
        assert!(snapshot.is_loading);
    }

    #[test]
    fn empty_result_shows_empty_message() {
        let mut sink = RecordingSink::default();
        let mut pagination = SearchPaginationController::new();
        let selection = SelectionController::new();
        let request = pagination.submit_query("zzzz", &mut sink).unwrap();
        pagination.on_fetch_settled(&request, Ok(page_of(0..0, 0)), &mut sink);

        let snapshot = GallerySnapshot::capture(&pagination, &selection);
        assert_eq!(body_for(&snapshot), Body::Empty);
    }

    #[test]
    fn visible_range_at_top_covers_viewport_and_margin() {
        // 720px shows 4 rows of 196px, plus 2 rows below.
        assert_eq!(visible_range(ScrollPosition::default(), 4, 100), 0..24);
    }

    #[test]
    fn visible_range_follows_scroll_offset() {
        let position = ScrollPosition {
            top: 5.0 * ROW_PITCH,
            height: 2.0 * ROW_PITCH,
        };
        assert_eq!(visible_range(position, 3, 100), 9..27);
    }

    #[test]
    fn visible_range_is_clamped_to_items() {
        let position = ScrollPosition {
            top: 50.0 * ROW_PITCH,
            height: 720.0,
        };
        assert_eq!(visible_range(position, 4, 10), 10..10);
        assert_eq!(visible_range(ScrollPosition::default(), 4, 10), 0..10);
    }

    #[test]
    fn visible_range_treats_zero_columns_as_one() {
        let position = ScrollPosition { top: 0.0, height: ROW_PITCH };
        assert_eq!(visible_range(position, 0, 100), 0..3);
    }
}
