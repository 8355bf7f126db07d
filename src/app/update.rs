// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.
//!
//! Handlers mutate the controllers through [`UpdateContext`] and turn the
//! fetch requests they hand back into Iced tasks. The controllers never see
//! a task or a future themselves.

use super::Message;
use crate::application::gallery::{
    dispatch, FetchOutcome, FetchRequest, SearchPaginationController, SelectionController,
    Settlement,
};
use crate::application::port::ImageSearchClient;
use crate::infrastructure::{DownloadError, ImageDownloader};
use crate::ui::gallery::{self, ScrollPosition, ThumbnailCache};
use crate::ui::notifications;
use crate::ui::preview;
use crate::ui::searchbar::{self, Event as SearchbarEvent};
use crate::ui::widgets::animated_spinner;
use iced::Task;
use std::sync::Arc;

/// Mutable view of the application state handed to the handlers.
pub struct UpdateContext<'a> {
    pub search: &'a Arc<dyn ImageSearchClient>,
    pub downloader: &'a ImageDownloader,
    pub pagination: &'a mut SearchPaginationController,
    pub selection: &'a mut SelectionController,
    pub searchbar: &'a mut searchbar::State,
    pub preview: &'a mut preview::State,
    pub thumbnails: &'a mut ThumbnailCache,
    pub scroll: &'a mut ScrollPosition,
    pub columns: u16,
    pub notifications: &'a mut notifications::Manager,
    pub spinner_rotation: &'a mut f32,
}

pub fn handle_searchbar_message(
    ctx: &mut UpdateContext<'_>,
    message: searchbar::Message,
) -> Task<Message> {
    match ctx.searchbar.update(message) {
        SearchbarEvent::None => Task::none(),
        SearchbarEvent::Submitted(keyword) => submit_search(ctx, &keyword),
    }
}

/// Starts a new search for `keyword`; blank input only raises a warning.
pub fn submit_search(ctx: &mut UpdateContext<'_>, keyword: &str) -> Task<Message> {
    let request = ctx.pagination.submit_query(keyword, ctx.notifications);
    if request.is_some() {
        ctx.scroll.top = 0.0;
    }
    run_fetch(ctx.search, request)
}

pub fn handle_gallery_message(
    ctx: &mut UpdateContext<'_>,
    message: gallery::Message,
) -> Task<Message> {
    match message {
        gallery::Message::Select(index) => {
            let Some(item) = ctx.pagination.items().get(index).cloned() else {
                tracing::debug!(index, "ignoring selection outside the result set");
                return Task::none();
            };
            let url = item.large_image_url;
            ctx.selection.select(url.clone(), item.tags);
            if ctx.preview.open(&url) {
                download_preview(ctx.downloader, url)
            } else {
                Task::none()
            }
        }
        gallery::Message::LoadMore => {
            let request = ctx.pagination.load_more();
            run_fetch(ctx.search, request)
        }
        gallery::Message::Scrolled(position) => {
            *ctx.scroll = position;
            claim_visible(ctx)
        }
    }
}

pub fn handle_preview_message(
    ctx: &mut UpdateContext<'_>,
    message: preview::Message,
) -> Task<Message> {
    match message {
        preview::Message::Close => close_preview(ctx),
    }
}

/// Closes the preview overlay. A no-op when nothing is selected.
pub fn close_preview(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    ctx.selection.clear();
    ctx.preview.close();
    Task::none()
}

/// Applies a finished fetch and starts downloading the thumbnails on screen.
pub fn handle_fetch_settled(ctx: &mut UpdateContext<'_>, outcome: FetchOutcome) -> Task<Message> {
    let FetchOutcome { request, result } = outcome;
    match ctx
        .pagination
        .on_fetch_settled(&request, result, ctx.notifications)
    {
        Settlement::Appended(_) => claim_visible(ctx),
        Settlement::NoResults | Settlement::Failed | Settlement::Stale => Task::none(),
    }
}

pub fn handle_thumbnail_loaded(
    ctx: &mut UpdateContext<'_>,
    url: String,
    result: Result<Vec<u8>, DownloadError>,
) -> Task<Message> {
    ctx.thumbnails.complete(url, result);
    Task::none()
}

pub fn handle_preview_loaded(
    ctx: &mut UpdateContext<'_>,
    url: &str,
    result: Result<Vec<u8>, DownloadError>,
) -> Task<Message> {
    ctx.preview.complete(url, result);
    Task::none()
}

pub fn handle_spinner_tick(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    *ctx.spinner_rotation = animated_spinner::advance(*ctx.spinner_rotation);
    Task::none()
}

/// Downloads the thumbnails around the viewport that are not cached, which
/// includes entries evicted while scrolled out of view.
fn claim_visible(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    let items = ctx.pagination.items();
    let range = gallery::visible_range(*ctx.scroll, ctx.columns, items.len());
    let urls = ctx.thumbnails.claim_missing(&items[range]);
    download_thumbnails(ctx.downloader, urls)
}

fn run_fetch(search: &Arc<dyn ImageSearchClient>, request: Option<FetchRequest>) -> Task<Message> {
    match request {
        Some(request) => Task::perform(dispatch(search.as_ref(), request), Message::FetchSettled),
        None => Task::none(),
    }
}

fn download_thumbnails(downloader: &ImageDownloader, urls: Vec<String>) -> Task<Message> {
    if urls.is_empty() {
        return Task::none();
    }
    Task::batch(urls.into_iter().map(|url| {
        let future = downloader.fetch_bytes(url.clone());
        Task::perform(future, move |result| Message::ThumbnailLoaded { url, result })
    }))
}

fn download_preview(downloader: &ImageDownloader, url: String) -> Task<Message> {
    let future = downloader.fetch_bytes(url.clone());
    Task::perform(future, move |result| Message::PreviewLoaded { url, result })
}
