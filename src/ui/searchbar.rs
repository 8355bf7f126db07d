// SPDX-License-Identifier: MPL-2.0
//! Search bar: a keyword input and a Search button.
//!
//! The text is submitted exactly as typed. Trimming and the empty-keyword
//! warning belong to the pagination controller.

use crate::app::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, container, operation, text_input, Id, Row, Text};
use iced::{alignment, Element, Length, Task};

const INPUT_ID: &str = "search-input";

/// Contextual data needed to render the search bar.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
}

/// Local state: the text currently in the input.
#[derive(Debug, Clone, Default)]
pub struct State {
    input: String,
}

#[derive(Debug, Clone)]
pub enum Message {
    InputChanged(String),
    Submit,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    /// The user asked to search for the raw input text.
    Submitted(String),
}

impl State {
    /// Creates a search bar pre-filled with `initial` (e.g. the CLI query).
    #[must_use]
    pub fn with_input(initial: impl Into<String>) -> Self {
        Self {
            input: initial.into(),
        }
    }

    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn update(&mut self, message: Message) -> Event {
        match message {
            Message::InputChanged(value) => {
                self.input = value;
                Event::None
            }
            Message::Submit => Event::Submitted(self.input.clone()),
        }
    }

    pub fn view<'a>(&'a self, ctx: ViewContext<'a>) -> Element<'a, Message> {
        let input = text_input(&ctx.i18n.tr("searchbar-placeholder"), &self.input)
            .id(Id::new(INPUT_ID))
            .on_input(Message::InputChanged)
            .on_submit(Message::Submit)
            .padding(spacing::XS)
            .size(typography::BODY_LG)
            .width(Length::Fill);

        let submit = button(
            Text::new(ctx.i18n.tr("searchbar-button")).size(typography::BODY),
        )
        .on_press(Message::Submit)
        .padding([spacing::XS, spacing::MD])
        .height(Length::Fixed(sizing::BUTTON_HEIGHT))
        .style(styles::button::primary);

        let row = Row::new()
            .spacing(spacing::XS)
            .align_y(alignment::Vertical::Center)
            .push(submit)
            .push(input);

        container(container(row).max_width(sizing::SEARCHBAR_MAX_WIDTH))
            .padding(spacing::SM)
            .center_x(Length::Fill)
            .into()
    }
}

/// Focuses the keyword input, used once at startup.
pub fn focus<T: Send + 'static>() -> Task<T> {
    operation::focus(Id::new(INPUT_ID))
}
