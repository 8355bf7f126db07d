// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{radius, shadow};
use crate::ui::theming::ColorScheme;
use iced::widget::container;
use iced::{Background, Border, Theme};

/// Surface behind the preview image and its caption.
///
/// Follows the active theme background so the caption stays readable in
/// both light and dark modes.
pub fn panel(theme: &Theme) -> container::Style {
    let base = theme.extended_palette().background.base;

    container::Style {
        background: Some(Background::Color(base.color)),
        text_color: Some(base.text),
        border: Border {
            radius: radius::MD.into(),
            ..Default::default()
        },
        shadow: shadow::LG,
        ..Default::default()
    }
}

/// Dimmed full-window layer under a modal.
pub fn backdrop(colors: &ColorScheme) -> impl Fn(&Theme) -> container::Style {
    let color = colors.overlay_background;
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(color)),
        ..Default::default()
    }
}

/// Gallery cell shown while a thumbnail loads or after it failed.
pub fn placeholder(colors: &ColorScheme) -> impl Fn(&Theme) -> container::Style {
    let background = colors.surface_secondary;
    let text = colors.text_secondary;
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(background)),
        text_color: Some(text),
        border: Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}
