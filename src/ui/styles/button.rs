// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{
    border, opacity,
    palette::{self, BLACK, WHITE},
    radius, shadow,
};
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Search and "Load more" buttons.
pub fn primary(_theme: &Theme, status: button::Status) -> button::Style {
    let (background, border_color, elevation) = match status {
        button::Status::Hovered => (palette::PRIMARY_400, palette::PRIMARY_500, shadow::MD),
        button::Status::Disabled => (palette::GRAY_200, palette::GRAY_400, shadow::NONE),
        button::Status::Active | button::Status::Pressed => {
            (palette::PRIMARY_500, palette::PRIMARY_600, shadow::NONE)
        }
    };

    button::Style {
        background: Some(Background::Color(background)),
        text_color: if status == button::Status::Disabled {
            palette::GRAY_400
        } else {
            WHITE
        },
        border: Border {
            color: border_color,
            width: border::WIDTH_SM,
            radius: radius::SM.into(),
        },
        shadow: elevation,
        snap: true,
    }
}

/// Clickable gallery cell: transparent, with a brand border on hover.
pub fn thumbnail(_theme: &Theme, status: button::Status) -> button::Style {
    let border_color = match status {
        button::Status::Hovered | button::Status::Pressed => palette::PRIMARY_500,
        button::Status::Active | button::Status::Disabled => Color::TRANSPARENT,
    };

    button::Style {
        background: None,
        text_color: WHITE,
        border: Border {
            color: border_color,
            width: border::WIDTH_MD,
            radius: radius::SM.into(),
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Round close button drawn over the preview image.
pub fn overlay_close(_theme: &Theme, status: button::Status) -> button::Style {
    let alpha = match status {
        button::Status::Hovered => opacity::OVERLAY_HOVER,
        button::Status::Pressed => opacity::OPAQUE,
        button::Status::Active | button::Status::Disabled => opacity::OVERLAY_MEDIUM,
    };

    button::Style {
        background: Some(Background::Color(Color { a: alpha, ..BLACK })),
        text_color: WHITE,
        border: Border {
            radius: radius::FULL.into(),
            ..Default::default()
        },
        shadow: shadow::MD,
        snap: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thumbnail_border_appears_on_hover_only() {
        let theme = Theme::Dark;
        assert_eq!(
            thumbnail(&theme, button::Status::Active).border.color,
            Color::TRANSPARENT
        );
        assert_eq!(
            thumbnail(&theme, button::Status::Hovered).border.color,
            palette::PRIMARY_500
        );
    }

    #[test]
    fn disabled_primary_is_greyed_out() {
        let style = primary(&Theme::Light, button::Status::Disabled);
        assert_eq!(style.text_color, palette::GRAY_400);
    }
}
