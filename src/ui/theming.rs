// SPDX-License-Identifier: MPL-2.0
//! Light, dark and system theme handling.

use crate::ui::design_tokens::{opacity, palette};
use iced::{Color, Theme};

/// Colors the gallery widgets draw with, on top of the Iced theme palette.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorScheme {
    /// Thumbnail cells while the image is loading or unavailable.
    pub surface_secondary: Color,
    /// Captions and hints.
    pub text_secondary: Color,
    /// Spinner and focused borders.
    pub brand_primary: Color,
    /// Backdrop behind the preview overlay.
    pub overlay_background: Color,
}

impl ColorScheme {
    #[must_use]
    pub fn light() -> Self {
        Self {
            surface_secondary: palette::GRAY_100,
            text_secondary: palette::GRAY_700,
            brand_primary: palette::PRIMARY_500,
            overlay_background: Color {
                a: opacity::OVERLAY_STRONG,
                ..palette::BLACK
            },
        }
    }

    #[must_use]
    pub fn dark() -> Self {
        Self {
            surface_secondary: Color::from_rgb(0.15, 0.15, 0.15),
            text_secondary: palette::GRAY_200,
            brand_primary: palette::PRIMARY_400,
            overlay_background: Color {
                a: opacity::OVERLAY_HOVER,
                ..palette::BLACK
            },
        }
    }

    #[must_use]
    pub fn for_mode(mode: ThemeMode) -> Self {
        if mode.is_dark() {
            Self::dark()
        } else {
            Self::light()
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeMode {
    Light,
    Dark,
    #[default]
    System,
}

impl ThemeMode {
    /// Returns true if the effective theme is dark.
    /// For System mode, detects the actual system theme.
    #[must_use]
    pub fn is_dark(self) -> bool {
        match self {
            ThemeMode::Light => false,
            ThemeMode::Dark => true,
            // Dark on detection error.
            ThemeMode::System => !matches!(dark_light::detect(), Ok(dark_light::Mode::Light)),
        }
    }

    #[must_use]
    pub fn iced_theme(self) -> Theme {
        if self.is_dark() {
            Theme::Dark
        } else {
            Theme::Light
        }
    }
}
