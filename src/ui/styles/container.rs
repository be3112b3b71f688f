// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{border, opacity, palette, radius, shadow};
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Card surface holding one section of the page.
///
/// Derived from the theme background with a slight opacity so cards read
/// well in both light and dark modes.
pub fn card(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();
    let base = palette.background.weak.color;

    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::SURFACE,
            ..base
        })),
        border: Border {
            color: palette.background.strong.color,
            width: border::WIDTH_SM,
            radius: radius::LG.into(),
        },
        shadow: shadow::SM,
        text_color: Some(palette.background.weak.text),
        ..Default::default()
    }
}

/// Preview area background while a model is loaded.
pub fn preview_surface(theme: &Theme) -> container::Style {
    let is_light = matches!(theme, Theme::Light);
    container::Style {
        background: Some(Background::Color(if is_light {
            palette::GRAY_200
        } else {
            palette::GRAY_700
        })),
        border: Border {
            radius: radius::MD.into(),
            ..Default::default()
        },
        text_color: Some(palette::GRAY_500),
        ..Default::default()
    }
}

/// Dashed-looking frame around the empty preview.
pub fn empty_preview(_theme: &Theme) -> container::Style {
    container::Style {
        border: Border {
            color: palette::GRAY_400,
            width: border::WIDTH_MD,
            radius: radius::MD.into(),
        },
        text_color: Some(palette::GRAY_500),
        ..Default::default()
    }
}
