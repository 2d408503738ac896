// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{border, opacity, palette, radius, shadow};
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Card surface used for the slide frame and the uploader panel.
///
/// Derived from the theme background so it reads in both light and dark modes.
pub fn panel(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();
    let base = palette.background.weakest.color;

    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::SURFACE,
            ..base
        })),
        border: Border {
            radius: radius::XL.into(),
            ..Default::default()
        },
        shadow: shadow::LG,
        ..Default::default()
    }
}

/// Black stage behind the current slide. Fullscreen passes a zero radius.
pub fn stage(rad: f32) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(palette::BLACK)),
        border: Border {
            radius: rad.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Drop target outline; highlighted while files hover over the window.
pub fn drop_zone(active: bool) -> impl Fn(&Theme) -> container::Style {
    move |theme: &Theme| {
        let brand = theme.palette().primary;
        let (background, outline) = if active {
            (
                Color {
                    a: opacity::OVERLAY_SUBTLE,
                    ..brand
                },
                brand,
            )
        } else {
            (Color::TRANSPARENT, palette::GRAY_200)
        };

        container::Style {
            background: Some(Background::Color(background)),
            border: Border {
                color: outline,
                width: border::WIDTH_MD,
                radius: radius::LG.into(),
            },
            text_color: Some(theme.palette().text),
            ..Default::default()
        }
    }
}

/// Frame around one upload preview.
pub fn preview_card(theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(
            theme.extended_palette().background.weak.color,
        )),
        border: Border {
            color: palette::GRAY_200,
            width: border::WIDTH_SM,
            radius: radius::MD.into(),
        },
        ..Default::default()
    }
}
