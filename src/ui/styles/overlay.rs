// SPDX-License-Identifier: MPL-2.0
//! Overlay styles for the caption band, counters and icons drawn over slides.

use crate::ui::design_tokens::{
    opacity,
    palette::{BLACK, WHITE},
};
use iced::gradient::Linear;
use iced::widget::{container, svg};
use iced::{Background, Border, Color, Degrees, Gradient, Theme};

fn container_background() -> Color {
    Color {
        a: opacity::OVERLAY_STRONG,
        ..BLACK
    }
}

fn container_border() -> Color {
    Color {
        a: opacity::OVERLAY_SUBTLE,
        ..WHITE
    }
}

/// Pill-shaped indicator like the fullscreen position chip.
pub fn indicator(rad: f32) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(container_background())),
        text_color: Some(WHITE),
        border: Border {
            color: container_border(),
            width: 1.0,
            radius: rad.into(),
        },
        ..Default::default()
    }
}

/// Caption band fading from the bottom edge of the slide.
pub fn caption(_theme: &Theme) -> container::Style {
    let gradient = Linear::new(Degrees(0.0))
        .add_stop(0.0, container_background())
        .add_stop(
            1.0,
            Color {
                a: opacity::TRANSPARENT,
                ..BLACK
            },
        );

    container::Style {
        background: Some(Background::Gradient(Gradient::Linear(gradient))),
        text_color: Some(WHITE),
        ..Default::default()
    }
}

/// Tints a monochrome SVG icon.
pub fn icon(color: Color) -> impl Fn(&Theme, svg::Status) -> svg::Style {
    move |_theme: &Theme, _status: svg::Status| svg::Style { color: Some(color) }
}
