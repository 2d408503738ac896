// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{
    opacity,
    palette::{self, BLACK, WHITE},
    radius, shadow,
};
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Primary action (toggle screen, commit uploads).
pub fn primary(theme: &Theme, status: button::Status) -> button::Style {
    let brand = theme.palette().primary;
    let border = Border {
        color: palette::PRIMARY_700,
        width: 1.0,
        radius: radius::FULL.into(),
    };

    match status {
        button::Status::Active | button::Status::Pressed => button::Style {
            background: Some(Background::Color(brand)),
            text_color: WHITE,
            border,
            shadow: shadow::SM,
            snap: true,
        },
        button::Status::Hovered => button::Style {
            background: Some(Background::Color(palette::ACCENT_600)),
            text_color: WHITE,
            border,
            shadow: shadow::MD,
            snap: true,
        },
        button::Status::Disabled => button::Style {
            background: Some(Background::Color(palette::GRAY_200)),
            text_color: palette::GRAY_400,
            border: Border {
                color: palette::GRAY_400,
                ..border
            },
            shadow: shadow::NONE,
            snap: true,
        },
    }
}

/// Round translucent buttons drawn over the slide (previous, next, play, fullscreen).
pub fn overlay(
    text_color: Color,
    alpha_normal: f32,
    alpha_hover: f32,
) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let alpha = match status {
            button::Status::Hovered => alpha_hover,
            button::Status::Pressed => opacity::OVERLAY_PRESSED,
            _ => alpha_normal,
        };

        button::Style {
            background: Some(Background::Color(Color { a: alpha, ..BLACK })),
            text_color,
            border: Border {
                radius: radius::FULL.into(),
                ..Default::default()
            },
            shadow: shadow::MD,
            snap: true,
        }
    }
}

/// Indicator dot for one slide; `active` marks the current slide.
pub fn indicator_dot(active: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |theme: &Theme, status: button::Status| {
        let color = if active {
            theme.palette().primary
        } else {
            match status {
                button::Status::Hovered | button::Status::Pressed => palette::PRIMARY_400,
                _ => palette::GRAY_200,
            }
        };

        button::Style {
            background: Some(Background::Color(color)),
            text_color: WHITE,
            border: Border {
                radius: radius::FULL.into(),
                ..Default::default()
            },
            shadow: shadow::NONE,
            snap: true,
        }
    }
}

/// Small remove button in the corner of an upload preview.
pub fn remove(_theme: &Theme, status: button::Status) -> button::Style {
    let alpha = match status {
        button::Status::Hovered | button::Status::Pressed => opacity::OPAQUE,
        _ => opacity::OVERLAY_HOVER,
    };

    button::Style {
        background: Some(Background::Color(Color {
            a: alpha,
            ..palette::ERROR_500
        })),
        text_color: WHITE,
        border: Border {
            radius: radius::FULL.into(),
            ..Default::default()
        },
        shadow: shadow::SM,
        snap: true,
    }
}

/// The whole drop zone is clickable; keep it visually flat.
pub fn flat(_theme: &Theme, _status: button::Status) -> button::Style {
    button::Style {
        background: None,
        text_color: Color::TRANSPARENT,
        border: Border::default(),
        shadow: shadow::NONE,
        snap: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primary_button_uses_theme_primary() {
        let theme = Theme::Dark;
        let style = primary(&theme, button::Status::Active);

        assert_eq!(
            style.background,
            Some(Background::Color(theme.palette().primary))
        );
    }

    #[test]
    fn overlay_button_alpha_changes_on_hover() {
        let theme = Theme::Dark;
        let style_fn = overlay(WHITE, 0.5, 0.8);

        let normal = style_fn(&theme, button::Status::Active);
        let hover = style_fn(&theme, button::Status::Hovered);

        assert_ne!(normal.background, hover.background);
    }

    #[test]
    fn active_dot_differs_from_inactive() {
        let theme = Theme::Light;
        let active = indicator_dot(true)(&theme, button::Status::Active);
        let inactive = indicator_dot(false)(&theme, button::Status::Active);

        assert_ne!(active.background, inactive.background);
    }
}
