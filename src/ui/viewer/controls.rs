// SPDX-License-Identifier: MPL-2.0
//! Viewer controls: overlay buttons, indicator dots and the position counter.

use super::component::Message;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{opacity, palette, sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::styles;
use iced::widget::{button, container, row, space, text, tooltip, Row, Svg, Text};
use iced::{alignment, Element, Length};

/// Round button drawn over the slide.
fn overlay_button<'a>(
    icon: Svg<'static>,
    on_press: Message,
    tooltip_text: String,
    position: tooltip::Position,
) -> Element<'a, Message> {
    let content = button(
        container(icons::tinted(icon, sizing::ICON_MD, palette::WHITE))
            .center(Length::Fill),
    )
    .on_press(on_press)
    .width(Length::Fixed(sizing::NAV_BUTTON))
    .height(Length::Fixed(sizing::NAV_BUTTON))
    .style(styles::button::overlay(
        palette::WHITE,
        opacity::OVERLAY_MEDIUM,
        opacity::OVERLAY_STRONG,
    ));

    tooltip(
        content,
        container(Text::new(tooltip_text).size(typography::CAPTION))
            .padding([spacing::XXS, spacing::XS])
            .style(styles::overlay::indicator(sizing::ICON_SM)),
        position,
    )
    .gap(spacing::XXS)
    .into()
}

/// Previous and next buttons, vertically centered on the slide edges.
pub fn navigation(i18n: &I18n) -> Element<'_, Message> {
    let previous = overlay_button(
        icons::chevron_left(),
        Message::Previous,
        i18n.tr("viewer-previous-tooltip"),
        tooltip::Position::Right,
    );
    let next = overlay_button(
        icons::chevron_right(),
        Message::Next,
        i18n.tr("viewer-next-tooltip"),
        tooltip::Position::Left,
    );

    container(
        row![previous, space::horizontal(), next]
            .align_y(alignment::Vertical::Center)
            .width(Length::Fill),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .align_y(alignment::Vertical::Center)
    .padding(spacing::MD)
    .into()
}

/// Play/pause and fullscreen buttons in the top-right corner.
pub fn playback(i18n: &I18n, is_playing: bool, is_fullscreen: bool) -> Element<'_, Message> {
    let (play_icon, play_tooltip) = if is_playing {
        (icons::pause(), i18n.tr("viewer-pause-tooltip"))
    } else {
        (icons::play(), i18n.tr("viewer-play-tooltip"))
    };

    let (fullscreen_icon, fullscreen_tooltip) = if is_fullscreen {
        (icons::compress(), i18n.tr("viewer-fullscreen-exit-tooltip"))
    } else {
        (icons::expand(), i18n.tr("viewer-fullscreen-enter-tooltip"))
    };

    let buttons = row![
        overlay_button(
            play_icon,
            Message::TogglePlayPause,
            play_tooltip,
            tooltip::Position::Bottom,
        ),
        overlay_button(
            fullscreen_icon,
            Message::ToggleFullscreen,
            fullscreen_tooltip,
            tooltip::Position::Bottom,
        ),
    ]
    .spacing(spacing::XS);

    container(buttons)
        .width(Length::Fill)
        .align_x(alignment::Horizontal::Right)
        .padding(spacing::MD)
        .into()
}

/// One dot per slide; the current one is larger and highlighted.
pub fn indicator_strip<'a>(total: usize, current: usize) -> Element<'a, Message> {
    let dots = (0..total).map(|index| {
        let active = index == current;
        let size = if active {
            sizing::DOT_ACTIVE
        } else {
            sizing::DOT
        };
        button(space())
            .on_press(Message::JumpTo(index))
            .padding(0)
            .width(Length::Fixed(size))
            .height(Length::Fixed(size))
            .style(styles::button::indicator_dot(active))
            .into()
    });

    let strip = Row::with_children(dots)
        .spacing(spacing::XS)
        .align_y(alignment::Vertical::Center)
        .wrap()
        .align_x(alignment::Horizontal::Center);

    container(strip)
        .width(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .into()
}

/// "3 of 25" below the indicator strip.
pub fn counter(i18n: &I18n, index: usize, total: usize) -> Element<'_, Message> {
    let current = (index + 1).to_string();
    let total = total.to_string();
    text(i18n.tr_with_args(
        "viewer-counter",
        &[("current", current.as_str()), ("total", total.as_str())],
    ))
    .size(typography::BODY)
    .into()
}
