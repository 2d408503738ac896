// SPDX-License-Identifier: MPL-2.0
//! Empty state shown when the collection has no slides.
//!
//! No navigation controls are rendered here; the only action is switching
//! to the uploader.

use super::component::Message;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::styles;
use iced::widget::{button, Column, Container, Row, Text};
use iced::{alignment, Element, Length};

pub fn view(i18n: &I18n) -> Element<'_, Message> {
    let icon = icons::tinted(icons::picture(), sizing::ICON_XL * 2.0, palette::GRAY_400);

    let title = Text::new(i18n.tr("viewer-empty-title"))
        .size(typography::TITLE_LG)
        .color(palette::GRAY_400);

    let hint = Text::new(i18n.tr("viewer-empty-hint"))
        .size(typography::BODY)
        .color(palette::GRAY_400);

    let button_content = Row::new()
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Center)
        .push(icons::tinted(icons::upload(), sizing::ICON_SM, palette::WHITE))
        .push(Text::new(i18n.tr("viewer-empty-add")));

    let add_button = button(button_content)
        .padding([spacing::SM, spacing::LG])
        .style(styles::button::primary)
        .on_press(Message::OpenUploader);

    let content = Column::new()
        .spacing(spacing::LG)
        .align_x(alignment::Horizontal::Center)
        .push(icon)
        .push(title)
        .push(hint)
        .push(add_button);

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .into()
}
