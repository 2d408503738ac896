// SPDX-License-Identifier: MPL-2.0
//! Uploader layout: drop zone, preview cards and the commit button.

use super::component::{Message, State};
use super::pending::PendingUpload;
use super::ViewContext;
use crate::slides::SlideHandle;
use crate::ui::design_tokens::{palette, radius, sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::styles;
use iced::widget::{
    button, column, container, image, row, scrollable, stack, svg, text, text_input, tooltip,
    Column, Row, Text,
};
use iced::{alignment, ContentFit, Element, Length};

pub fn view<'a>(state: &'a State, ctx: ViewContext<'a>) -> Element<'a, Message> {
    let mut content = Column::new()
        .spacing(spacing::LG)
        .width(Length::Fill)
        .push(drop_zone(state, ctx));

    if state.decoding() > 0 {
        let count = state.decoding().to_string();
        content = content.push(
            text(ctx.i18n.tr_with_args("uploader-decoding", &[("count", count.as_str())]))
                .size(typography::BODY_SM)
                .color(palette::GRAY_400),
        );
    }

    if !state.pending().is_empty() {
        content = content.push(previews(state, ctx));
    }

    let panel = container(content)
        .padding(spacing::XL)
        .width(Length::Fill)
        .style(styles::container::panel);

    scrollable(panel).height(Length::Fill).into()
}

fn drop_zone<'a>(state: &'a State, ctx: ViewContext<'a>) -> Element<'a, Message> {
    let active = state.is_drag_active();
    let title_key = if active {
        "uploader-drop-active"
    } else {
        "uploader-drop-title"
    };

    let label = column![
        icons::tinted(icons::upload(), sizing::ICON_XL, palette::PRIMARY_500),
        Text::new(ctx.i18n.tr(title_key)).size(typography::TITLE_SM),
        Text::new(ctx.i18n.tr("uploader-supported"))
            .size(typography::BODY_SM)
            .color(palette::GRAY_400),
    ]
    .spacing(spacing::SM)
    .align_x(alignment::Horizontal::Center);

    let clickable = button(container(label).center(Length::Fill))
        .on_press(Message::OpenPicker)
        .padding(0)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(styles::button::flat);

    container(clickable)
        .width(Length::Fill)
        .height(Length::Fixed(sizing::DROP_ZONE_HEIGHT))
        .style(styles::container::drop_zone(active))
        .into()
}

fn previews<'a>(state: &'a State, ctx: ViewContext<'a>) -> Element<'a, Message> {
    let count = state.pending().len().to_string();
    let title = Text::new(
        ctx.i18n
            .tr_with_args("uploader-preview-title", &[("count", count.as_str())]),
    )
    .size(typography::TITLE_MD);

    let cards = state
        .pending()
        .iter()
        .enumerate()
        .map(|(index, entry)| preview_card(index, entry, ctx));

    let grid = Row::with_children(cards)
        .spacing(spacing::MD)
        .wrap()
        .vertical_spacing(spacing::MD);

    let commit = button(
        row![
            icons::tinted(icons::plus(), sizing::ICON_SM, palette::WHITE),
            Text::new(
                ctx.i18n
                    .tr_with_args("uploader-commit", &[("count", count.as_str())])
            ),
        ]
        .spacing(spacing::XS)
        .align_y(alignment::Vertical::Center),
    )
    .on_press(Message::Commit)
    .padding([spacing::SM, spacing::XL])
    .style(styles::button::primary);

    column![
        title,
        grid,
        container(commit)
            .width(Length::Fill)
            .align_x(alignment::Horizontal::Center),
    ]
    .spacing(spacing::MD)
    .into()
}

fn preview_card<'a>(
    index: usize,
    entry: &'a PendingUpload,
    ctx: ViewContext<'a>,
) -> Element<'a, Message> {
    let thumb: Element<'a, Message> = match &entry.handle {
        SlideHandle::Raster(handle) => image(handle.clone())
            .content_fit(ContentFit::Cover)
            .width(Length::Fill)
            .height(Length::Fixed(sizing::PREVIEW_THUMB))
            .into(),
        SlideHandle::Vector(handle) => svg(handle.clone())
            .content_fit(ContentFit::Contain)
            .width(Length::Fill)
            .height(Length::Fixed(sizing::PREVIEW_THUMB))
            .into(),
    };

    let remove = tooltip(
        button(icons::tinted(icons::cross(), sizing::ICON_SM, palette::WHITE))
            .on_press(Message::Remove(index))
            .padding(spacing::XXS)
            .style(styles::button::remove),
        container(Text::new(ctx.i18n.tr("uploader-remove-tooltip")).size(typography::CAPTION))
            .padding([spacing::XXS, spacing::XS])
            .style(styles::overlay::indicator(radius::SM)),
        tooltip::Position::Left,
    );

    let picture = stack![
        thumb,
        container(remove)
            .width(Length::Fill)
            .align_x(alignment::Horizontal::Right)
            .padding(spacing::XS),
    ];

    let caption = text_input(&ctx.i18n.tr("uploader-caption-placeholder"), &entry.caption)
        .on_input(move |value| Message::CaptionChanged(index, value))
        .size(typography::BODY_SM)
        .padding(spacing::XS);

    container(column![picture, caption].spacing(spacing::XS))
        .width(Length::Fixed(sizing::PREVIEW_THUMB + 2.0 * spacing::XS))
        .padding(spacing::XS)
        .style(styles::container::preview_card)
        .into()
}
