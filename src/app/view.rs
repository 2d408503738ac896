// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! The page is a header (titles and the screen toggle), the active screen
//! and a footer. Toasts float above everything.

use super::{Message, Screen};
use crate::i18n::fluent::I18n;
use crate::slides::SlideCollection;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::notifications::{self, Toast};
use crate::ui::styles;
use crate::ui::{uploader, viewer};
use iced::widget::{button, column, container, row, stack, Text};
use iced::{alignment, Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub screen: Screen,
    pub slides: &'a SlideCollection,
    pub viewer: &'a viewer::State,
    pub uploader: &'a uploader::State,
    pub notifications: &'a notifications::Manager,
}

/// Renders the current application view based on the active screen.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let current_view: Element<'_, Message> = match ctx.screen {
        Screen::Viewer => ctx
            .viewer
            .view(viewer::ViewContext {
                i18n: ctx.i18n,
                slides: ctx.slides,
            })
            .map(Message::Viewer),
        Screen::Uploader => ctx
            .uploader
            .view(uploader::ViewContext { i18n: ctx.i18n })
            .map(Message::Uploader),
    };

    // Fullscreen slideshow: nothing but the slide.
    let page: Element<'_, Message> = if ctx.screen == Screen::Viewer && ctx.viewer.is_fullscreen()
    {
        current_view
    } else {
        let body = container(current_view)
            .width(Length::Fill)
            .height(Length::Fill)
            .max_width(sizing::CONTENT_MAX_WIDTH);

        column![
            header(ctx.i18n, ctx.screen),
            container(body)
                .width(Length::Fill)
                .height(Length::Fill)
                .align_x(alignment::Horizontal::Center),
            footer(ctx.i18n, ctx.slides.len()),
        ]
        .spacing(spacing::LG)
        .padding(spacing::LG)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
    };

    let toasts = Toast::view_overlay(ctx.notifications, ctx.i18n).map(Message::Notification);

    stack![page, toasts]
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn header(i18n: &I18n, screen: Screen) -> Element<'_, Message> {
    let title = Text::new(i18n.tr("header-title"))
        .size(typography::DISPLAY)
        .color(palette::PRIMARY_600);
    let subtitle = Text::new(i18n.tr("header-subtitle"))
        .size(typography::TITLE_LG)
        .color(palette::ACCENT_600);
    let tagline = Text::new(i18n.tr("header-tagline"))
        .size(typography::BODY_LG)
        .color(palette::GRAY_400);

    let (icon, label) = match screen {
        Screen::Viewer => (icons::plus(), i18n.tr("toggle-add-photos")),
        Screen::Uploader => (icons::picture(), i18n.tr("toggle-view-slideshow")),
    };

    let toggle = button(
        row![
            icons::tinted(icon, sizing::ICON_SM, palette::WHITE),
            Text::new(label)
        ]
        .spacing(spacing::XS)
        .align_y(alignment::Vertical::Center),
    )
    .on_press(Message::SwitchScreen(screen.toggled()))
    .padding([spacing::SM, spacing::LG])
    .style(styles::button::primary);

    column![title, subtitle, tagline, toggle]
        .spacing(spacing::XS)
        .align_x(alignment::Horizontal::Center)
        .width(Length::Fill)
        .into()
}

fn footer(i18n: &I18n, count: usize) -> Element<'_, Message> {
    let count = count.to_string();
    column![
        row![
            icons::tinted(icons::heart(), sizing::ICON_SM, palette::ACCENT_400),
            Text::new(i18n.tr("footer-tagline")).size(typography::BODY),
        ]
        .spacing(spacing::XS)
        .align_y(alignment::Vertical::Center),
        Text::new(i18n.tr_with_args("footer-count", &[("count", count.as_str())]))
            .size(typography::CAPTION)
            .color(palette::GRAY_400),
    ]
    .spacing(spacing::XXS)
    .align_x(alignment::Horizontal::Center)
    .width(Length::Fill)
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::slides::Slide;
    use crate::ui::state::AutoplayInterval;

    #[test]
    fn both_screens_render() {
        let i18n = I18n::default();
        let slides = SlideCollection::new(vec![Slide::new("a.png", "a")], None);
        let viewer = viewer::State::new(1, AutoplayInterval::default(), true, false);
        let uploader = uploader::State::new();
        let notifications = notifications::Manager::new();

        for screen in [Screen::Viewer, Screen::Uploader] {
            let _ = view(ViewContext {
                i18n: &i18n,
                screen,
                slides: &slides,
                viewer: &viewer,
                uploader: &uploader,
                notifications: &notifications,
            });
        }
    }
}
