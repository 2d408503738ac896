// SPDX-License-Identifier: MPL-2.0
//! Image uploader: pick or drop files, caption them, add them to the slideshow.

pub mod component;
mod pending;
mod view;

pub use component::{Effect, Message, State};
pub use pending::{default_caption, PendingUpload};

use crate::i18n::fluent::I18n;
use iced::Element;

#[derive(Clone, Copy)]
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
}

impl State {
    pub fn view<'a>(&'a self, ctx: ViewContext<'a>) -> Element<'a, Message> {
        view::view(self, ctx)
    }
}
