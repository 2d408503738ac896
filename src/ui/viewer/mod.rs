// SPDX-License-Identifier: MPL-2.0
//! Slideshow viewer: current slide, caption, navigation and autoplay.

pub mod component;
pub mod controls;
pub mod empty_state;

pub use component::{Effect, Message, Position, State};

use crate::i18n::fluent::I18n;
use crate::slides::SlideCollection;

/// Borrowed data the viewer renders from. The viewer never owns slides.
#[derive(Clone, Copy)]
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub slides: &'a SlideCollection,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::slides::Slide;
    use crate::ui::state::AutoplayInterval;

    fn collection(n: usize) -> SlideCollection {
        let slides = (0..n)
            .map(|i| Slide::new(format!("/uploads/{i}.png"), format!("caption {i}")))
            .collect();
        SlideCollection::new(slides, None)
    }

    #[test]
    fn view_renders_windowed_and_fullscreen() {
        let i18n = I18n::default();
        let slides = collection(3);
        let ctx = ViewContext {
            i18n: &i18n,
            slides: &slides,
        };

        let windowed = State::new(slides.len(), AutoplayInterval::default(), true, false);
        let _ = windowed.view(ctx);

        let fullscreen = State::new(slides.len(), AutoplayInterval::default(), false, true);
        let _ = fullscreen.view(ctx);
    }

    #[test]
    fn view_renders_empty_state() {
        let i18n = I18n::default();
        let slides = collection(0);
        let state = State::new(0, AutoplayInterval::default(), true, false);
        let _ = state.view(ViewContext {
            i18n: &i18n,
            slides: &slides,
        });
    }
}
