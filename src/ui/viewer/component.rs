// SPDX-License-Identifier: MPL-2.0
//! Viewer component encapsulating slideshow state and update logic.

use super::{controls, empty_state, ViewContext};
use crate::slides::SlideHandle;
use crate::ui::design_tokens::{radius, spacing, typography};
use crate::ui::state::{AutoplayClock, AutoplayInterval};
use crate::ui::styles;
use iced::widget::{column, container, image, stack, svg, text, Column};
use iced::{alignment, event, keyboard, window, ContentFit, Element, Length};
use std::time::Instant;

/// Where the viewer currently is in the collection.
///
/// An empty collection has no index at all, so there is nothing to wrap
/// around and nothing to divide by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Position {
    Empty,
    At(usize),
}

impl Position {
    /// First slide of a collection of `len` slides.
    #[must_use]
    pub fn for_len(len: usize) -> Self {
        if len == 0 {
            Position::Empty
        } else {
            Position::At(0)
        }
    }

    #[must_use]
    pub fn index(self) -> Option<usize> {
        match self {
            Position::Empty => None,
            Position::At(index) => Some(index),
        }
    }
}

/// Messages emitted by viewer-related widgets.
#[derive(Debug, Clone)]
pub enum Message {
    Previous,
    Next,
    JumpTo(usize),
    TogglePlayPause,
    ToggleFullscreen,
    /// Autoplay timer fired; carries the instant the tick was scheduled for.
    AutoplayTick(Instant),
    /// The platform reported the window mode.
    FullscreenChanged(bool),
    RawEvent {
        window: window::Id,
        event: event::Event,
    },
    /// Request to switch to the uploader (from the empty state).
    OpenUploader,
}

/// Side effects the application should perform after handling a viewer message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    /// Ask the platform for fullscreen (`true`) or windowed mode.
    SetFullscreen(bool),
    /// The window was resized; its mode may have changed.
    QueryWindowMode,
    OpenUploader,
}

#[derive(Debug, Clone)]
pub struct State {
    position: Position,
    is_playing: bool,
    is_fullscreen: bool,
    interval: AutoplayInterval,
    clock: AutoplayClock,
    len: usize,
}

impl State {
    /// Fresh viewer for a collection of `len` slides.
    ///
    /// `is_fullscreen` seeds the last mode reported by the platform.
    pub fn new(
        len: usize,
        interval: AutoplayInterval,
        start_playing: bool,
        is_fullscreen: bool,
    ) -> Self {
        let mut state = Self {
            position: Position::for_len(len),
            is_playing: start_playing,
            is_fullscreen,
            interval,
            clock: AutoplayClock::default(),
            len,
        };
        state.rearm(Instant::now());
        state
    }

    #[must_use]
    pub fn position(&self) -> Position {
        self.position
    }

    #[must_use]
    pub fn is_playing(&self) -> bool {
        self.is_playing
    }

    #[must_use]
    pub fn is_fullscreen(&self) -> bool {
        self.is_fullscreen
    }

    #[must_use]
    pub fn interval(&self) -> AutoplayInterval {
        self.interval
    }

    /// Whether the autoplay timer should be running.
    #[must_use]
    pub fn wants_autoplay(&self) -> bool {
        self.is_playing && self.len > 0
    }

    pub fn handle_message(&mut self, message: Message) -> Effect {
        match message {
            Message::Previous => {
                self.go_to_previous();
                Effect::None
            }
            Message::Next => {
                self.go_to_next();
                Effect::None
            }
            Message::JumpTo(index) => {
                self.jump_to(index);
                Effect::None
            }
            Message::TogglePlayPause => {
                self.toggle_play_pause(Instant::now());
                Effect::None
            }
            Message::ToggleFullscreen => Effect::SetFullscreen(!self.is_fullscreen),
            Message::AutoplayTick(at) => {
                self.handle_tick(at);
                Effect::None
            }
            Message::FullscreenChanged(fullscreen) => {
                if self.is_fullscreen != fullscreen {
                    tracing::debug!(fullscreen, "window mode changed");
                }
                self.is_fullscreen = fullscreen;
                Effect::None
            }
            Message::RawEvent { event, .. } => self.handle_raw_event(event),
            Message::OpenUploader => Effect::OpenUploader,
        }
    }

    fn go_to_previous(&mut self) {
        if let Position::At(index) = self.position {
            self.position = Position::At((index + self.len - 1) % self.len);
        }
    }

    fn go_to_next(&mut self) {
        if let Position::At(index) = self.position {
            self.position = Position::At((index + 1) % self.len);
        }
    }

    fn jump_to(&mut self, index: usize) {
        if self.position == Position::Empty {
            return;
        }
        if index < self.len {
            self.position = Position::At(index);
        } else {
            tracing::warn!(index, len = self.len, "ignoring jump past the last slide");
        }
    }

    fn toggle_play_pause(&mut self, now: Instant) {
        self.is_playing = !self.is_playing;
        self.rearm(now);
    }

    fn handle_tick(&mut self, at: Instant) {
        if !self.wants_autoplay() {
            return;
        }
        if !self.clock.accepts(at, self.interval) {
            tracing::trace!("dropping stale autoplay tick");
            return;
        }
        self.go_to_next();
    }

    fn rearm(&mut self, now: Instant) {
        if self.wants_autoplay() {
            self.clock.arm(now);
        } else {
            self.clock.disarm();
        }
    }

    fn handle_raw_event(&mut self, event: event::Event) -> Effect {
        match event {
            event::Event::Window(window::Event::Resized(_)) => Effect::QueryWindowMode,
            event::Event::Keyboard(keyboard_event) => match keyboard_event {
                keyboard::Event::KeyPressed {
                    key: keyboard::Key::Named(keyboard::key::Named::ArrowLeft),
                    ..
                } => self.handle_message(Message::Previous),
                keyboard::Event::KeyPressed {
                    key: keyboard::Key::Named(keyboard::key::Named::ArrowRight),
                    ..
                } => self.handle_message(Message::Next),
                keyboard::Event::KeyPressed {
                    key: keyboard::Key::Named(keyboard::key::Named::Space),
                    ..
                } => self.handle_message(Message::TogglePlayPause),
                keyboard::Event::KeyPressed {
                    key: keyboard::Key::Named(keyboard::key::Named::F11),
                    ..
                } => self.handle_message(Message::ToggleFullscreen),
                keyboard::Event::KeyPressed {
                    key: keyboard::Key::Named(keyboard::key::Named::Escape),
                    ..
                } if self.is_fullscreen => Effect::SetFullscreen(false),
                _ => Effect::None,
            },
            _ => Effect::None,
        }
    }

    pub fn view<'a>(&'a self, ctx: ViewContext<'a>) -> Element<'a, Message> {
        let Position::At(index) = self.position else {
            return empty_state::view(ctx.i18n);
        };
        let total = ctx.slides.len();

        let stage = self.stage(ctx, index);

        if self.is_fullscreen {
            return stage;
        }

        let indicators = controls::indicator_strip(total, index);
        let counter = controls::counter(ctx.i18n, index, total);

        let content: Column<'a, Message> = column![stage, indicators, counter]
            .spacing(spacing::MD)
            .align_x(alignment::Horizontal::Center)
            .width(Length::Fill)
            .height(Length::Fill);

        content.into()
    }

    /// The slide itself with its caption and the overlay buttons.
    fn stage<'a>(&'a self, ctx: ViewContext<'a>, index: usize) -> Element<'a, Message> {
        let picture: Element<'a, Message> = match ctx.slides.handle(index) {
            Some(SlideHandle::Raster(handle)) => image(handle.clone())
                .content_fit(ContentFit::Contain)
                .width(Length::Fill)
                .height(Length::Fill)
                .into(),
            Some(SlideHandle::Vector(handle)) => svg(handle.clone())
                .content_fit(ContentFit::Contain)
                .width(Length::Fill)
                .height(Length::Fill)
                .into(),
            None => text("").into(),
        };

        let caption_text = ctx
            .slides
            .get(index)
            .map(|slide| slide.caption.as_str())
            .unwrap_or_default();

        let caption = container(
            text(caption_text)
                .size(typography::TITLE_MD)
                .align_x(alignment::Horizontal::Center)
                .width(Length::Fill),
        )
        .padding([spacing::LG, spacing::XL])
        .width(Length::Fill)
        .style(styles::overlay::caption);

        let caption_layer = container(caption)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_y(alignment::Vertical::Bottom);

        let navigation = controls::navigation(ctx.i18n);
        let playback = controls::playback(ctx.i18n, self.is_playing, self.is_fullscreen);

        let layers = stack![picture, caption_layer, navigation, playback]
            .width(Length::Fill)
            .height(Length::Fill);

        let corner = if self.is_fullscreen {
            radius::NONE
        } else {
            radius::XL
        };

        container(layers)
            .width(Length::Fill)
            .height(Length::Fill)
            .clip(true)
            .style(styles::container::stage(corner))
            .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use iced::keyboard::key::Named;
    use std::time::Duration;

    fn playing(len: usize) -> State {
        State::new(len, AutoplayInterval::default(), true, false)
    }

    fn key(named: Named) -> Message {
        Message::RawEvent {
            window: window::Id::unique(),
            event: event::Event::Keyboard(keyboard::Event::KeyPressed {
                key: keyboard::Key::Named(named),
                modified_key: keyboard::Key::Named(named),
                physical_key: keyboard::key::Physical::Unidentified(
                    keyboard::key::NativeCode::Unidentified,
                ),
                location: keyboard::Location::Standard,
                modifiers: keyboard::Modifiers::default(),
                text: None,
                repeat: false,
            }),
        }
    }

    #[test]
    fn new_starts_at_first_slide() {
        let state = playing(25);
        assert_eq!(state.position(), Position::At(0));
        assert!(state.is_playing());
        assert!(!state.is_fullscreen());
    }

    #[test]
    fn empty_collection_uses_empty_position() {
        let mut state = playing(0);
        assert_eq!(state.position(), Position::Empty);
        assert!(!state.wants_autoplay());

        state.handle_message(Message::Next);
        state.handle_message(Message::Previous);
        state.handle_message(Message::JumpTo(0));
        state.handle_message(Message::AutoplayTick(Instant::now() + Duration::from_secs(60)));

        assert_eq!(state.position(), Position::Empty);
    }

    #[test]
    fn previous_wraps_to_last_slide() {
        let mut state = playing(25);
        state.handle_message(Message::Previous);
        assert_eq!(state.position(), Position::At(24));
    }

    #[test]
    fn next_wraps_to_first_slide() {
        let mut state = playing(3);
        state.handle_message(Message::JumpTo(2));
        state.handle_message(Message::Next);
        assert_eq!(state.position(), Position::At(0));
    }

    #[test]
    fn stepping_through_every_slide_returns_to_start() {
        for len in 1..=30 {
            for start in [0, len / 2, len - 1] {
                let mut state = playing(len);
                state.handle_message(Message::JumpTo(start));

                for _ in 0..len {
                    state.handle_message(Message::Next);
                }
                assert_eq!(state.position(), Position::At(start), "next, len {len}");

                for _ in 0..len {
                    state.handle_message(Message::Previous);
                }
                assert_eq!(state.position(), Position::At(start), "previous, len {len}");
            }
        }
    }

    #[test]
    fn next_then_previous_cancel_out() {
        let mut state = playing(7);
        state.handle_message(Message::JumpTo(5));
        for _ in 0..4 {
            state.handle_message(Message::Next);
        }
        assert_eq!(state.position(), Position::At(2));
        for _ in 0..4 {
            state.handle_message(Message::Previous);
        }
        assert_eq!(state.position(), Position::At(5));
    }

    #[test]
    fn single_slide_navigation_stays_put() {
        let mut state = playing(1);
        state.handle_message(Message::Next);
        assert_eq!(state.position(), Position::At(0));
        state.handle_message(Message::Previous);
        assert_eq!(state.position(), Position::At(0));
    }

    #[test]
    fn jump_to_out_of_range_is_ignored() {
        let mut state = playing(5);
        state.handle_message(Message::JumpTo(3));
        state.handle_message(Message::JumpTo(5));
        assert_eq!(state.position(), Position::At(3));
    }

    #[test]
    fn toggle_play_pause_keeps_index() {
        let mut state = playing(5);
        state.handle_message(Message::Next);
        state.handle_message(Message::TogglePlayPause);
        assert!(!state.is_playing());
        assert_eq!(state.position(), Position::At(1));
        assert!(!state.wants_autoplay());
    }

    #[test]
    fn tick_after_full_interval_advances() {
        let mut state = playing(3);
        let later = Instant::now() + state.interval().as_duration() * 2;
        state.handle_message(Message::AutoplayTick(later));
        assert_eq!(state.position(), Position::At(1));
    }

    #[test]
    fn stale_tick_right_after_rearm_is_ignored() {
        let mut state = playing(3);
        state.handle_message(Message::AutoplayTick(Instant::now()));
        assert_eq!(state.position(), Position::At(0));
    }

    #[test]
    fn tick_while_paused_is_ignored() {
        let mut state = State::new(3, AutoplayInterval::default(), false, false);
        let later = Instant::now() + Duration::from_secs(120);
        state.handle_message(Message::AutoplayTick(later));
        assert_eq!(state.position(), Position::At(0));
    }

    #[test]
    fn toggle_fullscreen_only_requests_a_mode() {
        let mut state = playing(3);
        assert_eq!(
            state.handle_message(Message::ToggleFullscreen),
            Effect::SetFullscreen(true)
        );
        assert!(!state.is_fullscreen());

        state.handle_message(Message::FullscreenChanged(true));
        assert!(state.is_fullscreen());
        assert_eq!(
            state.handle_message(Message::ToggleFullscreen),
            Effect::SetFullscreen(false)
        );
    }

    #[test]
    fn arrow_keys_navigate_and_space_toggles() {
        let mut state = playing(4);
        state.handle_message(key(Named::ArrowRight));
        state.handle_message(key(Named::ArrowRight));
        assert_eq!(state.position(), Position::At(2));
        state.handle_message(key(Named::ArrowLeft));
        assert_eq!(state.position(), Position::At(1));
        state.handle_message(key(Named::Space));
        assert!(!state.is_playing());
    }

    #[test]
    fn escape_leaves_fullscreen_only_when_fullscreen() {
        let mut state = playing(2);
        assert_eq!(state.handle_message(key(Named::Escape)), Effect::None);

        state.handle_message(Message::FullscreenChanged(true));
        assert_eq!(
            state.handle_message(key(Named::Escape)),
            Effect::SetFullscreen(false)
        );
        assert_eq!(
            state.handle_message(key(Named::F11)),
            Effect::SetFullscreen(false)
        );
    }

    #[test]
    fn resize_asks_for_window_mode() {
        let mut state = playing(2);
        let effect = state.handle_message(Message::RawEvent {
            window: window::Id::unique(),
            event: event::Event::Window(window::Event::Resized(iced::Size::new(800.0, 600.0))),
        });
        assert_eq!(effect, Effect::QueryWindowMode);
    }

    #[test]
    fn open_uploader_is_forwarded() {
        let mut state = playing(0);
        assert_eq!(
            state.handle_message(Message::OpenUploader),
            Effect::OpenUploader
        );
    }
}
