// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the slideshow and the uploader.
//!
//! The `App` owns the slide collection. The viewer only ever borrows it for
//! rendering; the uploader hands finished batches back through an effect and
//! the `App` appends them.

mod message;
pub mod paths;
mod screen;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};
pub use screen::Screen;

use crate::config::{self, Config, DEFAULT_SLIDES_DIR};
use crate::i18n::fluent::I18n;
use crate::slides::{manifest, SlideCollection};
use crate::ui::notifications;
use crate::ui::state::AutoplayInterval;
use crate::ui::theming::ThemeMode;
use crate::ui::{uploader, viewer};
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::path::PathBuf;
use std::time::Instant;

/// Playback preferences applied every time the viewer is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlaybackSettings {
    pub interval: AutoplayInterval,
    pub start_playing: bool,
}

impl PlaybackSettings {
    pub fn from_config(config: &Config) -> Self {
        Self {
            interval: AutoplayInterval::from(config.slideshow.autoplay_interval()),
            start_playing: config.slideshow.start_playing(),
        }
    }
}

impl Default for PlaybackSettings {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    screen: Screen,
    slides: SlideCollection,
    viewer: viewer::State,
    uploader: uploader::State,
    playback: PlaybackSettings,
    /// Last window mode reported by the platform.
    fullscreen: bool,
    window_id: Option<window::Id>,
    theme_mode: ThemeMode,
    /// Toast notification manager for user feedback.
    notifications: notifications::Manager,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("screen", &self.screen)
            .field("slides", &self.slides.len())
            .field("fullscreen", &self.fullscreen)
            .finish()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 900;
pub const WINDOW_DEFAULT_WIDTH: u32 = 1200;
pub const MIN_WINDOW_HEIGHT: u32 = 650;
pub const MIN_WINDOW_WIDTH: u32 = 650;

/// Builds the window settings
pub fn window_settings() -> window::Settings {
    let icon = crate::icon::load_window_icon();

    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        icon,
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    let boot = move || App::new(flags.clone());

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Builds the application around an explicit seed collection.
    pub fn with_slides(seed: SlideCollection, i18n: I18n, config: &Config) -> Self {
        let playback = PlaybackSettings::from_config(config);
        let viewer = viewer::State::new(
            seed.len(),
            playback.interval,
            playback.start_playing,
            false,
        );

        Self {
            i18n,
            screen: Screen::Viewer,
            slides: seed,
            viewer,
            uploader: uploader::State::new(),
            playback,
            fullscreen: false,
            window_id: None,
            theme_mode: config.general.theme_mode,
            notifications: notifications::Manager::new(),
        }
    }

    /// Loads configuration and the slide manifest named by `flags`.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        let i18n = I18n::new(flags.lang.clone(), &config);

        let manifest_path = flags
            .manifest
            .clone()
            .or_else(|| config.slideshow.manifest.clone());
        let (slides, manifest_warning) = manifest::load(manifest_path.as_deref());

        let slides_dir = flags
            .slides_dir
            .clone()
            .or_else(|| config.slideshow.slides_dir.clone())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_SLIDES_DIR));
        tracing::info!(
            slides = slides.len(),
            slides_dir = %slides_dir.display(),
            "starting slideshow"
        );

        let seed = SlideCollection::new(slides, Some(slides_dir));
        let mut app = Self::with_slides(seed, i18n, &config);

        for key in [config_warning, manifest_warning].into_iter().flatten() {
            app.notifications
                .push(notifications::Notification::warning(key));
        }

        (app, Task::none())
    }

    /// Read-only access to the slides.
    pub fn slides(&self) -> &SlideCollection {
        &self.slides
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn viewer(&self) -> &viewer::State {
        &self.viewer
    }

    pub fn uploader(&self) -> &uploader::State {
        &self.uploader
    }

    fn title(&self) -> String {
        self.i18n.tr("window-title")
    }

    fn theme(&self) -> Theme {
        self.theme_mode.theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        let event_sub = subscription::create_event_subscription(self.screen);
        let autoplay_sub = subscription::create_autoplay_subscription(
            self.screen,
            self.viewer.is_playing(),
            self.viewer.interval(),
            self.slides.len(),
        );
        let tick_sub =
            subscription::create_tick_subscription(self.notifications.has_notifications());

        Subscription::batch([event_sub, autoplay_sub, tick_sub])
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = update::UpdateContext {
            i18n: &self.i18n,
            screen: &mut self.screen,
            slides: &mut self.slides,
            viewer: &mut self.viewer,
            uploader: &mut self.uploader,
            playback: self.playback,
            fullscreen: &mut self.fullscreen,
            window_id: &mut self.window_id,
            notifications: &mut self.notifications,
        };

        match message {
            Message::Viewer(viewer_message) => {
                update::handle_viewer_message(&mut ctx, viewer_message)
            }
            Message::Uploader(uploader_message) => {
                update::handle_uploader_message(&mut ctx, uploader_message)
            }
            Message::SwitchScreen(target) => update::handle_screen_switch(&mut ctx, target),
            Message::WindowModeReported(mode) => update::handle_window_mode(&mut ctx, mode),
            Message::Notification(notification_message) => {
                self.notifications.handle_message(&notification_message);
                Task::none()
            }
            Message::Tick(_instant) => {
                self.notifications.expire(Instant::now());
                Task::none()
            }
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            screen: self.screen,
            slides: &self.slides,
            viewer: &self.viewer,
            uploader: &self.uploader,
            notifications: &self.notifications,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::slides::Slide;
    use crate::ui::viewer::Position;

    fn app_with(n: usize) -> App {
        let slides = (0..n)
            .map(|i| Slide::new(format!("{i}.png"), format!("slide {i}")))
            .collect();
        App::with_slides(
            SlideCollection::new(slides, None),
            I18n::default(),
            &Config::default(),
        )
    }

    #[test]
    fn with_slides_starts_on_viewer_playing() {
        let app = app_with(25);
        assert_eq!(app.screen(), Screen::Viewer);
        assert_eq!(app.slides().len(), 25);
        assert_eq!(app.viewer().position(), Position::At(0));
        assert!(app.viewer().is_playing());
    }

    #[test]
    fn start_playing_comes_from_config() {
        let mut config = Config::default();
        config.slideshow.start_playing = Some(false);
        config.slideshow.autoplay_interval_ms = Some(2500);

        let app = App::with_slides(SlideCollection::default(), I18n::default(), &config);
        assert!(!app.viewer().is_playing());
        assert_eq!(app.viewer().interval().millis(), 2500);
        assert_eq!(app.viewer().position(), Position::Empty);
    }

    #[test]
    fn default_playback_matches_config_defaults() {
        let playback = PlaybackSettings::default();
        assert!(playback.start_playing);
        assert_eq!(
            playback.interval.millis(),
            config::DEFAULT_AUTOPLAY_INTERVAL_MS
        );
    }

    #[test]
    fn toggle_button_switches_screens() {
        let mut app = app_with(3);
        let _ = app.update(Message::SwitchScreen(Screen::Uploader));
        assert_eq!(app.screen(), Screen::Uploader);
        let _ = app.update(Message::SwitchScreen(Screen::Viewer));
        assert_eq!(app.screen(), Screen::Viewer);
    }

    #[test]
    fn keyboard_navigation_goes_through_update() {
        let mut app = app_with(3);
        let _ = app.update(Message::Viewer(viewer::Message::Previous));
        assert_eq!(app.viewer().position(), Position::At(2));
    }

    #[test]
    fn app_renders() {
        let app = app_with(2);
        let _ = app.view();
        assert_eq!(app.title(), "Class of 1985 Slideshow");
    }
}
