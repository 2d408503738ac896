// SPDX-License-Identifier: MPL-2.0
//! Update logic for the application.
//!
//! Component messages are forwarded to their owners; the returned effects
//! are turned into screen switches, window commands and notifications here.

use super::{Message, PlaybackSettings, Screen};
use crate::i18n::fluent::I18n;
use crate::slides::{Slide, SlideCollection};
use crate::ui::notifications;
use crate::ui::{uploader, viewer};
use iced::{window, Task};

/// Context for update operations containing mutable references to app state.
pub struct UpdateContext<'a> {
    pub i18n: &'a I18n,
    pub screen: &'a mut Screen,
    pub slides: &'a mut SlideCollection,
    pub viewer: &'a mut viewer::State,
    pub uploader: &'a mut uploader::State,
    pub playback: PlaybackSettings,
    pub fullscreen: &'a mut bool,
    pub window_id: &'a mut Option<window::Id>,
    pub notifications: &'a mut notifications::Manager,
}

/// Handles viewer component messages.
pub fn handle_viewer_message(
    ctx: &mut UpdateContext<'_>,
    message: viewer::Message,
) -> Task<Message> {
    if let viewer::Message::RawEvent { window, .. } = &message {
        *ctx.window_id = Some(*window);
    }

    match ctx.viewer.handle_message(message) {
        viewer::Effect::None => Task::none(),
        viewer::Effect::SetFullscreen(desired) => {
            update_fullscreen_mode(*ctx.fullscreen, *ctx.window_id, desired)
        }
        viewer::Effect::QueryWindowMode => match *ctx.window_id {
            Some(id) => query_window_mode(id),
            None => Task::none(),
        },
        viewer::Effect::OpenUploader => handle_screen_switch(ctx, Screen::Uploader),
    }
}

/// Handles uploader component messages.
pub fn handle_uploader_message(
    ctx: &mut UpdateContext<'_>,
    message: uploader::Message,
) -> Task<Message> {
    let (effect, task) = ctx.uploader.handle_message(message, ctx.i18n);
    let uploader_task = task.map(Message::Uploader);

    let side_effect = match effect {
        uploader::Effect::None => Task::none(),
        uploader::Effect::Notify(notification) => {
            ctx.notifications.push(notification);
            Task::none()
        }
        uploader::Effect::Commit(batch) => handle_commit(ctx, batch),
    };

    Task::batch([uploader_task, side_effect])
}

/// Appends a committed batch and returns to the slideshow.
fn handle_commit(ctx: &mut UpdateContext<'_>, batch: Vec<Slide>) -> Task<Message> {
    let added = batch.len();
    ctx.slides.extend(batch);
    tracing::info!(added, total = ctx.slides.len(), "slides added");

    ctx.notifications.push(
        notifications::Notification::success("notification-upload-added")
            .with_arg("count", added.to_string()),
    );

    handle_screen_switch(ctx, Screen::Viewer)
}

/// Switches screens.
///
/// The viewer always starts over on the first slide with the configured
/// playback state; the uploader's working set does not survive being hidden.
/// Window mode is only tracked while the viewer is shown, so it is asked for
/// again when the viewer comes back.
pub fn handle_screen_switch(ctx: &mut UpdateContext<'_>, target: Screen) -> Task<Message> {
    let task = match target {
        Screen::Viewer => {
            *ctx.viewer = viewer::State::new(
                ctx.slides.len(),
                ctx.playback.interval,
                ctx.playback.start_playing,
                *ctx.fullscreen,
            );
            ctx.uploader.reset();
            ctx.window_id.map_or_else(Task::none, query_window_mode)
        }
        Screen::Uploader => {
            if *ctx.screen != Screen::Uploader {
                ctx.uploader.reset();
            }
            Task::none()
        }
    };
    tracing::debug!(?target, "switching screen");
    *ctx.screen = target;
    task
}

/// Records the mode the platform reported and tells the viewer.
pub fn handle_window_mode(ctx: &mut UpdateContext<'_>, mode: window::Mode) -> Task<Message> {
    let fullscreen = mode == window::Mode::Fullscreen;
    *ctx.fullscreen = fullscreen;
    ctx.viewer
        .handle_message(viewer::Message::FullscreenChanged(fullscreen));
    Task::none()
}

/// Requests fullscreen or windowed mode.
///
/// `fullscreen` is left alone: it only changes once the platform reports
/// the new mode, so a refused request leaves the last known state intact.
fn update_fullscreen_mode(
    fullscreen: bool,
    window_id: Option<window::Id>,
    desired: bool,
) -> Task<Message> {
    if fullscreen == desired {
        return Task::none();
    }

    let mode = if desired {
        window::Mode::Fullscreen
    } else {
        window::Mode::Windowed
    };

    match window_id {
        Some(id) => window::set_mode(id, mode).chain(query_window_mode(id)),
        None => window::latest()
            .and_then(move |id| window::set_mode(id, mode).chain(query_window_mode(id))),
    }
}

fn query_window_mode(id: window::Id) -> Task<Message> {
    window::mode(id).map(Message::WindowModeReported)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::state::AutoplayInterval;
    use crate::ui::viewer::Position;

    struct Fixture {
        i18n: I18n,
        screen: Screen,
        slides: SlideCollection,
        viewer: viewer::State,
        uploader: uploader::State,
        fullscreen: bool,
        window_id: Option<window::Id>,
        notifications: notifications::Manager,
    }

    impl Fixture {
        fn new(len: usize) -> Self {
            let slides = (0..len)
                .map(|i| Slide::new(format!("/uploads/{i}.png"), format!("slide {i}")))
                .collect();
            let slides = SlideCollection::new(slides, None);
            Self {
                i18n: I18n::default(),
                screen: Screen::Viewer,
                viewer: viewer::State::new(slides.len(), AutoplayInterval::default(), true, false),
                slides,
                uploader: uploader::State::new(),
                fullscreen: false,
                window_id: None,
                notifications: notifications::Manager::new(),
            }
        }

        fn ctx(&mut self) -> UpdateContext<'_> {
            UpdateContext {
                i18n: &self.i18n,
                screen: &mut self.screen,
                slides: &mut self.slides,
                viewer: &mut self.viewer,
                uploader: &mut self.uploader,
                playback: PlaybackSettings::default(),
                fullscreen: &mut self.fullscreen,
                window_id: &mut self.window_id,
                notifications: &mut self.notifications,
            }
        }
    }

    #[test]
    fn commit_appends_and_returns_to_viewer() {
        let mut fixture = Fixture::new(25);
        let _ = handle_screen_switch(&mut fixture.ctx(), Screen::Uploader);
        assert_eq!(fixture.screen, Screen::Uploader);

        let batch = vec![Slide::new("a.png", "a"), Slide::new("b.png", "b")];
        let _ = handle_commit(&mut fixture.ctx(), batch);

        assert_eq!(fixture.slides.len(), 27);
        assert_eq!(fixture.slides.slides()[26].caption, "b");
        assert_eq!(fixture.screen, Screen::Viewer);
        assert_eq!(fixture.viewer.position(), Position::At(0));
        assert!(fixture.notifications.has_notifications());
    }

    #[test]
    fn returning_to_viewer_remounts_it_fresh() {
        let mut fixture = Fixture::new(5);
        let _ = handle_viewer_message(&mut fixture.ctx(), viewer::Message::JumpTo(3));
        let _ = handle_viewer_message(&mut fixture.ctx(), viewer::Message::TogglePlayPause);
        assert!(!fixture.viewer.is_playing());

        let _ = handle_screen_switch(&mut fixture.ctx(), Screen::Uploader);
        let _ = handle_screen_switch(&mut fixture.ctx(), Screen::Viewer);

        assert_eq!(fixture.viewer.position(), Position::At(0));
        assert!(fixture.viewer.is_playing());
    }

    #[test]
    fn empty_state_button_opens_uploader() {
        let mut fixture = Fixture::new(0);
        let _ = handle_viewer_message(&mut fixture.ctx(), viewer::Message::OpenUploader);
        assert_eq!(fixture.screen, Screen::Uploader);
    }

    #[test]
    fn fullscreen_request_waits_for_platform_report() {
        let mut fixture = Fixture::new(3);
        let _ = handle_viewer_message(&mut fixture.ctx(), viewer::Message::ToggleFullscreen);
        assert!(!fixture.fullscreen);
        assert!(!fixture.viewer.is_fullscreen());

        let _ = handle_window_mode(&mut fixture.ctx(), window::Mode::Fullscreen);
        assert!(fixture.fullscreen);
        assert!(fixture.viewer.is_fullscreen());

        let _ = handle_screen_switch(&mut fixture.ctx(), Screen::Viewer);
        assert!(fixture.viewer.is_fullscreen());
    }

    #[test]
    fn decode_failure_becomes_a_toast() {
        let mut fixture = Fixture::new(1);
        let session = fixture.uploader.session();
        let _ = handle_uploader_message(
            &mut fixture.ctx(),
            uploader::Message::Decoded {
                session,
                path: "broken.png".into(),
                result: Err(crate::error::DecodeError::Empty.into()),
            },
        );
        assert_eq!(fixture.notifications.visible_count(), 1);
        assert_eq!(fixture.slides.len(), 1);
    }

    #[test]
    fn decodes_started_before_leaving_the_uploader_are_dropped() {
        let mut fixture = Fixture::new(2);
        let _ = handle_screen_switch(&mut fixture.ctx(), Screen::Uploader);
        let first_session = fixture.uploader.session();
        let _ = handle_uploader_message(
            &mut fixture.ctx(),
            uploader::Message::FileDropped("old.svg".into()),
        );
        assert_eq!(fixture.uploader.decoding(), 1);

        let _ = handle_screen_switch(&mut fixture.ctx(), Screen::Viewer);
        let _ = handle_screen_switch(&mut fixture.ctx(), Screen::Uploader);
        assert_eq!(fixture.uploader.decoding(), 0);
        assert_ne!(fixture.uploader.session(), first_session);

        let svg = br#"<svg xmlns="http://www.w3.org/2000/svg"/>"#.to_vec();
        let image = crate::media::DecodedImage {
            path: "old.svg".into(),
            data_url: crate::media::encode_data_url("image/svg+xml", &svg),
            handle: crate::slides::SlideHandle::from_bytes("image/svg+xml", svg),
        };
        let _ = handle_uploader_message(
            &mut fixture.ctx(),
            uploader::Message::Decoded {
                session: first_session,
                path: "old.svg".into(),
                result: Ok(image),
            },
        );
        let _ = handle_uploader_message(
            &mut fixture.ctx(),
            uploader::Message::Decoded {
                session: first_session,
                path: "older.png".into(),
                result: Err(crate::error::DecodeError::Empty.into()),
            },
        );

        assert!(fixture.uploader.pending().is_empty());
        assert!(!fixture.notifications.has_notifications());
    }
}
