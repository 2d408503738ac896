// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Native events are routed to the component of the active screen only, so
//! hiding a screen also drops its listeners and timers.

use super::{Message, Screen};
use crate::ui::state::AutoplayInterval;
use crate::ui::{uploader, viewer};
use iced::{event, time, window, Subscription};
use std::time::Duration;

/// Creates the event subscription for the current screen.
///
/// - Viewer: keyboard shortcuts (unless a widget captured the key) and
///   resize events, which may mean the window mode changed.
/// - Uploader: file hover and drop events for the drop zone.
pub fn create_event_subscription(screen: Screen) -> Subscription<Message> {
    match screen {
        Screen::Viewer => event::listen_with(|event, status, window_id| match &event {
            event::Event::Window(window::Event::Resized(_)) => {
                Some(Message::Viewer(viewer::Message::RawEvent {
                    window: window_id,
                    event: event.clone(),
                }))
            }
            event::Event::Keyboard(..) => match status {
                event::Status::Ignored => Some(Message::Viewer(viewer::Message::RawEvent {
                    window: window_id,
                    event: event.clone(),
                })),
                event::Status::Captured => None,
            },
            _ => None,
        }),
        Screen::Uploader => event::listen_with(|event, _status, _window_id| match event {
            event::Event::Window(window::Event::FileHovered(_)) => {
                Some(Message::Uploader(uploader::Message::FileHovered))
            }
            event::Event::Window(window::Event::FilesHoveredLeft) => {
                Some(Message::Uploader(uploader::Message::FilesHoveredLeft))
            }
            event::Event::Window(window::Event::FileDropped(path)) => {
                Some(Message::Uploader(uploader::Message::FileDropped(path)))
            }
            _ => None,
        }),
    }
}

/// Creates the autoplay timer.
///
/// The timer is identified by its interval and the slide count, so any
/// change to either (or to playback) tears it down and starts a fresh one.
pub fn create_autoplay_subscription(
    screen: Screen,
    playing: bool,
    interval: AutoplayInterval,
    len: usize,
) -> Subscription<Message> {
    if screen == Screen::Viewer && playing && len > 0 {
        time::every(interval.as_duration())
            .with(len)
            .map(|(_, at)| Message::Viewer(viewer::Message::AutoplayTick(at)))
    } else {
        Subscription::none()
    }
}

/// Creates a periodic tick subscription for notification auto-dismiss.
pub fn create_tick_subscription(has_notifications: bool) -> Subscription<Message> {
    if has_notifications {
        time::every(Duration::from_millis(100)).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
