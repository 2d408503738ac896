// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::ui::notifications;
use crate::ui::{uploader, viewer};
use iced::window;
use std::path::PathBuf;
use std::time::Instant;

use super::Screen;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Viewer(viewer::Message),
    Uploader(uploader::Message),
    /// The header toggle and the empty state both land here.
    SwitchScreen(Screen),
    /// The platform reported the current window mode.
    WindowModeReported(window::Mode),
    Notification(notifications::NotificationMessage),
    Tick(Instant), // Periodic tick for toast auto-dismiss
}

/// Runtime flags passed in from the CLI or launcher to tweak startup behavior.
#[derive(Debug, Clone, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `ICED_SLIDESHOW_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
    /// Optional slide manifest replacing the built-in one.
    pub manifest: Option<PathBuf>,
    /// Optional directory that relative slide paths are resolved against.
    pub slides_dir: Option<PathBuf>,
}
