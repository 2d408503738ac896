// SPDX-License-Identifier: MPL-2.0
//! Centralized icon module.
//!
//! Icons are small monochrome SVG documents embedded in the binary. Handles
//! are created once and cached using `OnceLock`. Being monochrome, every icon
//! can be tinted at render time with [`tinted`], so there is no separate
//! light/dark variant.
//!
//! # Naming Convention
//!
//! Icons use generic visual names describing the icon's appearance,
//! not the action context (e.g., `cross` not `remove_upload`).

use crate::ui::styles::overlay;
use iced::widget::svg::{Handle, Svg};
use iced::{Color, Length};
use std::sync::OnceLock;

/// Defines an icon function with a cached handle.
macro_rules! define_icon {
    ($name:ident, $body:literal, $doc:literal) => {
        #[doc = $doc]
        pub fn $name() -> Svg<'static> {
            static HANDLE: OnceLock<Handle> = OnceLock::new();
            let handle = HANDLE.get_or_init(|| {
                Handle::from_memory(
                    concat!(
                        r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24" fill="none" stroke="black" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">"#,
                        $body,
                        "</svg>"
                    )
                    .as_bytes(),
                )
            });
            Svg::new(handle.clone())
        }
    };
}

// =============================================================================
// Navigation
// =============================================================================

define_icon!(
    chevron_left,
    r#"<polyline points="15 18 9 12 15 6"/>"#,
    "Chevron pointing left."
);
define_icon!(
    chevron_right,
    r#"<polyline points="9 18 15 12 9 6"/>"#,
    "Chevron pointing right."
);

// =============================================================================
// Playback
// =============================================================================

define_icon!(
    play,
    r#"<polygon points="6 3 20 12 6 21 6 3" fill="black"/>"#,
    "Play icon: triangle pointing right."
);
define_icon!(
    pause,
    r#"<rect x="6" y="4" width="4" height="16" fill="black"/><rect x="14" y="4" width="4" height="16" fill="black"/>"#,
    "Pause icon: two vertical bars."
);
define_icon!(
    expand,
    r#"<path d="M8 3H5a2 2 0 0 0-2 2v3"/><path d="M21 8V5a2 2 0 0 0-2-2h-3"/><path d="M3 16v3a2 2 0 0 0 2 2h3"/><path d="M16 21h3a2 2 0 0 0 2-2v-3"/>"#,
    "Four outward corners (enter fullscreen)."
);
define_icon!(
    compress,
    r#"<path d="M8 3v3a2 2 0 0 1-2 2H3"/><path d="M21 8h-3a2 2 0 0 1-2-2V3"/><path d="M3 16h3a2 2 0 0 1 2 2v3"/><path d="M16 21v-3a2 2 0 0 1 2-2h3"/>"#,
    "Four inward corners (exit fullscreen)."
);

// =============================================================================
// Uploading
// =============================================================================

define_icon!(
    upload,
    r#"<path d="M21 15v4a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2v-4"/><polyline points="17 8 12 3 7 8"/><line x1="12" y1="3" x2="12" y2="15"/>"#,
    "Arrow leaving a tray."
);
define_icon!(
    picture,
    r#"<rect x="3" y="3" width="18" height="18" rx="2"/><circle cx="9" cy="9" r="2"/><path d="m21 15-3.1-3.1a2 2 0 0 0-2.8 0L6 21"/>"#,
    "Framed landscape picture."
);
define_icon!(
    plus,
    r#"<line x1="12" y1="5" x2="12" y2="19"/><line x1="5" y1="12" x2="19" y2="12"/>"#,
    "Plus sign."
);
define_icon!(
    cross,
    r#"<line x1="18" y1="6" x2="6" y2="18"/><line x1="6" y1="6" x2="18" y2="18"/>"#,
    "Diagonal cross."
);

// =============================================================================
// Decoration and notifications
// =============================================================================

define_icon!(
    heart,
    r#"<path d="M19 14c1.5-1.5 3-3.2 3-5.5A5.5 5.5 0 0 0 16.5 3c-1.8 0-3 .5-4.5 2-1.5-1.5-2.7-2-4.5-2A5.5 5.5 0 0 0 2 8.5c0 2.3 1.5 4 3 5.5l7 7Z" fill="black"/>"#,
    "Filled heart."
);
define_icon!(
    checkmark,
    r#"<polyline points="20 6 9 17 4 12"/>"#,
    "Checkmark."
);
define_icon!(
    info,
    r#"<circle cx="12" cy="12" r="10"/><line x1="12" y1="16" x2="12" y2="12"/><line x1="12" y1="8" x2="12.01" y2="8"/>"#,
    "Circled letter i."
);
define_icon!(
    warning,
    r#"<path d="m21.7 18-8-14a2 2 0 0 0-3.4 0l-8 14A2 2 0 0 0 4 21h16a2 2 0 0 0 1.7-3Z"/><line x1="12" y1="9" x2="12" y2="13"/><line x1="12" y1="17" x2="12.01" y2="17"/>"#,
    "Triangle with exclamation mark."
);

// =============================================================================
// Helpers
// =============================================================================

/// Square icon of `size` pixels.
pub fn sized(icon: Svg<'static>, size: f32) -> Svg<'static> {
    icon.width(Length::Fixed(size)).height(Length::Fixed(size))
}

/// Square icon of `size` pixels tinted with `color`.
pub fn tinted(icon: Svg<'static>, size: f32, color: Color) -> Svg<'static> {
    sized(icon, size).style(overlay::icon(color))
}
