// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! Components follow the Elm-style "state down, messages up" pattern: each
//! screen owns its state, handles its own messages and reports anything the
//! application must act on through an `Effect`.
//!
//! # Screens
//!
//! - [`viewer`] - Captioned slideshow with autoplay, navigation and fullscreen
//! - [`uploader`] - File picker, drop zone and caption editing for new slides
//!
//! # Shared Infrastructure
//!
//! - [`state`] - Reusable state (autoplay clock, drag-and-drop hover)
//! - [`styles`] - Centralized styling (buttons, containers, overlays)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management
//! - [`icons`] - SVG icon loading and rendering
//! - [`notifications`] - Toast notification system for user feedback

pub mod design_tokens;
pub mod icons;
pub mod notifications;
pub mod state;
pub mod styles;
pub mod theming;
pub mod uploader;
pub mod viewer;
