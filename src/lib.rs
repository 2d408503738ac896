// SPDX-License-Identifier: MPL-2.0
//! `iced_slideshow` is a captioned photo slideshow built with the Iced GUI framework.
//!
//! It plays a seeded collection of slides with autoplay and keyboard
//! navigation, and lets the user add pictures with their own captions
//! through a file picker or drag-and-drop.

#![doc(html_root_url = "https://docs.rs/iced_slideshow/0.1.0")]

pub mod app;
pub mod config;
pub mod error;
pub mod i18n;
pub mod icon;
pub mod media;
pub mod slides;
pub mod ui;
