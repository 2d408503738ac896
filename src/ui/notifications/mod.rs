// SPDX-License-Identifier: MPL-2.0
//! Toast notifications.
//!
//! Non-blocking feedback for things the user should know about but that
//! never interrupt the slideshow: unreadable uploads, settings that failed
//! to load, a batch that was added.
//!
//! - [`Notification`] carries an i18n key, its arguments and a [`Severity`]
//! - [`Manager`] queues them, keeps at most three on screen and expires them
//! - [`Toast`] renders the visible ones in the bottom-right corner

mod manager;
mod notification;
mod toast;

pub use manager::{Manager, Message as NotificationMessage};
pub use notification::{Notification, NotificationId, Severity};
pub use toast::Toast;
