// SPDX-License-Identifier: MPL-2.0
//! UI state management modules
//!
//! Small state machines kept apart from the components that use them so
//! they can be tested without a window.

pub mod autoplay;
pub mod drag;

pub use autoplay::{AutoplayClock, AutoplayInterval};
pub use drag::DragState;
