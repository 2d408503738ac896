// SPDX-License-Identifier: MPL-2.0
//! File drag-over state for the upload drop zone.
//!
//! The window reports one hover event per dragged file, then either a drop
//! per file or a single "hover left". The state is purely visual.

/// Whether files are currently dragged over the window.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DragState {
    hovered_files: usize,
}

impl DragState {
    /// A file entered the window.
    pub fn enter(&mut self) {
        self.hovered_files += 1;
    }

    /// The pointer left the window without dropping.
    pub fn leave(&mut self) {
        self.hovered_files = 0;
    }

    /// A file was dropped; the zone is no longer active.
    pub fn drop_files(&mut self) {
        self.hovered_files = 0;
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.hovered_files > 0
    }
}
