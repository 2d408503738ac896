// SPDX-License-Identifier: MPL-2.0
//! Screen enumeration for application navigation.

/// Screens the user can navigate between.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Viewer,
    Uploader,
}

impl Screen {
    /// The other screen; used by the header toggle.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Screen::Viewer => Screen::Uploader,
            Screen::Uploader => Screen::Viewer,
        }
    }
}
