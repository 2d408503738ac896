// SPDX-License-Identifier: MPL-2.0
//! Upload-side media handling.
//!
//! Files picked or dropped by the user carry a declared MIME type (derived
//! from their extension). Accepted files are read and validated off the UI
//! thread and turned into self-contained `data:` URLs that can be stored as
//! a slide source.

pub mod data_url;
pub mod decode;
pub mod mime;

pub use data_url::{encode_data_url, parse_data_url, DataUrl};
pub use decode::{decode_upload, DecodedImage};
pub use mime::{declared_mime, is_accepted, strip_last_extension, ACCEPTED_MIME_TYPES};

/// Supported media extensions
pub mod extensions {
    /// Extensions offered by the file picker filter.
    pub const UPLOAD_EXTENSIONS: &[&str] =
        &["jpg", "jpeg", "png", "gif", "webp", "bmp", "svg"];
}
