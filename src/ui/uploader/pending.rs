// SPDX-License-Identifier: MPL-2.0
//! One decoded image waiting in the uploader's working set.

use crate::i18n::fluent::I18n;
use crate::media::{strip_last_extension, DecodedImage};
use crate::slides::{Slide, SlideHandle};
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct PendingUpload {
    /// `data:` URL of the file content.
    pub src: String,
    pub caption: String,
    /// File the image was read from. Dropped on commit.
    pub origin: PathBuf,
    /// Preview handle. Dropped on commit.
    pub handle: SlideHandle,
}

impl PendingUpload {
    /// Wraps a decoded image with its localized default caption.
    pub fn from_decoded(decoded: DecodedImage, i18n: &I18n) -> Self {
        let caption = default_caption(i18n, &decoded.file_name());
        Self {
            src: decoded.data_url,
            caption,
            origin: decoded.path,
            handle: decoded.handle,
        }
    }

    pub fn into_slide(self) -> Slide {
        Slide::new(self.src, self.caption)
    }
}

/// "New image - {stem}" where the stem is the file name without its last
/// extension. Names without an extension are used as they are.
pub fn default_caption(i18n: &I18n, file_name: &str) -> String {
    i18n.tr_with_args(
        "uploader-default-caption",
        &[("name", strip_last_extension(file_name))],
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::media::encode_data_url;

    #[test]
    fn default_caption_strips_only_the_last_extension() {
        let i18n = I18n::default();
        assert_eq!(default_caption(&i18n, "beach.png"), "New image - beach");
        assert_eq!(
            default_caption(&i18n, "party.final.jpeg"),
            "New image - party.final"
        );
        assert_eq!(default_caption(&i18n, "README"), "New image - README");
    }

    #[test]
    fn into_slide_keeps_src_and_caption_only() {
        let svg = br#"<svg xmlns="http://www.w3.org/2000/svg"/>"#;
        let src = encode_data_url("image/svg+xml", svg);
        let pending = PendingUpload {
            src: src.clone(),
            caption: "Reunion".into(),
            origin: PathBuf::from("/tmp/reunion.svg"),
            handle: SlideHandle::from_bytes("image/svg+xml", svg.to_vec()),
        };

        assert_eq!(pending.into_slide(), Slide::new(src, "Reunion"));
    }
}
