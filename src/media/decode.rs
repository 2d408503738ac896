// SPDX-License-Identifier: MPL-2.0
//! Asynchronous decoding of an uploaded file into a data URL.
//!
//! Reading happens on the async runtime, validation (which parses the whole
//! image) on the blocking pool. Each file is decoded by its own task so one
//! failure never affects the others.

use super::data_url::encode_data_url;
use crate::error::{DecodeError, Error, Result};
use crate::slides::SlideHandle;
use resvg::usvg;
use std::path::{Path, PathBuf};

/// An uploaded file that has been read and validated.
#[derive(Debug, Clone)]
pub struct DecodedImage {
    /// Where the file came from.
    pub path: PathBuf,
    /// Self-contained `data:` URL of the file content.
    pub data_url: String,
    /// Render handle built from the same bytes.
    pub handle: SlideHandle,
}

impl DecodedImage {
    /// The file name as shown to the user (lossy for non UTF-8 names).
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default()
    }
}

/// Reads `path`, checks that it really is an image of the declared family
/// and encodes it as a data URL tagged with `mime`.
pub async fn decode_upload(path: PathBuf, mime: &'static str) -> Result<DecodedImage> {
    let bytes = tokio::fs::read(&path)
        .await
        .map_err(|e| DecodeError::Unreadable(e.to_string()))?;

    if bytes.is_empty() {
        return Err(DecodeError::Empty.into());
    }

    let bytes = tokio::task::spawn_blocking(move || validate(mime, &bytes).map(|()| bytes))
        .await
        .map_err(|e| Error::Io(e.to_string()))??;

    let data_url = encode_data_url(mime, &bytes);
    let handle = SlideHandle::from_bytes(mime, bytes);

    Ok(DecodedImage {
        path,
        data_url,
        handle,
    })
}

/// Parses `bytes` as the declared image family.
pub fn validate(mime: &str, bytes: &[u8]) -> std::result::Result<(), DecodeError> {
    if mime == "image/svg+xml" {
        usvg::Tree::from_data(bytes, &usvg::Options::default())
            .map(|_| ())
            .map_err(|e| DecodeError::Corrupted(e.to_string()))
    } else {
        image_rs::load_from_memory(bytes)
            .map(|_| ())
            .map_err(|e| DecodeError::Corrupted(e.to_string()))
    }
}

/// Display name used in logs and notifications.
pub fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::media::parse_data_url;
    use image_rs::{Rgba, RgbaImage};
    use std::fs;
    use tempfile::tempdir;

    const SVG: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" width="4" height="4"><rect width="4" height="4" fill="red"/></svg>"#;

    #[tokio::test]
    async fn decode_png_produces_png_data_url() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let path = temp_dir.path().join("beach.png");
        RgbaImage::from_pixel(3, 2, Rgba([0, 128, 255, 255]))
            .save(&path)
            .expect("failed to write png");

        let decoded = decode_upload(path.clone(), "image/png")
            .await
            .expect("png should decode");

        assert_eq!(decoded.path, path);
        assert_eq!(decoded.file_name(), "beach.png");
        assert!(decoded.data_url.starts_with("data:image/png;base64,"));
        let round_trip = parse_data_url(&decoded.data_url).expect("valid data url");
        assert_eq!(round_trip.bytes, fs::read(&path).expect("readable"));
        assert!(matches!(decoded.handle, SlideHandle::Raster(_)));
    }

    #[tokio::test]
    async fn decode_svg_produces_vector_handle() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let path = temp_dir.path().join("logo.svg");
        fs::write(&path, SVG).expect("failed to write svg");

        let decoded = decode_upload(path, "image/svg+xml")
            .await
            .expect("svg should decode");

        assert!(decoded.data_url.starts_with("data:image/svg+xml;base64,"));
        assert!(matches!(decoded.handle, SlideHandle::Vector(_)));
    }

    #[tokio::test]
    async fn decode_missing_file_is_unreadable() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let path = temp_dir.path().join("gone.png");

        let result = decode_upload(path, "image/png").await;
        assert!(matches!(
            result,
            Err(Error::Decode(DecodeError::Unreadable(_)))
        ));
    }

    #[tokio::test]
    async fn decode_empty_file_is_rejected() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let path = temp_dir.path().join("empty.png");
        fs::write(&path, b"").expect("failed to write file");

        let result = decode_upload(path, "image/png").await;
        assert!(matches!(result, Err(Error::Decode(DecodeError::Empty))));
    }

    #[tokio::test]
    async fn decode_corrupt_png_is_rejected() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let path = temp_dir.path().join("broken.png");
        fs::write(&path, b"definitely not a png").expect("failed to write file");

        let result = decode_upload(path, "image/png").await;
        assert!(matches!(
            result,
            Err(Error::Decode(DecodeError::Corrupted(_)))
        ));
    }

    #[test]
    fn validate_rejects_malformed_svg() {
        assert!(validate("image/svg+xml", b"<svg").is_err());
        assert!(validate("image/svg+xml", SVG.as_bytes()).is_ok());
    }

    #[test]
    fn display_name_prefers_file_name() {
        assert_eq!(display_name(Path::new("/tmp/a/b.png")), "b.png");
    }
}
