// SPDX-License-Identifier: MPL-2.0
//! Turning a slide source string into something iced can draw.

use crate::media::data_url::{is_data_url, parse_data_url};
use iced::widget::{image, svg};
use std::path::{Path, PathBuf};

/// Render handle for a slide.
#[derive(Debug, Clone)]
pub enum SlideHandle {
    Raster(image::Handle),
    Vector(svg::Handle),
}

impl SlideHandle {
    /// Builds a handle from in-memory bytes of type `mime`.
    pub fn from_bytes(mime: &str, bytes: Vec<u8>) -> Self {
        if mime == "image/svg+xml" {
            SlideHandle::Vector(svg::Handle::from_memory(bytes))
        } else {
            SlideHandle::Raster(image::Handle::from_bytes(bytes))
        }
    }

    /// Builds a lazily loaded handle from a file on disk.
    pub fn from_path(path: PathBuf) -> Self {
        let is_svg = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("svg"));
        if is_svg {
            SlideHandle::Vector(svg::Handle::from_path(path))
        } else {
            SlideHandle::Raster(image::Handle::from_path(path))
        }
    }

    /// Resolves a slide `src` (path or data URL).
    ///
    /// A malformed data URL yields an empty raster handle, which renders as
    /// nothing rather than failing the whole collection.
    pub fn resolve(src: &str, base_dir: Option<&Path>) -> Self {
        if is_data_url(src) {
            match parse_data_url(src) {
                Ok(data) => Self::from_bytes(&data.mime, data.bytes),
                Err(e) => {
                    tracing::warn!("unusable slide source: {}", e);
                    SlideHandle::Raster(image::Handle::from_bytes(Vec::<u8>::new()))
                }
            }
        } else {
            Self::from_path(resolve_path(src, base_dir))
        }
    }
}

/// Resolves a path source. Web style root-anchored paths (`/uploads/a.png`)
/// are taken relative to `base_dir` when one is set.
pub fn resolve_path(src: &str, base_dir: Option<&Path>) -> PathBuf {
    match base_dir {
        Some(base) => base.join(src.trim_start_matches('/')),
        None => PathBuf::from(src),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_path_anchors_web_paths_in_base_dir() {
        let base = Path::new("/srv/public");
        assert_eq!(
            resolve_path("/lovable-uploads/a.png", Some(base)),
            PathBuf::from("/srv/public/lovable-uploads/a.png")
        );
        assert_eq!(
            resolve_path("b.png", Some(base)),
            PathBuf::from("/srv/public/b.png")
        );
    }

    #[test]
    fn resolve_path_without_base_is_verbatim() {
        assert_eq!(resolve_path("/abs/c.png", None), PathBuf::from("/abs/c.png"));
    }

    #[test]
    fn svg_paths_become_vector_handles() {
        assert!(matches!(
            SlideHandle::resolve("logo.SVG", None),
            SlideHandle::Vector(_)
        ));
        assert!(matches!(
            SlideHandle::resolve("photo.jpg", None),
            SlideHandle::Raster(_)
        ));
    }

    #[test]
    fn malformed_data_url_falls_back_to_empty_raster() {
        assert!(matches!(
            SlideHandle::resolve("data:image/png;base64,%%%", None),
            SlideHandle::Raster(_)
        ));
    }
}
