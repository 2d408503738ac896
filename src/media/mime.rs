// SPDX-License-Identifier: MPL-2.0
//! Declared MIME types for local files.
//!
//! A file's type is declared from its extension, the same way a file picker
//! or a drop target reports it. The declared type is trusted for filtering;
//! actual content is checked later by [`super::decode`].

use std::path::Path;

/// Image types the uploader accepts, compared exactly against the declared type.
pub const ACCEPTED_MIME_TYPES: &[&str] = &[
    "image/jpeg",
    "image/jpg",
    "image/png",
    "image/gif",
    "image/webp",
    "image/bmp",
    "image/svg+xml",
];

/// Returns the declared MIME type of `path`, or `None` when the extension is
/// missing or not one of the image families the uploader understands.
pub fn declared_mime(path: &Path) -> Option<&'static str> {
    let extension = path.extension()?.to_str()?.to_ascii_lowercase();
    let mime = match extension.as_str() {
        "jpg" | "jpeg" | "jpe" => "image/jpeg",
        "png" => "image/png",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "bmp" => "image/bmp",
        "svg" => "image/svg+xml",
        _ => return None,
    };
    Some(mime)
}

/// Returns true if `mime` is one of [`ACCEPTED_MIME_TYPES`].
pub fn is_accepted(mime: &str) -> bool {
    ACCEPTED_MIME_TYPES.contains(&mime)
}

/// Removes the final extension from a file name.
///
/// Only a trailing `.` followed by at least one character that is neither
/// `.` nor `/` counts as an extension, so `"photo"` and `"photo."` are
/// returned unchanged while `"archive.tar.gz"` becomes `"archive.tar"`.
pub fn strip_last_extension(name: &str) -> &str {
    match name.rfind('.') {
        Some(dot) => {
            let suffix = &name[dot + 1..];
            if suffix.is_empty() || suffix.contains('/') {
                name
            } else {
                &name[..dot]
            }
        }
        None => name,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn declared_mime_maps_common_image_extensions() {
        assert_eq!(declared_mime(Path::new("a.jpg")), Some("image/jpeg"));
        assert_eq!(declared_mime(Path::new("a.JPEG")), Some("image/jpeg"));
        assert_eq!(declared_mime(Path::new("a.png")), Some("image/png"));
        assert_eq!(declared_mime(Path::new("a.svg")), Some("image/svg+xml"));
        assert_eq!(declared_mime(Path::new("dir/b.webp")), Some("image/webp"));
    }

    #[test]
    fn declared_mime_is_none_without_extension() {
        assert_eq!(declared_mime(Path::new("README")), None);
        assert_eq!(declared_mime(&PathBuf::from("archive.unknownext")), None);
    }

    #[test]
    fn declared_mime_is_none_for_other_families() {
        for name in ["scan.tiff", "notes.txt", "clip.mp4", "doc.pdf"] {
            assert_eq!(declared_mime(Path::new(name)), None, "{name}");
        }
    }

    #[test]
    fn accepted_set_rejects_non_images_and_tiff() {
        assert!(is_accepted("image/png"));
        assert!(is_accepted("image/jpg"));
        assert!(is_accepted("image/svg+xml"));
        assert!(!is_accepted("text/plain"));
        assert!(!is_accepted("image/tiff"));
        assert!(!is_accepted(""));
    }

    #[test]
    fn every_upload_extension_declares_an_accepted_type() {
        for ext in super::super::extensions::UPLOAD_EXTENSIONS {
            let path = PathBuf::from(format!("file.{ext}"));
            let mime = declared_mime(&path).expect("extension should be known");
            assert!(is_accepted(mime), "{ext} -> {mime} should be accepted");
        }
    }

    #[test]
    fn strip_last_extension_removes_only_the_final_suffix() {
        assert_eq!(strip_last_extension("beach.png"), "beach");
        assert_eq!(strip_last_extension("archive.tar.gz"), "archive.tar");
        assert_eq!(strip_last_extension("IMG_0001.JPG"), "IMG_0001");
    }

    #[test]
    fn strip_last_extension_keeps_names_without_extension() {
        assert_eq!(strip_last_extension("photo"), "photo");
        assert_eq!(strip_last_extension("photo."), "photo.");
        assert_eq!(strip_last_extension(""), "");
    }

    #[test]
    fn strip_last_extension_on_dotfile_yields_empty_stem() {
        assert_eq!(strip_last_extension(".bashrc"), "");
    }
}
