// SPDX-License-Identifier: MPL-2.0
//! Slide manifests: TOML files listing `[[slide]]` entries.
//!
//! A manifest is compiled into the binary and used unless another one is
//! supplied through the CLI or the configuration file.

use super::Slide;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// The compiled-in default manifest.
pub const DEFAULT_MANIFEST: &str = include_str!("../../assets/manifest.toml");

#[derive(Debug, Default, Serialize, Deserialize)]
struct Manifest {
    #[serde(default, rename = "slide")]
    slides: Vec<Slide>,
}

/// Parses manifest content.
pub fn parse(content: &str) -> Result<Vec<Slide>> {
    let manifest: Manifest =
        toml::from_str(content).map_err(|e| Error::Manifest(e.to_string()))?;
    Ok(manifest.slides)
}

/// Loads a manifest from disk.
pub fn load_from_path(path: &Path) -> Result<Vec<Slide>> {
    let content = fs::read_to_string(path)?;
    parse(&content)
}

/// Returns the compiled-in slides.
pub fn default_slides() -> Vec<Slide> {
    parse(DEFAULT_MANIFEST).unwrap_or_else(|e| {
        tracing::error!("built-in manifest is invalid: {}", e);
        Vec::new()
    })
}

/// Loads the slides to seed the slideshow with.
///
/// Returns the slides and an optional warning notification key. A manifest
/// that cannot be read or parsed falls back to the compiled-in one.
pub fn load(path: Option<&Path>) -> (Vec<Slide>, Option<String>) {
    let Some(path) = path else {
        return (default_slides(), None);
    };

    match load_from_path(path) {
        Ok(slides) => {
            tracing::info!("loaded {} slides from {}", slides.len(), path.display());
            (slides, None)
        }
        Err(e) => {
            tracing::warn!("failed to load manifest {}: {}", path.display(), e);
            (
                default_slides(),
                Some("notification-manifest-load-error".to_string()),
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn default_manifest_has_25_slides_in_order() {
        let slides = default_slides();
        assert_eq!(slides.len(), 25);
        assert_eq!(
            slides[0].src,
            "/lovable-uploads/90119110-a910-4e62-b732-42b5b2e89a0f.png"
        );
        assert_eq!(
            slides[0].caption,
            "Gathering together, sharing stories and laughter"
        );
        assert_eq!(slides[24].src, "/lovable-uploads/_60A4708.png");
        assert_eq!(
            slides[24].caption,
            "Joy and laughter - memories that last forever"
        );
    }

    #[test]
    fn parse_accepts_empty_manifest() {
        let slides = parse("").expect("empty manifest is valid");
        assert!(slides.is_empty());
    }

    #[test]
    fn parse_rejects_entries_missing_caption() {
        let result = parse("[[slide]]\nsrc = \"a.png\"\n");
        assert!(matches!(result, Err(Error::Manifest(_))));
    }

    #[test]
    fn load_without_path_uses_builtin() {
        let (slides, warning) = load(None);
        assert_eq!(slides.len(), 25);
        assert!(warning.is_none());
    }

    #[test]
    fn load_falls_back_with_warning_on_missing_file() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let path = temp_dir.path().join("missing.toml");

        let (slides, warning) = load(Some(&path));
        assert_eq!(slides.len(), 25);
        assert_eq!(
            warning.as_deref(),
            Some("notification-manifest-load-error")
        );
    }

    #[test]
    fn serialized_manifest_loads_back() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let path = temp_dir.path().join("slides.toml");
        let slides = vec![
            Slide::new("a.png", "First"),
            Slide::new("b.svg", "Second, with \"quotes\""),
        ];
        let manifest = Manifest {
            slides: slides.clone(),
        };
        let content = toml::to_string_pretty(&manifest).expect("failed to serialize manifest");
        fs::write(&path, content).expect("failed to write manifest");

        let (loaded, warning) = load(Some(&path));

        assert!(warning.is_none());
        assert_eq!(loaded, slides);
    }
}
