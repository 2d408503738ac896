// SPDX-License-Identifier: MPL-2.0
//! Slides and the ordered collection the slideshow plays.

pub mod manifest;
mod source;

pub use source::{resolve_path, SlideHandle};

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// One captioned image.
///
/// `src` is either a path (relative paths and root-anchored web style paths
/// such as `/uploads/a.png` are resolved against the slides directory) or a
/// `data:` URL produced by the uploader.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slide {
    pub src: String,
    pub caption: String,
}

impl Slide {
    pub fn new(src: impl Into<String>, caption: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            caption: caption.into(),
        }
    }
}

/// Ordered slides plus a parallel cache of render handles.
///
/// The collection only ever grows at the end. Entries are never reordered,
/// removed or deduplicated.
#[derive(Debug, Clone, Default)]
pub struct SlideCollection {
    slides: Vec<Slide>,
    handles: Vec<SlideHandle>,
    base_dir: Option<PathBuf>,
}

impl SlideCollection {
    /// Builds a collection, resolving path sources against `base_dir`.
    pub fn new(slides: Vec<Slide>, base_dir: Option<PathBuf>) -> Self {
        let mut collection = Self {
            slides: Vec::with_capacity(slides.len()),
            handles: Vec::with_capacity(slides.len()),
            base_dir,
        };
        collection.extend(slides);
        collection
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.slides.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Slide> {
        self.slides.get(index)
    }

    pub fn handle(&self, index: usize) -> Option<&SlideHandle> {
        self.handles.get(index)
    }

    pub fn slides(&self) -> &[Slide] {
        &self.slides
    }

    /// Appends `batch` in order.
    pub fn extend(&mut self, batch: impl IntoIterator<Item = Slide>) {
        for slide in batch {
            let handle = SlideHandle::resolve(&slide.src, self.base_dir.as_deref());
            self.slides.push(slide);
            self.handles.push(handle);
        }
    }
}
