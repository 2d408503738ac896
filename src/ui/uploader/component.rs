// SPDX-License-Identifier: MPL-2.0
//! Uploader component: working set of decoded images and their captions.

use super::pending::PendingUpload;
use crate::error::Error;
use crate::i18n::fluent::I18n;
use crate::media::decode::display_name;
use crate::media::extensions::UPLOAD_EXTENSIONS;
use crate::media::{declared_mime, decode_upload, is_accepted, DecodedImage};
use crate::slides::Slide;
use crate::ui::notifications::Notification;
use crate::ui::state::DragState;
use iced::Task;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub enum Message {
    /// Open the native file picker.
    OpenPicker,
    /// Picker closed; `None` when cancelled.
    FilesPicked(Option<Vec<PathBuf>>),
    FileHovered,
    FilesHoveredLeft,
    FileDropped(PathBuf),
    /// A decode task finished. `session` is the working set it was started for.
    Decoded {
        session: u64,
        path: PathBuf,
        result: Result<DecodedImage, Error>,
    },
    Remove(usize),
    CaptionChanged(usize, String),
    Commit,
}

/// Side effects the application should perform after handling an uploader message.
#[derive(Debug, Clone)]
pub enum Effect {
    None,
    /// A finished batch for the slide collection.
    Commit(Vec<Slide>),
    Notify(Notification),
}

#[derive(Debug, Default)]
pub struct State {
    pending: Vec<PendingUpload>,
    drag: DragState,
    decoding: usize,
    /// Bumped by [`State::reset`]; decodes started before it are dropped.
    session: u64,
}

impl State {
    pub fn new() -> Self {
        Self::default()
    }

    /// Discards the working set. Decodes still in flight will be ignored.
    pub fn reset(&mut self) {
        *self = Self {
            session: self.session.wrapping_add(1),
            ..Self::default()
        };
    }

    #[must_use]
    pub fn session(&self) -> u64 {
        self.session
    }

    pub fn pending(&self) -> &[PendingUpload] {
        &self.pending
    }

    #[must_use]
    pub fn is_drag_active(&self) -> bool {
        self.drag.is_active()
    }

    /// Files still being read.
    #[must_use]
    pub fn decoding(&self) -> usize {
        self.decoding
    }

    pub fn handle_message(&mut self, message: Message, i18n: &I18n) -> (Effect, Task<Message>) {
        match message {
            Message::OpenPicker => (Effect::None, open_picker(i18n)),
            Message::FilesPicked(Some(paths)) => (Effect::None, self.ingest(paths)),
            Message::FilesPicked(None) => (Effect::None, Task::none()),
            Message::FileHovered => {
                self.drag.enter();
                (Effect::None, Task::none())
            }
            Message::FilesHoveredLeft => {
                self.drag.leave();
                (Effect::None, Task::none())
            }
            Message::FileDropped(path) => {
                self.drag.drop_files();
                (Effect::None, self.ingest(vec![path]))
            }
            Message::Decoded {
                session,
                path,
                result,
            } => {
                if session != self.session {
                    tracing::debug!(
                        path = %path.display(),
                        "dropping decode from a discarded session"
                    );
                    return (Effect::None, Task::none());
                }
                (self.finish_decode(path, result, i18n), Task::none())
            }
            Message::Remove(index) => {
                self.remove(index);
                (Effect::None, Task::none())
            }
            Message::CaptionChanged(index, caption) => {
                self.update_caption(index, caption);
                (Effect::None, Task::none())
            }
            Message::Commit => (self.commit(), Task::none()),
        }
    }

    /// Starts one decode task per accepted file. Anything else is skipped.
    pub fn ingest(&mut self, files: Vec<PathBuf>) -> Task<Message> {
        let session = self.session;
        let tasks: Vec<Task<Message>> = accepted_files(files)
            .into_iter()
            .map(|(path, mime)| {
                self.decoding += 1;
                let origin = path.clone();
                Task::perform(decode_upload(path, mime), move |result| Message::Decoded {
                    session,
                    path: origin,
                    result,
                })
            })
            .collect();

        Task::batch(tasks)
    }

    fn finish_decode(
        &mut self,
        path: PathBuf,
        result: Result<DecodedImage, Error>,
        i18n: &I18n,
    ) -> Effect {
        self.decoding = self.decoding.saturating_sub(1);
        match result {
            Ok(decoded) => {
                tracing::debug!(path = %path.display(), "image ready for preview");
                self.pending.push(PendingUpload::from_decoded(decoded, i18n));
                Effect::None
            }
            Err(error) => {
                tracing::warn!(path = %path.display(), "could not read upload: {}", error);
                let key = match &error {
                    Error::Decode(decode) => decode.i18n_key(),
                    _ => "notification-upload-unreadable",
                };
                Effect::Notify(
                    Notification::warning(key).with_arg("filename", display_name(&path)),
                )
            }
        }
    }

    /// Drops one entry; out of range is a no-op.
    pub fn remove(&mut self, index: usize) {
        if index < self.pending.len() {
            self.pending.remove(index);
        }
    }

    pub fn update_caption(&mut self, index: usize, caption: String) {
        if let Some(entry) = self.pending.get_mut(index) {
            entry.caption = caption;
        }
    }

    /// Hands the working set over as one batch and clears it.
    pub fn commit(&mut self) -> Effect {
        if self.pending.is_empty() {
            return Effect::None;
        }
        let batch: Vec<Slide> = self
            .pending
            .drain(..)
            .map(PendingUpload::into_slide)
            .collect();
        tracing::info!(count = batch.len(), "committing uploaded images");
        Effect::Commit(batch)
    }
}

/// Keeps the files whose declared type is an accepted image, paired with that type.
pub fn accepted_files(files: Vec<PathBuf>) -> Vec<(PathBuf, &'static str)> {
    files
        .into_iter()
        .filter_map(|path| match declared_mime(&path) {
            Some(mime) if is_accepted(mime) => Some((path, mime)),
            other => {
                tracing::debug!(
                    path = %path.display(),
                    mime = other.unwrap_or("unknown"),
                    "skipping file that is not a supported image"
                );
                None
            }
        })
        .collect()
}

fn open_picker(i18n: &I18n) -> Task<Message> {
    let title = i18n.tr("uploader-dialog-title");
    let filter = i18n.tr("uploader-filter-images");
    Task::perform(
        async move {
            rfd::AsyncFileDialog::new()
                .set_title(title)
                .add_filter(filter, UPLOAD_EXTENSIONS)
                .pick_files()
                .await
                .map(|handles| {
                    handles
                        .into_iter()
                        .map(|h| h.path().to_path_buf())
                        .collect()
                })
        },
        Message::FilesPicked,
    )
}
