// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Config(String),
    Manifest(String),
    Decode(DecodeError),
    /// The declared MIME type is outside the accepted image set.
    UnsupportedType(String),
}

/// Specific reasons an uploaded file could not be turned into a preview.
/// Used to pick a user-friendly, localized notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// The file could not be read (missing, permission denied, ...)
    Unreadable(String),

    /// The file is zero bytes long
    Empty,

    /// The bytes do not form a valid image of the declared type
    Corrupted(String),
}

impl DecodeError {
    /// Returns the i18n message key for this error type.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            DecodeError::Unreadable(_) => "notification-upload-unreadable",
            DecodeError::Empty => "notification-upload-empty",
            DecodeError::Corrupted(_) => "notification-upload-corrupted",
        }
    }
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecodeError::Unreadable(msg) => write!(f, "Unreadable file: {}", msg),
            DecodeError::Empty => write!(f, "File is empty"),
            DecodeError::Corrupted(msg) => write!(f, "Corrupted image: {}", msg),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Manifest(e) => write!(f, "Manifest Error: {}", e),
            Error::Decode(e) => write!(f, "Decode Error: {}", e),
            Error::UnsupportedType(mime) => write!(f, "Unsupported type: {}", mime),
        }
    }
}

impl std::error::Error for Error {}

impl From<DecodeError> for Error {
    fn from(err: DecodeError) -> Self {
        Error::Decode(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
