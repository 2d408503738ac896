// SPDX-License-Identifier: MPL-2.0
//! `data:<mime>;base64,<payload>` URLs.

use crate::error::{Error, Result};
use base64::engine::general_purpose::STANDARD;
use base64::Engine;

const PREFIX: &str = "data:";
const BASE64_MARKER: &str = ";base64,";

/// A parsed data URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataUrl {
    pub mime: String,
    pub bytes: Vec<u8>,
}

/// Encodes `bytes` as a base64 data URL tagged with `mime`.
pub fn encode_data_url(mime: &str, bytes: &[u8]) -> String {
    let payload = STANDARD.encode(bytes);
    let mut url =
        String::with_capacity(PREFIX.len() + mime.len() + BASE64_MARKER.len() + payload.len());
    url.push_str(PREFIX);
    url.push_str(mime);
    url.push_str(BASE64_MARKER);
    url.push_str(&payload);
    url
}

/// Returns true if `src` looks like a data URL.
pub fn is_data_url(src: &str) -> bool {
    src.starts_with(PREFIX)
}

/// Parses a base64 data URL back into its MIME type and bytes.
pub fn parse_data_url(src: &str) -> Result<DataUrl> {
    let rest = src
        .strip_prefix(PREFIX)
        .ok_or_else(|| Error::Manifest("not a data URL".into()))?;
    let (mime, payload) = rest
        .split_once(BASE64_MARKER)
        .ok_or_else(|| Error::Manifest("data URL is not base64 encoded".into()))?;
    let bytes = STANDARD
        .decode(payload)
        .map_err(|e| Error::Manifest(format!("invalid base64 payload: {e}")))?;

    Ok(DataUrl {
        mime: mime.to_string(),
        bytes,
    })
}
