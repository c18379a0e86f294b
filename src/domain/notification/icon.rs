//! Notification icon value object

use base64::Engine;

/// Icon reference handed to a notifier
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NotificationIcon {
    /// Raw image bytes decoded from a base64 payload
    Bytes(Vec<u8>),
    /// Icon name or file path understood by the notification daemon
    Named(String),
}

/// Decode a base64 icon payload.
///
/// Line breaks are ignored, so output wrapped at 76 columns (as produced by
/// `base64 icon.png`) decodes. Returns `None` for empty input and for
/// anything else that is not valid standard base64. A bad icon is never an
/// error.
pub fn decode_icon(text: &str) -> Option<Vec<u8>> {
    let compact: Vec<u8> = text
        .bytes()
        .filter(|b| !matches!(b, b'\r' | b'\n'))
        .collect();
    if compact.is_empty() {
        return None;
    }

    match base64::engine::general_purpose::STANDARD.decode(&compact) {
        Ok(bytes) => Some(bytes),
        Err(e) => {
            tracing::debug!(error = %e, "icon is not valid base64, dropping it");
            None
        }
    }
}
