//! Temporary icon files
//!
//! Notification daemons take icons by name or path, so decoded icon bytes
//! are written to a temporary file. Daemons read that file lazily, when the
//! banner is rendered or reopened from history, so it has to outlive the
//! notify call.

use std::io::Write;
use std::path::Path;
use std::time::Duration;

use tempfile::NamedTempFile;

use crate::application::ports::NotificationError;

/// How long a delivered icon stays on disk
pub const ICON_RETENTION: Duration = Duration::from_secs(30 * 60);

/// Icon bytes written to a temporary file, removed on drop
pub struct IconFile {
    file: NamedTempFile,
}

impl IconFile {
    /// Write icon bytes to a new temporary file
    pub fn write(bytes: &[u8]) -> Result<Self, NotificationError> {
        let mut file = tempfile::Builder::new()
            .prefix("pushover-icon-")
            .suffix(image_extension(bytes))
            .tempfile()
            .map_err(|e| NotificationError::Icon(e.to_string()))?;

        file.write_all(bytes)
            .and_then(|()| file.flush())
            .map_err(|e| NotificationError::Icon(e.to_string()))?;

        Ok(Self { file })
    }

    /// Path of the icon file
    pub fn path(&self) -> &Path {
        self.file.path()
    }

    /// Path as a string, as notification APIs expect
    pub fn path_str(&self) -> String {
        self.path().to_string_lossy().into_owned()
    }

    /// Keep the file for `duration`, then remove it.
    ///
    /// Pending removals run at runtime shutdown. Outside a tokio runtime the
    /// file is removed immediately.
    pub fn retain_for(self, duration: Duration) {
        match tokio::runtime::Handle::try_current() {
            Ok(handle) => {
                handle.spawn(async move {
                    tokio::time::sleep(duration).await;
                    tracing::trace!(path = %self.path().display(), "removing icon file");
                    drop(self);
                });
            }
            Err(_) => drop(self),
        }
    }
}

/// Guess a file extension from image magic bytes
pub fn image_extension(bytes: &[u8]) -> &'static str {
    if bytes.starts_with(b"\x89PNG") {
        ".png"
    } else if bytes.starts_with(&[0xff, 0xd8, 0xff]) {
        ".jpg"
    } else if bytes.starts_with(b"GIF8") {
        ".gif"
    } else if bytes.starts_with(&[0x00, 0x00, 0x01, 0x00]) {
        ".ico"
    } else if bytes.starts_with(b"<svg") || bytes.starts_with(b"<?xml") {
        ".svg"
    } else {
        ".png"
    }
}
