//! Notifier backend selection

use std::fmt;
use std::str::FromStr;

use crate::domain::error::InvalidBackendError;

/// All available notifier backends
pub const ALL_BACKENDS: &[NotifierBackend] =
    &[NotifierBackend::NotifyRust, NotifierBackend::NotifySend];

/// Which adapter renders notifications
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum NotifierBackend {
    /// In-process, cross-platform (notify-rust)
    #[default]
    NotifyRust,
    /// `notify-send` binary from libnotify
    NotifySend,
}

impl NotifierBackend {
    /// Get the string identifier for this backend
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::NotifyRust => "notify-rust",
            Self::NotifySend => "notify-send",
        }
    }
}

impl FromStr for NotifierBackend {
    type Err = InvalidBackendError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "notify-rust" | "native" => Ok(Self::NotifyRust),
            "notify-send" => Ok(Self::NotifySend),
            _ => Err(InvalidBackendError {
                input: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for NotifierBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
