//! Notification infrastructure module
//!
//! Provides cross-platform notification support using notify-rust (primary)
//! or the `notify-send` tool as an alternative.

mod icon_file;
mod notify_rust;
mod notify_send;

pub use icon_file::IconFile;
pub use self::notify_rust::NotifyRustNotifier;
pub use notify_send::NotifySendNotifier;

use crate::application::ports::Notifier;
use crate::domain::config::NotifierBackend;

/// Create the notifier for the configured backend
pub fn create_notifier(backend: NotifierBackend, app_name: &str) -> Box<dyn Notifier> {
    match backend {
        NotifierBackend::NotifyRust => Box::new(NotifyRustNotifier::with_app_name(app_name)),
        NotifierBackend::NotifySend => Box::new(NotifySendNotifier::with_app_name(app_name)),
    }
}
