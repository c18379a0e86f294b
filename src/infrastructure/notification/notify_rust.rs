//! Cross-platform notification adapter using notify-rust
//!
//! Works on Windows, macOS, and Linux.

use async_trait::async_trait;

use crate::application::ports::{NotificationError, Notifier};
use crate::domain::config::DEFAULT_APP_NAME;
use crate::domain::notification::{NotificationIcon, Severity};

use super::icon_file::{IconFile, ICON_RETENTION};

/// Cross-platform notifier using notify-rust
pub struct NotifyRustNotifier {
    /// Application name for notifications
    app_name: String,
}

impl NotifyRustNotifier {
    /// Create a new notify-rust notifier
    pub fn new() -> Self {
        Self {
            app_name: DEFAULT_APP_NAME.to_string(),
        }
    }

    /// Create with custom app name
    pub fn with_app_name(app_name: impl Into<String>) -> Self {
        Self {
            app_name: app_name.into(),
        }
    }

    async fn show(
        &self,
        severity: Severity,
        title: &str,
        message: &str,
        icon: Option<&NotificationIcon>,
    ) -> Result<(), NotificationError> {
        let title = title.to_owned();
        let message = message.to_owned();
        let app_name = self.app_name.clone();
        let icon = icon.cloned();

        // notify-rust operations can block, so run in spawn_blocking
        let icon_file = tokio::task::spawn_blocking(move || {
            let icon_file = match &icon {
                Some(NotificationIcon::Bytes(bytes)) => Some(IconFile::write(bytes)?),
                _ => None,
            };

            let mut notification = notify_rust::Notification::new();
            notification.appname(&app_name).summary(&title).body(&message);

            match (&icon, &icon_file) {
                (_, Some(file)) => {
                    notification.icon(&file.path_str());
                }
                (Some(NotificationIcon::Named(name)), None) => {
                    notification.icon(name);
                }
                _ => {}
            }

            if severity == Severity::Alert {
                apply_alert_hints(&mut notification);
            }

            notification
                .show()
                .map_err(|e| NotificationError::SendFailed(e.to_string()))?;

            Ok::<_, NotificationError>(icon_file)
        })
        .await
        .map_err(|e| NotificationError::SendFailed(format!("Task join error: {}", e)))??;

        if let Some(file) = icon_file {
            file.retain_for(ICON_RETENTION);
        }

        Ok(())
    }
}

impl Default for NotifyRustNotifier {
    fn default() -> Self {
        Self::new()
    }
}

/// Critical urgency and no expiry, where the platform supports hints
#[cfg(all(unix, not(target_os = "macos")))]
fn apply_alert_hints(notification: &mut notify_rust::Notification) {
    notification
        .urgency(notify_rust::Urgency::Critical)
        .timeout(notify_rust::Timeout::Never);
}

#[cfg(not(all(unix, not(target_os = "macos"))))]
fn apply_alert_hints(_notification: &mut notify_rust::Notification) {}

#[async_trait]
impl Notifier for NotifyRustNotifier {
    async fn notify(
        &self,
        title: &str,
        message: &str,
        icon: Option<&NotificationIcon>,
    ) -> Result<(), NotificationError> {
        self.show(Severity::Notify, title, message, icon).await
    }

    async fn alert(
        &self,
        title: &str,
        message: &str,
        icon: Option<&NotificationIcon>,
    ) -> Result<(), NotificationError> {
        self.show(Severity::Alert, title, message, icon).await
    }
}
