//! notify-send notification adapter

use std::process::Stdio;

use async_trait::async_trait;
use tokio::process::Command;

use crate::application::ports::{NotificationError, Notifier};
use crate::domain::config::DEFAULT_APP_NAME;
use crate::domain::notification::{NotificationIcon, Severity};

use super::icon_file::{IconFile, ICON_RETENTION};

/// notify-send notification adapter
pub struct NotifySendNotifier {
    /// Application name for notifications
    app_name: String,
}

impl NotifySendNotifier {
    /// Create a new notify-send notifier
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

    /// Build the argument list for one invocation
    fn args(
        &self,
        severity: Severity,
        title: &str,
        message: &str,
        icon: Option<&str>,
    ) -> Vec<String> {
        let mut args = vec![
            "--app-name".to_string(),
            self.app_name.clone(),
            "--urgency".to_string(),
            urgency(severity).to_string(),
        ];

        if severity == Severity::Alert {
            args.push("--expire-time".to_string());
            args.push("0".to_string());
        }

        if let Some(icon) = icon {
            args.push("--icon".to_string());
            args.push(icon.to_string());
        }

        // Titles starting with '-' must not be read as options
        args.push("--".to_string());
        args.push(title.to_string());
        args.push(message.to_string());
        args
    }

    async fn show(
        &self,
        severity: Severity,
        title: &str,
        message: &str,
        icon: Option<&NotificationIcon>,
    ) -> Result<(), NotificationError> {
        let icon_file = match icon {
            Some(NotificationIcon::Bytes(bytes)) => Some(IconFile::write(bytes)?),
            _ => None,
        };
        let icon_arg = match (icon, &icon_file) {
            (_, Some(file)) => Some(file.path_str()),
            (Some(NotificationIcon::Named(name)), None) => Some(name.clone()),
            _ => None,
        };

        let status = Command::new("notify-send")
            .args(self.args(severity, title, message, icon_arg.as_deref()))
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .await
            .map_err(|e| {
                if e.kind() == std::io::ErrorKind::NotFound {
                    NotificationError::NotifySendNotFound
                } else {
                    NotificationError::SendFailed(e.to_string())
                }
            })?;

        if !status.success() {
            return Err(NotificationError::SendFailed(format!(
                "notify-send exited with status: {}",
                status
            )));
        }

        if let Some(file) = icon_file {
            file.retain_for(ICON_RETENTION);
        }

        Ok(())
    }
}

impl Default for NotifySendNotifier {
    fn default() -> Self {
        Self::new()
    }
}

const fn urgency(severity: Severity) -> &'static str {
    match severity {
        Severity::Notify => "normal",
        Severity::Alert => "critical",
    }
}

#[async_trait]
impl Notifier for NotifySendNotifier {
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
