//! Notification port interface

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::notification::{NotificationIcon, Severity};

/// Notification errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NotificationError {
    #[error("notify-send not found")]
    NotifySendNotFound,

    #[error("{0}")]
    SendFailed(String),

    #[error("failed to prepare icon: {0}")]
    Icon(String),
}

/// Port for desktop notifications
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Show an informational desktop notification.
    ///
    /// # Arguments
    /// * `title` - The notification title
    /// * `message` - The notification body
    /// * `icon` - Optional icon bytes or icon name
    async fn notify(
        &self,
        title: &str,
        message: &str,
        icon: Option<&NotificationIcon>,
    ) -> Result<(), NotificationError>;

    /// Show an attention-demanding alert.
    ///
    /// Same arguments as [`Notifier::notify`].
    async fn alert(
        &self,
        title: &str,
        message: &str,
        icon: Option<&NotificationIcon>,
    ) -> Result<(), NotificationError>;

    /// Route to `notify` or `alert` by severity
    async fn send(
        &self,
        severity: Severity,
        title: &str,
        message: &str,
        icon: Option<&NotificationIcon>,
    ) -> Result<(), NotificationError> {
        match severity {
            Severity::Notify => self.notify(title, message, icon).await,
            Severity::Alert => self.alert(title, message, icon).await,
        }
    }
}

/// Blanket implementation for boxed notifier types
#[async_trait]
impl Notifier for Box<dyn Notifier> {
    async fn notify(
        &self,
        title: &str,
        message: &str,
        icon: Option<&NotificationIcon>,
    ) -> Result<(), NotificationError> {
        self.as_ref().notify(title, message, icon).await
    }

    async fn alert(
        &self,
        title: &str,
        message: &str,
        icon: Option<&NotificationIcon>,
    ) -> Result<(), NotificationError> {
        self.as_ref().alert(title, message, icon).await
    }
}
