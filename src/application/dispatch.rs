//! Dispatch notification use case

use thiserror::Error;

use crate::domain::error::RequestError;
use crate::domain::notification::{NotificationRequest, Severity};

use super::ports::{NotificationError, Notifier};

/// Errors from the dispatch use case
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DispatchError {
    /// The request was rejected before reaching the notifier
    #[error(transparent)]
    InvalidRequest(#[from] RequestError),

    /// The notifier reported a failure
    #[error("Failed to send {severity}: {source}")]
    Backend {
        severity: Severity,
        source: NotificationError,
    },
}

/// Options that shape how requests are dispatched
#[derive(Debug, Clone, Copy, Default)]
pub struct DispatchOptions {
    /// Forward icon text that is not base64 as an icon name or path
    pub icon_passthrough: bool,
}

/// Output from a successful dispatch
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DispatchOutput {
    /// Severity the request was delivered with
    pub severity: Severity,
    /// Whether an icon was handed to the notifier
    pub icon_attached: bool,
}

impl DispatchOutput {
    /// Message returned to the caller
    pub fn message(&self) -> &'static str {
        self.severity.success_message()
    }
}

/// Validates notification requests and hands them to a notifier
pub struct NotificationDispatcher<N>
where
    N: Notifier,
{
    notifier: N,
    options: DispatchOptions,
}

impl<N> NotificationDispatcher<N>
where
    N: Notifier,
{
    /// Create a new dispatcher
    pub fn new(notifier: N, options: DispatchOptions) -> Self {
        Self { notifier, options }
    }

    /// Parse a raw request body and dispatch it
    pub async fn dispatch_raw(
        &self,
        severity: Severity,
        body: &[u8],
    ) -> Result<DispatchOutput, DispatchError> {
        let request = NotificationRequest::parse(body).map_err(|e| {
            tracing::warn!(%severity, error = %e, "rejected notification request");
            e
        })?;

        self.dispatch(severity, &request).await
    }

    /// Dispatch an already validated request
    pub async fn dispatch(
        &self,
        severity: Severity,
        request: &NotificationRequest,
    ) -> Result<DispatchOutput, DispatchError> {
        let icon = request.icon(self.options.icon_passthrough);

        if icon.is_none() && request.icon_text().is_some() {
            tracing::debug!(%severity, "dropping icon that is not valid base64");
        }

        match self
            .notifier
            .send(severity, request.title(), request.message(), icon.as_ref())
            .await
        {
            Ok(()) => {
                tracing::info!(
                    %severity,
                    title = request.title(),
                    icon = icon.is_some(),
                    "delivered"
                );
                Ok(DispatchOutput {
                    severity,
                    icon_attached: icon.is_some(),
                })
            }
            Err(source) => {
                tracing::error!(%severity, error = %source, "notifier failed");
                Err(DispatchError::Backend { severity, source })
            }
        }
    }
}
