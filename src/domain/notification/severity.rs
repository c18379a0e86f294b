//! Notification severity value object

use std::fmt;

/// How strongly a notification should demand attention.
///
/// Both severities share the same request and response contracts; they only
/// differ in which notifier operation is invoked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Severity {
    /// Informational popup
    #[default]
    Notify,
    /// Attention-demanding alert (critical urgency, sticky)
    Alert,
}

impl Severity {
    /// Noun used in user-facing messages
    pub const fn noun(&self) -> &'static str {
        match self {
            Self::Notify => "notification",
            Self::Alert => "alert",
        }
    }

    /// Message returned to callers when delivery succeeded
    pub const fn success_message(&self) -> &'static str {
        match self {
            Self::Notify => "Notification sent successfully",
            Self::Alert => "Alert sent successfully",
        }
    }

    /// HTTP route that accepts this severity
    pub const fn route(&self) -> &'static str {
        match self {
            Self::Notify => "/notification",
            Self::Alert => "/alert",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.noun())
    }
}
