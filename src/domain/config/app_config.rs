//! Application configuration value object

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::domain::error::ConfigError;

use super::backend::NotifierBackend;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_APP_NAME: &str = "Pushover Desktop Notification Service";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 60;

/// Application configuration.
/// All fields are optional to support partial configs and merging.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    pub host: Option<String>,
    pub port: Option<u16>,
    pub app_name: Option<String>,
    pub backend: Option<String>,
    pub request_timeout_secs: Option<u64>,
    pub icon_passthrough: Option<bool>,
}

impl AppConfig {
    /// Create config with default values
    pub fn defaults() -> Self {
        Self {
            host: Some(DEFAULT_HOST.to_string()),
            port: Some(DEFAULT_PORT),
            app_name: Some(DEFAULT_APP_NAME.to_string()),
            backend: Some(NotifierBackend::default().to_string()),
            request_timeout_secs: Some(DEFAULT_REQUEST_TIMEOUT_SECS),
            icon_passthrough: Some(false),
        }
    }

    /// Create an empty config (all None)
    pub fn empty() -> Self {
        Self::default()
    }

    /// Merge this config with another, where other takes precedence.
    /// Only non-None values from other will override this.
    pub fn merge(self, other: Self) -> Self {
        Self {
            host: other.host.or(self.host),
            port: other.port.or(self.port),
            app_name: other.app_name.or(self.app_name),
            backend: other.backend.or(self.backend),
            request_timeout_secs: other.request_timeout_secs.or(self.request_timeout_secs),
            icon_passthrough: other.icon_passthrough.or(self.icon_passthrough),
        }
    }

    /// Get host, or "0.0.0.0" if not set
    pub fn host_or_default(&self) -> &str {
        self.host.as_deref().unwrap_or(DEFAULT_HOST)
    }

    /// Get port, or 3000 if not set
    pub fn port_or_default(&self) -> u16 {
        self.port.unwrap_or(DEFAULT_PORT)
    }

    /// Get app name, or the service default if not set or blank
    pub fn app_name_or_default(&self) -> &str {
        self.app_name
            .as_deref()
            .filter(|name| !name.trim().is_empty())
            .unwrap_or(DEFAULT_APP_NAME)
    }

    /// Get icon pass-through setting, or false if not set
    pub fn icon_passthrough_or_default(&self) -> bool {
        self.icon_passthrough.unwrap_or(false)
    }

    /// Validate and freeze into the runtime configuration
    pub fn resolve(&self) -> Result<ServiceConfig, ConfigError> {
        let port = self.port_or_default();
        if port == 0 {
            return Err(ConfigError::ValidationError {
                key: "port".to_string(),
                message: "Port must be between 1 and 65535".to_string(),
            });
        }

        let backend = match self.backend.as_deref() {
            Some(s) => s
                .parse::<NotifierBackend>()
                .map_err(|e| ConfigError::ValidationError {
                    key: "backend".to_string(),
                    message: e.to_string(),
                })?,
            None => NotifierBackend::default(),
        };

        let timeout_secs = self
            .request_timeout_secs
            .unwrap_or(DEFAULT_REQUEST_TIMEOUT_SECS);
        if timeout_secs == 0 {
            return Err(ConfigError::ValidationError {
                key: "request_timeout_secs".to_string(),
                message: "Timeout must be at least 1 second".to_string(),
            });
        }

        Ok(ServiceConfig {
            host: self.host_or_default().to_string(),
            port,
            app_name: self.app_name_or_default().to_string(),
            backend,
            request_timeout: Duration::from_secs(timeout_secs),
            icon_passthrough: self.icon_passthrough_or_default(),
        })
    }
}

/// Resolved, immutable runtime configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceConfig {
    pub host: String,
    pub port: u16,
    pub app_name: String,
    pub backend: NotifierBackend,
    pub request_timeout: Duration,
    pub icon_passthrough: bool,
}

impl ServiceConfig {
    /// Address to bind, as `host:port`
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            app_name: DEFAULT_APP_NAME.to_string(),
            backend: NotifierBackend::default(),
            request_timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
            icon_passthrough: false,
        }
    }
}
