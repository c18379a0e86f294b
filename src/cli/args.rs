//! CLI argument definitions using Clap

use std::path::PathBuf;

use clap::builder::BoolishValueParser;
use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::domain::config::{AppConfig, NotifierBackend};

/// Pushover Desktop - desktop notifications over HTTP
#[derive(Parser, Debug)]
#[command(name = "pushover-desktop")]
#[command(version)]
#[command(about = "Desktop notification and alert service with an HTTP/JSON interface")]
#[command(long_about = None)]
pub struct Cli {
    #[command(flatten)]
    pub serve: ServeArgs,

    /// Config subcommand
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Server options. Each one overrides the config file.
#[derive(Args, Debug, Clone, Default)]
pub struct ServeArgs {
    /// Address to listen on
    #[arg(long, env = "LISTEN_HOST", value_name = "ADDR")]
    pub host: Option<String>,

    /// Port to listen on
    #[arg(short = 'p', long, env = "PORT", value_name = "PORT")]
    pub port: Option<u16>,

    /// Application name shown on notifications and by the health check
    #[arg(long, env = "APP_NAME", value_name = "NAME")]
    pub app_name: Option<String>,

    /// Notification backend
    #[arg(long, env = "NOTIFY_BACKEND", value_name = "BACKEND")]
    pub backend: Option<BackendArg>,

    /// Per-request timeout in seconds
    #[arg(long = "request-timeout", env = "REQUEST_TIMEOUT_SECS", value_name = "SECS")]
    pub request_timeout: Option<u64>,

    /// Forward icons that are not base64 as icon names or paths
    #[arg(
        long,
        env = "ICON_PASSTHROUGH",
        value_name = "BOOL",
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true",
        value_parser = BoolishValueParser::new()
    )]
    pub icon_passthrough: Option<bool>,

    /// Config file path (defaults to the XDG config directory)
    #[arg(short = 'c', long, value_name = "FILE", global = true)]
    pub config: Option<PathBuf>,
}

impl ServeArgs {
    /// Config layer built from flags and environment
    pub fn to_config(&self) -> AppConfig {
        AppConfig {
            host: self.host.clone(),
            port: self.port,
            app_name: self.app_name.clone(),
            backend: self.backend.map(|b| NotifierBackend::from(b).to_string()),
            request_timeout_secs: self.request_timeout,
            icon_passthrough: self.icon_passthrough,
        }
    }
}

/// Subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Config action subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Create config file with defaults
    Init,
    /// Set a config value
    Set {
        /// Config key
        key: String,
        /// Config value
        value: String,
    },
    /// Get a config value
    Get {
        /// Config key
        key: String,
    },
    /// List all config values
    List,
    /// Show config file path
    Path,
}

/// Backend argument for clap ValueEnum
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum BackendArg {
    NotifyRust,
    NotifySend,
}

impl From<BackendArg> for NotifierBackend {
    fn from(arg: BackendArg) -> Self {
        match arg {
            BackendArg::NotifyRust => NotifierBackend::NotifyRust,
            BackendArg::NotifySend => NotifierBackend::NotifySend,
        }
    }
}

/// Valid config keys
pub const VALID_CONFIG_KEYS: &[&str] = &[
    "host",
    "port",
    "app_name",
    "backend",
    "request_timeout_secs",
    "icon_passthrough",
];

/// Check if a config key is valid
pub fn is_valid_config_key(key: &str) -> bool {
    VALID_CONFIG_KEYS.contains(&key)
}
