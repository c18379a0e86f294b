//! Main app runner for server mode

use std::path::Path;
use std::process::ExitCode;

use tracing_subscriber::EnvFilter;

use crate::application::ports::ConfigStore;
use crate::domain::config::AppConfig;
use crate::domain::error::ConfigError;
use crate::http;
use crate::infrastructure::{create_notifier, XdgConfigStore};

use super::args::ServeArgs;
use super::presenter::Presenter;
use super::signals::shutdown_signal;

/// Exit codes
pub const EXIT_SUCCESS: u8 = 0;
pub const EXIT_ERROR: u8 = 1;
pub const EXIT_USAGE_ERROR: u8 = 2;

/// Install the global tracing subscriber (`RUST_LOG`, default `info`)
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    // Already installed when embedded in tests
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Config store at `path`, or the XDG default
pub fn config_store(path: Option<&Path>) -> XdgConfigStore {
    match path {
        Some(path) => XdgConfigStore::with_path(path),
        None => XdgConfigStore::new(),
    }
}

/// Load and merge configuration from file, env, and CLI
pub async fn load_merged_config<S: ConfigStore>(
    store: &S,
    cli_config: AppConfig,
) -> Result<AppConfig, ConfigError> {
    let file_config = store.load().await?;

    // Merge: defaults < file < env/cli (clap resolves env vs flag)
    Ok(AppConfig::defaults().merge(file_config).merge(cli_config))
}

/// Run the HTTP server until SIGINT/SIGTERM
pub async fn run_server(args: ServeArgs) -> ExitCode {
    let presenter = Presenter::new();
    let store = config_store(args.config.as_deref());

    let merged = match load_merged_config(&store, args.to_config()).await {
        Ok(config) => config,
        Err(e) => {
            presenter.error(&e.to_string());
            return ExitCode::from(EXIT_ERROR);
        }
    };

    let config = match merged.resolve() {
        Ok(config) => config,
        Err(e) => {
            presenter.error(&e.to_string());
            return ExitCode::from(EXIT_USAGE_ERROR);
        }
    };

    tracing::debug!(?config, path = %store.path().display(), "configuration loaded");

    let notifier = create_notifier(config.backend, &config.app_name);

    presenter.server_starting(&config);
    presenter.info(&format!("Routes:\n{}", presenter.format_routes()));

    match http::serve(&config, notifier, shutdown_signal()).await {
        Ok(()) => {
            presenter.success("Server stopped");
            ExitCode::from(EXIT_SUCCESS)
        }
        Err(e) => {
            presenter.error(&e.to_string());
            ExitCode::from(EXIT_ERROR)
        }
    }
}
