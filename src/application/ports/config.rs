//! Configuration port interface

use async_trait::async_trait;
use std::path::PathBuf;

use crate::domain::config::AppConfig;
use crate::domain::error::ConfigError;

/// Persistent config layer, sitting between the built-in defaults and the
/// environment/CLI layer
#[async_trait]
pub trait ConfigStore: Send + Sync {
    /// Load the stored layer. A missing file yields an all-`None` config so
    /// it merges as a no-op.
    async fn load(&self) -> Result<AppConfig, ConfigError>;

    /// Persist `config`, as written by `config set`
    async fn save(&self, config: &AppConfig) -> Result<(), ConfigError>;

    /// Location shown by `config path`
    fn path(&self) -> PathBuf;

    /// Whether the store has been created
    fn exists(&self) -> bool;

    /// Write the service defaults (`config init`).
    /// Fails with `ConfigError::AlreadyExists` if the file is present.
    async fn init(&self) -> Result<(), ConfigError>;
}
