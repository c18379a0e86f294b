//! Configuration domain module

mod app_config;
mod backend;

pub use app_config::{
    AppConfig, ServiceConfig, DEFAULT_APP_NAME, DEFAULT_HOST, DEFAULT_PORT,
    DEFAULT_REQUEST_TIMEOUT_SECS,
};
pub use backend::{NotifierBackend, ALL_BACKENDS};
