//! Domain layer - Core business logic
//!
//! Contains value objects and domain errors.
//! This layer has no dependencies on external systems.

pub mod config;
pub mod error;
pub mod notification;

// Re-export common types
pub use config::{AppConfig, NotifierBackend, ServiceConfig};
pub use error::*;
pub use notification::{NotificationIcon, NotificationRequest, Severity};
