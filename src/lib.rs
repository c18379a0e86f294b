//! Pushover Desktop - desktop notifications over HTTP
//!
//! Accepts JSON requests on a small HTTP API and turns them into OS-level
//! notifications (informational popups) or alerts (critical, sticky).
//!
//! # Architecture
//!
//! The crate follows hexagonal (ports & adapters) architecture:
//!
//! - **Domain**: Request validation, icon decoding, severities, config, errors
//! - **Application**: The dispatch use case and port interfaces (traits)
//! - **Infrastructure**: Adapter implementations (notify-rust, notify-send, XDG config)
//! - **HTTP**: Routes, JSON responses, and the middleware stack
//! - **CLI**: Command-line interface, argument parsing, and signal handling

pub mod application;
pub mod cli;
pub mod domain;
pub mod http;
pub mod infrastructure;
