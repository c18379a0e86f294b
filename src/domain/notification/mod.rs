//! Notification domain module

mod icon;
mod request;
mod severity;

pub use icon::{decode_icon, NotificationIcon};
pub use request::NotificationRequest;
pub use severity::Severity;
