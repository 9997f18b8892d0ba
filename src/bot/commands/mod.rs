//! Discord command implementations for the notifier bot.

/// `!ping` health check
pub mod general;

/// `/noti` direct-message notifications
pub mod noti;

pub use general::*;
pub use noti::*;
