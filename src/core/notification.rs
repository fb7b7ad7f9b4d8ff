//! # Notifications
//!
//! Short-lived alerts shown in the top-right corner. Each one disappears on
//! its own after the configured lifetime; there is nothing to acknowledge.

use std::time::{Duration, Instant};

/// Default lifetime of a notification.
pub const DEFAULT_NOTIFICATION_TTL: Duration = Duration::from_secs(5);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Info,
    Warning,
    Danger,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub level: Level,
    pub message: String,
    pub created_at: Instant,
}

impl Notification {
    pub fn new(level: Level, message: impl Into<String>, created_at: Instant) -> Self {
        Self {
            level,
            message: message.into(),
            created_at,
        }
    }

    pub fn is_expired(&self, now: Instant, ttl: Duration) -> bool {
        now.saturating_duration_since(self.created_at) >= ttl
    }
}
