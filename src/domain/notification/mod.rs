//! Transient user-facing notifications

use std::time::Duration;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Default time a notification stays on screen
pub const DEFAULT_NOTIFICATION_TTL: Duration = Duration::from_secs(5);

/// Alert style of a notification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Success,
    Danger,
}

impl NotificationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Danger => "danger",
        }
    }
}

impl std::fmt::Display for NotificationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A dismissible message shown above the page content
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub id: Uuid,
    pub kind: NotificationKind,
    pub message: String,
    /// How long the notification stays before it is dismissed automatically
    pub ttl: Duration,
}

impl Notification {
    pub fn new(kind: NotificationKind, message: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            kind,
            message: message.into(),
            ttl: DEFAULT_NOTIFICATION_TTL,
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(NotificationKind::Success, message)
    }

    pub fn danger(message: impl Into<String>) -> Self {
        Self::new(NotificationKind::Danger, message)
    }

    pub fn with_ttl(mut self, ttl: Duration) -> Self {
        self.ttl = ttl;
        self
    }
}

/// Destination for notifications raised by the page controllers
pub trait NotificationSink: Send + Sync {
    fn notify(&self, notification: Notification);
}
