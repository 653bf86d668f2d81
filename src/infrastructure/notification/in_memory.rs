//! In-memory notification sink with auto-dismiss

use std::sync::{Arc, Mutex, PoisonError};

use tracing::{info, warn};
use uuid::Uuid;

use crate::domain::notification::{Notification, NotificationKind, NotificationSink};

/// Most recent notifications kept in the history
pub const HISTORY_LIMIT: usize = 100;

#[derive(Debug, Default)]
struct SinkState {
    active: Vec<Notification>,
    history: Vec<Notification>,
}

/// Keeps the notifications currently on screen plus the last
/// `HISTORY_LIMIT` ever shown.
///
/// Each notification is dismissed after its TTL when raised inside a tokio
/// runtime; outside a runtime it stays until dismissed explicitly.
#[derive(Debug, Clone, Default)]
pub struct InMemoryNotificationSink {
    state: Arc<Mutex<SinkState>>,
}

impl InMemoryNotificationSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Notifications still on screen, oldest first
    pub fn active(&self) -> Vec<Notification> {
        self.lock().active.clone()
    }

    /// Most recent notifications raised, oldest first
    pub fn history(&self) -> Vec<Notification> {
        self.lock().history.clone()
    }

    pub fn last(&self) -> Option<Notification> {
        self.lock().history.last().cloned()
    }

    /// Removes a notification from the screen; returns whether it was shown
    pub fn dismiss(&self, id: Uuid) -> bool {
        let mut state = self.lock();
        let before = state.active.len();
        state.active.retain(|n| n.id != id);
        state.active.len() != before
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, SinkState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl NotificationSink for InMemoryNotificationSink {
    fn notify(&self, notification: Notification) {
        match notification.kind {
            NotificationKind::Success => info!(message = %notification.message, "Notification"),
            NotificationKind::Danger => warn!(message = %notification.message, "Notification"),
        }

        let id = notification.id;
        let ttl = notification.ttl;
        {
            let mut state = self.lock();
            state.active.push(notification.clone());
            state.history.push(notification);
            if state.history.len() > HISTORY_LIMIT {
                let overflow = state.history.len() - HISTORY_LIMIT;
                state.history.drain(..overflow);
            }
        }

        if let Ok(handle) = tokio::runtime::Handle::try_current() {
            let sink = self.clone();
            handle.spawn(async move {
                tokio::time::sleep(ttl).await;
                sink.dismiss(id);
            });
        }
    }
}
