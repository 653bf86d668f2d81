//! Per-key request sequencing so the last request sent wins

use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};

/// Ticket identifying one issued request for a key
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Ticket(u64);

impl Ticket {
    pub fn value(self) -> u64 {
        self.0
    }
}

/// Hands out monotonically increasing tickets per key.
///
/// A response is applied only while its ticket is still the latest issued for
/// its key; anything older has been superseded by a newer request or by an
/// explicit invalidation.
#[derive(Debug, Default)]
pub struct KeyedSequencer {
    latest: Mutex<HashMap<String, u64>>,
}

impl KeyedSequencer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn issue(&self, key: &str) -> Ticket {
        let mut latest = self.latest.lock().unwrap_or_else(PoisonError::into_inner);
        let next = latest.get(key).copied().unwrap_or(0) + 1;
        latest.insert(key.to_string(), next);
        Ticket(next)
    }

    pub fn is_current(&self, key: &str, ticket: Ticket) -> bool {
        let latest = self.latest.lock().unwrap_or_else(PoisonError::into_inner);
        latest.get(key).copied() == Some(ticket.0)
    }

    /// Supersedes every outstanding ticket for a key
    pub fn invalidate(&self, key: &str) {
        let mut latest = self.latest.lock().unwrap_or_else(PoisonError::into_inner);
        *latest.entry(key.to_string()).or_insert(0) += 1;
    }

    pub fn invalidate_all(&self) {
        let mut latest = self.latest.lock().unwrap_or_else(PoisonError::into_inner);
        for counter in latest.values_mut() {
            *counter += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latest_ticket_is_current() {
        let sequencer = KeyedSequencer::new();
        let first = sequencer.issue("email");
        let second = sequencer.issue("email");

        assert!(second > first);
        assert!(!sequencer.is_current("email", first));
        assert!(sequencer.is_current("email", second));
    }

    #[test]
    fn test_keys_are_independent() {
        let sequencer = KeyedSequencer::new();
        let email = sequencer.issue("email");
        let _username = sequencer.issue("username");

        assert!(sequencer.is_current("email", email));
    }

    #[test]
    fn test_invalidate() {
        let sequencer = KeyedSequencer::new();
        let ticket = sequencer.issue("item-4");
        sequencer.invalidate("item-4");
        assert!(!sequencer.is_current("item-4", ticket));

        let next = sequencer.issue("item-4");
        assert!(sequencer.is_current("item-4", next));
    }

    #[test]
    fn test_invalidate_all() {
        let sequencer = KeyedSequencer::new();
        let a = sequencer.issue("email");
        let b = sequencer.issue("password");
        sequencer.invalidate_all();

        assert!(!sequencer.is_current("email", a));
        assert!(!sequencer.is_current("password", b));
    }

    #[test]
    fn test_unknown_key_is_never_current() {
        let sequencer = KeyedSequencer::new();
        assert!(!sequencer.is_current("nothing", Ticket(1)));
    }
}
