//! Keyed debounce timers

use std::collections::HashMap;
use std::future::Future;
use std::sync::{Mutex, PoisonError};
use std::time::Duration;

use tokio::task::JoinHandle;

/// Delay applied to each kind of input before it reaches the backend
///
/// A zero delay sends on every keystroke.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DebouncePolicy {
    pub email: Duration,
    pub username: Duration,
    pub password: Duration,
    pub quantity: Duration,
}

impl Default for DebouncePolicy {
    fn default() -> Self {
        Self {
            email: Duration::from_millis(500),
            username: Duration::from_millis(500),
            password: Duration::ZERO,
            quantity: Duration::ZERO,
        }
    }
}

impl DebouncePolicy {
    /// Same delay for every input
    pub fn uniform(delay: Duration) -> Self {
        Self {
            email: delay,
            username: delay,
            password: delay,
            quantity: delay,
        }
    }
}

/// Runs at most one pending task per key after a quiet period.
///
/// Scheduling a key again cancels its pending timer. Once a timer fires the
/// task runs as a separate tokio task, so only the wait is cancelable and a
/// request that already started is never aborted.
#[derive(Debug, Default)]
pub struct Debouncer {
    pending: Mutex<HashMap<String, JoinHandle<()>>>,
}

impl Debouncer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn schedule<F>(&self, key: &str, delay: Duration, task: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let timer = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            tokio::spawn(task);
        });

        let mut pending = self.pending.lock().unwrap_or_else(PoisonError::into_inner);
        pending.retain(|_, timer| !timer.is_finished());
        if let Some(previous) = pending.insert(key.to_string(), timer) {
            previous.abort();
        }
    }

    #[cfg(test)]
    fn tracked(&self) -> usize {
        self.pending.lock().unwrap_or_else(PoisonError::into_inner).len()
    }

    /// Cancels the pending timer for a key; returns whether one was waiting
    pub fn cancel(&self, key: &str) -> bool {
        let mut pending = self.pending.lock().unwrap_or_else(PoisonError::into_inner);
        match pending.remove(key) {
            Some(timer) => {
                let waiting = !timer.is_finished();
                timer.abort();
                waiting
            }
            None => false,
        }
    }

    pub fn cancel_all(&self) {
        let mut pending = self.pending.lock().unwrap_or_else(PoisonError::into_inner);
        for (_, timer) in pending.drain() {
            timer.abort();
        }
    }

    /// Whether a timer for the key is still waiting to fire
    pub fn is_pending(&self, key: &str) -> bool {
        let pending = self.pending.lock().unwrap_or_else(PoisonError::into_inner);
        pending.get(key).is_some_and(|timer| !timer.is_finished())
    }
}

impl Drop for Debouncer {
    fn drop(&mut self) {
        self.cancel_all();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    const DELAY: Duration = Duration::from_millis(500);

    fn counting_task(
        counter: Arc<AtomicUsize>,
        value: usize,
        last: Arc<AtomicUsize>,
    ) -> impl Future<Output = ()> + Send + 'static {
        async move {
            counter.fetch_add(1, Ordering::SeqCst);
            last.store(value, Ordering::SeqCst);
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_bursts_collapse_to_last_task() {
        let debouncer = Debouncer::new();
        let runs = Arc::new(AtomicUsize::new(0));
        let last = Arc::new(AtomicUsize::new(0));

        for value in 1..=5 {
            debouncer.schedule("email", DELAY, counting_task(runs.clone(), value, last.clone()));
            tokio::time::sleep(Duration::from_millis(100)).await;
        }
        assert_eq!(runs.load(Ordering::SeqCst), 0);

        tokio::time::sleep(Duration::from_millis(600)).await;
        assert_eq!(runs.load(Ordering::SeqCst), 1);
        assert_eq!(last.load(Ordering::SeqCst), 5);
    }

    #[tokio::test(start_paused = true)]
    async fn test_keys_are_independent() {
        let debouncer = Debouncer::new();
        let runs = Arc::new(AtomicUsize::new(0));
        let last = Arc::new(AtomicUsize::new(0));

        debouncer.schedule("email", DELAY, counting_task(runs.clone(), 1, last.clone()));
        debouncer.schedule("username", DELAY, counting_task(runs.clone(), 2, last.clone()));

        tokio::time::sleep(Duration::from_secs(1)).await;
        assert_eq!(runs.load(Ordering::SeqCst), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_prevents_run() {
        let debouncer = Debouncer::new();
        let runs = Arc::new(AtomicUsize::new(0));
        let last = Arc::new(AtomicUsize::new(0));

        debouncer.schedule("email", DELAY, counting_task(runs.clone(), 1, last.clone()));
        assert!(debouncer.is_pending("email"));
        assert!(debouncer.cancel("email"));
        assert!(!debouncer.is_pending("email"));

        tokio::time::sleep(Duration::from_secs(1)).await;
        assert_eq!(runs.load(Ordering::SeqCst), 0);
        assert!(!debouncer.cancel("email"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_started_task_is_not_aborted_by_reschedule() {
        let debouncer = Debouncer::new();
        let finished = Arc::new(AtomicUsize::new(0));

        let done = finished.clone();
        debouncer.schedule("password", Duration::ZERO, async move {
            tokio::time::sleep(Duration::from_secs(2)).await;
            done.fetch_add(1, Ordering::SeqCst);
        });
        tokio::time::sleep(Duration::from_millis(10)).await;

        let done = finished.clone();
        debouncer.schedule("password", Duration::ZERO, async move {
            done.fetch_add(1, Ordering::SeqCst);
        });

        tokio::time::sleep(Duration::from_secs(3)).await;
        assert_eq!(finished.load(Ordering::SeqCst), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_fired_timers_are_released() {
        let debouncer = Debouncer::new();
        let runs = Arc::new(AtomicUsize::new(0));
        let last = Arc::new(AtomicUsize::new(0));

        for item in 0..20 {
            let key = format!("item:{}", item);
            debouncer.schedule(&key, Duration::ZERO, counting_task(runs.clone(), item, last.clone()));
            tokio::time::sleep(Duration::from_millis(10)).await;
        }

        assert_eq!(runs.load(Ordering::SeqCst), 20);
        assert!(debouncer.tracked() <= 1);
    }

    #[test]
    fn test_default_policy() {
        let policy = DebouncePolicy::default();
        assert_eq!(policy.email, Duration::from_millis(500));
        assert_eq!(policy.username, Duration::from_millis(500));
        assert!(policy.password.is_zero());
        assert!(policy.quantity.is_zero());
        assert_eq!(
            DebouncePolicy::uniform(Duration::from_millis(300)).password,
            Duration::from_millis(300)
        );
    }
}
