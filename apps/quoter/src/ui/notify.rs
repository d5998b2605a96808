//! # Notification Emitter
//!
//! Fire-and-forget toasts.
//!
//! ```text
//! notify("Added to cart")
//!      │
//!      ├──► toasts.push(Toast { id: 7, .. })
//!      ├──► UiEvent::Toast
//!      └──► spawn: sleep(duration) ──► toasts.retain(id != 7)
//!                                 └──► UiEvent::ToastExpired { id: 7 }
//! ```
//!
//! Several toasts may be visible at once; each expires on its own timer.

use serde::Serialize;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tracing::debug;

use super::events::{EventBus, UiEvent};

/// A transient message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Toast {
    pub id: u64,
    pub message: String,
    pub duration_ms: u64,
}

#[derive(Debug)]
struct Inner {
    toasts: Mutex<Vec<Toast>>,
    next_id: AtomicU64,
    default_duration: Duration,
    events: EventBus,
}

/// Shows toasts and removes them when their time is up. Cheap to clone.
#[derive(Debug, Clone)]
pub struct Notifier {
    inner: Arc<Inner>,
}

impl Notifier {
    pub fn new(default_duration: Duration, events: EventBus) -> Self {
        Notifier {
            inner: Arc::new(Inner {
                toasts: Mutex::new(Vec::new()),
                next_id: AtomicU64::new(1),
                default_duration,
                events,
            }),
        }
    }

    /// Shows `message` for the default duration. Returns the toast id.
    pub fn notify(&self, message: impl Into<String>) -> u64 {
        self.notify_for(message, self.inner.default_duration)
    }

    /// Shows `message` for `duration`. Must be called within a tokio runtime.
    pub fn notify_for(&self, message: impl Into<String>, duration: Duration) -> u64 {
        let toast = Toast {
            id: self.inner.next_id.fetch_add(1, Ordering::Relaxed),
            message: message.into(),
            duration_ms: duration.as_millis() as u64,
        };
        let id = toast.id;

        debug!(id, message = %toast.message, "Toast shown");
        self.lock().push(toast.clone());
        self.inner.events.emit(UiEvent::Toast(toast));

        let inner = Arc::clone(&self.inner);
        tokio::spawn(async move {
            tokio::time::sleep(duration).await;
            inner
                .toasts
                .lock()
                .unwrap_or_else(|p| p.into_inner())
                .retain(|t| t.id != id);
            inner.events.emit(UiEvent::ToastExpired { id });
        });

        id
    }

    /// Toasts currently visible, oldest first.
    pub fn active(&self) -> Vec<Toast> {
        self.lock().clone()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<Toast>> {
        self.inner.toasts.lock().unwrap_or_else(|p| p.into_inner())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn notifier() -> Notifier {
        Notifier::new(Duration::from_millis(2500), EventBus::new())
    }

    #[tokio::test(start_paused = true)]
    async fn test_toast_expires_after_duration() {
        let notifier = notifier();
        notifier.notify("Added to cart");

        assert_eq!(notifier.active().len(), 1);
        assert_eq!(notifier.active()[0].message, "Added to cart");

        tokio::time::sleep(Duration::from_millis(2499)).await;
        assert_eq!(notifier.active().len(), 1);

        tokio::time::sleep(Duration::from_millis(2)).await;
        assert!(notifier.active().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_toasts_expire_independently() {
        let notifier = notifier();
        let short = notifier.notify_for("Removed", Duration::from_millis(100));
        let long = notifier.notify("Added to cart");
        assert_ne!(short, long);

        tokio::time::sleep(Duration::from_millis(150)).await;
        let active = notifier.active();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].id, long);
    }

    #[tokio::test(start_paused = true)]
    async fn test_events_emitted() {
        let events = EventBus::new();
        let mut rx = events.subscribe();
        let notifier = Notifier::new(Duration::from_millis(10), events);

        let id = notifier.notify("Removed");

        match rx.recv().await.unwrap() {
            UiEvent::Toast(toast) => assert_eq!(toast.id, id),
            other => panic!("unexpected event: {:?}", other),
        }
        assert_eq!(rx.recv().await.unwrap(), UiEvent::ToastExpired { id });
    }
}
