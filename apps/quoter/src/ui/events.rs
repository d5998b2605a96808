//! # UI Events
//!
//! What the presentation layer re-renders from.
//!
//! ```text
//! CartState ──► CartChanged, OpenCart ─┐
//! Notifier ───► Toast, ToastExpired ───┼──► broadcast ──► subscribers
//! Confirm ────► ConfirmOpened/Closed ──┘
//! ```
//!
//! Emitting with no subscriber is fine: events are hints to redraw, the
//! state itself is always queryable.

use serde::Serialize;
use tokio::sync::broadcast;
use tracing::trace;

use super::confirm::ConfirmRequest;
use super::notify::Toast;

/// Buffered events per subscriber before the slowest one starts lagging.
const EVENT_CAPACITY: usize = 64;

/// A state change worth redrawing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum UiEvent {
    /// Cart contents changed. Carries the fresh count and total.
    #[serde(rename_all = "camelCase")]
    CartChanged { item_count: usize, total: i64 },

    /// Slide the cart drawer open.
    OpenCart,

    /// A toast appeared.
    Toast(Toast),

    /// A toast's time is up.
    ToastExpired { id: u64 },

    /// The confirmation surface is showing this prompt.
    ConfirmOpened(ConfirmRequest),

    /// The confirmation surface was hidden.
    ConfirmClosed,
}

/// Fan-out of [`UiEvent`]s. Cheap to clone.
#[derive(Debug, Clone)]
pub struct EventBus {
    tx: broadcast::Sender<UiEvent>,
}

impl EventBus {
    pub fn new() -> Self {
        let (tx, _) = broadcast::channel(EVENT_CAPACITY);
        EventBus { tx }
    }

    pub fn emit(&self, event: UiEvent) {
        if self.tx.send(event).is_err() {
            trace!("No UI subscribers");
        }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<UiEvent> {
        self.tx.subscribe()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_emit_without_subscribers() {
        let bus = EventBus::new();
        bus.emit(UiEvent::OpenCart);
    }

    #[tokio::test]
    async fn test_subscriber_receives_in_order() {
        let bus = EventBus::new();
        let mut rx = bus.subscribe();

        bus.emit(UiEvent::CartChanged {
            item_count: 1,
            total: 828,
        });
        bus.emit(UiEvent::OpenCart);

        assert_eq!(
            rx.recv().await.unwrap(),
            UiEvent::CartChanged {
                item_count: 1,
                total: 828
            }
        );
        assert_eq!(rx.recv().await.unwrap(), UiEvent::OpenCart);
    }

    #[test]
    fn test_event_json_shape() {
        let json = serde_json::to_value(UiEvent::CartChanged {
            item_count: 2,
            total: 1748,
        })
        .unwrap();
        assert_eq!(json["type"], "cartChanged");
        assert_eq!(json["itemCount"], 2);

        let json = serde_json::to_value(UiEvent::OpenCart).unwrap();
        assert_eq!(json["type"], "openCart");
    }
}
