//! # Confirmation Gateway
//!
//! A single two-button modal surface that gates destructive actions.
//!
//! ## Protocol
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  command                      gateway                  presentation    │
//! │  ───────                      ───────                  ────────────    │
//! │  confirm(req).await ───────► current = req                             │
//! │       (suspended)             waiters.push(tx) ──────► ConfirmOpened   │
//! │                                                         user clicks    │
//! │                               resolve(Confirmed) ◄───── OK             │
//! │  ◄──────── Confirmed ──────── current = None                           │
//! │                               every tx.send(..) ─────► ConfirmClosed   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! There is one surface. A second `confirm` while one is open replaces the
//! prompt but does not cancel the first caller: the next click resolves
//! both. No timeout; a caller waits until the user answers.

use serde::{Deserialize, Serialize};
use std::sync::{Arc, Mutex};
use tokio::sync::oneshot;
use tracing::debug;

use super::events::{EventBus, UiEvent};

/// What the modal shows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ConfirmRequest {
    pub title: String,

    /// Trusted markup rendered as the modal body.
    pub body_markup: String,

    pub ok_label: String,
    pub cancel_label: String,
}

impl Default for ConfirmRequest {
    fn default() -> Self {
        ConfirmRequest {
            title: "Confirm".to_string(),
            body_markup: String::new(),
            ok_label: "Accept".to_string(),
            cancel_label: "Cancel".to_string(),
        }
    }
}

impl ConfirmRequest {
    /// A prompt with the given title and default labels.
    pub fn new(title: impl Into<String>) -> Self {
        ConfirmRequest {
            title: title.into(),
            ..Self::default()
        }
    }

    pub fn body(mut self, markup: impl Into<String>) -> Self {
        self.body_markup = markup.into();
        self
    }
}

/// Which button was clicked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Outcome {
    Confirmed,
    Cancelled,
}

impl Outcome {
    pub fn is_confirmed(self) -> bool {
        matches!(self, Outcome::Confirmed)
    }
}

#[derive(Debug, Default)]
struct Surface {
    current: Option<ConfirmRequest>,
    waiters: Vec<oneshot::Sender<Outcome>>,
}

/// The modal surface. Cheap to clone.
#[derive(Debug, Clone)]
pub struct ConfirmGateway {
    surface: Arc<Mutex<Surface>>,
    events: EventBus,
}

impl ConfirmGateway {
    pub fn new(events: EventBus) -> Self {
        ConfirmGateway {
            surface: Arc::new(Mutex::new(Surface::default())),
            events,
        }
    }

    /// Shows `request` and waits for the user's answer.
    pub async fn confirm(&self, request: ConfirmRequest) -> Outcome {
        let (tx, rx) = oneshot::channel();

        {
            let mut surface = self.lock();
            if surface.current.is_some() {
                debug!(title = %request.title, "Replacing open confirmation");
            }
            surface.current = Some(request.clone());
            surface.waiters.push(tx);
        }

        debug!(title = %request.title, "Confirmation opened");
        self.events.emit(UiEvent::ConfirmOpened(request));

        // A gateway dropped mid-prompt counts as a refusal.
        rx.await.unwrap_or(Outcome::Cancelled)
    }

    /// Hides the surface and hands `outcome` to every waiting caller.
    /// Returns how many callers were resolved.
    pub fn resolve(&self, outcome: Outcome) -> usize {
        let waiters = {
            let mut surface = self.lock();
            surface.current = None;
            std::mem::take(&mut surface.waiters)
        };

        if waiters.is_empty() {
            return 0;
        }

        let count = waiters.len();
        for tx in waiters {
            // Receiver gone means that caller was dropped; nothing to tell.
            let _ = tx.send(outcome);
        }

        debug!(?outcome, count, "Confirmation resolved");
        self.events.emit(UiEvent::ConfirmClosed);
        count
    }

    /// The prompt currently shown, if any.
    pub fn current(&self) -> Option<ConfirmRequest> {
        self.lock().current.clone()
    }

    pub fn is_open(&self) -> bool {
        self.lock().current.is_some()
    }

    /// Callers still waiting for an answer.
    pub fn pending(&self) -> usize {
        self.lock().waiters.len()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Surface> {
        self.surface.lock().unwrap_or_else(|p| p.into_inner())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Yields until `n` callers are waiting.
    async fn until_pending(gateway: &ConfirmGateway, n: usize) {
        while gateway.pending() < n {
            tokio::task::yield_now().await;
        }
    }

    #[test]
    fn test_request_defaults() {
        let request = ConfirmRequest::default();
        assert_eq!(request.title, "Confirm");
        assert_eq!(request.body_markup, "");
        assert_eq!(request.ok_label, "Accept");
        assert_eq!(request.cancel_label, "Cancel");

        let request = ConfirmRequest::new("Remove from cart").body("Sure?");
        assert_eq!(request.ok_label, "Accept");
        assert_eq!(request.body_markup, "Sure?");
    }

    #[tokio::test]
    async fn test_confirmed() {
        let gateway = ConfirmGateway::new(EventBus::new());

        let (outcome, resolved) = tokio::join!(
            gateway.confirm(ConfirmRequest::new("Remove from cart")),
            async {
                until_pending(&gateway, 1).await;
                assert!(gateway.is_open());
                assert_eq!(gateway.current().unwrap().title, "Remove from cart");
                gateway.resolve(Outcome::Confirmed)
            }
        );

        assert_eq!(outcome, Outcome::Confirmed);
        assert_eq!(resolved, 1);
        assert!(!gateway.is_open());
    }

    #[tokio::test]
    async fn test_cancelled() {
        let gateway = ConfirmGateway::new(EventBus::new());

        let (outcome, _) = tokio::join!(gateway.confirm(ConfirmRequest::default()), async {
            until_pending(&gateway, 1).await;
            gateway.resolve(Outcome::Cancelled)
        });

        assert_eq!(outcome, Outcome::Cancelled);
    }

    #[tokio::test]
    async fn test_one_click_resolves_every_pending_caller() {
        let gateway = ConfirmGateway::new(EventBus::new());

        let (first, second, resolved) = tokio::join!(
            gateway.confirm(ConfirmRequest::new("Remove from cart")),
            gateway.confirm(ConfirmRequest::new("Complete purchase")),
            async {
                until_pending(&gateway, 2).await;
                // The surface shows the latest prompt.
                assert_eq!(gateway.current().unwrap().title, "Complete purchase");
                gateway.resolve(Outcome::Confirmed)
            }
        );

        assert_eq!(first, Outcome::Confirmed);
        assert_eq!(second, Outcome::Confirmed);
        assert_eq!(resolved, 2);
        assert_eq!(gateway.pending(), 0);
    }

    #[test]
    fn test_resolve_when_closed_is_noop() {
        let gateway = ConfirmGateway::new(EventBus::new());
        assert_eq!(gateway.resolve(Outcome::Confirmed), 0);
        assert!(!gateway.is_open());
    }

    #[tokio::test]
    async fn test_events() {
        let events = EventBus::new();
        let mut rx = events.subscribe();
        let gateway = ConfirmGateway::new(events);

        tokio::join!(gateway.confirm(ConfirmRequest::new("Complete purchase")), async {
            until_pending(&gateway, 1).await;
            gateway.resolve(Outcome::Cancelled);
        });

        assert!(matches!(rx.recv().await.unwrap(), UiEvent::ConfirmOpened(r) if r.title == "Complete purchase"));
        assert_eq!(rx.recv().await.unwrap(), UiEvent::ConfirmClosed);
    }
}
