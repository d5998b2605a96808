//! # UI Protocol
//!
//! The pieces the presentation layer drives and renders:
//!
//! ```text
//! ui/
//! ├── confirm.rs  ◄─── ConfirmGateway: one modal, awaited by commands
//! ├── notify.rs   ◄─── Notifier: timed toasts
//! └── events.rs   ◄─── EventBus: redraw hints
//! ```

pub mod confirm;
pub mod events;
pub mod notify;

pub use confirm::{ConfirmGateway, ConfirmRequest, Outcome};
pub use events::{EventBus, UiEvent};
pub use notify::{Notifier, Toast};
