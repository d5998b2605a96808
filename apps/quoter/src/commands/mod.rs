//! # Commands Module
//!
//! Entry points the presentation layer calls.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs       ◄─── You are here (exports)
//! ├── catalog.rs   ◄─── list_destinations
//! ├── quote.rs     ◄─── calculate_quote, show_quote_details
//! ├── cart.rs      ◄─── get_cart, add_to_cart, remove_from_cart, checkout
//! └── customer.rs  ◄─── get_customer
//! ```
//!
//! ## How Commands Work
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Command Flow                                         │
//! │                                                                         │
//! │  Presentation                                                          │
//! │  ────────────                                                          │
//! │  submit quote form ──► calculate_quote(&app, form)                     │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  Rust Session                                                           │
//! │  ────────────                                                           │
//! │  async fn calculate_quote(                                              │
//! │      app: &App,          ◄── session state, passed explicitly          │
//! │      form: QuoteForm,    ◄── raw form strings                          │
//! │  ) -> Result<QuoteResponse, ApiError>                                   │
//! │         │                                                               │
//! │         │ (serde JSON)                                                  │
//! │         ▼                                                               │
//! │  Presentation renders QuoteResponse; UiEvents trigger redraws          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Commands that need the user's consent (`remove_from_cart`, `checkout`)
//! suspend on the confirmation gateway until the presentation resolves it.

pub mod cart;
pub mod catalog;
pub mod customer;
pub mod quote;

pub use cart::{add_to_cart, checkout, get_cart, remove_from_cart, CartLine, CartResponse, CheckoutResult};
pub use catalog::{list_destinations, DestinationOption};
pub use customer::get_customer;
pub use quote::{calculate_quote, show_quote_details, QuoteForm, QuoteResponse};

/// Escapes text for interpolation into modal markup.
pub(crate) fn escape_markup(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}
