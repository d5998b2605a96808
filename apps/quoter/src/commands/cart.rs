//! # Cart Commands
//!
//! ## Cart Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Lifecycle                                       │
//! │                                                                         │
//! │  ┌──────────┐     ┌──────────┐     ┌──────────┐     ┌──────────┐       │
//! │  │  Empty   │────►│ In Cart  │────►│ Confirm  │────►│ Purchase │       │
//! │  │  Cart    │     │          │     │  Modal   │     │ simulated│       │
//! │  └──────────┘     └──────────┘     └──────────┘     └──────────┘       │
//! │                        │                 │                │             │
//! │                   add_to_cart        checkout             │             │
//! │                   remove_from_cart   (Cancel: no change)  │             │
//! │                   (confirmed)                             ▼             │
//! │                                                     cart cleared       │
//! │                                                     (back to empty)    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;
use tracing::{debug, info};
use voyage_core::{Cart, Quotation};

use crate::error::ApiError;
use crate::state::AppConfig;
use crate::ui::{ConfirmRequest, Outcome};
use crate::App;

/// One row of the cart drawer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLine {
    #[serde(flatten)]
    pub quotation: Quotation,
    pub formatted_total: String,
}

/// Cart contents and running total.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartResponse {
    pub items: Vec<CartLine>,
    pub item_count: usize,
    pub total: i64,
    pub formatted_total: String,
}

impl CartResponse {
    fn new(cart: &Cart, config: &AppConfig) -> Self {
        CartResponse {
            items: cart
                .items()
                .iter()
                .map(|q| CartLine {
                    quotation: q.clone(),
                    formatted_total: config.format_currency(q.total),
                })
                .collect(),
            item_count: cart.len(),
            total: cart.total(),
            formatted_total: config.format_currency(cart.total()),
        }
    }
}

/// What `checkout` ended up doing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum CheckoutResult {
    /// Nothing to buy; no prompt was shown.
    Empty,
    /// User backed out; cart untouched.
    Cancelled,
    /// Cart cleared.
    Completed,
}

/// Gets the current cart contents.
pub async fn get_cart(app: &App) -> CartResponse {
    debug!("get_cart command");
    app.cart()
        .with_cart(|c| CartResponse::new(c, app.config()))
        .await
}

/// Adds a quotation to the cart and opens the drawer.
///
/// Re-adding a quotation already in the cart changes nothing but still
/// confirms with a toast.
pub async fn add_to_cart(app: &App, quotation: Quotation) -> Result<CartResponse, ApiError> {
    debug!(id = %quotation.id, "add_to_cart command");

    app.cart().add(quotation).await?;
    app.notifier().notify("Added to cart");

    Ok(get_cart(app).await)
}

/// Asks for confirmation, then removes the quotation.
///
/// Returns the user's answer. Waits as long as the prompt stays open.
pub async fn remove_from_cart(app: &App, id: &str) -> Result<Outcome, ApiError> {
    debug!(id = %id, "remove_from_cart command");

    let outcome = app
        .confirm()
        .confirm(ConfirmRequest::new("Remove from cart").body("Do you want to remove this item?"))
        .await;

    if outcome.is_confirmed() {
        app.cart().remove(id).await?;
        app.notifier().notify("Removed");
    }

    Ok(outcome)
}

/// Simulates a purchase: confirms, then empties the cart.
pub async fn checkout(app: &App) -> Result<CheckoutResult, ApiError> {
    debug!("checkout command");

    if app.cart().with_cart(Cart::is_empty).await {
        app.notifier().notify("Your cart is empty");
        return Ok(CheckoutResult::Empty);
    }

    let outcome = app
        .confirm()
        .confirm(
            ConfirmRequest::new("Complete purchase")
                .body("We will simulate the payment and empty the cart. Do you want to continue?"),
        )
        .await;

    if !outcome.is_confirmed() {
        return Ok(CheckoutResult::Cancelled);
    }

    let total = app.cart().with_cart(Cart::total).await;
    app.cart().clear().await?;
    app.notifier().notify("Purchase simulated successfully");
    info!(total, "Purchase simulated");

    Ok(CheckoutResult::Completed)
}
