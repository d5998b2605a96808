//! # Cart State
//!
//! The session's cart, mirrored to the store on every mutation.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart State Operations                                │
//! │                                                                         │
//! │  Command               CartState                 Side effects           │
//! │  ───────               ─────────                 ────────────           │
//! │                                                                         │
//! │  add_to_cart ────────► cart.add(q) ────────────► save("cart")          │
//! │                                                   CartChanged, OpenCart │
//! │                                                                         │
//! │  remove_from_cart ───► cart.remove(id) ────────► save("cart")          │
//! │                                                   CartChanged           │
//! │                                                                         │
//! │  checkout ───────────► cart.clear() ───────────► save("cart")          │
//! │                                                   CartChanged           │
//! │                                                                         │
//! │  get_cart ───────────► snapshot() ─────────────► (read only)           │
//! │                                                                         │
//! │  NOTE: the lock is held across the save, so stored writes land in the  │
//! │        same order as the in-memory mutations.                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! A failed save keeps the in-memory change and reports the error; the next
//! successful save writes the whole cart again.

use tokio::sync::Mutex;
use tracing::{debug, info};
use voyage_core::{Cart, Quotation};
use voyage_store::{keys, KeyValueRepository, StoreResult};

use crate::ui::{EventBus, UiEvent};

#[derive(Debug)]
pub struct CartState {
    cart: Mutex<Cart>,
    kv: KeyValueRepository,
    events: EventBus,
}

impl CartState {
    /// Restores the stored cart. Missing or corrupt data gives an empty cart.
    pub async fn load(kv: KeyValueRepository, events: EventBus) -> Self {
        let items: Vec<Quotation> = kv.load_or_default(keys::CART).await;
        let cart = Cart::from_items(items);
        info!(items = cart.len(), "Cart restored");

        CartState {
            cart: Mutex::new(cart),
            kv,
            events,
        }
    }

    /// A copy of the current cart.
    pub async fn snapshot(&self) -> Cart {
        self.cart.lock().await.clone()
    }

    /// Reads the cart under the lock.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// let total = cart_state.with_cart(|cart| cart.total()).await;
    /// ```
    pub async fn with_cart<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&Cart) -> R,
    {
        let cart = self.cart.lock().await;
        f(&cart)
    }

    /// Appends a quotation and opens the cart drawer.
    ///
    /// Returns `Ok(false)` when the id is already in the cart.
    pub async fn add(&self, quotation: Quotation) -> StoreResult<bool> {
        let mut cart = self.cart.lock().await;
        let id = quotation.id.clone();

        let added = cart.add(quotation);
        let saved = if added {
            debug!(id = %id, "Quotation added to cart");
            self.persist(&cart).await
        } else {
            debug!(id = %id, "Quotation already in cart");
            Ok(())
        };

        if added {
            self.changed(&cart);
        }
        self.events.emit(UiEvent::OpenCart);

        saved.map(|_| added)
    }

    /// Drops every entry with `id`. Returns how many were removed.
    pub async fn remove(&self, id: &str) -> StoreResult<usize> {
        let mut cart = self.cart.lock().await;

        let removed = cart.remove(id);
        if removed == 0 {
            debug!(id = %id, "Nothing to remove");
            return Ok(0);
        }

        debug!(id = %id, removed, "Quotation removed from cart");
        let saved = self.persist(&cart).await;
        self.changed(&cart);

        saved.map(|_| removed)
    }

    /// Empties the cart.
    pub async fn clear(&self) -> StoreResult<()> {
        let mut cart = self.cart.lock().await;

        cart.clear();
        debug!("Cart cleared");
        let saved = self.persist(&cart).await;
        self.changed(&cart);

        saved
    }

    async fn persist(&self, cart: &Cart) -> StoreResult<()> {
        self.kv.save(keys::CART, cart).await
    }

    fn changed(&self, cart: &Cart) {
        self.events.emit(UiEvent::CartChanged {
            item_count: cart.len(),
            total: cart.total(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use voyage_store::{Store, StoreConfig};

    fn quotation(id: &str, total: i64) -> Quotation {
        Quotation {
            id: id.to_string(),
            destination_id: "punta-cana".to_string(),
            title: "Punta Cana · 3 nights (all inclusive)".to_string(),
            detail: "2 adults · 1 minors · departure —".to_string(),
            total,
        }
    }

    async fn store() -> Store {
        Store::new(StoreConfig::in_memory()).await.unwrap()
    }

    #[tokio::test]
    async fn test_add_persists_and_opens_drawer() {
        let store = store().await;
        let events = EventBus::new();
        let mut rx = events.subscribe();
        let state = CartState::load(store.kv(), events).await;

        assert!(state.add(quotation("punta-cana-1", 828)).await.unwrap());

        let stored: Vec<Quotation> = store.kv().load(keys::CART).await.unwrap();
        assert_eq!(stored, vec![quotation("punta-cana-1", 828)]);

        assert_eq!(
            rx.recv().await.unwrap(),
            UiEvent::CartChanged {
                item_count: 1,
                total: 828
            }
        );
        assert_eq!(rx.recv().await.unwrap(), UiEvent::OpenCart);
    }

    #[tokio::test]
    async fn test_duplicate_add_is_noop() {
        let state = CartState::load(store().await.kv(), EventBus::new()).await;

        assert!(state.add(quotation("punta-cana-1", 828)).await.unwrap());
        assert!(!state.add(quotation("punta-cana-1", 828)).await.unwrap());
        assert_eq!(state.snapshot().await.len(), 1);
    }

    #[tokio::test]
    async fn test_remove_unknown_leaves_cart() {
        let state = CartState::load(store().await.kv(), EventBus::new()).await;
        state.add(quotation("punta-cana-1", 828)).await.unwrap();
        let before = state.snapshot().await;

        assert_eq!(state.remove("cancun-9").await.unwrap(), 0);
        assert_eq!(state.snapshot().await, before);
    }

    #[tokio::test]
    async fn test_clear_persists_empty() {
        let store = store().await;
        let state = CartState::load(store.kv(), EventBus::new()).await;
        state.add(quotation("punta-cana-1", 828)).await.unwrap();
        state.add(quotation("punta-cana-2", 920)).await.unwrap();

        state.clear().await.unwrap();

        assert_eq!(state.with_cart(|c| c.total()).await, 0);
        assert_eq!(store.kv().load_raw(keys::CART).await.unwrap().as_deref(), Some("[]"));
    }

    #[tokio::test]
    async fn test_restores_and_dedupes() {
        let store = store().await;
        store
            .kv()
            .save(
                keys::CART,
                &vec![
                    quotation("punta-cana-1", 828),
                    quotation("punta-cana-1", 828),
                    quotation("cancun-2", 1000),
                ],
            )
            .await
            .unwrap();

        let state = CartState::load(store.kv(), EventBus::new()).await;
        let cart = state.snapshot().await;
        assert_eq!(cart.len(), 2);
        assert_eq!(cart.total(), 1828);
    }

    #[tokio::test]
    async fn test_corrupt_cart_is_empty() {
        let store = store().await;
        store.kv().save_raw(keys::CART, "[{\"id\":").await.unwrap();

        let state = CartState::load(store.kv(), EventBus::new()).await;
        assert!(state.snapshot().await.is_empty());
    }

    #[tokio::test]
    async fn test_failed_save_keeps_memory() {
        let store = store().await;
        let state = CartState::load(store.kv(), EventBus::new()).await;
        store.close().await;

        assert!(state.add(quotation("punta-cana-1", 828)).await.is_err());
        assert_eq!(state.snapshot().await.len(), 1);
    }
}
