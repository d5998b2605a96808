//! # Customer State
//!
//! Contact details typed into the quote form. Restored at startup to
//! pre-fill the form; overwritten on every quote submission.

use tokio::sync::Mutex;
use tracing::debug;
use voyage_core::Customer;
use voyage_store::{keys, KeyValueRepository, StoreResult};

#[derive(Debug)]
pub struct CustomerState {
    customer: Mutex<Customer>,
    kv: KeyValueRepository,
}

impl CustomerState {
    /// Restores the stored customer, or the demo customer.
    pub async fn load(kv: KeyValueRepository) -> Self {
        let customer: Customer = kv.load_or_default(keys::CUSTOMER).await;

        CustomerState {
            customer: Mutex::new(customer),
            kv,
        }
    }

    pub async fn get(&self) -> Customer {
        self.customer.lock().await.clone()
    }

    /// Replaces the customer. A failed save keeps the new value in memory.
    pub async fn update(&self, customer: Customer) -> StoreResult<()> {
        let mut current = self.customer.lock().await;
        *current = customer;
        debug!(name = %current.name, "Customer updated");

        self.kv.save(keys::CUSTOMER, &*current).await
    }
}
