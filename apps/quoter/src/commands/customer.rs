//! Customer pre-fill.

use tracing::debug;
use voyage_core::Customer;

use crate::App;

/// The customer to pre-fill the quote form with.
pub async fn get_customer(app: &App) -> Customer {
    debug!("get_customer command");
    app.customer().get().await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support;

    #[tokio::test]
    async fn test_get_customer_default() {
        let app = test_support::app().await;
        assert_eq!(get_customer(&app).await, Customer::default());
    }
}
