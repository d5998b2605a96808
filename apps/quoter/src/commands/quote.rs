//! # Quote Commands
//!
//! ## Quote Form Submission
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  calculate_quote(form)                                                 │
//! │       │                                                                 │
//! │       ├── 1. save customer (name, email), whatever was typed          │
//! │       ├── 2. coerce counts, parse regimen/promo                        │
//! │       ├── 3. validate request (destination, nights > 0)                │
//! │       ├── 4. price against the loaded catalog                          │
//! │       └── 5. QuoteResponse { quotation, formattedTotal }               │
//! │                                                                         │
//! │  The result card offers "Details" (show_quote_details) and "Add"       │
//! │  (add_to_cart). Nothing is added to the cart here.                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use voyage_core::validation::{parse_count, validate_quote_request};
use voyage_core::{pricing, Customer, PromoCode, Quotation, QuoteRequest, Regimen};

use super::escape_markup;
use crate::error::ApiError;
use crate::ui::{ConfirmRequest, Outcome};
use crate::App;

/// The quote form exactly as submitted: every field is raw text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct QuoteForm {
    pub name: String,
    pub email: String,
    pub destination: String,
    pub departure: String,
    pub adults: String,
    pub minors: String,
    pub nights: String,
    pub regimen: String,
    pub promo_code: String,
}

impl QuoteForm {
    /// Coerces the trip fields into a pricing request.
    pub fn to_request(&self) -> Result<QuoteRequest, ApiError> {
        let departure = self.departure.trim();

        Ok(QuoteRequest {
            destination_id: self.destination.trim().to_string(),
            departure: (!departure.is_empty()).then(|| departure.to_string()),
            adults: parse_count("adults", &self.adults)?,
            minors: parse_count("minors", &self.minors)?,
            nights: parse_count("nights", &self.nights)?,
            regimen: Regimen::parse(&self.regimen),
            promo: PromoCode::parse(&self.promo_code),
        })
    }

    pub fn customer(&self) -> Customer {
        Customer {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
        }
    }
}

/// A priced quotation ready for the result card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteResponse {
    pub quotation: Quotation,
    pub formatted_total: String,
}

/// Records the customer, then prices the form.
///
/// The customer is saved as typed, before any trip field is checked.
///
/// ## Errors
/// - `VALIDATION_ERROR`: non-numeric counts, no destination, zero nights
/// - `NOT_FOUND`: destination not in the catalog (or catalog not loaded yet)
/// - `STORAGE_ERROR`: customer could not be saved
pub async fn calculate_quote(app: &App, form: QuoteForm) -> Result<QuoteResponse, ApiError> {
    debug!(destination = %form.destination, "calculate_quote command");

    app.customer().update(form.customer()).await?;

    let request = form.to_request()?;
    validate_quote_request(&request)?;

    let catalog = app.catalog().await;
    let quotation = pricing::price(&request, &catalog, app.clock().tick())?;

    info!(id = %quotation.id, total = quotation.total, "Quotation priced");

    Ok(QuoteResponse {
        formatted_total: app.config().format_currency(quotation.total),
        quotation,
    })
}

/// Shows the quotation in the modal. Both buttons just close it.
pub async fn show_quote_details(app: &App, quotation: &Quotation) -> Outcome {
    debug!(id = %quotation.id, "show_quote_details command");

    let body = format!(
        "<p>{}</p><p><strong>Total:</strong> {}</p>",
        escape_markup(&quotation.detail),
        escape_markup(&app.config().format_currency(quotation.total))
    );

    app.confirm()
        .confirm(ConfirmRequest::new("Quote details").body(body))
        .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use crate::test_support;
    use voyage_store::keys;

    fn form() -> QuoteForm {
        QuoteForm {
            name: "Lucía".into(),
            email: "lucia@demo.com".into(),
            destination: "punta-cana".into(),
            departure: "2025-01-15".into(),
            adults: "2".into(),
            minors: "1".into(),
            nights: "3".into(),
            regimen: "all-inclusive".into(),
            promo_code: " viaja10 ".into(),
        }
    }

    #[tokio::test]
    async fn test_calculate_quote() {
        let app = test_support::app().await;

        let response = calculate_quote(&app, form()).await.unwrap();

        assert_eq!(response.quotation.total, 828);
        assert_eq!(response.formatted_total, "$ 828");
        assert_eq!(response.quotation.title, "Punta Cana · 3 nights (all inclusive)");
        assert_eq!(
            response.quotation.detail,
            "2 adults · 1 minors · departure 2025-01-15"
        );
        assert!(response.quotation.id.starts_with("punta-cana-"));
    }

    #[tokio::test]
    async fn test_no_promo() {
        let app = test_support::app().await;
        let form = QuoteForm {
            promo_code: String::new(),
            departure: String::new(),
            ..form()
        };

        let response = calculate_quote(&app, form).await.unwrap();
        assert_eq!(response.quotation.total, 920);
        assert!(response.quotation.detail.ends_with("departure —"));
    }

    #[tokio::test]
    async fn test_customer_saved() {
        let app = test_support::app().await;
        calculate_quote(&app, form()).await.unwrap();

        assert_eq!(app.customer().get().await.name, "Lucía");
        let stored: Customer = app.store().kv().load(keys::CUSTOMER).await.unwrap();
        assert_eq!(stored.email, "lucia@demo.com");
    }

    #[tokio::test]
    async fn test_customer_saved_even_when_quote_invalid() {
        let app = test_support::app().await;
        let form = QuoteForm {
            nights: "0".into(),
            ..form()
        };

        let err = calculate_quote(&app, form).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);
        assert_eq!(app.customer().get().await.name, "Lucía");
    }

    #[tokio::test]
    async fn test_double_submit_gives_distinct_ids() {
        let app = test_support::app().await;

        let a = calculate_quote(&app, form()).await.unwrap().quotation;
        let b = calculate_quote(&app, form()).await.unwrap().quotation;

        assert_ne!(a.id, b.id);
        assert_eq!(a.total, b.total);
    }

    #[tokio::test]
    async fn test_unknown_destination() {
        let app = test_support::app().await;
        let form = QuoteForm {
            destination: "atlantis".into(),
            ..form()
        };

        let err = calculate_quote(&app, form).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);
    }

    #[tokio::test]
    async fn test_bad_count() {
        let app = test_support::app().await;
        let form = QuoteForm {
            adults: "two".into(),
            ..form()
        };

        let err = calculate_quote(&app, form).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);
    }

    #[tokio::test]
    async fn test_free_form_customer_is_saved_and_priced() {
        let app = test_support::app().await;
        let form = QuoteForm {
            name: "L".repeat(150),
            email: "ana".into(),
            ..form()
        };

        let response = calculate_quote(&app, form).await.unwrap();
        assert_eq!(response.quotation.total, 828);

        let stored: Customer = app.store().kv().load(keys::CUSTOMER).await.unwrap();
        assert_eq!(stored.email, "ana");
        assert_eq!(stored.name.chars().count(), 150);
    }

    #[tokio::test]
    async fn test_uppercase_regimen_gets_no_surcharge() {
        let app = test_support::app().await;
        let form = QuoteForm {
            regimen: "ALL-INCLUSIVE".into(),
            promo_code: String::new(),
            ..form()
        };

        // 65 × 2.6 × 3 × 1.18 = 598.26
        let response = calculate_quote(&app, form).await.unwrap();
        assert_eq!(response.quotation.total, 598);
        assert_eq!(
            response.quotation.title,
            "Punta Cana · 3 nights (ALL INCLUSIVE)"
        );
    }

    #[tokio::test]
    async fn test_show_quote_details() {
        let app = test_support::app().await;
        let quotation = calculate_quote(&app, form()).await.unwrap().quotation;

        let (outcome, _) = tokio::join!(show_quote_details(&app, &quotation), async {
            test_support::until_confirm_pending(&app, 1).await;
            let prompt = app.confirm().current().unwrap();
            assert_eq!(prompt.title, "Quote details");
            assert!(prompt.body_markup.contains("<strong>Total:</strong> $ 828"));
            app.confirm().resolve(Outcome::Confirmed)
        });

        assert_eq!(outcome, Outcome::Confirmed);
    }
}
