//! # Voyage Quoter
//!
//! The quoting session: everything between the presentation layer and the
//! pricing/storage crates.
//!
//! ## Module Organization
//! ```text
//! voyage_quoter/
//! ├── lib.rs          ◄─── You are here (App session, tracing setup)
//! ├── catalog.rs      ◄─── CatalogSource (simulated remote fetch)
//! ├── state/
//! │   ├── config.rs   ◄─── AppConfig + currency formatter
//! │   ├── cart.rs     ◄─── CartState (cart + persistence)
//! │   ├── customer.rs ◄─── CustomerState
//! │   └── clock.rs    ◄─── QuoteClock (unique quotation ids)
//! ├── ui/
//! │   ├── confirm.rs  ◄─── ConfirmGateway
//! │   ├── notify.rs   ◄─── Notifier
//! │   └── events.rs   ◄─── UiEvent broadcast
//! ├── commands/       ◄─── Entry points called by the presentation
//! └── error.rs        ◄─── ApiError / AppError
//! ```
//!
//! ## Session Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Session Startup                                   │
//! │                                                                         │
//! │  1. init_tracing()          RUST_LOG or "info,voyage=debug,sqlx=warn"   │
//! │  2. AppConfig::load(None)   defaults → voyage.toml → VOYAGE_* env      │
//! │  3. App::bootstrap(config)                                              │
//! │     • open store (WAL, migrations)                                      │
//! │     • restore cart and customer (corrupt → defaults)                    │
//! │     • fetch catalog (simulated latency)                                 │
//! │  4. Presentation subscribes to app.events() and calls commands::*      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod catalog;
pub mod commands;
pub mod error;
pub mod state;
pub mod ui;

use tokio::sync::{broadcast, RwLock};
use tracing::info;
use tracing_subscriber::EnvFilter;
use voyage_core::Catalog;
use voyage_store::{Store, StoreConfig};

use catalog::CatalogSource;
use error::AppResult;
use state::{AppConfig, CartState, CustomerState, QuoteClock};
use ui::{ConfirmGateway, EventBus, Notifier, UiEvent};

/// One quoting session. Commands take it by reference.
#[derive(Debug)]
pub struct App {
    config: AppConfig,
    store: Store,
    source: CatalogSource,
    catalog: RwLock<Catalog>,
    cart: CartState,
    customer: CustomerState,
    confirm: ConfirmGateway,
    notifier: Notifier,
    events: EventBus,
    clock: QuoteClock,
}

impl App {
    /// Opens the configured store, restores state and loads the catalog.
    pub async fn bootstrap(config: AppConfig) -> AppResult<Self> {
        config.validate()?;

        let db_path = config.resolve_database_path()?;
        info!(?db_path, "Database path determined");
        let store = Store::new(StoreConfig::new(db_path)).await?;

        let app = Self::with_store(config, store).await;
        app.refresh_catalog().await;

        info!("Session ready");
        Ok(app)
    }

    /// Builds a session over an open store. The catalog starts empty until
    /// [`App::refresh_catalog`] completes.
    pub async fn with_store(config: AppConfig, store: Store) -> Self {
        let events = EventBus::new();

        let cart = CartState::load(store.kv(), events.clone()).await;
        let customer = CustomerState::load(store.kv()).await;

        App {
            source: CatalogSource::new(config.catalog_latency()),
            catalog: RwLock::new(Catalog::default()),
            confirm: ConfirmGateway::new(events.clone()),
            notifier: Notifier::new(config.toast_duration(), events.clone()),
            clock: QuoteClock::new(),
            config,
            store,
            cart,
            customer,
            events,
        }
    }

    /// Fetches the catalog and replaces the current one.
    pub async fn refresh_catalog(&self) {
        let catalog = self.source.fetch().await;
        *self.catalog.write().await = catalog;
    }

    pub async fn catalog(&self) -> Catalog {
        self.catalog.read().await.clone()
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn store(&self) -> &Store {
        &self.store
    }

    pub fn cart(&self) -> &CartState {
        &self.cart
    }

    pub fn customer(&self) -> &CustomerState {
        &self.customer
    }

    /// The modal surface; the presentation calls `resolve` on clicks.
    pub fn confirm(&self) -> &ConfirmGateway {
        &self.confirm
    }

    pub fn notifier(&self) -> &Notifier {
        &self.notifier
    }

    pub fn clock(&self) -> &QuoteClock {
        &self.clock
    }

    /// Subscribes to redraw events.
    pub fn events(&self) -> broadcast::Receiver<UiEvent> {
        self.events.subscribe()
    }

    /// Closes the store.
    pub async fn shutdown(&self) {
        self.store.close().await;
        info!("Session closed");
    }
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=voyage=trace` - Show trace for voyage crates only
/// - Default: `info,voyage=debug,sqlx=warn`
///
/// Safe to call more than once; later calls do nothing.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,voyage=debug,sqlx=warn"));

    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}
