//! # State Module
//!
//! Session state, one focused type per concern.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │  ┌──────────────┐  ┌──────────────┐  ┌──────────────┐  ┌────────────┐  │
//! │  │  AppConfig   │  │  CartState   │  │CustomerState │  │ QuoteClock │  │
//! │  │              │  │              │  │              │  │            │  │
//! │  │  latency     │  │  Mutex<Cart> │  │  Mutex<      │  │  last ms   │  │
//! │  │  toast ms    │  │  + kv "cart" │  │   Customer>  │  │  issued    │  │
//! │  │  formatter   │  │              │  │  + kv        │  │            │  │
//! │  └──────────────┘  └──────────────┘  └──────────────┘  └────────────┘  │
//! │                                                                         │
//! │  THREAD SAFETY:                                                        │
//! │  • AppConfig: read-only after startup                                  │
//! │  • CartState / CustomerState: async Mutex held across the store write  │
//! │  • QuoteClock: std Mutex, never held across an await                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod cart;
mod clock;
mod config;
mod customer;

pub use cart::CartState;
pub use clock::QuoteClock;
pub use config::AppConfig;
pub use customer::CustomerState;
