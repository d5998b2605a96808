//! # voyage-store: Persistent Key-Value Store
//!
//! Durable storage for session state. Values are JSON documents kept under
//! string keys in a single SQLite table, overwritten whole on every save.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Voyage Data Flow                                 │
//! │                                                                         │
//! │  CartState::add / CustomerState::update                                │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                   voyage-store (THIS CRATE)                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌───────────────┐    ┌──────────────┐  │   │
//! │  │   │    Store      │    │  Repository   │    │  Migrations  │  │   │
//! │  │   │   (pool.rs)   │◄───│   (kv.rs)     │    │  (embedded)  │  │   │
//! │  │   │  SqlitePool   │    │ save / load   │    │ 001_kv.sql   │  │   │
//! │  │   └───────────────┘    └───────────────┘    └──────────────┘  │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                     SQLite file (voyage.db)                     │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use voyage_store::{keys, Store, StoreConfig};
//!
//! let store = Store::new(StoreConfig::new("voyage.db")).await?;
//! store.kv().save(keys::CART, &cart).await?;
//! let cart: Cart = store.kv().load_or_default(keys::CART).await;
//! ```

pub mod error;
pub mod keys;
pub mod kv;
pub mod migrations;
pub mod pool;

pub use error::{StoreError, StoreResult};
pub use kv::KeyValueRepository;
pub use pool::{Store, StoreConfig};
