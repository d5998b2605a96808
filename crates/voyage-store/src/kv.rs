//! # Key-Value Repository
//!
//! JSON documents under string keys.
//!
//! ## Write Semantics
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  save("cart", &cart)                                                   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  serde_json::to_string ──► INSERT ... ON CONFLICT(key) DO UPDATE       │
//! │                                                                         │
//! │  Every write replaces the whole value. There is no partial update and  │
//! │  no history: the last write for a key wins.                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::Utc;
use serde::de::DeserializeOwned;
use serde::Serialize;
use sqlx::SqlitePool;
use tracing::{debug, error, warn};

use crate::error::{StoreError, StoreResult};

/// Repository for the `kv_store` table.
#[derive(Debug, Clone)]
pub struct KeyValueRepository {
    pool: SqlitePool,
}

impl KeyValueRepository {
    /// Creates a new KeyValueRepository.
    pub fn new(pool: SqlitePool) -> Self {
        KeyValueRepository { pool }
    }

    /// Serializes `value` and stores it under `key`, replacing any previous
    /// value.
    pub async fn save<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> StoreResult<()> {
        let json = serde_json::to_string(value).map_err(|e| StoreError::Serialization {
            key: key.to_string(),
            reason: e.to_string(),
        })?;

        self.save_raw(key, &json).await
    }

    /// Stores an already-serialized value under `key`.
    pub async fn save_raw(&self, key: &str, value: &str) -> StoreResult<()> {
        let now = Utc::now().to_rfc3339();

        sqlx::query(
            r#"
            INSERT INTO kv_store (key, value, updated_at)
            VALUES (?, ?, ?)
            ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                updated_at = excluded.updated_at
            "#,
        )
        .bind(key)
        .bind(value)
        .bind(&now)
        .execute(&self.pool)
        .await?;

        debug!(key = %key, bytes = value.len(), "Value saved");
        Ok(())
    }

    /// Returns the raw stored text for `key`, if any.
    pub async fn load_raw(&self, key: &str) -> StoreResult<Option<String>> {
        let value: Option<String> = sqlx::query_scalar("SELECT value FROM kv_store WHERE key = ?")
            .bind(key)
            .fetch_optional(&self.pool)
            .await?;

        Ok(value)
    }

    /// Loads and decodes the value under `key`.
    ///
    /// Absent, corrupt and unreadable values all yield `None`. The last two
    /// are logged.
    pub async fn load<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let raw = match self.load_raw(key).await {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(e) => {
                error!(key = %key, error = %e, "Failed to read stored value");
                return None;
            }
        };

        match decode(key, &raw) {
            Ok(value) => Some(value),
            Err(e) => {
                warn!(error = %e, "Ignoring stored value");
                None
            }
        }
    }

    /// Loads the value under `key`, falling back to `T::default()`.
    pub async fn load_or_default<T: DeserializeOwned + Default>(&self, key: &str) -> T {
        self.load(key).await.unwrap_or_default()
    }

    /// Deletes `key`. Returns true if a value was present.
    pub async fn remove(&self, key: &str) -> StoreResult<bool> {
        let result = sqlx::query("DELETE FROM kv_store WHERE key = ?")
            .bind(key)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Lists every stored key in ascending order.
    pub async fn keys(&self) -> StoreResult<Vec<String>> {
        let keys: Vec<String> = sqlx::query_scalar("SELECT key FROM kv_store ORDER BY key")
            .fetch_all(&self.pool)
            .await?;

        Ok(keys)
    }
}

/// Decodes stored JSON, reporting failures as [`StoreError::Corrupt`].
pub fn decode<T: DeserializeOwned>(key: &str, raw: &str) -> StoreResult<T> {
    serde_json::from_str(raw).map_err(|e| StoreError::corrupt(key, e))
}
