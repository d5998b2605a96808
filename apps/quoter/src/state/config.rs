//! # Configuration
//!
//! Session configuration loaded at startup.
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Environment Variables (highest priority)                           │
//! │     VOYAGE_DB_PATH=/tmp/voyage.db                                      │
//! │     VOYAGE_CATALOG_LATENCY_MS=0                                        │
//! │     VOYAGE_TOAST_MS=4000                                               │
//! │     VOYAGE_CURRENCY_SYMBOL=US$                                         │
//! │                                                                         │
//! │  2. TOML Config File                                                   │
//! │     ~/.config/voyage-quoter/voyage.toml (Linux)                        │
//! │                                                                         │
//! │  3. Default Values (lowest priority)                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! # voyage.toml
//! database_path = "/home/me/.local/share/voyage-quoter/voyage.db"
//! catalog_latency_ms = 400
//! toast_duration_ms = 2500
//! currency_symbol = "$"
//! thousands_separator = "."
//! ```
//!
//! Read-only after startup, so no lock.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, info, warn};

use crate::error::{AppError, AppResult};

/// Session configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// SQLite file for the key-value store. `None` means the platform data
    /// directory; `":memory:"` keeps everything in memory.
    pub database_path: Option<PathBuf>,

    /// Simulated catalog latency.
    pub catalog_latency_ms: u64,

    /// How long a toast stays visible.
    pub toast_duration_ms: u64,

    /// Prefix for displayed amounts.
    pub currency_symbol: String,

    /// Digit group separator for displayed amounts.
    pub thousands_separator: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            database_path: None,
            catalog_latency_ms: 400,
            toast_duration_ms: 2500,
            currency_symbol: "$".to_string(),
            thousands_separator: ".".to_string(),
        }
    }
}

impl AppConfig {
    /// Loads configuration from file, environment, and defaults.
    ///
    /// ## Load Order (later overrides earlier)
    /// 1. Default values
    /// 2. Config file (`voyage.toml`), if it exists
    /// 3. Environment variables
    pub fn load(config_path: Option<PathBuf>) -> AppResult<Self> {
        let mut config = match config_path.or_else(Self::default_config_path) {
            Some(path) if path.exists() => Self::from_file(&path)?,
            Some(path) => {
                debug!(?path, "Config file not found, using defaults");
                Self::default()
            }
            None => Self::default(),
        };

        config.apply_env_overrides(|name| std::env::var(name).ok());
        config.validate()?;

        Ok(config)
    }

    /// Loads config or returns default if load fails.
    pub fn load_or_default(config_path: Option<PathBuf>) -> Self {
        Self::load(config_path).unwrap_or_else(|e| {
            warn!("Failed to load config: {}. Using defaults.", e);
            Self::default()
        })
    }

    /// Reads a TOML file. Missing keys keep their defaults.
    pub fn from_file(path: &Path) -> AppResult<Self> {
        info!(?path, "Loading config from file");
        let contents = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&contents)?)
    }

    /// Validates the configuration.
    pub fn validate(&self) -> AppResult<()> {
        if self.currency_symbol.trim().is_empty() {
            return Err(AppError::InvalidConfig(
                "currency_symbol must not be empty".into(),
            ));
        }

        Ok(())
    }

    /// Applies `VOYAGE_*` overrides read through `lookup`.
    fn apply_env_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(path) = lookup("VOYAGE_DB_PATH") {
            debug!(path = %path, "Overriding database path from environment");
            self.database_path = Some(PathBuf::from(path));
        }

        if let Some(ms) = lookup("VOYAGE_CATALOG_LATENCY_MS") {
            match ms.parse::<u64>() {
                Ok(ms) => self.catalog_latency_ms = ms,
                Err(_) => warn!(value = %ms, "Ignoring invalid VOYAGE_CATALOG_LATENCY_MS"),
            }
        }

        if let Some(ms) = lookup("VOYAGE_TOAST_MS") {
            match ms.parse::<u64>() {
                Ok(ms) => self.toast_duration_ms = ms,
                Err(_) => warn!(value = %ms, "Ignoring invalid VOYAGE_TOAST_MS"),
            }
        }

        if let Some(symbol) = lookup("VOYAGE_CURRENCY_SYMBOL") {
            self.currency_symbol = symbol;
        }
    }

    /// Returns the default config file path.
    fn default_config_path() -> Option<PathBuf> {
        project_dirs().map(|dirs| dirs.config_dir().join("voyage.toml"))
    }

    /// Resolves the store file, creating the platform data directory when
    /// no explicit path is configured.
    pub fn resolve_database_path(&self) -> AppResult<PathBuf> {
        if let Some(path) = &self.database_path {
            return Ok(path.clone());
        }

        let dirs = project_dirs().ok_or(AppError::NoDataDir)?;
        let data_dir = dirs.data_dir();
        std::fs::create_dir_all(data_dir)?;

        Ok(data_dir.join("voyage.db"))
    }

    pub fn catalog_latency(&self) -> Duration {
        Duration::from_millis(self.catalog_latency_ms)
    }

    pub fn toast_duration(&self) -> Duration {
        Duration::from_millis(self.toast_duration_ms)
    }

    /// Formats a whole-unit amount for display.
    ///
    /// ## Example
    /// ```rust
    /// use voyage_quoter::state::AppConfig;
    ///
    /// let config = AppConfig::default();
    /// assert_eq!(config.format_currency(1234), "$ 1.234");
    /// assert_eq!(config.format_currency(828), "$ 828");
    /// ```
    pub fn format_currency(&self, units: i64) -> String {
        let digits = units.unsigned_abs().to_string();
        let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);

        for (i, ch) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                grouped.push_str(&self.thousands_separator);
            }
            grouped.push(ch);
        }

        format!(
            "{} {}{}",
            self.currency_symbol,
            if units < 0 { "-" } else { "" },
            grouped
        )
    }
}

fn project_dirs() -> Option<directories::ProjectDirs> {
    directories::ProjectDirs::from("com", "voyage", "quoter")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.catalog_latency(), Duration::from_millis(400));
        assert_eq!(config.toast_duration(), Duration::from_millis(2500));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_format_currency() {
        let config = AppConfig::default();
        assert_eq!(config.format_currency(0), "$ 0");
        assert_eq!(config.format_currency(920), "$ 920");
        assert_eq!(config.format_currency(1000), "$ 1.000");
        assert_eq!(config.format_currency(1234567), "$ 1.234.567");
        assert_eq!(config.format_currency(-2500), "$ -2.500");
    }

    #[test]
    fn test_format_currency_custom_symbol() {
        let config = AppConfig {
            currency_symbol: "US$".into(),
            thousands_separator: ",".into(),
            ..AppConfig::default()
        };
        assert_eq!(config.format_currency(12345), "US$ 12,345");
    }

    #[test]
    fn test_env_overrides() {
        let mut config = AppConfig::default();
        config.apply_env_overrides(env(&[
            ("VOYAGE_DB_PATH", ":memory:"),
            ("VOYAGE_CATALOG_LATENCY_MS", "0"),
            ("VOYAGE_TOAST_MS", "not-a-number"),
            ("VOYAGE_CURRENCY_SYMBOL", "€"),
        ]));

        assert_eq!(config.database_path, Some(PathBuf::from(":memory:")));
        assert_eq!(config.catalog_latency_ms, 0);
        assert_eq!(config.toast_duration_ms, 2500);
        assert_eq!(config.currency_symbol, "€");
    }

    #[test]
    fn test_empty_symbol_rejected() {
        let config = AppConfig {
            currency_symbol: " ".into(),
            ..AppConfig::default()
        };
        assert!(matches!(config.validate(), Err(AppError::InvalidConfig(_))));
    }

    #[test]
    fn test_partial_toml() {
        let config: AppConfig = toml::from_str("toast_duration_ms = 1000").unwrap();
        assert_eq!(config.toast_duration_ms, 1000);
        assert_eq!(config.catalog_latency_ms, 400);
        assert_eq!(config.currency_symbol, "$");
    }

    #[test]
    fn test_from_file() {
        let path = std::env::temp_dir().join(format!("voyage-config-{}.toml", std::process::id()));
        std::fs::write(&path, "catalog_latency_ms = 10\ncurrency_symbol = \"UYU\"\n").unwrap();

        let config = AppConfig::from_file(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(config.catalog_latency_ms, 10);
        assert_eq!(config.currency_symbol, "UYU");
    }

    #[test]
    fn test_bad_toml_is_parse_error() {
        let err = toml::from_str::<AppConfig>("catalog_latency_ms = \"slow\"").unwrap_err();
        assert!(matches!(AppError::from(err), AppError::ConfigParse(_)));
    }
}
