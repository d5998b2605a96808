//! # Catalog Source
//!
//! Delivers the destination list after a fixed latency, standing in for a
//! remote fetch. Never fails.

use std::time::Duration;
use tracing::info;
use voyage_core::{catalog, Catalog};

#[derive(Debug, Clone)]
pub struct CatalogSource {
    latency: Duration,
    catalog: Catalog,
}

impl CatalogSource {
    /// The built-in destinations, delivered after `latency`.
    pub fn new(latency: Duration) -> Self {
        Self::with_catalog(latency, catalog::builtin())
    }

    pub fn with_catalog(latency: Duration, catalog: Catalog) -> Self {
        CatalogSource { latency, catalog }
    }

    pub async fn fetch(&self) -> Catalog {
        tokio::time::sleep(self.latency).await;
        info!(destinations = self.catalog.len(), "Catalog loaded");
        self.catalog.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::time::Instant;

    #[tokio::test(start_paused = true)]
    async fn test_fetch_waits_latency() {
        let source = CatalogSource::new(Duration::from_millis(400));
        let started = Instant::now();

        let catalog = source.fetch().await;

        assert!(started.elapsed() >= Duration::from_millis(400));
        let ids: Vec<&str> = catalog.destinations().iter().map(|d| d.id.as_str()).collect();
        assert_eq!(ids, vec!["punta-cana", "rio-de-janeiro", "cancun"]);
    }

    #[tokio::test]
    async fn test_custom_catalog() {
        let source = CatalogSource::with_catalog(Duration::ZERO, Catalog::default());
        assert!(source.fetch().await.is_empty());
    }
}
