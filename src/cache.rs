//! In-memory caching using moka
//!
//! Issued confirmations live here so the confirmation page can be reloaded.
//! Nothing is persisted: entries expire after the configured TTL and are
//! lost on restart.

use moka::future::Cache;
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;
use uuid::Uuid;

use crate::pricing::services::Confirmation;

/// Application cache holding issued confirmations
#[derive(Clone)]
pub struct AppCache {
    /// Confirmations (id -> Confirmation)
    pub confirmations: Cache<Uuid, Arc<Confirmation>>,
}

impl AppCache {
    /// Create a cache with the given confirmation TTL and capacity
    pub fn new(ttl: Duration, capacity: u64) -> Self {
        Self {
            confirmations: Cache::builder()
                .max_capacity(capacity)
                .time_to_live(ttl)
                .build(),
        }
    }

    pub async fn store_confirmation(&self, confirmation: Confirmation) -> Arc<Confirmation> {
        let id = confirmation.id;
        let confirmation = Arc::new(confirmation);
        self.confirmations.insert(id, confirmation.clone()).await;
        confirmation
    }

    pub async fn confirmation(&self, id: &Uuid) -> Option<Arc<Confirmation>> {
        let hit = self.confirmations.get(id).await;
        tracing::debug!(
            "Cache {} for confirmation {}",
            if hit.is_some() { "HIT" } else { "MISS" },
            id
        );
        hit
    }

    /// Get cache statistics for monitoring
    pub fn stats(&self) -> CacheStats {
        CacheStats {
            confirmations_size: self.confirmations.entry_count(),
        }
    }
}

impl Default for AppCache {
    /// One hour TTL, 10,000 confirmations
    fn default() -> Self {
        Self::new(Duration::from_secs(60 * 60), 10_000)
    }
}

/// Cache statistics for monitoring endpoint
#[derive(Debug, Clone, Serialize)]
pub struct CacheStats {
    pub confirmations_size: u64,
}
