//! EcoSwap pricing and booking engine.
//!
//! Pure pricing calculators live in [`pricing::calculators`]; the rest of the
//! crate wires them to the catalog and serves them over HTTP.

pub mod cache;
pub mod catalog;
pub mod config;
pub mod error;
pub mod extract;
pub mod models;
pub mod pricing;
pub mod qr;
pub mod routes;

use std::sync::Arc;

use cache::AppCache;
use catalog::{Catalog, StaticCatalog};
use config::AppConfig;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub catalog: Arc<dyn Catalog>,
    pub cache: AppCache,
}

impl AppState {
    pub fn new(config: AppConfig, catalog: Arc<dyn Catalog>) -> Self {
        let cache = AppCache::new(config.confirmation_ttl, config.confirmation_cache_capacity);
        Self {
            config: Arc::new(config),
            catalog,
            cache,
        }
    }

    /// State backed by the launch network fixtures
    pub fn with_fixtures(config: AppConfig) -> Self {
        Self::new(config, Arc::new(StaticCatalog::fixtures()))
    }
}

/// Build the application router
pub fn app(state: AppState) -> axum::Router {
    routes::router(state)
}
