use std::sync::Arc;

use crate::config::AppConfig;
use crate::db::CatalogStore;
use crate::services::{catalog_service::CatalogController, pricing_service::PricingService};

/// Shared by every worker through `web::Data`.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn CatalogStore>,
    pub catalog: CatalogController,
    pub pricing: PricingService,
}

impl AppState {
    pub fn new(store: Arc<dyn CatalogStore>, config: &AppConfig) -> Self {
        Self {
            store,
            catalog: CatalogController::new(config.page_size),
            pricing: PricingService::new(config.pricing),
        }
    }
}
