//! Startup seeding of the product catalog from a JSON fixture.

use std::path::Path;
use std::sync::Arc;

use tracing::{error, info};

use crate::models::product::NewProduct;
use crate::services::products_service::{ProductsError, ProductsService};

pub struct SeedService {
    products: Arc<dyn ProductsService>,
    products_path: String,
}

impl SeedService {
    #[must_use]
    pub fn new(products: Arc<dyn ProductsService>, products_path: impl Into<String>) -> Self {
        Self {
            products,
            products_path: products_path.into(),
        }
    }

    /// Seeds products once. A non-empty catalog, a missing fixture or a
    /// malformed fixture all leave the database untouched; only a
    /// database failure is surfaced to the caller.
    pub async fn run(&self) -> Result<(), ProductsError> {
        let existing = self.products.count().await?;
        if existing > 0 {
            info!(existing, "Products already seeded, skipping");
            return Ok(());
        }

        let path = Path::new(&self.products_path);
        let raw = match tokio::fs::read_to_string(path).await {
            Ok(raw) => raw,
            Err(e) => {
                error!("Seed fixture {} not readable: {}", path.display(), e);
                return Ok(());
            }
        };

        let products: Vec<NewProduct> = match serde_json::from_str(&raw) {
            Ok(products) => products,
            Err(e) => {
                error!("Seed fixture {} is malformed: {}", path.display(), e);
                return Ok(());
            }
        };

        let inserted = self.products.create_many(&products).await?;
        info!(inserted, "Seeded product catalog");
        Ok(())
    }
}
