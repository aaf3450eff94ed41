//! Domain service for the product catalog.

use thiserror::Error;

use crate::models::product::{NewProduct, ProductDetail, ProductListItem};

#[derive(Debug, Error)]
pub enum ProductsError {
    #[error("Product with ID {0} not found")]
    NotFound(i32),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<sea_orm::DbErr> for ProductsError {
    fn from(err: sea_orm::DbErr) -> Self {
        Self::Database(err.to_string())
    }
}

impl From<anyhow::Error> for ProductsError {
    fn from(err: anyhow::Error) -> Self {
        Self::Internal(err.to_string())
    }
}

/// Read side of the catalog plus the bulk insert used by seeding.
#[async_trait::async_trait]
pub trait ProductsService: Send + Sync {
    /// Up to three randomly chosen coffee products for the landing page.
    async fn favorite_products(&self) -> Result<Vec<ProductListItem>, ProductsError>;

    /// The whole menu, optionally narrowed to one category.
    async fn all_products(
        &self,
        category: Option<&str>,
    ) -> Result<Vec<ProductListItem>, ProductsError>;

    /// Full detail for a single product.
    ///
    /// # Errors
    ///
    /// Returns [`ProductsError::NotFound`] when no product has the ID.
    async fn product_by_id(&self, id: i32) -> Result<ProductDetail, ProductsError>;

    /// Inserts a batch of products, returning how many were written.
    async fn create_many(&self, products: &[NewProduct]) -> Result<u64, ProductsError>;

    async fn count(&self) -> Result<u64, ProductsError>;
}
