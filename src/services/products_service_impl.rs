//! `SeaORM` implementation of the `ProductsService` trait.

use async_trait::async_trait;
use rand::seq::SliceRandom;

use crate::db::Store;
use crate::models::product::{NewProduct, ProductDetail, ProductListItem};
use crate::services::products_service::{ProductsError, ProductsService};

const FAVORITES_COUNT: usize = 3;

pub struct SeaOrmProductsService {
    store: Store,
}

impl SeaOrmProductsService {
    #[must_use]
    pub const fn new(store: Store) -> Self {
        Self { store }
    }
}

#[async_trait]
impl ProductsService for SeaOrmProductsService {
    async fn favorite_products(&self) -> Result<Vec<ProductListItem>, ProductsError> {
        let mut coffees = self.store.list_products_by_category("coffee").await?;
        coffees.shuffle(&mut rand::rng());
        coffees.truncate(FAVORITES_COUNT);
        Ok(coffees.into_iter().map(ProductListItem::from).collect())
    }

    async fn all_products(
        &self,
        category: Option<&str>,
    ) -> Result<Vec<ProductListItem>, ProductsError> {
        let models = match category {
            Some(cat) => self.store.list_products_by_category(cat).await?,
            None => self.store.list_products().await?,
        };
        Ok(models.into_iter().map(ProductListItem::from).collect())
    }

    async fn product_by_id(&self, id: i32) -> Result<ProductDetail, ProductsError> {
        self.store
            .get_product(id)
            .await?
            .map(ProductDetail::from)
            .ok_or(ProductsError::NotFound(id))
    }

    async fn create_many(&self, products: &[NewProduct]) -> Result<u64, ProductsError> {
        Ok(self.store.insert_products(products).await?)
    }

    async fn count(&self) -> Result<u64, ProductsError> {
        Ok(self.store.count_products().await?)
    }
}
