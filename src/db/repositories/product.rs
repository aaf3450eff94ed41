use anyhow::{Context, Result};
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Set};

use crate::entities::products;
use crate::models::product::NewProduct;

pub struct ProductRepository {
    conn: DatabaseConnection,
}

impl ProductRepository {
    #[must_use]
    pub const fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    /// All products in insertion order.
    pub async fn list_all(&self) -> Result<Vec<products::Model>> {
        products::Entity::find()
            .order_by_asc(products::Column::Id)
            .all(&self.conn)
            .await
            .context("Failed to list products")
    }

    pub async fn list_by_category(&self, category: &str) -> Result<Vec<products::Model>> {
        products::Entity::find()
            .filter(products::Column::Category.eq(category))
            .order_by_asc(products::Column::Id)
            .all(&self.conn)
            .await
            .context("Failed to list products by category")
    }

    pub async fn get(&self, id: i32) -> Result<Option<products::Model>> {
        products::Entity::find_by_id(id)
            .one(&self.conn)
            .await
            .context("Failed to query product by ID")
    }

    pub async fn count(&self) -> Result<u64> {
        products::Entity::find()
            .count(&self.conn)
            .await
            .context("Failed to count products")
    }

    /// Bulk insert used only by the seed routine. The typed size chart
    /// and additives are serialized back into their JSON text columns.
    pub async fn insert_many(&self, items: &[NewProduct]) -> Result<u64> {
        if items.is_empty() {
            return Ok(0);
        }

        let models: Vec<products::ActiveModel> = items
            .iter()
            .map(|p| {
                Ok(products::ActiveModel {
                    name: Set(p.name.clone()),
                    description: Set(p.description.clone()),
                    price: Set(p.price.clone()),
                    discount_price: Set(p.discount_price.clone()),
                    category: Set(p.category.clone()),
                    sizes: Set(serde_json::to_string(&p.sizes)
                        .context("Failed to serialize product sizes")?),
                    additives: Set(serde_json::to_string(&p.additives)
                        .context("Failed to serialize product additives")?),
                    ..Default::default()
                })
            })
            .collect::<Result<_>>()?;

        let inserted = models.len() as u64;
        products::Entity::insert_many(models)
            .exec(&self.conn)
            .await
            .context("Failed to bulk-insert products")?;

        Ok(inserted)
    }
}
