use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "products")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    pub name: String,

    pub description: String,

    /// Decimal-as-string, e.g. "8.40"
    pub price: String,

    pub discount_price: Option<String>,

    pub category: String,

    /// JSON text: size code (s/m/l/xl/xxl) -> { size, price, discountPrice? }
    pub sizes: String,

    /// JSON text: ordered array of { name, price, discountPrice? }
    pub additives: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
