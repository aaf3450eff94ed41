use serde::{Deserialize, Serialize};

use crate::entities::products;

/// One purchasable size of a product ("200 ml" for a small coffee, etc).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SizeOption {
    pub size: String,
    pub price: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount_price: Option<String>,
}

/// Size chart keyed by the fixed size codes. Absent codes are omitted
/// from the serialized form entirely.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductSizes {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub s: Option<SizeOption>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub m: Option<SizeOption>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub l: Option<SizeOption>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub xl: Option<SizeOption>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub xxl: Option<SizeOption>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductAdditive {
    pub name: String,
    pub price: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount_price: Option<String>,
}

/// Projection used by the menu listing and the favorites carousel:
/// everything except the serialized size chart and additives.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductListItem {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub price: String,
    pub discount_price: Option<String>,
    pub category: String,
}

/// Full product record for the detail view, with the stored JSON text
/// columns parsed back into their typed shapes.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDetail {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub price: String,
    pub discount_price: Option<String>,
    pub category: String,
    pub sizes: ProductSizes,
    pub additives: Vec<ProductAdditive>,
}

impl From<products::Model> for ProductListItem {
    fn from(model: products::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            description: model.description,
            price: model.price,
            discount_price: model.discount_price,
            category: model.category,
        }
    }
}

impl From<products::Model> for ProductDetail {
    fn from(model: products::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            description: model.description,
            price: model.price,
            discount_price: model.discount_price,
            category: model.category,
            sizes: serde_json::from_str(&model.sizes).unwrap_or_default(),
            additives: serde_json::from_str(&model.additives).unwrap_or_default(),
        }
    }
}

/// Input shape for product creation (seeding is the only writer).
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewProduct {
    pub name: String,
    pub description: String,
    pub price: String,
    #[serde(default)]
    pub discount_price: Option<String>,
    pub category: String,
    #[serde(default)]
    pub sizes: ProductSizes,
    #[serde(default)]
    pub additives: Vec<ProductAdditive>,
}
