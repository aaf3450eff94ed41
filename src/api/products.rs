use axum::{
    Json,
    extract::{Path, Query, State, rejection::PathRejection},
};
use serde::Deserialize;
use std::sync::Arc;

use super::validation::validate_product_id;
use super::{ApiError, ApiResponse, AppState};
use crate::models::product::{ProductDetail, ProductListItem};
use crate::services::products_service::ProductsError;

#[derive(Debug, Deserialize)]
pub struct ProductsQuery {
    pub category: Option<String>,
}

fn map_products_error(e: ProductsError, operation: &str) -> ApiError {
    match e {
        ProductsError::NotFound(_) => ApiError::NotFound(e.to_string()),
        ProductsError::Database(msg) | ProductsError::Internal(msg) => {
            tracing::error!("{}: {}", operation, msg);
            ApiError::internal(operation)
        }
    }
}

/// GET /products/favorites
pub async fn favorites(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ApiResponse<Vec<ProductListItem>>>, ApiError> {
    super::fault::maybe_inject_error()?;

    let products = state
        .products
        .favorite_products()
        .await
        .map_err(|e| map_products_error(e, "Failed to fetch favorite products"))?;

    Ok(Json(ApiResponse::success(products)))
}

/// GET /products
pub async fn list(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ProductsQuery>,
) -> Result<Json<ApiResponse<Vec<ProductListItem>>>, ApiError> {
    super::fault::maybe_inject_error()?;

    let products = state
        .products
        .all_products(query.category.as_deref())
        .await
        .map_err(|e| map_products_error(e, "Failed to fetch products"))?;

    Ok(Json(ApiResponse::success(products)))
}

/// GET /products/{id}
pub async fn get(
    State(state): State<Arc<AppState>>,
    id: Result<Path<i32>, PathRejection>,
) -> Result<Json<ApiResponse<ProductDetail>>, ApiError> {
    super::fault::maybe_inject_error()?;

    let Path(id) = id.map_err(|e| ApiError::validation(e.body_text()))?;
    let id = validate_product_id(id)?;

    let product = state
        .products
        .product_by_id(id)
        .await
        .map_err(|e| map_products_error(e, "Failed to fetch product"))?;

    Ok(Json(ApiResponse::success(product)))
}
