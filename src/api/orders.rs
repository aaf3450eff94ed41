use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
};
use std::sync::Arc;

use super::auth::{CurrentUser, MaybeUser};
use super::validation::validate_order;
use super::{ApiError, ApiResponse, AppState};
use crate::models::order::{OrderConfirmation, OrderRequest};

/// POST /orders/confirm
///
/// A bearer token is optional here: a valid one attributes the order to
/// its user, anything else falls back to anonymous.
pub async fn confirm(
    State(state): State<Arc<AppState>>,
    MaybeUser(user): MaybeUser,
    payload: Result<Json<OrderRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<ApiResponse<OrderConfirmation>>), ApiError> {
    super::fault::maybe_inject_error()?;

    let Json(order) = payload.map_err(|e| ApiError::validation(e.body_text()))?;
    validate_order(&order)?;

    let confirmation = state.orders.confirm(&order, user.as_ref());

    Ok((StatusCode::CREATED, Json(ApiResponse::success(confirmation))))
}

/// POST /orders/confirm-auth
pub async fn confirm_auth(
    State(state): State<Arc<AppState>>,
    CurrentUser(user): CurrentUser,
    payload: Result<Json<OrderRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<ApiResponse<OrderConfirmation>>), ApiError> {
    super::fault::maybe_inject_error()?;

    let Json(order) = payload.map_err(|e| ApiError::validation(e.body_text()))?;
    validate_order(&order)?;

    let confirmation = state.orders.confirm(&order, Some(&user));

    Ok((StatusCode::CREATED, Json(ApiResponse::success(confirmation))))
}
