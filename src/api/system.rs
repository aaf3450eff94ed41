use axum::Json;
use serde_json::{Value, json};

use super::ApiResponse;

/// GET /
///
/// Landing endpoint with a liveness message and the route map, handy
/// when poking the API from a browser or curl.
pub async fn app_info() -> Json<ApiResponse<Value>> {
    Json(ApiResponse::success_with_message(
        json!({
            "version": env!("CARGO_PKG_VERSION"),
            "endpoints": {
                "products": {
                    "favorites": "GET /products/favorites",
                    "list": "GET /products",
                    "detail": "GET /products/{id}",
                },
                "auth": {
                    "register": "POST /auth/register",
                    "login": "POST /auth/login",
                    "profile": "GET /auth/profile",
                },
                "orders": {
                    "confirm": "POST /orders/confirm",
                    "confirmAuth": "POST /orders/confirm-auth",
                },
            },
        }),
        "Coffee House API is running!",
    ))
}
