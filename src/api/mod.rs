use axum::{
    Router,
    http::HeaderValue,
    routing::{get, post},
};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::db::Store;
use crate::services::{
    AuthService, OrdersService, ProductsService, SeaOrmAuthService, SeaOrmProductsService,
};

pub mod auth;
mod error;
mod fault;
mod orders;
mod products;
mod system;
pub mod types;
mod validation;

pub use error::ApiError;
pub use types::*;

#[derive(Clone)]
pub struct AppState {
    pub store: Store,

    pub config: Arc<Config>,

    pub auth: Arc<dyn AuthService>,

    pub products: Arc<dyn ProductsService>,

    pub orders: OrdersService,
}

pub async fn create_app_state(config: Config) -> anyhow::Result<Arc<AppState>> {
    let store = Store::with_pool_options(
        &config.general.database_path,
        config.general.max_db_connections,
        config.general.min_db_connections,
    )
    .await?;

    let auth = Arc::new(SeaOrmAuthService::new(store.clone(), config.auth.clone()));
    let products = Arc::new(SeaOrmProductsService::new(store.clone()));

    Ok(Arc::new(AppState {
        store,
        config: Arc::new(config),
        auth,
        products,
        orders: OrdersService::new(),
    }))
}

pub fn router(state: Arc<AppState>) -> Router {
    let cors_origins = state.config.server.cors_allowed_origins.clone();

    let cors_layer = if cors_origins.contains(&"*".to_string()) {
        CorsLayer::new().allow_origin(Any)
    } else {
        let origins: Vec<HeaderValue> =
            cors_origins.iter().filter_map(|s| s.parse().ok()).collect();
        CorsLayer::new().allow_origin(origins)
    };

    Router::new()
        .route("/", get(system::app_info))
        .route("/products/favorites", get(products::favorites))
        .route("/products", get(products::list))
        .route("/products/{id}", get(products::get))
        .route("/auth/register", post(auth::register))
        .route("/auth/login", post(auth::login))
        .route("/auth/profile", get(auth::profile))
        .route("/orders/confirm", post(orders::confirm))
        .route("/orders/confirm-auth", post(orders::confirm_auth))
        .layer(cors_layer.allow_methods(Any).allow_headers(Any))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
