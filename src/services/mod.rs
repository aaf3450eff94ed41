pub mod auth_service;
pub mod auth_service_impl;
pub use auth_service::{AuthError, AuthPayload, AuthService, RegisterInput};
pub use auth_service_impl::SeaOrmAuthService;

pub mod products_service;
pub mod products_service_impl;
pub use products_service::{ProductsError, ProductsService};
pub use products_service_impl::SeaOrmProductsService;

pub mod orders;
pub use orders::OrdersService;

pub mod seed;
pub use seed::SeedService;

pub mod tokens;
