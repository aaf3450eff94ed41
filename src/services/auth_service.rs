//! Domain service for registration, login and identity lookup.

use serde::Serialize;
use thiserror::Error;

use crate::models::user::{PaymentMethod, PublicUser};

/// Errors specific to authentication operations.
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("Passwords do not match")]
    PasswordMismatch,

    #[error("User with this login already exists")]
    LoginTaken,

    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Database error: {0}")]
    Database(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<sea_orm::DbErr> for AuthError {
    fn from(err: sea_orm::DbErr) -> Self {
        Self::Database(err.to_string())
    }
}

impl From<anyhow::Error> for AuthError {
    fn from(err: anyhow::Error) -> Self {
        Self::Internal(err.to_string())
    }
}

/// Registration input, already shape-checked by the API layer.
#[derive(Debug, Clone)]
pub struct RegisterInput {
    pub login: String,
    pub password: String,
    pub confirm_password: String,
    pub city: String,
    pub street: String,
    pub house_number: i32,
    pub payment_method: PaymentMethod,
}

/// Result of a successful registration or login.
#[derive(Debug, Clone, Serialize)]
pub struct AuthPayload {
    pub access_token: String,
    pub user: PublicUser,
}

/// Domain service trait for authentication.
#[async_trait::async_trait]
pub trait AuthService: Send + Sync {
    /// Creates a user and issues an access token.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::PasswordMismatch`] when the confirmation
    /// differs and [`AuthError::LoginTaken`] for a duplicate login.
    async fn register(&self, input: RegisterInput) -> Result<AuthPayload, AuthError>;

    /// Verifies credentials and issues an access token.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::InvalidCredentials`] for both an unknown
    /// login and a wrong password.
    async fn login(&self, login: &str, password: &str) -> Result<AuthPayload, AuthError>;

    /// Looks up a user by ID, used to attach the caller identity once a
    /// token has been verified.
    async fn get_user_by_id(&self, id: i32) -> Result<Option<PublicUser>, AuthError>;
}
