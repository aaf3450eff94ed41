//! `SeaORM` implementation of the `AuthService` trait.

use async_trait::async_trait;
use sea_orm::SqlErr;
use tokio::task;

use crate::config::AuthConfig;
use crate::db::{NewUser, Store};
use crate::db::repositories::user::hash_password;
use crate::models::user::PublicUser;
use crate::services::auth_service::{AuthError, AuthPayload, AuthService, RegisterInput};
use crate::services::tokens;

pub struct SeaOrmAuthService {
    store: Store,
    auth_config: AuthConfig,
}

impl SeaOrmAuthService {
    #[must_use]
    pub const fn new(store: Store, auth_config: AuthConfig) -> Self {
        Self { store, auth_config }
    }

    fn issue_payload(&self, user: PublicUser) -> Result<AuthPayload, AuthError> {
        let access_token = tokens::issue_token(user.id, &user.login, &self.auth_config)
            .map_err(|e| AuthError::Internal(e.to_string()))?;

        Ok(AuthPayload { access_token, user })
    }
}

#[async_trait]
impl AuthService for SeaOrmAuthService {
    async fn register(&self, input: RegisterInput) -> Result<AuthPayload, AuthError> {
        if input.password != input.confirm_password {
            return Err(AuthError::PasswordMismatch);
        }

        // Pre-check keeps the common case friendly; the unique
        // constraint below still catches a concurrent duplicate.
        if self.store.get_user_by_login(&input.login).await?.is_some() {
            return Err(AuthError::LoginTaken);
        }

        let password = input.password.clone();
        let password_hash = task::spawn_blocking(move || hash_password(&password))
            .await
            .map_err(|e| AuthError::Internal(format!("Password hashing task panicked: {e}")))??;

        let created = self
            .store
            .create_user(NewUser {
                login: input.login,
                password_hash,
                city: input.city,
                street: input.street,
                house_number: input.house_number,
                payment_method: input.payment_method,
            })
            .await
            .map_err(|e| match e.sql_err() {
                Some(SqlErr::UniqueConstraintViolation(_)) => AuthError::LoginTaken,
                _ => AuthError::Database(e.to_string()),
            })?;

        self.issue_payload(created)
    }

    async fn login(&self, login: &str, password: &str) -> Result<AuthPayload, AuthError> {
        let user = self
            .store
            .verify_credentials(login, password)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        self.issue_payload(user)
    }

    async fn get_user_by_id(&self, id: i32) -> Result<Option<PublicUser>, AuthError> {
        Ok(self.store.get_user_by_id(id).await?)
    }
}
