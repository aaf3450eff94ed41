use anyhow::{Context, Result};
use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, Set};
use tokio::task;

use crate::entities::users;
use crate::models::user::{PaymentMethod, PublicUser};

/// Fields needed to persist a registration. The password arrives
/// pre-hashed; plaintext never reaches the repository.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub login: String,
    pub password_hash: String,
    pub city: String,
    pub street: String,
    pub house_number: i32,
    pub payment_method: PaymentMethod,
}

pub struct UserRepository {
    conn: DatabaseConnection,
}

impl UserRepository {
    #[must_use]
    pub const fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    /// Get user by login, without the password hash
    pub async fn get_by_login(&self, login: &str) -> Result<Option<PublicUser>> {
        let user = users::Entity::find()
            .filter(users::Column::Login.eq(login))
            .one(&self.conn)
            .await
            .context("Failed to query user by login")?;

        Ok(user.map(PublicUser::from))
    }

    /// Get user by ID, without the password hash
    pub async fn get_by_id(&self, id: i32) -> Result<Option<PublicUser>> {
        let user = users::Entity::find_by_id(id)
            .one(&self.conn)
            .await
            .context("Failed to query user by ID")?;

        Ok(user.map(PublicUser::from))
    }

    /// Verify credentials; returns the user on success, `None` for both
    /// an unknown login and a wrong password so callers cannot tell the
    /// two apart. Argon2 verification runs under `spawn_blocking`.
    pub async fn verify_credentials(
        &self,
        login: &str,
        password: &str,
    ) -> Result<Option<PublicUser>> {
        let user = users::Entity::find()
            .filter(users::Column::Login.eq(login))
            .one(&self.conn)
            .await
            .context("Failed to query user for credential verification")?;

        let Some(user) = user else {
            return Ok(None);
        };

        let password_hash = user.password_hash.clone();
        let password = password.to_string();

        let is_valid = task::spawn_blocking(move || {
            let parsed_hash = PasswordHash::new(&password_hash)
                .map_err(|e| anyhow::anyhow!("Invalid password hash format: {e}"))?;

            let argon2 = Argon2::default();
            Ok::<bool, anyhow::Error>(
                argon2
                    .verify_password(password.as_bytes(), &parsed_hash)
                    .is_ok(),
            )
        })
        .await
        .context("Password verification task panicked")??;

        Ok(is_valid.then(|| PublicUser::from(user)))
    }

    /// Insert a new user. Errors pass through unwrapped so callers can
    /// inspect `DbErr::sql_err()` for the unique-constraint case and map
    /// a duplicate login that slipped past the pre-check to a conflict.
    pub async fn insert(&self, new: NewUser) -> Result<PublicUser, DbErr> {
        let now = chrono::Utc::now().to_rfc3339();

        let active = users::ActiveModel {
            login: Set(new.login),
            password_hash: Set(new.password_hash),
            city: Set(new.city),
            street: Set(new.street),
            house_number: Set(new.house_number),
            payment_method: Set(new.payment_method),
            created_at: Set(now),
            ..Default::default()
        };

        let model = active.insert(&self.conn).await?;
        Ok(PublicUser::from(model))
    }
}

/// Hash a password with Argon2id and a fresh random salt.
pub fn hash_password(password: &str) -> Result<String> {
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();

    let hash = argon2
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| anyhow::anyhow!("Failed to hash password: {e}"))?;

    Ok(hash.to_string())
}
