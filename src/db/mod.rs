use anyhow::Result;
use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection, DbErr, Statement};
use std::path::Path;
use std::time::Duration;
use tracing::info;

use crate::entities::products;
use crate::models::product::NewProduct;
use crate::models::user::PublicUser;

pub mod migrator;
pub mod repositories;

pub use repositories::user::NewUser;

#[derive(Clone)]
pub struct Store {
    pub conn: DatabaseConnection,
}

impl Store {
    pub async fn new(db_url: &str) -> Result<Self> {
        Self::with_pool_options(db_url, 5, 1).await
    }

    pub async fn with_pool_options(
        db_url: &str,
        max_connections: u32,
        min_connections: u32,
    ) -> Result<Self> {
        use sea_orm_migration::MigratorTrait;

        if !db_url.contains(":memory:") {
            let path_str = db_url.trim_start_matches("sqlite:");
            if let Some(parent) = Path::new(path_str).parent() {
                tokio::fs::create_dir_all(parent).await.ok();
            }
            if !Path::new(path_str).exists() {
                std::fs::File::create(path_str)?;
            }
        }

        let mut opt = ConnectOptions::new(db_url.to_string());
        opt.max_connections(max_connections)
            .min_connections(min_connections)
            .connect_timeout(Duration::from_secs(10))
            .acquire_timeout(Duration::from_secs(10))
            .idle_timeout(Duration::from_secs(300))
            .max_lifetime(Duration::from_secs(600))
            .sqlx_logging(false);

        let conn = Database::connect(opt).await?;

        migrator::Migrator::up(&conn, None).await?;

        info!(
            "Database connected & migrations applied (pool: {}-{})",
            min_connections, max_connections
        );

        Ok(Self { conn })
    }

    pub async fn ping(&self) -> Result<()> {
        let backend = self.conn.get_database_backend();
        self.conn
            .query_one(Statement::from_string(backend, "SELECT 1".to_string()))
            .await?;
        Ok(())
    }

    fn user_repo(&self) -> repositories::user::UserRepository {
        repositories::user::UserRepository::new(self.conn.clone())
    }

    fn product_repo(&self) -> repositories::product::ProductRepository {
        repositories::product::ProductRepository::new(self.conn.clone())
    }

    // ========== Users ==========

    pub async fn get_user_by_login(&self, login: &str) -> Result<Option<PublicUser>> {
        self.user_repo().get_by_login(login).await
    }

    pub async fn get_user_by_id(&self, id: i32) -> Result<Option<PublicUser>> {
        self.user_repo().get_by_id(id).await
    }

    pub async fn verify_credentials(
        &self,
        login: &str,
        password: &str,
    ) -> Result<Option<PublicUser>> {
        self.user_repo().verify_credentials(login, password).await
    }

    pub async fn create_user(&self, new: NewUser) -> Result<PublicUser, DbErr> {
        self.user_repo().insert(new).await
    }

    // ========== Products ==========

    pub async fn list_products(&self) -> Result<Vec<products::Model>> {
        self.product_repo().list_all().await
    }

    pub async fn list_products_by_category(&self, category: &str) -> Result<Vec<products::Model>> {
        self.product_repo().list_by_category(category).await
    }

    pub async fn get_product(&self, id: i32) -> Result<Option<products::Model>> {
        self.product_repo().get(id).await
    }

    pub async fn count_products(&self) -> Result<u64> {
        self.product_repo().count().await
    }

    pub async fn insert_products(&self, items: &[NewProduct]) -> Result<u64> {
        self.product_repo().insert_many(items).await
    }
}
