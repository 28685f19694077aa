//! Postgres-backed user store with a lazily opened connection pool.

use async_trait::async_trait;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use tokio::sync::OnceCell;

use super::{StoreError, UserStore};
use crate::models::{NewUser, User};
use crate::settings::Database;

/// User store over the `users` table.
///
/// Nothing is opened until the first query. The first caller connects and runs the
/// migrations; later callers share the pool. A failed attempt leaves the cell empty so
/// the next request tries again.
pub struct PgUserStore {
    config: Database,
    pool: OnceCell<PgPool>,
}

impl PgUserStore {
    pub fn new(config: Database) -> Self {
        Self {
            config,
            pool: OnceCell::new(),
        }
    }

    /// Get or initialize the connection pool.
    pub async fn get_pool(&self) -> Result<&PgPool, StoreError> {
        self.pool
            .get_or_try_init(|| async {
                let pool = PgPoolOptions::new()
                    .max_connections(self.config.max_connections)
                    .acquire_timeout(self.config.acquire_timeout())
                    .connect(&self.config.url())
                    .await?;

                sqlx::migrate!("./migrations").run(&pool).await?;
                tracing::info!("Connected to database and applied migrations");

                Ok::<_, StoreError>(pool)
            })
            .await
    }
}

#[async_trait]
impl UserStore for PgUserStore {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, StoreError> {
        let pool = self.get_pool().await?;

        let user: Option<User> = sqlx::query_as("SELECT * FROM users WHERE email = $1")
            .bind(email)
            .fetch_optional(pool)
            .await?;

        Ok(user)
    }

    async fn create(&self, user: NewUser) -> Result<User, StoreError> {
        let pool = self.get_pool().await?;

        sqlx::query_as::<_, User>(
            "INSERT INTO users (id, email, name, password_hash) VALUES ($1, $2, $3, $4) RETURNING *",
        )
        .bind(user.id)
        .bind(&user.email)
        .bind(&user.name)
        .bind(&user.password_hash)
        .fetch_one(pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db) if db.is_unique_violation() => StoreError::Duplicate,
            other => StoreError::Database(other),
        })
    }
}
