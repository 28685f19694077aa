//! # Database module — user persistence
//!
//! The registration endpoint talks to storage only through [`UserStore`], so the same
//! handler runs against Postgres in production and against [`MemoryUserStore`] in tests
//! or a database-less dev server.
//!
//! ## Uniqueness
//!
//! Email uniqueness is a storage invariant. `PgUserStore` relies on the
//! `users_email_key` unique index and `MemoryUserStore` checks under its lock; both
//! report a clash as [`StoreError::Duplicate`]. The endpoint's own lookup before insert
//! is only a fast path and may race.
//!
//! ## Re-exports
//!
//! - [`PgUserStore`] — lazily connected sqlx pool, migrations applied on first use.
//! - [`MemoryUserStore`] — `HashMap` keyed by email.

mod memory;
mod pool;

use async_trait::async_trait;
use std::sync::Arc;

use crate::models::{NewUser, User};
use crate::settings::{Settings, StoreBackend};

pub use memory::MemoryUserStore;
pub use pool::PgUserStore;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("a user with this email already exists")]
    Duplicate,
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),
}

/// The users collection.
#[async_trait]
pub trait UserStore: Send + Sync {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, StoreError>;

    /// Insert a new user. Fails with [`StoreError::Duplicate`] if the email is taken.
    async fn create(&self, user: NewUser) -> Result<User, StoreError>;
}

/// Build the store selected by `database.backend`.
pub fn store_from_settings(settings: &Settings) -> Arc<dyn UserStore> {
    match settings.database.backend {
        StoreBackend::Postgres => Arc::new(PgUserStore::new(settings.database.clone())),
        StoreBackend::Memory => {
            tracing::warn!("Using in-memory user store, accounts are lost on restart");
            Arc::new(MemoryUserStore::new())
        }
    }
}
