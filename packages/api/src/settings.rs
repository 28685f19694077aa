//! Layered server configuration.
//!
//! Sources, lowest precedence first: built-in defaults, an optional `signup.toml` in the
//! working directory, `SIGNUP_*` environment variables (`__` separates nesting levels,
//! e.g. `SIGNUP_DATABASE__HOST`), and finally `DATABASE_URL` if set.

use config::{builder::DefaultState, Config, ConfigBuilder, ConfigError, Environment, File, FileFormat};
use serde::Deserialize;
use std::time::Duration;

use crate::auth::PasswordCost;

/// Which [`UserStore`](crate::db::UserStore) the server runs against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StoreBackend {
    Postgres,
    Memory,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Database {
    pub backend: StoreBackend,
    pub user: String,
    pub password: String,
    pub host: String,
    pub port: u16,
    pub database: String,
    /// Full connection string; wins over the individual fields.
    pub url: Option<String>,
    pub max_connections: u32,
    pub acquire_timeout_secs: u64,
}

impl Database {
    pub fn url(&self) -> String {
        match &self.url {
            Some(url) => url.clone(),
            None => format!(
                "postgres://{}:{}@{}:{}/{}",
                self.user, self.password, self.host, self.port, self.database
            ),
        }
    }

    pub fn acquire_timeout(&self) -> Duration {
        Duration::from_secs(self.acquire_timeout_secs)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub database: Database,
    pub password: PasswordCost,
}

impl Settings {
    /// Read settings from `signup.toml`, the environment and `.env`.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let mut builder = defaults()?
            .add_source(
                File::with_name("signup")
                    .format(FileFormat::Toml)
                    .required(false),
            )
            .add_source(
                Environment::with_prefix("SIGNUP")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            );

        if let Ok(url) = std::env::var("DATABASE_URL") {
            builder = builder.set_override("database.url", url)?;
        }

        builder.build()?.try_deserialize()
    }

    /// Settings from defaults overlaid with a TOML document.
    pub fn from_toml(toml: &str) -> Result<Self, ConfigError> {
        defaults()?
            .add_source(File::from_str(toml, FileFormat::Toml))
            .build()?
            .try_deserialize()
    }
}

fn defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    let cost = PasswordCost::default();

    Config::builder()
        .set_default("database.backend", "postgres")?
        .set_default("database.user", "signup")?
        .set_default("database.password", "password")?
        .set_default("database.host", "localhost")?
        .set_default("database.port", 5432_i64)?
        .set_default("database.database", "signup")?
        .set_default("database.max_connections", 5_i64)?
        .set_default("database.acquire_timeout_secs", 5_i64)?
        .set_default("password.memory_kib", i64::from(cost.memory_kib))?
        .set_default("password.iterations", i64::from(cost.iterations))?
        .set_default("password.parallelism", i64::from(cost.parallelism))
}
