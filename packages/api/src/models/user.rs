//! # User account model and registration wire types
//!
//! ## [`User`] (server only)
//!
//! The complete row from the `users` table, loadable with [`sqlx::FromRow`]:
//!
//! - `id` — primary key (`UUID v4`, generated by the application).
//! - `email` — trimmed, lowercased; unique through the `users_email_key` index.
//! - `name` — trimmed display name.
//! - `password_hash` — Argon2id PHC string. The plaintext is never stored.
//! - `created_at` — set by the database.
//!
//! ## [`RegisterRequest`] / [`ApiResponse`]
//!
//! The JSON body the form posts and the `{ success, message }` body every outcome of the
//! endpoint answers with. Both are plain `Serialize + Deserialize` so they build for WASM.

use serde::{Deserialize, Serialize};

#[cfg(feature = "server")]
use chrono::{DateTime, Utc};
#[cfg(feature = "server")]
use sqlx::FromRow;
#[cfg(feature = "server")]
use uuid::Uuid;

/// Full user record from the database.
#[cfg(feature = "server")]
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    pub name: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

/// A validated account waiting to be inserted.
#[cfg(feature = "server")]
#[derive(Debug, Clone)]
pub struct NewUser {
    pub id: Uuid,
    pub email: String,
    pub name: String,
    pub password_hash: String,
}

#[cfg(feature = "server")]
impl NewUser {
    pub fn new(email: String, name: String, password_hash: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            email,
            name,
            password_hash,
        }
    }
}

/// Body posted by the registration form.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    pub name: String,
}

/// Body of every registration response, successful or not.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApiResponse {
    pub success: bool,
    pub message: String,
}

impl ApiResponse {
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
        }
    }
}
