//! # API crate — registration endpoint and the wire types it shares with the client
//!
//! The web frontend and the server both depend on this crate. The wire types in
//! [`models`] and the credential guard in [`auth`] compile everywhere (including WASM);
//! everything that touches the database, the password hasher or axum sits behind the
//! `server` feature.
//!
//! ## Modules
//!
//! | Module | Feature gate | Purpose |
//! |--------|-------------|---------|
//! | [`auth`] | — | Credential state from the `token` cookie, the anonymous-only guard; Argon2 hashing and the guard middleware behind `server` |
//! | [`db`] | `server` | `UserStore` trait, lazily connected Postgres store, in-memory store |
//! | [`error`] | `server` | `RegisterError` and its mapping onto the fixed JSON response |
//! | [`models`] | — | `RegisterRequest`, `ApiResponse`, response messages; the `User` row behind `server` |
//! | [`register`] | `server` | The `POST /api/auth/register` handler and its router |
//! | [`settings`] | `server` | Layered configuration (defaults, `signup.toml`, `SIGNUP_*` env) |

pub mod auth;
#[cfg(feature = "server")]
pub mod db;
#[cfg(feature = "server")]
pub mod error;
pub mod models;
#[cfg(feature = "server")]
pub mod register;
#[cfg(feature = "server")]
pub mod settings;

pub use auth::{guard_registration, CredentialState, GuardDecision};
pub use models::{ApiResponse, RegisterRequest, REGISTER_PATH};

#[cfg(feature = "server")]
pub use register::{router, AppState};
#[cfg(feature = "server")]
pub use settings::Settings;
