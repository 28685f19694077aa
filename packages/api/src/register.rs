//! # `POST /api/auth/register`
//!
//! Flow of one request, awaited step by step:
//!
//! 1. Any method other than POST answers 405 (router fallback).
//! 2. The body must be a JSON object whose `email`, `password` and `name` are strings
//!    when present. Email is trimmed and lowercased, name trimmed.
//! 3. Schema rules run field by field (email, password, name) and the first violation
//!    becomes the 400 message.
//! 4. An existing account for the email answers 409.
//! 5. The password is hashed with Argon2id on the blocking pool.
//! 6. The row is inserted. A unique-index clash at this point is also a 409.
//! 7. 201 with the confirmation message.
//!
//! Anything else that fails is logged and answered with the generic 500 body.

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    routing::post,
    Json, Router,
};
use serde_json::Value;
use std::sync::Arc;
use validator::{Validate, ValidationError, ValidationErrors};

use crate::auth::PasswordHashing;
use crate::db::{store_from_settings, UserStore};
use crate::error::RegisterError;
use crate::models::{messages, ApiResponse, NewUser, RegisterRequest, REGISTER_PATH};
use crate::settings::Settings;

const MALFORMED_BODY: &str = "request body must be a JSON object";

/// Schema order; the first field with a violation decides the message.
const FIELD_ORDER: [&str; 3] = ["email", "password", "name"];

/// Within one field, presence is reported before emptiness before format.
const RULE_ORDER: [&str; 4] = ["required", "empty", "length", "email"];

/// Shared state of the registration router.
#[derive(Clone)]
pub struct AppState {
    pub users: Arc<dyn UserStore>,
    pub hasher: PasswordHashing,
}

impl AppState {
    pub fn new(users: Arc<dyn UserStore>, hasher: PasswordHashing) -> Self {
        Self { users, hasher }
    }

    pub fn from_settings(settings: &Settings) -> Result<Self, String> {
        Ok(Self {
            users: store_from_settings(settings),
            hasher: PasswordHashing::new(settings.password)?,
        })
    }
}

/// Router serving the registration endpoint.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route(REGISTER_PATH, post(register).fallback(method_not_allowed))
        .with_state(state)
}

async fn method_not_allowed() -> RegisterError {
    RegisterError::MethodNotAllowed
}

/// Register a new user with email, password and name.
pub async fn register(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<(StatusCode, Json<ApiResponse>), RegisterError> {
    let Json(body) = body.map_err(|e| {
        tracing::debug!("Rejected register body: {}", e);
        RegisterError::InvalidInput(MALFORMED_BODY.to_string())
    })?;

    let request = RegisterPayload::from_value(&body)?.into_request()?;
    tracing::info!(email = %request.email, "Register API called");

    // Fast path only; the unique index decides under concurrency.
    if state.users.find_by_email(&request.email).await?.is_some() {
        tracing::warn!(email = %request.email, "Registration for existing email");
        return Err(RegisterError::Conflict);
    }

    let password_hash = state
        .hasher
        .hash_blocking(request.password)
        .await
        .map_err(RegisterError::Internal)?;

    let user = state
        .users
        .create(NewUser::new(request.email, request.name, password_hash))
        .await?;

    tracing::info!(user_id = %user.id, email = %user.email, "Account created");

    Ok((StatusCode::CREATED, Json(ApiResponse::ok(messages::CREATED))))
}

/// The posted body after type checks and normalisation, before schema rules.
#[derive(Debug, Default, Validate)]
struct RegisterPayload {
    #[validate(
        required(message = "email is required"),
        custom(function = "not_empty"),
        email(message = "email must be a valid email"),
        custom(function = "dotted_domain")
    )]
    email: Option<String>,

    #[validate(
        required(message = "password is required"),
        custom(function = "not_empty"),
        length(min = 8, message = "password length must be at least 8 characters long")
    )]
    password: Option<String>,

    #[validate(required(message = "name is required"), custom(function = "not_empty"))]
    name: Option<String>,
}

impl RegisterPayload {
    fn from_value(body: &Value) -> Result<Self, RegisterError> {
        let Some(object) = body.as_object() else {
            return Err(RegisterError::InvalidInput(MALFORMED_BODY.to_string()));
        };

        let mut fields = FIELD_ORDER.iter().map(|&field| match object.get(field) {
            None => Ok(None),
            Some(Value::String(value)) => Ok(Some(value.clone())),
            Some(_) => Err(RegisterError::InvalidInput(format!("{field} must be a string"))),
        });

        let email = fields.next().transpose()?.flatten();
        let password = fields.next().transpose()?.flatten();
        let name = fields.next().transpose()?.flatten();

        Ok(Self {
            email: email.map(|e| e.trim().to_lowercase()),
            password,
            name: name.map(|n| n.trim().to_string()),
        })
    }

    fn into_request(self) -> Result<RegisterRequest, RegisterError> {
        self.validate()
            .map_err(|errors| RegisterError::InvalidInput(first_violation(&errors)))?;

        match (self.email, self.password, self.name) {
            (Some(email), Some(password), Some(name)) => Ok(RegisterRequest {
                email,
                password,
                name,
            }),
            _ => Err(RegisterError::Internal(
                "validated payload is missing a field".to_string(),
            )),
        }
    }
}

fn not_empty(value: &str) -> Result<(), ValidationError> {
    if value.is_empty() {
        return Err(ValidationError::new("empty"));
    }
    Ok(())
}

/// Mailbox domains need a dot and an alphabetic top-level label, so `ada@localhost`
/// is rejected even though it parses as an address.
fn dotted_domain(value: &str) -> Result<(), ValidationError> {
    let valid = value
        .rsplit_once('@')
        .and_then(|(_, domain)| domain.rsplit_once('.'))
        .is_some_and(|(host, tld)| {
            !host.is_empty() && tld.len() >= 2 && tld.chars().all(|c| c.is_ascii_alphabetic())
        });

    if valid {
        return Ok(());
    }
    Err(ValidationError::new("email").with_message("email must be a valid email".into()))
}

fn first_violation(errors: &ValidationErrors) -> String {
    let fields = errors.field_errors();

    FIELD_ORDER
        .iter()
        .find_map(|&field| {
            let violations = fields.get(field)?;
            let first = RULE_ORDER
                .iter()
                .find_map(|&rule| violations.iter().find(|v| v.code == rule))
                .or_else(|| violations.first())?;

            Some(match &first.message {
                Some(message) => message.to_string(),
                None if first.code == "empty" => format!("{field} is not allowed to be empty"),
                None => format!("{field} is invalid"),
            })
        })
        .unwrap_or_else(|| errors.to_string())
}
