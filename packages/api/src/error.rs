//! Registration failures and their HTTP mapping.
//!
//! Every variant renders as `{ "success": false, "message": ... }`. Internal failures
//! carry their cause for the log only; clients always get the generic retry message.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::db::StoreError;
use crate::models::{messages, ApiResponse};

#[derive(Debug, thiserror::Error)]
pub enum RegisterError {
    #[error("method not allowed")]
    MethodNotAllowed,
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("user already exists")]
    Conflict,
    #[error("internal error: {0}")]
    Internal(String),
}

impl RegisterError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            Self::InvalidInput(_) => StatusCode::BAD_REQUEST,
            Self::Conflict => StatusCode::CONFLICT,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// The message shown to the client.
    pub fn public_message(&self) -> &str {
        match self {
            Self::MethodNotAllowed => messages::METHOD_NOT_ALLOWED,
            Self::InvalidInput(detail) => detail,
            Self::Conflict => messages::ALREADY_EXISTS,
            Self::Internal(_) => messages::INTERNAL,
        }
    }
}

impl From<StoreError> for RegisterError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Duplicate => Self::Conflict,
            other => Self::Internal(other.to_string()),
        }
    }
}

impl IntoResponse for RegisterError {
    fn into_response(self) -> Response {
        if let Self::Internal(ref cause) = self {
            tracing::error!("Error in register: {}", cause);
        }

        let body = ApiResponse::failure(self.public_message());
        (self.status(), Json(body)).into_response()
    }
}
