//! HTTP client for the registration endpoint.

use api::{ApiResponse, RegisterRequest, REGISTER_PATH};

/// Origin used outside the browser when `SIGNUP_PUBLIC_URL` is not set.
const DEFAULT_ORIGIN: &str = "http://localhost:8080";

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("unreadable response (status {0})")]
    Status(u16),
}

/// Sends a registration request and returns the endpoint's `{ success, message }` body,
/// whatever the HTTP status.
#[allow(async_fn_in_trait)]
pub trait RegisterTransport {
    async fn register(&self, request: &RegisterRequest) -> Result<ApiResponse, TransportError>;
}

#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
    origin: String,
}

impl HttpTransport {
    pub fn new(origin: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            origin: origin.into(),
        }
    }

    /// Transport for the origin that served the page.
    pub fn same_origin() -> Self {
        #[cfg(target_arch = "wasm32")]
        {
            let origin = web_sys::window()
                .and_then(|window| window.location().origin().ok())
                .unwrap_or_else(|| DEFAULT_ORIGIN.to_string());
            Self::new(origin)
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            let origin =
                std::env::var("SIGNUP_PUBLIC_URL").unwrap_or_else(|_| DEFAULT_ORIGIN.to_string());
            Self::new(origin)
        }
    }

    pub fn endpoint(&self) -> String {
        format!("{}{}", self.origin.trim_end_matches('/'), REGISTER_PATH)
    }
}

impl RegisterTransport for HttpTransport {
    async fn register(&self, request: &RegisterRequest) -> Result<ApiResponse, TransportError> {
        let response = self.client.post(self.endpoint()).json(request).send().await?;

        let status = response.status();
        response.json::<ApiResponse>().await.map_err(|e| {
            tracing::debug!("Register response was not JSON: {}", e);
            TransportError::Status(status.as_u16())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use api::auth::{PasswordCost, PasswordHashing};
    use api::db::MemoryUserStore;
    use api::AppState;
    use axum::{http::StatusCode, routing::post, Router};
    use std::sync::Arc;
    use tokio::net::TcpListener;

    /// Serve `app` on an ephemeral local port and return its origin.
    async fn serve(app: Router) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{addr}")
    }

    fn registration_app() -> Router {
        let hasher = PasswordHashing::new(PasswordCost {
            memory_kib: 1024,
            iterations: 1,
            parallelism: 1,
        })
        .unwrap();
        api::router(AppState::new(Arc::new(MemoryUserStore::new()), hasher))
    }

    fn ada() -> RegisterRequest {
        RegisterRequest {
            email: "ada@example.com".to_string(),
            password: "longenough1".to_string(),
            name: "Ada".to_string(),
        }
    }

    #[test]
    fn test_endpoint_joins_origin_and_path() {
        assert_eq!(
            HttpTransport::new("https://app.example.com").endpoint(),
            "https://app.example.com/api/auth/register"
        );
        assert_eq!(
            HttpTransport::new("http://localhost:8080/").endpoint(),
            "http://localhost:8080/api/auth/register"
        );
    }

    #[tokio::test]
    async fn test_server_messages_reach_caller_verbatim() {
        let transport = HttpTransport::new(serve(registration_app()).await);

        let created = transport.register(&ada()).await.unwrap();
        assert_eq!(created, ApiResponse::ok("Account created successfully"));

        let duplicate = transport.register(&ada()).await.unwrap();
        assert_eq!(duplicate, ApiResponse::failure("User Already Exist"));

        let short = RegisterRequest {
            email: "grace@example.com".to_string(),
            password: "short".to_string(),
            name: "Grace".to_string(),
        };
        let rejected = transport.register(&short).await.unwrap();
        assert_eq!(
            rejected,
            ApiResponse::failure("password length must be at least 8 characters long")
        );
    }

    #[tokio::test]
    async fn test_plain_text_reply_is_status_error() {
        let app = Router::new().route(
            REGISTER_PATH,
            post(|| async { (StatusCode::BAD_GATEWAY, "upstream unavailable") }),
        );
        let transport = HttpTransport::new(serve(app).await);

        let result = transport.register(&ada()).await;
        assert!(matches!(result, Err(TransportError::Status(502))));
    }
}
