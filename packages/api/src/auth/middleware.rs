//! Server-side pre-render guard.

use axum::{
    extract::Request,
    http::{header::COOKIE, Method},
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};

use super::guard::{guard_registration, CredentialState, GuardDecision, REGISTER_PAGE_PATH};

/// Redirect visitors who already hold a `token` cookie away from the registration page
/// before it is rendered. Every other request passes through untouched.
pub async fn anonymous_only(request: Request, next: Next) -> Response {
    if request.method() == Method::GET && request.uri().path() == REGISTER_PAGE_PATH {
        let credentials = request
            .headers()
            .get_all(COOKIE)
            .iter()
            .filter_map(|value| value.to_str().ok())
            .map(CredentialState::from_cookie_header)
            .find(|state| state.is_authenticated())
            .unwrap_or_default();

        if let GuardDecision::Redirect(target) = guard_registration(credentials) {
            tracing::debug!("Signed-in visitor redirected away from registration");
            return Redirect::to(target).into_response();
        }
    }

    next.run(request).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{header::LOCATION, Request as HttpRequest, StatusCode},
        routing::get,
        Router,
    };
    use tower::ServiceExt;

    fn app() -> Router {
        Router::new()
            .route(REGISTER_PAGE_PATH, get(|| async { "form" }))
            .route("/other", get(|| async { "other" }))
            .layer(axum::middleware::from_fn(anonymous_only))
    }

    fn get_with_cookie(path: &str, cookie: Option<&str>) -> HttpRequest<Body> {
        let mut builder = HttpRequest::builder().uri(path);
        if let Some(cookie) = cookie {
            builder = builder.header(COOKIE, cookie);
        }
        builder.body(Body::empty()).unwrap()
    }

    #[tokio::test]
    async fn test_signed_in_visitor_is_redirected() {
        let response = app()
            .oneshot(get_with_cookie(REGISTER_PAGE_PATH, Some("token=abc")))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(response.headers().get(LOCATION).unwrap(), "/");
    }

    #[tokio::test]
    async fn test_anonymous_visitor_sees_form() {
        let response = app()
            .oneshot(get_with_cookie(REGISTER_PAGE_PATH, Some("theme=dark")))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let response = app()
            .oneshot(get_with_cookie(REGISTER_PAGE_PATH, None))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_other_paths_ignore_token() {
        let response = app()
            .oneshot(get_with_cookie("/other", Some("token=abc")))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }
}
