//! Anonymous-only guard for the registration view.
//!
//! The guard never reads ambient storage. Callers hand it the credential state of the
//! current request: the server derives it from the `Cookie` header, the browser from
//! `document.cookie`. Both strings share the `name=value; name=value` format parsed by
//! [`CredentialState::from_cookie_header`].

/// Cookie whose presence marks a signed-in visitor.
pub const TOKEN_COOKIE: &str = "token";

/// Path of the registration page.
pub const REGISTER_PAGE_PATH: &str = "/auth/register";

/// Where signed-in visitors are sent instead.
pub const HOME_PATH: &str = "/";

/// Whether the visitor already carries an authentication cookie.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CredentialState {
    #[default]
    Anonymous,
    Authenticated,
}

impl CredentialState {
    /// Derive the credential state from a cookie header value.
    pub fn from_cookie_header(header: &str) -> Self {
        let has_token = header.split(';').any(|pair| {
            let mut parts = pair.trim().splitn(2, '=');
            let name = parts.next().unwrap_or_default().trim();
            let value = parts.next().unwrap_or_default().trim();
            name == TOKEN_COOKIE && !value.is_empty()
        });

        if has_token {
            Self::Authenticated
        } else {
            Self::Anonymous
        }
    }

    pub fn is_authenticated(self) -> bool {
        self == Self::Authenticated
    }
}

/// Outcome of the pre-render check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardDecision {
    Render,
    Redirect(&'static str),
}

/// Registration is only reachable for anonymous visitors.
pub fn guard_registration(credentials: CredentialState) -> GuardDecision {
    match credentials {
        CredentialState::Anonymous => GuardDecision::Render,
        CredentialState::Authenticated => GuardDecision::Redirect(HOME_PATH),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_cookie_marks_authenticated() {
        let state = CredentialState::from_cookie_header("theme=dark; token=abc123");
        assert_eq!(state, CredentialState::Authenticated);
        assert_eq!(guard_registration(state), GuardDecision::Redirect("/"));
    }

    #[test]
    fn test_missing_token_is_anonymous() {
        for header in ["", "theme=dark", "tokens=abc", "mytoken=abc", "token="] {
            let state = CredentialState::from_cookie_header(header);
            assert_eq!(state, CredentialState::Anonymous, "header: {header:?}");
            assert_eq!(guard_registration(state), GuardDecision::Render);
        }
    }

    #[test]
    fn test_whitespace_around_pairs() {
        let state = CredentialState::from_cookie_header("  a=1 ;   token = xyz ");
        assert!(state.is_authenticated());
    }
}
