//! # Registration form state
//!
//! The view keeps a [`RegisterFields`] for the inputs and a [`RegisterFormState`] for
//! everything else, and walks the state through one submission:
//!
//! ```text
//! Idle ─submit─▶ Validating ─┬─ checks fail ──▶ (Invalid) ─▶ Idle, inline errors
//!                            └─ checks pass ──▶ Submitting ─┬─ accepted ─▶ Success ─▶ Redirecting
//!                                                           └─ rejected ─▶ (Failure) ─▶ Idle, error toast
//! ```
//!
//! Invalid and Failure are passed through within a single step, so they never show up
//! as a resting [`FormPhase`].
//!
//! The client checks mirror the server's presence and length rules to spare a round
//! trip. They are a convenience only; the endpoint validates again.

use std::time::Duration;

use api::{ApiResponse, RegisterRequest};

use crate::toast::ToastKind;
use crate::transport::TransportError;

/// Minimum password length, as enforced by the endpoint.
pub const MIN_PASSWORD_LEN: usize = 8;

/// Pause between the success toast and the move to the login view.
pub const REDIRECT_DELAY: Duration = Duration::from_secs(2);

/// Shown when the endpoint cannot be reached or answers garbage.
pub const NETWORK_ERROR: &str = "Network error. Please try again.";

const NAME_REQUIRED: &str = "Name Field is required";
const EMAIL_REQUIRED: &str = "Email Field is required";
const PASSWORD_REQUIRED: &str = "Password Field is required";
const PASSWORD_TOO_SHORT: &str = "Password must be at least 8 characters";

/// Editable values of the form inputs.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RegisterFields {
    pub name: String,
    pub email: String,
    pub password: String,
}

impl RegisterFields {
    /// Client-side checks. Every failing field gets its own message.
    pub fn check(&self) -> Result<RegisterRequest, FieldErrors> {
        let mut errors = FieldErrors::default();

        if self.name.is_empty() {
            errors.name = Some(NAME_REQUIRED.to_string());
        }
        if self.email.is_empty() {
            errors.email = Some(EMAIL_REQUIRED.to_string());
        }
        if self.password.is_empty() {
            errors.password = Some(PASSWORD_REQUIRED.to_string());
        } else if self.password.chars().count() < MIN_PASSWORD_LEN {
            errors.password = Some(PASSWORD_TOO_SHORT.to_string());
        }

        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(RegisterRequest {
            email: self.email.clone(),
            password: self.password.clone(),
            name: self.name.clone(),
        })
    }
}

/// Inline, per-field error messages.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldErrors {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.count() == 0
    }

    pub fn count(&self) -> usize {
        [&self.name, &self.email, &self.password]
            .iter()
            .filter(|e| e.is_some())
            .count()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FormPhase {
    #[default]
    Idle,
    Validating,
    Submitting,
    Success,
    Redirecting,
}

/// Side effects the view must carry out after a submission settles.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    Toast(ToastKind, String),
    RedirectToLogin { after: Duration },
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RegisterFormState {
    pub phase: FormPhase,
    pub errors: FieldErrors,
}

impl RegisterFormState {
    /// Start a submission. Returns false while another one is still in flight.
    pub fn begin_submit(&mut self) -> bool {
        if self.phase != FormPhase::Idle {
            return false;
        }
        self.phase = FormPhase::Validating;
        self.errors = FieldErrors::default();
        true
    }

    /// Run the client checks. On success the form moves to Submitting and the request
    /// to send is returned; otherwise the errors are kept and the form is Idle again.
    pub fn validate(&mut self, fields: &RegisterFields) -> Option<RegisterRequest> {
        match fields.check() {
            Ok(request) => {
                self.phase = FormPhase::Submitting;
                Some(request)
            }
            Err(errors) => {
                self.errors = errors;
                self.phase = FormPhase::Idle;
                None
            }
        }
    }

    /// Settle a submission with the transport's result.
    pub fn finish(&mut self, result: Result<ApiResponse, TransportError>) -> Vec<Effect> {
        let response = result.unwrap_or_else(|e| {
            tracing::warn!("Registration request failed: {}", e);
            ApiResponse::failure(NETWORK_ERROR)
        });

        if response.success {
            self.phase = FormPhase::Success;
            vec![
                Effect::Toast(ToastKind::Success, response.message),
                Effect::RedirectToLogin {
                    after: REDIRECT_DELAY,
                },
            ]
        } else {
            self.phase = FormPhase::Idle;
            vec![Effect::Toast(ToastKind::Error, response.message)]
        }
    }

    /// The redirect delay has elapsed and navigation is under way.
    pub fn start_redirect(&mut self) {
        if self.phase == FormPhase::Success {
            self.phase = FormPhase::Redirecting;
        }
    }

    pub fn is_busy(&self) -> bool {
        self.phase != FormPhase::Idle
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transport::RegisterTransport;
    use std::cell::{Cell, RefCell};

    /// Transport that answers from a script and counts requests.
    struct FakeTransport {
        reply: RefCell<Option<Result<ApiResponse, TransportError>>>,
        calls: Cell<usize>,
    }

    impl FakeTransport {
        fn answering(reply: Result<ApiResponse, TransportError>) -> Self {
            Self {
                reply: RefCell::new(Some(reply)),
                calls: Cell::new(0),
            }
        }
    }

    impl RegisterTransport for FakeTransport {
        async fn register(&self, _request: &RegisterRequest) -> Result<ApiResponse, TransportError> {
            self.calls.set(self.calls.get() + 1);
            self.reply
                .borrow_mut()
                .take()
                .unwrap_or_else(|| Err(TransportError::Status(503)))
        }
    }

    /// Drive one submission the way the view does.
    async fn submit(
        state: &mut RegisterFormState,
        fields: &RegisterFields,
        transport: &FakeTransport,
    ) -> Vec<Effect> {
        if !state.begin_submit() {
            return Vec::new();
        }
        let Some(request) = state.validate(fields) else {
            return Vec::new();
        };
        let result = transport.register(&request).await;
        state.finish(result)
    }

    fn ada() -> RegisterFields {
        RegisterFields {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            password: "longenough1".to_string(),
        }
    }

    #[tokio::test]
    async fn test_empty_form_shows_three_errors_without_request() {
        let transport = FakeTransport::answering(Ok(ApiResponse::ok("unused")));
        let mut state = RegisterFormState::default();

        let effects = submit(&mut state, &RegisterFields::default(), &transport).await;

        assert!(effects.is_empty());
        assert_eq!(transport.calls.get(), 0);
        assert_eq!(state.phase, FormPhase::Idle);
        assert_eq!(state.errors.count(), 3);
        assert_eq!(state.errors.name.as_deref(), Some("Name Field is required"));
        assert_eq!(state.errors.email.as_deref(), Some("Email Field is required"));
        assert_eq!(
            state.errors.password.as_deref(),
            Some("Password Field is required")
        );
    }

    #[tokio::test]
    async fn test_short_password_shows_only_length_error() {
        let transport = FakeTransport::answering(Ok(ApiResponse::ok("unused")));
        let mut state = RegisterFormState::default();
        let fields = RegisterFields {
            password: "seven77".to_string(),
            ..ada()
        };

        submit(&mut state, &fields, &transport).await;

        assert_eq!(transport.calls.get(), 0);
        assert_eq!(state.errors.count(), 1);
        assert_eq!(
            state.errors.password.as_deref(),
            Some("Password must be at least 8 characters")
        );
    }

    #[tokio::test]
    async fn test_successful_registration_toasts_and_redirects() {
        let transport =
            FakeTransport::answering(Ok(ApiResponse::ok("Account created successfully")));
        let mut state = RegisterFormState::default();

        let effects = submit(&mut state, &ada(), &transport).await;

        assert_eq!(transport.calls.get(), 1);
        assert_eq!(state.phase, FormPhase::Success);
        assert!(state.errors.is_empty());
        assert_eq!(
            effects,
            vec![
                Effect::Toast(ToastKind::Success, "Account created successfully".to_string()),
                Effect::RedirectToLogin {
                    after: Duration::from_secs(2)
                },
            ]
        );

        state.start_redirect();
        assert_eq!(state.phase, FormPhase::Redirecting);
    }

    #[tokio::test]
    async fn test_server_message_is_shown_verbatim() {
        let transport = FakeTransport::answering(Ok(ApiResponse::failure("User Already Exist")));
        let mut state = RegisterFormState::default();

        let effects = submit(&mut state, &ada(), &transport).await;

        assert_eq!(
            effects,
            vec![Effect::Toast(ToastKind::Error, "User Already Exist".to_string())]
        );
        assert_eq!(state.phase, FormPhase::Idle);
    }

    #[tokio::test]
    async fn test_network_failure_shows_generic_error() {
        let transport = FakeTransport::answering(Err(TransportError::Status(502)));
        let mut state = RegisterFormState::default();

        let effects = submit(&mut state, &ada(), &transport).await;

        assert_eq!(
            effects,
            vec![Effect::Toast(ToastKind::Error, NETWORK_ERROR.to_string())]
        );
        assert_eq!(state.phase, FormPhase::Idle);
    }

    #[test]
    fn test_resubmit_clears_previous_errors() {
        let mut state = RegisterFormState::default();
        assert!(state.begin_submit());
        assert!(state.validate(&RegisterFields::default()).is_none());
        assert!(!state.errors.is_empty());

        assert!(state.begin_submit());
        assert!(state.errors.is_empty());
        assert!(state.validate(&ada()).is_some());
        assert_eq!(state.phase, FormPhase::Submitting);
    }

    #[test]
    fn test_no_second_submit_while_in_flight() {
        let mut state = RegisterFormState::default();
        assert!(state.begin_submit());
        state.validate(&ada());

        assert!(state.is_busy());
        assert!(!state.begin_submit());
        assert_eq!(state.phase, FormPhase::Submitting);
    }
}
