//! This crate contains the client half of the registration flow: form state, the HTTP
//! transport to the endpoint, toast notifications and the credential read that feeds
//! the anonymous-only guard.

use std::time::Duration;

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

mod credentials;
pub use credentials::{read_credentials, use_credentials};

pub mod register_form;
pub use register_form::{
    Effect, FieldErrors, FormPhase, RegisterFields, RegisterFormState, NETWORK_ERROR,
    REDIRECT_DELAY,
};

mod transport;
pub use transport::{HttpTransport, RegisterTransport, TransportError};

pub mod toast;
pub use toast::{show_toast, use_toasts, ToastKind, ToastProvider, Toasts};

/// Sleep on whichever timer the target provides.
pub async fn sleep(duration: Duration) {
    #[cfg(target_arch = "wasm32")]
    gloo_timers::future::sleep(duration).await;
    #[cfg(not(target_arch = "wasm32"))]
    tokio::time::sleep(duration).await;
}
