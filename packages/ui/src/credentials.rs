//! Credential state of the current visitor.

use api::CredentialState;
use dioxus::prelude::*;

/// Read the credential state from the browser's cookies.
///
/// Outside the browser there is no cookie jar to read; the server applies the same
/// guard to the request's `Cookie` header before rendering.
pub fn read_credentials() -> CredentialState {
    #[cfg(target_arch = "wasm32")]
    {
        use wasm_bindgen::JsCast;

        let cookies = web_sys::window()
            .and_then(|window| window.document())
            .and_then(|document| document.dyn_into::<web_sys::HtmlDocument>().ok())
            .and_then(|document| document.cookie().ok())
            .unwrap_or_default();
        CredentialState::from_cookie_header(&cookies)
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        CredentialState::Anonymous
    }
}

/// Credential state captured once when the calling component mounts.
pub fn use_credentials() -> CredentialState {
    use_hook(read_credentials)
}
