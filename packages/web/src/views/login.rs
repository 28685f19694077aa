//! Login page view. New accounts land here after registering.

use dioxus::prelude::*;

use crate::Route;

/// Login page component.
#[component]
pub fn Login() -> Element {
    rsx! {
        div {
            class: "auth-page",

            div {
                class: "auth-card",

                h1 {
                    class: "auth-title",
                    "Sign in to your account"
                }

                p {
                    class: "auth-footer",
                    "Your account is ready. Sign-in opens soon."
                }

                p {
                    class: "auth-footer",
                    "Don't have an account yet? "
                    Link {
                        class: "auth-link",
                        to: Route::Register {},
                        "Sign Up"
                    }
                }
            }
        }
    }
}
