use dioxus::prelude::*;

use crate::Route;

#[component]
pub fn Home() -> Element {
    rsx! {
        div {
            class: "auth-page",

            div {
                class: "auth-card",

                h1 { class: "auth-title", "Welcome" }

                p {
                    class: "auth-footer",
                    Link { class: "auth-link", to: Route::Register {}, "Create an account" }
                    " or "
                    Link { class: "auth-link", to: Route::Login {}, "sign in" }
                }
            }
        }
    }
}
