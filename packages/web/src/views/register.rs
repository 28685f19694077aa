//! Registration page view with name/email/password form.

use api::{guard_registration, GuardDecision};
use dioxus::prelude::*;
use ui::{
    show_toast, use_credentials, use_toasts, Effect, HttpTransport, RegisterFields,
    RegisterFormState, RegisterTransport,
};

use crate::Route;

/// Register page component.
#[component]
pub fn Register() -> Element {
    let nav = use_navigator();
    let credentials = use_credentials();
    let mut toasts = use_toasts();
    let mut fields = use_signal(RegisterFields::default);
    let mut form = use_signal(RegisterFormState::default);

    // Registration is only for anonymous visitors
    let redirect = matches!(guard_registration(credentials), GuardDecision::Redirect(_));
    use_effect(move || {
        if redirect {
            nav.replace(Route::Home {});
        }
    });
    if redirect {
        return rsx! {};
    }

    let handle_register = move |evt: FormEvent| {
        evt.prevent_default();
        spawn(async move {
            let request = {
                let mut state = form.write();
                if !state.begin_submit() {
                    return;
                }
                state.validate(&fields())
            };
            let Some(request) = request else {
                return;
            };

            let result = HttpTransport::same_origin().register(&request).await;
            let effects = form.write().finish(result);

            for effect in effects {
                match effect {
                    Effect::Toast(kind, message) => {
                        show_toast(&mut toasts, kind, &message);
                    }
                    Effect::RedirectToLogin { after } => {
                        ui::sleep(after).await;
                        form.write().start_redirect();
                        nav.push(Route::Login {});
                    }
                }
            }
        });
    };

    let errors = form().errors;
    let busy = form().is_busy();

    rsx! {
        div {
            class: "auth-page",

            div {
                class: "auth-card",

                h1 {
                    class: "auth-title",
                    "Register your account"
                }

                form {
                    onsubmit: handle_register,
                    class: "auth-form",

                    div {
                        class: "auth-field",
                        label { r#for: "name", "Your Name" }
                        input {
                            r#type: "text",
                            name: "name",
                            id: "name",
                            placeholder: "Name",
                            value: "{fields().name}",
                            oninput: move |evt: FormEvent| fields.write().name = evt.value(),
                        }
                        if let Some(err) = errors.name {
                            p { class: "auth-error", "{err}" }
                        }
                    }

                    div {
                        class: "auth-field",
                        label { r#for: "email", "Your email" }
                        input {
                            r#type: "email",
                            name: "email",
                            id: "email",
                            placeholder: "name@company.com",
                            value: "{fields().email}",
                            oninput: move |evt: FormEvent| fields.write().email = evt.value(),
                        }
                        if let Some(err) = errors.email {
                            p { class: "auth-error", "{err}" }
                        }
                    }

                    div {
                        class: "auth-field",
                        label { r#for: "password", "Password" }
                        input {
                            r#type: "password",
                            name: "password",
                            id: "password",
                            placeholder: "••••••••",
                            value: "{fields().password}",
                            oninput: move |evt: FormEvent| fields.write().password = evt.value(),
                        }
                        if let Some(err) = errors.password {
                            p { class: "auth-error", "{err}" }
                        }
                    }

                    button {
                        class: "auth-submit",
                        r#type: "submit",
                        disabled: busy,
                        if busy { "Creating account..." } else { "Sign Up" }
                    }

                    p {
                        class: "auth-footer",
                        "Already have an account? "
                        Link {
                            class: "auth-link",
                            to: Route::Login {},
                            "Sign In"
                        }
                    }
                }
            }
        }
    }
}
