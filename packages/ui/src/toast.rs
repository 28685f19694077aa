//! Toast notifications.
//!
//! [`ToastProvider`] puts a `Signal<Toasts>` into context and renders the stack on top of
//! its children. Anything below it can call [`show_toast`]. Each toast closes itself
//! after [`TOAST_LIFETIME`] or when its close button is pressed.

use std::time::Duration;

use dioxus::prelude::*;

use crate::icons::{FaCircleCheck, FaCircleExclamation, FaXmark};
use crate::Icon;

const TOAST_CSS: Asset = asset!("/assets/styling/toast.css");

pub const TOAST_LIFETIME: Duration = Duration::from_secs(5);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub message: String,
}

#[derive(Clone, Debug, Default)]
pub struct Toasts {
    next_id: u64,
    entries: Vec<Toast>,
}

impl Toasts {
    pub fn push(&mut self, kind: ToastKind, message: &str) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.entries.push(Toast {
            id,
            kind,
            message: message.to_string(),
        });
        id
    }

    pub fn dismiss(&mut self, id: u64) {
        self.entries.retain(|toast| toast.id != id);
    }

    pub fn entries(&self) -> &[Toast] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

pub fn use_toasts() -> Signal<Toasts> {
    use_context::<Signal<Toasts>>()
}

pub fn show_toast(toasts: &mut Signal<Toasts>, kind: ToastKind, message: &str) -> u64 {
    toasts.write().push(kind, message)
}

#[component]
pub fn ToastProvider(children: Element) -> Element {
    let toasts = use_signal(Toasts::default);
    use_context_provider(|| toasts);

    rsx! {
        {children}
        ToastContainer {}
    }
}

#[component]
fn ToastContainer() -> Element {
    let toasts = use_toasts();
    let entries = toasts().entries().to_vec();

    rsx! {
        document::Stylesheet { href: TOAST_CSS }

        div {
            class: "toast-container",
            for toast in entries {
                ToastItem { key: "{toast.id}", toast }
            }
        }
    }
}

#[component]
fn ToastItem(toast: Toast) -> Element {
    let mut toasts = use_toasts();
    let id = toast.id;

    use_future(move || async move {
        crate::sleep(TOAST_LIFETIME).await;
        toasts.write().dismiss(id);
    });

    let (class, icon) = match toast.kind {
        ToastKind::Success => (
            "toast toast--success",
            rsx! { Icon { icon: FaCircleCheck, width: 16, height: 16 } },
        ),
        ToastKind::Error => (
            "toast toast--error",
            rsx! { Icon { icon: FaCircleExclamation, width: 16, height: 16 } },
        ),
    };

    rsx! {
        div {
            class: class,
            role: "status",
            {icon}
            span { class: "toast-message", "{toast.message}" }
            button {
                class: "toast-close",
                title: "Close",
                onclick: move |_| toasts.write().dismiss(id),
                Icon { icon: FaXmark, width: 12, height: 12 }
            }
        }
    }
}
