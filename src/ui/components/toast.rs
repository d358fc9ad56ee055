use std::time::Duration;

use dioxus::prelude::*;

use crate::util::generate_id;

const TOAST_AUTO_DISMISS: Duration = Duration::from_secs(5);
const TOAST_LIMIT: usize = 5;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Info,
    Warning,
    Error,
}

impl ToastKind {
    fn icon(&self) -> &'static str {
        match self {
            ToastKind::Info => "ℹ️",
            ToastKind::Warning => "⚠️",
            ToastKind::Error => "⛔",
        }
    }

    fn class(&self) -> &'static str {
        match self {
            ToastKind::Info => "toast toast-info",
            ToastKind::Warning => "toast toast-warning",
            ToastKind::Error => "toast toast-error",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ToastMessage {
    pub id: String,
    pub kind: ToastKind,
    pub text: String,
}

pub fn push_toast(mut toasts: Signal<Vec<ToastMessage>>, kind: ToastKind, text: impl Into<String>) {
    let message = ToastMessage {
        id: generate_id("toast"),
        kind,
        text: text.into(),
    };
    toasts.with_mut(|entries| {
        if entries.len() >= TOAST_LIMIT {
            entries.remove(0);
        }
        entries.push(message);
    });
}

#[component]
pub fn Toasts() -> Element {
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();
    let messages = toasts();

    rsx! {
        ul { class: "toasts",
            for message in messages {
                ToastCard { key: "{message.id}", message: message.clone(), toasts }
            }
        }
    }
}

#[component]
fn ToastCard(message: ToastMessage, toasts: Signal<Vec<ToastMessage>>) -> Element {
    let id = message.id.clone();
    let _auto_dismiss = use_future(move || {
        let id = id.clone();
        let mut toasts = toasts;
        async move {
            tokio::time::sleep(TOAST_AUTO_DISMISS).await;
            toasts.with_mut(|items| items.retain(|toast| toast.id != id));
        }
    });

    let id = message.id.clone();
    let mut toasts = toasts;
    rsx! {
        li { class: "{message.kind.class()}",
            span { "{message.kind.icon()}" }
            p { "{message.text}" }
            button {
                onclick: move |_| toasts.with_mut(|items| items.retain(|toast| toast.id != id)),
                "Dismiss"
            }
        }
    }
}
