//! Transient notifications.
//!
//! [`ToastProvider`] owns the toast stack and renders it as a fixed overlay;
//! [`use_toast`] hands any view a handle to push messages. Toasts dismiss
//! themselves after a few seconds or on click.

use dioxus::prelude::*;

const DISMISS_AFTER_SECS: u64 = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastTone {
    Success,
    Info,
    Warning,
    Danger,
}

impl ToastTone {
    fn class(self) -> &'static str {
        match self {
            ToastTone::Success => "toast toast--success",
            ToastTone::Info => "toast toast--info",
            ToastTone::Warning => "toast toast--warning",
            ToastTone::Danger => "toast toast--danger",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
struct ToastMessage {
    id: u64,
    text: String,
    tone: ToastTone,
}

/// Handle for pushing notifications. Copy-cheap; clones share the stack.
#[derive(Clone, Copy, PartialEq)]
pub struct ToastHandle {
    messages: Signal<Vec<ToastMessage>>,
    next_id: Signal<u64>,
}

impl ToastHandle {
    /// Show a message; it auto-dismisses after a few seconds.
    pub fn notify(&mut self, text: impl Into<String>, tone: ToastTone) {
        let id = {
            let mut next = self.next_id;
            let id = next();
            next.set(id + 1);
            id
        };
        let mut messages = self.messages;
        messages.write().push(ToastMessage {
            id,
            text: text.into(),
            tone,
        });

        spawn(async move {
            sleep_secs(DISMISS_AFTER_SECS).await;
            messages.write().retain(|m| m.id != id);
        });
    }

    pub fn success(&mut self, text: impl Into<String>) {
        self.notify(text, ToastTone::Success);
    }

    pub fn danger(&mut self, text: impl Into<String>) {
        self.notify(text, ToastTone::Danger);
    }

    pub fn warning(&mut self, text: impl Into<String>) {
        self.notify(text, ToastTone::Warning);
    }

    fn dismiss(&mut self, id: u64) {
        self.messages.write().retain(|m| m.id != id);
    }
}

async fn sleep_secs(secs: u64) {
    #[cfg(target_arch = "wasm32")]
    gloo_timers::future::sleep(std::time::Duration::from_secs(secs)).await;
    #[cfg(not(target_arch = "wasm32"))]
    tokio::time::sleep(std::time::Duration::from_secs(secs)).await;
}

/// Get the toast handle.
pub fn use_toast() -> ToastHandle {
    use_context::<ToastHandle>()
}

/// Provider component; wrap the app with it once.
#[component]
pub fn ToastProvider(children: Element) -> Element {
    let messages = use_signal(Vec::new);
    let next_id = use_signal(|| 0u64);
    let handle = use_context_provider(|| ToastHandle { messages, next_id });

    rsx! {
        {children}
        div {
            class: "toast-stack",
            aria_live: "polite",
            for message in messages() {
                ToastItem { key: "{message.id}", message: message.clone(), handle: handle }
            }
        }
    }
}

#[component]
fn ToastItem(message: ToastMessage, handle: ToastHandle) -> Element {
    let id = message.id;
    let mut handle = handle;
    rsx! {
        div {
            class: message.tone.class(),
            onclick: move |_| handle.dismiss(id),
            "{message.text}"
        }
    }
}
