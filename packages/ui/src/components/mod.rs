//! Widget library shared by every page: buttons, form fields, badges,
//! alerts, modal, spinner, empty states. Styling lives in the web crate's
//! stylesheet; components only attach class names.

use dioxus::prelude::*;

mod toast;
pub use toast::{use_toast, ToastHandle, ToastProvider, ToastTone};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Ghost,
    Danger,
}

impl ButtonVariant {
    fn class(self) -> &'static str {
        match self {
            ButtonVariant::Primary => "btn btn--primary",
            ButtonVariant::Secondary => "btn btn--secondary",
            ButtonVariant::Ghost => "btn btn--ghost",
            ButtonVariant::Danger => "btn btn--danger",
        }
    }
}

#[component]
pub fn Button(
    #[props(default)] variant: ButtonVariant,
    #[props(default)] disabled: bool,
    onclick: EventHandler<MouseEvent>,
    children: Element,
) -> Element {
    rsx! {
        button {
            class: variant.class(),
            r#type: "button",
            disabled: disabled,
            onclick: move |evt| onclick.call(evt),
            {children}
        }
    }
}

#[component]
pub fn Input(
    id: String,
    #[props(default = "text".to_string())] r#type: String,
    value: String,
    #[props(default)] placeholder: Option<String>,
    #[props(default)] has_error: bool,
    oninput: EventHandler<FormEvent>,
) -> Element {
    let input_type = r#type;
    rsx! {
        input {
            id: "{id}",
            class: if has_error { "input input--error" } else { "input" },
            r#type: "{input_type}",
            value: "{value}",
            placeholder: placeholder.unwrap_or_default(),
            oninput: move |evt| oninput.call(evt),
        }
    }
}

#[component]
pub fn Select(
    id: String,
    value: String,
    onchange: EventHandler<FormEvent>,
    children: Element,
) -> Element {
    rsx! {
        select {
            id: "{id}",
            class: "select",
            value: "{value}",
            onchange: move |evt| onchange.call(evt),
            {children}
        }
    }
}

#[component]
pub fn Label(html_for: String, children: Element) -> Element {
    rsx! {
        label {
            class: "label",
            r#for: "{html_for}",
            {children}
        }
    }
}

/// Label + control + optional hint/error, the one wrapper every form uses.
#[component]
pub fn FormField(
    label: String,
    html_for: String,
    #[props(default)] hint: Option<String>,
    #[props(default)] error: Option<String>,
    #[props(default)] required: bool,
    children: Element,
) -> Element {
    rsx! {
        div {
            class: "form-field",
            Label {
                html_for: html_for,
                "{label}"
                if required {
                    span { class: "form-field__required", aria_hidden: "true", " *" }
                }
            }
            {children}
            if let Some(hint) = hint {
                p { class: "form-field__hint", "{hint}" }
            }
            if let Some(error) = error {
                p { class: "form-field__error", role: "alert", "{error}" }
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BadgeTone {
    #[default]
    Neutral,
    Success,
    Info,
    Warning,
    Danger,
}

impl BadgeTone {
    fn class(self) -> &'static str {
        match self {
            BadgeTone::Neutral => "badge badge--neutral",
            BadgeTone::Success => "badge badge--success",
            BadgeTone::Info => "badge badge--info",
            BadgeTone::Warning => "badge badge--warning",
            BadgeTone::Danger => "badge badge--danger",
        }
    }
}

#[component]
pub fn Badge(#[props(default)] tone: BadgeTone, children: Element) -> Element {
    rsx! {
        span { class: tone.class(), {children} }
    }
}

#[component]
pub fn Alert(
    #[props(default = BadgeTone::Info)] tone: BadgeTone,
    title: String,
    children: Element,
) -> Element {
    let class = match tone {
        BadgeTone::Success => "alert alert--success",
        BadgeTone::Warning => "alert alert--warning",
        BadgeTone::Danger => "alert alert--danger",
        _ => "alert alert--info",
    };
    rsx! {
        div {
            class: class,
            role: "status",
            strong { class: "alert__title", "{title}" }
            div { class: "alert__body", {children} }
        }
    }
}

/// Overlay dialog. Clicking the backdrop closes it; clicks inside do not
/// propagate out.
#[component]
pub fn Modal(
    open: bool,
    title: String,
    #[props(default)] description: Option<String>,
    on_close: EventHandler<()>,
    children: Element,
) -> Element {
    if !open {
        return rsx! {};
    }
    rsx! {
        div {
            class: "modal-overlay",
            onclick: move |_| on_close.call(()),
            div {
                class: "modal",
                role: "dialog",
                aria_label: "{title}",
                onclick: move |evt: Event<MouseData>| evt.stop_propagation(),
                h2 { class: "modal__title", "{title}" }
                if let Some(description) = description {
                    p { class: "modal__description", "{description}" }
                }
                {children}
            }
        }
    }
}

#[component]
pub fn Spinner(#[props(default)] label: Option<String>) -> Element {
    rsx! {
        div {
            class: "spinner",
            role: "status",
            span { class: "spinner__dot", aria_hidden: "true" }
            if let Some(label) = label {
                span { class: "spinner__label", "{label}" }
            }
        }
    }
}

#[component]
pub fn EmptyState(
    title: String,
    description: String,
    #[props(default)] action: Option<Element>,
) -> Element {
    rsx! {
        div {
            class: "empty-state",
            h3 { "{title}" }
            p { "{description}" }
            if let Some(action) = action {
                div { class: "empty-state__action", {action} }
            }
        }
    }
}

#[component]
pub fn PageHeader(
    title: String,
    #[props(default)] subtitle: Option<String>,
    #[props(default)] actions: Option<Element>,
) -> Element {
    rsx! {
        header {
            class: "page-header",
            div {
                h1 { class: "page-header__title", "{title}" }
                if let Some(subtitle) = subtitle {
                    p { class: "page-header__subtitle", "{subtitle}" }
                }
            }
            if let Some(actions) = actions {
                div { class: "page-header__actions", {actions} }
            }
        }
    }
}
