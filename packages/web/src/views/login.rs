use dioxus::prelude::*;

use ui::components::{use_toast, Alert, BadgeTone, Button, FormField, Input, PageHeader};
use ui::{use_session, validate, ActionState};

use crate::Route;

#[component]
pub fn LoginPage() -> Element {
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut attempted = use_signal(|| false);
    let mut action = use_signal(ActionState::default);
    let session = use_session();
    let mut toast = use_toast();
    let nav = use_navigator();

    let email_error = validate::email(&email());
    let password_error = validate::required(&password(), "Password is required.");
    let has_field_errors = email_error.is_some() || password_error.is_some();
    let submit_error = action().error().map(str::to_string);
    let pending = action().is_pending();

    let handle_submit = {
        let session = session.clone();
        move |_| {
            attempted.set(true);
            if has_field_errors {
                return;
            }
            if !action.write().begin() {
                return;
            }
            let email = email().trim().to_string();
            let password = password();
            let mut session = session.clone();
            spawn(async move {
                match session.login(&email, &password).await {
                    Ok(_) => {
                        action.write().finish(Ok(()));
                        toast.success("Welcome back!");
                        nav.push(Route::CarsPage {});
                    }
                    Err(err) => {
                        tracing::warn!("login failed: {err}");
                        action.write().finish(Err(
                            "Login failed. Check your credentials and try again.".to_string(),
                        ));
                    }
                }
            });
        }
    };

    rsx! {
        section {
            PageHeader {
                title: "Sign in",
                subtitle: "Access your account to manage rentals.",
            }
            if let Some(message) = submit_error {
                Alert { tone: BadgeTone::Danger, title: "Authentication error", "{message}" }
            }
            div {
                class: "card form",
                FormField {
                    label: "Email",
                    html_for: "login-email",
                    error: if attempted() { email_error.clone() } else { None },
                    required: true,
                    Input {
                        id: "login-email",
                        r#type: "email",
                        value: email(),
                        has_error: attempted() && email_error.is_some(),
                        oninput: move |evt: FormEvent| email.set(evt.value()),
                    }
                }
                FormField {
                    label: "Password",
                    html_for: "login-password",
                    error: if attempted() { password_error.clone() } else { None },
                    required: true,
                    Input {
                        id: "login-password",
                        r#type: "password",
                        value: password(),
                        has_error: attempted() && password_error.is_some(),
                        oninput: move |evt: FormEvent| password.set(evt.value()),
                    }
                }
                div {
                    class: "form-actions",
                    Button {
                        disabled: pending,
                        onclick: handle_submit,
                        if pending { "Signing in..." } else { "Sign in" }
                    }
                }
            }
        }
    }
}
