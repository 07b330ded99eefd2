use api::{ApiClient, RegisterRequest};
use dioxus::prelude::*;

use ui::components::{use_toast, Alert, BadgeTone, Button, FormField, Input, PageHeader};
use ui::{validate, ActionState};

use crate::Route;

#[component]
pub fn RegisterPage() -> Element {
    let client = use_context::<ApiClient>();
    let mut full_name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut address = use_signal(String::new);
    let mut phone = use_signal(String::new);
    let mut attempted = use_signal(|| false);
    let mut action = use_signal(ActionState::default);
    let mut toast = use_toast();
    let nav = use_navigator();

    let name_error = validate::required(&full_name(), "Full name is required.");
    let email_error = validate::email(&email());
    let password_error = validate::required(&password(), "Password is required.");
    let address_error = validate::required(&address(), "Address is required.");
    let phone_error = validate::required(&phone(), "Phone is required.");
    let has_field_errors = [
        &name_error,
        &email_error,
        &password_error,
        &address_error,
        &phone_error,
    ]
    .iter()
    .any(|e| e.is_some());
    let submit_error = action().error().map(str::to_string);
    let pending = action().is_pending();

    let handle_submit = {
        let client = client.clone();
        move |_| {
            attempted.set(true);
            if has_field_errors {
                return;
            }
            if !action.write().begin() {
                return;
            }
            let payload = RegisterRequest {
                email: email().trim().to_string(),
                full_name: full_name().trim().to_string(),
                password: password(),
                address: address().trim().to_string(),
                phone: phone().trim().to_string(),
            };
            let client = client.clone();
            spawn(async move {
                match client.register(&payload).await {
                    Ok(()) => {
                        action.write().finish(Ok(()));
                        toast.success("Account created successfully.");
                        nav.push(Route::LoginPage {});
                    }
                    Err(err) => {
                        tracing::warn!("registration failed: {err}");
                        let message = err
                            .server_message()
                            .unwrap_or("Unable to register. Please try again.")
                            .to_string();
                        action.write().finish(Err(message));
                    }
                }
            });
        }
    };

    let field_error = |error: &Option<String>| if attempted() { error.clone() } else { None };

    rsx! {
        section {
            PageHeader {
                title: "Create account",
                subtitle: "Register as a new customer.",
            }
            if let Some(message) = submit_error {
                Alert { tone: BadgeTone::Danger, title: "Registration error", "{message}" }
            }
            div {
                class: "card form",
                FormField {
                    label: "Full name",
                    html_for: "register-name",
                    error: field_error(&name_error),
                    required: true,
                    Input {
                        id: "register-name",
                        value: full_name(),
                        has_error: attempted() && name_error.is_some(),
                        oninput: move |evt: FormEvent| full_name.set(evt.value()),
                    }
                }
                FormField {
                    label: "Email",
                    html_for: "register-email",
                    error: field_error(&email_error),
                    required: true,
                    Input {
                        id: "register-email",
                        r#type: "email",
                        value: email(),
                        has_error: attempted() && email_error.is_some(),
                        oninput: move |evt: FormEvent| email.set(evt.value()),
                    }
                }
                FormField {
                    label: "Password",
                    html_for: "register-password",
                    error: field_error(&password_error),
                    required: true,
                    Input {
                        id: "register-password",
                        r#type: "password",
                        value: password(),
                        has_error: attempted() && password_error.is_some(),
                        oninput: move |evt: FormEvent| password.set(evt.value()),
                    }
                }
                FormField {
                    label: "Address",
                    html_for: "register-address",
                    error: field_error(&address_error),
                    required: true,
                    Input {
                        id: "register-address",
                        value: address(),
                        has_error: attempted() && address_error.is_some(),
                        oninput: move |evt: FormEvent| address.set(evt.value()),
                    }
                }
                FormField {
                    label: "Phone",
                    html_for: "register-phone",
                    error: field_error(&phone_error),
                    required: true,
                    Input {
                        id: "register-phone",
                        value: phone(),
                        has_error: attempted() && phone_error.is_some(),
                        oninput: move |evt: FormEvent| phone.set(evt.value()),
                    }
                }
                div {
                    class: "form-actions",
                    Button {
                        disabled: pending,
                        onclick: handle_submit,
                        if pending { "Creating account..." } else { "Create account" }
                    }
                }
            }
        }
    }
}
