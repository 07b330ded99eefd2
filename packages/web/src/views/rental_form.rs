use api::{ApiClient, RentalCreate};
use chrono::NaiveDate;
use dioxus::prelude::*;

use store::Role;
use ui::components::{
    use_toast, Alert, BadgeTone, Button, ButtonVariant, FormField, Input, PageHeader,
};
use ui::{validate, ActionState, RequireAuth};

use crate::Route;

#[component]
pub fn RentalNewPage() -> Element {
    rsx! {
        RequireAuth {
            roles: vec![Role::Staff, Role::Admin],
            RentalForm {}
        }
    }
}

#[component]
fn RentalForm() -> Element {
    let client = use_context::<ApiClient>();
    let mut toast = use_toast();
    let nav = use_navigator();

    let mut customer = use_signal(String::new);
    let mut car = use_signal(String::new);
    let mut issue_date = use_signal(String::new);
    let mut expected_return = use_signal(String::new);
    let mut deposit = use_signal(String::new);
    let mut attempted = use_signal(|| false);
    let mut action = use_signal(ActionState::default);

    let customer_error = validate::numeric_id(&customer(), "Customer ID is required.");
    let car_error = validate::numeric_id(&car(), "Car ID is required.");
    let issue_error = validate::iso_date(&issue_date(), "Issue date is required.");
    let expected_error =
        validate::iso_date(&expected_return(), "Expected return date is required.");
    let deposit_error = validate::decimal_amount(&deposit(), "Deposit amount is required.");
    let has_field_errors = [
        &customer_error,
        &car_error,
        &issue_error,
        &expected_error,
        &deposit_error,
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
            let (Ok(customer_id), Ok(car_id), Ok(issue), Ok(expected)) = (
                customer.peek().trim().parse::<i64>(),
                car.peek().trim().parse::<i64>(),
                issue_date.peek().trim().parse::<NaiveDate>(),
                expected_return.peek().trim().parse::<NaiveDate>(),
            ) else {
                return;
            };
            if !action.write().begin() {
                return;
            }
            let payload = RentalCreate {
                customer: customer_id,
                car: car_id,
                issue_date: issue,
                expected_return_date: expected,
                deposit_amount: deposit.peek().trim().to_string(),
            };
            let client = client.clone();
            spawn(async move {
                match client.create_rental(&payload).await {
                    Ok(_) => {
                        action.write().finish(Ok(()));
                        toast.success("Rental issued successfully.");
                        nav.push(Route::RentalsPage {});
                    }
                    Err(err) => {
                        tracing::warn!("rental create failed: {err}");
                        let message = err
                            .server_message()
                            .unwrap_or("Unable to create rental. Confirm the customer and car IDs.")
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
                title: "Issue rental",
                subtitle: "Create a new rental and hold the deposit.",
            }
            if let Some(message) = submit_error {
                Alert { tone: BadgeTone::Danger, title: "Form error", "{message}" }
            }
            div {
                class: "card form",
                div {
                    class: "form-row",
                    FormField {
                        label: "Customer ID",
                        html_for: "rental-customer",
                        error: field_error(&customer_error),
                        required: true,
                        Input {
                            id: "rental-customer",
                            value: customer(),
                            has_error: attempted() && customer_error.is_some(),
                            oninput: move |evt: FormEvent| customer.set(evt.value()),
                        }
                    }
                    FormField {
                        label: "Car ID",
                        html_for: "rental-car",
                        error: field_error(&car_error),
                        required: true,
                        Input {
                            id: "rental-car",
                            value: car(),
                            has_error: attempted() && car_error.is_some(),
                            oninput: move |evt: FormEvent| car.set(evt.value()),
                        }
                    }
                }
                div {
                    class: "form-row",
                    FormField {
                        label: "Issue date",
                        html_for: "rental-issue",
                        error: field_error(&issue_error),
                        required: true,
                        Input {
                            id: "rental-issue",
                            r#type: "date",
                            value: issue_date(),
                            has_error: attempted() && issue_error.is_some(),
                            oninput: move |evt: FormEvent| issue_date.set(evt.value()),
                        }
                    }
                    FormField {
                        label: "Expected return date",
                        html_for: "rental-expected",
                        error: field_error(&expected_error),
                        required: true,
                        Input {
                            id: "rental-expected",
                            r#type: "date",
                            value: expected_return(),
                            has_error: attempted() && expected_error.is_some(),
                            oninput: move |evt: FormEvent| expected_return.set(evt.value()),
                        }
                    }
                }
                FormField {
                    label: "Deposit amount",
                    html_for: "rental-deposit",
                    hint: "The deposit will be held until the rental is closed.",
                    error: field_error(&deposit_error),
                    required: true,
                    Input {
                        id: "rental-deposit",
                        value: deposit(),
                        has_error: attempted() && deposit_error.is_some(),
                        oninput: move |evt: FormEvent| deposit.set(evt.value()),
                    }
                }
                Alert {
                    tone: BadgeTone::Info,
                    title: "Double booking checks",
                    "The backend will prevent double booking. Please confirm the car is available before issuing the rental."
                }
                div {
                    class: "form-actions",
                    Button {
                        variant: ButtonVariant::Ghost,
                        onclick: move |_| { nav.push(Route::RentalsPage {}); },
                        "Cancel"
                    }
                    Button {
                        disabled: pending,
                        onclick: handle_submit,
                        if pending { "Issuing..." } else { "Issue rental" }
                    }
                }
            }
        }
    }
}
