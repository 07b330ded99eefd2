use api::{ApiClient, CarPayload};
use dioxus::prelude::*;

use store::{CarStatus, Role};
use ui::components::{
    use_toast, Alert, BadgeTone, Button, ButtonVariant, FormField, Input, PageHeader, Select,
    Spinner,
};
use ui::{validate, ActionState, RequireAuth};

use crate::Route;

#[component]
pub fn CarNewPage() -> Element {
    rsx! {
        RequireAuth {
            roles: vec![Role::Staff, Role::Admin],
            CarForm {}
        }
    }
}

#[component]
pub fn CarEditPage(id: i64) -> Element {
    rsx! {
        RequireAuth {
            roles: vec![Role::Staff, Role::Admin],
            CarForm { id }
        }
    }
}

fn parse_status(value: &str) -> CarStatus {
    match value {
        "RENTED" => CarStatus::Rented,
        "MAINTENANCE" => CarStatus::Maintenance,
        _ => CarStatus::Available,
    }
}

/// Shared create/edit form. `id` decides the mode: `Some` loads the car and
/// PATCHes it, `None` POSTs a new one.
#[component]
fn CarForm(#[props(default)] id: Option<i64>) -> Element {
    let client = use_context::<ApiClient>();
    let mut toast = use_toast();
    let nav = use_navigator();
    let editing = id.is_some();

    let mut brand = use_signal(String::new);
    let mut model = use_signal(String::new);
    let mut car_class = use_signal(String::new);
    let mut year = use_signal(String::new);
    let mut price = use_signal(String::new);
    let mut status = use_signal(|| "AVAILABLE".to_string());
    let mut loading = use_signal(move || editing);
    let mut attempted = use_signal(|| false);
    let mut action = use_signal(ActionState::default);

    let _loader = use_resource({
        let client = client.clone();
        move || {
            let client = client.clone();
            async move {
                let Some(id) = id else {
                    return;
                };
                match client.car(id).await {
                    Ok(car) => {
                        brand.set(car.brand);
                        model.set(car.model);
                        car_class.set(car.car_class);
                        year.set(car.year.to_string());
                        price.set(car.base_daily_price);
                        status.set(car.status.as_str().to_string());
                    }
                    Err(err) => {
                        tracing::warn!("failed to load car {id}: {err}");
                        action
                            .write()
                            .finish(Err("Unable to load car information.".to_string()));
                    }
                }
                loading.set(false);
            }
        }
    });

    let brand_error = validate::required(&brand(), "Brand is required.");
    let model_error = validate::required(&model(), "Model is required.");
    let class_error = validate::required(&car_class(), "Class is required.");
    let year_error = validate::year(&year());
    let price_error = validate::decimal_amount(&price(), "Enter the daily price.");
    let has_field_errors = [
        &brand_error,
        &model_error,
        &class_error,
        &year_error,
        &price_error,
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
            let payload = CarPayload {
                brand: brand().trim().to_string(),
                model: model().trim().to_string(),
                car_class: car_class().trim().to_string(),
                year: year().trim().parse().unwrap_or_default(),
                base_daily_price: price().trim().to_string(),
                status: parse_status(&status()),
            };
            let client = client.clone();
            spawn(async move {
                let result = match id {
                    Some(id) => client.update_car(id, &payload).await,
                    None => client.create_car(&payload).await,
                };
                match result {
                    Ok(_) => {
                        action.write().finish(Ok(()));
                        toast.success(if editing {
                            "Car updated successfully."
                        } else {
                            "Car added to fleet."
                        });
                        nav.push(Route::CarsPage {});
                    }
                    Err(err) => {
                        tracing::warn!("car save failed: {err}");
                        action
                            .write()
                            .finish(Err("Unable to save car details. Please try again.".to_string()));
                    }
                }
            });
        }
    };

    if loading() {
        return rsx! {
            Spinner { label: "Loading car" }
        };
    }

    let field_error = |error: &Option<String>| if attempted() { error.clone() } else { None };

    let page_title = if editing { "Edit car" } else { "Add car" }.to_string();

    rsx! {
        section {
            PageHeader {
                title: page_title,
                subtitle: "Ensure all fields are accurate before saving.",
            }
            if let Some(message) = submit_error {
                Alert { tone: BadgeTone::Danger, title: "Form error", "{message}" }
            }
            div {
                class: "card form",
                FormField {
                    label: "Brand",
                    html_for: "car-brand",
                    error: field_error(&brand_error),
                    required: true,
                    Input {
                        id: "car-brand",
                        value: brand(),
                        has_error: attempted() && brand_error.is_some(),
                        oninput: move |evt: FormEvent| brand.set(evt.value()),
                    }
                }
                FormField {
                    label: "Model",
                    html_for: "car-model",
                    error: field_error(&model_error),
                    required: true,
                    Input {
                        id: "car-model",
                        value: model(),
                        has_error: attempted() && model_error.is_some(),
                        oninput: move |evt: FormEvent| model.set(evt.value()),
                    }
                }
                FormField {
                    label: "Class",
                    html_for: "car-class",
                    error: field_error(&class_error),
                    required: true,
                    Input {
                        id: "car-class",
                        value: car_class(),
                        has_error: attempted() && class_error.is_some(),
                        oninput: move |evt: FormEvent| car_class.set(evt.value()),
                    }
                }
                div {
                    class: "form-row",
                    FormField {
                        label: "Year",
                        html_for: "car-year",
                        error: field_error(&year_error),
                        required: true,
                        Input {
                            id: "car-year",
                            value: year(),
                            has_error: attempted() && year_error.is_some(),
                            oninput: move |evt: FormEvent| year.set(evt.value()),
                        }
                    }
                    FormField {
                        label: "Daily price",
                        html_for: "car-price",
                        error: field_error(&price_error),
                        required: true,
                        Input {
                            id: "car-price",
                            value: price(),
                            has_error: attempted() && price_error.is_some(),
                            oninput: move |evt: FormEvent| price.set(evt.value()),
                        }
                    }
                }
                FormField {
                    label: "Status",
                    html_for: "car-status",
                    Select {
                        id: "car-status",
                        value: status(),
                        onchange: move |evt: FormEvent| status.set(evt.value()),
                        option { value: "AVAILABLE", "Available" }
                        option { value: "RENTED", "Rented" }
                        option { value: "MAINTENANCE", "Maintenance" }
                    }
                }
                div {
                    class: "form-actions",
                    Button {
                        variant: ButtonVariant::Ghost,
                        onclick: move |_| { nav.push(Route::CarsPage {}); },
                        "Cancel"
                    }
                    Button {
                        disabled: pending,
                        onclick: handle_submit,
                        if pending {
                            "Saving..."
                        } else if editing {
                            "Save changes"
                        } else {
                            "Create car"
                        }
                    }
                }
            }
        }
    }
}
