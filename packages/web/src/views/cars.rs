use api::ApiClient;
use dioxus::prelude::*;

use store::access::can_manage_fleet;
use store::{Car, CarStatus};
use ui::components::{
    use_toast, Badge, BadgeTone, Button, ButtonVariant, EmptyState, FormField, Input, Modal,
    PageHeader, Select, Spinner,
};
use ui::{use_session, ActionState};

use crate::Route;

fn status_tone(status: CarStatus) -> BadgeTone {
    match status {
        CarStatus::Available => BadgeTone::Success,
        CarStatus::Rented => BadgeTone::Danger,
        CarStatus::Maintenance => BadgeTone::Warning,
    }
}

#[component]
pub fn CarsPage() -> Element {
    let client = use_context::<ApiClient>();
    let session = use_session();
    let mut toast = use_toast();

    let mut cars = use_signal(Vec::<Car>::new);
    let mut loading = use_signal(|| true);
    let mut error = use_signal(|| Option::<String>::None);
    let mut query = use_signal(String::new);
    let mut status_filter = use_signal(|| "ALL".to_string());
    let mut class_filter = use_signal(|| "ALL".to_string());
    let mut delete_target = use_signal(|| Option::<Car>::None);
    let mut delete_error = use_signal(|| Option::<String>::None);
    let mut delete_action = use_signal(ActionState::default);

    let _loader = use_resource({
        let client = client.clone();
        move || {
            let client = client.clone();
            async move {
                match client.cars().await {
                    Ok(data) => {
                        cars.set(data);
                        error.set(None);
                    }
                    Err(err) => {
                        tracing::warn!("failed to load cars: {err}");
                        error.set(Some("Unable to load cars. Please try again.".to_string()));
                    }
                }
                loading.set(false);
            }
        }
    });

    let can_manage = can_manage_fleet(session.read().role());

    let mut classes: Vec<String> = cars().iter().map(|c| c.car_class.clone()).collect();
    classes.sort();
    classes.dedup();

    let needle = query().to_lowercase();
    let filtered: Vec<Car> = cars()
        .iter()
        .filter(|car| {
            let matches_query = needle.is_empty()
                || format!("{} {}", car.brand, car.model)
                    .to_lowercase()
                    .contains(&needle)
                || car.car_class.to_lowercase().contains(&needle);
            let matches_status =
                status_filter() == "ALL" || car.status.as_str() == status_filter();
            let matches_class = class_filter() == "ALL" || car.car_class == class_filter();
            matches_query && matches_status && matches_class
        })
        .cloned()
        .collect();

    let handle_delete = {
        let client = client.clone();
        move |_| {
            let Some(target) = delete_target() else {
                return;
            };
            if !delete_action.write().begin() {
                return;
            }
            delete_error.set(None);
            let client = client.clone();
            spawn(async move {
                match client.delete_car(target.id).await {
                    Ok(()) => {
                        cars.write().retain(|car| car.id != target.id);
                        delete_action.write().finish(Ok(()));
                        delete_target.set(None);
                        toast.success("Car deleted from the fleet.");
                    }
                    Err(err) => {
                        let message = if err.is_conflict() {
                            "This car cannot be deleted because rentals are linked. \
                             Close or reassign rentals before deleting."
                        } else {
                            "Unable to delete car. Please try again."
                        };
                        tracing::warn!("car delete failed: {err}");
                        delete_error.set(Some(message.to_string()));
                        delete_action.write().finish(Err(message.to_string()));
                        toast.danger(message);
                    }
                }
            });
        }
    };

    let deleting = delete_action().is_pending();
    let delete_modal_open = delete_target().is_some();

    rsx! {
        section {
            PageHeader {
                title: "Cars",
                subtitle: "Manage fleet availability, pricing, and details.",
                actions: if can_manage {
                    Some(rsx! {
                        Link { class: "btn btn--primary", to: Route::CarNewPage {}, "Add car" }
                    })
                } else {
                    None
                },
            }
            div {
                class: "card",
                h2 { class: "section-title", "Filters" }
                div {
                    class: "filters-grid",
                    FormField {
                        label: "Search",
                        html_for: "car-search",
                        hint: "Search by brand, model, or class.",
                        Input {
                            id: "car-search",
                            value: query(),
                            placeholder: "e.g. Toyota",
                            oninput: move |evt: FormEvent| query.set(evt.value()),
                        }
                    }
                    FormField {
                        label: "Status",
                        html_for: "car-status",
                        Select {
                            id: "car-status",
                            value: status_filter(),
                            onchange: move |evt: FormEvent| status_filter.set(evt.value()),
                            option { value: "ALL", "All statuses" }
                            option { value: "AVAILABLE", "Available" }
                            option { value: "RENTED", "Rented" }
                            option { value: "MAINTENANCE", "Maintenance" }
                        }
                    }
                    FormField {
                        label: "Class",
                        html_for: "car-class",
                        Select {
                            id: "car-class",
                            value: class_filter(),
                            onchange: move |evt: FormEvent| class_filter.set(evt.value()),
                            option { value: "ALL", "All classes" }
                            for class in classes {
                                option { key: "{class}", value: "{class}", "{class}" }
                            }
                        }
                    }
                }
            }
            div {
                class: "section",
                if loading() {
                    Spinner { label: "Loading fleet" }
                }
                if let Some(message) = error() {
                    p { class: "error", "{message}" }
                }
                if !loading() && error().is_none() && filtered.is_empty() {
                    EmptyState {
                        title: "No cars found",
                        description: "Try adjusting your filters or add a new car to the fleet.",
                        action: if can_manage {
                            Some(rsx! {
                                Link { class: "btn btn--secondary", to: Route::CarNewPage {}, "Add car" }
                            })
                        } else {
                            None
                        },
                    }
                }
                if !loading() && !filtered.is_empty() {
                    table {
                        class: "table",
                        caption { "Fleet list" }
                        thead {
                            tr {
                                th { scope: "col", "Car" }
                                th { scope: "col", "Class" }
                                th { scope: "col", "Year" }
                                th { scope: "col", "Daily rate" }
                                th { scope: "col", "Status" }
                                th { scope: "col", "Actions" }
                            }
                        }
                        tbody {
                            for car in filtered {
                                tr {
                                    key: "{car.id}",
                                    td {
                                        Link { class: "link", to: Route::CarDetailsPage { id: car.id }, "{car.brand} {car.model}" }
                                    }
                                    td { "{car.car_class}" }
                                    td { "{car.year}" }
                                    td { "${car.base_daily_price}" }
                                    td {
                                        Badge { tone: status_tone(car.status), "{car.status}" }
                                    }
                                    td {
                                        div {
                                            class: "table-actions",
                                            Link { class: "link", to: Route::CarDetailsPage { id: car.id }, "View" }
                                            if can_manage {
                                                Link { class: "link", to: Route::CarEditPage { id: car.id }, "Edit" }
                                                Button {
                                                    variant: ButtonVariant::Danger,
                                                    onclick: {
                                                        let car = car.clone();
                                                        move |_| {
                                                            delete_target.set(Some(car.clone()));
                                                            delete_error.set(None);
                                                        }
                                                    },
                                                    "Delete"
                                                }
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
            Modal {
                open: delete_modal_open,
                title: "Delete car",
                description: "Deleting a car removes it from the fleet.",
                on_close: move |_| {
                    if !deleting {
                        delete_target.set(None);
                        delete_error.set(None);
                    }
                },
                if let Some(target) = delete_target() {
                    p {
                        "You are about to delete "
                        strong { "{target.brand} {target.model}" }
                        ". This action cannot be undone. If deletion is blocked, close or \
                         reassign any active rentals tied to this car."
                    }
                }
                if let Some(message) = delete_error() {
                    p { class: "error", role: "alert", "{message}" }
                }
                div {
                    class: "modal__actions",
                    Button {
                        variant: ButtonVariant::Ghost,
                        disabled: deleting,
                        onclick: move |_| delete_target.set(None),
                        "Cancel"
                    }
                    Button {
                        variant: ButtonVariant::Danger,
                        disabled: deleting,
                        onclick: handle_delete,
                        if deleting { "Deleting..." } else { "Delete car" }
                    }
                }
            }
        }
    }
}
