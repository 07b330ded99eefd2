use api::{ApiClient, RentalFilters};
use dioxus::prelude::*;

use store::access::can_manage_rentals;
use store::{Rental, RentalStatus, Role};
use ui::components::{
    Badge, BadgeTone, Button, ButtonVariant, EmptyState, FormField, Input, PageHeader, Select,
    Spinner,
};
use ui::{use_session, RequireAuth};

use crate::Route;

pub(super) fn rental_status_tone(status: RentalStatus) -> BadgeTone {
    match status {
        RentalStatus::Active => BadgeTone::Info,
        RentalStatus::Closed => BadgeTone::Success,
        RentalStatus::Draft => BadgeTone::Warning,
    }
}

fn parse_status_filter(value: &str) -> Option<RentalStatus> {
    match value {
        "DRAFT" => Some(RentalStatus::Draft),
        "ACTIVE" => Some(RentalStatus::Active),
        "CLOSED" => Some(RentalStatus::Closed),
        _ => None,
    }
}

#[component]
pub fn RentalsPage() -> Element {
    rsx! {
        RequireAuth {
            RentalsView {}
        }
    }
}

#[component]
fn RentalsView() -> Element {
    let client = use_context::<ApiClient>();
    let session = use_session();

    let mut rentals = use_signal(Vec::<Rental>::new);
    let mut loading = use_signal(|| true);
    let mut error = use_signal(|| Option::<String>::None);
    let mut status_filter = use_signal(|| "ALL".to_string());
    let mut customer_filter = use_signal(String::new);
    let mut car_filter = use_signal(String::new);
    let mut date_from = use_signal(String::new);
    let mut date_to = use_signal(String::new);
    // Bumped by "Apply filters"; the loader snapshots the filter fields
    // without subscribing, so typing does not refetch.
    let mut reload = use_signal(|| 0u32);

    let _loader = use_resource({
        let client = client.clone();
        move || {
            let _tick = reload();
            let client = client.clone();
            async move {
                loading.set(true);
                let filters = RentalFilters {
                    status: parse_status_filter(&status_filter.peek()),
                    customer: customer_filter.peek().trim().parse().ok(),
                    car: car_filter.peek().trim().parse().ok(),
                    date_from: date_from.peek().parse().ok(),
                    date_to: date_to.peek().parse().ok(),
                };
                match client.rentals(&filters).await {
                    Ok(data) => {
                        rentals.set(data);
                        error.set(None);
                    }
                    Err(err) => {
                        tracing::warn!("failed to load rentals: {err}");
                        error.set(Some("Unable to load rentals. Please try again.".to_string()));
                    }
                }
                loading.set(false);
            }
        }
    });

    let state = session.read();
    let role = state.role();
    let can_manage = can_manage_rentals(role);

    // Customers only ever see their own rentals, even if the backend returned
    // more.
    let visible: Vec<Rental> = match &state.user {
        Some(user) if user.role == Role::Customer => rentals()
            .iter()
            .filter(|r| r.customer == user.id)
            .cloned()
            .collect(),
        _ => rentals(),
    };

    let title = if role == Some(Role::Customer) {
        "My rentals"
    } else {
        "Rentals"
    }
    .to_string();

    rsx! {
        section {
            PageHeader {
                title: title,
                subtitle: "Track active rentals and complete returns.",
                actions: if can_manage {
                    Some(rsx! {
                        Link { class: "btn btn--primary", to: Route::RentalNewPage {}, "Issue rental" }
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
                        label: "Status",
                        html_for: "rental-status",
                        Select {
                            id: "rental-status",
                            value: status_filter(),
                            onchange: move |evt: FormEvent| status_filter.set(evt.value()),
                            option { value: "ALL", "All statuses" }
                            option { value: "DRAFT", "Draft" }
                            option { value: "ACTIVE", "Active" }
                            option { value: "CLOSED", "Closed" }
                        }
                    }
                    FormField {
                        label: "Customer ID",
                        html_for: "rental-customer",
                        Input {
                            id: "rental-customer",
                            value: customer_filter(),
                            placeholder: "Customer ID",
                            oninput: move |evt: FormEvent| customer_filter.set(evt.value()),
                        }
                    }
                    FormField {
                        label: "Car ID",
                        html_for: "rental-car",
                        Input {
                            id: "rental-car",
                            value: car_filter(),
                            placeholder: "Car ID",
                            oninput: move |evt: FormEvent| car_filter.set(evt.value()),
                        }
                    }
                    FormField {
                        label: "Issue date from",
                        html_for: "rental-date-from",
                        Input {
                            id: "rental-date-from",
                            r#type: "date",
                            value: date_from(),
                            oninput: move |evt: FormEvent| date_from.set(evt.value()),
                        }
                    }
                    FormField {
                        label: "Issue date to",
                        html_for: "rental-date-to",
                        Input {
                            id: "rental-date-to",
                            r#type: "date",
                            value: date_to(),
                            oninput: move |evt: FormEvent| date_to.set(evt.value()),
                        }
                    }
                    div {
                        class: "filters-actions",
                        Button {
                            variant: ButtonVariant::Secondary,
                            onclick: move |_| reload.set(reload() + 1),
                            "Apply filters"
                        }
                    }
                }
            }
            div {
                class: "section",
                if loading() {
                    Spinner { label: "Loading rentals" }
                }
                if let Some(message) = error() {
                    p { class: "error", "{message}" }
                }
                if !loading() && error().is_none() && visible.is_empty() {
                    EmptyState {
                        title: "No rentals found",
                        description: "Adjust filters or issue a new rental.",
                        action: if can_manage {
                            Some(rsx! {
                                Link { class: "btn btn--secondary", to: Route::RentalNewPage {}, "Issue rental" }
                            })
                        } else {
                            None
                        },
                    }
                }
                if !loading() && !visible.is_empty() {
                    table {
                        class: "table",
                        caption { "Rental list" }
                        thead {
                            tr {
                                th { scope: "col", "Rental" }
                                th { scope: "col", "Car" }
                                th { scope: "col", "Customer" }
                                th { scope: "col", "Issue date" }
                                th { scope: "col", "Expected return" }
                                th { scope: "col", "Status" }
                                th { scope: "col", "Actions" }
                            }
                        }
                        tbody {
                            for rental in visible {
                                tr {
                                    key: "{rental.id}",
                                    td { "#{rental.id}" }
                                    td { "{rental.car_label()}" }
                                    td { "{rental.customer_label()}" }
                                    td { "{rental.issue_date}" }
                                    td { "{rental.expected_return_date}" }
                                    td {
                                        Badge { tone: rental_status_tone(rental.status), "{rental.status}" }
                                    }
                                    td {
                                        Link { class: "link", to: Route::RentalDetailsPage { id: rental.id }, "View" }
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
