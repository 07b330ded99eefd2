use api::{ApiClient, RentalFilters};
use dioxus::prelude::*;

use store::{Car, CarStatus, Rental, RentalStatus, Role};
use ui::components::{Alert, BadgeTone, PageHeader, Spinner};
use ui::RequireAuth;

use crate::Route;

#[component]
pub fn AdminPage() -> Element {
    rsx! {
        RequireAuth {
            roles: vec![Role::Admin],
            AdminView {}
        }
    }
}

#[component]
fn AdminView() -> Element {
    let client = use_context::<ApiClient>();

    let mut cars = use_signal(Vec::<Car>::new);
    let mut rentals = use_signal(Vec::<Rental>::new);
    let mut loading = use_signal(|| true);
    let mut error = use_signal(|| Option::<String>::None);

    let _loader = use_resource({
        let client = client.clone();
        move || {
            let client = client.clone();
            async move {
                let cars_result = client.cars().await;
                let rentals_result = client.rentals(&RentalFilters::default()).await;
                match (cars_result, rentals_result) {
                    (Ok(cars_data), Ok(rentals_data)) => {
                        cars.set(cars_data);
                        rentals.set(rentals_data);
                        error.set(None);
                    }
                    (cars_result, rentals_result) => {
                        if let Err(err) = &cars_result {
                            tracing::warn!("admin overview cars load failed: {err}");
                        }
                        if let Err(err) = &rentals_result {
                            tracing::warn!("admin overview rentals load failed: {err}");
                        }
                        error.set(Some("Unable to load admin summary.".to_string()));
                    }
                }
                loading.set(false);
            }
        }
    });

    if loading() {
        return rsx! {
            Spinner { label: "Loading admin overview" }
        };
    }

    let total_cars = cars().len();
    let available = cars()
        .iter()
        .filter(|c| c.status == CarStatus::Available)
        .count();
    let active_rentals = rentals()
        .iter()
        .filter(|r| r.status == RentalStatus::Active)
        .count();
    let recent: Vec<Rental> = rentals().iter().take(5).cloned().collect();

    rsx! {
        section {
            PageHeader {
                title: "Admin tools",
                subtitle: "Quick access to fleet and rental operations.",
            }
            if let Some(message) = error() {
                p { class: "error", "{message}" }
            }
            div {
                class: "summary-grid",
                div { strong { "Total cars" } p { "{total_cars}" } }
                div { strong { "Available cars" } p { "{available}" } }
                div { strong { "Active rentals" } p { "{active_rentals}" } }
            }
            div {
                class: "grid-two",
                div {
                    class: "card",
                    h2 { class: "section-title", "Quick actions" }
                    div {
                        class: "stack",
                        Link { class: "btn btn--primary", to: Route::CarNewPage {}, "Add a new car" }
                        Link { class: "btn btn--secondary", to: Route::RentalNewPage {}, "Issue rental" }
                        Link { class: "btn btn--ghost", to: Route::ReportsPage {}, "View reports" }
                    }
                    Alert {
                        tone: BadgeTone::Info,
                        title: "Role visibility",
                        "Only admins can access this overview. Staff users should use the rentals and cars pages."
                    }
                }
                div {
                    class: "card",
                    h2 { class: "section-title", "Recent rentals" }
                    if recent.is_empty() {
                        p { "No rentals yet." }
                    } else {
                        table {
                            class: "table",
                            caption { "Recent rentals" }
                            thead {
                                tr {
                                    th { scope: "col", "Rental" }
                                    th { scope: "col", "Car" }
                                    th { scope: "col", "Status" }
                                    th { scope: "col", "Actions" }
                                }
                            }
                            tbody {
                                for rental in recent {
                                    tr {
                                        key: "{rental.id}",
                                        td { "#{rental.id}" }
                                        td { "{rental.car_label()}" }
                                        td { "{rental.status}" }
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
}
