use api::{ApiClient, RentalFilters};
use dioxus::prelude::*;

use store::{Customer, Rental, Role};
use ui::components::{Badge, PageHeader, Spinner};
use ui::RequireAuth;

use super::rentals::rental_status_tone;
use crate::Route;

#[component]
pub fn CustomerDetailsPage(id: i64) -> Element {
    rsx! {
        RequireAuth {
            roles: vec![Role::Staff, Role::Admin],
            CustomerDetailsView { id }
        }
    }
}

#[component]
fn CustomerDetailsView(id: i64) -> Element {
    let client = use_context::<ApiClient>();

    let mut customer = use_signal(|| Option::<Customer>::None);
    let mut rentals = use_signal(Vec::<Rental>::new);
    let mut loading = use_signal(|| true);
    let mut error = use_signal(|| Option::<String>::None);

    let _loader = use_resource({
        let client = client.clone();
        move || {
            let client = client.clone();
            async move {
                match client.customer(id).await {
                    Ok(data) => {
                        customer.set(Some(data));
                        error.set(None);
                        let filters = RentalFilters {
                            customer: Some(id),
                            ..Default::default()
                        };
                        match client.rentals(&filters).await {
                            Ok(history) => rentals.set(history),
                            Err(err) => {
                                tracing::warn!("failed to load rental history: {err}");
                            }
                        }
                    }
                    Err(err) => {
                        tracing::warn!("failed to load customer {id}: {err}");
                        error.set(Some("Unable to load customer details.".to_string()));
                    }
                }
                loading.set(false);
            }
        }
    });

    if loading() {
        return rsx! {
            Spinner { label: "Loading customer" }
        };
    }

    let Some(profile) = customer() else {
        return rsx! {
            div {
                class: "card",
                p { class: "error", {error().unwrap_or_else(|| "Customer not found.".to_string())} }
                Link { class: "link", to: Route::CustomersPage {}, "← Back to customers" }
            }
        };
    };

    let history = rentals();

    rsx! {
        section {
            PageHeader {
                title: "{profile.full_name}",
                subtitle: "Customer #{profile.id}",
            }
            div {
                class: "card detail-grid",
                div {
                    h2 { class: "section-title", "Profile" }
                    p { strong { "Email: " } "{profile.email}" }
                    p { strong { "Address: " } "{profile.address}" }
                    p { strong { "Phone: " } "{profile.phone}" }
                }
                div {
                    h2 { class: "section-title", "Rental history" }
                    if history.is_empty() {
                        p { "No rentals for this customer yet." }
                    } else {
                        table {
                            class: "table",
                            thead {
                                tr {
                                    th { scope: "col", "Rental" }
                                    th { scope: "col", "Car" }
                                    th { scope: "col", "Issue date" }
                                    th { scope: "col", "Status" }
                                    th { scope: "col", "Actions" }
                                }
                            }
                            tbody {
                                for rental in history {
                                    tr {
                                        key: "{rental.id}",
                                        td { "#{rental.id}" }
                                        td { "{rental.car_label()}" }
                                        td { "{rental.issue_date}" }
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
            div {
                class: "section",
                Link { class: "link", to: Route::CustomersPage {}, "← Back to customers" }
            }
        }
    }
}
