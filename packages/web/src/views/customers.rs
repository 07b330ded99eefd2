use api::ApiClient;
use dioxus::prelude::*;

use store::{Customer, Role};
use ui::components::{Alert, BadgeTone, EmptyState, FormField, Input, PageHeader, Spinner};
use ui::RequireAuth;

use crate::Route;

#[component]
pub fn CustomersPage() -> Element {
    rsx! {
        RequireAuth {
            roles: vec![Role::Staff, Role::Admin],
            CustomersView {}
        }
    }
}

#[component]
fn CustomersView() -> Element {
    let client = use_context::<ApiClient>();

    let mut customers = use_signal(Vec::<Customer>::new);
    let mut loading = use_signal(|| true);
    let mut error = use_signal(|| Option::<String>::None);
    let mut endpoint_missing = use_signal(|| false);
    let mut query = use_signal(String::new);

    let _loader = use_resource({
        let client = client.clone();
        move || {
            let client = client.clone();
            async move {
                match client.customers().await {
                    Ok(data) => {
                        customers.set(data);
                        error.set(None);
                    }
                    Err(err) if err.is_not_found() => {
                        // Older backends ship without the customers endpoint;
                        // that is a notice, not a failure.
                        endpoint_missing.set(true);
                    }
                    Err(err) => {
                        tracing::warn!("failed to load customers: {err}");
                        error.set(Some("Unable to load customers.".to_string()));
                    }
                }
                loading.set(false);
            }
        }
    });

    let needle = query().to_lowercase();
    let filtered: Vec<Customer> = customers()
        .iter()
        .filter(|customer| {
            needle.is_empty()
                || format!("{} {}", customer.full_name, customer.email)
                    .to_lowercase()
                    .contains(&needle)
        })
        .cloned()
        .collect();

    rsx! {
        section {
            PageHeader {
                title: "Customers",
                subtitle: "Search and manage customer profiles.",
            }
            div {
                class: "card",
                FormField {
                    label: "Search",
                    html_for: "customer-search",
                    hint: "Search by name or email.",
                    Input {
                        id: "customer-search",
                        value: query(),
                        placeholder: "e.g. jane@example.com",
                        oninput: move |evt: FormEvent| query.set(evt.value()),
                    }
                }
            }
            div {
                class: "section",
                if loading() {
                    Spinner { label: "Loading customers" }
                }
                if endpoint_missing() {
                    Alert {
                        tone: BadgeTone::Warning,
                        title: "Customer directory unavailable",
                        "This backend does not expose the customers endpoint. Upgrade the backend to browse customer profiles."
                    }
                }
                if let Some(message) = error() {
                    p { class: "error", "{message}" }
                }
                if !loading() && !endpoint_missing() && error().is_none() && filtered.is_empty() {
                    EmptyState {
                        title: "No customers found",
                        description: "Try a different search term.",
                    }
                }
                if !loading() && !filtered.is_empty() {
                    table {
                        class: "table",
                        caption { "Customer list" }
                        thead {
                            tr {
                                th { scope: "col", "Name" }
                                th { scope: "col", "Email" }
                                th { scope: "col", "Phone" }
                                th { scope: "col", "Actions" }
                            }
                        }
                        tbody {
                            for customer in filtered {
                                tr {
                                    key: "{customer.id}",
                                    td { "{customer.full_name}" }
                                    td { "{customer.email}" }
                                    td { "{customer.phone}" }
                                    td {
                                        Link { class: "link", to: Route::CustomerDetailsPage { id: customer.id }, "View" }
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
