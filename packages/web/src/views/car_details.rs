use api::ApiClient;
use dioxus::prelude::*;

use store::access::can_manage_fleet;
use store::{Car, CarStatus};
use ui::components::{Badge, BadgeTone, PageHeader, Spinner};
use ui::{use_session, RequireAuth};

use crate::Route;

fn status_tone(status: CarStatus) -> BadgeTone {
    match status {
        CarStatus::Available => BadgeTone::Success,
        CarStatus::Rented => BadgeTone::Danger,
        CarStatus::Maintenance => BadgeTone::Warning,
    }
}

#[component]
pub fn CarDetailsPage(id: i64) -> Element {
    rsx! {
        RequireAuth {
            CarDetailsView { id }
        }
    }
}

#[component]
fn CarDetailsView(id: i64) -> Element {
    let client = use_context::<ApiClient>();
    let session = use_session();

    let mut car = use_signal(|| Option::<Car>::None);
    let mut loading = use_signal(|| true);
    let mut error = use_signal(|| Option::<String>::None);

    let _loader = use_resource({
        let client = client.clone();
        move || {
            let client = client.clone();
            async move {
                match client.car(id).await {
                    Ok(data) => {
                        car.set(Some(data));
                        error.set(None);
                    }
                    Err(err) => {
                        tracing::warn!("failed to load car {id}: {err}");
                        error.set(Some("Unable to load car details.".to_string()));
                    }
                }
                loading.set(false);
            }
        }
    });

    let can_manage = can_manage_fleet(session.read().role());

    if loading() {
        return rsx! {
            Spinner { label: "Loading car" }
        };
    }

    let Some(car) = car() else {
        return rsx! {
            div {
                class: "card",
                p { class: "error", {error().unwrap_or_else(|| "Car not found.".to_string())} }
                Link { class: "link", to: Route::CarsPage {}, "← Back to cars" }
            }
        };
    };

    rsx! {
        section {
            PageHeader {
                title: "{car.display_name()}",
                subtitle: "Fleet car #{car.id}",
                actions: if can_manage {
                    Some(rsx! {
                        Link { class: "btn btn--secondary", to: Route::CarEditPage { id: car.id }, "Edit car" }
                    })
                } else {
                    None
                },
            }
            div {
                class: "card detail-grid",
                div {
                    h2 { class: "section-title", "Details" }
                    p { strong { "Brand: " } "{car.brand}" }
                    p { strong { "Model: " } "{car.model}" }
                    p { strong { "Class: " } "{car.car_class}" }
                    p { strong { "Year: " } "{car.year}" }
                    p {
                        strong { "Status: " }
                        Badge { tone: status_tone(car.status), "{car.status}" }
                    }
                }
                div {
                    h2 { class: "section-title", "Pricing" }
                    p { strong { "Daily rate: " } "${car.base_daily_price}" }
                    p {
                        "Rental charges are computed by the backend when a rental is closed; \
                         the daily rate here is the base price before any pricing strategy."
                    }
                }
            }
            div {
                class: "section",
                Link { class: "link", to: Route::CarsPage {}, "← Back to cars" }
            }
        }
    }
}
