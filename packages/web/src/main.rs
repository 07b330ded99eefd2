use dioxus::prelude::*;

use api::ApiClient;
use store::FleetOpsConfig;
use ui::components::ToastProvider;
use ui::SessionProvider;

use views::{
    AdminPage, AppShell, CarDetailsPage, CarEditPage, CarNewPage, CarsPage, CustomerDetailsPage,
    CustomersPage, LoginPage, RegisterPage, RentalDetailsPage, RentalNewPage, RentalsPage,
    ReportsPage,
};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(AppShell)]
        #[route("/")]
        CarsPage {},
        #[route("/login")]
        LoginPage {},
        #[route("/register")]
        RegisterPage {},
        #[route("/cars/new")]
        CarNewPage {},
        #[route("/cars/:id")]
        CarDetailsPage { id: i64 },
        #[route("/cars/:id/edit")]
        CarEditPage { id: i64 },
        #[route("/rentals")]
        RentalsPage {},
        #[route("/rentals/new")]
        RentalNewPage {},
        #[route("/rentals/:id")]
        RentalDetailsPage { id: i64 },
        #[route("/customers")]
        CustomersPage {},
        #[route("/customers/:id")]
        CustomerDetailsPage { id: i64 },
        #[route("/reports")]
        ReportsPage {},
        #[route("/admin")]
        AdminPage {},
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    // The API client is the single process-wide handle; everything below it
    // (session included) reaches it through context.
    use_context_provider(|| ApiClient::from_config(&FleetOpsConfig::load()));

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        ToastProvider {
            SessionProvider {
                Router::<Route> {}
            }
        }
    }
}
