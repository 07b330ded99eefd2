use dioxus::prelude::*;

use store::access::can_access;
use store::Role;
use ui::components::{Button, ButtonVariant};
use ui::use_session;

use crate::Route;

/// Navigation entries and the roles allowed to see them. Filtering goes
/// through the access policy, not ad-hoc role checks.
fn nav_items() -> Vec<(Route, &'static str, &'static [Role])> {
    const EVERYONE: &[Role] = &[Role::Customer, Role::Staff, Role::Admin];
    const MANAGERS: &[Role] = &[Role::Staff, Role::Admin];
    const ADMINS: &[Role] = &[Role::Admin];
    vec![
        (Route::CarsPage {}, "Cars", EVERYONE),
        (Route::RentalsPage {}, "Rentals", EVERYONE),
        (Route::CustomersPage {}, "Customers", MANAGERS),
        (Route::ReportsPage {}, "Reports", MANAGERS),
        (Route::AdminPage {}, "Admin tools", ADMINS),
    ]
}

/// Application chrome: topbar with the current user, role-filtered sidebar
/// navigation, and the routed page body.
#[component]
pub fn AppShell() -> Element {
    let session = use_session();
    let state = session.read();
    let role = state.role();
    let mut sidebar_open = use_signal(|| false);
    let nav = use_navigator();
    let current: Route = use_route();

    let allowed: Vec<_> = nav_items()
        .into_iter()
        .filter(|(_, _, roles)| can_access(role, Some(roles)))
        .collect();

    let signed_in = state.user.is_some();

    rsx! {
        div {
            class: "app-shell",
            header {
                class: "topbar",
                div {
                    class: "topbar__brand",
                    span { class: "brand-mark", aria_hidden: "true", "🚗" }
                    div {
                        p { class: "brand-title", "FleetOps" }
                        p { class: "brand-subtitle", "Car rental operations" }
                    }
                }
                div {
                    class: "topbar__actions",
                    if let Some(user) = state.user.clone() {
                        div {
                            class: "user-chip",
                            span { class: "user-chip__name", "{user.display_name()}" }
                            span { class: "user-chip__role", "{user.role}" }
                        }
                        Button {
                            variant: ButtonVariant::Ghost,
                            onclick: {
                                let mut session = session.clone();
                                move |_| {
                                    session.logout();
                                    nav.push(Route::LoginPage {});
                                }
                            },
                            "Sign out"
                        }
                    } else {
                        Link { class: "link", to: Route::LoginPage {}, "Sign in" }
                        Link { class: "link", to: Route::RegisterPage {}, "Register" }
                    }
                    if signed_in {
                        button {
                            class: "topbar__menu",
                            aria_label: "Toggle navigation",
                            aria_expanded: sidebar_open(),
                            onclick: move |_| sidebar_open.set(!sidebar_open()),
                            "☰"
                        }
                    }
                }
            }
            div {
                class: "shell",
                if signed_in {
                    nav {
                        class: if sidebar_open() { "sidebar sidebar--open" } else { "sidebar" },
                        aria_label: "Primary",
                        ul {
                            for (route, label, _) in allowed {
                                li {
                                    key: "{label}",
                                    Link {
                                        class: if current == route { "nav-link nav-link--active" } else { "nav-link" },
                                        to: route.clone(),
                                        onclick: move |_| sidebar_open.set(false),
                                        "{label}"
                                    }
                                }
                            }
                        }
                    }
                }
                main {
                    class: "main-content",
                    Outlet::<Route> {}
                }
            }
        }
    }
}
