//! Route guarding.
//!
//! [`RequireAuth`] is the render-side twin of `store::access::can_access`:
//! while the session loads it shows a neutral spinner (never a flash of
//! "access denied"), unauthenticated users are redirected to `/login`, and
//! authenticated-but-insufficient roles get the [`AccessDenied`] view.

use dioxus::prelude::*;
use store::access::can_access;
use store::Role;

use crate::components::Spinner;
use crate::use_session;

#[component]
pub fn RequireAuth(
    /// Roles allowed through; `None` admits any authenticated user.
    #[props(default)]
    roles: Option<Vec<Role>>,
    children: Element,
) -> Element {
    let session = use_session();
    let state = session.read();

    if state.loading {
        return rsx! {
            Spinner { label: "Loading your session" }
        };
    }

    let Some(user) = state.user else {
        #[cfg(target_arch = "wasm32")]
        {
            if let Some(window) = web_sys::window() {
                let _ = window.location().set_href("/login");
            }
        }
        return rsx! {
            div {
                class: "card",
                p { "Redirecting to sign in..." }
                a { class: "link", href: "/login", "Go to sign in" }
            }
        };
    };

    if !can_access(Some(user.role), roles.as_deref()) {
        return rsx! {
            AccessDenied {}
        };
    }

    rsx! {
        {children}
    }
}

/// Shown when an authenticated user lacks the role for a page. A dedicated
/// view rather than a blank page or an error.
#[component]
pub fn AccessDenied() -> Element {
    rsx! {
        div {
            class: "card",
            h2 { "Access denied" }
            p { "You do not have permission to view this page." }
            a { class: "link", href: "/", "Return to dashboard" }
        }
    }
}
