//! Session ownership and hooks.
//!
//! The session is owned by a single [`SessionProvider`] at the root of the
//! app. Consumers get a [`SessionHandle`] whose read side is a snapshot and
//! whose write side is the narrow `login` / `logout` / `restore` API; no
//! surface outside this module mutates the current user.

use api::{ApiClient, ApiError};
use dioxus::prelude::*;
use store::{Role, UserInfo};

/// Session state for the application.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub user: Option<UserInfo>,
    /// True only while the initial credential-restore round trip is running.
    pub loading: bool,
}

impl Default for Session {
    fn default() -> Self {
        Self {
            user: None,
            loading: true,
        }
    }
}

impl Session {
    pub fn role(&self) -> Option<Role> {
        self.user.as_ref().map(|u| u.role)
    }
}

/// Read access plus the session mutation API. Cloning is cheap; all clones
/// share the same underlying signal.
#[derive(Clone)]
pub struct SessionHandle {
    state: Signal<Session>,
    client: ApiClient,
}

impl SessionHandle {
    /// Current session snapshot. Subscribes the calling component, so it
    /// re-renders on login/logout.
    pub fn read(&self) -> Session {
        self.state.cloned()
    }

    /// Exchange credentials for a token and populate the session.
    pub async fn login(&mut self, email: &str, password: &str) -> Result<UserInfo, ApiError> {
        self.client.login(email, password).await?;
        let user = self.client.me().await?;
        self.state.set(Session {
            user: Some(user.clone()),
            loading: false,
        });
        Ok(user)
    }

    /// Clear the stored credential and the current user.
    pub fn logout(&mut self) {
        self.client.logout();
        self.state.set(Session {
            user: None,
            loading: false,
        });
    }

    /// Exchange a previously stored credential for a profile. Runs once at
    /// startup; a rejected credential is cleared so the next start is
    /// anonymous immediately.
    pub async fn restore(&mut self) {
        if !self.client.has_credential() {
            self.state.set(Session {
                user: None,
                loading: false,
            });
            return;
        }
        match self.client.me().await {
            Ok(user) => {
                self.state.set(Session {
                    user: Some(user),
                    loading: false,
                });
            }
            Err(err) => {
                if err.is_unauthorized() {
                    self.client.logout();
                }
                tracing::warn!("session restore failed: {err}");
                self.state.set(Session {
                    user: None,
                    loading: false,
                });
            }
        }
    }
}

/// Get the session handle.
pub fn use_session() -> SessionHandle {
    use_context::<SessionHandle>()
}

/// Provider component that owns the session. Wrap the app with this (below
/// the `ApiClient` context provider) to enable authentication.
#[component]
pub fn SessionProvider(children: Element) -> Element {
    let client = use_context::<ApiClient>();
    let state = use_signal(Session::default);
    let handle = use_context_provider(|| SessionHandle { state, client });

    // Restore the session from the stored credential on mount.
    let _ = use_resource(move || {
        let mut handle = handle.clone();
        async move {
            handle.restore().await;
        }
    });

    rsx! {
        {children}
    }
}
