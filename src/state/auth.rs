//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! The session is owned by the app root and handed to the header as an
//! `AuthSession`. The header only reads it and asks it to sign out; the
//! session itself is updated from the auth service responses.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;

use crate::error::AuthError;
use crate::net::types::User;
use crate::state::navigation::{HOME, Navigator};

/// Authentication state tracking the current user and loading status.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthState {
    pub user: Option<User>,
    pub loading: bool,
}

impl AuthState {
    /// State before the first session check has answered.
    pub fn pending() -> Self {
        Self { user: None, loading: true }
    }

    pub fn signed_in(user: User) -> Self {
        Self { user: Some(user), loading: false }
    }

    pub fn signed_out() -> Self {
        Self::default()
    }
}

/// Operations a session offers beyond being read.
pub trait SessionActions {
    /// End the session. Resolves once the auth service has confirmed.
    fn sign_out(&self) -> impl Future<Output = Result<(), AuthError>>;
}

/// Sign out, then replace the current location with the home route.
///
/// Navigation is requested only after `sign_out` resolves successfully; a
/// failed sign-out is returned untouched and nothing navigates.
///
/// # Errors
///
/// Returns whatever `sign_out` failed with.
pub async fn sign_out_and_go_home<S, N>(session: &S, navigator: &N) -> Result<(), AuthError>
where
    S: SessionActions,
    N: Navigator,
{
    session.sign_out().await?;
    navigator.replace(HOME);
    Ok(())
}

/// Reactive handle to the shared session, provided through context by the app
/// root or passed to the header directly.
#[derive(Clone, Copy, Debug)]
pub struct AuthSession {
    state: RwSignal<AuthState>,
}

impl AuthSession {
    /// Session that has not been checked yet.
    pub fn new() -> Self {
        Self::with_state(AuthState::pending())
    }

    pub fn with_state(state: AuthState) -> Self {
        Self { state: RwSignal::new(state) }
    }

    /// Read-only view of the session for rendering.
    pub fn state(&self) -> Signal<AuthState> {
        self.state.into()
    }

    /// Fetch `/api/auth/me` once and settle `loading`.
    ///
    /// Any failure leaves the visitor signed out.
    pub fn load(&self) {
        let state = self.state;
        leptos::task::spawn_local(async move {
            let user = match crate::net::api::fetch_current_user().await {
                Ok(user) => user,
                Err(err) => {
                    #[cfg(feature = "hydrate")]
                    log::warn!("session check failed: {err}");
                    #[cfg(not(feature = "hydrate"))]
                    let _ = err;
                    None
                }
            };
            state.set(user.map_or_else(AuthState::signed_out, AuthState::signed_in));
        });
    }
}

impl Default for AuthSession {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionActions for AuthSession {
    fn sign_out(&self) -> impl Future<Output = Result<(), AuthError>> {
        let state = self.state;
        async move {
            crate::net::api::logout().await?;
            state.update(|s| s.user = None);
            Ok(())
        }
    }
}
