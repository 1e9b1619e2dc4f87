//! REST helpers for the auth service.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): `AuthError::Unavailable`, since the session cookie only
//! travels with browser requests.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result` outputs instead of panics so a failed session check or
//! sign-out degrades the header without crashing hydration.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::User;
use crate::error::AuthError;

#[cfg(feature = "hydrate")]
const CURRENT_USER_ENDPOINT: &str = "/api/auth/me";
#[cfg(feature = "hydrate")]
const LOGOUT_ENDPOINT: &str = "/api/auth/logout";

/// Interpret the status of a current-user request.
///
/// `Ok(true)` means a body with the user follows; `Ok(false)` means nobody is
/// signed in.
#[cfg(any(test, feature = "hydrate"))]
fn current_user_status(status: u16) -> Result<bool, AuthError> {
    match status {
        200..=299 => Ok(true),
        401 | 403 | 404 => Ok(false),
        other => Err(AuthError::Status(other)),
    }
}

/// Interpret the status of a logout call. An expired session counts as
/// already signed out.
#[cfg(any(test, feature = "hydrate"))]
fn logout_status(status: u16) -> Result<(), AuthError> {
    match status {
        200..=299 | 401 => Ok(()),
        other => Err(AuthError::Status(other)),
    }
}

/// Fetch the currently authenticated user from `/api/auth/me`.
///
/// # Errors
///
/// Returns an error if the request fails, the server answers with an
/// unexpected status, or the call is made outside the browser.
pub async fn fetch_current_user() -> Result<Option<User>, AuthError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(CURRENT_USER_ENDPOINT)
            .send()
            .await
            .map_err(|e| AuthError::Request(e.to_string()))?;
        if !current_user_status(resp.status())? {
            return Ok(None);
        }
        let user = resp
            .json::<User>()
            .await
            .map_err(|e| AuthError::Request(e.to_string()))?;
        Ok(Some(user))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(AuthError::Unavailable)
    }
}

/// End the current session with `POST /api/auth/logout`.
///
/// # Errors
///
/// Returns an error if the request fails, the server rejects the logout, or
/// the call is made outside the browser.
pub async fn logout() -> Result<(), AuthError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(LOGOUT_ENDPOINT)
            .send()
            .await
            .map_err(|e| AuthError::Request(e.to_string()))?;
        logout_status(resp.status())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(AuthError::Unavailable)
    }
}
