//! Client-side error types.
//!
//! ERROR HANDLING
//! ==============
//! Session calls return `AuthError` instead of panicking so a failed sign-out
//! or session check leaves the rendered header intact.

/// Failure talking to the authentication endpoints.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    #[error("auth request failed: {0}")]
    Request(String),
    #[error("auth endpoint returned status {0}")]
    Status(u16),
    #[error("auth endpoints are only reachable from the browser")]
    Unavailable,
}
