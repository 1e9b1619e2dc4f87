//! Networking modules for the auth HTTP surface.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` issues the session calls and `types` defines the JSON schema they
//! exchange with the auth service.

pub mod api;
pub mod types;
