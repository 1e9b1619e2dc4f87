//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`auth`, `header`, `navigation`) so the header
//! can be driven and tested without a mounted Leptos tree.

pub mod auth;
pub mod header;
pub mod navigation;
