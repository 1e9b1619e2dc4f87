//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Every page renders the shared `Header` first; page bodies beyond the landing
//! page are placeholders for features hosted elsewhere.

pub mod home;
pub mod placeholder;
