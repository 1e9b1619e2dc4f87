//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the site chrome shared by every page, reading the
//! session from the `AuthSession` provided by the app root.

pub mod badge;
pub mod header;
pub mod settings_menu;
pub mod spinner;
