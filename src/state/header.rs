//! Render-mode selection for the site header.
//!
//! The header shows exactly one of three action areas. Selecting which one is
//! a pure function of the session and the navigation flag so every branch can
//! be checked without rendering.

#[cfg(test)]
#[path = "header_test.rs"]
mod header_test;

use crate::net::types::User;
use crate::state::navigation::{CALENDAR, FEATURES_ANCHOR, TRY};

/// Mutually exclusive header action areas.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum HeaderMode {
    /// Session still loading or a navigation is in flight: spinner only.
    Busy,
    /// Signed in: settings menu and greeting.
    Authenticated { display_name: String },
    /// Signed out: sign-in and get-started buttons.
    Anonymous,
}

impl HeaderMode {
    /// Pick the action area. Busy wins over everything, then user presence.
    pub fn select(loading: bool, is_navigating: bool, user: Option<&User>) -> Self {
        if loading || is_navigating {
            return Self::Busy;
        }
        match user {
            Some(user) => Self::Authenticated { display_name: user.display_name().to_owned() },
            None => Self::Anonymous,
        }
    }

    pub fn is_busy(&self) -> bool {
        matches!(self, Self::Busy)
    }
}

/// A header navigation link.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub href: &'static str,
}

const MEMBER_LINKS: [NavLink; 2] = [
    NavLink { label: "Calendar", href: CALENDAR },
    NavLink { label: "Try It", href: TRY },
];

const VISITOR_LINKS: [NavLink; 1] = [NavLink { label: "Features", href: FEATURES_ANCHOR }];

/// Navigation links follow user presence alone; the busy flag only affects the
/// action area.
pub fn nav_links(signed_in: bool) -> &'static [NavLink] {
    if signed_in { &MEMBER_LINKS } else { &VISITOR_LINKS }
}
