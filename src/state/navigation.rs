//! Route table and the header's transient navigation state.
//!
//! SYSTEM CONTEXT
//! ==============
//! The header never talks to `leptos_router` directly; it goes through the
//! `Navigator` seam so click handling can be exercised with a recording fake.

#[cfg(test)]
#[path = "navigation_test.rs"]
mod navigation_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

pub const HOME: &str = "/";
pub const LOGIN: &str = "/login";
pub const SIGNUP: &str = "/signup";
pub const CALENDAR: &str = "/calendar";
pub const TRY: &str = "/try";
pub const FEATURES_ANCHOR: &str = "#features";

/// Routes hinted to the browser as soon as the header mounts, in order.
pub const PREFETCH_ROUTES: [&str; 2] = [SIGNUP, LOGIN];

/// Anonymous call-to-action buttons.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CallToAction {
    SignIn,
    GetStarted,
}

impl CallToAction {
    pub fn route(self) -> &'static str {
        match self {
            Self::SignIn => LOGIN,
            Self::GetStarted => SIGNUP,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::SignIn => "Sign In",
            Self::GetStarted => "Get Started",
        }
    }
}

/// Navigation-in-progress flag owned by a mounted header.
///
/// Once set, primary actions stay disabled until the header unmounts or the
/// router reports a new location and `reset` runs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NavigationState {
    pub is_navigating: bool,
}

impl NavigationState {
    /// Mark navigation as started for `action` and return its target route.
    ///
    /// Returns `None` while a navigation is already in flight.
    pub fn begin(&mut self, action: CallToAction) -> Option<&'static str> {
        if self.is_navigating {
            return None;
        }
        self.is_navigating = true;
        Some(action.route())
    }

    pub fn reset(&mut self) {
        self.is_navigating = false;
    }
}

/// Start navigation for `action`: mark `navigation` busy, then push the route.
///
/// The busy flag is published before the router is called. Returns `true`
/// when a navigation was requested.
pub fn activate<N: Navigator>(
    navigation: RwSignal<NavigationState>,
    action: CallToAction,
    navigator: &N,
) -> bool {
    let Some(path) = navigation.try_update(|state| state.begin(action)).flatten() else {
        return false;
    };
    navigator.push(path);
    true
}

/// Client-side routing operations the header depends on.
pub trait Navigator {
    /// Advisory hint to load `path` ahead of navigation.
    fn prefetch(&self, path: &str);
    /// Navigate to `path`, adding a history entry.
    fn push(&self, path: &str);
    /// Navigate to `path`, replacing the current history entry.
    fn replace(&self, path: &str);
}

/// `Navigator` backed by the function returned from
/// `leptos_router::hooks::use_navigate`.
#[derive(Clone)]
pub struct RouterNavigator<F> {
    navigate: F,
}

impl<F> RouterNavigator<F>
where
    F: Fn(&str, NavigateOptions),
{
    pub fn new(navigate: F) -> Self {
        Self { navigate }
    }
}

impl<F> Navigator for RouterNavigator<F>
where
    F: Fn(&str, NavigateOptions),
{
    fn prefetch(&self, path: &str) {
        crate::util::prefetch::hint(path);
    }

    fn push(&self, path: &str) {
        (self.navigate)(path, NavigateOptions::default());
    }

    fn replace(&self, path: &str) {
        (self.navigate)(path, NavigateOptions { replace: true, ..NavigateOptions::default() });
    }
}
