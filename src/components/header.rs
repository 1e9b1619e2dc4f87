//! Site header: logo, session-aware navigation, badge, and account actions.
//!
//! SYSTEM CONTEXT
//! ==============
//! Rendered at the top of every page. Reads the shared `AuthSession`, keeps a
//! local navigation-in-progress flag, and hands routing and sign-out to the
//! `Navigator` and `SessionActions` seams.

#[cfg(test)]
#[path = "header_test.rs"]
mod header_test;

use leptos::prelude::*;
use leptos_router::hooks::{use_location, use_navigate};

use crate::components::badge::{Badge, BadgeVariant};
use crate::components::settings_menu::SettingsMenu;
use crate::components::spinner::Spinner;
use crate::state::auth::{AuthSession, sign_out_and_go_home};
use crate::state::header::{HeaderMode, nav_links};
use crate::state::navigation::{
    CallToAction, HOME, NavigationState, Navigator, PREFETCH_ROUTES, RouterNavigator, activate,
};

/// Page header.
///
/// `session` defaults to the `AuthSession` in context; pass one explicitly to
/// render the header against a different session.
#[component]
pub fn Header(#[prop(optional)] session: Option<AuthSession>) -> impl IntoView {
    let session = session.unwrap_or_else(expect_context::<AuthSession>);
    let auth = session.state();
    let navigation = RwSignal::new(NavigationState::default());
    let navigator = RouterNavigator::new(use_navigate());
    let location = use_location();

    // Warm the auth routes once mounted.
    {
        let navigator = navigator.clone();
        Effect::new(move || {
            for path in PREFETCH_ROUTES {
                navigator.prefetch(path);
            }
        });
    }

    // A header that survives a route change must not stay busy.
    Effect::new(move |previous: Option<String>| {
        let path = location.pathname.get();
        if previous.is_some_and(|prev| prev != path) {
            navigation.update(NavigationState::reset);
        }
        path
    });

    let mode = Memo::new(move |_| {
        let is_navigating = navigation.get().is_navigating;
        auth.with(|state| HeaderMode::select(state.loading, is_navigating, state.user.as_ref()))
    });
    let signed_in = move || auth.with(|state| state.user.is_some());
    let busy = move || mode.get().is_busy();

    let on_call_to_action = {
        let navigator = navigator.clone();
        move |action: CallToAction| {
            activate(navigation, action, &navigator);
        }
    };

    let on_sign_out = {
        let navigator = navigator.clone();
        Callback::new(move |()| {
            let navigator = navigator.clone();
            leptos::task::spawn_local(async move {
                if let Err(err) = sign_out_and_go_home(&session, &navigator).await {
                    #[cfg(feature = "hydrate")]
                    log::warn!("sign-out failed: {err}");
                    #[cfg(not(feature = "hydrate"))]
                    let _ = err;
                }
            });
        })
    };

    view! {
        <header class="site-header site-header--enter">
            <div class="site-header__inner">
                <a href=HOME class="site-header__logo">
                    "PicSchedule"
                </a>

                <nav class="site-header__nav">
                    {move || {
                        nav_links(signed_in())
                            .iter()
                            .map(|link| {
                                view! {
                                    <a href=link.href class="site-header__link">
                                        {link.label}
                                    </a>
                                }
                            })
                            .collect_view()
                    }}
                </nav>

                <div class="site-header__actions">
                    <Badge variant=BadgeVariant::Secondary size=44 class="site-header__badge"/>
                    {move || match mode.get() {
                        HeaderMode::Busy => view! { <Spinner/> }.into_any(),
                        HeaderMode::Authenticated { display_name } => {
                            view! {
                                <div class="site-header__account">
                                    <SettingsMenu on_sign_out=on_sign_out/>
                                    <span class="site-header__welcome">
                                        "Welcome, " {display_name}
                                    </span>
                                </div>
                            }
                                .into_any()
                        }
                        HeaderMode::Anonymous => {
                            let sign_in = on_call_to_action.clone();
                            let get_started = on_call_to_action.clone();
                            view! {
                                <button
                                    class="btn btn--ghost"
                                    disabled=busy
                                    on:click=move |_| sign_in(CallToAction::SignIn)
                                >
                                    {CallToAction::SignIn.label()}
                                </button>
                                <button
                                    class="btn btn--primary"
                                    disabled=busy
                                    on:click=move |_| get_started(CallToAction::GetStarted)
                                >
                                    {CallToAction::GetStarted.label()}
                                </button>
                            }
                                .into_any()
                        }
                    }}
                </div>
            </div>
        </header>
    }
}
