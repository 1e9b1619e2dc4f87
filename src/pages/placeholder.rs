//! Route shells for the pages the header navigates to.

use leptos::prelude::*;

use crate::components::header::Header;

#[component]
fn PlaceholderPage(title: &'static str) -> impl IntoView {
    view! {
        <Header/>
        <main class="placeholder">
            <h1>{title}</h1>
        </main>
    }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    view! { <PlaceholderPage title="Sign in"/> }
}

#[component]
pub fn SignupPage() -> impl IntoView {
    view! { <PlaceholderPage title="Create your account"/> }
}

#[component]
pub fn CalendarPage() -> impl IntoView {
    view! { <PlaceholderPage title="Calendar"/> }
}

#[component]
pub fn TryPage() -> impl IntoView {
    view! { <PlaceholderPage title="Try it"/> }
}
