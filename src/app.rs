//! Root application component with routing and the session context.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::home::HomePage;
use crate::pages::placeholder::{CalendarPage, LoginPage, SignupPage, TryPage};
use crate::state::auth::AuthSession;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the shared `AuthSession` and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = AuthSession::new();
    provide_context(session);

    // The session cookie is only visible to the browser.
    #[cfg(feature = "hydrate")]
    session.load();

    view! {
        <Stylesheet id="leptos" href="/pkg/picschedule-web.css"/>
        <Title text="PicSchedule"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=HomePage/>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("signup") view=SignupPage/>
                <Route path=StaticSegment("calendar") view=CalendarPage/>
                <Route path=StaticSegment("try") view=TryPage/>
            </Routes>
        </Router>
    }
}
