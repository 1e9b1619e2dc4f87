#![cfg(feature = "ssr")]

use leptos_router::components::Router;
use leptos_router::location::RequestUrl;

use super::*;
use crate::net::types::User;
use crate::state::auth::AuthState;

fn ada() -> User {
    User { id: "u-1".to_owned(), email: "ada@example.com".to_owned(), name: None }
}

fn render_header(state: AuthState) -> String {
    let owner = Owner::new();
    owner.with(|| {
        provide_context(RequestUrl::new("/"));
        let session = AuthSession::with_state(state);
        view! {
            <Router>
                <Header session=session/>
            </Router>
        }
        .to_html()
    })
}

#[test]
fn signed_out_header_offers_features_and_enabled_calls_to_action() {
    let html = render_header(AuthState::signed_out());
    assert!(html.contains(r##"href="#features""##), "{html}");
    assert!(html.contains(">Sign In</button>"), "{html}");
    assert!(html.contains(">Get Started</button>"), "{html}");
    assert!(!html.contains("disabled"), "{html}");
    assert!(!html.contains(r#"role="status""#), "{html}");
    assert!(!html.contains(r#"href="/calendar""#), "{html}");
}

#[test]
fn loading_header_shows_spinner_instead_of_actions() {
    let html = render_header(AuthState { user: Some(ada()), loading: true });
    assert!(html.contains(r#"role="status""#), "{html}");
    assert!(!html.contains("<button"), "{html}");
    assert!(!html.contains("Welcome, "), "{html}");
}

#[test]
fn loading_header_keeps_links_for_present_user() {
    let html = render_header(AuthState { user: Some(ada()), loading: true });
    assert!(html.contains(r#"href="/calendar""#), "{html}");
    assert!(!html.contains(r##"href="#features""##), "{html}");
}

#[test]
fn signed_in_header_greets_by_email_local_part() {
    let html = render_header(AuthState::signed_in(ada()));
    assert!(html.contains(r#"href="/calendar""#), "{html}");
    assert!(html.contains(r#"href="/try""#), "{html}");
    assert!(html.contains(r#"aria-label="Settings""#), "{html}");
    assert!(!html.contains("Sign In"), "{html}");

    let welcome = html.find("Welcome, ").expect("greeting rendered");
    assert!(html[welcome..].contains("ada"), "{html}");
    assert!(!html.contains("ada@example.com"), "{html}");
}

#[test]
fn header_carries_secondary_badge_at_44px() {
    let html = render_header(AuthState::signed_out());
    assert!(html.contains(r#"src="/badges/bolt-white-circle.png""#), "{html}");
    assert!(html.contains(r#"width="44""#), "{html}");
    assert!(html.contains("badge site-header__badge"), "{html}");
}
