use super::*;

#[test]
fn hint_selector_matches_rel_and_href() {
    assert_eq!(hint_selector("/login"), "link[rel=\"prefetch\"][href=\"/login\"]");
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn hint_is_noop_but_callable() {
    hint("/signup");
    hint("/login");
}
