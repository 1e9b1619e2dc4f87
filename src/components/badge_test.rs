use super::*;

#[test]
fn default_badge_is_primary_at_default_size() {
    let config = BadgeConfig::default();
    assert_eq!(config.size(), 40);
    assert_eq!(config.asset_path(), BadgeVariant::Primary.asset_path());
    assert_eq!(config.asset_path(), "/badges/bolt-black-circle.png");
}

#[test]
fn secondary_badge_at_44_uses_light_artwork() {
    let config = BadgeConfig::new(BadgeVariant::Secondary, 44);
    assert_eq!(config.size(), 44);
    assert_eq!(config.asset_path(), "/badges/bolt-white-circle.png");
}

#[test]
fn badge_artwork_is_served_from_badges_route() {
    for variant in [BadgeVariant::Primary, BadgeVariant::Secondary] {
        assert!(variant.asset_path().starts_with("/badges/"));
        assert!(variant.asset_path().ends_with(".png"));
    }
}

#[test]
fn zero_size_falls_back_to_default() {
    assert_eq!(BadgeConfig::new(BadgeVariant::Primary, 0).size(), DEFAULT_SIZE);
}

#[test]
fn class_override_is_appended() {
    let config = BadgeConfig::default().with_class(Some("  site-header__badge ".to_owned()));
    assert_eq!(config.anchor_class(), "badge site-header__badge");
}

#[test]
fn blank_class_override_is_dropped() {
    let config = BadgeConfig::default().with_class(Some("   ".to_owned()));
    assert_eq!(config.anchor_class(), "badge");
}

// =============================================================
// Rendered markup
// =============================================================

#[cfg(feature = "ssr")]
fn render_badge(variant: BadgeVariant, size: u32) -> String {
    let owner = Owner::new();
    owner.with(|| view! { <Badge variant=variant size=size/> }.to_html())
}

#[cfg(feature = "ssr")]
#[test]
fn secondary_badge_renders_44px_image_opening_bolt_in_new_tab() {
    let html = render_badge(BadgeVariant::Secondary, 44);
    assert!(html.contains(r#"href="https://bolt.new/""#), "{html}");
    assert!(html.contains(r#"target="_blank""#), "{html}");
    assert!(html.contains(r#"rel="noopener noreferrer""#), "{html}");
    assert!(html.contains(r#"src="/badges/bolt-white-circle.png""#), "{html}");
    assert!(html.contains(r#"width="44""#), "{html}");
    assert!(html.contains(r#"height="44""#), "{html}");
    assert!(html.contains(r#"alt="Built with Bolt.new""#), "{html}");
}

#[cfg(feature = "ssr")]
#[test]
fn zero_size_badge_renders_at_default_size() {
    let html = render_badge(BadgeVariant::Primary, 0);
    assert!(html.contains(r#"src="/badges/bolt-black-circle.png""#), "{html}");
    assert!(html.contains(r#"width="40""#), "{html}");
    assert!(html.contains(r#"height="40""#), "{html}");
}

#[test]
fn readme_documents_every_badge_asset() {
    let readme = include_str!("../../README.md");
    for variant in [BadgeVariant::Primary, BadgeVariant::Secondary] {
        let file = variant.asset_path().trim_start_matches("/badges/");
        assert!(readme.contains(file), "README missing {file}");
    }
}
