//! "Built with Bolt.new" badge linking out to the builder's site.

#[cfg(test)]
#[path = "badge_test.rs"]
mod badge_test;

use leptos::prelude::*;

pub const BADGE_URL: &str = "https://bolt.new/";
pub const BADGE_TITLE: &str = "Built with Bolt.new";
pub const DEFAULT_SIZE: u32 = 40;

const BASE_CLASS: &str = "badge";

/// Badge artwork.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BadgeVariant {
    /// Dark circle, for light backgrounds.
    #[default]
    Primary,
    /// Light circle, for dark backgrounds.
    Secondary,
}

impl BadgeVariant {
    pub fn asset_path(self) -> &'static str {
        match self {
            Self::Primary => "/badges/bolt-black-circle.png",
            Self::Secondary => "/badges/bolt-white-circle.png",
        }
    }
}

/// Resolved badge props.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BadgeConfig {
    variant: BadgeVariant,
    size: u32,
    class_override: Option<String>,
}

impl BadgeConfig {
    /// A zero `size` falls back to `DEFAULT_SIZE`.
    pub fn new(variant: BadgeVariant, size: u32) -> Self {
        let size = if size == 0 { DEFAULT_SIZE } else { size };
        Self { variant, size, class_override: None }
    }

    #[must_use]
    pub fn with_class(mut self, class: Option<String>) -> Self {
        self.class_override = class.filter(|c| !c.trim().is_empty());
        self
    }

    pub fn size(&self) -> u32 {
        self.size
    }

    pub fn asset_path(&self) -> &'static str {
        self.variant.asset_path()
    }

    /// Anchor classes with the caller's override appended.
    pub fn anchor_class(&self) -> String {
        match &self.class_override {
            Some(extra) => format!("{BASE_CLASS} {}", extra.trim()),
            None => BASE_CLASS.to_owned(),
        }
    }
}

impl Default for BadgeConfig {
    fn default() -> Self {
        Self::new(BadgeVariant::default(), DEFAULT_SIZE)
    }
}

/// Square badge image opening [`BADGE_URL`] in a new tab without sending a
/// referrer.
#[component]
pub fn Badge(
    #[prop(optional)] variant: BadgeVariant,
    #[prop(default = DEFAULT_SIZE)] size: u32,
    #[prop(optional, into)] class: Option<String>,
) -> impl IntoView {
    let config = BadgeConfig::new(variant, size).with_class(class);
    let size = config.size().to_string();

    view! {
        <a
            href=BADGE_URL
            target="_blank"
            rel="noopener noreferrer"
            class=config.anchor_class()
            title=BADGE_TITLE
        >
            <img
                class="badge__image"
                src=config.asset_path()
                alt=BADGE_TITLE
                width=size.clone()
                height=size
            />
        </a>
    }
}
