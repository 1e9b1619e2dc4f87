//! Route prefetch hints.
//!
//! Appends `<link rel="prefetch" href=...>` to the document head so the
//! browser can fetch a route ahead of navigation. Requires a browser
//! environment.
//!
//! TRADE-OFFS
//! ==========
//! Hints are advisory and best-effort: any DOM failure is ignored, and SSR
//! paths no-op to keep server rendering deterministic.

#[cfg(test)]
#[path = "prefetch_test.rs"]
mod prefetch_test;

/// CSS selector matching an existing hint for `path`.
#[cfg(any(test, feature = "hydrate"))]
fn hint_selector(path: &str) -> String {
    format!("link[rel=\"prefetch\"][href=\"{path}\"]")
}

/// Ask the browser to prefetch `path`. Repeated hints for the same path add a
/// single link element.
pub fn hint(path: &str) {
    #[cfg(feature = "hydrate")]
    {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };
        if let Ok(Some(_)) = document.query_selector(&hint_selector(path)) {
            return;
        }
        let Some(head) = document.head() else {
            return;
        };
        let Ok(link) = document.create_element("link") else {
            return;
        };
        let _ = link.set_attribute("rel", "prefetch");
        let _ = link.set_attribute("href", path);
        let _ = head.append_child(&link);
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = path;
    }
}
