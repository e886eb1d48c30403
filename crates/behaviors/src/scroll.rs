//! Smooth anchor scrolling — replaces the instant jump of same-page anchor
//! links with an animated scroll to the target element.

use std::sync::Arc;

use tracing::debug;

use sitekit_core::{Dispatch, InteractionRouter, Surface};

/// Intercepts clicks on anchors whose `href` is a same-page fragment. When
/// the fragment resolves to an element, the default jump is suppressed and
/// a smooth scroll is requested instead; unresolved fragments fall through
/// to the default navigation untouched.
pub struct SmoothAnchorScroll {
    anchor_count: usize,
}

impl SmoothAnchorScroll {
    /// Bind a click handler to every fragment anchor on the page. A page
    /// without such anchors binds nothing and the controller is inert.
    pub fn bind(surface: Arc<dyn Surface>, router: &InteractionRouter) -> Self {
        let anchors = surface.with_attr_prefix("href", "#");
        let anchor_count = anchors.len();

        for anchor in anchors {
            let surface = surface.clone();
            router.on_click(anchor, move || {
                // Re-read the href at click time; bind-time values may be
                // stale if the host rewrote the link.
                let Some(href) = surface.attr(anchor, "href") else {
                    return Dispatch::Continue;
                };
                let Some(fragment) = href.strip_prefix('#') else {
                    return Dispatch::Continue;
                };
                match surface.element_by_dom_id(fragment) {
                    Some(target) => {
                        surface.scroll_into_view(target);
                        Dispatch::PreventDefault
                    }
                    // No element carries the fragment id; let the default
                    // navigation run (and silently go nowhere).
                    None => Dispatch::Continue,
                }
            });
        }

        debug!(anchor_count, "fragment anchors bound");
        Self { anchor_count }
    }

    pub fn anchor_count(&self) -> usize {
        self.anchor_count
    }
}
