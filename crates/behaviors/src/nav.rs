//! Mobile navigation toggle — shows/hides the nav links container when the
//! hamburger trigger is clicked.

use std::sync::Arc;

use tracing::debug;

use sitekit_core::config::NavConfig;
use sitekit_core::{Dispatch, ElementId, InteractionRouter, Surface};

/// Click-to-toggle controller for the mobile navigation panel. The open
/// state lives entirely in the container's class list; there is no shadow
/// variable to drift out of sync.
pub struct NavToggle {
    trigger: ElementId,
    links: ElementId,
}

impl NavToggle {
    /// Bind to the page. Returns `None` (inert, no listener) if the trigger
    /// or the links container is absent.
    pub fn bind(
        surface: Arc<dyn Surface>,
        router: &InteractionRouter,
        config: &NavConfig,
    ) -> Option<Self> {
        let trigger = surface.first_with_class(&config.trigger_class)?;
        let links = surface.first_with_class(&config.links_class)?;
        let open_class = config.open_class.clone();

        router.on_click(trigger, move || {
            let open = surface.toggle_class(links, &open_class);
            debug!(open, "nav toggled");
            Dispatch::Continue
        });

        Some(Self { trigger, links })
    }

    pub fn trigger(&self) -> ElementId {
        self.trigger
    }

    pub fn links(&self) -> ElementId {
        self.links
    }
}
