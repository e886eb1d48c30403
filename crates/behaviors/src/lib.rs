//! SiteKit behaviors — the four independent page controllers for a
//! marketing-style site.
//!
//! # Modules
//!
//! - [`nav`] — Collapsible mobile navigation toggle
//! - [`slider`] — Rotating testimonial slider with auto-advance
//! - [`scroll`] — Smooth-scrolling same-page anchor navigation
//! - [`form`] — Contact-form required-field validation
//!
//! Each controller binds independently and is a no-op when its target
//! elements are absent from the page.

pub mod form;
pub mod nav;
pub mod scroll;
pub mod slider;

use std::sync::Arc;

use tracing::debug;

use sitekit_core::{BehaviorConfig, InteractionRouter, Surface};

pub use form::{email_shape_valid, ContactFormValidator, EmailPredicate};
pub use nav::NavToggle;
pub use scroll::SmoothAnchorScroll;
pub use slider::TestimonialSlider;

/// All four controllers bound against one page, each optional.
pub struct PageBehaviors {
    pub nav: Option<NavToggle>,
    pub slider: Option<Arc<TestimonialSlider>>,
    pub scroll: SmoothAnchorScroll,
    pub form: Option<Arc<ContactFormValidator>>,
}

impl PageBehaviors {
    /// Bind every behavior the page supports. Absent roots disable the
    /// corresponding controller without affecting the others.
    pub fn bind_all(
        surface: Arc<dyn Surface>,
        router: &InteractionRouter,
        config: &BehaviorConfig,
    ) -> Self {
        let nav = NavToggle::bind(surface.clone(), router, &config.nav);
        let slider = TestimonialSlider::bind(surface.clone(), router, &config.slider);
        let scroll = SmoothAnchorScroll::bind(surface.clone(), router);
        let form = ContactFormValidator::bind(surface, router, &config.form);

        debug!(
            nav = nav.is_some(),
            slider = slider.is_some(),
            anchors = scroll.anchor_count(),
            form = form.is_some(),
            "page behaviors bound"
        );

        Self {
            nav,
            slider,
            scroll,
            form,
        }
    }
}
