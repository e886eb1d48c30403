//! Testimonial slider — cyclic rotation over a fixed set of slides with
//! positional indicator dots, advanced by a repeating timer and by dot
//! clicks.

use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use tokio::task::JoinHandle;
use tracing::debug;

use sitekit_core::config::SliderConfig;
use sitekit_core::{Dispatch, ElementId, InteractionRouter, Surface};

/// Rotation state over the slide sequence. One instance per slider; pages
/// with several sliders get independent state.
pub struct TestimonialSlider {
    surface: Arc<dyn Surface>,
    slides: Vec<ElementId>,
    dots: Vec<ElementId>,
    active_class: String,
    current: Mutex<usize>,
}

impl TestimonialSlider {
    /// Bind to the page: collect slides and dots, show slide 0
    /// synchronously, and register a jump handler on each dot. Returns
    /// `None` (no timer, no listeners) when the page has no slides.
    pub fn bind(
        surface: Arc<dyn Surface>,
        router: &InteractionRouter,
        config: &SliderConfig,
    ) -> Option<Arc<Self>> {
        let slides = surface.with_class(&config.slide_class);
        if slides.is_empty() {
            return None;
        }
        let dots = surface.with_class(&config.dot_class);

        let slider = Arc::new(Self {
            surface,
            slides,
            dots: dots.clone(),
            active_class: config.active_class.clone(),
            current: Mutex::new(0),
        });
        slider.show_slide(0);

        for (index, dot) in dots.into_iter().enumerate() {
            let slider = slider.clone();
            router.on_click(dot, move || {
                slider.show_slide(index);
                Dispatch::Continue
            });
        }

        Some(slider)
    }

    /// Transition to `index`: exactly that slide visible, exactly its dot
    /// active. Slide positions with no matching dot are skipped silently —
    /// fewer dots than slides is an accepted page shape, not an error.
    /// Out-of-range indices are ignored.
    pub fn show_slide(&self, index: usize) {
        if index >= self.slides.len() {
            return;
        }
        for (i, slide) in self.slides.iter().enumerate() {
            self.surface.set_visible(*slide, i == index);
            if let Some(dot) = self.dots.get(i) {
                self.surface.set_class(*dot, &self.active_class, i == index);
            }
        }
        *self.current.lock() = index;
        debug!(index, "slide shown");
    }

    /// Advance one position, wrapping modulo the slide count — the
    /// sequence is cyclic, never clamped at the end.
    pub fn next_slide(&self) {
        let next = (*self.current.lock() + 1) % self.slides.len();
        self.show_slide(next);
    }

    pub fn current_index(&self) -> usize {
        *self.current.lock()
    }

    pub fn slide_count(&self) -> usize {
        self.slides.len()
    }

    pub fn slides(&self) -> &[ElementId] {
        &self.slides
    }

    pub fn dots(&self) -> &[ElementId] {
        &self.dots
    }

    /// Spawn the repeating auto-advance timer. It runs for the life of the
    /// process on a fixed cadence; manual dot navigation does not reset it,
    /// so a jump shortly before a tick is followed by an automatic advance
    /// on the original schedule. That matches the shipped page behavior and
    /// is kept deliberately.
    pub fn start_auto_advance(self: &Arc<Self>, period: Duration) -> JoinHandle<()> {
        let slider = self.clone();
        tokio::spawn(async move {
            let mut interval = tokio::time::interval(period);
            // The first tick completes immediately; slide 0 is already shown.
            interval.tick().await;
            loop {
                interval.tick().await;
                slider.next_slide();
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sitekit_core::page::{ElementNode, PageDocument};
    use sitekit_core::surface::{page_surface, PageSurface};
    use sitekit_core::Interaction;

    fn slider_page(slides: usize, dots: usize) -> PageDocument {
        let mut page = PageDocument::new();
        let section = page.append(None, ElementNode::new("section"));
        for _ in 0..slides {
            page.append(
                Some(section),
                ElementNode::new("div").with_class("testimonial-slide"),
            );
        }
        for _ in 0..dots {
            page.append(Some(section), ElementNode::new("span").with_class("dot"));
        }
        page
    }

    fn bind(
        surface: Arc<PageSurface>,
        router: &InteractionRouter,
    ) -> Arc<TestimonialSlider> {
        TestimonialSlider::bind(surface, router, &SliderConfig::default())
            .expect("slider should bind")
    }

    fn visible_slides(surface: &PageSurface, slider: &TestimonialSlider) -> Vec<usize> {
        (0..slider.slide_count())
            .filter(|i| surface.is_visible(slider.slides[*i]))
            .collect()
    }

    #[test]
    fn test_bind_shows_first_slide() {
        let surface = page_surface(slider_page(3, 3));
        let router = InteractionRouter::new();
        let slider = bind(surface.clone(), &router);

        assert_eq!(slider.current_index(), 0);
        assert_eq!(visible_slides(&surface, &slider), vec![0]);
        assert!(surface.has_class(slider.dots[0], "active"));
        assert!(!surface.has_class(slider.dots[1], "active"));
    }

    #[test]
    fn test_show_slide_exactly_one_visible() {
        let surface = page_surface(slider_page(4, 4));
        let router = InteractionRouter::new();
        let slider = bind(surface.clone(), &router);

        for i in 0..4 {
            slider.show_slide(i);
            assert_eq!(visible_slides(&surface, &slider), vec![i]);
            for (d, dot) in slider.dots.iter().enumerate() {
                assert_eq!(surface.has_class(*dot, "active"), d == i);
            }
        }
    }

    #[test]
    fn test_next_slide_wraps_at_end() {
        let surface = page_surface(slider_page(3, 3));
        let router = InteractionRouter::new();
        let slider = bind(surface, &router);

        slider.show_slide(2);
        slider.next_slide();
        assert_eq!(slider.current_index(), 0);
    }

    #[test]
    fn test_n_advances_return_to_start() {
        let surface = page_surface(slider_page(5, 5));
        let router = InteractionRouter::new();
        let slider = bind(surface, &router);

        slider.show_slide(3);
        for _ in 0..5 {
            slider.next_slide();
        }
        assert_eq!(slider.current_index(), 3);
    }

    #[test]
    fn test_dot_click_jumps_regardless_of_prior_index() {
        let surface = page_surface(slider_page(3, 3));
        let router = InteractionRouter::new();
        let slider = bind(surface.clone(), &router);

        router.dispatch(Interaction::Click(slider.dots[2]));
        assert_eq!(slider.current_index(), 2);
        assert_eq!(visible_slides(&surface, &slider), vec![2]);

        router.dispatch(Interaction::Click(slider.dots[0]));
        assert_eq!(slider.current_index(), 0);
    }

    #[test]
    fn test_missing_dots_are_skipped() {
        let surface = page_surface(slider_page(3, 2));
        let router = InteractionRouter::new();
        let slider = bind(surface.clone(), &router);

        // Slide 2 has no dot; transition still applies to slides.
        slider.show_slide(2);
        assert_eq!(slider.current_index(), 2);
        assert_eq!(visible_slides(&surface, &slider), vec![2]);
        assert!(!surface.has_class(slider.dots[0], "active"));
        assert!(!surface.has_class(slider.dots[1], "active"));
    }

    #[test]
    fn test_no_slides_means_no_binding() {
        let surface = page_surface(slider_page(0, 0));
        let router = InteractionRouter::new();

        assert!(TestimonialSlider::bind(surface, &router, &SliderConfig::default()).is_none());
        assert_eq!(router.click_target_count(), 0);
    }

    #[test]
    fn test_out_of_range_show_is_ignored() {
        let surface = page_surface(slider_page(2, 2));
        let router = InteractionRouter::new();
        let slider = bind(surface.clone(), &router);

        slider.show_slide(7);
        assert_eq!(slider.current_index(), 0);
        assert_eq!(visible_slides(&surface, &slider), vec![0]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_auto_advance_on_five_second_cadence() {
        let surface = page_surface(slider_page(3, 3));
        let router = InteractionRouter::new();
        let slider = bind(surface, &router);
        let _timer = slider.start_auto_advance(Duration::from_millis(5000));

        tokio::time::sleep(Duration::from_millis(5001)).await;
        assert_eq!(slider.current_index(), 1);

        tokio::time::sleep(Duration::from_millis(5000)).await;
        assert_eq!(slider.current_index(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_manual_jump_does_not_reset_timer() {
        let surface = page_surface(slider_page(3, 3));
        let router = InteractionRouter::new();
        let slider = bind(surface, &router);
        let _timer = slider.start_auto_advance(Duration::from_millis(5000));

        // Jump to slide 2 halfway through the interval; the tick still
        // fires at the original 5 s mark and advances 2 -> 0.
        tokio::time::sleep(Duration::from_millis(2500)).await;
        router.dispatch(Interaction::Click(slider.dots[2]));
        assert_eq!(slider.current_index(), 2);

        tokio::time::sleep(Duration::from_millis(2501)).await;
        assert_eq!(slider.current_index(), 0);
    }
}
