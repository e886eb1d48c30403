//! Interaction surface — the capability set behaviors use to read and
//! mutate the page.
//!
//! Behaviors accept an `Arc<dyn Surface>` so the rendering environment can
//! be substituted wholesale: the standard [`PageSurface`] wraps an in-memory
//! [`PageDocument`]; a host embedding the behaviors against a real renderer
//! implements the same trait.

use std::sync::Arc;

use parking_lot::{Mutex, RwLock};
use tracing::debug;

use crate::page::{ElementId, PageDocument};

/// Everything a behavior may do to the page. Queries reflect document
/// order; mutations take effect synchronously.
pub trait Surface: Send + Sync {
    fn element_by_dom_id(&self, id: &str) -> Option<ElementId>;
    fn first_with_class(&self, class: &str) -> Option<ElementId>;
    fn with_class(&self, class: &str) -> Vec<ElementId>;
    fn with_attr_prefix(&self, name: &str, prefix: &str) -> Vec<ElementId>;
    fn next_sibling(&self, el: ElementId) -> Option<ElementId>;
    fn required_fields(&self, form: ElementId) -> Vec<ElementId>;
    fn attr(&self, el: ElementId, name: &str) -> Option<String>;
    fn has_class(&self, el: ElementId, class: &str) -> bool;
    /// Returns whether the class is present after the toggle.
    fn toggle_class(&self, el: ElementId, class: &str) -> bool;
    fn set_class(&self, el: ElementId, class: &str, on: bool);
    fn is_visible(&self, el: ElementId) -> bool;
    fn set_visible(&self, el: ElementId, visible: bool);
    fn text(&self, el: ElementId) -> String;
    fn set_text(&self, el: ElementId, text: &str);
    /// Request an animated scroll bringing `el` into view.
    fn scroll_into_view(&self, el: ElementId);
}

/// Standard surface over an in-memory page document. There is no real
/// viewport, so scroll requests are recorded for the host (and tests) to
/// observe via [`PageSurface::last_scroll_target`].
pub struct PageSurface {
    doc: RwLock<PageDocument>,
    last_scroll: Mutex<Option<ElementId>>,
}

impl PageSurface {
    pub fn new(doc: PageDocument) -> Self {
        Self {
            doc: RwLock::new(doc),
            last_scroll: Mutex::new(None),
        }
    }

    /// The most recent smooth-scroll target, if any scroll was requested.
    pub fn last_scroll_target(&self) -> Option<ElementId> {
        *self.last_scroll.lock()
    }

    /// Clone of the current document, for snapshotting.
    pub fn document(&self) -> PageDocument {
        self.doc.read().clone()
    }

    /// Overwrite an attribute, e.g. a field's `value` as the user types.
    pub fn set_attr(&self, el: ElementId, name: &str, value: &str) {
        self.doc.write().set_attr(el, name, value);
    }
}

impl Surface for PageSurface {
    fn element_by_dom_id(&self, id: &str) -> Option<ElementId> {
        self.doc.read().element_by_dom_id(id)
    }

    fn first_with_class(&self, class: &str) -> Option<ElementId> {
        self.doc.read().first_with_class(class)
    }

    fn with_class(&self, class: &str) -> Vec<ElementId> {
        self.doc.read().with_class(class)
    }

    fn with_attr_prefix(&self, name: &str, prefix: &str) -> Vec<ElementId> {
        self.doc.read().with_attr_prefix(name, prefix)
    }

    fn next_sibling(&self, el: ElementId) -> Option<ElementId> {
        self.doc.read().next_sibling(el)
    }

    fn required_fields(&self, form: ElementId) -> Vec<ElementId> {
        self.doc.read().required_fields(form)
    }

    fn attr(&self, el: ElementId, name: &str) -> Option<String> {
        self.doc.read().attr(el, name)
    }

    fn has_class(&self, el: ElementId, class: &str) -> bool {
        self.doc.read().has_class(el, class)
    }

    fn toggle_class(&self, el: ElementId, class: &str) -> bool {
        self.doc.write().toggle_class(el, class)
    }

    fn set_class(&self, el: ElementId, class: &str, on: bool) {
        self.doc.write().set_class(el, class, on);
    }

    fn is_visible(&self, el: ElementId) -> bool {
        self.doc.read().is_visible(el)
    }

    fn set_visible(&self, el: ElementId, visible: bool) {
        self.doc.write().set_visible(el, visible);
    }

    fn text(&self, el: ElementId) -> String {
        self.doc.read().text(el)
    }

    fn set_text(&self, el: ElementId, text: &str) {
        self.doc.write().set_text(el, text);
    }

    fn scroll_into_view(&self, el: ElementId) {
        debug!(target_element = el.0, "smooth scroll requested");
        *self.last_scroll.lock() = Some(el);
    }
}

/// Convenience: wrap a document in the standard surface.
pub fn page_surface(doc: PageDocument) -> Arc<PageSurface> {
    Arc::new(PageSurface::new(doc))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::ElementNode;

    #[test]
    fn test_surface_mutations_visible_through_queries() {
        let mut doc = PageDocument::new();
        let section = doc.append(None, ElementNode::new("section").with_dom_id("about"));
        let surface = page_surface(doc);

        surface.set_visible(section, false);
        assert!(!surface.is_visible(section));

        surface.set_text(section, "hello");
        assert_eq!(surface.text(section), "hello");

        assert_eq!(surface.last_scroll_target(), None);
        surface.scroll_into_view(section);
        assert_eq!(surface.last_scroll_target(), Some(section));
    }
}
