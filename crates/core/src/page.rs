//! In-memory page document — a flat arena of elements in document order.
//!
//! Behaviors never see a real DOM; they read and mutate this model through
//! the [`crate::surface::Surface`] trait. Snapshots serialize to JSON so a
//! page can be loaded by the demo harness or constructed inline by tests.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::{SiteKitError, SiteKitResult};

/// Handle to an element inside a [`PageDocument`]. Indexes the arena;
/// valid for the lifetime of the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ElementId(pub usize);

/// A single element: tag, identity, classes, attributes, text content, and
/// a visibility flag standing in for the stylesheet's display property.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ElementNode {
    pub tag: String,
    #[serde(default)]
    pub dom_id: Option<String>,
    #[serde(default)]
    pub classes: Vec<String>,
    #[serde(default)]
    pub attributes: HashMap<String, String>,
    #[serde(default)]
    pub text: String,
    #[serde(default = "default_visible")]
    pub visible: bool,
    #[serde(default)]
    pub parent: Option<ElementId>,
}

fn default_visible() -> bool {
    true
}

impl ElementNode {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            dom_id: None,
            classes: Vec::new(),
            attributes: HashMap::new(),
            text: String::new(),
            visible: true,
            parent: None,
        }
    }

    pub fn with_dom_id(mut self, id: impl Into<String>) -> Self {
        self.dom_id = Some(id.into());
        self
    }

    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.classes.push(class.into());
        self
    }

    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }
}

/// The page: elements stored in document order. Sibling order is arena
/// order; "immediately following sibling" is the first later element that
/// shares the same parent.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PageDocument {
    nodes: Vec<ElementNode>,
}

impl PageDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an element under `parent` (or at the top level) and return
    /// its handle.
    pub fn append(&mut self, parent: Option<ElementId>, mut node: ElementNode) -> ElementId {
        node.parent = parent;
        self.nodes.push(node);
        ElementId(self.nodes.len() - 1)
    }

    /// Parse a page snapshot from JSON. Every parent handle must point at
    /// an earlier element; a dangling or forward parent would corrupt
    /// sibling and descendant lookups.
    pub fn from_json(raw: &str) -> SiteKitResult<Self> {
        let doc: Self = serde_json::from_str(raw)?;
        for (i, node) in doc.nodes.iter().enumerate() {
            if let Some(parent) = node.parent {
                if parent.0 >= i {
                    return Err(SiteKitError::Snapshot(format!(
                        "element {i} has out-of-order parent {}",
                        parent.0
                    )));
                }
            }
        }
        Ok(doc)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn node(&self, el: ElementId) -> Option<&ElementNode> {
        self.nodes.get(el.0)
    }

    fn node_mut(&mut self, el: ElementId) -> Option<&mut ElementNode> {
        self.nodes.get_mut(el.0)
    }

    /// First element whose `dom_id` equals `id`.
    pub fn element_by_dom_id(&self, id: &str) -> Option<ElementId> {
        self.nodes
            .iter()
            .position(|n| n.dom_id.as_deref() == Some(id))
            .map(ElementId)
    }

    /// All elements carrying `class`, in document order.
    pub fn with_class(&self, class: &str) -> Vec<ElementId> {
        self.nodes
            .iter()
            .enumerate()
            .filter(|(_, n)| n.classes.iter().any(|c| c == class))
            .map(|(i, _)| ElementId(i))
            .collect()
    }

    pub fn first_with_class(&self, class: &str) -> Option<ElementId> {
        self.with_class(class).into_iter().next()
    }

    /// All elements whose attribute `name` starts with `prefix`, in
    /// document order. Covers the `a[href^="#"]` selector shape.
    pub fn with_attr_prefix(&self, name: &str, prefix: &str) -> Vec<ElementId> {
        self.nodes
            .iter()
            .enumerate()
            .filter(|(_, n)| {
                n.attributes
                    .get(name)
                    .map(|v| v.starts_with(prefix))
                    .unwrap_or(false)
            })
            .map(|(i, _)| ElementId(i))
            .collect()
    }

    /// The element immediately following `el` among its siblings, if any.
    pub fn next_sibling(&self, el: ElementId) -> Option<ElementId> {
        let parent = self.node(el)?.parent;
        self.nodes
            .iter()
            .enumerate()
            .skip(el.0 + 1)
            .find(|(_, n)| n.parent == parent)
            .map(|(i, _)| ElementId(i))
    }

    /// Direct and indirect children of `root` carrying a `required`
    /// attribute, in document order.
    pub fn required_fields(&self, root: ElementId) -> Vec<ElementId> {
        self.nodes
            .iter()
            .enumerate()
            .filter(|(i, n)| {
                n.attributes.contains_key("required") && self.is_descendant_of(ElementId(*i), root)
            })
            .map(|(i, _)| ElementId(i))
            .collect()
    }

    fn is_descendant_of(&self, el: ElementId, root: ElementId) -> bool {
        let mut cursor = self.node(el).and_then(|n| n.parent);
        while let Some(parent) = cursor {
            if parent == root {
                return true;
            }
            cursor = self.node(parent).and_then(|n| n.parent);
        }
        false
    }

    pub fn attr(&self, el: ElementId, name: &str) -> Option<String> {
        self.node(el).and_then(|n| n.attributes.get(name).cloned())
    }

    pub fn set_attr(&mut self, el: ElementId, name: &str, value: &str) {
        if let Some(node) = self.node_mut(el) {
            node.attributes.insert(name.to_string(), value.to_string());
        }
    }

    pub fn has_class(&self, el: ElementId, class: &str) -> bool {
        self.node(el)
            .map(|n| n.classes.iter().any(|c| c == class))
            .unwrap_or(false)
    }

    /// Toggle `class` on `el`; returns whether the class is present after
    /// the toggle.
    pub fn toggle_class(&mut self, el: ElementId, class: &str) -> bool {
        let Some(node) = self.node_mut(el) else {
            return false;
        };
        if let Some(pos) = node.classes.iter().position(|c| c == class) {
            node.classes.remove(pos);
            false
        } else {
            node.classes.push(class.to_string());
            true
        }
    }

    pub fn set_class(&mut self, el: ElementId, class: &str, on: bool) {
        let Some(node) = self.node_mut(el) else {
            return;
        };
        let present = node.classes.iter().position(|c| c == class);
        match (on, present) {
            (true, None) => node.classes.push(class.to_string()),
            (false, Some(pos)) => {
                node.classes.remove(pos);
            }
            _ => {}
        }
    }

    pub fn is_visible(&self, el: ElementId) -> bool {
        self.node(el).map(|n| n.visible).unwrap_or(false)
    }

    pub fn set_visible(&mut self, el: ElementId, visible: bool) {
        if let Some(node) = self.node_mut(el) {
            node.visible = visible;
        }
    }

    pub fn text(&self, el: ElementId) -> String {
        self.node(el).map(|n| n.text.clone()).unwrap_or_default()
    }

    pub fn set_text(&mut self, el: ElementId, text: &str) {
        if let Some(node) = self.node_mut(el) {
            node.text = text.to_string();
        }
    }
}
