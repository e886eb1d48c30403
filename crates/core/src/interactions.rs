//! Interaction router — per-element click and submit handler registration,
//! with default-action suppression.
//!
//! The host feeds user interactions into [`InteractionRouter::dispatch`] and
//! applies or suppresses the default action (navigation, form post) based on
//! the returned [`Dispatch`]. Behaviors register handlers at bind time and
//! never unregister them; listener lifetime is page lifetime.

use dashmap::DashMap;
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::page::ElementId;

/// A user interaction aimed at a page element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Interaction {
    Click(ElementId),
    Submit(ElementId),
}

/// Outcome of dispatching an interaction: whether the default action
/// (instant anchor jump, form post) should still run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dispatch {
    Continue,
    PreventDefault,
}

type Handler = Box<dyn Fn() -> Dispatch + Send + Sync>;

/// Routes interactions to the handlers registered on their target element.
#[derive(Default)]
pub struct InteractionRouter {
    click_handlers: DashMap<ElementId, Vec<Handler>>,
    submit_handlers: DashMap<ElementId, Vec<Handler>>,
}

impl InteractionRouter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_click<F>(&self, target: ElementId, handler: F)
    where
        F: Fn() -> Dispatch + Send + Sync + 'static,
    {
        self.click_handlers
            .entry(target)
            .or_default()
            .push(Box::new(handler));
    }

    pub fn on_submit<F>(&self, target: ElementId, handler: F)
    where
        F: Fn() -> Dispatch + Send + Sync + 'static,
    {
        self.submit_handlers
            .entry(target)
            .or_default()
            .push(Box::new(handler));
    }

    /// Run every handler registered on the interaction's target. The
    /// default action is suppressed if any handler asks for it; elements
    /// with no handlers keep their default behavior.
    pub fn dispatch(&self, interaction: Interaction) -> Dispatch {
        let (handlers, target) = match interaction {
            Interaction::Click(el) => (&self.click_handlers, el),
            Interaction::Submit(el) => (&self.submit_handlers, el),
        };

        let mut outcome = Dispatch::Continue;
        if let Some(registered) = handlers.get(&target) {
            for handler in registered.iter() {
                if handler() == Dispatch::PreventDefault {
                    outcome = Dispatch::PreventDefault;
                }
            }
        }
        trace!(?interaction, ?outcome, "interaction dispatched");
        outcome
    }

    /// Number of elements with at least one click handler.
    pub fn click_target_count(&self) -> usize {
        self.click_handlers.len()
    }

    /// Number of elements with at least one submit handler.
    pub fn submit_target_count(&self) -> usize {
        self.submit_handlers.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[test]
    fn test_dispatch_runs_all_handlers_on_target() {
        let router = InteractionRouter::new();
        let el = ElementId(3);
        let calls = Arc::new(AtomicUsize::new(0));

        for _ in 0..2 {
            let calls = calls.clone();
            router.on_click(el, move || {
                calls.fetch_add(1, Ordering::SeqCst);
                Dispatch::Continue
            });
        }

        assert_eq!(router.dispatch(Interaction::Click(el)), Dispatch::Continue);
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_any_prevent_default_wins() {
        let router = InteractionRouter::new();
        let el = ElementId(0);
        router.on_submit(el, || Dispatch::PreventDefault);
        router.on_submit(el, || Dispatch::Continue);

        assert_eq!(
            router.dispatch(Interaction::Submit(el)),
            Dispatch::PreventDefault
        );
    }

    #[test]
    fn test_unhandled_interaction_continues() {
        let router = InteractionRouter::new();
        assert_eq!(
            router.dispatch(Interaction::Click(ElementId(9))),
            Dispatch::Continue
        );
    }
}
