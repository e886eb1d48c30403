//! Contact-form validation — blocks submission while required fields are
//! empty or email-shaped fields are malformed, surfacing per-field messages
//! in the slot adjacent to each field.

use std::sync::Arc;

use parking_lot::RwLock;
use tracing::debug;

use sitekit_core::config::FormConfig;
use sitekit_core::{Dispatch, ElementId, InteractionRouter, Surface};

/// Pluggable email-shape predicate; swap in a stricter validator without
/// touching the control flow.
pub type EmailPredicate = Arc<dyn Fn(&str) -> bool + Send + Sync>;

/// Accepts `local@domain.tld` shapes: exactly one `@`, a non-empty
/// whitespace-free local part, and a domain free of whitespace and `@`
/// containing a dot with at least one character on each side.
pub fn email_shape_valid(value: &str) -> bool {
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || local.chars().any(char::is_whitespace) {
        return false;
    }
    if domain.chars().any(|c| c.is_whitespace() || c == '@') {
        return false;
    }
    domain
        .match_indices('.')
        .any(|(i, _)| i > 0 && i + 1 < domain.len())
}

/// Required-field validator for the contact form. Every submission runs one
/// synchronous pass over the full required-field set — no short-circuit, no
/// ordering dependency between fields.
pub struct ContactFormValidator {
    surface: Arc<dyn Surface>,
    form: ElementId,
    message_prefix: String,
    email_valid: RwLock<EmailPredicate>,
}

impl ContactFormValidator {
    /// Bind to the form identified by `config.form_id`. Returns `None`
    /// (no listener) when the form is absent from the page.
    pub fn bind(
        surface: Arc<dyn Surface>,
        router: &InteractionRouter,
        config: &FormConfig,
    ) -> Option<Arc<Self>> {
        let form = surface.element_by_dom_id(&config.form_id)?;
        let validator = Arc::new(Self {
            surface,
            form,
            message_prefix: config.message_prefix.clone(),
            email_valid: RwLock::new(Arc::new(|value: &str| email_shape_valid(value))),
        });

        let handler = validator.clone();
        router.on_submit(form, move || handler.validate());

        Some(validator)
    }

    /// Replace the email predicate. The registered submit handler picks up
    /// the new predicate on its next run; intended for hosts that need
    /// stricter validation than the default shape check.
    pub fn set_email_predicate(&self, predicate: EmailPredicate) {
        *self.email_valid.write() = predicate;
    }

    /// Validate every required field, updating each field's error slot.
    /// Returns `PreventDefault` if any field is invalid; otherwise the
    /// submission proceeds untouched.
    pub fn validate(&self) -> Dispatch {
        let mut valid = true;
        let email_valid = self.email_valid.read().clone();

        // Fields are queried at submit time, so markup added after bind is
        // still validated.
        for field in self.surface.required_fields(self.form) {
            let value = self.surface.attr(field, "value").unwrap_or_default();
            let name = self.surface.attr(field, "name").unwrap_or_default();
            let is_email = self.surface.attr(field, "type").as_deref() == Some("email");

            let field_valid =
                !value.trim().is_empty() && (!is_email || email_valid.as_ref()(&value));

            if let Some(slot) = self.surface.next_sibling(field) {
                if field_valid {
                    self.surface.set_text(slot, "");
                } else {
                    self.surface
                        .set_text(slot, &format!("{}{}", self.message_prefix, name));
                }
            }
            if !field_valid {
                valid = false;
            }
        }

        if valid {
            Dispatch::Continue
        } else {
            debug!("form submission blocked by validation");
            Dispatch::PreventDefault
        }
    }

    pub fn form(&self) -> ElementId {
        self.form
    }
}
