//! SiteKit core — headless page model and interaction plumbing shared by
//! every behavior crate.
//!
//! # Modules
//!
//! - [`page`] — In-memory page document (element arena, classes, visibility)
//! - [`surface`] — Interaction surface trait + standard implementation
//! - [`interactions`] — Click/submit router with default-action suppression
//! - [`config`] — Behavior configuration (selectors, classes, intervals)
//! - [`error`] — Crate-wide error type

pub mod config;
pub mod error;
pub mod interactions;
pub mod page;
pub mod surface;

pub use config::BehaviorConfig;
pub use error::{SiteKitError, SiteKitResult};
pub use interactions::{Dispatch, Interaction, InteractionRouter};
pub use page::{ElementId, ElementNode, PageDocument};
pub use surface::{page_surface, PageSurface, Surface};
