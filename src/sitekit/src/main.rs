//! SiteKit — headless page-behavior harness.
//!
//! Loads a page snapshot (or the built-in sample marketing page), binds the
//! four behaviors, runs the testimonial auto-advance for a number of ticks,
//! and prints the final page document as JSON.

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use tracing::{info, warn};

use sitekit_behaviors::PageBehaviors;
use sitekit_core::page::{ElementNode, PageDocument};
use sitekit_core::surface::page_surface;
use sitekit_core::{BehaviorConfig, InteractionRouter};

#[derive(Parser, Debug)]
#[command(name = "sitekit")]
#[command(about = "Headless marketing-page behavior harness")]
#[command(version)]
struct Cli {
    /// Page snapshot to load (JSON); defaults to the built-in sample page
    #[arg(long, env = "SITEKIT__PAGE")]
    page: Option<PathBuf>,

    /// Number of auto-advance ticks to run before exiting
    #[arg(long, default_value_t = 3, env = "SITEKIT__TICKS")]
    ticks: u32,

    /// Auto-advance interval in milliseconds (overrides config)
    #[arg(long, env = "SITEKIT__SLIDER__ADVANCE_INTERVAL_MS")]
    interval_ms: Option<u64>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "sitekit=info".into()),
        )
        .init();

    let cli = Cli::parse();

    let mut config = BehaviorConfig::load().unwrap_or_else(|e| {
        warn!(error = %e, "Failed to load config, using defaults");
        BehaviorConfig::default()
    });
    if let Some(interval) = cli.interval_ms {
        config.slider.advance_interval_ms = interval;
    }

    let doc = match &cli.page {
        Some(path) => {
            let raw = std::fs::read_to_string(path)?;
            PageDocument::from_json(&raw)?
        }
        None => sample_page(),
    };
    info!(elements = doc.len(), "page loaded");

    let surface = page_surface(doc);
    let router = InteractionRouter::new();
    let behaviors = PageBehaviors::bind_all(surface.clone(), &router, &config);

    info!(
        nav = behaviors.nav.is_some(),
        slider = behaviors.slider.is_some(),
        anchors = behaviors.scroll.anchor_count(),
        form = behaviors.form.is_some(),
        "behaviors bound"
    );

    if let Some(slider) = &behaviors.slider {
        let period = Duration::from_millis(config.slider.advance_interval_ms);
        let timer = slider.start_auto_advance(period);

        for tick in 1..=cli.ticks {
            tokio::time::sleep(period).await;
            info!(tick, current_index = slider.current_index(), "auto-advance");
        }
        timer.abort();
    }

    println!("{}", serde_json::to_string_pretty(&surface.document())?);
    Ok(())
}

/// The sample marketing page: nav with hamburger, three testimonial slides
/// and dots, a fragment anchor, and a contact form.
fn sample_page() -> PageDocument {
    let mut page = PageDocument::new();

    let nav = page.append(None, ElementNode::new("nav"));
    page.append(Some(nav), ElementNode::new("button").with_class("hamburger"));
    let links = page.append(Some(nav), ElementNode::new("ul").with_class("nav-links"));
    page.append(
        Some(links),
        ElementNode::new("a")
            .with_attr("href", "#testimonials")
            .with_text("Testimonials"),
    );
    page.append(
        Some(links),
        ElementNode::new("a")
            .with_attr("href", "#contact")
            .with_text("Contact"),
    );

    let testimonials = page.append(
        None,
        ElementNode::new("section").with_dom_id("testimonials"),
    );
    for quote in [
        "SiteKit cut our bounce rate in half.",
        "Setup took minutes, not days.",
        "The best toolkit we have used.",
    ] {
        page.append(
            Some(testimonials),
            ElementNode::new("div")
                .with_class("testimonial-slide")
                .with_text(quote),
        );
    }
    for _ in 0..3 {
        page.append(
            Some(testimonials),
            ElementNode::new("span").with_class("dot"),
        );
    }

    let contact = page.append(None, ElementNode::new("section").with_dom_id("contact"));
    let form = page.append(
        Some(contact),
        ElementNode::new("form").with_dom_id("contact-form"),
    );
    page.append(
        Some(form),
        ElementNode::new("input")
            .with_attr("required", "")
            .with_attr("name", "name")
            .with_attr("type", "text")
            .with_attr("value", ""),
    );
    page.append(Some(form), ElementNode::new("span").with_class("error"));
    page.append(
        Some(form),
        ElementNode::new("input")
            .with_attr("required", "")
            .with_attr("name", "email")
            .with_attr("type", "email")
            .with_attr("value", ""),
    );
    page.append(Some(form), ElementNode::new("span").with_class("error"));

    page
}
