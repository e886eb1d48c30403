use serde::Deserialize;

use crate::error::SiteKitResult;

/// Behavior configuration: the selector roles and timings each controller
/// binds against. Loaded from environment variables with the prefix
/// `SITEKIT__`; defaults reproduce the standard marketing-page markup.
#[derive(Debug, Clone, Deserialize)]
pub struct BehaviorConfig {
    #[serde(default)]
    pub nav: NavConfig,
    #[serde(default)]
    pub slider: SliderConfig,
    #[serde(default)]
    pub form: FormConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NavConfig {
    #[serde(default = "default_trigger_class")]
    pub trigger_class: String,
    #[serde(default = "default_links_class")]
    pub links_class: String,
    #[serde(default = "default_open_class")]
    pub open_class: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SliderConfig {
    #[serde(default = "default_slide_class")]
    pub slide_class: String,
    #[serde(default = "default_dot_class")]
    pub dot_class: String,
    #[serde(default = "default_active_class")]
    pub active_class: String,
    #[serde(default = "default_advance_interval_ms")]
    pub advance_interval_ms: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FormConfig {
    #[serde(default = "default_form_id")]
    pub form_id: String,
    #[serde(default = "default_message_prefix")]
    pub message_prefix: String,
}

fn default_trigger_class() -> String {
    "hamburger".to_string()
}
fn default_links_class() -> String {
    "nav-links".to_string()
}
fn default_open_class() -> String {
    "show".to_string()
}

fn default_slide_class() -> String {
    "testimonial-slide".to_string()
}
fn default_dot_class() -> String {
    "dot".to_string()
}
fn default_active_class() -> String {
    "active".to_string()
}
fn default_advance_interval_ms() -> u64 {
    5000
}

fn default_form_id() -> String {
    "contact-form".to_string()
}
fn default_message_prefix() -> String {
    "Please enter a valid ".to_string()
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            trigger_class: default_trigger_class(),
            links_class: default_links_class(),
            open_class: default_open_class(),
        }
    }
}

impl Default for SliderConfig {
    fn default() -> Self {
        Self {
            slide_class: default_slide_class(),
            dot_class: default_dot_class(),
            active_class: default_active_class(),
            advance_interval_ms: default_advance_interval_ms(),
        }
    }
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            form_id: default_form_id(),
            message_prefix: default_message_prefix(),
        }
    }
}

impl Default for BehaviorConfig {
    fn default() -> Self {
        Self {
            nav: NavConfig::default(),
            slider: SliderConfig::default(),
            form: FormConfig::default(),
        }
    }
}

impl BehaviorConfig {
    /// Load configuration from environment variables.
    pub fn load() -> SiteKitResult<Self> {
        let builder = config::Config::builder().add_source(
            config::Environment::with_prefix("SITEKIT")
                .separator("__")
                .try_parsing(true),
        );

        let config = builder.build()?;
        Ok(config.try_deserialize()?)
    }
}
