//! Widget configuration.
//!
//! Pages may override the defaults with a JSON block:
//!
//! ```html
//! <script type="application/json" id="admin-tabs-config">
//!   { "markers": { "panel_key_attr": "data-pane" }, "log_level": "warn" }
//! </script>
//! ```
//!
//! Missing fields keep their defaults.

use contracts::shared::tabs::MarkerConfig;
use serde::Deserialize;

pub const CONFIG_ELEMENT_ID: &str = "admin-tabs-config";

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    pub markers: MarkerConfig,
    /// Turn plain `<fieldset>` blocks into tabs before the switcher starts.
    pub scaffold_fieldsets: bool,
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            markers: MarkerConfig::default(),
            scaffold_fieldsets: false,
            log_level: "debug".to_string(),
        }
    }
}

impl AppConfig {
    /// Parsed `log_level` (`off` silences the widget); unknown values fall back to debug.
    pub fn log_level(&self) -> log::LevelFilter {
        self.log_level.parse().unwrap_or(log::LevelFilter::Debug)
    }
}

pub fn parse_config(json: &str) -> anyhow::Result<AppConfig> {
    Ok(serde_json::from_str(json)?)
}

/// Load configuration from the page
///
/// Search order:
/// 1. `<script id="admin-tabs-config">` in the document, missing fields from `AppConfig::default`
/// 2. Falls back to `AppConfig::default`
pub fn load_config() -> anyhow::Result<AppConfig> {
    let override_json = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(CONFIG_ELEMENT_ID))
        .and_then(|el| el.text_content())
        .filter(|text| !text.trim().is_empty());

    match override_json {
        Some(json) => parse_config(&json),
        None => Ok(AppConfig::default()),
    }
}
