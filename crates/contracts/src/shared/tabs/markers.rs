//! Marker attributes: the contract between the widget and server-rendered markup.

use serde::{Deserialize, Serialize};

pub const DEFAULT_TRIGGER_SELECTOR: &str = r#"a[data-toggle="pill"], a[data-toggle="tab"]"#;
pub const DEFAULT_TRIGGER_KEY_ATTR: &str = "data-tab";
pub const DEFAULT_PANEL_KEY_ATTR: &str = "data-tab-panel";
pub const DEFAULT_ACTIVE_CLASS: &str = "active";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MarkerConfig {
    /// CSS selector matching tab triggers.
    pub trigger_selector: String,
    /// Attribute on a trigger holding its key.
    pub trigger_key_attr: String,
    /// Attribute on a panel holding its key.
    pub panel_key_attr: String,
    /// Class toggled on the active trigger.
    pub active_class: String,
    /// Also toggle `active_class` on the trigger's parent element (`<li>` in nav lists).
    pub mark_wrapper: bool,
}

impl MarkerConfig {
    /// Selector for every element that carries a panel key.
    pub fn panel_selector(&self) -> String {
        format!("[{}]", self.panel_key_attr)
    }
}

impl Default for MarkerConfig {
    fn default() -> Self {
        Self {
            trigger_selector: DEFAULT_TRIGGER_SELECTOR.to_string(),
            trigger_key_attr: DEFAULT_TRIGGER_KEY_ATTR.to_string(),
            panel_key_attr: DEFAULT_PANEL_KEY_ATTR.to_string(),
            active_class: DEFAULT_ACTIVE_CLASS.to_string(),
            mark_wrapper: true,
        }
    }
}
