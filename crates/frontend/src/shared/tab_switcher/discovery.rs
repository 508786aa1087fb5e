use crate::shared::dom::query_all;
use contracts::shared::tabs::{MarkerConfig, TabSet};
use web_sys::{Document, Element};

/// Live trigger and panel elements, index-aligned with the `TabSet` built from them.
pub struct Discovered {
    pub triggers: Vec<Element>,
    pub panels: Vec<Element>,
}

impl Discovered {
    pub fn collect(document: &Document, markers: &MarkerConfig) -> Self {
        Self {
            triggers: query_all(document, &markers.trigger_selector),
            panels: query_all(document, &markers.panel_selector()),
        }
    }

    pub fn tab_set(&self, markers: &MarkerConfig) -> TabSet {
        TabSet::from_raw(
            self.triggers
                .iter()
                .map(|el| el.get_attribute(&markers.trigger_key_attr)),
            self.panels
                .iter()
                .map(|el| el.get_attribute(&markers.panel_key_attr)),
        )
    }

    pub fn trigger_index(&self, trigger: &Element) -> Option<usize> {
        self.triggers.iter().position(|el| el == trigger)
    }
}
