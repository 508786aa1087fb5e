//! Builds a tab strip out of plain admin `<fieldset>` blocks.
//!
//! Each fieldset headed by an `<h2>` becomes a panel and gets a trigger in a
//! nav container inserted before the first one, each trigger in its own
//! wrapper. The `<h2>` is hidden since the trigger now carries the title.
//! Visibility is left to the tab switcher.

use crate::shared::dom::{query_all, set_visible};
use contracts::shared::tabs::MarkerConfig;
use wasm_bindgen::JsValue;
use web_sys::{Document, Element, Node};

pub const NAV_CLASS: &str = "admin-tabs-nav";
/// Per-trigger wrapper, so wrapper marking never lands on the shared nav.
pub const NAV_ITEM_CLASS: &str = "admin-tabs-nav__item";

pub fn fieldset_key(index: usize) -> String {
    format!("fieldset-{index}")
}

/// Trigger caption: the trimmed heading text, or `Tab N` when the heading is blank.
pub fn tab_title(heading: Option<String>, index: usize) -> String {
    heading
        .map(|text| text.split_whitespace().collect::<Vec<_>>().join(" "))
        .filter(|text| !text.is_empty())
        .unwrap_or_else(|| format!("Tab {}", index + 1))
}

/// Returns how many fieldsets were converted. Pages that already carry triggers
/// are left alone.
pub fn scaffold(document: &Document, markers: &MarkerConfig) -> Result<usize, JsValue> {
    if !query_all(document, &markers.trigger_selector).is_empty() {
        log::debug!("ℹ️ page already has tab triggers, skipping fieldset scaffolding");
        return Ok(0);
    }

    let mut sections: Vec<(Element, Element)> = Vec::new();
    for fieldset in query_all(document, "fieldset") {
        if let Some(heading) = fieldset.query_selector("h2")? {
            sections.push((fieldset, heading));
        }
    }

    let Some((first, _)) = sections.first() else {
        return Ok(0);
    };
    let Some(parent) = first.parent_node() else {
        return Ok(0);
    };
    let first: &Node = first;

    let nav = document.create_element("div")?;
    nav.set_class_name(NAV_CLASS);
    parent.insert_before(&nav, Some(first))?;

    for (index, (fieldset, heading)) in sections.iter().enumerate() {
        let key = fieldset_key(index);
        fieldset.set_attribute(&markers.panel_key_attr, &key)?;

        let trigger = document.create_element("a")?;
        trigger.set_attribute("href", "#")?;
        trigger.set_attribute("data-toggle", "tab")?;
        trigger.set_attribute(&markers.trigger_key_attr, &key)?;
        trigger.set_text_content(Some(&tab_title(heading.text_content(), index)));

        let item = document.create_element("span")?;
        item.set_class_name(NAV_ITEM_CLASS);
        item.append_child(&trigger)?;
        nav.append_child(&item)?;

        if index == 0 && !trigger.matches(&markers.trigger_selector)? {
            log::warn!(
                "⚠️ generated triggers do not match `{}`; clicks will be ignored",
                markers.trigger_selector
            );
        }

        set_visible(heading, false);
    }

    Ok(sections.len())
}
