//! Thin helpers over `web-sys` shared by the tab modules.

use contracts::shared::tabs::TabError;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement};

/// The page document, provided the host exposes window, document and body.
pub fn host_document() -> Result<Document, TabError> {
    let window = web_sys::window().ok_or(TabError::MissingHostCapability("window"))?;
    let document = window
        .document()
        .ok_or(TabError::MissingHostCapability("document"))?;
    if document.body().is_none() {
        return Err(TabError::MissingHostCapability("document.body"));
    }
    Ok(document)
}

/// All elements matching `selector`, in document order. An invalid selector yields none.
pub fn query_all(document: &Document, selector: &str) -> Vec<Element> {
    let nodes = match document.query_selector_all(selector) {
        Ok(nodes) => nodes,
        Err(err) => {
            log::warn!("⚠️ invalid selector `{selector}`: {err:?}");
            return Vec::new();
        }
    };

    (0..nodes.length())
        .filter_map(|i| nodes.get(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

pub fn set_class(element: &Element, class: &str, on: bool) {
    let classes = element.class_list();
    let result = if on {
        classes.add_1(class)
    } else {
        classes.remove_1(class)
    };
    if let Err(err) = result {
        log::warn!("⚠️ cannot toggle class `{class}`: {err:?}");
    }
}

/// Show or hide through inline `display`.
///
/// Showing drops the inline value first so the stylesheet decides the display
/// type; when the stylesheet itself hides the element (`.tab-pane { display: none }`)
/// it falls back to an inline `display: block`.
pub fn set_visible(element: &Element, visible: bool) {
    let Some(html) = element.dyn_ref::<HtmlElement>() else {
        return;
    };
    let style = html.style();
    let result = if visible {
        style
            .remove_property("display")
            .and_then(|_| match computed_display(element) {
                Some(display) if display == "none" => style.set_property("display", "block"),
                _ => Ok(()),
            })
    } else {
        style.set_property("display", "none")
    };
    if let Err(err) = result {
        log::warn!("⚠️ cannot change panel visibility: {err:?}");
    }
}

/// Computed `display` of an element, as the browser resolves it.
pub fn computed_display(element: &Element) -> Option<String> {
    web_sys::window()?
        .get_computed_style(element)
        .ok()??
        .get_property_value("display")
        .ok()
}
