use super::discovery::Discovered;
use contracts::shared::tabs::{MarkerConfig, TabSwitcher};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, Node};

/// One click listener on `document` for every trigger, present or added later.
///
/// Collections are re-discovered on each click so inserted triggers and panels
/// take part in the switch.
pub fn bind_click_delegation(
    document: &Document,
    switcher: Rc<RefCell<TabSwitcher>>,
    markers: Rc<MarkerConfig>,
) -> Result<(), JsValue> {
    let doc = document.clone();

    let on_click = Closure::wrap(Box::new(move |event: Event| {
        let Some(trigger) = clicked_trigger(&event, &markers.trigger_selector) else {
            return;
        };
        event.prevent_default();

        let discovered = Discovered::collect(&doc, &markers);
        let Some(index) = discovered.trigger_index(&trigger) else {
            return;
        };

        let Ok(mut switcher) = switcher.try_borrow_mut() else {
            log::warn!("⚠️ tab switch already in progress");
            return;
        };
        switcher.refresh(discovered.tab_set(&markers));
        super::activate_and_render(&mut switcher, index, &discovered, &markers);
    }) as Box<dyn FnMut(Event)>);

    document.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())?;
    on_click.forget(); // lives as long as the page
    Ok(())
}

/// The trigger the click landed in, if any (handles text nodes and nested markup).
fn clicked_trigger(event: &Event, selector: &str) -> Option<Element> {
    let target = event.target()?;
    let element = match target.dyn_into::<Element>() {
        Ok(element) => element,
        Err(target) => target.dyn_into::<Node>().ok()?.parent_element()?,
    };
    element.closest(selector).ok().flatten()
}
