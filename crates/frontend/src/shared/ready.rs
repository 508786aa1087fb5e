//! Page readiness: run initialization once the document is interactive.

use contracts::shared::tabs::TabError;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::DocumentReadyState;

/// Run `init` now if the document has finished loading, otherwise on `DOMContentLoaded`.
///
/// `init` runs at most once.
pub fn on_document_ready<F>(init: F) -> Result<(), TabError>
where
    F: FnOnce() + 'static,
{
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or(TabError::MissingHostCapability("document"))?;

    if !is_loading(document.ready_state()) {
        init();
        return Ok(());
    }

    let mut init = Some(init);
    let on_ready = Closure::wrap(Box::new(move |_: web_sys::Event| {
        if let Some(init) = init.take() {
            init();
        }
    }) as Box<dyn FnMut(web_sys::Event)>);

    if let Err(err) = document
        .add_event_listener_with_callback("DOMContentLoaded", on_ready.as_ref().unchecked_ref())
    {
        log::warn!("⚠️ cannot wait for DOMContentLoaded: {err:?}");
    }
    on_ready.forget();
    Ok(())
}

fn is_loading(state: DocumentReadyState) -> bool {
    state == DocumentReadyState::Loading
}
