pub mod app;
pub mod shared;

use std::sync::atomic::{AtomicBool, Ordering};
use wasm_bindgen::prelude::wasm_bindgen;

static STARTED: AtomicBool = AtomicBool::new(false);

#[wasm_bindgen]
pub fn hydrate() {
    // one widget per page view, however many times the host calls in
    if STARTED.swap(true, Ordering::SeqCst) {
        return;
    }

    // initializes logging using the `log` crate; the level is narrowed once config is read
    _ = console_log::init_with_level(log::Level::Debug);
    console_error_panic_hook::set_once();

    if let Err(err) = shared::ready::on_document_ready(app::init) {
        log::warn!("⚠️ {err}");
    }
}

#[wasm_bindgen(start)]
pub fn start() {
    hydrate();
}
