//! Tab switcher bound to server-rendered markup
//!
//! Содержит:
//! - `discovery` - поиск триггеров и панелей по атрибутам-маркерам
//! - `render` - проекция `TabState` на классы и `display`
//! - `binding` - делегированный обработчик кликов на `document`

pub mod binding;
pub mod discovery;
pub mod render;

use contracts::shared::tabs::{MarkerConfig, TabError, TabSwitcher};
use discovery::Discovered;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys::Document;

/// Discover tabs, activate the first one and start listening for clicks.
///
/// Empty collections abort with `EmptyCollection` before anything is bound.
pub fn install(document: &Document, markers: MarkerConfig) -> Result<(), TabError> {
    let discovered = Discovered::collect(document, &markers);
    let (switcher, initial) = TabSwitcher::init(discovered.tab_set(&markers))?;

    match initial {
        Some(activation) => {
            log::debug!(
                "🔷 tabs initialized: {} triggers, first tab '{}'",
                discovered.triggers.len(),
                activation.key
            );
            if let Some(diagnostic) = activation.diagnostic() {
                log::warn!("⚠️ {diagnostic}");
            }
            render::apply(&discovered, &switcher.projection(), &markers);
        }
        None => log::warn!("⚠️ no tab trigger carries `{}`", markers.trigger_key_attr),
    }

    let switcher = Rc::new(RefCell::new(switcher));
    if let Err(err) = binding::bind_click_delegation(document, switcher, Rc::new(markers)) {
        log::warn!("⚠️ cannot bind tab clicks: {err:?}");
    }
    Ok(())
}

/// Activate `trigger` and push the new state into the DOM.
///
/// A trigger without a key changes nothing.
pub(crate) fn activate_and_render(
    switcher: &mut TabSwitcher,
    trigger: usize,
    discovered: &Discovered,
    markers: &MarkerConfig,
) {
    match switcher.activate(trigger) {
        Ok(activation) => {
            log::debug!("🔶 activate tab: key='{}'", activation.key);
            if let Some(diagnostic) = activation.diagnostic() {
                log::warn!("⚠️ {diagnostic}");
            }
            render::apply(discovered, &switcher.projection(), markers);
        }
        Err(err) => log::warn!("⚠️ {err}"),
    }
}
