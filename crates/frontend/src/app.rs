use crate::shared::config::{load_config, AppConfig};
use crate::shared::{dom, fieldset_tabs, tab_switcher};

/// Runs once the document is interactive.
pub fn init() {
    let config = load_config().unwrap_or_else(|err| {
        log::warn!("⚠️ admin tabs config ignored: {err:#}");
        AppConfig::default()
    });
    log::set_max_level(config.log_level());

    let document = match dom::host_document() {
        Ok(document) => document,
        Err(err) => {
            log::warn!("⚠️ {err}");
            return;
        }
    };

    if config.scaffold_fieldsets {
        match fieldset_tabs::scaffold(&document, &config.markers) {
            Ok(count) => log::debug!("🧱 fieldset tabs created: {count}"),
            Err(err) => log::warn!("⚠️ fieldset scaffolding failed: {err:?}"),
        }
    }

    if let Err(err) = tab_switcher::install(&document, config.markers) {
        log::warn!("⚠️ {err}");
    }
}
