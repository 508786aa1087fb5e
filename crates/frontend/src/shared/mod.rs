pub mod config;
pub mod dom;
pub mod fieldset_tabs;
pub mod ready;
pub mod tab_switcher;
