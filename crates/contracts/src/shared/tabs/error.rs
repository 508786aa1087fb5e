use super::key::TabKey;
use thiserror::Error;

/// Ошибки виджета табов.
///
/// None of these are fatal: the caller reports them as warnings and the page
/// keeps running.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TabError {
    #[error("host capability not available: {0}")]
    MissingHostCapability(&'static str),

    #[error("tabs or panels not found (triggers: {triggers}, panels: {panels})")]
    EmptyCollection { triggers: usize, panels: usize },

    #[error("tab trigger #{trigger} has no key")]
    MissingKey { trigger: usize },

    #[error("no panel found for tab `{0}`")]
    UnmatchedKey(TabKey),
}
