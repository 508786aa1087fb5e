//! Tab switching model
//!
//! Содержит:
//! - `key` - ключ, связывающий триггер и панель
//! - `markers` - атрибуты разметки, по которым ищутся триггеры и панели
//! - `state` - машина состояний `TabSwitcher` и операция Activate
//! - `error` - некритичные ошибки (только диагностика)

pub mod error;
pub mod key;
pub mod markers;
pub mod state;

pub use error::TabError;
pub use key::TabKey;
pub use markers::MarkerConfig;
pub use state::{Activation, Projection, TabSet, TabState, TabSwitcher};
