use serde::{Deserialize, Serialize};
use std::fmt;

/// Key shared by a tab trigger and at most one content panel.
///
/// Compared exactly as written in the markup. Empty or whitespace-only
/// attribute values never become a key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TabKey(String);

impl TabKey {
    /// Parse a raw attribute value. `None`, `""` and whitespace-only values yield `None`.
    pub fn parse(raw: Option<&str>) -> Option<Self> {
        let raw = raw?;
        if raw.trim().is_empty() {
            None
        } else {
            Some(Self(raw.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TabKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for TabKey {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(Some(&value)).ok_or_else(|| "tab key must not be empty".to_string())
    }
}

impl From<TabKey> for String {
    fn from(key: TabKey) -> Self {
        key.0
    }
}
