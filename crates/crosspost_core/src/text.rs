//! Persisted text values.

use serde::{Deserialize, Serialize};

/// Text stored with a persisted variant.
///
/// Older drafts hold a plain string; collaborative drafts hold a wrapper
/// object around the string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PersistedText {
    /// Raw string
    Plain(String),
    /// Wrapper object exposing the string
    Wrapped(WrappedText),
}

/// Object form of persisted text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WrappedText {
    /// The wrapped string
    #[serde(alias = "value", alias = "content")]
    pub text: String,
}

impl PersistedText {
    /// Coerce to a plain string slice.
    ///
    /// ```
    /// use crosspost_core::PersistedText;
    ///
    /// let wrapped: PersistedText = serde_json::from_str(r#"{"value": "hello"}"#).unwrap();
    /// assert_eq!(wrapped.as_str(), "hello");
    /// ```
    pub fn as_str(&self) -> &str {
        match self {
            PersistedText::Plain(text) => text,
            PersistedText::Wrapped(wrapped) => &wrapped.text,
        }
    }
}

impl std::fmt::Display for PersistedText {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<String> for PersistedText {
    fn from(text: String) -> Self {
        PersistedText::Plain(text)
    }
}

impl From<&str> for PersistedText {
    fn from(text: &str) -> Self {
        PersistedText::Plain(text.to_string())
    }
}
