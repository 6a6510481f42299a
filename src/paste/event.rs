//! Clipboard payload captured from a paste event.

use serde::{Deserialize, Serialize};

/// Rich and plain clipboard representations, captured once before any cleaning.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PasteEvent {
    pub markup: Option<String>,
    pub plain_text: Option<String>,
}

impl PasteEvent {
    #[must_use]
    pub fn new(markup: Option<String>, plain_text: Option<String>) -> Self {
        Self { markup, plain_text }
    }

    #[must_use]
    pub fn with_markup(markup: impl Into<String>, plain_text: impl Into<String>) -> Self {
        Self {
            markup: Some(markup.into()),
            plain_text: Some(plain_text.into()),
        }
    }

    #[must_use]
    pub fn plain(plain_text: impl Into<String>) -> Self {
        Self {
            markup: None,
            plain_text: Some(plain_text.into()),
        }
    }

    /// Markup payload, if the clipboard carried a non-empty one.
    #[must_use]
    pub fn markup(&self) -> Option<&str> {
        self.markup.as_deref().filter(|markup| !markup.is_empty())
    }

    /// Plain-text payload exactly as the clipboard provided it.
    #[must_use]
    pub fn plain_text(&self) -> Option<&str> {
        self.plain_text.as_deref()
    }

    /// Trimmed plain-text payload used as the fallback in the markup modes.
    #[must_use]
    pub fn text_fallback(&self) -> &str {
        self.plain_text.as_deref().map(str::trim).unwrap_or_default()
    }
}
