//! Debug logging capability handed to the paste pipeline.
//!
//! The pipeline never logs debug records directly; it asks the `DebugLog` it
//! was given, which forwards to the `log` facade only when the handler was
//! configured with `debug = true`.

use std::fmt;

use crate::utils::LOG_TARGET;

/// Number of characters shown when logging payload previews.
const PREVIEW_CHARS: usize = 100;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DebugLog {
    enabled: bool,
}

impl DebugLog {
    #[must_use]
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    #[must_use]
    pub fn disabled() -> Self {
        Self { enabled: false }
    }

    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn debug(&self, args: fmt::Arguments<'_>) {
        if self.enabled {
            log::debug!(target: LOG_TARGET, "{args}");
        }
    }

    /// Log a labelled, truncated preview of a payload.
    pub fn preview(&self, label: &str, content: &str) {
        if self.enabled {
            log::debug!(target: LOG_TARGET, "{label}: {}", preview(content));
        }
    }
}

/// First [`PREVIEW_CHARS`] characters of `content`, with an ellipsis when cut.
#[must_use]
pub fn preview(content: &str) -> String {
    match content.char_indices().nth(PREVIEW_CHARS) {
        Some((cut, _)) => format!("{}...", &content[..cut]),
        None => content.to_string(),
    }
}
