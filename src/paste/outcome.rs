//! Result of handling one paste event and its delivery to the host document.

use serde::{Deserialize, Serialize};

/// Exactly one of these is produced per paste event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "content", rename_all = "camelCase")]
pub enum PasteOutcome {
    /// Insert a serialized, normalized markup fragment.
    InsertMarkup(String),
    /// Insert unformatted text.
    InsertText(String),
    /// Not handled; the host runs its default paste behavior.
    Declined,
}

/// Host document operations a paste outcome is delivered through.
pub trait PasteTarget {
    fn insert_content(&mut self, markup: &str);
    fn insert_text(&mut self, text: &str);
}

impl PasteOutcome {
    #[must_use]
    pub fn is_handled(&self) -> bool {
        !matches!(self, PasteOutcome::Declined)
    }

    /// Deliver the outcome to `target`; returns whether the event was handled.
    ///
    /// At most one insertion is performed.
    pub fn apply<T: PasteTarget + ?Sized>(&self, target: &mut T) -> bool {
        match self {
            PasteOutcome::InsertMarkup(markup) => target.insert_content(markup),
            PasteOutcome::InsertText(text) => target.insert_text(text),
            PasteOutcome::Declined => return false,
        }
        true
    }
}
