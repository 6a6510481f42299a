//! Paste cleaning modes.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Policy applied to every paste event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PasteMode {
    /// Ignore the markup payload and insert the plain-text payload verbatim.
    PlainText,
    /// Normalize the markup, retaining unrecognized elements.
    #[default]
    CleanHtml,
    /// Normalize the markup and coerce unrecognized elements into paragraphs.
    SmartClean,
}

impl PasteMode {
    /// Whether unrecognized elements are coerced into paragraphs.
    #[must_use]
    pub fn is_smart(self) -> bool {
        matches!(self, PasteMode::SmartClean)
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            PasteMode::PlainText => "plainText",
            PasteMode::CleanHtml => "cleanHtml",
            PasteMode::SmartClean => "smartClean",
        }
    }
}

impl fmt::Display for PasteMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PasteMode {
    type Err = String;

    /// Accepts the camelCase configuration names and kebab/snake-case spellings.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let folded: String = s
            .chars()
            .filter(|c| !matches!(c, '-' | '_'))
            .collect::<String>()
            .to_ascii_lowercase();
        match folded.as_str() {
            "plaintext" | "plain" => Ok(PasteMode::PlainText),
            "cleanhtml" | "clean" => Ok(PasteMode::CleanHtml),
            "smartclean" | "smart" => Ok(PasteMode::SmartClean),
            _ => Err(format!(
                "unknown paste mode '{s}' (expected plainText, cleanHtml or smartClean)"
            )),
        }
    }
}
