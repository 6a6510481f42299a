pub mod config;
pub mod errors;
pub mod markup;
pub mod normalizer;
pub mod paste;
pub mod utils;

pub use config::{PasteConfig, PasteConfigBuilder};
pub use errors::{PasteError, PasteResult};
pub use markup::{ElementClass, ElementData, MarkupNode, MarkupTree};
pub use normalizer::{NormalizeOptions, normalize, normalize_html};
pub use paste::{DebugLog, PasteEvent, PasteHandler, PasteMode, PasteOutcome, PasteTarget};

/// Handle a single paste event with `config`.
///
/// Convenience wrapper for hosts that do not keep a [`PasteHandler`] around.
#[must_use]
pub fn handle_paste(config: &PasteConfig, event: &PasteEvent) -> PasteOutcome {
    PasteHandler::new(config.clone()).handle(event)
}
