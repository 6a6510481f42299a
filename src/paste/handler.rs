//! Paste event handler: mode dispatch over the guarded normalizer.

use crate::config::PasteConfig;
use crate::errors::{PasteError, PasteResult};
use crate::normalizer::NormalizeOptions;
use crate::utils::LOG_TARGET;

use super::debug_log::DebugLog;
use super::event::PasteEvent;
use super::guard::clean_with_fallback;
use super::mode::PasteMode;
use super::outcome::{PasteOutcome, PasteTarget};

/// Stateless handler; one instance can serve any number of paste events.
#[derive(Debug, Clone, Default)]
pub struct PasteHandler {
    config: PasteConfig,
    log: DebugLog,
}

impl PasteHandler {
    #[must_use]
    pub fn new(config: PasteConfig) -> Self {
        let log = DebugLog::new(config.debug());
        Self { config, log }
    }

    #[must_use]
    pub fn config(&self) -> &PasteConfig {
        &self.config
    }

    /// Decide what to insert for `event`.
    ///
    /// Any fault while cleaning declines the event so the host's default paste
    /// runs instead of a partial result.
    #[must_use]
    pub fn handle(&self, event: &PasteEvent) -> PasteOutcome {
        match self.try_handle(event) {
            Ok(outcome) => outcome,
            Err(e) => {
                log::warn!(
                    target: LOG_TARGET,
                    "Error handling paste, falling back to default: {e}"
                );
                PasteOutcome::Declined
            }
        }
    }

    /// Handle `event` and deliver the outcome to `target`.
    ///
    /// Returns false when the event was declined.
    pub fn handle_into<T: PasteTarget + ?Sized>(&self, event: &PasteEvent, target: &mut T) -> bool {
        self.handle(event).apply(target)
    }

    fn try_handle(&self, event: &PasteEvent) -> PasteResult<PasteOutcome> {
        let mode = self.config.mode();
        self.log.debug(format_args!("Paste mode: {mode}"));

        match mode {
            PasteMode::PlainText => Ok(self.paste_plain(event)),
            PasteMode::CleanHtml | PasteMode::SmartClean => self.paste_cleaned(event),
        }
    }

    /// Insert the plain-text payload verbatim.
    ///
    /// Markup is never inserted in this mode: when only markup is on the
    /// clipboard the event is still handled, with an empty insertion, so the
    /// host's default paste cannot bring the formatting in.
    fn paste_plain(&self, event: &PasteEvent) -> PasteOutcome {
        if let Some(text) = event.plain_text().filter(|text| !text.is_empty()) {
            self.log.preview("Paste as plain text", text);
            return PasteOutcome::InsertText(text.to_string());
        }
        if event.markup().is_some() {
            self.log.debug(format_args!("Only markup on clipboard, inserting no text"));
            return PasteOutcome::InsertText(String::new());
        }
        self.log.debug(format_args!("No payload on clipboard, letting host handle paste"));
        PasteOutcome::Declined
    }

    fn paste_cleaned(&self, event: &PasteEvent) -> PasteResult<PasteOutcome> {
        let text_fallback = event.text_fallback();
        self.log.debug(format_args!("HTML available: {}", event.markup().is_some()));
        self.log.debug(format_args!("Plain text available: {}", !text_fallback.is_empty()));

        if let Some(markup) = event.markup() {
            let limit = self.config.max_markup_bytes();
            if markup.len() > limit {
                return Err(PasteError::PayloadTooLarge {
                    size: markup.len(),
                    limit,
                });
            }
            return clean_with_fallback(
                markup,
                text_fallback,
                NormalizeOptions::from_config(&self.config),
                self.log,
            );
        }

        if !text_fallback.is_empty() {
            self.log.debug(format_args!("No HTML available, using plain text"));
            return Ok(PasteOutcome::InsertText(text_fallback.to_string()));
        }

        self.log.debug(format_args!("No special handling, letting host handle paste"));
        Ok(PasteOutcome::Declined)
    }
}
