//! Content-loss guard around normalization.
//!
//! Normalization can legitimately reduce a fragment to nothing (an empty
//! styled `<div>`), but it must never turn real content into an empty
//! insertion. After normalizing, the guard falls back in order to the trimmed
//! plain-text clipboard payload and then to the text the fragment held before
//! cleaning.

use crate::errors::PasteResult;
use crate::markup::MarkupTree;
use crate::normalizer::{NormalizeOptions, normalize};

use super::debug_log::DebugLog;
use super::outcome::PasteOutcome;

/// Serializations treated as "no content" even when they are not empty strings.
const STRUCTURALLY_EMPTY: &[&str] = &["", "<p></p>"];

/// Normalize `markup` and pick what to insert.
///
/// `text_fallback` is the trimmed plain-text payload of the same event.
///
/// # Errors
///
/// Propagates normalization faults; the caller declines the event on error.
pub fn clean_with_fallback(
    markup: &str,
    text_fallback: &str,
    options: NormalizeOptions,
    log: DebugLog,
) -> PasteResult<PasteOutcome> {
    let mut tree = MarkupTree::parse_fragment(markup);
    let original_text = tree.full_text().trim().to_string();
    if log.is_enabled() {
        log.preview("Original HTML content", &tree.to_html());
    }

    normalize(&mut tree, options, log)?;

    let cleaned_html = tree.to_html();
    log.preview("Cleaned HTML content", &cleaned_html);
    let cleaned_text = tree.full_text();

    Ok(choose_outcome(
        cleaned_html,
        cleaned_text.trim(),
        &original_text,
        text_fallback,
        log,
    ))
}

fn choose_outcome(
    cleaned_html: String,
    cleaned_text: &str,
    original_text: &str,
    text_fallback: &str,
    log: DebugLog,
) -> PasteOutcome {
    let structurally_empty = STRUCTURALLY_EMPTY.contains(&cleaned_html.trim());

    if !cleaned_text.is_empty() && !structurally_empty {
        log.debug(format_args!("Inserting cleaned HTML content"));
        return PasteOutcome::InsertMarkup(cleaned_html);
    }

    if !text_fallback.is_empty() {
        log.debug(format_args!("Content empty after cleaning, using plain text fallback"));
        return PasteOutcome::InsertText(text_fallback.to_string());
    }

    if !original_text.is_empty() {
        log.debug(format_args!("Text lost during cleaning, using original text"));
        return PasteOutcome::InsertText(original_text.to_string());
    }

    // Nothing in the source either: accept the paste without inserting anything.
    log.debug(format_args!("Pasted fragment has no content"));
    PasteOutcome::InsertMarkup(String::new())
}
