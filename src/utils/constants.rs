//! Shared limits for paste normalization
//!
//! This module contains default values and thresholds used throughout the
//! normalizer so the heuristics are tuned in one place.

/// Longest text an inline formatting run may wrap before it is split: 300 characters
///
/// Office suites and online editors wrap whole paragraphs in a single `<b>` or
/// `<i>` when the user formats a selection. Past this length the wrapper is
/// treated as block-level styling rather than inline emphasis.
pub const MAX_FORMATTING_TEXT_CHARS: usize = 300;

/// Most lines an inline formatting run may span before it is split: 2
///
/// Counted as newline-separated segments of the run's text content.
pub const MAX_FORMATTING_LINES: usize = 2;

/// Maximum markup payload size accepted from the clipboard (10 MB)
///
/// Larger payloads are declined and left to the host's default paste handling.
pub const DEFAULT_MAX_MARKUP_BYTES: usize = 10 * 1024 * 1024;

/// Maximum element nesting the normalizer descends into: 512 levels
///
/// Real clipboard content rarely exceeds a few dozen levels; deeper input is
/// treated as a normalization failure and the paste is declined.
pub const DEFAULT_MAX_DEPTH: usize = 512;

/// Log target used by the paste pipeline.
pub const LOG_TARGET: &str = "paste_cleaner";
