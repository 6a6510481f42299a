//! Markup normalization engine.
//!
//! Reduces an arbitrary pasted fragment to a constrained subset:
//! - [`attributes`] strips everything except `align`, `href`, `target` and a
//!   re-synthesized `text-align` style
//! - [`formatting`] decides whether a formatting element is kept, unwrapped
//!   or split at block boundaries
//! - [`walker`] drives both recursively over the tree
//! - [`sweep`] verifies no presentational wrapper survived

pub mod attributes;
pub mod formatting;
pub mod sweep;
mod walker;

use crate::config::PasteConfig;
use crate::errors::PasteResult;
use crate::markup::MarkupTree;
use crate::paste::DebugLog;
use crate::utils::{DEFAULT_MAX_DEPTH, LOG_TARGET};

pub use attributes::{SAFE_ATTRIBUTES, extract_text_align, sanitize_attributes};
pub use formatting::{FormattingDecision, decide};

/// Knobs for a single normalization pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NormalizeOptions {
    /// Coerce unclassified elements into paragraphs.
    pub smart: bool,
    pub max_depth: usize,
}

impl Default for NormalizeOptions {
    fn default() -> Self {
        Self {
            smart: false,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl NormalizeOptions {
    #[must_use]
    pub fn smart(smart: bool) -> Self {
        Self {
            smart,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn from_config(config: &PasteConfig) -> Self {
        Self {
            smart: config.mode().is_smart(),
            max_depth: config.max_depth(),
        }
    }
}

/// Normalize `tree` in place.
///
/// # Errors
///
/// Returns [`PasteError::NestingTooDeep`](crate::PasteError::NestingTooDeep)
/// when the fragment nests deeper than `options.max_depth`. The tree may be
/// partially rewritten in that case and should be discarded.
pub fn normalize(
    tree: &mut MarkupTree,
    options: NormalizeOptions,
    log: DebugLog,
) -> PasteResult<()> {
    walker::Walker::new(tree, options.smart, options.max_depth, log).run()?;

    let residual = sweep::unwrap_residual(tree);
    if residual > 0 {
        log::warn!(
            target: LOG_TARGET,
            "Normalization left {residual} presentational wrapper(s) behind; removed by sweep"
        );
    }
    Ok(())
}

/// Parse, normalize and serialize a fragment.
///
/// # Errors
///
/// See [`normalize`].
pub fn normalize_html(markup: &str, options: NormalizeOptions) -> PasteResult<String> {
    let mut tree = MarkupTree::parse_fragment(markup);
    normalize(&mut tree, options, DebugLog::disabled())?;
    Ok(tree.to_html())
}
