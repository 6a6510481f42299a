//! Residual wrapper sweep.
//!
//! The recursive walk is expected to leave no presentational wrapper behind.
//! This pass checks that and unwraps anything it finds, without re-running
//! any decision logic. Running it on a clean tree changes nothing.

use crate::markup::classify::is_must_unwrap;
use crate::markup::{MarkupTree, NodeId};

/// Presentational wrappers still present anywhere in the tree, in document order.
#[must_use]
pub fn residual_wrappers(tree: &MarkupTree) -> Vec<NodeId> {
    tree.find_all(|node| node.tag().is_some_and(is_must_unwrap))
}

/// Unwrap every remaining presentational wrapper; returns how many were removed.
pub fn unwrap_residual(tree: &mut MarkupTree) -> usize {
    residual_wrappers(tree)
        .into_iter()
        .filter(|&id| tree.unwrap(id).is_some())
        .count()
}

/// Whether the tree contains no element the normalizer should have removed.
#[must_use]
pub fn is_free_of_wrappers(tree: &MarkupTree) -> bool {
    residual_wrappers(tree).is_empty()
}
