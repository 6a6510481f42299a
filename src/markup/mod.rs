//! Markup tree model for pasted fragments.
//!
//! - [`node`] - node payloads (`Fragment`, `Element`, `Text`)
//! - [`tree`] - the arena and its surgery primitives
//! - [`parse`] / [`serialize`] - HTML in and out
//! - [`classify`] - the fixed element classification

pub mod classify;
pub mod node;
pub mod parse;
pub mod serialize;
pub mod tree;

pub use classify::ElementClass;
pub use ego_tree::NodeId;
pub use node::{ElementData, MarkupNode};
pub use tree::MarkupTree;
