//! Recursive tree normalization.
//!
//! Each call snapshots the children of the node it is working on and decides
//! per child from that snapshot; children moved or removed by earlier
//! decisions are skipped rather than treated as errors.

use crate::errors::{PasteError, PasteResult};
use crate::markup::classify::is_inline_formatting;
use crate::markup::{ElementClass, ElementData, MarkupNode, MarkupTree, NodeId};
use crate::paste::DebugLog;

use super::attributes::{alignment_style, element_alignment, sanitize_attributes};
use super::formatting::{
    FormattingDecision, coercion_would_nest, decide, holds_nested_blocks, lift_nested_blocks,
    split_formatting, unwrap_wrapper,
};

pub(crate) struct Walker<'a> {
    tree: &'a mut MarkupTree,
    smart: bool,
    max_depth: usize,
    log: DebugLog,
}

impl<'a> Walker<'a> {
    pub(crate) fn new(
        tree: &'a mut MarkupTree,
        smart: bool,
        max_depth: usize,
        log: DebugLog,
    ) -> Self {
        Self {
            tree,
            smart,
            max_depth,
            log,
        }
    }

    pub(crate) fn run(mut self) -> PasteResult<()> {
        let root = self.tree.root_id();
        self.normalize_children(root, 0)
    }

    fn check_depth(&self, depth: usize) -> PasteResult<()> {
        if depth > self.max_depth {
            return Err(PasteError::NestingTooDeep {
                limit: self.max_depth,
            });
        }
        Ok(())
    }

    /// Normalize `id` itself: sanitize, split or unwrap, then descend.
    fn normalize_node(&mut self, id: NodeId, depth: usize) -> PasteResult<()> {
        match self.tree.node(id) {
            Some(MarkupNode::Element(_)) => {}
            Some(MarkupNode::Fragment) => return self.normalize_children(id, depth),
            Some(MarkupNode::Text(_)) | None => return Ok(()),
        }
        if !self.tree.is_attached(id) {
            return Ok(());
        }

        self.sanitize(id);

        let decision = decide(self.tree, id);
        if self.rewrite(id, decision, depth)? {
            return Ok(());
        }

        self.normalize_children(id, depth)?;

        // Coercion and aligned unwrapping below may have turned inline children into blocks.
        if self.tree.tag(id).is_some_and(is_inline_formatting) {
            let decision = decide(self.tree, id);
            if decision == FormattingDecision::Split {
                self.log.debug(format_args!(
                    "Splitting formatting run after normalizing its children"
                ));
                self.rewrite(id, decision, depth)?;
            }
        } else if holds_nested_blocks(self.tree, id) {
            self.log.debug(format_args!(
                "Lifting blocks out of <{}>",
                self.tree.tag(id).unwrap_or_default()
            ));
            // The lifted pieces were normalized as children already.
            let _ = lift_nested_blocks(self.tree, id);
        }
        Ok(())
    }

    /// Apply an unwrap or split decision and normalize what replaced the node.
    ///
    /// Returns true when the node was replaced.
    fn rewrite(
        &mut self,
        id: NodeId,
        decision: FormattingDecision,
        depth: usize,
    ) -> PasteResult<bool> {
        let replacements = match decision {
            FormattingDecision::Keep => return Ok(false),
            FormattingDecision::Unwrap => unwrap_wrapper(self.tree, id),
            FormattingDecision::Split => split_formatting(self.tree, id),
        };
        let Some(replacements) = replacements else {
            log::trace!("Skipping rewrite of detached node {id:?}");
            return Ok(true);
        };
        for replacement in replacements {
            self.normalize_child(replacement, depth + 1)?;
        }
        Ok(true)
    }

    fn normalize_children(&mut self, id: NodeId, depth: usize) -> PasteResult<()> {
        for child in self.tree.children(id) {
            if self.tree.parent(child) != Some(id) {
                continue;
            }
            self.normalize_child(child, depth + 1)?;
        }
        Ok(())
    }

    /// Treatment of a node occupying a child position.
    fn normalize_child(&mut self, child: NodeId, depth: usize) -> PasteResult<()> {
        self.check_depth(depth)?;
        if !self.tree.is_attached(child) {
            return Ok(());
        }

        match self.tree.class_of(child) {
            None => Ok(()),
            Some(ElementClass::MustUnwrap) => self.unwrap_child(child, depth),
            Some(ElementClass::Unclassified) if self.smart => {
                self.sanitize(child);
                if coercion_would_nest(self.tree, child) {
                    self.log.debug(format_args!(
                        "Unwrapping <{}> inside a paragraph instead of coercing it",
                        self.tree.tag(child).unwrap_or_default()
                    ));
                    return self.unwrap_child(child, depth);
                }
                let mut paragraph = ElementData::new("p");
                if let Some(alignment) = self.tree.element(child).and_then(element_alignment) {
                    paragraph.set_attr("style", alignment_style(&alignment));
                }
                self.log.debug(format_args!(
                    "Coercing <{}> into a paragraph",
                    self.tree.tag(child).unwrap_or_default()
                ));
                match self
                    .tree
                    .replace_keeping_children(child, MarkupNode::Element(paragraph))
                {
                    Some(paragraph) => self.normalize_node(paragraph, depth),
                    None => Ok(()),
                }
            }
            Some(_) => {
                self.sanitize(child);
                self.normalize_node(child, depth)
            }
        }
    }

    fn unwrap_child(&mut self, child: NodeId, depth: usize) -> PasteResult<()> {
        if let Some(promoted) = unwrap_wrapper(self.tree, child) {
            for node in promoted {
                self.normalize_child(node, depth + 1)?;
            }
        }
        Ok(())
    }

    /// Sanitize attributes, restoring text content if sanitizing emptied a text-only element.
    fn sanitize(&mut self, id: NodeId) {
        let children = self.tree.children(id);
        let text_only = children
            .iter()
            .all(|&child| self.tree.node(child).is_some_and(MarkupNode::is_text));
        let original_text = if text_only {
            self.tree.text_content(id).trim().to_string()
        } else {
            String::new()
        };

        self.tree.with_element_mut(id, sanitize_attributes);

        if !original_text.is_empty() && self.tree.text_content(id).trim().is_empty() {
            self.log.debug(format_args!("Restoring text content lost while sanitizing"));
            self.tree.set_text_content(id, &original_text);
        }
    }
}
