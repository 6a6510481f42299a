//! Split/unwrap decisions for formatting elements.
//!
//! Word processors routinely wrap whole paragraphs, line breaks and headings
//! in a single `<b>` or `<span style=...>`. Keeping such a wrapper would force
//! block content into one inline run, so the wrapper is either unwrapped
//! (presentational wrappers) or split so the formatting is re-applied to each
//! inline child while block children are promoted bare.

use crate::markup::classify::{
    is_block_container, is_heading, is_inline_formatting, is_must_unwrap, is_structural,
};
use crate::markup::{ElementClass, ElementData, MarkupNode, MarkupTree, NodeId};
use crate::utils::{MAX_FORMATTING_LINES, MAX_FORMATTING_TEXT_CHARS};

use super::attributes::{alignment_style, element_alignment};

/// What to do with an element before descending into its children.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormattingDecision {
    Keep,
    /// Remove the element and promote its children (or an aligned paragraph holding them).
    Unwrap,
    /// Re-apply the element's formatting per child, promoting block children bare.
    Split,
}

/// Decide how `id` must be treated.
///
/// Presentational wrappers always unwrap. Inline formatting (`b`, `strong`,
/// `i`, `em`, `u`, `s`) splits when it wraps block structure: a structural
/// descendant (which covers `<br>`), more than two lines of text, or more than
/// 300 characters. Everything else is kept.
#[must_use]
pub fn decide(tree: &MarkupTree, id: NodeId) -> FormattingDecision {
    let Some(tag) = tree.tag(id) else {
        return FormattingDecision::Keep;
    };
    if is_must_unwrap(tag) {
        return FormattingDecision::Unwrap;
    }
    if !is_inline_formatting(tag) || split_would_rebuild(tree, id) {
        return FormattingDecision::Keep;
    }
    if wraps_block_structure(tree, id) {
        FormattingDecision::Split
    } else {
        FormattingDecision::Keep
    }
}

fn wraps_block_structure(tree: &MarkupTree, id: NodeId) -> bool {
    if tree.any_descendant(id, |node| node.tag().is_some_and(is_structural)) {
        return true;
    }
    let text = tree.text_content(id);
    text.split('\n').count() > MAX_FORMATTING_LINES
        || text.chars().count() > MAX_FORMATTING_TEXT_CHARS
}

/// A lone inline child would be re-wrapped in an identical element.
fn split_would_rebuild(tree: &MarkupTree, id: NodeId) -> bool {
    let children = tree.children(id);
    let [only] = children.as_slice() else {
        return false;
    };
    match tree.node(*only) {
        Some(MarkupNode::Text(text)) => !text.trim().is_empty(),
        Some(MarkupNode::Element(element)) => {
            !is_structural(&element.tag) && !is_must_unwrap(&element.tag)
        }
        _ => false,
    }
}

/// Remove a presentational wrapper.
///
/// A wrapper carrying a `text-align` directive hands the alignment to the
/// paragraph or heading it sits in, or becomes an aligned paragraph itself
/// where no such host exists. Any other wrapper is replaced by its children.
/// Returns the nodes now occupying the wrapper's position, or `None` when it
/// is detached.
pub fn unwrap_wrapper(tree: &mut MarkupTree, id: NodeId) -> Option<Vec<NodeId>> {
    if !tree.is_attached(id) {
        return None;
    }
    let Some(alignment) = tree.element(id).and_then(element_alignment) else {
        return tree.unwrap(id);
    };

    if let Some(host) = paragraph_host(tree, id) {
        tree.with_element_mut(host, |element| {
            element.set_attr("style", alignment_style(&alignment));
        });
        return tree.unwrap(id);
    }

    let mut paragraph = ElementData::new("p");
    paragraph.set_attr("style", alignment_style(&alignment));
    tree.replace_keeping_children(id, MarkupNode::Element(paragraph))
        .map(|p| vec![p])
}

/// Nearest paragraph or heading enclosing `id` with no flow container in between.
///
/// A paragraph created below such a host would nest one block inside
/// phrasing content.
#[must_use]
pub fn paragraph_host(tree: &MarkupTree, id: NodeId) -> Option<NodeId> {
    let mut current = tree.parent(id)?;
    loop {
        let tag = tree.tag(current)?;
        if tag == "p" || is_heading(tag) {
            return Some(current);
        }
        if is_block_container(tag) {
            return None;
        }
        current = tree.parent(current)?;
    }
}

/// Whether turning `id` into a paragraph would leave it stuck inside another one.
///
/// Paragraphs reached only through inline formatting runs are fine: the runs
/// split around the new block and the host lifts it out. Headings and
/// anything reached through a link or code span are not.
#[must_use]
pub fn coercion_would_nest(tree: &MarkupTree, id: NodeId) -> bool {
    let Some(host) = paragraph_host(tree, id) else {
        return false;
    };
    if tree.tag(host).is_some_and(is_heading) {
        return true;
    }
    let mut current = tree.parent(id);
    while let Some(ancestor) = current {
        if ancestor == host {
            return false;
        }
        if !tree.tag(ancestor).is_some_and(is_inline_formatting) {
            return true;
        }
        current = tree.parent(ancestor);
    }
    false
}

/// Break an inline formatting element apart at block boundaries.
///
/// Presentational wrappers among the children are removed first. Then each
/// text or inline child is wrapped in a fresh element with the original tag,
/// structural children and whitespace-only text are promoted as they are, and
/// the element is replaced by the resulting sequence.
pub fn split_formatting(tree: &mut MarkupTree, id: NodeId) -> Option<Vec<NodeId>> {
    if !tree.is_attached(id) {
        return None;
    }
    let tag = tree.tag(id)?.to_string();

    let mut wrappers: Vec<NodeId> = tree
        .children(id)
        .into_iter()
        .filter(|&child| is_wrapper(tree, child))
        .collect();
    while let Some(wrapper) = wrappers.pop() {
        let Some(promoted) = unwrap_wrapper(tree, wrapper) else {
            continue;
        };
        wrappers.extend(promoted.into_iter().filter(|&node| is_wrapper(tree, node)));
    }

    let mut pieces = Vec::new();
    for child in tree.children(id) {
        let promote_bare = match tree.node(child) {
            Some(MarkupNode::Text(text)) => text.trim().is_empty(),
            Some(MarkupNode::Element(element)) => is_structural(&element.tag),
            _ => true,
        };
        if promote_bare {
            pieces.push(child);
        } else {
            let wrapper = tree.orphan(MarkupNode::element(&tag));
            tree.append_child(wrapper, child);
            pieces.push(wrapper);
        }
    }

    tree.replace_with(id, &pieces).then_some(pieces)
}

fn is_wrapper(tree: &MarkupTree, id: NodeId) -> bool {
    tree.class_of(id) == Some(ElementClass::MustUnwrap)
}

/// Whether `child_tag` may not stay inside an element tagged `tag`.
fn breaks_out_of(tag: &str, child_tag: &str) -> bool {
    if tag == "p" {
        (is_structural(child_tag) && child_tag != "br") || is_block_container(child_tag)
    } else if is_heading(tag) {
        is_heading(child_tag)
    } else {
        false
    }
}

/// Whether a paragraph or heading holds blocks that the HTML parser would not nest there.
#[must_use]
pub fn holds_nested_blocks(tree: &MarkupTree, id: NodeId) -> bool {
    let Some(tag) = tree.tag(id) else {
        return false;
    };
    tree.children(id)
        .into_iter()
        .any(|child| tree.tag(child).is_some_and(|child_tag| breaks_out_of(tag, child_tag)))
}

/// Lift nested blocks out of a paragraph or heading.
///
/// Block children are promoted as they are; each run of other children is
/// kept in a copy of the original element (attributes included), and
/// whitespace-only runs are promoted bare. Returns the replacement sequence,
/// or `None` when the element is detached.
pub fn lift_nested_blocks(tree: &mut MarkupTree, id: NodeId) -> Option<Vec<NodeId>> {
    if !tree.is_attached(id) {
        return None;
    }
    let element = tree.element(id)?.clone();

    let mut pieces = Vec::new();
    let mut run = Vec::new();
    for child in tree.children(id) {
        if tree.tag(child).is_some_and(|child_tag| breaks_out_of(&element.tag, child_tag)) {
            close_run(tree, &element, &mut run, &mut pieces);
            pieces.push(child);
        } else {
            run.push(child);
        }
    }
    close_run(tree, &element, &mut run, &mut pieces);

    tree.replace_with(id, &pieces).then_some(pieces)
}

fn close_run(
    tree: &mut MarkupTree,
    element: &ElementData,
    run: &mut Vec<NodeId>,
    pieces: &mut Vec<NodeId>,
) {
    if run.is_empty() {
        return;
    }
    let blank = run.iter().all(|&node| {
        matches!(tree.node(node), Some(MarkupNode::Text(text)) if text.trim().is_empty())
    });
    if blank {
        pieces.append(run);
        return;
    }
    let wrapper = tree.orphan(MarkupNode::Element(element.clone()));
    for node in run.drain(..) {
        tree.append_child(wrapper, node);
    }
    pieces.push(wrapper);
}
