//! Clipboard fragment parsing.
//!
//! The HTML5 parsing itself is delegated to `scraper` (html5ever in body
//! context); this module copies the resulting DOM into a [`MarkupTree`],
//! keeping only elements and text.

use scraper::{Html, Node};

use super::classify::is_non_content;
use super::node::{ElementData, MarkupNode};
use super::tree::MarkupTree;

impl MarkupTree {
    /// Parse an HTML fragment as it would appear inside `<body>`.
    ///
    /// Comments, doctypes and processing instructions are dropped, as are the
    /// non-content elements office suites and browsers put in front of the
    /// copied selection (`<meta>`, `<style>`, ...). Never fails: malformed
    /// markup is repaired by the HTML5 tree builder.
    #[must_use]
    pub fn parse_fragment(markup: &str) -> Self {
        let document = Html::parse_fragment(markup);
        let mut tree = MarkupTree::new();

        // The fragment root holds a synthetic <html> element wrapping the content.
        // Walk with an explicit stack so deeply nested input cannot exhaust the call stack.
        let mut pending = vec![(*document.root_element(), tree.root_id())];

        while let Some((source, target)) = pending.pop() {
            for child in source.children() {
                let value = match child.value() {
                    Node::Text(text) => MarkupNode::Text(String::from(&**text)),
                    Node::Element(element) => {
                        let tag = element.name().to_ascii_lowercase();
                        if is_non_content(&tag) {
                            log::trace!("Dropping non-content <{tag}> from pasted fragment");
                            continue;
                        }
                        MarkupNode::Element(ElementData {
                            tag,
                            attrs: element
                                .attrs()
                                .map(|(name, value)| (name.to_ascii_lowercase(), value.to_string()))
                                .collect(),
                        })
                    }
                    _ => continue,
                };

                let has_children = child.has_children();
                if let Some(id) = tree.append_new(target, value)
                    && has_children
                {
                    pending.push((child, id));
                }
            }
        }

        tree
    }
}
