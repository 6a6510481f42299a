//! HTML serialization of a [`MarkupTree`].

use ego_tree::NodeId;
use ego_tree::iter::Edge;

use super::classify::is_void;
use super::node::{ElementData, MarkupNode};
use super::tree::MarkupTree;

impl MarkupTree {
    /// Serialize the whole fragment (the root itself emits nothing).
    #[must_use]
    pub fn to_html(&self) -> String {
        self.inner_html(self.root_id())
    }

    /// Serialize the children of `id`.
    #[must_use]
    pub fn inner_html(&self, id: NodeId) -> String {
        let mut output = String::new();
        let Some(node) = self.tree.get(id) else {
            return output;
        };

        // Edge traversal keeps serialization iterative regardless of nesting depth.
        for edge in node.traverse() {
            match edge {
                Edge::Open(current) if current.id() == id => {}
                Edge::Close(current) if current.id() == id => {}
                Edge::Open(current) => match current.value() {
                    MarkupNode::Text(text) => output.push_str(&html_escape::encode_text(text)),
                    MarkupNode::Element(element) => push_open_tag(&mut output, element),
                    MarkupNode::Fragment => {}
                },
                Edge::Close(current) => {
                    if let MarkupNode::Element(element) = current.value()
                        && !is_void(&element.tag)
                    {
                        output.push_str("</");
                        output.push_str(&element.tag);
                        output.push('>');
                    }
                }
            }
        }

        output
    }
}

fn push_open_tag(output: &mut String, element: &ElementData) {
    output.push('<');
    output.push_str(&element.tag);
    for (name, value) in &element.attrs {
        output.push(' ');
        output.push_str(name);
        output.push_str("=\"");
        output.push_str(&html_escape::encode_double_quoted_attribute(value));
        output.push('"');
    }
    output.push('>');
}
