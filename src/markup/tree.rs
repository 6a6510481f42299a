//! Arena-backed markup tree and the node surgery primitives the normalizer uses.
//!
//! Nodes live in an [`ego_tree::Tree`] and are addressed by [`NodeId`], so a
//! node can be moved, wrapped or replaced without invalidating references held
//! elsewhere. Parent links are maintained by the arena on every move.
//!
//! A node other than the root that has lost its path to the root is
//! *detached*. Every surgery primitive treats a detached node as a no-op and
//! reports it through its return value instead of failing.

use ego_tree::{NodeId, Tree};

use super::classify::ElementClass;
use super::node::{ElementData, MarkupNode};

/// A parsed clipboard fragment rooted at a synthetic [`MarkupNode::Fragment`].
#[derive(Debug, Clone)]
pub struct MarkupTree {
    pub(crate) tree: Tree<MarkupNode>,
}

impl Default for MarkupTree {
    fn default() -> Self {
        Self::new()
    }
}

impl MarkupTree {
    /// Create an empty fragment.
    #[must_use]
    pub fn new() -> Self {
        Self {
            tree: Tree::new(MarkupNode::Fragment),
        }
    }

    #[must_use]
    pub fn root_id(&self) -> NodeId {
        self.tree.root().id()
    }

    #[must_use]
    pub fn node(&self, id: NodeId) -> Option<&MarkupNode> {
        self.tree.get(id).map(|node| node.value())
    }

    #[must_use]
    pub fn element(&self, id: NodeId) -> Option<&ElementData> {
        self.node(id).and_then(MarkupNode::as_element)
    }

    /// Run `edit` against an element's data; `None` for text, the root or unknown ids.
    pub fn with_element_mut<R, F>(&mut self, id: NodeId, edit: F) -> Option<R>
    where
        F: FnOnce(&mut ElementData) -> R,
    {
        let mut node = self.tree.get_mut(id)?;
        node.value().as_element_mut().map(edit)
    }

    #[must_use]
    pub fn tag(&self, id: NodeId) -> Option<&str> {
        self.node(id).and_then(MarkupNode::tag)
    }

    /// Classification of an element node; `None` for text and the root.
    #[must_use]
    pub fn class_of(&self, id: NodeId) -> Option<ElementClass> {
        self.tag(id).map(ElementClass::of)
    }

    #[must_use]
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.tree.get(id)?.parent().map(|parent| parent.id())
    }

    /// Snapshot of a node's children in document order.
    #[must_use]
    pub fn children(&self, id: NodeId) -> Vec<NodeId> {
        self.tree
            .get(id)
            .map(|node| node.children().map(|child| child.id()).collect())
            .unwrap_or_default()
    }

    /// Whether the node is the root or still reachable from it.
    #[must_use]
    pub fn is_attached(&self, id: NodeId) -> bool {
        let root = self.root_id();
        if id == root {
            return true;
        }
        self.tree
            .get(id)
            .and_then(|node| node.ancestors().last())
            .is_some_and(|top| top.id() == root)
    }

    /// Concatenated text of every descendant text node, in document order.
    #[must_use]
    pub fn text_content(&self, id: NodeId) -> String {
        let Some(node) = self.tree.get(id) else {
            return String::new();
        };
        node.descendants()
            .filter_map(|descendant| match descendant.value() {
                MarkupNode::Text(text) => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Text of the whole fragment.
    #[must_use]
    pub fn full_text(&self) -> String {
        self.text_content(self.root_id())
    }

    /// Whether any strict descendant of `id` satisfies `pred`.
    pub fn any_descendant<F>(&self, id: NodeId, mut pred: F) -> bool
    where
        F: FnMut(&MarkupNode) -> bool,
    {
        self.tree
            .get(id)
            .is_some_and(|node| node.descendants().skip(1).any(|d| pred(d.value())))
    }

    /// Ids of every node in the fragment matching `pred`, in document order.
    pub fn find_all<F>(&self, mut pred: F) -> Vec<NodeId>
    where
        F: FnMut(&MarkupNode) -> bool,
    {
        self.tree
            .root()
            .descendants()
            .filter(|node| pred(node.value()))
            .map(|node| node.id())
            .collect()
    }

    /// Allocate a node that is not yet part of the fragment.
    pub fn orphan(&mut self, value: MarkupNode) -> NodeId {
        self.tree.orphan(value).id()
    }

    /// Append `child` to `parent`, moving it out of its current position.
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) -> bool {
        if parent == child {
            return false;
        }
        match self.tree.get_mut(parent) {
            Some(mut node) => {
                node.append_id(child);
                true
            }
            None => false,
        }
    }

    /// Append a new node to `parent` and return its id.
    pub fn append_new(&mut self, parent: NodeId, value: MarkupNode) -> Option<NodeId> {
        let mut node = self.tree.get_mut(parent)?;
        Some(node.append(value).id())
    }

    /// Replace `id` in its parent with `replacements`, in order.
    ///
    /// Returns false (leaving the tree untouched) when `id` is the root or is
    /// detached.
    pub fn replace_with(&mut self, id: NodeId, replacements: &[NodeId]) -> bool {
        if id == self.root_id() || !self.is_attached(id) {
            return false;
        }
        let Some(mut node) = self.tree.get_mut(id) else {
            return false;
        };
        for &replacement in replacements {
            if replacement != id {
                node.insert_id_before(replacement);
            }
        }
        node.detach();
        true
    }

    /// Remove `id`, promoting its children into its former position.
    ///
    /// Returns the promoted children, or `None` when the node could not be
    /// replaced.
    pub fn unwrap(&mut self, id: NodeId) -> Option<Vec<NodeId>> {
        let children = self.children(id);
        self.replace_with(id, &children).then_some(children)
    }

    /// Replace `id` with `wrapper`, moving all of `id`'s children into it.
    pub fn replace_keeping_children(&mut self, id: NodeId, wrapper: MarkupNode) -> Option<NodeId> {
        if id == self.root_id() || !self.is_attached(id) {
            return None;
        }
        let wrapper_id = self.orphan(wrapper);
        self.tree.get_mut(wrapper_id)?.reparent_from_id_append(id);
        self.replace_with(id, &[wrapper_id]).then_some(wrapper_id)
    }

    /// Drop every child of `id` and give it a single text child.
    pub fn set_text_content(&mut self, id: NodeId, text: &str) {
        for child in self.children(id) {
            if let Some(mut node) = self.tree.get_mut(child) {
                node.detach();
            }
        }
        let _ = self.append_new(id, MarkupNode::text(text));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> (MarkupTree, NodeId, NodeId) {
        let mut tree = MarkupTree::new();
        let root = tree.root_id();
        let span = tree
            .append_new(root, MarkupNode::element("span"))
            .expect("root exists");
        tree.append_new(span, MarkupNode::text("a"));
        tree.append_new(span, MarkupNode::text("b"));
        (tree, root, span)
    }

    #[test]
    fn test_unwrap_promotes_children_in_place() {
        let (mut tree, root, span) = sample();
        tree.append_new(root, MarkupNode::text("c"));
        let promoted = tree.unwrap(span).expect("span is attached");
        assert_eq!(promoted.len(), 2);
        assert_eq!(tree.children(root).len(), 3);
        assert_eq!(tree.full_text(), "abc");
        assert!(!tree.is_attached(span));
    }

    #[test]
    fn test_surgery_on_detached_node_is_noop() {
        let (mut tree, _root, span) = sample();
        assert!(tree.unwrap(span).is_some());
        assert!(tree.unwrap(span).is_none());
        assert!(tree.replace_keeping_children(span, MarkupNode::element("p")).is_none());
    }

    #[test]
    fn test_root_cannot_be_replaced() {
        let (mut tree, root, _span) = sample();
        assert!(!tree.replace_with(root, &[]));
        assert_eq!(tree.full_text(), "ab");
    }

    #[test]
    fn test_replace_keeping_children_moves_content() {
        let (mut tree, root, span) = sample();
        let p = tree
            .replace_keeping_children(span, MarkupNode::element("p"))
            .expect("span is attached");
        assert_eq!(tree.children(root), vec![p]);
        assert_eq!(tree.text_content(p), "ab");
    }

    #[test]
    fn test_set_text_content() {
        let (mut tree, _root, span) = sample();
        tree.set_text_content(span, "restored");
        assert_eq!(tree.children(span).len(), 1);
        assert_eq!(tree.text_content(span), "restored");
    }
}
