//! Node payloads stored in the markup arena.

/// A single node of a parsed clipboard fragment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MarkupNode {
    /// Synthetic container that owns the top-level nodes of a fragment.
    Fragment,
    Element(ElementData),
    Text(String),
}

impl MarkupNode {
    /// Create an element node with no attributes.
    #[must_use]
    pub fn element(tag: &str) -> Self {
        MarkupNode::Element(ElementData::new(tag))
    }

    #[must_use]
    pub fn text(content: impl Into<String>) -> Self {
        MarkupNode::Text(content.into())
    }

    #[must_use]
    pub fn as_element(&self) -> Option<&ElementData> {
        match self {
            MarkupNode::Element(data) => Some(data),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_element_mut(&mut self) -> Option<&mut ElementData> {
        match self {
            MarkupNode::Element(data) => Some(data),
            _ => None,
        }
    }

    /// Tag name when this node is an element.
    #[must_use]
    pub fn tag(&self) -> Option<&str> {
        self.as_element().map(|el| el.tag.as_str())
    }

    #[must_use]
    pub fn is_text(&self) -> bool {
        matches!(self, MarkupNode::Text(_))
    }
}

/// Tag name and attributes of an element.
///
/// Tag names are stored lowercase. Attributes keep their source order so the
/// serializer emits them the way they arrived.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ElementData {
    pub tag: String,
    pub attrs: Vec<(String, String)>,
}

impl ElementData {
    #[must_use]
    pub fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_ascii_lowercase(),
            attrs: Vec::new(),
        }
    }

    #[must_use]
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    /// Set an attribute, replacing an existing value in place.
    pub fn set_attr(&mut self, name: &str, value: impl Into<String>) {
        let value = value.into();
        match self
            .attrs
            .iter_mut()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
        {
            Some((_, existing)) => *existing = value,
            None => self.attrs.push((name.to_ascii_lowercase(), value)),
        }
    }

    pub fn remove_attr(&mut self, name: &str) -> Option<String> {
        let index = self
            .attrs
            .iter()
            .position(|(key, _)| key.eq_ignore_ascii_case(name))?;
        Some(self.attrs.remove(index).1)
    }

    pub fn retain_attrs<F>(&mut self, mut keep: F)
    where
        F: FnMut(&str, &str) -> bool,
    {
        self.attrs.retain(|(key, value)| keep(key, value));
    }
}
