//! Fixed element classification used by every normalization decision.

/// How the normalizer treats an element, derived from its tag name alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementClass {
    /// Semantic formatting that survives normalization (links, emphasis, lists).
    SafeFormatting,
    /// Presentational wrappers that are always removed with their children promoted.
    MustUnwrap,
    /// Block-level elements that terminate inline formatting runs.
    Structural,
    Unclassified,
}

const SAFE_FORMATTING_TAGS: &[&str] = &[
    "a", "strong", "b", "em", "i", "u", "s", "code", "h1", "h2", "h3", "h4", "h5", "h6", "ul",
    "ol", "li",
];

const MUST_UNWRAP_TAGS: &[&str] = &["span", "var", "font"];

const STRUCTURAL_TAGS: &[&str] = &["p", "div", "br", "h1", "h2", "h3", "h4", "h5", "h6"];

/// Inline formatting whose run may have to be split across block boundaries.
const INLINE_FORMATTING_TAGS: &[&str] = &["strong", "b", "em", "i", "u", "s"];

const HEADING_TAGS: &[&str] = &["h1", "h2", "h3", "h4", "h5", "h6"];

/// Flow containers that may legally hold paragraphs.
const BLOCK_CONTAINER_TAGS: &[&str] = &[
    "div", "ul", "ol", "li", "dl", "dt", "dd", "table", "thead", "tbody", "tfoot", "tr", "td",
    "th", "blockquote", "section", "article", "aside", "header", "footer", "nav", "main",
    "figure", "address", "details", "fieldset", "form", "pre",
];

/// Elements that clipboard producers prepend to the fragment and that never carry content.
const NON_CONTENT_TAGS: &[&str] = &["head", "meta", "link", "style", "script", "title", "xml"];

pub const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "param", "source",
    "track", "wbr",
];

impl ElementClass {
    /// Classify a lowercase tag name.
    ///
    /// Headings are both safe formatting and structural; structural wins.
    #[must_use]
    pub fn of(tag: &str) -> Self {
        if MUST_UNWRAP_TAGS.contains(&tag) {
            ElementClass::MustUnwrap
        } else if STRUCTURAL_TAGS.contains(&tag) {
            ElementClass::Structural
        } else if SAFE_FORMATTING_TAGS.contains(&tag) {
            ElementClass::SafeFormatting
        } else {
            ElementClass::Unclassified
        }
    }
}

#[must_use]
pub fn is_must_unwrap(tag: &str) -> bool {
    MUST_UNWRAP_TAGS.contains(&tag)
}

#[must_use]
pub fn is_structural(tag: &str) -> bool {
    STRUCTURAL_TAGS.contains(&tag)
}

#[must_use]
pub fn is_inline_formatting(tag: &str) -> bool {
    INLINE_FORMATTING_TAGS.contains(&tag)
}

#[must_use]
pub fn is_heading(tag: &str) -> bool {
    HEADING_TAGS.contains(&tag)
}

#[must_use]
pub fn is_block_container(tag: &str) -> bool {
    BLOCK_CONTAINER_TAGS.contains(&tag)
}

#[must_use]
pub fn is_non_content(tag: &str) -> bool {
    NON_CONTENT_TAGS.contains(&tag)
}

#[must_use]
pub fn is_void(tag: &str) -> bool {
    VOID_ELEMENTS.contains(&tag)
}
