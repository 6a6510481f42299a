//! Attribute sanitization.
//!
//! Every attribute except `align`, `href` and `target` is removed. A
//! `text-align` declaration found in the style attribute survives as the only
//! style content, so alignment set by the source document is kept while
//! colors, fonts and classes are dropped.

use regex::Regex;
use std::sync::LazyLock;

use crate::markup::ElementData;

/// Attributes preserved verbatim on retained elements.
pub const SAFE_ATTRIBUTES: &[&str] = &["align", "href", "target"];

// Value runs to the next declaration separator.
static TEXT_ALIGN_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(?:^|[;\s])text-align\s*:\s*([^;]+)")
        .expect("TEXT_ALIGN_RE: hardcoded regex is valid")
});

/// Extract the value of a `text-align` declaration from an inline style.
#[must_use]
pub fn extract_text_align(style: &str) -> Option<String> {
    let value = TEXT_ALIGN_RE.captures(style)?.get(1)?.as_str().trim();
    (!value.is_empty()).then(|| value.to_string())
}

/// Style attribute value carrying only an alignment directive.
#[must_use]
pub fn alignment_style(alignment: &str) -> String {
    format!("text-align: {alignment}")
}

/// Alignment carried by an element's style attribute, if any.
#[must_use]
pub fn element_alignment(element: &ElementData) -> Option<String> {
    element.attr("style").and_then(extract_text_align)
}

/// Strip every unsafe attribute from `element`, keeping its text alignment.
///
/// Idempotent: a sanitized element is left unchanged.
pub fn sanitize_attributes(element: &mut ElementData) {
    let alignment = element_alignment(element);

    element.retain_attrs(|name, _| {
        SAFE_ATTRIBUTES
            .iter()
            .any(|safe| name.eq_ignore_ascii_case(safe))
    });

    if let Some(alignment) = alignment {
        element.set_attr("style", alignment_style(&alignment));
    }
}

/// Whether an attribute may appear on a normalized element.
#[must_use]
pub fn is_permitted_attribute(name: &str, value: &str) -> bool {
    if SAFE_ATTRIBUTES.iter().any(|safe| name.eq_ignore_ascii_case(safe)) {
        return true;
    }
    name.eq_ignore_ascii_case("style")
        && extract_text_align(value).is_some_and(|align| value == alignment_style(&align))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn element_with(attrs: &[(&str, &str)]) -> ElementData {
        let mut element = ElementData::new("p");
        for (name, value) in attrs {
            element.set_attr(name, *value);
        }
        element
    }

    #[test]
    fn test_strips_presentational_attributes() {
        let mut el = element_with(&[
            ("class", "MsoNormal"),
            ("color", "red"),
            ("id", "x"),
            ("style", "color: red; font-size: 12pt"),
        ]);
        sanitize_attributes(&mut el);
        assert!(el.attrs.is_empty());
    }

    #[test]
    fn test_keeps_safe_attributes() {
        let mut el = element_with(&[
            ("href", "https://example.com"),
            ("target", "_blank"),
            ("rel", "noopener"),
            ("align", "center"),
        ]);
        sanitize_attributes(&mut el);
        assert_eq!(el.attr("href"), Some("https://example.com"));
        assert_eq!(el.attr("target"), Some("_blank"));
        assert_eq!(el.attr("align"), Some("center"));
        assert!(el.attr("rel").is_none());
    }

    #[test]
    fn test_alignment_survives_as_only_style() {
        let mut el = element_with(&[("style", "color:red;text-align:center;font-weight:bold")]);
        sanitize_attributes(&mut el);
        assert_eq!(el.attr("style"), Some("text-align: center"));
        assert_eq!(el.attrs.len(), 1);
    }

    #[test]
    fn test_sanitize_is_idempotent() {
        let mut el = element_with(&[("style", "TEXT-ALIGN: right ; color: blue"), ("class", "c")]);
        sanitize_attributes(&mut el);
        let once = el.clone();
        sanitize_attributes(&mut el);
        assert_eq!(el, once);
        assert_eq!(el.attr("style"), Some("text-align: right"));
    }

    #[test]
    fn test_extract_ignores_prefixed_properties() {
        assert_eq!(extract_text_align("mso-text-align: center"), None);
        assert_eq!(extract_text_align("text-align:justify"), Some("justify".to_string()));
        assert_eq!(extract_text_align("text-align: ;"), None);
    }

    #[test]
    fn test_permitted_attribute_check() {
        assert!(is_permitted_attribute("href", "#"));
        assert!(is_permitted_attribute("style", "text-align: left"));
        assert!(!is_permitted_attribute("style", "text-align: left; color: red"));
        assert!(!is_permitted_attribute("class", "x"));
    }
}
