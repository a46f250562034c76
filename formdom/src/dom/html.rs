use std::fmt::{self, Write};

use super::{DomElement, DomNode};

/// Elements that never have a closing tag.
const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source",
    "track", "wbr",
];

pub fn is_void(tag: &str) -> bool {
    VOID_ELEMENTS
        .iter()
        .any(|void| void.eq_ignore_ascii_case(tag))
}

/// Escape a value for use inside a double-quoted attribute.
pub fn escape_attr(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '"' => escaped.push_str("&quot;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

pub(super) fn write_element(element: &DomElement, out: &mut impl Write) -> fmt::Result {
    write!(out, "<{}", element.tag())?;
    for (name, value) in element.attributes() {
        write!(out, " {}=\"{}\"", name, escape_attr(value))?;
    }
    out.write_char('>')?;

    // Children of void elements are dropped, as a browser would.
    if is_void(element.tag()) {
        return Ok(());
    }

    for child in element.children() {
        write_node(child, out)?;
    }
    write!(out, "</{}>", element.tag())
}

pub(super) fn write_node(node: &DomNode, out: &mut impl Write) -> fmt::Result {
    match node {
        DomNode::Element(element) => write_element(element, out),
        DomNode::Markup(markup) => out.write_str(markup),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_attr() {
        assert_eq!(escape_attr("plain"), "plain");
        assert_eq!(
            escape_attr(r#"$('#x').attr("value", a && b)"#),
            "$('#x').attr(&quot;value&quot;, a &amp;&amp; b)"
        );
        assert_eq!(escape_attr("<b>"), "&lt;b&gt;");
    }

    #[test]
    fn test_is_void() {
        assert!(is_void("input"));
        assert!(is_void("HR"));
        assert!(!is_void("div"));
        assert!(!is_void("textarea"));
    }
}
