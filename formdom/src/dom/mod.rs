//! In-memory document nodes produced by rendering.
//!
//! A [`DomElement`] is the live counterpart of a tree node: it owns its
//! attributes and children, can be inspected and mutated after rendering, and
//! serializes to HTML. Two rendered elements never share state.

mod html;

use std::fmt;

use indexmap::IndexMap;

pub use html::{escape_attr, is_void};

/// A child of a [`DomElement`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomNode {
    Element(DomElement),
    /// Raw HTML assigned through [`DomElement::set_inner_html`].
    Markup(String),
}

impl DomNode {
    pub fn as_element(&self) -> Option<&DomElement> {
        match self {
            Self::Element(element) => Some(element),
            Self::Markup(_) => None,
        }
    }

    pub fn as_markup(&self) -> Option<&str> {
        match self {
            Self::Element(_) => None,
            Self::Markup(markup) => Some(markup),
        }
    }
}

impl From<DomElement> for DomNode {
    fn from(element: DomElement) -> Self {
        Self::Element(element)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomElement {
    tag: String,
    attributes: IndexMap<String, String>,
    children: Vec<DomNode>,
}

impl DomElement {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attributes: IndexMap::new(),
            children: Vec::new(),
        }
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// The `id` attribute, if set.
    pub fn id(&self) -> Option<&str> {
        self.attr("id")
    }

    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    /// Set an attribute. An existing attribute keeps its position.
    pub fn set_attr(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.attributes.insert(name.into(), value.into());
    }

    pub fn remove_attr(&mut self, name: &str) -> Option<String> {
        self.attributes.shift_remove(name)
    }

    /// Attributes in the order they were first set.
    pub fn attributes(&self) -> impl Iterator<Item = (&str, &str)> {
        self.attributes
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }

    pub fn append(&mut self, child: impl Into<DomNode>) {
        self.children.push(child.into());
    }

    pub fn children(&self) -> &[DomNode] {
        &self.children
    }

    /// Child elements, skipping raw markup.
    pub fn child_elements(&self) -> impl Iterator<Item = &DomElement> {
        self.children.iter().filter_map(DomNode::as_element)
    }

    /// Replace every child with the given HTML.
    pub fn set_inner_html(&mut self, html: impl Into<String>) {
        self.children.clear();
        let html = html.into();
        if !html.is_empty() {
            self.children.push(DomNode::Markup(html));
        }
    }

    /// Serialized children.
    pub fn inner_html(&self) -> String {
        self.children.iter().map(ToString::to_string).collect()
    }

    /// Class tokens of the `class` attribute.
    pub fn classes(&self) -> impl Iterator<Item = &str> {
        self.attr("class").unwrap_or_default().split_whitespace()
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes().any(|c| c == class)
    }

    /// Append a class token unless it is already present.
    pub fn add_class(&mut self, class: &str) {
        if self.has_class(class) {
            return;
        }
        let classes = match self.attr("class").map(str::trim) {
            Some(current) if !current.is_empty() => format!("{current} {class}"),
            _ => class.to_string(),
        };
        self.set_attr("class", classes);
    }

    /// Find an element by `id` in this subtree, depth-first.
    pub fn find_by_id(&self, id: &str) -> Option<&DomElement> {
        if self.id() == Some(id) {
            return Some(self);
        }

        for child in self.child_elements() {
            if let Some(found) = child.find_by_id(id) {
                return Some(found);
            }
        }

        None
    }

    pub fn find_by_id_mut(&mut self, id: &str) -> Option<&mut DomElement> {
        if self.id() == Some(id) {
            return Some(self);
        }

        for child in &mut self.children {
            if let DomNode::Element(element) = child {
                if let Some(found) = element.find_by_id_mut(id) {
                    return Some(found);
                }
            }
        }

        None
    }

    pub fn to_html(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for DomNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        html::write_node(self, f)
    }
}

impl fmt::Display for DomElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        html::write_element(self, f)
    }
}
