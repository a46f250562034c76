use indexmap::IndexMap;
use log::trace;

use super::{AttrValue, Node, Renderable};
use crate::dom::DomElement;
use crate::error::ElementError;

/// Ordered attribute mapping. Keys are unique; insertion order is render order.
pub type Attributes = IndexMap<String, AttrValue>;

/// Which kind of element a node was created as.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ElementFamily {
    #[default]
    Generic,
    /// Created through one of the [`form`](super::form) factories.
    Form,
}

/// A plain element: a tag, its attributes, optional HTML text and children.
#[derive(Debug, Clone, PartialEq)]
pub struct BasicElement {
    tag: String,
    family: ElementFamily,
    attributes: Attributes,
    text: Option<String>,
    children: Vec<Node>,
}

impl BasicElement {
    /// Create an element for `tag`.
    ///
    /// Fails with [`ElementError::MissingTag`] when the tag is empty.
    pub fn new(tag: impl Into<String>) -> Result<Self, ElementError> {
        let tag = tag.into();
        if tag.trim().is_empty() {
            return Err(ElementError::MissingTag);
        }
        Ok(Self::with_family(tag, ElementFamily::Generic))
    }

    /// Tags passed here are compile-time constants and never empty.
    pub(crate) fn with_family(tag: impl Into<String>, family: ElementFamily) -> Self {
        Self {
            tag: tag.into(),
            family,
            attributes: Attributes::new(),
            text: None,
            children: Vec::new(),
        }
    }

    // Builders

    pub fn attr(mut self, name: impl Into<String>, value: impl Into<AttrValue>) -> Self {
        self.set_attr(name, value);
        self
    }

    /// Set the attribute only when a value is present.
    pub fn maybe_attr<V: Into<AttrValue>>(self, name: impl Into<String>, value: Option<V>) -> Self {
        match value {
            Some(value) => self.attr(name, value),
            None => self,
        }
    }

    pub fn attrs<K, V>(mut self, attributes: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<AttrValue>,
    {
        for (name, value) in attributes {
            self.set_attr(name, value);
        }
        self
    }

    /// Replace the whole attribute mapping.
    pub fn with_attributes(mut self, attributes: Attributes) -> Self {
        self.attributes = attributes;
        self
    }

    /// HTML content applied after the children. An empty string means no text.
    pub fn text(mut self, text: impl Into<String>) -> Self {
        let text = text.into();
        self.text = (!text.is_empty()).then_some(text);
        self
    }

    pub fn child(mut self, child: impl Into<Node>) -> Self {
        self.children.push(child.into());
        self
    }

    pub fn children<N: Into<Node>>(mut self, children: impl IntoIterator<Item = N>) -> Self {
        self.children.extend(children.into_iter().map(Into::into));
        self
    }

    // Mutation

    pub fn set_attr(&mut self, name: impl Into<String>, value: impl Into<AttrValue>) {
        self.attributes.insert(name.into(), value.into());
    }

    pub fn push_child(&mut self, child: impl Into<Node>) {
        self.children.push(child.into());
    }

    // Accessors

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn family(&self) -> ElementFamily {
        self.family
    }

    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    pub fn attribute(&self, name: &str) -> Option<&AttrValue> {
        self.attributes.get(name)
    }

    /// The `id` attribute when it holds text.
    pub fn id(&self) -> Option<&str> {
        self.attribute("id").and_then(AttrValue::as_str)
    }

    pub fn inner_text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    pub fn child_nodes(&self) -> &[Node] {
        &self.children
    }
}

impl Renderable for BasicElement {
    fn render(&self) -> DomElement {
        let mut element = DomElement::new(&self.tag);

        for (name, value) in &self.attributes {
            element.set_attr(name, value.to_string());
        }

        for child in &self.children {
            element.append(child.render());
        }

        // Text goes last and replaces whatever the children rendered.
        if let Some(text) = &self.text {
            if !self.children.is_empty() {
                trace!(
                    "<{}> text replaces {} rendered children",
                    self.tag,
                    self.children.len()
                );
            }
            element.set_inner_html(text.as_str());
        }

        element
    }
}
