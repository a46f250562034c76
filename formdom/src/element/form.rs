//! Factories for form elements.
//!
//! Each factory uses a fixed tag, so none of them can fail. The returned
//! [`BasicElement`] is a builder; attributes and children are added with its
//! builder methods.

use super::{AttrValue, BasicElement, ElementFamily};

fn form_element(tag: &'static str) -> BasicElement {
    BasicElement::with_family(tag, ElementFamily::Form)
}

pub fn form() -> BasicElement {
    form_element("form")
}

pub fn input() -> BasicElement {
    form_element("input")
}

pub fn textarea(text: impl Into<String>) -> BasicElement {
    form_element("textarea").text(text)
}

pub fn label(text: impl Into<String>) -> BasicElement {
    form_element("label").text(text)
}

/// Fieldsets hold children only.
pub fn fieldset() -> BasicElement {
    form_element("fieldset")
}

pub fn legend(text: impl Into<String>) -> BasicElement {
    form_element("legend").text(text)
}

/// A select box; options are added as children.
pub fn select() -> BasicElement {
    form_element("select")
}

pub fn option(value: impl Into<AttrValue>, text: impl Into<String>) -> BasicElement {
    form_element("option").attr("value", value).text(text)
}

pub fn button(text: impl Into<String>) -> BasicElement {
    form_element("button").text(text)
}
