use log::trace;

use super::merge_class;
use crate::dom::DomElement;
use crate::element::{BasicElement, Renderable};

const FORM_GROUP: &str = "form-group";
const FORM_GROUP_ERROR: &str = "form-group has-error";
const CONTROL_LABEL: &str = "control-label";
const FORM_CONTROL: &str = "form-control";
const HELP_BLOCK: &str = "help-block";

/// A label and a form control, with an optional help (error) message.
///
/// Rendering merges the default `control-label` / `form-control` classes into
/// copies of the label and control; the held nodes are left untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldGroup {
    pub label: Option<BasicElement>,
    pub control: Option<BasicElement>,
    /// Empty means no error.
    pub help: String,
}

impl FieldGroup {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn label(mut self, label: BasicElement) -> Self {
        self.label = Some(label);
        self
    }

    pub fn control(mut self, control: BasicElement) -> Self {
        self.control = Some(control);
        self
    }

    pub fn help(mut self, message: impl Into<String>) -> Self {
        self.help = message.into();
        self
    }

    pub fn has_error(&self) -> bool {
        !self.help.is_empty()
    }
}

impl Renderable for FieldGroup {
    fn render(&self) -> DomElement {
        let mut group = DomElement::new("div");
        group.set_attr(
            "class",
            if self.has_error() {
                FORM_GROUP_ERROR
            } else {
                FORM_GROUP
            },
        );

        if let Some(label) = &self.label {
            let label = label
                .clone()
                .with_attributes(merge_class(label.attributes(), CONTROL_LABEL));
            group.append(label.render());
        }

        if let Some(control) = &self.control {
            let control = control
                .clone()
                .with_attributes(merge_class(control.attributes(), FORM_CONTROL));
            group.append(control.render());
        }

        if self.has_error() {
            trace!("field group carries help message: {}", self.help);
            let mut help = DomElement::new("span");
            help.set_attr("class", HELP_BLOCK);
            help.set_inner_html(self.help.as_str());
            group.append(help);
        }

        group
    }
}
