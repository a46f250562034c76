//! Job template choices

use serde::Deserialize;
use serde::Serialize;

use super::Value;

/// A job template offered in the template select box.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobTemplate {
    pub id: Value,
    pub name: String,
    /// Whether this template is the current choice.
    #[serde(rename = "isSelected", alias = "is_selected", default)]
    pub is_selected: bool,
}

impl JobTemplate {
    pub fn new(id: impl Into<Value>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            is_selected: false,
        }
    }

    pub fn selected(mut self) -> Self {
        self.is_selected = true;
        self
    }
}
