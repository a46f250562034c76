//! Job parameters

use serde::Deserialize;
use serde::Serialize;

use super::Value;

/// Type name of parameters rendered as a checkbox.
pub const BOOLEAN_TYPE: &str = "Boolean";

/// One parameter row of the job.
///
/// `type` and `value` hold the raw stored values, `type-str` and `value-str`
/// the human-readable ones shown to the user.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct JobParameter {
    #[serde(default)]
    pub id: Option<Value>,
    #[serde(rename = "type", default)]
    pub kind: Option<Value>,
    #[serde(default)]
    pub value: Option<Value>,
    #[serde(default)]
    pub name: Option<Value>,
    #[serde(rename = "type-str", default)]
    pub type_str: Option<Value>,
    #[serde(rename = "value-str", default)]
    pub value_str: Option<Value>,
    #[serde(default)]
    pub description: Option<Value>,
    /// Validation errors reported for the value.
    #[serde(default)]
    pub errors: Vec<String>,
}

impl JobParameter {
    /// Look up a field by its form name.
    pub fn field(&self, name: &str) -> Option<&Value> {
        let value = match name {
            "id" => &self.id,
            "type" => &self.kind,
            "value" => &self.value,
            "name" => &self.name,
            "type-str" => &self.type_str,
            "value-str" => &self.value_str,
            "description" => &self.description,
            _ => return None,
        };
        value.as_ref().filter(|v| !v.is_null())
    }

    pub fn is_boolean(&self) -> bool {
        self.type_str.as_ref().and_then(Value::as_str) == Some(BOOLEAN_TYPE)
    }

    /// Whether the stored value reads as `true`, ignoring case.
    pub fn is_checked(&self) -> bool {
        self.value
            .as_ref()
            .is_some_and(|v| v.to_string().eq_ignore_ascii_case("true"))
    }

    /// Errors joined the way the help block shows them.
    pub fn error_message(&self) -> String {
        self.errors.join("\r\n")
    }
}
