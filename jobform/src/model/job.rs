//! Job details

use serde::Deserialize;
use serde::Serialize;

use super::Value;

/// The job being registered. Every field is optional; absent fields leave
/// the matching input without a value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Job {
    #[serde(rename = "type", default)]
    pub kind: Option<Value>,
    #[serde(default)]
    pub status: Option<Value>,
    #[serde(default)]
    pub progress: Option<Value>,
    #[serde(default)]
    pub owner: Option<Value>,
    #[serde(default)]
    pub namespace: Option<Value>,
    #[serde(default)]
    pub name: Option<Value>,
    #[serde(default)]
    pub description: Option<Value>,
}

impl Job {
    /// Look up a field by its form name.
    pub fn field(&self, name: &str) -> Option<&Value> {
        let value = match name {
            "type" => &self.kind,
            "status" => &self.status,
            "progress" => &self.progress,
            "owner" => &self.owner,
            "namespace" => &self.namespace,
            "name" => &self.name,
            "description" => &self.description,
            _ => return None,
        };
        value.as_ref().filter(|v| !v.is_null())
    }
}
