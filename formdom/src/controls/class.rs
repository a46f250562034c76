use crate::element::{AttrValue, Attributes};

/// Return a copy of `attributes` whose `class` includes `class`.
///
/// A missing `class` attribute is set to `class`. An existing one is extended
/// with `" " + class` unless it already contains `class` as a substring, so a
/// marker like `no-form-control` suppresses `form-control`.
pub fn merge_class(attributes: &Attributes, class: &str) -> Attributes {
    let mut merged = attributes.clone();
    match merged.get_mut("class") {
        None => {
            merged.insert("class".to_string(), AttrValue::from(class));
        }
        Some(existing) => {
            let current = existing.to_string();
            if !current.contains(class) {
                let current = current.trim();
                *existing = if current.is_empty() {
                    AttrValue::from(class)
                } else {
                    AttrValue::Text(format!("{current} {class}"))
                };
            }
        }
    }
    merged
}
