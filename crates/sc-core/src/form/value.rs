use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Accumulated form values keyed by field name.
pub type FieldValues = BTreeMap<String, FieldValue>;

/// A single input value.
///
/// Checkboxes carry a flag; every other kind carries the raw text the user
/// typed or picked. Numbers and dates stay textual until validation parses them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Flag(bool),
    Text(String),
}

impl FieldValue {
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text.as_str()),
            Self::Flag(_) => None,
        }
    }

    pub fn as_flag(&self) -> Option<bool> {
        match self {
            Self::Flag(flag) => Some(*flag),
            Self::Text(_) => None,
        }
    }

    /// An empty (whitespace-only) text or an unchecked box.
    pub fn is_blank(&self) -> bool {
        match self {
            Self::Text(text) => text.trim().is_empty(),
            Self::Flag(flag) => !flag,
        }
    }

    pub fn to_json(&self) -> serde_json::Value {
        match self {
            Self::Text(text) => serde_json::Value::String(text.clone()),
            Self::Flag(flag) => serde_json::Value::Bool(*flag),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        Self::Flag(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whitespace_text_is_blank() {
        assert!(FieldValue::text("   ").is_blank());
        assert!(!FieldValue::text(" a ").is_blank());
    }

    #[test]
    fn unchecked_box_is_blank() {
        assert!(FieldValue::from(false).is_blank());
        assert!(!FieldValue::from(true).is_blank());
    }

    #[test]
    fn untagged_json_keeps_kind() {
        let values: FieldValues =
            serde_json::from_str(r#"{"email":"a@b.c","terms":true}"#).unwrap();
        assert_eq!(values["email"], FieldValue::text("a@b.c"));
        assert_eq!(values["terms"], FieldValue::Flag(true));
    }
}
