use serde::Serialize;

use crate::form::{parse_number, FieldValue, FieldValues};

/// Final form contents handed to a submitter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WizardPayload {
    flow: String,
    values: FieldValues,
}

impl WizardPayload {
    pub fn new(flow: impl Into<String>, values: FieldValues) -> Self {
        Self {
            flow: flow.into(),
            values,
        }
    }

    pub fn flow(&self) -> &str {
        &self.flow
    }

    pub fn values(&self) -> &FieldValues {
        &self.values
    }

    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.values.get(name)
    }

    /// Trimmed text of a field.
    pub fn text(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(FieldValue::as_text).map(str::trim)
    }

    /// Checkbox state; unset counts as unchecked.
    pub fn flag(&self, name: &str) -> bool {
        self.get(name)
            .and_then(FieldValue::as_flag)
            .unwrap_or(false)
    }

    pub fn number(&self, name: &str) -> Option<f64> {
        self.text(name).and_then(parse_number)
    }

    pub fn to_json(&self) -> serde_json::Value {
        let object = self
            .values
            .iter()
            .map(|(name, value)| (name.clone(), value.to_json()))
            .collect();
        serde_json::Value::Object(object)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn typed_accessors_read_raw_values() {
        let mut values = FieldValues::new();
        values.insert("amount".into(), FieldValue::text(" 75000 "));
        values.insert("agreement".into(), FieldValue::Flag(true));
        let payload = WizardPayload::new("investment", values);

        assert_eq!(payload.number("amount"), Some(75000.0));
        assert_eq!(payload.text("amount"), Some("75000"));
        assert!(payload.flag("agreement"));
        assert!(!payload.flag("missing"));
        assert_eq!(
            payload.to_json(),
            serde_json::json!({ "amount": " 75000 ", "agreement": true })
        );
    }
}
