use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::rule::parse_number;
use super::{FieldError, FieldValue, FieldValues, Rule};

/// Input kind of a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    Text,
    Email,
    Tel,
    Password,
    Number,
    Date,
    Select,
    Checkbox,
    Textarea,
}

impl FieldKind {
    /// Whether `value` has the shape this kind stores.
    pub fn accepts(self, value: &FieldValue) -> bool {
        match self {
            FieldKind::Checkbox => matches!(value, FieldValue::Flag(_)),
            _ => matches!(value, FieldValue::Text(_)),
        }
    }

    /// Secret inputs are masked when echoed back.
    pub fn is_secret(self) -> bool {
        matches!(self, FieldKind::Password)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            FieldKind::Text => "text",
            FieldKind::Email => "email",
            FieldKind::Tel => "tel",
            FieldKind::Password => "password",
            FieldKind::Number => "number",
            FieldKind::Date => "date",
            FieldKind::Select => "select",
            FieldKind::Checkbox => "checkbox",
            FieldKind::Textarea => "textarea",
        }
    }
}

/// When a field must carry a non-blank value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Requirement {
    Always,
    Optional,
    /// Required only while `field` holds the text `equals`.
    When { field: String, equals: String },
}

impl Requirement {
    pub fn is_required(&self, values: &FieldValues) -> bool {
        match self {
            Requirement::Always => true,
            Requirement::Optional => false,
            Requirement::When { field, equals } => values
                .get(field)
                .and_then(FieldValue::as_text)
                .is_some_and(|text| text == equals),
        }
    }
}

/// Declarative description of a single input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldSchema {
    pub name: String,
    pub label: String,
    pub kind: FieldKind,
    pub requirement: Requirement,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub rules: Vec<Rule>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<FieldValue>,
    /// Kept out of drafts and masked when echoed back.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub sensitive: bool,
}

impl FieldSchema {
    pub fn new(name: impl Into<String>, label: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            name: name.into(),
            label: label.into(),
            kind,
            requirement: Requirement::Optional,
            options: Vec::new(),
            rules: Vec::new(),
            default: None,
            sensitive: false,
        }
    }

    pub fn text(name: impl Into<String>, label: impl Into<String>) -> Self {
        Self::new(name, label, FieldKind::Text)
    }

    pub fn email(name: impl Into<String>, label: impl Into<String>) -> Self {
        Self::new(name, label, FieldKind::Email)
    }

    pub fn tel(name: impl Into<String>, label: impl Into<String>) -> Self {
        Self::new(name, label, FieldKind::Tel)
    }

    pub fn password(name: impl Into<String>, label: impl Into<String>) -> Self {
        Self::new(name, label, FieldKind::Password)
    }

    pub fn number(name: impl Into<String>, label: impl Into<String>) -> Self {
        Self::new(name, label, FieldKind::Number)
    }

    pub fn date(name: impl Into<String>, label: impl Into<String>) -> Self {
        Self::new(name, label, FieldKind::Date)
    }

    pub fn checkbox(name: impl Into<String>, label: impl Into<String>) -> Self {
        Self::new(name, label, FieldKind::Checkbox)
    }

    pub fn textarea(name: impl Into<String>, label: impl Into<String>) -> Self {
        Self::new(name, label, FieldKind::Textarea)
    }

    pub fn select<I, S>(name: impl Into<String>, label: impl Into<String>, options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut schema = Self::new(name, label, FieldKind::Select);
        schema.options = options.into_iter().map(Into::into).collect();
        schema
    }

    pub fn required(mut self) -> Self {
        self.requirement = Requirement::Always;
        self
    }

    pub fn required_when(mut self, field: impl Into<String>, equals: impl Into<String>) -> Self {
        self.requirement = Requirement::When {
            field: field.into(),
            equals: equals.into(),
        };
        self
    }

    pub fn rule(mut self, rule: Rule) -> Self {
        self.rules.push(rule);
        self
    }

    pub fn min_length(self, min: usize) -> Self {
        self.rule(Rule::MinLength { min })
    }

    pub fn range(self, min: Option<f64>, max: Option<f64>) -> Self {
        self.rule(Rule::Range { min, max })
    }

    pub fn matches(self, field: impl Into<String>, label: impl Into<String>) -> Self {
        self.rule(Rule::Matches {
            field: field.into(),
            label: label.into(),
        })
    }

    pub fn default_value(mut self, value: impl Into<FieldValue>) -> Self {
        self.default = Some(value.into());
        self
    }

    pub fn sensitive(mut self) -> Self {
        self.sensitive = true;
        self
    }

    /// Secret kinds are always sensitive.
    pub fn is_sensitive(&self) -> bool {
        self.sensitive || self.kind.is_secret()
    }

    pub fn is_required(&self, values: &FieldValues) -> bool {
        self.requirement.is_required(values)
    }

    /// Validates this field against the effective form values.
    ///
    /// A blank value fails only when the field is required. A non-blank value
    /// is checked against its kind first, then against each rule in order;
    /// the first failure wins.
    pub fn validate(&self, values: &FieldValues) -> Result<(), FieldError> {
        let value = match values.get(&self.name) {
            Some(value) if !value.is_blank() => value,
            _ if self.is_required(values) => {
                return Err(FieldError::Required {
                    label: self.label.clone(),
                })
            }
            _ => return Ok(()),
        };

        self.check_kind(value)?;
        for rule in &self.rules {
            rule.check(&self.label, value, values)?;
        }
        Ok(())
    }

    fn check_kind(&self, value: &FieldValue) -> Result<(), FieldError> {
        let text = value.as_text().map(str::trim).unwrap_or_default();
        match self.kind {
            FieldKind::Email if !text.contains('@') => Err(FieldError::InvalidEmail {
                label: self.label.clone(),
            }),
            FieldKind::Number if parse_number(text).is_none() => Err(FieldError::NotANumber {
                label: self.label.clone(),
            }),
            FieldKind::Date if NaiveDate::parse_from_str(text, "%Y-%m-%d").is_err() => {
                Err(FieldError::InvalidDate {
                    label: self.label.clone(),
                })
            }
            FieldKind::Select if !self.options.iter().any(|option| option == text) => {
                Err(FieldError::UnknownOption {
                    label: self.label.clone(),
                })
            }
            _ => Ok(()),
        }
    }
}
