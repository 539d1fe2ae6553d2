use serde::{Deserialize, Serialize};

/// Validation failure of a single field.
///
/// The display text is the message shown next to the input; it only depends
/// on the schema, so the same invalid input always yields the same text.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error, Serialize, Deserialize)]
#[serde(tag = "code", rename_all = "snake_case")]
pub enum FieldError {
    #[error("{label} is required")]
    Required { label: String },
    #[error("{label} must be a valid email address")]
    InvalidEmail { label: String },
    #[error("{label} must be at least {min} characters")]
    TooShort { label: String, min: usize },
    #[error("{label} must be a number")]
    NotANumber { label: String },
    #[error("{label} must be at least {min}")]
    BelowMinimum { label: String, min: String },
    #[error("{label} must be at most {max}")]
    AboveMaximum { label: String, max: String },
    #[error("{label} does not match {other}")]
    Mismatch { label: String, other: String },
    #[error("{label} must be one of the listed options")]
    UnknownOption { label: String },
    #[error("{label} must be a valid date (YYYY-MM-DD)")]
    InvalidDate { label: String },
}

/// Field errors in schema order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldErrors(Vec<(String, FieldError)>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the error for `name`, keeping the position of an existing entry.
    pub fn insert(&mut self, name: impl Into<String>, error: FieldError) {
        let name = name.into();
        match self.0.iter_mut().find(|(field, _)| *field == name) {
            Some(entry) => entry.1 = error,
            None => self.0.push((name, error)),
        }
    }

    /// Removes the error for `name`. Returns whether one was present.
    pub fn remove(&mut self, name: &str) -> bool {
        let before = self.0.len();
        self.0.retain(|(field, _)| field != name);
        before != self.0.len()
    }

    pub fn get(&self, name: &str) -> Option<&FieldError> {
        self.0
            .iter()
            .find(|(field, _)| field == name)
            .map(|(_, error)| error)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Display message for `name`.
    pub fn message(&self, name: &str) -> Option<String> {
        self.get(name).map(ToString::to_string)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldError)> {
        self.0.iter().map(|(field, error)| (field.as_str(), error))
    }

    pub fn field_names(&self) -> Vec<&str> {
        self.0.iter().map(|(field, _)| field.as_str()).collect()
    }
}
