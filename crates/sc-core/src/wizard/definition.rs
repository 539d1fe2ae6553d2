use std::collections::HashSet;

use serde::Serialize;

use crate::form::{FieldErrors, FieldSchema, FieldValues, Requirement};

use super::WizardPayload;

/// Errors raised while assembling a wizard definition.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DefinitionError {
    #[error("wizard `{0}` has no steps")]
    Empty(String),
    #[error("step indices must be contiguous from 1: expected {expected}, found {found}")]
    NonContiguousStep { expected: usize, found: usize },
    #[error("field `{0}` is declared more than once")]
    DuplicateField(String),
    #[error("field `{field}` references unknown field `{references}`")]
    UnknownReference { field: String, references: String },
    #[error("select field `{0}` declares no options")]
    MissingOptions(String),
}

/// Ordered group of fields shown together.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StepDefinition {
    pub index: usize,
    pub title: String,
    pub fields: Vec<FieldSchema>,
}

impl StepDefinition {
    pub fn new(index: usize, title: impl Into<String>, fields: Vec<FieldSchema>) -> Self {
        Self {
            index,
            title: title.into(),
            fields,
        }
    }

    pub fn field(&self, name: &str) -> Option<&FieldSchema> {
        self.fields.iter().find(|field| field.name == name)
    }

    /// Validates every field against `values` (already merged with defaults).
    pub fn validate(&self, values: &FieldValues) -> FieldErrors {
        let mut errors = FieldErrors::new();
        for field in &self.fields {
            if let Err(error) = field.validate(values) {
                errors.insert(field.name.clone(), error);
            }
        }
        errors
    }

    /// True iff no field of this step fails validation.
    pub fn is_complete(&self, values: &FieldValues) -> bool {
        self.fields.iter().all(|field| field.validate(values).is_ok())
    }
}

/// A named, ordered list of steps.
///
/// Field names share one namespace across all steps because values
/// accumulate into a single map.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WizardDefinition {
    name: String,
    steps: Vec<StepDefinition>,
}

impl WizardDefinition {
    pub fn new(
        name: impl Into<String>,
        steps: Vec<StepDefinition>,
    ) -> Result<Self, DefinitionError> {
        let name = name.into();
        if steps.is_empty() {
            return Err(DefinitionError::Empty(name));
        }

        let mut seen = HashSet::new();
        for (position, step) in steps.iter().enumerate() {
            if step.index != position + 1 {
                return Err(DefinitionError::NonContiguousStep {
                    expected: position + 1,
                    found: step.index,
                });
            }
            for field in &step.fields {
                if !seen.insert(field.name.as_str()) {
                    return Err(DefinitionError::DuplicateField(field.name.clone()));
                }
                if field.kind == crate::form::FieldKind::Select && field.options.is_empty() {
                    return Err(DefinitionError::MissingOptions(field.name.clone()));
                }
            }
        }

        for field in steps.iter().flat_map(|step| step.fields.iter()) {
            let condition = match &field.requirement {
                Requirement::When { field, .. } => Some(field.as_str()),
                _ => None,
            };
            let references = field
                .rules
                .iter()
                .filter_map(|rule| rule.referenced_field())
                .chain(condition);
            for reference in references {
                if !seen.contains(reference) {
                    return Err(DefinitionError::UnknownReference {
                        field: field.name.clone(),
                        references: reference.to_string(),
                    });
                }
            }
        }

        Ok(Self { name, steps })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn step_count(&self) -> usize {
        self.steps.len()
    }

    pub fn steps(&self) -> &[StepDefinition] {
        &self.steps
    }

    /// Step by 1-based index.
    pub fn step(&self, index: usize) -> Option<&StepDefinition> {
        index.checked_sub(1).and_then(|position| self.steps.get(position))
    }

    pub fn fields(&self) -> impl Iterator<Item = &FieldSchema> {
        self.steps.iter().flat_map(|step| step.fields.iter())
    }

    pub fn field(&self, name: &str) -> Option<&FieldSchema> {
        self.fields().find(|field| field.name == name)
    }

    /// `values` with each unset field replaced by its declared default.
    pub fn effective_values(&self, values: &FieldValues) -> FieldValues {
        let mut effective = values.clone();
        for field in self.fields() {
            if let Some(default) = &field.default {
                effective
                    .entry(field.name.clone())
                    .or_insert_with(|| default.clone());
            }
        }
        effective
    }

    /// Validation errors of step `index`, empty for an unknown index.
    pub fn validate_step(&self, index: usize, values: &FieldValues) -> FieldErrors {
        let effective = self.effective_values(values);
        self.step(index)
            .map(|step| step.validate(&effective))
            .unwrap_or_default()
    }

    pub fn is_step_complete(&self, index: usize, values: &FieldValues) -> bool {
        let effective = self.effective_values(values);
        self.step(index)
            .is_some_and(|step| step.is_complete(&effective))
    }

    /// Submission payload: every declared field that has a value or a default.
    pub fn payload(&self, values: &FieldValues) -> WizardPayload {
        let effective = self.effective_values(values);
        let collected = self
            .fields()
            .filter_map(|field| {
                effective
                    .get(&field.name)
                    .map(|value| (field.name.clone(), value.clone()))
            })
            .collect();
        WizardPayload::new(self.name.clone(), collected)
    }

    /// Values safe to persist in a draft: secrets are dropped.
    pub fn draft_values(&self, values: &FieldValues) -> FieldValues {
        values
            .iter()
            .filter(|(name, _)| {
                self.field(name)
                    .is_some_and(|field| !field.is_sensitive())
            })
            .map(|(name, value)| (name.clone(), value.clone()))
            .collect()
    }
}
