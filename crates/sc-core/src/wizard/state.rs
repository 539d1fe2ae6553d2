use serde::{Deserialize, Serialize};

use crate::form::{FieldErrors, FieldValues};

/// Where the wizard currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "phase", content = "step", rename_all = "snake_case")]
pub enum WizardPhase {
    /// Editing the 1-based step.
    Step(usize),
    /// Final payload handed to the submitter, awaiting its answer.
    Submitting,
    /// Submission accepted. Terminal.
    Completed,
}

/// Form-level error shown as a banner rather than next to a field.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FormError {
    /// The backend refused the submission and said why.
    #[error("{message}")]
    Rejected { message: String },
    /// The request never completed.
    #[error("Network error: {message}. Please try again.")]
    Network { message: String },
    #[error("The request timed out. Please try again.")]
    TimedOut,
}

/// Mutable state of one wizard run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WizardState {
    pub phase: WizardPhase,
    pub values: FieldValues,
    pub errors: FieldErrors,
    pub form_error: Option<FormError>,
}

impl WizardState {
    /// Fresh run: step 1, nothing entered.
    pub fn new() -> Self {
        Self {
            phase: WizardPhase::Step(1),
            values: FieldValues::new(),
            errors: FieldErrors::new(),
            form_error: None,
        }
    }

    /// Resumes at `step` (clamped to `1..=step_count`) with `values`.
    pub fn resume(step: usize, step_count: usize, values: FieldValues) -> Self {
        Self {
            phase: WizardPhase::Step(step.clamp(1, step_count.max(1))),
            values,
            ..Self::new()
        }
    }

    pub fn current_step(&self) -> Option<usize> {
        match self.phase {
            WizardPhase::Step(step) => Some(step),
            _ => None,
        }
    }

    pub fn is_completed(&self) -> bool {
        self.phase == WizardPhase::Completed
    }

    pub fn is_submitting(&self) -> bool {
        self.phase == WizardPhase::Submitting
    }
}

impl Default for WizardState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resume_clamps_step_into_range() {
        assert_eq!(
            WizardState::resume(9, 3, FieldValues::new()).phase,
            WizardPhase::Step(3)
        );
        assert_eq!(
            WizardState::resume(0, 3, FieldValues::new()).phase,
            WizardPhase::Step(1)
        );
    }

    #[test]
    fn form_error_messages() {
        assert_eq!(
            FormError::Rejected {
                message: "Insufficient funds".into()
            }
            .to_string(),
            "Insufficient funds"
        );
        assert_eq!(
            FormError::TimedOut.to_string(),
            "The request timed out. Please try again."
        );
    }
}
