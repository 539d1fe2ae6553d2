use serde::Serialize;

use crate::form::{FieldErrors, FieldValues};

use super::{FormError, WizardDefinition, WizardPhase, WizardState};

/// Read-only view of a wizard run for rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WizardSnapshot {
    pub flow: String,
    pub phase: WizardPhase,
    /// Step on screen; the final step while submitting or completed.
    pub step: usize,
    pub step_count: usize,
    pub step_title: String,
    pub values: FieldValues,
    pub errors: FieldErrors,
    pub form_error: Option<FormError>,
}

impl WizardSnapshot {
    pub fn capture(definition: &WizardDefinition, state: &WizardState) -> Self {
        let step = state.current_step().unwrap_or(definition.step_count());
        Self {
            flow: definition.name().to_string(),
            phase: state.phase,
            step,
            step_count: definition.step_count(),
            step_title: definition
                .step(step)
                .map(|step| step.title.clone())
                .unwrap_or_default(),
            values: state.values.clone(),
            errors: state.errors.clone(),
            form_error: state.form_error.clone(),
        }
    }

    pub fn is_final_step(&self) -> bool {
        self.step == self.step_count
    }

    pub fn is_completed(&self) -> bool {
        self.phase == WizardPhase::Completed
    }
}
