use crate::form::FieldErrors;

use super::FormError;

/// Why a wizard operation did not take effect.
///
/// `Validation` never leaves the controller as a network request;
/// `Rejected`, `Network` and `TimedOut` come back from submission and leave
/// the user on the final step with their data intact.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WizardError {
    #[error("{} field(s) need attention", .0.len())]
    Validation(FieldErrors),
    #[error("already on the first step")]
    AtFirstStep,
    #[error("already on the final step; submit instead")]
    AtFinalStep,
    #[error("submit is only available on the final step")]
    NotAtFinalStep,
    #[error("a submission is already in progress")]
    SubmissionInProgress,
    #[error("the wizard has already been completed")]
    AlreadyCompleted,
    #[error("no submission is pending")]
    NotSubmitting,
    #[error("field `{0}` is not part of the current step")]
    UnknownField(String),
    #[error("field `{field}` expects a {kind} value")]
    KindMismatch { field: String, kind: &'static str },
    #[error("{0}")]
    Rejected(String),
    #[error("network failure: {0}")]
    Network(String),
    #[error("the request timed out")]
    TimedOut,
}

impl WizardError {
    /// Field errors carried by a validation failure.
    pub fn field_errors(&self) -> Option<&FieldErrors> {
        match self {
            WizardError::Validation(errors) => Some(errors),
            _ => None,
        }
    }
}

impl From<FormError> for WizardError {
    fn from(error: FormError) -> Self {
        match error {
            FormError::Rejected { message } => WizardError::Rejected(message),
            FormError::Network { message } => WizardError::Network(message),
            FormError::TimedOut => WizardError::TimedOut,
        }
    }
}
