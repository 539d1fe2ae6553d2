use serde::{Deserialize, Serialize};

use crate::form::FieldValues;

/// In-progress wizard entries persisted between sessions.
///
/// Secret fields are stripped before a draft is built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WizardDraft {
    pub flow: String,
    pub step: usize,
    pub values: FieldValues,
    pub saved_at_ms: i64,
}
