//! Wizard dependencies.
//!
//! Parameter grouping for building wizard controllers, not a builder:
//! every field is supplied by the caller.

use std::sync::Arc;
use std::time::Duration;

use sc_core::ports::{ClockPort, WizardDraftPort, WizardEventPort};

/// Dependencies every wizard controller needs besides its flow and submitter.
#[derive(Clone)]
pub struct WizardDeps {
    pub event_port: Arc<dyn WizardEventPort>,
    pub clock: Arc<dyn ClockPort>,
    /// Draft store; `None` disables draft persistence.
    pub drafts: Option<Arc<dyn WizardDraftPort>>,
    /// Upper bound on a single submission.
    pub submit_timeout: Duration,
}
