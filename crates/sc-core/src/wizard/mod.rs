//! Wizard domain module.
//!
//! A wizard is a linear, step-gated data-collection flow. This module defines
//! the data-only step definitions and the pure state machine that drives
//! them; side effects (submission, drafts, events) are carried out by the
//! application layer from the actions the machine returns.

mod definition;
mod draft;
mod error;
mod payload;
mod snapshot;
mod state;
pub mod state_machine;

pub use definition::{DefinitionError, StepDefinition, WizardDefinition};
pub use draft::WizardDraft;
pub use error::WizardError;
pub use payload::WizardPayload;
pub use snapshot::WizardSnapshot;
pub use state::{FormError, WizardPhase, WizardState};
pub use state_machine::{Transition, WizardAction, WizardEvent, WizardStateMachine};
