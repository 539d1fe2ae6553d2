//! Subcommand implementations. Each one writes to the given output so
//! tests can drive them with in-memory buffers.

pub mod admin;
pub mod dashboard;
pub mod flows;
pub mod format;
pub mod session;
pub mod wizard;

pub use wizard::{run_wizard, WizardOutcome};
