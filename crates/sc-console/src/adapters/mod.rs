//! Console-side implementations of core ports.

mod tracing_wizard_events;

pub use tracing_wizard_events::TracingWizardEventPort;
