//! Concrete wizard flows of the investor portal.
//!
//! Flows are data only: each function assembles a [`WizardDefinition`]
//! that the generic controller drives.
//!
//! [`WizardDefinition`]: crate::wizard::WizardDefinition

pub mod investment;
pub mod onboarding;

pub use investment::investment_flow;
pub use onboarding::onboarding_flow;
