//! Wizard use cases: the generic controller, flow submitters and the
//! entry points that start each flow.

mod context;
mod controller;
mod investment;
mod onboarding;
mod submitter;

pub use context::WizardContext;
pub use controller::WizardController;
pub use investment::{InvestmentSubmitter, StartInvestment};
pub use onboarding::{OnboardingSubmitter, StartOnboarding};
pub use submitter::{SubmitError, WizardSubmitter};

use sc_core::portal::ApiError;
use sc_core::wizard::DefinitionError;
use sc_core::PackageId;

/// Why a flow could not be started.
#[derive(Debug, thiserror::Error)]
pub enum StartFlowError {
    #[error("sign in to continue")]
    NotSignedIn,
    #[error("investment package {0} not found")]
    UnknownPackage(PackageId),
    #[error("failed to load investment packages: {0}")]
    Api(#[from] ApiError),
    #[error("invalid wizard definition: {0}")]
    Definition(#[from] DefinitionError),
}
