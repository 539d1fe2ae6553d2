//! Business logic use cases

pub mod dashboard;
pub mod session;
pub mod wizard;

pub use dashboard::{LoadAdminDashboard, LoadInvestorDashboard};
pub use session::SessionService;
pub use wizard::{
    InvestmentSubmitter, OnboardingSubmitter, StartFlowError, StartInvestment, StartOnboarding,
    SubmitError, WizardController, WizardSubmitter,
};
