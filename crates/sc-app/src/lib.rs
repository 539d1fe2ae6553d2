//! Surplus Claims portal application layer
//!
//! Use cases that drive the core state machines and talk to the outside
//! world through the ports declared in `sc-core`.

pub mod deps;
pub mod usecases;

pub use deps::WizardDeps;
pub use usecases::{
    LoadAdminDashboard, LoadInvestorDashboard, SessionService, StartInvestment, StartOnboarding,
    WizardController,
};
