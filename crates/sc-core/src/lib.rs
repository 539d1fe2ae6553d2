//! # sc-core
//!
//! Core domain models and business logic for the Surplus Claims portal.
//!
//! This crate contains pure business logic without any infrastructure dependencies:
//! field schemas, the linear wizard state machine, section routing, the
//! concrete onboarding / investment flows and the ports implemented by
//! `sc-infra`.

pub mod config;
pub mod flows;
pub mod form;
pub mod ids;
pub mod navigation;
pub mod ports;
pub mod portal;
pub mod session;
pub mod wizard;

// Re-export commonly used types at the crate root
pub use config::AppConfig;
pub use form::{FieldError, FieldKind, FieldSchema, FieldValue, FieldValues, Requirement, Rule};
pub use ids::{PackageId, UserId};
pub use navigation::{AdminSection, InvestorSection, Page, SectionRouter, SectionSet};
pub use session::UserSession;
pub use wizard::{
    StepDefinition, WizardDefinition, WizardError, WizardEvent, WizardPayload, WizardPhase,
    WizardSnapshot, WizardState, WizardStateMachine,
};
