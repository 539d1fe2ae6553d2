//! Port interfaces for the application layer
//!
//! Ports define the contract between the use cases in `sc-app` and the
//! adapters in `sc-infra` (HTTP, files) or the front-end (event sinks).

mod clock;
pub mod portal_api;
pub mod session_store;
pub mod wizard_draft;
pub mod wizard_event;

#[cfg(test)]
pub(crate) mod tests;

pub use clock::*;
pub use portal_api::PortalApiPort;
pub use session_store::SessionStorePort;
pub use wizard_draft::WizardDraftPort;
pub use wizard_event::WizardEventPort;
