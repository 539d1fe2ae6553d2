//! Infrastructure adapters for the Surplus Claims portal: the HTTP client
//! for the portal API and the JSON file stores.

pub mod draft;
pub mod http;
pub mod session;
pub mod time;

pub use draft::FileWizardDraftRepository;
pub use http::{PortalClientConfig, ReqwestPortalApi};
pub use session::{FileSessionStore, InMemorySessionStore};
pub use time::SystemClock;
