//! HTTP adapters.

mod portal_client;

pub use portal_client::{PortalClientConfig, ReqwestPortalApi};
