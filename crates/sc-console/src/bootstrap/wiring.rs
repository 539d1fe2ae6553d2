//! # Dependency injection
//!
//! The only place that depends on `sc-infra` and `sc-app` at once. It
//! assembles adapters behind their ports and makes no decisions beyond
//! what [`ResolvedConfig`] already says.

use std::sync::Arc;

use sc_app::{SessionService, WizardDeps};
use sc_core::ports::{ClockPort, PortalApiPort, SessionStorePort, WizardDraftPort};
use sc_infra::{
    FileSessionStore, FileWizardDraftRepository, PortalClientConfig, ReqwestPortalApi, SystemClock,
};

use crate::adapters::TracingWizardEventPort;
use crate::bootstrap::config::ResolvedConfig;

/// Result type for wiring operations
pub type WiringResult<T> = Result<T, WiringError>;

/// Errors during dependency injection
#[derive(Debug, thiserror::Error)]
pub enum WiringError {
    #[error("HTTP client initialization failed: {0}")]
    HttpClientInit(String),
}

/// Everything the commands need, behind ports.
#[derive(Clone)]
pub struct AppDeps {
    pub api: Arc<dyn PortalApiPort>,
    pub session: Arc<SessionService>,
    pub wizard: WizardDeps,
}

fn create_portal_api(config: &ResolvedConfig) -> WiringResult<Arc<dyn PortalApiPort>> {
    let api = ReqwestPortalApi::new(PortalClientConfig {
        base_url: config.api_base_url.clone(),
        timeout: config.api_timeout,
    })
    .map_err(|e| WiringError::HttpClientInit(format!("{e:#}")))?;
    Ok(Arc::new(api))
}

/// Builds the app dependencies from a resolved config.
///
/// Draft storage is wired only when `persist_drafts` is on. The session is
/// not loaded here; call [`SessionService::boot`] before use.
pub fn wire_dependencies(config: &ResolvedConfig) -> WiringResult<AppDeps> {
    let api = create_portal_api(config)?;

    let session_store: Arc<dyn SessionStorePort> =
        Arc::new(FileSessionStore::with_defaults(config.data_dir.clone()));
    let session = Arc::new(SessionService::new(session_store));

    let drafts = config.persist_drafts.then(|| {
        Arc::new(FileWizardDraftRepository::with_defaults(config.data_dir.clone()))
            as Arc<dyn WizardDraftPort>
    });
    let clock: Arc<dyn ClockPort> = Arc::new(SystemClock);

    let wizard = WizardDeps {
        event_port: Arc::new(TracingWizardEventPort),
        clock,
        drafts,
        // One second beyond the HTTP timeout so the client reports its own timeout first.
        submit_timeout: config.api_timeout + std::time::Duration::from_secs(1),
    };

    Ok(AppDeps {
        api,
        session,
        wizard,
    })
}
