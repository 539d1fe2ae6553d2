//! Investor session lifecycle.

use std::sync::Arc;

use anyhow::Context;
use tokio::sync::RwLock;
use tracing::info;

use sc_core::ports::SessionStorePort;
use sc_core::UserSession;

/// Holds the signed-in investor and mirrors it to the session store.
pub struct SessionService {
    store: Arc<dyn SessionStorePort>,
    current: RwLock<Option<UserSession>>,
}

impl SessionService {
    pub fn new(store: Arc<dyn SessionStorePort>) -> Self {
        Self {
            store,
            current: RwLock::new(None),
        }
    }

    /// Loads the persisted session, if any, and makes it current.
    pub async fn boot(&self) -> anyhow::Result<Option<UserSession>> {
        let loaded = self
            .store
            .load()
            .await
            .context("failed to load persisted session")?;
        if let Some(session) = &loaded {
            info!(user_id = %session.id, "restored session");
        }
        *self.current.write().await = loaded.clone();
        Ok(loaded)
    }

    /// Persists `session` and makes it current.
    pub async fn sign_in(&self, session: UserSession) -> anyhow::Result<UserSession> {
        self.store
            .save(&session)
            .await
            .context("failed to persist session")?;
        info!(user_id = %session.id, "signed in");
        *self.current.write().await = Some(session.clone());
        Ok(session)
    }

    /// Local sign-in; credentials are not checked.
    pub async fn sign_in_local(&self, email: Option<&str>) -> anyhow::Result<UserSession> {
        self.sign_in(UserSession::local(email)).await
    }

    pub async fn demo_login(&self) -> anyhow::Result<UserSession> {
        self.sign_in(UserSession::demo()).await
    }

    pub async fn logout(&self) -> anyhow::Result<()> {
        self.store
            .clear()
            .await
            .context("failed to clear persisted session")?;
        if let Some(session) = self.current.write().await.take() {
            info!(user_id = %session.id, "signed out");
        }
        Ok(())
    }

    pub async fn current(&self) -> Option<UserSession> {
        self.current.read().await.clone()
    }

    pub async fn is_signed_in(&self) -> bool {
        self.current.read().await.is_some()
    }
}
