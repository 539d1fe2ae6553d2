use async_trait::async_trait;
use sc_core::ports::SessionStorePort;
use sc_core::UserSession;
use tokio::sync::Mutex;

/// Session store that lives only as long as the process.
#[derive(Default)]
pub struct InMemorySessionStore {
    session: Mutex<Option<UserSession>>,
}

impl InMemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_session(session: UserSession) -> Self {
        Self {
            session: Mutex::new(Some(session)),
        }
    }
}

#[async_trait]
impl SessionStorePort for InMemorySessionStore {
    async fn load(&self) -> anyhow::Result<Option<UserSession>> {
        Ok(self.session.lock().await.clone())
    }

    async fn save(&self, session: &UserSession) -> anyhow::Result<()> {
        *self.session.lock().await = Some(session.clone());
        Ok(())
    }

    async fn clear(&self) -> anyhow::Result<()> {
        *self.session.lock().await = None;
        Ok(())
    }
}
