//! Session persistence port

use async_trait::async_trait;

use crate::session::UserSession;

#[async_trait]
pub trait SessionStorePort: Send + Sync {
    /// Persisted session, `None` when signed out.
    async fn load(&self) -> anyhow::Result<Option<UserSession>>;

    async fn save(&self, session: &UserSession) -> anyhow::Result<()>;

    /// Forget the session. Clearing an empty store is not an error.
    async fn clear(&self) -> anyhow::Result<()>;
}
