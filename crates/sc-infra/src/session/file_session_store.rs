//! File-based session store
//!
//! Persists the signed-in investor as `session.json` in the data directory.

use std::path::PathBuf;

use async_trait::async_trait;
use sc_core::ports::SessionStorePort;
use sc_core::UserSession;
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tracing::debug;

pub const DEFAULT_SESSION_FILE: &str = "session.json";

pub struct FileSessionStore {
    session_file_path: PathBuf,
}

impl FileSessionStore {
    /// Create store with custom file path
    pub fn new(session_file_path: PathBuf) -> Self {
        Self { session_file_path }
    }

    /// Create store with `session.json` under `base_dir`
    pub fn with_defaults(base_dir: PathBuf) -> Self {
        Self {
            session_file_path: base_dir.join(DEFAULT_SESSION_FILE),
        }
    }

    pub fn path(&self) -> &PathBuf {
        &self.session_file_path
    }

    async fn ensure_parent_dir(&self) -> anyhow::Result<()> {
        if let Some(parent) = self.session_file_path.parent() {
            fs::create_dir_all(parent).await?;
        }
        Ok(())
    }
}

#[async_trait]
impl SessionStorePort for FileSessionStore {
    async fn load(&self) -> anyhow::Result<Option<UserSession>> {
        if !fs::try_exists(&self.session_file_path).await? {
            return Ok(None);
        }

        let content = fs::read_to_string(&self.session_file_path).await?;
        if content.trim().is_empty() {
            return Ok(None);
        }

        let session: UserSession = serde_json::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse session file: {e}"))?;

        Ok(Some(session))
    }

    async fn save(&self, session: &UserSession) -> anyhow::Result<()> {
        self.ensure_parent_dir().await?;

        let json = serde_json::to_string_pretty(session)
            .map_err(|e| anyhow::anyhow!("Failed to serialize session: {e}"))?;

        let mut file = fs::File::create(&self.session_file_path)
            .await
            .map_err(|e| anyhow::anyhow!("Failed to create session file: {e}"))?;

        file.write_all(json.as_bytes())
            .await
            .map_err(|e| anyhow::anyhow!("Failed to write session file: {e}"))?;

        file.sync_all()
            .await
            .map_err(|e| anyhow::anyhow!("Failed to sync session file: {e}"))?;

        debug!(path = %self.session_file_path.display(), "session saved");
        Ok(())
    }

    async fn clear(&self) -> anyhow::Result<()> {
        match fs::remove_file(&self.session_file_path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(anyhow::anyhow!("Failed to remove session file: {e}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sc_core::UserId;
    use tempfile::TempDir;

    #[tokio::test]
    async fn load_returns_none_when_file_missing() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileSessionStore::new(temp_dir.path().join("missing.json"));

        assert_eq!(store.load().await.unwrap(), None);
    }

    #[tokio::test]
    async fn save_then_load_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileSessionStore::with_defaults(temp_dir.path().join("nested"));
        let session = UserSession::new("Ada Lovelace", "ada@example.com", UserId::new(42));

        store.save(&session).await.unwrap();

        assert_eq!(store.load().await.unwrap(), Some(session));
    }

    #[tokio::test]
    async fn file_uses_flat_json_shape() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileSessionStore::with_defaults(temp_dir.path().to_path_buf());
        store.save(&UserSession::demo()).await.unwrap();

        let raw = fs::read_to_string(store.path()).await.unwrap();
        let json: serde_json::Value = serde_json::from_str(&raw).unwrap();

        assert_eq!(
            json,
            serde_json::json!({"name": "Demo User", "email": "demo@example.com", "id": 1})
        );
    }

    #[tokio::test]
    async fn clear_is_idempotent() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileSessionStore::with_defaults(temp_dir.path().to_path_buf());
        store.save(&UserSession::demo()).await.unwrap();

        store.clear().await.unwrap();
        store.clear().await.unwrap();

        assert_eq!(store.load().await.unwrap(), None);
    }

    #[tokio::test]
    async fn invalid_json_returns_error() {
        let temp_dir = TempDir::new().unwrap();
        let session_file = temp_dir.path().join("session.json");
        fs::write(&session_file, "{invalid json").await.unwrap();

        let result = FileSessionStore::new(session_file).load().await;

        assert!(result.unwrap_err().to_string().contains("Failed to parse"));
    }
}
