//! File-based wizard draft repository
//!
//! One JSON file per flow under `<data_dir>/drafts/`.

use std::path::PathBuf;

use async_trait::async_trait;
use sc_core::ports::WizardDraftPort;
use sc_core::wizard::WizardDraft;
use tokio::fs;

pub const DEFAULT_DRAFTS_DIR: &str = "drafts";

pub struct FileWizardDraftRepository {
    drafts_dir: PathBuf,
}

impl FileWizardDraftRepository {
    pub fn new(drafts_dir: PathBuf) -> Self {
        Self { drafts_dir }
    }

    pub fn with_defaults(base_dir: PathBuf) -> Self {
        Self {
            drafts_dir: base_dir.join(DEFAULT_DRAFTS_DIR),
        }
    }

    /// Flow names are code constants; anything outside `[A-Za-z0-9_-]` is
    /// replaced so a name can never escape the drafts directory.
    fn draft_path(&self, flow: &str) -> PathBuf {
        let file_stem: String = flow
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                    c
                } else {
                    '_'
                }
            })
            .collect();
        self.drafts_dir.join(format!("{file_stem}.json"))
    }
}

#[async_trait]
impl WizardDraftPort for FileWizardDraftRepository {
    async fn load(&self, flow: &str) -> anyhow::Result<Option<WizardDraft>> {
        let path = self.draft_path(flow);
        if !fs::try_exists(&path).await? {
            return Ok(None);
        }

        let content = fs::read_to_string(&path).await?;
        if content.trim().is_empty() {
            return Ok(None);
        }

        let draft: WizardDraft = serde_json::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse wizard draft {}: {e}", path.display()))?;
        Ok(Some(draft))
    }

    async fn save(&self, draft: &WizardDraft) -> anyhow::Result<()> {
        fs::create_dir_all(&self.drafts_dir).await?;

        let json = serde_json::to_string_pretty(draft)
            .map_err(|e| anyhow::anyhow!("Failed to serialize wizard draft: {e}"))?;

        fs::write(self.draft_path(&draft.flow), json)
            .await
            .map_err(|e| anyhow::anyhow!("Failed to write wizard draft: {e}"))
    }

    async fn discard(&self, flow: &str) -> anyhow::Result<()> {
        match fs::remove_file(self.draft_path(flow)).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(anyhow::anyhow!("Failed to remove wizard draft: {e}")),
        }
    }
}
