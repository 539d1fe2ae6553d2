use async_trait::async_trait;

use crate::wizard::WizardDraft;

/// Storage for in-progress wizard entries, one draft per flow.
#[async_trait]
pub trait WizardDraftPort: Send + Sync {
    async fn load(&self, flow: &str) -> anyhow::Result<Option<WizardDraft>>;

    async fn save(&self, draft: &WizardDraft) -> anyhow::Result<()>;

    async fn discard(&self, flow: &str) -> anyhow::Result<()>;
}
