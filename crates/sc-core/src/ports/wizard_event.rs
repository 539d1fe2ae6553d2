use crate::wizard::WizardSnapshot;

/// Notified after every wizard state change so views can re-render.
#[async_trait::async_trait]
pub trait WizardEventPort: Send + Sync {
    async fn emit_wizard_changed(&self, snapshot: WizardSnapshot);
}
