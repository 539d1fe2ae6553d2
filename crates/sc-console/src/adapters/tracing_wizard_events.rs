use async_trait::async_trait;
use tracing::debug;

use sc_core::ports::WizardEventPort;
use sc_core::wizard::WizardSnapshot;

/// Records wizard changes in the log. The prompt loop re-reads the
/// controller snapshot itself, so nothing else listens.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingWizardEventPort;

#[async_trait]
impl WizardEventPort for TracingWizardEventPort {
    async fn emit_wizard_changed(&self, snapshot: WizardSnapshot) {
        debug!(
            flow = %snapshot.flow,
            phase = ?snapshot.phase,
            step = snapshot.step,
            field_errors = snapshot.errors.len(),
            form_error = snapshot.form_error.is_some(),
            "wizard changed"
        );
    }
}
