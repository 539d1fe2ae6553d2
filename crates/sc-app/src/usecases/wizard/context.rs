use std::sync::Arc;

use tokio::sync::Mutex;

use sc_core::wizard::{WizardDefinition, WizardState};

/// Shared wizard context containing definition, state and dispatch lock.
///
/// ## Lock Ordering
/// When acquiring both locks, acquire `dispatch_lock` first, then `state`.
/// - `dispatch_lock`: serializes transitions together with their side effects.
/// - `state`: read by `get_state` without taking `dispatch_lock`.
pub struct WizardContext {
    definition: Arc<WizardDefinition>,
    state: Mutex<WizardState>,
    dispatch_lock: Mutex<()>,
}

impl WizardContext {
    pub fn new(definition: Arc<WizardDefinition>) -> Self {
        Self {
            definition,
            state: Mutex::new(WizardState::new()),
            dispatch_lock: Mutex::new(()),
        }
    }

    pub fn arc(self) -> Arc<Self> {
        Arc::new(self)
    }

    pub fn definition(&self) -> &WizardDefinition {
        &self.definition
    }

    pub async fn get_state(&self) -> WizardState {
        self.state.lock().await.clone()
    }

    /// Returns a guard that releases the lock when dropped.
    pub async fn acquire_dispatch_lock(&self) -> tokio::sync::MutexGuard<'_, ()> {
        self.dispatch_lock.lock().await
    }

    /// Should only be called while holding `dispatch_lock`.
    pub async fn set_state(&self, state: WizardState) {
        *self.state.lock().await = state;
    }
}
