//! Wizard controller.
//!
//! Drives the pure wizard state machine and carries out the actions it
//! returns: submission, draft persistence and change notification.

use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, info, info_span, warn, Instrument};

use sc_core::form::FieldValue;
use sc_core::ports::{ClockPort, WizardDraftPort, WizardEventPort};
use sc_core::wizard::{
    FormError, Transition, WizardAction, WizardDefinition, WizardDraft, WizardError, WizardEvent,
    WizardPayload, WizardPhase, WizardSnapshot, WizardState, WizardStateMachine,
};

use crate::deps::WizardDeps;
use crate::usecases::wizard::context::WizardContext;
use crate::usecases::wizard::WizardSubmitter;

/// Controller for one run of a wizard flow.
///
/// All operations are serialized through the context's dispatch lock. The
/// submitter runs outside the lock while the state is `Submitting`, so a
/// concurrent `submit` is refused instead of queued behind the first one.
pub struct WizardController {
    context: Arc<WizardContext>,
    submitter: Arc<dyn WizardSubmitter>,
    event_port: Arc<dyn WizardEventPort>,
    clock: Arc<dyn ClockPort>,
    drafts: Option<Arc<dyn WizardDraftPort>>,
    submit_timeout: Duration,
}

impl WizardController {
    pub fn new(
        definition: WizardDefinition,
        submitter: Arc<dyn WizardSubmitter>,
        deps: WizardDeps,
    ) -> Self {
        Self {
            context: WizardContext::new(Arc::new(definition)).arc(),
            submitter,
            event_port: deps.event_port,
            clock: deps.clock,
            drafts: deps.drafts,
            submit_timeout: deps.submit_timeout,
        }
    }

    pub fn definition(&self) -> &WizardDefinition {
        self.context.definition()
    }

    pub async fn snapshot(&self) -> WizardSnapshot {
        let state = self.context.get_state().await;
        WizardSnapshot::capture(self.definition(), &state)
    }

    /// Replaces a fresh run with the stored draft of this flow, if any.
    ///
    /// Returns whether a draft was applied. Storage failures are logged and
    /// leave the wizard untouched.
    pub async fn restore_draft(&self) -> bool {
        let Some(drafts) = &self.drafts else {
            return false;
        };
        let flow = self.definition().name();
        let draft = match drafts.load(flow).await {
            Ok(Some(draft)) => draft,
            Ok(None) => return false,
            Err(err) => {
                warn!(flow, error = %err, "failed to load wizard draft");
                return false;
            }
        };

        let _dispatch_guard = self.context.acquire_dispatch_lock().await;
        if self.context.get_state().await != WizardState::new() {
            debug!(flow, "wizard already in progress, ignoring draft");
            return false;
        }
        let restored = WizardStateMachine::restore(self.definition(), draft.step, draft.values);
        info!(flow, phase = ?restored.phase, "restored wizard draft");
        self.context.set_state(restored.clone()).await;
        self.event_port
            .emit_wizard_changed(WizardSnapshot::capture(self.definition(), &restored))
            .await;
        true
    }

    /// Records a field value. Fields outside the current step, mistyped
    /// values and edits during submission are ignored with a warning.
    pub async fn set_field_value(
        &self,
        name: impl Into<String>,
        value: impl Into<FieldValue>,
    ) -> WizardSnapshot {
        let event = WizardEvent::SetFieldValue {
            name: name.into(),
            value: value.into(),
        };
        match self.dispatch(event).await {
            Ok((snapshot, _)) => snapshot,
            Err(err) => {
                warn!(flow = self.definition().name(), error = %err, "field update ignored");
                self.snapshot().await
            }
        }
    }

    pub async fn advance(&self) -> Result<WizardSnapshot, WizardError> {
        self.dispatch(WizardEvent::Advance)
            .await
            .map(|(snapshot, _)| snapshot)
    }

    pub async fn retreat(&self) -> Result<WizardSnapshot, WizardError> {
        self.dispatch(WizardEvent::Retreat)
            .await
            .map(|(snapshot, _)| snapshot)
    }

    /// Validates the final step and hands the payload to the submitter.
    ///
    /// On rejection, network failure or timeout the wizard returns to the
    /// final step with its values and the form error set, and the matching
    /// [`WizardError`] is returned.
    ///
    /// Dropping the returned future while the submitter runs puts the wizard
    /// back on the final step with no form error, so it can be submitted
    /// again. Whether the abandoned request reached the server is unknown.
    pub async fn submit(&self) -> Result<WizardSnapshot, WizardError> {
        let (snapshot, payload) = self.dispatch(WizardEvent::Submit).await?;
        let Some(payload) = payload else {
            return Ok(snapshot);
        };
        let mut in_flight = InFlightSubmission::new(self.context.clone(), self.event_port.clone());

        let span = info_span!(
            "usecase.wizard_controller.submit",
            flow = self.definition().name()
        );
        let outcome = self.run_submitter(&payload).instrument(span).await;

        let result = match outcome {
            Ok(()) => self
                .dispatch(WizardEvent::SubmissionAccepted)
                .await
                .map(|(snapshot, _)| snapshot),
            Err(form_error) => self
                .dispatch(WizardEvent::SubmissionFailed {
                    error: form_error.clone(),
                })
                .await
                .and(Err(form_error.into())),
        };
        in_flight.settle();
        result
    }

    /// Abandons the run: forgets the draft and starts over at step 1.
    pub async fn discard(&self) -> Result<WizardSnapshot, WizardError> {
        let _dispatch_guard = self.context.acquire_dispatch_lock().await;
        if self.context.get_state().await.is_submitting() {
            return Err(WizardError::SubmissionInProgress);
        }
        self.discard_draft().await;
        let fresh = WizardState::new();
        self.context.set_state(fresh.clone()).await;
        let snapshot = WizardSnapshot::capture(self.definition(), &fresh);
        self.event_port.emit_wizard_changed(snapshot.clone()).await;
        info!(flow = self.definition().name(), "wizard discarded");
        Ok(snapshot)
    }

    async fn run_submitter(&self, payload: &WizardPayload) -> Result<(), FormError> {
        match tokio::time::timeout(self.submit_timeout, self.submitter.submit(payload)).await {
            Ok(Ok(())) => {
                info!("submission accepted");
                Ok(())
            }
            Ok(Err(err)) => {
                warn!(error = %err, "submission failed");
                Err(err.into())
            }
            Err(_) => {
                warn!(timeout = ?self.submit_timeout, "submission timed out");
                Err(FormError::TimedOut)
            }
        }
    }

    async fn dispatch(
        &self,
        event: WizardEvent,
    ) -> Result<(WizardSnapshot, Option<WizardPayload>), WizardError> {
        // Acquire dispatch lock to serialize concurrent dispatch calls.
        let _dispatch_guard = self.context.acquire_dispatch_lock().await;

        let definition = self.definition();
        let span = info_span!(
            "usecase.wizard_controller.dispatch",
            flow = definition.name(),
            event = event.name()
        );
        async {
            let current = self.context.get_state().await;
            let event_name = event.name();
            let from = current.phase;
            let changed_from = current.clone();

            let Transition {
                state,
                actions,
                error,
            } = WizardStateMachine::transition(definition, current, event);

            match &error {
                None => info!(from = ?from, to = ?state.phase, event = event_name, "wizard state transition"),
                Some(err) => debug!(phase = ?from, event = event_name, error = %err, "wizard event refused"),
            }

            let mut payload = None;
            for action in actions {
                match action {
                    WizardAction::Submit { payload: submitted } => payload = Some(submitted),
                    WizardAction::SaveDraft => self.save_draft(&state).await,
                    WizardAction::DiscardDraft => self.discard_draft().await,
                }
            }

            let snapshot = WizardSnapshot::capture(definition, &state);
            if state != changed_from {
                self.context.set_state(state).await;
                self.event_port.emit_wizard_changed(snapshot.clone()).await;
            }

            match error {
                Some(err) => Err(err),
                None => Ok((snapshot, payload)),
            }
        }
        .instrument(span)
        .await
    }

    async fn save_draft(&self, state: &WizardState) {
        let Some(drafts) = &self.drafts else {
            return;
        };
        let definition = self.definition();
        let draft = WizardDraft {
            flow: definition.name().to_string(),
            step: state.current_step().unwrap_or(definition.step_count()),
            values: definition.draft_values(&state.values),
            saved_at_ms: self.clock.now_ms(),
        };
        if let Err(err) = drafts.save(&draft).await {
            warn!(flow = %draft.flow, error = %err, "failed to save wizard draft");
        }
    }

    async fn discard_draft(&self) {
        let Some(drafts) = &self.drafts else {
            return;
        };
        let flow = self.definition().name();
        if let Err(err) = drafts.discard(flow).await {
            warn!(flow, error = %err, "failed to discard wizard draft");
        }
    }
}

/// Armed while a submission is in flight. Dropped armed, it schedules a
/// reset of the stale `Submitting` state.
struct InFlightSubmission {
    context: Arc<WizardContext>,
    event_port: Arc<dyn WizardEventPort>,
    armed: bool,
}

impl InFlightSubmission {
    fn new(context: Arc<WizardContext>, event_port: Arc<dyn WizardEventPort>) -> Self {
        Self {
            context,
            event_port,
            armed: true,
        }
    }

    fn settle(&mut self) {
        self.armed = false;
    }
}

impl Drop for InFlightSubmission {
    fn drop(&mut self) {
        if !self.armed {
            return;
        }
        let flow = self.context.definition().name().to_string();
        let Ok(handle) = tokio::runtime::Handle::try_current() else {
            warn!(flow = %flow, "submission cancelled outside a runtime, state left submitting");
            return;
        };
        warn!(flow = %flow, "submission cancelled, returning to final step");
        let context = self.context.clone();
        let event_port = self.event_port.clone();
        handle.spawn(async move {
            let _dispatch_guard = context.acquire_dispatch_lock().await;
            let mut state = context.get_state().await;
            if !state.is_submitting() {
                return;
            }
            state.phase = WizardPhase::Step(context.definition().step_count());
            state.form_error = None;
            context.set_state(state.clone()).await;
            event_port
                .emit_wizard_changed(WizardSnapshot::capture(context.definition(), &state))
                .await;
        });
    }
}
