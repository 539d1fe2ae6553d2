//! Wizard state machine.
//!
//! Defines a pure state transition function for linear wizards.
//!
//! ```text
//! Step(i) --Advance [valid, i<N]--> Step(i+1)
//! Step(i) --Advance [invalid]-----> Step(i)        errors populated
//! Step(i) --Retreat [i>1]---------> Step(i-1)      values and errors kept
//! Step(N) --Submit [valid]--------> Submitting     emits Submit { payload }
//! Submitting --SubmissionAccepted--> Completed     emits DiscardDraft
//! Submitting --SubmissionFailed----> Step(N)       form error set
//! ```

use crate::form::{FieldValue, FieldValues};

use super::{FormError, WizardDefinition, WizardError, WizardPayload, WizardPhase, WizardState};

/// Events that drive a wizard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WizardEvent {
    /// User edited a field of the current step.
    SetFieldValue { name: String, value: FieldValue },
    /// Next button.
    Advance,
    /// Back button.
    Retreat,
    /// Submit button on the final step.
    Submit,
    /// Submitter accepted the payload.
    SubmissionAccepted,
    /// Submitter rejected the payload or could not be reached.
    SubmissionFailed { error: FormError },
}

impl WizardEvent {
    /// Event name for logs; field values may be secret and are left out.
    pub fn name(&self) -> &'static str {
        match self {
            WizardEvent::SetFieldValue { .. } => "set_field_value",
            WizardEvent::Advance => "advance",
            WizardEvent::Retreat => "retreat",
            WizardEvent::Submit => "submit",
            WizardEvent::SubmissionAccepted => "submission_accepted",
            WizardEvent::SubmissionFailed { .. } => "submission_failed",
        }
    }
}

/// Side-effects produced by state transitions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WizardAction {
    /// Hand the payload to the flow's submitter.
    Submit { payload: WizardPayload },
    /// Persist the in-progress values (when drafts are enabled).
    SaveDraft,
    /// Forget any persisted draft.
    DiscardDraft,
}

/// Outcome of a single transition.
///
/// `error` is set when the event did not take effect; `state` then carries
/// whatever the event legitimately changed (e.g. validation errors).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub state: WizardState,
    pub actions: Vec<WizardAction>,
    pub error: Option<WizardError>,
}

impl Transition {
    fn applied(state: WizardState, actions: Vec<WizardAction>) -> Self {
        Self {
            state,
            actions,
            error: None,
        }
    }

    fn refused(state: WizardState, error: WizardError) -> Self {
        Self {
            state,
            actions: Vec::new(),
            error: Some(error),
        }
    }
}

/// Pure wizard state machine: no side effects.
pub struct WizardStateMachine;

impl WizardStateMachine {
    pub fn transition(
        definition: &WizardDefinition,
        state: WizardState,
        event: WizardEvent,
    ) -> Transition {
        let last = definition.step_count();
        match (state.phase, event) {
            (WizardPhase::Submitting, WizardEvent::SubmissionAccepted) => {
                let next = WizardState {
                    phase: WizardPhase::Completed,
                    errors: Default::default(),
                    form_error: None,
                    ..state
                };
                Transition::applied(next, vec![WizardAction::DiscardDraft])
            }
            (WizardPhase::Submitting, WizardEvent::SubmissionFailed { error }) => {
                let next = WizardState {
                    phase: WizardPhase::Step(last),
                    form_error: Some(error),
                    ..state
                };
                Transition::applied(next, Vec::new())
            }
            (WizardPhase::Submitting, _) => {
                Transition::refused(state, WizardError::SubmissionInProgress)
            }
            (WizardPhase::Completed, _) => Transition::refused(state, WizardError::AlreadyCompleted),
            (WizardPhase::Step(_), WizardEvent::SubmissionAccepted)
            | (WizardPhase::Step(_), WizardEvent::SubmissionFailed { .. }) => {
                Transition::refused(state, WizardError::NotSubmitting)
            }
            (WizardPhase::Step(step), WizardEvent::SetFieldValue { name, value }) => {
                Self::set_field_value(definition, state, step, name, value)
            }
            (WizardPhase::Step(step), WizardEvent::Advance) => {
                if step >= last {
                    return Transition::refused(state, WizardError::AtFinalStep);
                }
                Self::gate(definition, state, step, WizardPhase::Step(step + 1))
                    .map(|next| Transition::applied(next, vec![WizardAction::SaveDraft]))
                    .unwrap_or_else(|refused| refused)
            }
            (WizardPhase::Step(step), WizardEvent::Retreat) => {
                if step <= 1 {
                    return Transition::refused(state, WizardError::AtFirstStep);
                }
                let next = WizardState {
                    phase: WizardPhase::Step(step - 1),
                    ..state
                };
                Transition::applied(next, vec![WizardAction::SaveDraft])
            }
            (WizardPhase::Step(step), WizardEvent::Submit) => {
                if step < last {
                    return Transition::refused(state, WizardError::NotAtFinalStep);
                }
                Self::gate(definition, state, step, WizardPhase::Submitting)
                    .map(|next| {
                        let payload = definition.payload(&next.values);
                        Transition::applied(next, vec![WizardAction::Submit { payload }])
                    })
                    .unwrap_or_else(|refused| refused)
            }
        }
    }

    fn set_field_value(
        definition: &WizardDefinition,
        mut state: WizardState,
        step: usize,
        name: String,
        value: FieldValue,
    ) -> Transition {
        let Some(field) = definition.step(step).and_then(|current| current.field(&name)) else {
            return Transition::refused(state, WizardError::UnknownField(name));
        };
        if !field.kind.accepts(&value) {
            let kind = field.kind.as_str();
            return Transition::refused(state, WizardError::KindMismatch { field: name, kind });
        }

        state.errors.remove(&name);
        state.form_error = None;
        state.values.insert(name, value);
        Transition::applied(state, vec![WizardAction::SaveDraft])
    }

    /// Validates `step`; on success moves to `target` with errors cleared,
    /// otherwise stays put with the fresh errors recorded.
    fn gate(
        definition: &WizardDefinition,
        mut state: WizardState,
        step: usize,
        target: WizardPhase,
    ) -> Result<WizardState, Transition> {
        let errors = definition.validate_step(step, &state.values);
        if !errors.is_empty() {
            state.errors = errors.clone();
            return Err(Transition::refused(state, WizardError::Validation(errors)));
        }
        state.errors = Default::default();
        state.form_error = None;
        state.phase = target;
        Ok(state)
    }

    /// Replays `values` onto a fresh state, e.g. when restoring a draft.
    ///
    /// Resumes at `step` or at the first earlier step that no longer passes
    /// its gate, whichever comes first. Drafts never carry sensitive fields,
    /// so their steps must be answered again.
    pub fn restore(definition: &WizardDefinition, step: usize, values: FieldValues) -> WizardState {
        let known: FieldValues = values
            .into_iter()
            .filter(|(name, value)| {
                definition
                    .field(name)
                    .is_some_and(|field| field.kind.accepts(value))
            })
            .collect();
        let target = step.clamp(1, definition.step_count().max(1));
        let resume_at = (1..target)
            .find(|&index| !definition.is_step_complete(index, &known))
            .unwrap_or(target);
        WizardState::resume(resume_at, definition.step_count(), known)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::{FieldError, FieldSchema};
    use crate::wizard::StepDefinition;

    /// Three steps; step 2 requires an email.
    fn email_wizard() -> WizardDefinition {
        WizardDefinition::new(
            "contact",
            vec![
                StepDefinition::new(1, "Name", vec![FieldSchema::text("name", "Name").required()]),
                StepDefinition::new(
                    2,
                    "Contact",
                    vec![FieldSchema::email("email", "Email").required()],
                ),
                StepDefinition::new(
                    3,
                    "Confirm",
                    vec![FieldSchema::checkbox("agree", "Agreement").required()],
                ),
            ],
        )
        .unwrap()
    }

    fn password_wizard() -> WizardDefinition {
        WizardDefinition::new(
            "password",
            vec![StepDefinition::new(
                1,
                "Password",
                vec![
                    FieldSchema::password("password", "Password")
                        .required()
                        .min_length(8),
                    FieldSchema::password("confirmPassword", "Confirm password")
                        .required()
                        .matches("password", "Password"),
                ],
            )],
        )
        .unwrap()
    }

    fn run(
        definition: &WizardDefinition,
        state: WizardState,
        events: impl IntoIterator<Item = WizardEvent>,
    ) -> Transition {
        let mut transition = Transition::applied(state, Vec::new());
        for event in events {
            transition = WizardStateMachine::transition(definition, transition.state, event);
        }
        transition
    }

    fn set(name: &str, value: impl Into<FieldValue>) -> WizardEvent {
        WizardEvent::SetFieldValue {
            name: name.to_string(),
            value: value.into(),
        }
    }

    fn at_step_two(definition: &WizardDefinition) -> WizardState {
        let transition = run(
            definition,
            WizardState::new(),
            [set("name", "Bob"), WizardEvent::Advance],
        );
        assert_eq!(transition.state.phase, WizardPhase::Step(2));
        transition.state
    }

    #[test]
    fn invalid_advance_keeps_step_and_reports_one_error_per_field() {
        let definition = password_wizard();
        let transition =
            WizardStateMachine::transition(&definition, WizardState::new(), WizardEvent::Submit);

        assert_eq!(transition.state.phase, WizardPhase::Step(1));
        assert_eq!(
            transition.state.errors.field_names(),
            vec!["password", "confirmPassword"]
        );
        assert!(matches!(transition.error, Some(WizardError::Validation(_))));
        assert!(transition.actions.is_empty());
    }

    #[test]
    fn email_scenario_gates_then_clears_then_advances() {
        let definition = email_wizard();
        let state = at_step_two(&definition);

        let failed = run(&definition, state, [set("email", "bob"), WizardEvent::Advance]);
        assert_eq!(failed.state.phase, WizardPhase::Step(2));
        assert_eq!(
            failed.state.errors.message("email").as_deref(),
            Some("Email must be a valid email address")
        );

        let fixed = WizardStateMachine::transition(&definition, failed.state, set("email", "bob@x.com"));
        assert!(!fixed.state.errors.contains("email"));
        assert_eq!(fixed.state.phase, WizardPhase::Step(2));

        let advanced = WizardStateMachine::transition(&definition, fixed.state, WizardEvent::Advance);
        assert!(advanced.error.is_none());
        assert_eq!(advanced.state.phase, WizardPhase::Step(3));
    }

    #[test]
    fn setting_a_value_clears_error_even_if_still_invalid() {
        let definition = email_wizard();
        let state = at_step_two(&definition);
        let failed = run(&definition, state, [WizardEvent::Advance]);
        assert!(failed.state.errors.contains("email"));

        let still_bad = WizardStateMachine::transition(&definition, failed.state, set("email", "nope"));
        assert!(!still_bad.state.errors.contains("email"));

        let again = WizardStateMachine::transition(&definition, still_bad.state, WizardEvent::Advance);
        assert!(again.state.errors.contains("email"));
    }

    #[test]
    fn password_scenario_distinguishes_length_from_mismatch() {
        let definition = password_wizard();

        let short = run(
            &definition,
            WizardState::new(),
            [set("password", "short"), WizardEvent::Submit],
        );
        let length_error = short.state.errors.get("password").cloned();
        assert!(matches!(length_error, Some(FieldError::TooShort { .. })));

        let mismatch = run(
            &definition,
            WizardState::new(),
            [
                set("password", "longenough1"),
                set("confirmPassword", "mismatch"),
                WizardEvent::Submit,
            ],
        );
        assert!(!mismatch.state.errors.contains("password"));
        let mismatch_error = mismatch.state.errors.get("confirmPassword").cloned();
        assert!(matches!(mismatch_error, Some(FieldError::Mismatch { .. })));
        assert_ne!(
            short.state.errors.message("password"),
            mismatch.state.errors.message("confirmPassword")
        );
    }

    #[test]
    fn retreat_then_advance_round_trips() {
        let definition = email_wizard();
        let state = run(
            &definition,
            at_step_two(&definition),
            [set("email", "bob@x.com"), WizardEvent::Advance],
        )
        .state;
        assert_eq!(state.phase, WizardPhase::Step(3));
        let values_before = state.values.clone();

        let back = WizardStateMachine::transition(&definition, state, WizardEvent::Retreat);
        assert_eq!(back.state.phase, WizardPhase::Step(2));
        let forward = WizardStateMachine::transition(&definition, back.state, WizardEvent::Advance);
        assert_eq!(forward.state.phase, WizardPhase::Step(3));
        assert_eq!(forward.state.values, values_before);
    }

    #[test]
    fn retreat_keeps_errors_and_refuses_on_first_step() {
        let definition = email_wizard();
        let failed = run(&definition, at_step_two(&definition), [WizardEvent::Advance]);
        let back = WizardStateMachine::transition(&definition, failed.state, WizardEvent::Retreat);
        assert_eq!(back.state.phase, WizardPhase::Step(1));
        assert!(back.state.errors.contains("email"));

        let refused = WizardStateMachine::transition(&definition, back.state, WizardEvent::Retreat);
        assert_eq!(refused.error, Some(WizardError::AtFirstStep));
        assert_eq!(refused.state.phase, WizardPhase::Step(1));
    }

    #[test]
    fn submit_before_final_step_is_refused_without_side_effects() {
        let definition = email_wizard();
        let state = at_step_two(&definition);
        let snapshot = state.clone();

        let transition = WizardStateMachine::transition(&definition, state, WizardEvent::Submit);
        assert_eq!(transition.error, Some(WizardError::NotAtFinalStep));
        assert_eq!(transition.state, snapshot);
        assert!(transition.actions.is_empty());
    }

    #[test]
    fn advance_on_final_step_is_refused() {
        let definition = password_wizard();
        let transition =
            WizardStateMachine::transition(&definition, WizardState::new(), WizardEvent::Advance);
        assert_eq!(transition.error, Some(WizardError::AtFinalStep));
    }

    #[test]
    fn valid_submit_emits_payload_and_accept_completes() {
        let definition = email_wizard();
        let submitting = run(
            &definition,
            at_step_two(&definition),
            [
                set("email", "bob@x.com"),
                WizardEvent::Advance,
                set("agree", true),
                WizardEvent::Submit,
            ],
        );
        assert_eq!(submitting.state.phase, WizardPhase::Submitting);
        let Some(WizardAction::Submit { payload }) = submitting.actions.first() else {
            panic!("expected submit action, got {:?}", submitting.actions);
        };
        assert_eq!(payload.text("email"), Some("bob@x.com"));
        assert_eq!(payload.text("name"), Some("Bob"));
        assert!(payload.flag("agree"));

        let again = WizardStateMachine::transition(&definition, submitting.state.clone(), WizardEvent::Submit);
        assert_eq!(again.error, Some(WizardError::SubmissionInProgress));

        let edit = WizardStateMachine::transition(&definition, submitting.state.clone(), set("agree", false));
        assert_eq!(edit.error, Some(WizardError::SubmissionInProgress));

        let done = WizardStateMachine::transition(
            &definition,
            submitting.state,
            WizardEvent::SubmissionAccepted,
        );
        assert_eq!(done.state.phase, WizardPhase::Completed);
        assert_eq!(done.actions, vec![WizardAction::DiscardDraft]);

        let after = WizardStateMachine::transition(&definition, done.state, WizardEvent::Retreat);
        assert_eq!(after.error, Some(WizardError::AlreadyCompleted));
    }

    #[test]
    fn failed_submission_returns_to_final_step_with_data() {
        let definition = password_wizard();
        let submitting = run(
            &definition,
            WizardState::new(),
            [
                set("password", "longenough1"),
                set("confirmPassword", "longenough1"),
                WizardEvent::Submit,
            ],
        );
        let values = submitting.state.values.clone();

        let failed = WizardStateMachine::transition(
            &definition,
            submitting.state,
            WizardEvent::SubmissionFailed {
                error: FormError::Rejected {
                    message: "Registration failed".into(),
                },
            },
        );
        assert_eq!(failed.state.phase, WizardPhase::Step(1));
        assert_eq!(failed.state.values, values);
        assert_eq!(
            failed.state.form_error,
            Some(FormError::Rejected {
                message: "Registration failed".into()
            })
        );

        let edited = WizardStateMachine::transition(&definition, failed.state, set("password", "longenough2"));
        assert_eq!(edited.state.form_error, None);
    }

    #[test]
    fn unknown_or_mistyped_fields_are_ignored() {
        let definition = email_wizard();

        let unknown = WizardStateMachine::transition(&definition, WizardState::new(), set("email", "a@b.c"));
        assert_eq!(unknown.error, Some(WizardError::UnknownField("email".into())));
        assert!(unknown.state.values.is_empty());

        let mistyped = WizardStateMachine::transition(&definition, WizardState::new(), set("name", true));
        assert!(matches!(mistyped.error, Some(WizardError::KindMismatch { .. })));
        assert!(mistyped.state.values.is_empty());
    }

    #[test]
    fn restore_drops_unknown_fields_and_clamps_step() {
        let definition = email_wizard();
        let mut values = FieldValues::new();
        values.insert("name".into(), FieldValue::text("Bob"));
        values.insert("legacy".into(), FieldValue::text("x"));

        let state = WizardStateMachine::restore(&definition, 7, values);
        // Step 2 has no email yet, so the resume point falls back to it.
        assert_eq!(state.phase, WizardPhase::Step(2));
        assert_eq!(state.values.len(), 1);
    }

    #[test]
    fn restore_keeps_saved_step_when_earlier_steps_pass() {
        let definition = email_wizard();
        let mut values = FieldValues::new();
        values.insert("name".into(), FieldValue::text("Bob"));
        values.insert("email".into(), FieldValue::text("bob@example.com"));

        let state = WizardStateMachine::restore(&definition, 3, values);
        assert_eq!(state.phase, WizardPhase::Step(3));
    }

    #[test]
    fn restore_regates_steps_missing_from_the_draft() {
        let definition = email_wizard();
        let mut values = FieldValues::new();
        values.insert("email".into(), FieldValue::text("bob@example.com"));

        let state = WizardStateMachine::restore(&definition, 3, values);
        assert_eq!(state.phase, WizardPhase::Step(1));
        assert!(state.errors.is_empty());
    }
}
