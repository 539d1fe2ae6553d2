//! Drives the terminal wizard with scripted input.

use std::io::Cursor;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use sc_app::usecases::wizard::{SubmitError, WizardSubmitter};
use sc_app::{WizardController, WizardDeps};
use sc_console::adapters::TracingWizardEventPort;
use sc_console::commands::{run_wizard, WizardOutcome};
use sc_core::form::FieldSchema;
use sc_core::wizard::{StepDefinition, WizardDefinition, WizardPayload};
use sc_infra::SystemClock;

/// Refuses the first `rejections` submissions, then accepts.
struct Scripted {
    rejections: usize,
    calls: AtomicUsize,
}

#[async_trait]
impl WizardSubmitter for Scripted {
    async fn submit(&self, _payload: &WizardPayload) -> Result<(), SubmitError> {
        let call = self.calls.fetch_add(1, Ordering::SeqCst);
        if call < self.rejections {
            Err(SubmitError::Rejected("Insufficient funds".into()))
        } else {
            Ok(())
        }
    }
}

fn signup() -> WizardDefinition {
    WizardDefinition::new(
        "signup",
        vec![
            StepDefinition::new(1, "Email", vec![FieldSchema::email("email", "Email").required()]),
            StepDefinition::new(2, "Name", vec![FieldSchema::text("name", "Name").required()]),
            StepDefinition::new(3, "Terms", vec![FieldSchema::checkbox("agree", "Terms").required()]),
        ],
    )
    .unwrap()
}

fn controller(rejections: usize) -> (WizardController, Arc<Scripted>) {
    let submitter = Arc::new(Scripted {
        rejections,
        calls: AtomicUsize::new(0),
    });
    let deps = WizardDeps {
        event_port: Arc::new(TracingWizardEventPort),
        clock: Arc::new(SystemClock),
        drafts: None,
        submit_timeout: Duration::from_secs(5),
    };
    (WizardController::new(signup(), submitter.clone(), deps), submitter)
}

async fn drive(controller: &WizardController, script: &str) -> (WizardOutcome, String) {
    let mut input = Cursor::new(script.as_bytes().to_vec());
    let mut out = Vec::new();
    let outcome = run_wizard(controller, &mut input, &mut out).await.unwrap();
    (outcome, String::from_utf8(out).unwrap())
}

#[tokio::test]
async fn invalid_email_is_reprompted_inline() {
    let (controller, submitter) = controller(0);

    let (outcome, text) = drive(&controller, "bob\nbob@x.com\nAnn\ny\n").await;

    assert!(matches!(outcome, WizardOutcome::Completed(_)));
    assert!(text.contains("  ! Email must be a valid email address"));
    assert!(text.contains("Email* [bob]: "));
    assert!(text.contains("== Step 3 of 3: Terms =="));
    assert_eq!(submitter.calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn rejection_shows_banner_and_keeps_entries() {
    let (controller, submitter) = controller(1);

    // Enter on the final step keeps the ticked box and submits again.
    let (outcome, text) = drive(&controller, "ann@x.com\nAnn\ny\n\n").await;

    match outcome {
        WizardOutcome::Completed(snapshot) => {
            assert_eq!(snapshot.values["email"].as_text(), Some("ann@x.com"));
        }
        other => panic!("expected completion, got {other:?}"),
    }
    assert!(text.contains("!! Insufficient funds"));
    assert!(text.contains("Terms* [y/n] [yes]: "));
    assert_eq!(submitter.calls.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn back_returns_to_previous_step_with_values() {
    let (controller, _) = controller(0);

    let (outcome, text) = drive(&controller, "ann@x.com\n:back\n\n:quit\n").await;

    assert!(text.contains("Email* [ann@x.com]: "));
    match outcome {
        WizardOutcome::Abandoned(snapshot) => assert_eq!(snapshot.step, 2),
        other => panic!("expected abandonment, got {other:?}"),
    }
}

#[tokio::test]
async fn end_of_input_abandons_without_submitting() {
    let (controller, submitter) = controller(0);

    let (outcome, _) = drive(&controller, "ann@x.com\n").await;

    assert!(matches!(outcome, WizardOutcome::Abandoned(_)));
    assert_eq!(submitter.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn unanswerable_checkbox_is_reprompted() {
    let (controller, _) = controller(0);

    let (outcome, text) = drive(&controller, "ann@x.com\nAnn\nmaybe\ny\n").await;

    assert!(text.contains("  ! Please answer y or n."));
    assert!(matches!(outcome, WizardOutcome::Completed(_)));
}
