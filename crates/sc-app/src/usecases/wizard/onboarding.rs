use std::sync::Arc;

use async_trait::async_trait;
use tracing::{info, warn};

use sc_core::flows::onboarding::{self, onboarding_flow};
use sc_core::ports::ClockPort;
use sc_core::wizard::WizardPayload;
use sc_core::{UserId, UserSession};

use crate::deps::WizardDeps;
use crate::usecases::session::SessionService;
use crate::usecases::wizard::{StartFlowError, SubmitError, WizardController, WizardSubmitter};

const REGISTRATION_FAILED: &str = "Registration failed. Please try again.";

/// Creates the investor's session from the collected identity.
///
/// Account creation is local: the id is the submission timestamp.
pub struct OnboardingSubmitter {
    session: Arc<SessionService>,
    clock: Arc<dyn ClockPort>,
}

impl OnboardingSubmitter {
    pub fn new(session: Arc<SessionService>, clock: Arc<dyn ClockPort>) -> Self {
        Self { session, clock }
    }

    fn display_name(payload: &WizardPayload) -> String {
        [
            onboarding::FIRST_NAME,
            onboarding::MIDDLE_NAME,
            onboarding::LAST_NAME,
        ]
        .iter()
        .filter_map(|field| payload.text(field))
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
    }
}

#[async_trait]
impl WizardSubmitter for OnboardingSubmitter {
    async fn submit(&self, payload: &WizardPayload) -> Result<(), SubmitError> {
        let email = payload
            .text(onboarding::EMAIL)
            .ok_or_else(|| SubmitError::Rejected(REGISTRATION_FAILED.into()))?;
        let id = UserId::new(u64::try_from(self.clock.now_ms()).unwrap_or_default());
        let session = UserSession::new(Self::display_name(payload), email, id);

        self.session.sign_in(session).await.map_err(|err| {
            warn!(error = %err, "failed to persist new account session");
            SubmitError::Rejected(REGISTRATION_FAILED.into())
        })?;
        info!(user_id = %id, "investor account created");
        Ok(())
    }
}

/// Opens the onboarding wizard.
pub struct StartOnboarding {
    session: Arc<SessionService>,
    deps: WizardDeps,
}

impl StartOnboarding {
    pub fn new(session: Arc<SessionService>, deps: WizardDeps) -> Self {
        Self { session, deps }
    }

    pub async fn execute(&self) -> Result<WizardController, StartFlowError> {
        let definition = onboarding_flow()?;
        let submitter = Arc::new(OnboardingSubmitter::new(
            self.session.clone(),
            self.deps.clock.clone(),
        ));
        let controller = WizardController::new(definition, submitter, self.deps.clone());
        controller.restore_draft().await;
        Ok(controller)
    }
}
