use async_trait::async_trait;

use sc_core::portal::ApiError;
use sc_core::wizard::{FormError, WizardPayload};

/// Why a submitter did not accept a payload.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmitError {
    /// Refused; the message is shown to the user as is.
    #[error("{0}")]
    Rejected(String),
    #[error("network error: {0}")]
    Network(String),
    #[error("request timed out")]
    TimedOut,
}

impl From<ApiError> for SubmitError {
    fn from(error: ApiError) -> Self {
        match error {
            ApiError::Rejected { message, .. } => SubmitError::Rejected(message),
            ApiError::Network(message) => SubmitError::Network(message),
            ApiError::TimedOut => SubmitError::TimedOut,
            ApiError::Decode(message) => SubmitError::Network(message),
        }
    }
}

impl From<SubmitError> for FormError {
    fn from(error: SubmitError) -> Self {
        match error {
            SubmitError::Rejected(message) => FormError::Rejected { message },
            SubmitError::Network(message) => FormError::Network { message },
            SubmitError::TimedOut => FormError::TimedOut,
        }
    }
}

/// Final step of a flow: turns the collected payload into an effect.
#[async_trait]
pub trait WizardSubmitter: Send + Sync {
    async fn submit(&self, payload: &WizardPayload) -> Result<(), SubmitError>;
}
