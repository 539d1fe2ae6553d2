/// Failure talking to the portal API.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The server answered but refused; `message` is what it said.
    #[error("{message}")]
    Rejected {
        status: Option<u16>,
        message: String,
    },
    /// The request never produced a response.
    #[error("network error: {0}")]
    Network(String),
    #[error("request timed out")]
    TimedOut,
    /// A success response whose body did not have the expected shape.
    #[error("unexpected response body: {0}")]
    Decode(String),
}

impl ApiError {
    pub fn rejected(status: Option<u16>, message: impl Into<String>) -> Self {
        Self::Rejected {
            status,
            message: message.into(),
        }
    }
}
