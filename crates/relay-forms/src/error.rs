// File: src/error.rs
// Purpose: Failures a submission transport can report

/// Why a validated form did not reach the relay service
#[derive(Debug, thiserror::Error)]
pub enum SubmitError {
    /// No endpoint configured for the form
    #[error("no submission endpoint configured")]
    MissingEndpoint,

    #[error("invalid submission endpoint '{url}': {reason}")]
    InvalidEndpoint { url: String, reason: String },

    /// The HTTP client could not be built
    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    /// Network-level failure: DNS, refused connection, TLS and so on
    #[error("request failed: {0}")]
    Transport(String),

    /// Response arrived with a non-success status
    #[error("submission rejected with status {status}")]
    Rejected { status: u16, messages: Vec<String> },
}

impl SubmitError {
    /// Configuration problems are not worth retrying without a fix
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            SubmitError::MissingEndpoint | SubmitError::InvalidEndpoint { .. } | SubmitError::Client(_)
        )
    }
}
