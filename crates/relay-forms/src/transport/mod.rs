//! Submission transports
//!
//! A transport receives a form that already passed validation and either
//! delivers it or explains why it could not. It never retries; resubmitting
//! is left to the user.

mod http;
mod mailto;
mod rejection;

pub use http::HttpTransport;
pub use mailto::{compose_mailto, MailtoOpener, MailtoTransport};
pub use rejection::parse_rejection;

use crate::config::Messages;
use crate::error::SubmitError;
use async_trait::async_trait;
use relay_forms_validation::FormValues;

#[async_trait]
pub trait SubmissionTransport: Send + Sync {
    /// Deliver the payload once
    async fn submit(&self, payload: &FormValues) -> Result<(), SubmitError>;

    /// Status text shown after `submit` returns `Ok`
    fn success_message<'a>(&self, messages: &'a Messages) -> &'a str {
        &messages.success
    }
}
