// File: src/transport/http.rs
// Purpose: POST a form to a relay endpoint and classify the response

use super::{parse_rejection, SubmissionTransport};
use crate::error::SubmitError;
use async_trait::async_trait;
use relay_forms_validation::FormValues;
use reqwest::{header, Client, Url};
use tracing::{debug, instrument, warn};

/// Sends one url-encoded POST per submission. No retry and no explicit
/// timeout beyond the client's defaults.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
    endpoint: Option<String>,
}

impl HttpTransport {
    pub fn new(endpoint: Option<String>) -> Result<Self, SubmitError> {
        let client = Client::builder()
            .user_agent(concat!("relay-forms/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(SubmitError::Client)?;
        Ok(Self::with_client(client, endpoint))
    }

    pub fn with_client(client: Client, endpoint: Option<String>) -> Self {
        Self { client, endpoint }
    }

    pub fn endpoint(&self) -> Option<&str> {
        self.endpoint.as_deref()
    }

    fn resolve_endpoint(&self) -> Result<Url, SubmitError> {
        let raw = self
            .endpoint
            .as_deref()
            .map(str::trim)
            .filter(|e| !e.is_empty())
            .ok_or(SubmitError::MissingEndpoint)?;

        let url = Url::parse(raw).map_err(|e| SubmitError::InvalidEndpoint {
            url: raw.to_string(),
            reason: e.to_string(),
        })?;

        match url.scheme() {
            "http" | "https" => Ok(url),
            other => Err(SubmitError::InvalidEndpoint {
                url: raw.to_string(),
                reason: format!("unsupported scheme '{}'", other),
            }),
        }
    }
}

#[async_trait]
impl SubmissionTransport for HttpTransport {
    #[instrument(skip_all, fields(fields = payload.len()))]
    async fn submit(&self, payload: &FormValues) -> Result<(), SubmitError> {
        let url = self.resolve_endpoint()?;
        debug!(url = %url, "Posting form");

        let response = self
            .client
            .post(url.clone())
            .header(header::ACCEPT, "application/json")
            .form(payload)
            .send()
            .await
            .map_err(|e| {
                warn!(url = %url, error = %e, "Form submission failed to send");
                SubmitError::Transport(e.to_string())
            })?;

        let status = response.status();
        if status.is_success() {
            debug!(url = %url, status = %status, "Form accepted");
            return Ok(());
        }

        // An unreadable body still counts as a rejection, just without details
        let body = response.text().await.unwrap_or_default();
        let messages = parse_rejection(&body);
        warn!(url = %url, status = %status, messages = messages.len(), "Form rejected");

        Err(SubmitError::Rejected {
            status: status.as_u16(),
            messages,
        })
    }
}
