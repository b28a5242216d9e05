// File: src/transport/mailto.rs
// Purpose: Hand the message to the user's mail client instead of a relay

use super::SubmissionTransport;
use crate::config::Messages;
use crate::error::SubmitError;
use async_trait::async_trait;
use relay_forms_validation::FormValues;
use std::sync::Arc;
use tracing::info;

/// Opens a `mailto:` URL: a browser navigation, an OS handler, or a print
pub trait MailtoOpener: Send + Sync {
    fn open(&self, url: &str);
}

impl<F: Fn(&str) + Send + Sync> MailtoOpener for F {
    fn open(&self, url: &str) {
        self(url)
    }
}

/// Build the compose URL. The body lists name and email, a blank line, then
/// the message; fields the form does not have are left out.
pub fn compose_mailto(recipient: &str, subject: &str, payload: &FormValues) -> String {
    let mut lines = Vec::new();
    if let Some(name) = payload.get("name") {
        lines.push(format!("Name: {}", name));
    }
    if let Some(email) = payload.get("email") {
        lines.push(format!("Email: {}", email));
    }
    if let Some(message) = payload.get("message") {
        if !lines.is_empty() {
            lines.push(String::new());
        }
        lines.push(message.to_string());
    }

    format!(
        "mailto:{}?subject={}&body={}",
        recipient,
        urlencoding::encode(subject),
        urlencoding::encode(&lines.join("\n"))
    )
}

pub struct MailtoTransport {
    recipient: String,
    subject: String,
    opener: Arc<dyn MailtoOpener>,
}

impl MailtoTransport {
    pub fn new(
        recipient: impl Into<String>,
        subject: impl Into<String>,
        opener: Arc<dyn MailtoOpener>,
    ) -> Self {
        Self {
            recipient: recipient.into(),
            subject: subject.into(),
            opener,
        }
    }
}

/// A recipient must be a single bare address; anything that would spill
/// into the query part of the URL is refused.
fn check_recipient(recipient: &str) -> Result<(), SubmitError> {
    if recipient.trim().is_empty() {
        return Err(SubmitError::MissingEndpoint);
    }

    let reason = if recipient.contains(['?', '&', '#', ',']) {
        "recipient must not contain '?', '&', '#' or ','"
    } else if recipient.chars().any(char::is_whitespace) {
        "recipient must not contain whitespace"
    } else if !recipient.contains('@') {
        "recipient is not an email address"
    } else {
        return Ok(());
    };

    Err(SubmitError::InvalidEndpoint {
        url: recipient.to_string(),
        reason: reason.to_string(),
    })
}

#[async_trait]
impl SubmissionTransport for MailtoTransport {
    async fn submit(&self, payload: &FormValues) -> Result<(), SubmitError> {
        check_recipient(&self.recipient)?;

        let url = compose_mailto(&self.recipient, &self.subject, payload);
        info!(recipient = %self.recipient, "Opening mail client");
        self.opener.open(&url);
        Ok(())
    }

    /// Nothing has been sent yet; the user still has to press send
    fn success_message<'a>(&self, messages: &'a Messages) -> &'a str {
        &messages.prepared
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::sync::Mutex;

    fn payload() -> FormValues {
        [("name", "Ada"), ("email", "ada@example.com"), ("message", "Hi & bye")]
            .into_iter()
            .collect()
    }

    #[test]
    fn test_compose_mailto() {
        let url = compose_mailto("contact@example.com", "Portfolio Contact", &payload());
        assert_eq!(
            url,
            "mailto:contact@example.com?subject=Portfolio%20Contact\
             &body=Name%3A%20Ada%0AEmail%3A%20ada%40example.com%0A%0AHi%20%26%20bye"
        );
    }

    #[test]
    fn test_compose_without_identity_fields() {
        let payload: FormValues = [("message", "Just this")].into_iter().collect();
        let url = compose_mailto("me@example.com", "Hi", &payload);
        assert!(url.ends_with("&body=Just%20this"));
    }

    #[tokio::test]
    async fn test_transport_hands_url_to_opener() {
        let opened = Arc::new(Mutex::new(Vec::<String>::new()));
        let sink = opened.clone();
        let transport = MailtoTransport::new(
            "contact@example.com",
            "Portfolio Contact",
            Arc::new(move |url: &str| sink.lock().unwrap().push(url.to_string())),
        );

        transport.submit(&payload()).await.unwrap();

        let opened = opened.lock().unwrap();
        assert_eq!(opened.len(), 1);
        assert!(opened[0].starts_with("mailto:contact@example.com?subject="));
    }

    #[tokio::test]
    async fn test_blank_recipient_is_configuration_error() {
        let transport = MailtoTransport::new(" ", "s", Arc::new(|_: &str| {}));
        let err = transport.submit(&payload()).await.unwrap_err();
        assert!(err.is_configuration());
    }

    #[rstest]
    #[case("contact@example.com?bcc=spy@example.com")]
    #[case("contact@example.com&cc=spy@example.com")]
    #[case("contact@example.com#frag")]
    #[case("a@example.com,b@example.com")]
    #[case("contact @example.com")]
    #[case("not-an-address")]
    #[tokio::test]
    async fn test_unsafe_recipient_is_refused(#[case] recipient: &str) {
        let opened = Arc::new(Mutex::new(0usize));
        let sink = opened.clone();
        let transport = MailtoTransport::new(
            recipient,
            "s",
            Arc::new(move |_: &str| *sink.lock().unwrap() += 1),
        );

        let err = transport.submit(&payload()).await.unwrap_err();
        assert!(matches!(err, SubmitError::InvalidEndpoint { .. }));
        assert_eq!(*opened.lock().unwrap(), 0);
    }

    #[test]
    fn test_success_message_says_prepared() {
        let transport = MailtoTransport::new("me@example.com", "s", Arc::new(|_: &str| {}));
        let messages = Messages::default();
        assert_eq!(transport.success_message(&messages), messages.prepared);
    }
}
