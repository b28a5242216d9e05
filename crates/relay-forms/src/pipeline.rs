// File: src/pipeline.rs
// Purpose: Collect, validate and submit a form as an explicit state machine

use crate::config::{Config, Messages};
use crate::error::SubmitError;
use crate::surface::{FormSurface, StatusKind, StatusSurface};
use crate::transport::SubmissionTransport;
use relay_forms_validation::{validate_field, validate_form, FieldResult, FormValues, RuleSet, ValidationResult};
use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, MutexGuard};
use tracing::{debug, info, warn};

/// Where the pipeline is in a submit attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelineState {
    Idle,
    Validating,
    Rejected,
    Submitting,
    Succeeded,
    Failed,
}

/// Result of one submit attempt that was not silently dropped
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionOutcome {
    Success,
    ValidationRejected,
    TransportError(String),
    ServerRejected { status: u16, messages: Vec<String> },
    Misconfigured(String),
}

impl SubmissionOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, SubmissionOutcome::Success)
    }

    /// Text for the status region
    pub fn status_message(&self, messages: &Messages) -> String {
        match self {
            SubmissionOutcome::Success => messages.success.clone(),
            SubmissionOutcome::ValidationRejected => messages.rejected.clone(),
            SubmissionOutcome::TransportError(_) => messages.transport.clone(),
            SubmissionOutcome::ServerRejected { messages: reasons, .. } if !reasons.is_empty() => {
                reasons.join(", ")
            }
            SubmissionOutcome::ServerRejected { .. } => messages.generic.clone(),
            SubmissionOutcome::Misconfigured(_) => messages.misconfigured.clone(),
        }
    }

    fn status_kind(&self) -> StatusKind {
        if self.is_success() {
            StatusKind::Success
        } else {
            StatusKind::Error
        }
    }
}

impl From<SubmitError> for SubmissionOutcome {
    fn from(err: SubmitError) -> Self {
        match err {
            SubmitError::Transport(detail) => SubmissionOutcome::TransportError(detail),
            SubmitError::Rejected { status, messages } => {
                SubmissionOutcome::ServerRejected { status, messages }
            }
            other => SubmissionOutcome::Misconfigured(other.to_string()),
        }
    }
}

fn lock(state: &Mutex<PipelineState>) -> MutexGuard<'_, PipelineState> {
    state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Holds the submit control busy for the lifetime of a request. Dropping it,
/// including when the submit future itself is dropped, re-enables the control
/// and returns the pipeline to idle.
struct InFlight<'a, F: FormSurface> {
    form: &'a F,
    state: &'a Mutex<PipelineState>,
}

impl<'a, F: FormSurface> InFlight<'a, F> {
    fn begin(form: &'a F, state: &'a Mutex<PipelineState>) -> Self {
        form.set_busy(true);
        Self { form, state }
    }
}

impl<F: FormSurface> Drop for InFlight<'_, F> {
    fn drop(&mut self) {
        self.form.set_busy(false);
        *lock(self.state) = PipelineState::Idle;
    }
}

/// One contact form: its rules, surfaces and transport.
///
/// All operations take `&self`; a second `submit` while one is in flight is
/// ignored rather than queued.
pub struct FormPipeline<F: FormSurface, S: StatusSurface> {
    form: F,
    status: S,
    rules: Arc<RuleSet>,
    transport: Arc<dyn SubmissionTransport>,
    decoy_field: Option<String>,
    hidden: BTreeMap<String, String>,
    messages: Messages,
    state: Mutex<PipelineState>,
}

impl<F: FormSurface, S: StatusSurface> FormPipeline<F, S> {
    pub fn new(form: F, status: S, rules: Arc<RuleSet>, transport: Arc<dyn SubmissionTransport>) -> Self {
        Self {
            form,
            status,
            rules,
            transport,
            decoy_field: None,
            hidden: BTreeMap::new(),
            messages: Messages::default(),
            state: Mutex::new(PipelineState::Idle),
        }
    }

    /// Build from configuration: rules, decoy field, hidden values, messages
    pub fn from_config(form: F, status: S, config: &Config, transport: Arc<dyn SubmissionTransport>) -> Self {
        Self::new(form, status, Arc::new(config.rules()), transport)
            .with_decoy_field(config.form.decoy_field.clone())
            .with_hidden(config.form.hidden.clone())
            .with_messages(config.messages.clone())
    }

    pub fn with_decoy_field(mut self, field: impl Into<String>) -> Self {
        let field = field.into();
        self.decoy_field = (!field.trim().is_empty()).then_some(field);
        self
    }

    pub fn with_hidden(mut self, hidden: BTreeMap<String, String>) -> Self {
        self.hidden = hidden;
        self
    }

    pub fn with_messages(mut self, messages: Messages) -> Self {
        self.messages = messages;
        self
    }

    pub fn form(&self) -> &F {
        &self.form
    }

    pub fn status(&self) -> &S {
        &self.status
    }

    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    pub fn state(&self) -> PipelineState {
        *lock(&self.state)
    }

    fn transition(&self, to: PipelineState) {
        let mut state = lock(&self.state);
        debug!(from = ?*state, to = ?to, "Pipeline transition");
        *state = to;
    }

    fn capture(&self) -> FormValues {
        FormValues::capture(self.rules.field_names(), |field| self.form.value(field))
    }

    fn display(&self, field: &str, result: &FieldResult) {
        self.form.set_error(field, result.message());
        self.form.set_invalid(field, !result.is_valid());
    }

    /// Validate one field, as on blur. With `display` the error slot and
    /// invalid marker are updated; without it the check is silent.
    pub fn check_field(&self, field: &str, display: bool) -> FieldResult {
        let value = self.form.value(field);
        let result = validate_field(self.rules.get(field), value.as_deref());
        if display {
            self.display(field, &result);
        }
        result
    }

    /// Revalidate a field the user is editing, but only once it has been
    /// flagged, so errors clear as soon as the input becomes acceptable.
    pub fn recheck_field(&self, field: &str) -> Option<FieldResult> {
        if !self.form.is_invalid(field) {
            return None;
        }
        Some(self.check_field(field, true))
    }

    /// Validate every configured field in declaration order
    pub fn validate(&self, display: bool) -> ValidationResult {
        let result = validate_form(&self.capture(), &self.rules);
        if display {
            for (field, field_result) in result.iter() {
                self.display(field, field_result);
            }
        }
        result
    }

    fn decoy_tripped(&self) -> bool {
        self.decoy_field
            .as_deref()
            .and_then(|field| self.form.value(field))
            .is_some_and(|value| !value.trim().is_empty())
    }

    fn payload(&self) -> FormValues {
        let mut payload = self.capture();
        for (field, value) in &self.hidden {
            payload.insert(field.clone(), value);
        }
        payload
    }

    /// Run one submit attempt.
    ///
    /// Returns `None` when the attempt is dropped: a submission is already in
    /// flight, or the decoy field holds a value. Neither case touches the
    /// status region.
    pub async fn submit(&self) -> Option<SubmissionOutcome> {
        {
            let mut state = lock(&self.state);
            if *state != PipelineState::Idle {
                debug!(state = ?*state, "Submit ignored while busy");
                return None;
            }
            if self.decoy_tripped() {
                debug!("Decoy field filled, dropping submission");
                return None;
            }
            *state = PipelineState::Validating;
        }

        let validation = self.validate(true);
        if let Some(first) = validation.first_invalid() {
            self.transition(PipelineState::Rejected);
            info!(errors = validation.error_count(), first = %first, "Form rejected by validation");

            let outcome = SubmissionOutcome::ValidationRejected;
            self.status.show(StatusKind::Error, &outcome.status_message(&self.messages));
            self.form.focus(first);
            self.transition(PipelineState::Idle);
            return Some(outcome);
        }

        self.transition(PipelineState::Submitting);
        let _in_flight = InFlight::begin(&self.form, &self.state);

        let outcome = match self.transport.submit(&self.payload()).await {
            Ok(()) => SubmissionOutcome::Success,
            Err(err) => {
                warn!(error = %err, "Form submission failed");
                SubmissionOutcome::from(err)
            }
        };

        if outcome.is_success() {
            self.transition(PipelineState::Succeeded);
            self.form.reset();
            for field in self.rules.field_names() {
                self.display(field, &FieldResult::Valid);
            }
            self.status
                .show(StatusKind::Success, self.transport.success_message(&self.messages));
            self.status.focus();
            info!("Form submitted");
        } else {
            self.transition(PipelineState::Failed);
            self.status.show(outcome.status_kind(), &outcome.status_message(&self.messages));
        }

        Some(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_rejection_joins_messages() {
        let outcome = SubmissionOutcome::ServerRejected {
            status: 422,
            messages: vec!["X".to_string(), "Y".to_string()],
        };
        assert_eq!(outcome.status_message(&Messages::default()), "X, Y");
    }

    #[test]
    fn test_server_rejection_without_details_is_generic() {
        let outcome = SubmissionOutcome::ServerRejected { status: 500, messages: vec![] };
        assert_eq!(outcome.status_message(&Messages::default()), Messages::default().generic);
    }

    #[test]
    fn test_submit_error_mapping() {
        assert_eq!(
            SubmissionOutcome::from(SubmitError::Transport("refused".to_string())),
            SubmissionOutcome::TransportError("refused".to_string())
        );
        assert!(matches!(
            SubmissionOutcome::from(SubmitError::MissingEndpoint),
            SubmissionOutcome::Misconfigured(_)
        ));
        assert_eq!(
            SubmissionOutcome::from(SubmitError::Rejected { status: 400, messages: vec!["bad".to_string()] }),
            SubmissionOutcome::ServerRejected { status: 400, messages: vec!["bad".to_string()] }
        );
    }

    #[test]
    fn test_status_kind() {
        assert_eq!(SubmissionOutcome::Success.status_kind(), StatusKind::Success);
        assert_eq!(SubmissionOutcome::ValidationRejected.status_kind(), StatusKind::Error);
    }
}
