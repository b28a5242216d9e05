// File: src/events.rs
// Purpose: Translate UI events into pipeline calls

use crate::pipeline::{FormPipeline, SubmissionOutcome};
use crate::surface::{FormSurface, StatusSurface};
use relay_forms_validation::FieldResult;

/// Events a form surface emits
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormEvent {
    /// Focus left a field
    Blur(String),
    /// A field's value changed
    Input(String),
    /// The user asked to send the form
    Submit,
}

/// What handling an event produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventOutcome {
    Field(FieldResult),
    Submitted(SubmissionOutcome),
    /// Nothing to do: an unflagged input, a busy form or a tripped decoy
    Ignored,
}

/// Route one event to the pipeline and wait for it to finish
pub async fn dispatch<F, S>(pipeline: &FormPipeline<F, S>, event: FormEvent) -> EventOutcome
where
    F: FormSurface,
    S: StatusSurface,
{
    match event {
        FormEvent::Blur(field) => EventOutcome::Field(pipeline.check_field(&field, true)),
        FormEvent::Input(field) => pipeline
            .recheck_field(&field)
            .map_or(EventOutcome::Ignored, EventOutcome::Field),
        FormEvent::Submit => pipeline
            .submit()
            .await
            .map_or(EventOutcome::Ignored, EventOutcome::Submitted),
    }
}
