//! # relay-forms
//!
//! Client-side validate-then-submit pipeline for contact forms that post to a
//! third-party form relay (Formspree and the like).
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use relay_forms::{Config, FormPipeline, HttpTransport, MemoryForm, MemoryStatus};
//! use std::sync::Arc;
//!
//! let config = Config::load_default()?;
//! let transport = Arc::new(HttpTransport::new(config.form.endpoint.clone())?);
//! let form = MemoryForm::with_values([("name", "Ada"), ("email", "ada@example.com"), ("message", "Hello there!")]);
//! let pipeline = FormPipeline::from_config(form, MemoryStatus::new(), &config, transport);
//!
//! match pipeline.submit().await {
//!     Some(outcome) => println!("{:?}", outcome),
//!     None => println!("dropped"),
//! }
//! ```
//!
//! ## Architecture
//!
//! - **`surface`** - traits for the field surface and status region, plus in-memory doubles
//! - **`transport`** - HTTP relay and `mailto:` transports
//! - **`pipeline`** - the `Idle -> Validating -> Submitting -> Idle` state machine
//! - **`events`** - adapter from blur/input/submit events to pipeline calls
//! - **`config`** - `relay-forms.toml` loading
//!
//! Field rules and validation live in `relay-forms-validation` and are
//! re-exported here.

pub mod config;
pub mod error;
pub mod events;
pub mod pipeline;
pub mod surface;
pub mod transport;

pub use config::{Config, FormConfig, MailtoConfig, Messages, DEFAULT_CONFIG_PATH};
pub use error::SubmitError;
pub use events::{dispatch, EventOutcome, FormEvent};
pub use pipeline::{FormPipeline, PipelineState, SubmissionOutcome};
pub use surface::{FormSurface, MemoryForm, MemoryStatus, StatusKind, StatusSurface};
pub use transport::{
    compose_mailto, parse_rejection, HttpTransport, MailtoOpener, MailtoTransport, SubmissionTransport,
};

pub use relay_forms_validation as validation;
pub use relay_forms_validation::{FieldResult, FieldRule, FormValues, RuleSet, ValidationResult};
