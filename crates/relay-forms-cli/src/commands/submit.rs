use anyhow::{Context, Result};
use colored::Colorize;
use relay_forms::{
    Config, FormPipeline, HttpTransport, MailtoTransport, MemoryForm, SubmissionOutcome,
    SubmissionTransport,
};
use std::sync::Arc;
use tracing::info;

use crate::terminal::{print_field_errors, TerminalStatus};

fn print_mailto(url: &str) {
    println!("Open this link to send the message:");
    println!("  {}", url.cyan());
}

fn transport(config: &Config, mailto: Option<String>) -> Result<Arc<dyn SubmissionTransport>> {
    let recipient = mailto.or_else(|| {
        // A configured mailto block only applies when no endpoint is set
        config
            .form
            .endpoint
            .is_none()
            .then(|| config.mailto.as_ref().map(|m| m.recipient.clone()))
            .flatten()
    });

    if let Some(recipient) = recipient {
        let subject = config
            .mailto
            .as_ref()
            .map(|m| m.subject.clone())
            .unwrap_or_else(|| "Portfolio Contact".to_string());
        info!(recipient = %recipient, "Using mailto transport");
        return Ok(Arc::new(MailtoTransport::new(recipient, subject, Arc::new(print_mailto))));
    }

    let http = HttpTransport::new(config.form.endpoint.clone())
        .context("Failed to set up HTTP transport")?;
    Ok(Arc::new(http))
}

/// Returns `true` only when the form was delivered (or handed to the mail client)
pub async fn execute(config: &Config, fields: Vec<(String, String)>, mailto: Option<String>) -> Result<bool> {
    let form = MemoryForm::with_values(fields);
    let pipeline = FormPipeline::from_config(form, TerminalStatus, config, transport(config, mailto)?);

    println!("{}", "Submitting form...".green().bold());

    let outcome = pipeline.submit().await;
    match &outcome {
        Some(SubmissionOutcome::ValidationRejected) => {
            let errors: Vec<(&str, String)> = pipeline
                .rules()
                .field_names()
                .filter_map(|field| pipeline.form().error(field).map(|message| (field, message)))
                .collect();
            print_field_errors(errors.iter().map(|(field, message)| (*field, message.as_str())));
        }
        Some(outcome) => {
            info!(outcome = ?outcome, "Submission finished");
        }
        None => {
            println!("{}", "Submission dropped".yellow());
        }
    }

    Ok(matches!(outcome, Some(SubmissionOutcome::Success)))
}
