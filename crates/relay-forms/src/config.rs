// File: src/config.rs
// Purpose: Configuration parsing from relay-forms.toml

use anyhow::{Context, Result};
use relay_forms_validation::{contact_rules, RuleSet};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// Default config file name
pub const DEFAULT_CONFIG_PATH: &str = "relay-forms.toml";

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub form: FormConfig,

    /// Field rules in declaration order; the stock contact rules when omitted
    #[serde(default)]
    pub fields: Option<RuleSet>,

    #[serde(default)]
    pub messages: Messages,

    #[serde(default)]
    pub mailto: Option<MailtoConfig>,
}

/// Where and how the form is submitted
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormConfig {
    /// Relay endpoint, e.g. a Formspree form URL
    #[serde(default)]
    pub endpoint: Option<String>,

    /// Honeypot field; any value in it drops the submission
    #[serde(default = "default_decoy_field")]
    pub decoy_field: String,

    /// Static values appended to every payload (not validated)
    #[serde(default)]
    pub hidden: BTreeMap<String, String>,
}

/// Status texts shown to the user
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Messages {
    #[serde(default = "default_success")]
    pub success: String,

    /// Success text when the message was handed to the mail client
    #[serde(default = "default_prepared")]
    pub prepared: String,

    #[serde(default = "default_rejected")]
    pub rejected: String,

    #[serde(default = "default_transport")]
    pub transport: String,

    #[serde(default = "default_generic")]
    pub generic: String,

    #[serde(default = "default_misconfigured")]
    pub misconfigured: String,
}

/// Compose-in-mail-client fallback
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MailtoConfig {
    pub recipient: String,

    #[serde(default = "default_subject")]
    pub subject: String,
}

// Default values
fn default_decoy_field() -> String {
    "_gotcha".to_string()
}

fn default_success() -> String {
    "Thanks! Your message has been sent.".to_string()
}

fn default_prepared() -> String {
    "Thanks! Your message has been prepared in your email client.".to_string()
}

fn default_rejected() -> String {
    "Please fix the errors above.".to_string()
}

fn default_transport() -> String {
    "Network error. Please check your connection and try again.".to_string()
}

fn default_generic() -> String {
    "Oops! There was a problem submitting your form.".to_string()
}

fn default_misconfigured() -> String {
    "This form is not configured to send messages.".to_string()
}

fn default_subject() -> String {
    "Portfolio Contact".to_string()
}

// Default implementations
impl Default for FormConfig {
    fn default() -> Self {
        Self {
            endpoint: None,
            decoy_field: default_decoy_field(),
            hidden: BTreeMap::new(),
        }
    }
}

impl Default for Messages {
    fn default() -> Self {
        Self {
            success: default_success(),
            prepared: default_prepared(),
            rejected: default_rejected(),
            transport: default_transport(),
            generic: default_generic(),
            misconfigured: default_misconfigured(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        // Missing file means defaults
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;

        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {:?}", path))?;

        Ok(config)
    }

    /// Load configuration from default path (./relay-forms.toml)
    pub fn load_default() -> Result<Self> {
        Self::load(DEFAULT_CONFIG_PATH)
    }

    /// Configured rules, falling back to the contact form preset
    pub fn rules(&self) -> RuleSet {
        self.fields.clone().unwrap_or_else(contact_rules)
    }

    /// Replace the endpoint when `endpoint` is set and non-blank
    pub fn override_endpoint(&mut self, endpoint: Option<String>) {
        if let Some(endpoint) = endpoint.filter(|e| !e.trim().is_empty()) {
            self.form.endpoint = Some(endpoint);
        }
    }
}
