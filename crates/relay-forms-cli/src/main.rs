mod commands;
mod terminal;

use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use relay_forms::{Config, DEFAULT_CONFIG_PATH};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// Environment variable that overrides the configured endpoint
const ENDPOINT_ENV: &str = "RELAY_FORMS_ENDPOINT";

#[derive(Parser)]
#[command(name = "relay-forms")]
#[command(version, about = "Validate and submit contact forms to a form relay", long_about = None)]
struct Cli {
    /// Path to the configuration file
    #[arg(short, long, global = true, default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the field rules in validation order
    Rules,

    /// Validate field values without sending anything
    Validate {
        /// Field value as name=value (repeatable)
        #[arg(short, long = "field", value_parser = parse_field)]
        fields: Vec<(String, String)>,
    },

    /// Validate and submit field values
    Submit {
        /// Field value as name=value (repeatable)
        #[arg(short, long = "field", value_parser = parse_field)]
        fields: Vec<(String, String)>,

        /// Relay endpoint, overriding config and environment
        #[arg(short, long, conflicts_with = "mailto")]
        endpoint: Option<String>,

        /// Compose in a mail client for this address instead of posting
        #[arg(short, long)]
        mailto: Option<String>,
    },
}

fn parse_field(raw: &str) -> Result<(String, String)> {
    match raw.split_once('=') {
        Some((name, value)) if !name.trim().is_empty() => {
            Ok((name.trim().to_string(), value.to_string()))
        }
        _ => bail!("expected name=value, got '{}'", raw),
    }
}

/// Exits non-zero when validation fails or a submission is not delivered
#[tokio::main]
async fn main() -> Result<ExitCode> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut config = Config::load(&cli.config)?;
    config.override_endpoint(std::env::var(ENDPOINT_ENV).ok());

    let succeeded = match cli.command {
        Commands::Rules => {
            commands::rules::execute(&config);
            true
        }
        Commands::Validate { fields } => commands::validate::execute(&config, fields),
        Commands::Submit { fields, endpoint, mailto } => {
            config.override_endpoint(endpoint);
            commands::submit::execute(&config, fields, mailto).await?
        }
    };

    Ok(if succeeded { ExitCode::SUCCESS } else { ExitCode::FAILURE })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_field() {
        assert_eq!(
            parse_field("email=a@b.com").unwrap(),
            ("email".to_string(), "a@b.com".to_string())
        );
        assert_eq!(
            parse_field("message=x=y").unwrap(),
            ("message".to_string(), "x=y".to_string())
        );
        assert_eq!(parse_field("name=").unwrap(), ("name".to_string(), String::new()));
        assert!(parse_field("novalue").is_err());
        assert!(parse_field("=value").is_err());
    }

    #[test]
    fn test_cli_parses_submit() {
        let cli = Cli::try_parse_from([
            "relay-forms",
            "submit",
            "-f",
            "name=Ada",
            "--field",
            "email=ada@example.com",
            "--endpoint",
            "https://relay.example/f/1",
        ])
        .unwrap();

        match cli.command {
            Commands::Submit { fields, endpoint, mailto } => {
                assert_eq!(fields.len(), 2);
                assert_eq!(endpoint.as_deref(), Some("https://relay.example/f/1"));
                assert!(mailto.is_none());
            }
            _ => panic!("expected submit"),
        }
    }

    #[test]
    fn test_endpoint_conflicts_with_mailto() {
        let result = Cli::try_parse_from([
            "relay-forms",
            "submit",
            "--endpoint",
            "https://relay.example/f/1",
            "--mailto",
            "me@example.com",
        ]);
        assert!(result.is_err());
    }
}
