//! SOAR CLI
//!
//! A command-line interface for running SOAR marketplace actions and
//! managing cases.

mod commands;

use std::time::Duration;

use clap::{Parser, Subcommand};
use soar_ops::{SoarConfig, parse_integrations};
use tracing_subscriber::{EnvFilter, fmt};

/// SOAR CLI: run marketplace actions and manage cases.
///
/// Flags override the `SOAR_URL`, `SOAR_APP_KEY`, `SOAR_TIMEOUT_SECS` and
/// `SOAR_INTEGRATIONS` environment variables.
#[derive(Parser, Debug)]
#[command(name = "soar", version, about)]
struct Cli {
    /// SOAR server URL.
    #[arg(long, global = true)]
    url: Option<String>,

    /// Application key for authentication.
    #[arg(long, global = true)]
    app_key: Option<String>,

    /// Request timeout in seconds [default: 30].
    #[arg(long, global = true)]
    timeout_secs: Option<u64>,

    /// Marketplace integrations to enable (e.g. `Slack,CiscoAMP`).
    #[arg(long, value_delimiter = ',', global = true)]
    integrations: Vec<String>,

    /// Output format.
    #[arg(long, default_value = "text", global = true)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Clone, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List the built-in marketplace integrations.
    Integrations,
    /// Browse marketplace actions.
    Actions(commands::actions::ActionsArgs),
    /// Show the scopes the server accepts.
    Scopes,
    /// Run a marketplace action on a case.
    Invoke(commands::invoke::InvokeArgs),
    /// Manage cases.
    Cases(commands::cases::CasesArgs),
    /// Look up and search entities.
    Entities(commands::entities::EntitiesArgs),
}

impl Cli {
    /// Layer the global flags over `base`.
    fn config(&self, base: SoarConfig) -> SoarConfig {
        let mut config = base;
        if let Some(ref url) = self.url {
            config = config.with_url(url);
        }
        if let Some(ref key) = self.app_key {
            config = config.with_app_key(key);
        }
        if let Some(secs) = self.timeout_secs {
            config = config.with_timeout(Duration::from_secs(secs));
        }
        if !self.integrations.is_empty() {
            config = config.with_integrations(parse_integrations(&self.integrations.join(",")));
        }
        config
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = cli.config(SoarConfig::from_env());

    match cli.command {
        Command::Integrations => commands::integrations::run(&config, &cli.format),
        Command::Actions(ref args) => commands::actions::run(&config, args, &cli.format),
        Command::Scopes => commands::scopes::run(&config, &cli.format).await,
        Command::Invoke(ref args) => commands::invoke::run(&config, args, &cli.format).await,
        Command::Cases(ref args) => commands::cases::run(&config, args, &cli.format).await,
        Command::Entities(ref args) => commands::entities::run(&config, args, &cli.format).await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn env() -> SoarConfig {
        SoarConfig::from_lookup(|key| match key {
            "SOAR_URL" => Some("https://env.example.com".into()),
            "SOAR_TIMEOUT_SECS" => Some("60".into()),
            _ => None,
        })
    }

    #[test]
    fn environment_fills_unset_flags() {
        let cli = Cli::parse_from(["soar", "scopes"]);
        let config = cli.config(env());
        assert_eq!(config.url, "https://env.example.com");
        assert_eq!(config.timeout, Some(Duration::from_secs(60)));
        assert!(config.app_key.is_none());
        assert!(config.integrations.is_empty());
    }

    #[test]
    fn global_flags_after_subcommand_override_environment() {
        let cli = Cli::parse_from([
            "soar",
            "scopes",
            "--url",
            "https://flag.example.com",
            "--app-key",
            "flag-key",
            "--integrations",
            "Slack,CiscoAMP",
        ]);
        let config = cli.config(env());
        assert_eq!(config.url, "https://flag.example.com");
        assert_eq!(config.app_key.as_deref(), Some("flag-key"));
        assert_eq!(config.timeout, Some(Duration::from_secs(60)));
        assert_eq!(config.integrations, vec!["Slack", "CiscoAMP"]);
    }
}
