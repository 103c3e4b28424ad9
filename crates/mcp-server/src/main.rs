//! SOAR MCP Server
//!
//! Exposes SOAR marketplace actions and case management to LLM agents via
//! the Model Context Protocol (MCP). Runs over `stdio` transport.

use std::time::Duration;

use clap::Parser;
use rmcp::{ServiceExt, transport::stdio};
use soar_ops::{SoarConfig, SoarOps, parse_integrations};
use tracing_subscriber::{EnvFilter, fmt};

mod actions;
mod resources;
mod server;
mod tools;

use server::SoarMcpServer;

/// SOAR MCP Server: expose marketplace actions to AI agents.
///
/// Flags override the `SOAR_URL`, `SOAR_APP_KEY`, `SOAR_TIMEOUT_SECS` and
/// `SOAR_INTEGRATIONS` environment variables.
#[derive(Parser, Debug)]
#[command(name = "soar-mcp-server", version, about)]
struct Args {
    /// SOAR server URL.
    #[arg(long)]
    url: Option<String>,

    /// Application key for authentication.
    #[arg(long)]
    app_key: Option<String>,

    /// Request timeout in seconds [default: 30].
    #[arg(long)]
    timeout_secs: Option<u64>,

    /// Marketplace integrations to expose (e.g. `Slack,CiscoAMP`).
    #[arg(long, value_delimiter = ',')]
    integrations: Vec<String>,
}

impl Args {
    /// Layer the command-line flags over `base`.
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
    // stdout is the transport; logs go to stderr.
    fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()))
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();

    let config = Args::parse().config(SoarConfig::from_env());

    let ops = SoarOps::connect(&config).await?;

    tracing::info!(url = %config.url, "starting SOAR MCP server");

    let service = SoarMcpServer::new(ops).serve(stdio()).await?;

    service.waiting().await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn env() -> SoarConfig {
        SoarConfig::from_lookup(|key| match key {
            "SOAR_URL" => Some("https://env.example.com".into()),
            "SOAR_APP_KEY" => Some("env-key".into()),
            "SOAR_INTEGRATIONS" => Some("Slack".into()),
            _ => None,
        })
    }

    #[test]
    fn environment_fills_unset_flags() {
        let config = Args::parse_from(["soar-mcp-server"]).config(env());
        assert_eq!(config.url, "https://env.example.com");
        assert_eq!(config.app_key.as_deref(), Some("env-key"));
        assert_eq!(config.timeout, None);
        assert_eq!(config.integrations, vec!["Slack"]);
    }

    #[test]
    fn flags_override_environment() {
        let args = Args::parse_from([
            "soar-mcp-server",
            "--url",
            "https://flag.example.com",
            "--timeout-secs",
            "5",
            "--integrations",
            "Shodan, MISP",
        ]);
        let config = args.config(env());
        assert_eq!(config.url, "https://flag.example.com");
        assert_eq!(config.app_key.as_deref(), Some("env-key"));
        assert_eq!(config.timeout, Some(Duration::from_secs(5)));
        assert_eq!(config.integrations, vec!["Shodan", "MISP"]);
    }
}
