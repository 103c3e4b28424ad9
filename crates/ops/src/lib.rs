//! Common operations layer for the SOAR CLI and MCP server.
//!
//! Wraps [`soar_client::SoarClient`] with configuration, startup binding and
//! the marketplace catalog. Both the CLI and MCP server build on top of this
//! crate.

mod config;
mod error;

pub use config::{SoarConfig, parse_integrations};
pub use error::OpsError;

use std::sync::Arc;

use serde_json::{Map, Value};
use soar_client::{SoarClient, SoarClientBuilder};
use soar_core::{ActionCall, ActionDescriptor, ActionOutcome, ScopeSet};
use soar_marketplace::{ActionCatalog, Bindings, invoke_action};
use tracing::info;

/// Re-export client, core and marketplace types for consumers.
pub use soar_client;
pub use soar_core;
pub use soar_marketplace;

/// Build the HTTP client described by `config` without contacting the server.
pub fn build_client(config: &SoarConfig) -> Result<SoarClient, OpsError> {
    if config.url.trim().is_empty() {
        return Err(OpsError::Configuration(
            "SOAR_URL is not set; pass --url or set the SOAR_URL environment variable".into(),
        ));
    }

    let mut builder = SoarClientBuilder::new(&config.url);

    if let Some(timeout) = config.timeout {
        builder = builder.timeout(timeout);
    }

    if let Some(ref app_key) = config.app_key {
        builder = builder.app_key(app_key);
    }

    builder
        .build()
        .map_err(|e| OpsError::Configuration(e.to_string()))
}

/// High-level operations handle for SOAR.
///
/// Holds the bound backend and the enabled catalog. Cheap to clone.
#[derive(Clone)]
pub struct SoarOps {
    bindings: Arc<Bindings<SoarClient>>,
    catalog: Arc<ActionCatalog>,
}

impl SoarOps {
    /// Build the client, fetch the valid scopes and load the enabled
    /// integrations.
    pub async fn connect(config: &SoarConfig) -> Result<Self, OpsError> {
        let client = build_client(config)?;
        let bindings = Bindings::bind(client).await?;
        let catalog = ActionCatalog::with_enabled(&config.integrations);
        info!(
            url = %config.url,
            tools = catalog.len(),
            "SOAR operations ready"
        );
        Ok(Self::new(bindings, catalog))
    }

    /// Assemble from existing parts.
    pub fn new(bindings: Bindings<SoarClient>, catalog: ActionCatalog) -> Self {
        Self {
            bindings: Arc::new(bindings),
            catalog: Arc::new(catalog),
        }
    }

    /// Access the underlying HTTP client directly.
    pub fn client(&self) -> &SoarClient {
        self.bindings.backend()
    }

    pub fn bindings(&self) -> &Bindings<SoarClient> {
        &self.bindings
    }

    pub fn catalog(&self) -> &ActionCatalog {
        &self.catalog
    }

    pub fn scopes(&self) -> &ScopeSet {
        self.bindings.scopes()
    }

    /// Run an action with already validated arguments.
    pub async fn invoke(&self, descriptor: &ActionDescriptor, call: ActionCall) -> ActionOutcome {
        invoke_action(&self.bindings, descriptor, call).await
    }

    /// Look up a tool by name, validate its raw arguments and run it.
    ///
    /// Unknown tools and bad arguments are errors; everything that happens
    /// once the action starts is reported in the outcome.
    pub async fn invoke_tool(
        &self,
        tool_name: &str,
        arguments: &Map<String, Value>,
    ) -> Result<ActionOutcome, OpsError> {
        let descriptor = self
            .catalog
            .get(tool_name)
            .ok_or_else(|| OpsError::UnknownTool(tool_name.to_owned()))?;
        let call = descriptor.bind_arguments(arguments)?;
        Ok(self.invoke(descriptor, call).await)
    }
}
