//! Error types for the operations layer.

use thiserror::Error;

/// Errors from the operations layer.
#[derive(Debug, Error)]
pub enum OpsError {
    /// Configuration error.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// Binding to the backend failed at startup.
    #[error(transparent)]
    Bind(#[from] soar_marketplace::BindError),

    /// Error from the underlying HTTP client.
    #[error(transparent)]
    Client(#[from] soar_client::Error),

    /// No enabled action has this tool name.
    #[error("unknown tool '{0}'")]
    UnknownTool(String),

    /// Tool arguments failed validation.
    #[error(transparent)]
    Arguments(#[from] soar_core::ArgumentError),
}
