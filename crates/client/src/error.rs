//! Error types for the SOAR client.

use thiserror::Error;

/// Shown when the server's certificate cannot be verified.
pub const CERTIFICATE_ERROR_MESSAGE: &str = "SSL certificate verification failed when connecting to SOAR.\n\
This is commonly caused by missing or outdated CA certificates on this machine.\n\n\
To fix this issue:\n  \
Update the system CA certificate bundle (or set SSL_CERT_FILE to a valid bundle).\n  \
Then restart the MCP server.";

/// Errors that can occur when using the SOAR client.
#[derive(Debug, Error)]
pub enum Error {
    /// Connection error (network failure, DNS resolution, timeout, etc.).
    #[error("connection error: {0}")]
    Connection(String),

    /// TLS handshake or certificate verification failure.
    #[error("{0}")]
    Tls(String),

    /// Non-success HTTP status.
    #[error("HTTP {status}: {message}")]
    Http {
        /// HTTP status code.
        status: u16,
        /// Response body, if any.
        message: String,
    },

    /// Response deserialization error.
    #[error("failed to deserialize response: {0}")]
    Deserialization(String),

    /// Client configuration error.
    #[error("configuration error: {0}")]
    Configuration(String),
}

impl Error {
    /// Returns `true` if this error is retryable.
    ///
    /// Connection errors and HTTP 5xx errors return `true`.
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Connection(_) => true,
            Self::Http { status, .. } => *status >= 500,
            Self::Tls(_) | Self::Deserialization(_) | Self::Configuration(_) => false,
        }
    }

    /// Returns `true` if the server was never reached.
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Connection(_) | Self::Tls(_))
    }

    /// Classify a transport error from `reqwest` by walking its cause chain.
    pub(crate) fn from_transport(err: &reqwest::Error, base_url: &str) -> Self {
        // The top-level message embeds the request URL, so only causes are inspected.
        let chain = cause_chain(err);
        let causes = chain.get(1..).unwrap_or_default();

        if causes.iter().any(|m| is_certificate_failure(m)) {
            tracing::error!(error = %err, "SSL certificate verification failed");
            return Self::Tls(CERTIFICATE_ERROR_MESSAGE.to_owned());
        }

        if causes.iter().any(|m| is_tls_failure(m)) {
            tracing::error!(error = %err, "SSL/TLS error");
            return Self::Tls(format!(
                "An SSL/TLS error occurred when connecting to SOAR: {}\n\
                 Please verify that your SOAR_URL is correct and the server's \
                 SSL certificate is valid.",
                causes.last().map_or_else(|| err.to_string(), Clone::clone)
            ));
        }

        if err.is_connect() {
            tracing::error!(error = %err, "connection error");
            return Self::Connection(connection_message(base_url));
        }

        Self::Connection(err.to_string())
    }
}

/// Operator-facing message for an unreachable server.
pub fn connection_message(base_url: &str) -> String {
    format!(
        "Failed to connect to SOAR at '{base_url}'.\n\
         Please verify that:\n  \
         1. The SOAR_URL environment variable is set correctly.\n  \
         2. The SOAR server is reachable from your network.\n  \
         3. Any required VPN or proxy is active."
    )
}

fn cause_chain(err: &(dyn std::error::Error + 'static)) -> Vec<String> {
    let mut chain = Vec::new();
    let mut current = Some(err);
    while let Some(e) = current {
        chain.push(e.to_string());
        current = e.source();
    }
    chain
}

fn is_certificate_failure(message: &str) -> bool {
    let message = message.to_lowercase();
    message.contains("certificate_verify_failed")
        || message.contains("certificate verify failed")
        || message.contains("invalid peer certificate")
}

fn is_tls_failure(message: &str) -> bool {
    let message = message.to_lowercase();
    message.contains("tls") || message.contains("ssl") || message.contains("handshake")
}
