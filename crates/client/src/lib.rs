//! SOAR HTTP Client
//!
//! A native Rust client for the SOAR external REST API: valid scopes,
//! integration instances, manual action execution, case management and
//! entity lookups.
//!
//! # Quick Start
//!
//! ```no_run
//! use soar_client::SoarClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), soar_client::Error> {
//!     let client = SoarClient::builder("https://soar.example.com")
//!         .app_key("your-app-key")
//!         .build()?;
//!
//!     let scopes = client.get_scopes().await?;
//!     println!("Valid scopes: {scopes:?}");
//!
//!     let instances = client.list_integration_instances("Slack").await?;
//!     println!("Slack instances: {}", instances.instances().len());
//!
//!     Ok(())
//! }
//! ```
//!
//! # Configuration
//!
//! ```no_run
//! use soar_client::SoarClientBuilder;
//! use std::time::Duration;
//!
//! let client = SoarClientBuilder::new("https://soar.example.com")
//!     .timeout(Duration::from_secs(10))
//!     .app_key("your-app-key")
//!     .build()
//!     .unwrap();
//! ```

mod actions;
mod cases;
pub mod endpoints;
mod entities;
mod error;
#[cfg(any(test, feature = "test-util"))]
pub mod mock;

pub use actions::{IntegrationInstance, IntegrationInstances};
pub use cases::{CaseClosure, CaseFullDetails, NewCase};
pub use entities::EntitySearch;
pub use error::{CERTIFICATE_ERROR_MESSAGE, Error, connection_message};

use std::fmt;
use std::time::Duration;

use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use tracing::debug;

/// Default request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Header carrying the application key.
pub const APP_KEY_HEADER: &str = "AppKey";

/// HTTP client for the SOAR external API.
///
/// Cheap to clone; clones share the connection pool.
#[derive(Clone)]
pub struct SoarClient {
    client: Client,
    base_url: String,
    app_key: Option<String>,
}

impl fmt::Debug for SoarClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SoarClient")
            .field("base_url", &self.base_url)
            .field("app_key", &self.app_key.as_ref().map(|_| "[REDACTED]"))
            .finish_non_exhaustive()
    }
}

/// Builder for configuring a [`SoarClient`].
pub struct SoarClientBuilder {
    base_url: String,
    timeout: Duration,
    app_key: Option<String>,
    client: Option<Client>,
}

impl SoarClientBuilder {
    /// Create a new builder with the given base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            timeout: DEFAULT_TIMEOUT,
            app_key: None,
            client: None,
        }
    }

    /// Set the request timeout.
    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the application key sent in the `AppKey` header.
    ///
    /// An empty key is treated as no key.
    #[must_use]
    pub fn app_key(mut self, app_key: impl Into<String>) -> Self {
        let app_key = app_key.into();
        self.app_key = (!app_key.is_empty()).then_some(app_key);
        self
    }

    /// Use a custom reqwest Client.
    ///
    /// Useful for configuring TLS roots, proxies, or other advanced settings.
    #[must_use]
    pub fn client(mut self, client: Client) -> Self {
        self.client = Some(client);
        self
    }

    /// Build the client.
    pub fn build(self) -> Result<SoarClient, Error> {
        if self.base_url.is_empty() {
            return Err(Error::Configuration("SOAR base URL is empty".into()));
        }

        let client = match self.client {
            Some(c) => c,
            None => Client::builder()
                .timeout(self.timeout)
                .build()
                .map_err(|e| Error::Configuration(e.to_string()))?,
        };

        Ok(SoarClient {
            client,
            base_url: self.base_url,
            app_key: self.app_key,
        })
    }
}

impl SoarClient {
    /// Create a builder for advanced configuration.
    pub fn builder(base_url: impl Into<String>) -> SoarClientBuilder {
        SoarClientBuilder::new(base_url)
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// Add the application key header if one is set.
    fn add_auth(&self, req: RequestBuilder) -> RequestBuilder {
        match &self.app_key {
            Some(key) => req.header(APP_KEY_HEADER, key),
            None => req,
        }
    }

    /// Send a request and decode a successful JSON response.
    async fn send_json<T: DeserializeOwned>(&self, req: RequestBuilder) -> Result<T, Error> {
        let response = self
            .add_auth(req)
            .send()
            .await
            .map_err(|e| Error::from_transport(&e, &self.base_url))?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            debug!(%status, "SOAR request returned an error status");
            return Err(Error::Http {
                status: status.as_u16(),
                message,
            });
        }

        response
            .json::<T>()
            .await
            .map_err(|e| Error::Deserialization(e.to_string()))
    }
}
