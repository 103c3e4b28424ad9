//! Configuration for the operations layer.

use std::fmt;
use std::time::Duration;

/// Configuration for connecting to a SOAR server.
#[derive(Clone, Default)]
pub struct SoarConfig {
    /// SOAR base URL (e.g. `https://example.siemplify-soar.com`).
    pub url: String,
    /// Application key sent in the `AppKey` header.
    pub app_key: Option<String>,
    /// Request timeout.
    pub timeout: Option<Duration>,
    /// Marketplace integrations to expose. Empty exposes none.
    pub integrations: Vec<String>,
}

impl fmt::Debug for SoarConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SoarConfig")
            .field("url", &self.url)
            .field("app_key", &self.app_key.as_ref().map(|_| "[REDACTED]"))
            .field("timeout", &self.timeout)
            .field("integrations", &self.integrations)
            .finish()
    }
}

impl SoarConfig {
    /// Create a new configuration with defaults.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Self::default()
        }
    }

    /// Create configuration from environment variables.
    ///
    /// Reads:
    /// - `SOAR_URL`
    /// - `SOAR_APP_KEY` (optional)
    /// - `SOAR_TIMEOUT_SECS` (optional, default 30)
    /// - `SOAR_INTEGRATIONS` (optional, comma-separated)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Like [`from_env`](Self::from_env) with a custom variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let url = lookup("SOAR_URL").unwrap_or_default();
        let app_key = lookup("SOAR_APP_KEY").filter(|k| !k.is_empty());
        let timeout = lookup("SOAR_TIMEOUT_SECS")
            .and_then(|s| s.trim().parse::<u64>().ok())
            .map(Duration::from_secs);
        let integrations = lookup("SOAR_INTEGRATIONS")
            .map(|s| parse_integrations(&s))
            .unwrap_or_default();

        Self {
            url,
            app_key,
            timeout,
            integrations,
        }
    }

    /// Override the base URL.
    #[must_use]
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    /// Override the application key.
    #[must_use]
    pub fn with_app_key(mut self, app_key: impl Into<String>) -> Self {
        self.app_key = Some(app_key.into());
        self
    }

    /// Override the timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Override the enabled integrations.
    #[must_use]
    pub fn with_integrations<I, S>(mut self, integrations: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.integrations = integrations.into_iter().map(Into::into).collect();
        self
    }
}

/// Split a comma-separated integration list, dropping blanks.
pub fn parse_integrations(list: &str) -> Vec<String> {
    list.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_owned)
        .collect()
}
