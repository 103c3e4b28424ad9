use soar_core::ScopeSet;
use thiserror::Error;
use tracing::{error, info, instrument};

use crate::backend::SoarBackend;

/// Shown when the scope fetch fails for any reason other than an unreachable
/// server.
pub const CREDENTIALS_ERROR_MESSAGE: &str = "Failed to fetch valid scopes from SOAR.\n\
Please make sure you have configured the right SOAR credentials:\n  \
1. SOAR_URL is set and correct.\n  \
2. SOAR_APP_KEY is set and valid.";

/// Errors raised while binding to the backend.
#[derive(Debug, Error)]
pub enum BindError {
    /// The server could not be reached (TLS or connection failure).
    #[error(transparent)]
    Unreachable(soar_client::Error),

    /// The server answered but the scopes could not be fetched.
    #[error("{}", CREDENTIALS_ERROR_MESSAGE)]
    Credentials(#[source] soar_client::Error),
}

/// Everything an action invocation needs, built once before any tool runs.
///
/// Immutable after construction; share it behind an `Arc`.
#[derive(Debug)]
pub struct Bindings<B> {
    backend: B,
    scopes: ScopeSet,
}

impl<B: SoarBackend> Bindings<B> {
    /// Fetch the valid scopes and wrap them with the backend.
    #[instrument(skip_all)]
    pub async fn bind(backend: B) -> Result<Self, BindError> {
        let scopes = match backend.get_scopes().await {
            Ok(scopes) => ScopeSet::new(scopes),
            Err(e) if e.is_transport() => {
                error!(error = %e, "SOAR is unreachable");
                return Err(BindError::Unreachable(e));
            }
            Err(e) => {
                error!(error = %e, "failed to fetch valid scopes");
                return Err(BindError::Credentials(e));
            }
        };

        info!(scopes = scopes.len(), "bound to SOAR");
        Ok(Self::from_parts(backend, scopes))
    }
}

impl<B> Bindings<B> {
    /// Assemble bindings from an already known scope set.
    pub fn from_parts(backend: B, scopes: ScopeSet) -> Self {
        Self { backend, scopes }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn scopes(&self) -> &ScopeSet {
        &self.scopes
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::FakeBackend;

    #[tokio::test]
    async fn bind_fetches_scopes() {
        let bindings = Bindings::bind(FakeBackend::with_scopes(["All entities", "Hosts"]))
            .await
            .unwrap();
        assert!(bindings.scopes().contains("Hosts"));
        assert_eq!(bindings.scopes().len(), 2);
    }

    #[tokio::test]
    async fn unauthorized_scope_fetch_is_a_credentials_error() {
        let backend = FakeBackend::default().failing_scopes(|| soar_client::Error::Http {
            status: 401,
            message: "unauthorized".into(),
        });
        let err = Bindings::bind(backend).await.unwrap_err();
        assert!(matches!(err, BindError::Credentials(_)));
        assert!(err.to_string().starts_with("Failed to fetch valid scopes from SOAR."));
    }

    #[tokio::test]
    async fn unreachable_server_keeps_transport_message() {
        let backend = FakeBackend::default().failing_scopes(|| {
            soar_client::Error::Connection(soar_client::connection_message("https://soar.test"))
        });
        let err = Bindings::bind(backend).await.unwrap_err();
        assert!(matches!(err, BindError::Unreachable(_)));
        assert!(err.to_string().contains("Failed to connect to SOAR at 'https://soar.test'"));
    }

    #[tokio::test]
    async fn bound_backend_is_debuggable() {
        let bindings = Bindings::bind(FakeBackend::with_scopes(["Hosts"]))
            .await
            .unwrap();
        let debug = format!("{bindings:?}");
        assert!(debug.contains("FakeBackend"));
        assert!(debug.contains("Hosts"));
    }
}
