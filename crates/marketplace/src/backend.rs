use std::future::Future;

use serde_json::Value;
use soar_client::{Error, IntegrationInstances, SoarClient};
use soar_core::ManualActionRequest;

/// The backend calls an action invocation needs.
///
/// Implemented by [`SoarClient`]; tests substitute an in-memory fake.
pub trait SoarBackend: Send + Sync {
    /// Scope names the backend accepts.
    fn get_scopes(&self) -> impl Future<Output = Result<Vec<String>, Error>> + Send;

    /// Configured instances of an integration, in backend order.
    fn list_integration_instances(
        &self,
        integration: &str,
    ) -> impl Future<Output = Result<IntegrationInstances, Error>> + Send;

    /// Run a marketplace action and return the backend response.
    fn execute_manual_action(
        &self,
        request: &ManualActionRequest,
    ) -> impl Future<Output = Result<Value, Error>> + Send;
}

impl SoarBackend for SoarClient {
    async fn get_scopes(&self) -> Result<Vec<String>, Error> {
        SoarClient::get_scopes(self).await
    }

    async fn list_integration_instances(
        &self,
        integration: &str,
    ) -> Result<IntegrationInstances, Error> {
        SoarClient::list_integration_instances(self, integration).await
    }

    async fn execute_manual_action(&self, request: &ManualActionRequest) -> Result<Value, Error> {
        SoarClient::execute_manual_action(self, request).await
    }
}
