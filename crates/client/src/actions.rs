use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use soar_core::ManualActionRequest;
use tracing::{debug, instrument};

use crate::{Error, SoarClient, endpoints};

/// A configured instance of an integration.
///
/// Only the identifier is interpreted; any other fields the backend returns
/// are kept as-is.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct IntegrationInstance {
    #[serde(default)]
    pub identifier: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl IntegrationInstance {
    /// The identifier, if present and non-empty.
    pub fn identifier(&self) -> Option<&str> {
        self.identifier.as_deref().filter(|id| !id.is_empty())
    }
}

/// Response of the integration-instance listing.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct IntegrationInstances {
    #[serde(default)]
    pub integration_instances: Option<Vec<IntegrationInstance>>,
}

impl IntegrationInstances {
    /// Instances in backend order; a missing list is empty.
    pub fn instances(&self) -> &[IntegrationInstance] {
        self.integration_instances.as_deref().unwrap_or_default()
    }
}

impl SoarClient {
    /// Fetch the scope names the backend accepts for manual actions.
    ///
    /// # Example
    ///
    /// ```no_run
    /// # async fn example() -> Result<(), soar_client::Error> {
    /// use soar_client::SoarClient;
    ///
    /// let client = SoarClient::builder("https://soar.example.com").build()?;
    /// for scope in client.get_scopes().await? {
    ///     println!("{scope}");
    /// }
    /// # Ok(())
    /// # }
    /// ```
    #[instrument(skip(self))]
    pub async fn get_scopes(&self) -> Result<Vec<String>, Error> {
        let req = self.client.get(self.url(endpoints::GET_SCOPES));
        self.send_json(req).await
    }

    /// List the configured instances of an integration.
    #[instrument(skip(self))]
    pub async fn list_integration_instances(
        &self,
        integration: &str,
    ) -> Result<IntegrationInstances, Error> {
        let req = self
            .client
            .get(self.url(&endpoints::integration_instances(integration)));
        let instances: IntegrationInstances = self.send_json(req).await?;
        debug!(count = instances.instances().len(), "listed integration instances");
        Ok(instances)
    }

    /// Execute a marketplace action. The backend response is returned as-is.
    #[instrument(skip(self, request), fields(action = %request.action_name, case_id = %request.case_id))]
    pub async fn execute_manual_action(
        &self,
        request: &ManualActionRequest,
    ) -> Result<Value, Error> {
        let req = self
            .client
            .post(self.url(endpoints::EXECUTE_MANUAL_ACTION))
            .json(request);
        self.send_json(req).await
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use soar_core::{
        ActionDescriptor, CaseId, DEFAULT_SCOPE, InstanceId, ScopeSet, ScriptParameters,
        TargetSelection,
    };

    use super::*;
    use crate::mock::MockServer;

    #[test]
    fn missing_instance_list_is_empty() {
        let parsed: IntegrationInstances = serde_json::from_value(json!({})).unwrap();
        assert!(parsed.instances().is_empty());

        let parsed: IntegrationInstances =
            serde_json::from_value(json!({"integration_instances": null})).unwrap();
        assert!(parsed.instances().is_empty());
    }

    #[test]
    fn instance_keeps_unknown_fields() {
        let parsed: IntegrationInstances = serde_json::from_value(json!({
            "integration_instances": [
                {"identifier": "inst-1", "environment": "Default"},
                {"displayName": "no id"},
                {"identifier": ""}
            ]
        }))
        .unwrap();

        let instances = parsed.instances();
        assert_eq!(instances.len(), 3);
        assert_eq!(instances[0].identifier(), Some("inst-1"));
        assert_eq!(instances[0].extra["environment"], "Default");
        assert_eq!(instances[1].identifier(), None);
        assert_eq!(instances[2].identifier(), None);
    }

    #[tokio::test]
    async fn get_scopes_sends_app_key() {
        let server = MockServer::start().await;
        let client = SoarClient::builder(&server.base_url)
            .app_key("k-123")
            .build()
            .unwrap();
        let handle = server.serve(vec![(200, r#"["All entities","Hosts"]"#.into())]);

        let scopes = client.get_scopes().await.unwrap();
        let requests = handle.await.unwrap();

        assert_eq!(scopes, vec!["All entities".to_owned(), "Hosts".to_owned()]);
        assert_eq!(requests[0].method, "GET");
        assert_eq!(requests[0].target, "/api/external/v1/settings/GetScopes");
        assert_eq!(requests[0].header("AppKey"), Some("k-123"));
    }

    #[tokio::test]
    async fn no_app_key_header_without_key() {
        let server = MockServer::start().await;
        let client = SoarClient::builder(&server.base_url).build().unwrap();
        let handle = server.serve(vec![(200, "[]".into())]);

        client.get_scopes().await.unwrap();
        let requests = handle.await.unwrap();
        assert_eq!(requests[0].header("AppKey"), None);
    }

    #[tokio::test]
    async fn lists_instances_of_integration() {
        let server = MockServer::start().await;
        let client = SoarClient::builder(&server.base_url).build().unwrap();
        let handle = server.serve(vec![(
            200,
            r#"{"integration_instances":[{"identifier":"inst-1"}]}"#.into(),
        )]);

        let instances = client.list_integration_instances("CiscoAMP").await.unwrap();
        let requests = handle.await.unwrap();

        assert_eq!(instances.instances()[0].identifier(), Some("inst-1"));
        assert_eq!(
            requests[0].target,
            "/api/1p/external/v1/integrations/CiscoAMP/integrationInstances?$select=identifier"
        );
    }

    #[tokio::test]
    async fn execute_posts_request_body() {
        const PING: ActionDescriptor = ActionDescriptor {
            integration: "Shodan",
            name: "Ping",
            description: "Test connectivity.",
            params: &[],
        };

        let server = MockServer::start().await;
        let client = SoarClient::builder(&server.base_url).build().unwrap();
        let handle = server.serve(vec![(200, r#"{"Status":"Completed"}"#.into())]);

        let selection =
            TargetSelection::resolve(Vec::new(), DEFAULT_SCOPE, &ScopeSet::new([DEFAULT_SCOPE]))
                .unwrap();
        let request = ManualActionRequest::new(
            &PING,
            CaseId::new("523"),
            vec!["g1".into()],
            selection,
            InstanceId::new("inst-1"),
            ScriptParameters::default(),
        );

        let response = client.execute_manual_action(&request).await.unwrap();
        let requests = handle.await.unwrap();

        assert_eq!(response, json!({"Status": "Completed"}));
        assert_eq!(requests[0].method, "POST");
        assert_eq!(requests[0].target, "/api/external/v1/cases/ExecuteManualAction");
        let body = requests[0].json();
        assert_eq!(body["actionName"], "Shodan_Ping");
        assert_eq!(body["properties"]["ScriptParametersEntityFields"], "{}");
    }
}
