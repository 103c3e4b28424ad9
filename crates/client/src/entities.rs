use serde::Serialize;
use serde_json::{Value, json};
use soar_core::CaseId;
use tracing::instrument;

use crate::{Error, SoarClient, endpoints};

/// Filters for an entity search. Unset filters are sent as `null`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct EntitySearch {
    /// Free text matched against entity identifiers.
    pub term: Option<String>,
    #[serde(rename = "Type")]
    pub entity_types: Option<Vec<String>>,
    pub is_suspicious: Option<bool>,
    pub is_internal_asset: Option<bool>,
    pub is_enriched: Option<bool>,
    #[serde(rename = "NetworkName")]
    pub network_names: Option<Vec<String>>,
    #[serde(rename = "EnvironmentName")]
    pub environment_names: Option<Vec<String>>,
}

impl SoarClient {
    /// Fetch the entities involved in the given alert groups of a case.
    #[instrument(skip(self))]
    pub async fn get_entities_by_alert_group_identifiers(
        &self,
        case_id: &CaseId,
        alert_group_identifiers: &[String],
    ) -> Result<Value, Error> {
        let req = self
            .client
            .post(self.url(endpoints::ALERT_GROUP_ENTITIES))
            .json(&json!({
                "caseId": case_id,
                "alertGroupIdentifiers": alert_group_identifiers,
            }));
        self.send_json(req).await
    }

    /// Fetch everything the platform knows about one entity.
    #[instrument(skip(self))]
    pub async fn get_entity_details(
        &self,
        entity_identifier: &str,
        entity_type: &str,
        entity_environment: &str,
    ) -> Result<Value, Error> {
        let req = self
            .client
            .post(self.url(endpoints::ENTITY_DATA))
            .json(&json!({
                "EntityIdentifier": entity_identifier,
                "EntityType": entity_type,
                "EntityEnvironment": entity_environment,
                "LastCaseType": 0,
                "CaseDistributionType": 0,
            }));
        self.send_json(req).await
    }

    #[instrument(skip(self))]
    pub async fn search_entity(&self, search: &EntitySearch) -> Result<Value, Error> {
        let req = self.client.post(self.url(endpoints::ENTITY_SEARCH)).json(search);
        self.send_json(req).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::MockServer;

    fn client_for(server: &MockServer) -> SoarClient {
        SoarClient::builder(&server.base_url).build().unwrap()
    }

    #[tokio::test]
    async fn alert_group_entities_body() {
        let server = MockServer::start().await;
        let client = client_for(&server);
        let handle = server.serve(vec![(200, "[]".into())]);

        let groups = vec!["group-a".to_string(), "group-b".to_string()];
        client
            .get_entities_by_alert_group_identifiers(&CaseId::new("12"), &groups)
            .await
            .unwrap();
        let requests = handle.await.unwrap();

        assert_eq!(requests[0].method, "POST");
        assert_eq!(
            requests[0].target,
            "/api/external/v1/case-overview/GetAlertsEntities"
        );
        assert_eq!(
            requests[0].json(),
            json!({"caseId": "12", "alertGroupIdentifiers": ["group-a", "group-b"]})
        );
    }

    #[tokio::test]
    async fn entity_details_body() {
        let server = MockServer::start().await;
        let client = client_for(&server);
        let handle = server.serve(vec![(200, r#"{"identifier":"10.0.0.8"}"#.into())]);

        let response = client
            .get_entity_details("10.0.0.8", "ADDRESS", "Default Environment")
            .await
            .unwrap();
        let requests = handle.await.unwrap();

        assert_eq!(response["identifier"], "10.0.0.8");
        assert_eq!(requests[0].target, "/api/external/v1/entities/GetEntityData");
        assert_eq!(
            requests[0].json(),
            json!({
                "EntityIdentifier": "10.0.0.8",
                "EntityType": "ADDRESS",
                "EntityEnvironment": "Default Environment",
                "LastCaseType": 0,
                "CaseDistributionType": 0
            })
        );
    }

    #[tokio::test]
    async fn search_sends_unset_filters_as_null() {
        let server = MockServer::start().await;
        let client = client_for(&server);
        let handle = server.serve(vec![(200, "{}".into())]);

        let search = EntitySearch {
            term: Some("evil.example".into()),
            entity_types: Some(vec!["DOMAIN".into()]),
            is_suspicious: Some(true),
            ..EntitySearch::default()
        };
        client.search_entity(&search).await.unwrap();
        let requests = handle.await.unwrap();

        assert_eq!(requests[0].target, "/api/external/v1.0/entity-search/entities");
        assert_eq!(
            requests[0].json(),
            json!({
                "Term": "evil.example",
                "Type": ["DOMAIN"],
                "IsSuspicious": true,
                "IsInternalAsset": null,
                "IsEnriched": null,
                "NetworkName": null,
                "EnvironmentName": null
            })
        );
    }
}
