use serde::{Deserialize, Serialize};

use crate::descriptor::ActionDescriptor;
use crate::entity::TargetEntity;
use crate::parameters::ScriptParameters;
use crate::scope::TargetSelection;
use crate::types::{CaseId, InstanceId};

/// Provider that runs marketplace integration scripts.
pub const ACTION_PROVIDER: &str = "Scripts";

/// Body of the execute-manual-action call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ManualActionRequest {
    pub alert_group_identifiers: Vec<String>,
    pub case_id: CaseId,
    pub target_entities: Vec<TargetEntity>,
    /// `null` when explicit target entities are given.
    pub scope: Option<String>,
    pub is_predefined_scope: bool,
    pub action_provider: String,
    pub action_name: String,
    pub properties: ActionProperties,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ActionProperties {
    pub integration_instance: InstanceId,
    pub script_name: String,
    /// JSON-encoded script parameters.
    pub script_parameters_entity_fields: String,
}

impl ManualActionRequest {
    pub fn new(
        descriptor: &ActionDescriptor,
        case_id: CaseId,
        alert_group_identifiers: Vec<String>,
        selection: TargetSelection,
        instance: InstanceId,
        parameters: ScriptParameters,
    ) -> Self {
        let action_name = descriptor.action_name();
        Self {
            alert_group_identifiers,
            case_id,
            target_entities: selection.target_entities,
            scope: selection.scope,
            is_predefined_scope: selection.is_predefined_scope,
            action_provider: ACTION_PROVIDER.to_owned(),
            properties: ActionProperties {
                integration_instance: instance,
                script_name: action_name.clone(),
                script_parameters_entity_fields: parameters.encode(),
            },
            action_name,
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::{Value, json};

    use super::*;
    use crate::scope::{DEFAULT_SCOPE, ScopeSet};

    const PING: ActionDescriptor = ActionDescriptor {
        integration: "Shodan",
        name: "Ping",
        description: "Test connectivity.",
        params: &[],
    };

    #[test]
    fn scope_request_wire_format() {
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

        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({
                "alertGroupIdentifiers": ["g1"],
                "caseId": "523",
                "targetEntities": [],
                "scope": "All entities",
                "isPredefinedScope": true,
                "actionProvider": "Scripts",
                "actionName": "Shodan_Ping",
                "properties": {
                    "IntegrationInstance": "inst-1",
                    "ScriptName": "Shodan_Ping",
                    "ScriptParametersEntityFields": "{}"
                }
            })
        );
    }

    #[test]
    fn entity_request_serializes_null_scope() {
        let entities = vec![TargetEntity::new("1.2.3.4", "ADDRESS")];
        let selection = TargetSelection::resolve(entities, "ignored", &ScopeSet::default()).unwrap();
        let request = ManualActionRequest::new(
            &PING,
            CaseId::new("1"),
            Vec::new(),
            selection,
            InstanceId::new("i"),
            ScriptParameters::default(),
        );

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["scope"], Value::Null);
        assert_eq!(value["isPredefinedScope"], false);
        assert_eq!(
            value["targetEntities"],
            json!([{"Identifier": "1.2.3.4", "EntityType": "ADDRESS"}])
        );
    }
}
