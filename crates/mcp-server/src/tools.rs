//! Case management tools.
//!
//! Each tool maps to one backend call and returns the backend JSON as-is.

use rmcp::{
    ErrorData as McpError,
    handler::server::wrapper::Parameters,
    model::{CallToolResult, Content},
    schemars, tool, tool_router,
};
use serde::{Deserialize, Serialize};
use soar_ops::soar_client::{CaseClosure, EntitySearch, NewCase};
use soar_ops::soar_core::{
    AlertId, CaseId, CasePriority, CloseReason, UnknownCloseReason, UnknownPriority,
};

use crate::server::SoarMcpServer;

// ---------------------------------------------------------------------------
// Parameter types
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct ListCasesParams {
    /// Token from a previous page, to continue listing.
    #[serde(default)]
    pub next_page_token: Option<String>,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct CaseParams {
    /// The ID of the case.
    pub case_id: String,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct CasePageParams {
    /// The ID of the case.
    pub case_id: String,
    /// Token from a previous page, to continue listing.
    #[serde(default)]
    pub next_page_token: Option<String>,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct PostCommentParams {
    /// The ID of the case.
    pub case_id: String,
    /// Comment text.
    pub comment: String,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct ChangePriorityParams {
    /// The ID of the case.
    pub case_id: String,
    /// New priority: `PriorityUnspecified`, `PriorityInfo`, `PriorityLow`,
    /// `PriorityMedium`, `PriorityHigh` or `PriorityCritical`.
    pub priority: String,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct CreateCaseParams {
    /// Case title.
    pub name: String,
    /// Optional priority, e.g. `PriorityHigh`.
    #[serde(default)]
    pub priority: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    /// Environment the case belongs to.
    #[serde(default)]
    pub environment: Option<String>,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct UpdateDescriptionParams {
    /// The ID of the case.
    pub case_id: String,
    /// New description, replacing the current one.
    pub description: String,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct CloseCaseParams {
    /// The ID of the case.
    pub case_id: String,
    pub root_cause: String,
    /// Closing comment.
    pub comment: String,
    /// One of `Malicious`, `NotMalicious`, `Maintenance` or `Inconclusive`.
    pub reason: String,
    /// Comma-separated tags to apply on close.
    #[serde(default)]
    pub tags: Option<String>,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct AssignCaseParams {
    /// The ID of the case.
    pub case_id: String,
    /// User name or email of the assignee.
    pub user: String,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct ChangeStageParams {
    /// The ID of the case.
    pub case_id: String,
    /// Target stage, e.g. `Triage` or `Investigation`.
    pub stage: String,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct CaseTagParams {
    /// The ID of the case.
    pub case_id: String,
    pub tag: String,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct AlertEventsParams {
    /// The ID of the case.
    pub case_id: String,
    /// The ID of the alert within the case.
    pub alert_id: String,
    /// Token from a previous page, to continue listing.
    #[serde(default)]
    pub next_page_token: Option<String>,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct AlertGroupEntitiesParams {
    /// The ID of the case.
    pub case_id: String,
    /// Alert group identifiers, as listed by `list_alert_group_identifiers_by_case`.
    pub alert_group_identifiers: Vec<String>,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct EntityDetailsParams {
    /// Entity identifier, e.g. an IP address or host name.
    pub entity_identifier: String,
    /// Entity type, e.g. `ADDRESS` or `HOSTNAME`.
    pub entity_type: String,
    pub entity_environment: String,
}

#[derive(Debug, Default, Deserialize, schemars::JsonSchema)]
pub struct SearchEntityParams {
    /// Free text matched against entity identifiers.
    #[serde(default)]
    pub term: Option<String>,
    /// Entity types to match.
    #[serde(default, rename = "type")]
    pub entity_types: Option<Vec<String>>,
    #[serde(default)]
    pub is_suspicious: Option<bool>,
    #[serde(default)]
    pub is_internal_asset: Option<bool>,
    #[serde(default)]
    pub is_enriched: Option<bool>,
    #[serde(default)]
    pub network_name: Option<Vec<String>>,
    #[serde(default)]
    pub environment_name: Option<Vec<String>>,
}

// ---------------------------------------------------------------------------
// Tool implementations
// ---------------------------------------------------------------------------

fn mcp_err(msg: impl std::fmt::Display) -> McpError {
    McpError::internal_error(msg.to_string(), None)
}

fn respond<T: Serialize>(
    result: Result<T, soar_ops::soar_client::Error>,
) -> Result<CallToolResult, McpError> {
    match result {
        Ok(value) => {
            let json = serde_json::to_string_pretty(&value).map_err(mcp_err)?;
            Ok(CallToolResult::success(vec![Content::text(json)]))
        }
        Err(e) => Ok(CallToolResult::error(vec![Content::text(e.to_string())])),
    }
}

fn parse_priority(raw: &str) -> Result<CasePriority, McpError> {
    raw.parse()
        .map_err(|e: UnknownPriority| McpError::invalid_params(e.to_string(), None))
}

#[tool_router]
impl SoarMcpServer {
    /// Build the tool router. Exposed as `pub(crate)` so `server.rs` can call it.
    pub(crate) fn create_tool_router() -> rmcp::handler::server::router::tool::ToolRouter<Self> {
        Self::tool_router()
    }

    #[tool(description = "List cases, newest first. Pass next_page_token to fetch the next page.")]
    async fn list_cases(
        &self,
        Parameters(p): Parameters<ListCasesParams>,
    ) -> Result<CallToolResult, McpError> {
        respond(
            self.ops
                .client()
                .list_cases(p.next_page_token.as_deref())
                .await,
        )
    }

    #[tool(description = "Add a comment to a case.")]
    async fn post_case_comment(
        &self,
        Parameters(p): Parameters<PostCommentParams>,
    ) -> Result<CallToolResult, McpError> {
        let case_id = CaseId::new(p.case_id);
        respond(self.ops.client().post_case_comment(&case_id, &p.comment).await)
    }

    #[tool(description = "List the alerts of a case.")]
    async fn list_alerts_by_case(
        &self,
        Parameters(p): Parameters<CasePageParams>,
    ) -> Result<CallToolResult, McpError> {
        let case_id = CaseId::new(p.case_id);
        respond(
            self.ops
                .client()
                .list_alerts_by_case(&case_id, p.next_page_token.as_deref())
                .await,
        )
    }

    /// The identifiers returned here are what marketplace tools take as
    /// `alert_group_identifiers`.
    #[tool(
        description = "List the alert group identifiers of a case, for use as alert_group_identifiers in marketplace actions."
    )]
    async fn list_alert_group_identifiers_by_case(
        &self,
        Parameters(p): Parameters<CasePageParams>,
    ) -> Result<CallToolResult, McpError> {
        let case_id = CaseId::new(p.case_id);
        respond(
            self.ops
                .client()
                .list_alert_group_identifiers_by_case(&case_id, p.next_page_token.as_deref())
                .await,
        )
    }

    #[tool(description = "Change the priority of a case.")]
    async fn change_case_priority(
        &self,
        Parameters(p): Parameters<ChangePriorityParams>,
    ) -> Result<CallToolResult, McpError> {
        let priority = parse_priority(&p.priority)?;
        let case_id = CaseId::new(p.case_id);
        respond(
            self.ops
                .client()
                .change_case_priority(&case_id, priority)
                .await,
        )
    }

    #[tool(description = "Fetch a case together with its alerts and comments.")]
    async fn get_case_full_details(
        &self,
        Parameters(p): Parameters<CaseParams>,
    ) -> Result<CallToolResult, McpError> {
        let case_id = CaseId::new(p.case_id);
        respond(self.ops.client().get_case_full_details(&case_id).await)
    }

    #[tool(description = "Create a case manually.")]
    async fn create_case(
        &self,
        Parameters(p): Parameters<CreateCaseParams>,
    ) -> Result<CallToolResult, McpError> {
        let mut case = NewCase::new(p.name);
        if let Some(priority) = p.priority.as_deref() {
            case = case.with_priority(parse_priority(priority)?);
        }
        if let Some(description) = p.description {
            case = case.with_description(description);
        }
        if let Some(environment) = p.environment {
            case = case.with_environment(environment);
        }
        respond(self.ops.client().create_case(&case).await)
    }

    #[tool(description = "Replace the description of a case.")]
    async fn update_case_description(
        &self,
        Parameters(p): Parameters<UpdateDescriptionParams>,
    ) -> Result<CallToolResult, McpError> {
        let case_id = CaseId::new(p.case_id);
        respond(
            self.ops
                .client()
                .update_case_description(&case_id, &p.description)
                .await,
        )
    }

    #[tool(
        description = "Close a case with a root cause, a comment and a reason (Malicious, NotMalicious, Maintenance or Inconclusive)."
    )]
    async fn close_case(
        &self,
        Parameters(p): Parameters<CloseCaseParams>,
    ) -> Result<CallToolResult, McpError> {
        let reason: CloseReason = p
            .reason
            .parse()
            .map_err(|e: UnknownCloseReason| McpError::invalid_params(e.to_string(), None))?;
        let closure = CaseClosure {
            root_cause: p.root_cause,
            comment: p.comment,
            reason,
            tags: p.tags.filter(|t| !t.trim().is_empty()),
        };
        let case_id = CaseId::new(p.case_id);
        respond(self.ops.client().close_case(&case_id, &closure).await)
    }

    #[tool(description = "Assign a user to a case.")]
    async fn assign_case(
        &self,
        Parameters(p): Parameters<AssignCaseParams>,
    ) -> Result<CallToolResult, McpError> {
        let case_id = CaseId::new(p.case_id);
        respond(self.ops.client().assign_case(&case_id, &p.user).await)
    }

    #[tool(description = "Move a case to another stage.")]
    async fn change_case_stage(
        &self,
        Parameters(p): Parameters<ChangeStageParams>,
    ) -> Result<CallToolResult, McpError> {
        let case_id = CaseId::new(p.case_id);
        respond(self.ops.client().change_case_stage(&case_id, &p.stage).await)
    }

    #[tool(description = "Add a tag to a case.")]
    async fn add_case_tag(
        &self,
        Parameters(p): Parameters<CaseTagParams>,
    ) -> Result<CallToolResult, McpError> {
        let case_id = CaseId::new(p.case_id);
        respond(self.ops.client().add_case_tag(&case_id, &p.tag).await)
    }

    #[tool(description = "Remove a tag from a case.")]
    async fn remove_case_tag(
        &self,
        Parameters(p): Parameters<CaseTagParams>,
    ) -> Result<CallToolResult, McpError> {
        let case_id = CaseId::new(p.case_id);
        respond(self.ops.client().remove_case_tag(&case_id, &p.tag).await)
    }

    #[tool(description = "List the events behind one alert of a case.")]
    async fn list_events_by_alert(
        &self,
        Parameters(p): Parameters<AlertEventsParams>,
    ) -> Result<CallToolResult, McpError> {
        let case_id = CaseId::new(p.case_id);
        let alert_id = AlertId::new(p.alert_id);
        respond(
            self.ops
                .client()
                .list_events_by_alert(&case_id, &alert_id, p.next_page_token.as_deref())
                .await,
        )
    }

    #[tool(description = "List the entities involved in the given alert groups of a case.")]
    async fn get_entities_by_alert_group_identifiers(
        &self,
        Parameters(p): Parameters<AlertGroupEntitiesParams>,
    ) -> Result<CallToolResult, McpError> {
        let case_id = CaseId::new(p.case_id);
        respond(
            self.ops
                .client()
                .get_entities_by_alert_group_identifiers(&case_id, &p.alert_group_identifiers)
                .await,
        )
    }

    #[tool(description = "Fetch the details the platform holds about one entity.")]
    async fn get_entity_details(
        &self,
        Parameters(p): Parameters<EntityDetailsParams>,
    ) -> Result<CallToolResult, McpError> {
        respond(
            self.ops
                .client()
                .get_entity_details(&p.entity_identifier, &p.entity_type, &p.entity_environment)
                .await,
        )
    }

    #[tool(description = "Search entities by term, type and flags. All filters are optional.")]
    async fn search_entity(
        &self,
        Parameters(p): Parameters<SearchEntityParams>,
    ) -> Result<CallToolResult, McpError> {
        let search = EntitySearch {
            term: p.term,
            entity_types: p.entity_types,
            is_suspicious: p.is_suspicious,
            is_internal_asset: p.is_internal_asset,
            is_enriched: p.is_enriched,
            network_names: p.network_name,
            environment_names: p.environment_name,
        };
        respond(self.ops.client().search_entity(&search).await)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::{Value, json};
    use soar_client::mock::MockServer;
    use soar_ops::soar_client::SoarClient;
    use soar_ops::soar_core::ScopeSet;
    use soar_ops::soar_marketplace::{ActionCatalog, Bindings};
    use soar_ops::SoarOps;

    use super::*;

    const CASE_TOOLS: [&str; 17] = [
        "add_case_tag",
        "assign_case",
        "change_case_priority",
        "change_case_stage",
        "close_case",
        "create_case",
        "get_case_full_details",
        "get_entities_by_alert_group_identifiers",
        "get_entity_details",
        "list_alert_group_identifiers_by_case",
        "list_alerts_by_case",
        "list_cases",
        "list_events_by_alert",
        "post_case_comment",
        "remove_case_tag",
        "search_entity",
        "update_case_description",
    ];

    fn server() -> SoarMcpServer {
        server_at("http://127.0.0.1:9")
    }

    fn server_at(base_url: &str) -> SoarMcpServer {
        let client = SoarClient::builder(base_url).build().unwrap();
        let bindings = Bindings::from_parts(client, ScopeSet::new(["All entities"]));
        SoarMcpServer::new(SoarOps::new(bindings, ActionCatalog::with_enabled(["Shodan"])))
    }

    #[test]
    fn router_lists_case_tools_before_actions() {
        let tools = server().all_tools();
        let names: Vec<&str> = tools.iter().map(|t| &*t.name).collect();
        let case_tools = CASE_TOOLS.len();
        assert_eq!(
            names[..case_tools]
                .iter()
                .copied()
                .collect::<std::collections::BTreeSet<_>>(),
            CASE_TOOLS.into_iter().collect()
        );
        assert!(names[case_tools..].iter().all(|n| n.starts_with("shodan_")));
        assert!(names.contains(&"shodan_ping"));
    }

    #[tokio::test]
    async fn unknown_priority_is_invalid_params() {
        let err = server()
            .change_case_priority(Parameters(ChangePriorityParams {
                case_id: "1".into(),
                priority: "urgent".into(),
            }))
            .await
            .unwrap_err();
        assert_eq!(err.message, "unknown case priority 'urgent'");
    }

    #[tokio::test]
    async fn backend_errors_become_error_results() {
        let result = server()
            .get_case_full_details(Parameters(CaseParams {
                case_id: "1".into(),
            }))
            .await
            .unwrap();
        assert_eq!(result.is_error, Some(true));
    }

    #[tokio::test]
    async fn unknown_close_reason_is_invalid_params() {
        let err = server()
            .close_case(Parameters(CloseCaseParams {
                case_id: "1".into(),
                root_cause: "n/a".into(),
                comment: "n/a".into(),
                reason: "resolved".into(),
                tags: None,
            }))
            .await
            .unwrap_err();
        assert!(err.message.starts_with("unknown close reason 'resolved'"));
    }

    fn first_text(result: &CallToolResult) -> Value {
        let text = result.content[0].as_text().unwrap();
        serde_json::from_str(&text.text).unwrap()
    }

    #[tokio::test]
    async fn close_case_accepts_loose_reason_spelling() {
        let mock = MockServer::start().await;
        let base_url = mock.base_url.clone();
        let handle = mock.serve(vec![(200, "true".into())]);

        let result = server_at(&base_url)
            .close_case(Parameters(CloseCaseParams {
                case_id: "31".into(),
                root_cause: "Benign scan".into(),
                comment: "Internal scanner.".into(),
                reason: "not_malicious".into(),
                tags: Some("scanner,internal".into()),
            }))
            .await
            .unwrap();
        let requests = handle.await.unwrap();

        assert_ne!(result.is_error, Some(true));
        assert_eq!(
            requests[0].json(),
            json!({
                "CaseId": "31",
                "RootCause": "Benign scan",
                "Comment": "Internal scanner.",
                "Reason": "NotMalicious",
                "Tags": "scanner,internal"
            })
        );
    }

    #[tokio::test]
    async fn create_case_passes_priority_through() {
        let mock = MockServer::start().await;
        let base_url = mock.base_url.clone();
        let handle = mock.serve(vec![(200, r#"{"id":5}"#.into())]);

        let result = server_at(&base_url)
            .create_case(Parameters(CreateCaseParams {
                name: "Beaconing host".into(),
                priority: Some("high".into()),
                description: Some("Seen by EDR.".into()),
                environment: None,
            }))
            .await
            .unwrap();
        let requests = handle.await.unwrap();

        assert_eq!(first_text(&result), json!({"id": 5}));
        assert_eq!(
            requests[0].json(),
            json!({
                "Name": "Beaconing host",
                "Priority": "PriorityHigh",
                "Description": "Seen by EDR."
            })
        );
    }

    #[tokio::test]
    async fn search_entity_maps_list_filters() {
        let mock = MockServer::start().await;
        let base_url = mock.base_url.clone();
        let handle = mock.serve(vec![(200, "[]".into())]);

        server_at(&base_url)
            .search_entity(Parameters(SearchEntityParams {
                entity_types: Some(vec!["HOSTNAME".into()]),
                environment_name: Some(vec!["Prod".into()]),
                ..SearchEntityParams::default()
            }))
            .await
            .unwrap();
        let requests = handle.await.unwrap();

        let body = requests[0].json();
        assert_eq!(body["Type"], json!(["HOSTNAME"]));
        assert_eq!(body["EnvironmentName"], json!(["Prod"]));
        assert_eq!(body["Term"], Value::Null);
    }
}
