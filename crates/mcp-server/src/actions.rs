//! Marketplace actions exposed as MCP tools.
//!
//! Tools are built at startup from the enabled catalog rather than declared
//! statically, so they are listed and dispatched by hand next to the case
//! tool router.

use std::sync::Arc;

use rmcp::{
    ErrorData as McpError,
    model::{CallToolResult, Content, JsonObject, Tool},
};
use soar_ops::soar_marketplace::ActionCatalog;
use soar_ops::{OpsError, SoarOps};

/// One MCP tool per enabled action, sorted by name.
pub fn catalog_tools(catalog: &ActionCatalog) -> Vec<Tool> {
    catalog
        .iter()
        .map(|(name, action)| {
            Tool::new(
                name.to_owned(),
                action.description,
                Arc::new(action.input_schema()),
            )
        })
        .collect()
}

/// Run a marketplace action.
///
/// Unknown tools and malformed arguments are protocol errors. Action
/// failures come back as an error result carrying the failure envelope.
pub async fn call_action(
    ops: &SoarOps,
    name: &str,
    arguments: JsonObject,
) -> Result<CallToolResult, McpError> {
    let outcome = match ops.invoke_tool(name, &arguments).await {
        Ok(outcome) => outcome,
        Err(OpsError::UnknownTool(name)) => {
            return Err(McpError::invalid_params(
                format!("unknown tool '{name}'"),
                None,
            ));
        }
        Err(e) => return Err(McpError::invalid_params(e.to_string(), None)),
    };

    let completed = outcome.is_completed();
    let json = serde_json::to_string_pretty(&outcome.into_tool_payload())
        .map_err(|e| McpError::internal_error(e.to_string(), None))?;

    if completed {
        Ok(CallToolResult::success(vec![Content::text(json)]))
    } else {
        Ok(CallToolResult::error(vec![Content::text(json)]))
    }
}

#[cfg(test)]
mod tests {
    use serde_json::{Value, json};
    use soar_ops::soar_client::SoarClient;
    use soar_ops::soar_core::ScopeSet;
    use soar_ops::soar_marketplace::Bindings;

    use super::*;

    fn offline_ops() -> SoarOps {
        let client = SoarClient::builder("http://127.0.0.1:9").build().unwrap();
        let bindings = Bindings::from_parts(client, ScopeSet::new(["All entities", "Hosts"]));
        SoarOps::new(bindings, ActionCatalog::with_enabled(["Slack", "CiscoAMP"]))
    }

    fn object(value: Value) -> JsonObject {
        match value {
            Value::Object(map) => map,
            _ => panic!("expected object"),
        }
    }

    fn text(result: &CallToolResult) -> &str {
        result.content[0]
            .as_text()
            .map(|t| t.text.as_str())
            .unwrap()
    }

    #[test]
    fn tools_follow_the_enabled_catalog() {
        let ops = offline_ops();
        let tools = catalog_tools(ops.catalog());
        assert_eq!(tools.len(), ops.catalog().len());

        let wait = tools
            .iter()
            .find(|t| t.name == "slack_wait_for_reply")
            .unwrap();
        let required = wait.input_schema["required"].as_array().unwrap();
        assert!(required.contains(&json!("case_id")));
        assert!(required.contains(&json!("alert_group_identifiers")));

        assert!(tools.iter().all(|t| !t.name.starts_with("shodan_")));
        assert!(tools.iter().any(|t| t.name.starts_with("cisco_amp_")));
    }

    #[tokio::test]
    async fn unknown_tool_is_invalid_params() {
        let err = call_action(&offline_ops(), "shodan_ping", JsonObject::new())
            .await
            .unwrap_err();
        assert!(err.message.contains("shodan_ping"));
    }

    #[tokio::test]
    async fn missing_arguments_are_invalid_params() {
        let err = call_action(&offline_ops(), "slack_ping", object(json!({"case_id": "1"})))
            .await
            .unwrap_err();
        assert!(err.message.contains("alert_group_identifiers"));
    }

    #[tokio::test]
    async fn invalid_scope_is_an_error_result() {
        let args = object(json!({
            "case_id": "1",
            "alert_group_identifiers": ["g"],
            "scope": "Everything"
        }));
        let result = call_action(&offline_ops(), "slack_ping", args).await.unwrap();
        assert_eq!(result.is_error, Some(true));

        let payload: Value = serde_json::from_str(text(&result)).unwrap();
        assert_eq!(
            payload,
            json!({
                "Status": "Failed",
                "Message": "Invalid scope 'Everything'. Allowed values are: All entities, Hosts",
                "Code": "INVALID_SCOPE"
            })
        );
    }
}
