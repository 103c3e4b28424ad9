//! MCP resource handlers for SOAR.
//!
//! Resources give read-only access to what the server was bound with: the
//! valid scopes and the enabled integrations.

use rmcp::{
    ErrorData as McpError,
    model::{
        AnnotateAble, ListResourcesResult, RawResource, ReadResourceResult, ResourceContents,
    },
};
use serde_json::json;
use soar_ops::SoarOps;

pub const SCOPES_URI: &str = "soar://scopes";
pub const INTEGRATIONS_URI: &str = "soar://integrations";

/// List the static resources.
pub fn list_resources() -> ListResourcesResult {
    let resources = vec![
        RawResource::new(SCOPES_URI, "Valid scopes".to_string()).no_annotation(),
        RawResource::new(INTEGRATIONS_URI, "Enabled integrations".to_string()).no_annotation(),
    ];

    ListResourcesResult {
        resources,
        next_cursor: None,
        meta: None,
    }
}

/// Read a specific resource by URI.
pub fn read_resource(ops: &SoarOps, uri: &str) -> Result<ReadResourceResult, McpError> {
    let body = match uri {
        SCOPES_URI => json!({ "scopes": ops.scopes().sorted() }),
        INTEGRATIONS_URI => json!({ "integrations": ops.catalog().summaries() }),
        _ => {
            return Err(McpError::resource_not_found(
                "unknown resource",
                Some(json!({ "uri": uri })),
            ));
        }
    };

    Ok(ReadResourceResult {
        contents: vec![ResourceContents::text(
            serde_json::to_string_pretty(&body)
                .map_err(|e| McpError::internal_error(e.to_string(), None))?,
            uri,
        )],
    })
}

#[cfg(test)]
mod tests {
    use serde_json::Value;
    use soar_ops::soar_client::SoarClient;
    use soar_ops::soar_core::ScopeSet;
    use soar_ops::soar_marketplace::{ActionCatalog, Bindings};

    use super::*;

    fn ops() -> SoarOps {
        let client = SoarClient::builder("http://127.0.0.1:9").build().unwrap();
        let bindings = Bindings::from_parts(client, ScopeSet::new(["Hosts", "All entities"]));
        SoarOps::new(bindings, ActionCatalog::with_enabled(["MISP"]))
    }

    fn body(result: &ReadResourceResult) -> Value {
        match &result.contents[0] {
            ResourceContents::TextResourceContents { text, .. } => {
                serde_json::from_str(text).unwrap()
            }
            ResourceContents::BlobResourceContents { .. } => panic!("expected text"),
        }
    }

    #[test]
    fn lists_both_resources() {
        let uris: Vec<String> = list_resources()
            .resources
            .iter()
            .map(|r| r.uri.clone())
            .collect();
        assert_eq!(uris, vec![SCOPES_URI, INTEGRATIONS_URI]);
    }

    #[test]
    fn scopes_are_sorted() {
        let result = read_resource(&ops(), SCOPES_URI).unwrap();
        assert_eq!(body(&result)["scopes"], json!(["All entities", "Hosts"]));
    }

    #[test]
    fn integrations_show_action_counts() {
        let result = read_resource(&ops(), INTEGRATIONS_URI).unwrap();
        let integrations = body(&result)["integrations"].clone();
        assert_eq!(integrations[0]["name"], "MISP");
        assert_eq!(integrations[0]["key"], "misp");
        assert_eq!(integrations[0]["actions"], 26);
    }

    #[test]
    fn unknown_resource_is_not_found() {
        assert!(read_resource(&ops(), "soar://cases").is_err());
    }
}
