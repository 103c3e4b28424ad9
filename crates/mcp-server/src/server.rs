//! MCP server handler for SOAR.

use rmcp::{
    ErrorData as McpError, RoleServer, ServerHandler,
    handler::server::{router::tool::ToolRouter, tool::ToolCallContext},
    model::{
        CallToolRequestParams, CallToolResult, Implementation, ListResourcesResult,
        ListToolsResult, PaginatedRequestParams, ProtocolVersion, ReadResourceRequestParams,
        ReadResourceResult, ServerCapabilities, ServerInfo,
    },
    service::RequestContext,
};
use soar_ops::SoarOps;

use crate::{actions, resources};

/// The SOAR MCP Server.
///
/// Serves the case management tools from its router and one tool per
/// enabled marketplace action from the catalog.
#[derive(Clone)]
pub struct SoarMcpServer {
    pub(crate) ops: SoarOps,
    tool_router: ToolRouter<Self>,
}

impl SoarMcpServer {
    /// Create a new MCP server backed by bound operations.
    pub fn new(ops: SoarOps) -> Self {
        let tool_router = Self::create_tool_router();
        Self { ops, tool_router }
    }

    /// Case tools first, then marketplace actions sorted by name.
    pub(crate) fn all_tools(&self) -> Vec<rmcp::model::Tool> {
        let mut tools = self.tool_router.list_all();
        tools.extend(actions::catalog_tools(self.ops.catalog()));
        tools
    }
}

impl ServerHandler for SoarMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities::builder()
                .enable_tools()
                .enable_resources()
                .build(),
            server_info: Implementation {
                name: "soar-mcp-server".into(),
                version: env!("CARGO_PKG_VERSION").into(),
                title: Some("SOAR MCP Server".into()),
                description: Some(
                    "Run SOAR marketplace integration actions and manage cases.".into(),
                ),
                icons: None,
                website_url: None,
            },
            instructions: Some(
                "SOAR MCP Server. Marketplace tools run an integration action on a case: \
                 pass case_id and alert_group_identifiers, then either target_entities or \
                 a scope (read soar://scopes for valid values). Case tools list, inspect \
                 and update cases directly."
                    .to_string(),
            ),
        }
    }

    async fn list_tools(
        &self,
        _request: Option<PaginatedRequestParams>,
        _ctx: RequestContext<RoleServer>,
    ) -> Result<ListToolsResult, McpError> {
        Ok(ListToolsResult {
            tools: self.all_tools(),
            next_cursor: None,
            meta: None,
        })
    }

    async fn call_tool(
        &self,
        request: CallToolRequestParams,
        ctx: RequestContext<RoleServer>,
    ) -> Result<CallToolResult, McpError> {
        if self.tool_router.has_route(&request.name) {
            let tcc = ToolCallContext::new(self, request, ctx);
            return self.tool_router.call(tcc).await;
        }
        actions::call_action(&self.ops, &request.name, request.arguments.unwrap_or_default()).await
    }

    async fn list_resources(
        &self,
        _request: Option<PaginatedRequestParams>,
        _ctx: RequestContext<RoleServer>,
    ) -> Result<ListResourcesResult, McpError> {
        Ok(resources::list_resources())
    }

    async fn read_resource(
        &self,
        request: ReadResourceRequestParams,
        _ctx: RequestContext<RoleServer>,
    ) -> Result<ReadResourceResult, McpError> {
        resources::read_resource(&self.ops, &request.uri)
    }
}
