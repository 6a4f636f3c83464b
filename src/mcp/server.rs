//! MCP server handler
//!
//! Adapts a ToolRouter to the rmcp runtime: tools/list serves the router's catalog,
//! tools/call forwards to ToolRouter::invoke and maps errors to JSON-RPC codes.

use std::sync::Arc;

use rmcp::model::{
    CallToolRequestParam, CallToolResult, Content as McpContent, ErrorCode as McpErrorCode,
    Implementation, ListToolsResult, PaginatedRequestParam, ServerCapabilities, ServerInfo,
    Tool as McpTool,
};
use rmcp::service::RequestContext;
use rmcp::{ErrorData, RoleServer, ServerHandler};

use crate::error::DiceError;
use crate::tools::{Content, InvocationRequest, InvocationResult, Tool, ToolRouter};

/// Server name advertised during the handshake
pub const SERVER_NAME: &str = "dice-server";

/// Server version advertised during the handshake
pub const SERVER_VERSION: &str = env!("CARGO_PKG_VERSION");

/// MCP handler serving the tools of an injected router
#[derive(Clone)]
pub struct DiceServer {
    router: Arc<dyn ToolRouter>,
    name: String,
    version: String,
}

impl DiceServer {
    /// Create a server with the default identity
    pub fn new(router: Arc<dyn ToolRouter>) -> Self {
        Self {
            router,
            name: SERVER_NAME.to_string(),
            version: SERVER_VERSION.to_string(),
        }
    }

    /// Override the advertised name and version
    pub fn with_identity(mut self, name: impl Into<String>, version: impl Into<String>) -> Self {
        self.name = name.into();
        self.version = version.into();
        self
    }

    /// Advertised server name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Advertised server version
    pub fn version(&self) -> &str {
        &self.version
    }

    /// The full catalog as a protocol list result
    pub fn list_tools_result(&self) -> ListToolsResult {
        ListToolsResult::with_all_items(self.router.tools().iter().map(to_mcp_tool).collect())
    }

    /// Run one invocation and map the outcome to protocol types
    pub async fn call(&self, request: InvocationRequest) -> Result<CallToolResult, ErrorData> {
        let tool = request.name.clone();
        match self.router.invoke(request).await {
            Ok(result) => {
                tracing::debug!(tool = %tool, "Tool call succeeded");
                Ok(to_call_tool_result(result))
            }
            Err(err) => {
                tracing::warn!(tool = %tool, kind = %err.kind(), error = %err, "Tool call failed");
                Err(to_error_data(&err))
            }
        }
    }
}

/// Convert a catalog descriptor to its protocol form
pub fn to_mcp_tool(tool: &Tool) -> McpTool {
    McpTool::new(
        tool.name.clone(),
        tool.description.clone(),
        Arc::new(tool.input_schema()),
    )
}

/// Convert an invocation result to a protocol tool result
pub fn to_call_tool_result(result: InvocationResult) -> CallToolResult {
    let content = result
        .content
        .into_iter()
        .map(|item| match item {
            Content::Text { text } => McpContent::text(text),
        })
        .collect();
    CallToolResult::success(content)
}

/// Convert a dispatcher error to a protocol error carrying its JSON-RPC code
pub fn to_error_data(err: &DiceError) -> ErrorData {
    ErrorData::new(McpErrorCode(err.code()), err.to_string(), None)
}

impl ServerHandler for DiceServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: self.name.clone(),
                version: self.version.clone(),
                ..Default::default()
            },
            ..Default::default()
        }
    }

    async fn list_tools(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListToolsResult, ErrorData> {
        Ok(self.list_tools_result())
    }

    async fn call_tool(
        &self,
        request: CallToolRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> Result<CallToolResult, ErrorData> {
        let invocation = InvocationRequest::new(
            request.name.into_owned(),
            request.arguments.unwrap_or_default(),
        );
        self.call(invocation).await
    }
}
