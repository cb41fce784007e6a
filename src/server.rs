//! MCP server: exposes the tool registry and the corpus as resources.

use crate::access::{list_resources, read_resource};
use crate::config::DocsConfig;
use crate::dispatch::{Dispatcher, ToolRequest, ToolResponse, ToolSpec};
use crate::error::DocsError;
use rmcp::{
    ErrorData as McpError, RoleServer, ServerHandler,
    model::*,
    service::RequestContext,
};
use tracing::{error, info};

/// MCP server for Iress Design System documentation queries.
#[derive(Debug, Clone)]
pub struct DocsServer {
    dispatcher: Dispatcher,
}

impl DocsServer {
    pub fn new(config: DocsConfig) -> Self {
        info!("Serving IDS documentation from {}", config.root().display());
        Self {
            dispatcher: Dispatcher::new(config),
        }
    }

    pub const fn dispatcher(&self) -> &Dispatcher {
        &self.dispatcher
    }

    fn to_mcp_tool(spec: &ToolSpec) -> Tool {
        let mut tool = Tool::new(spec.name, spec.description, spec.input_schema());
        tool.annotations = Some(ToolAnnotations::new().read_only(true));
        tool
    }

    /// Run a dispatch on the blocking pool; handlers do synchronous file I/O.
    async fn run_dispatch(&self, request: ToolRequest) -> Result<ToolResponse, McpError> {
        let dispatcher = self.dispatcher.clone();
        let name = request.name.clone();
        tokio::task::spawn_blocking(move || dispatcher.dispatch(request))
            .await
            .map_err(|e| {
                error!("Tool {} failed to complete: {}", name, e);
                McpError::internal_error(e.to_string(), None)
            })?
            .map_err(|e| to_mcp_error(&e))
    }
}

/// Map crate errors onto MCP error codes.
fn to_mcp_error(err: &DocsError) -> McpError {
    if err.is_caller_error() {
        McpError::invalid_params(err.to_string(), None)
    } else if err.is_security_violation() {
        McpError::invalid_request(err.to_string(), None)
    } else {
        McpError::internal_error(err.to_string(), None)
    }
}

impl ServerHandler for DocsServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo::new(
            ServerCapabilities::builder()
                .enable_tools()
                .enable_resources()
                .build(),
        )
        .with_protocol_version(ProtocolVersion::V_2024_11_05)
        .with_server_info(Implementation::from_build_env())
        .with_instructions(
            "ids-docs-mcp: Iress Design System documentation server. \
             Use find_component or list_components to discover documentation, \
             get_iress_component_info / get_component_props / get_usage_examples for a component, \
             search_ids_docs for full-text search, get_design_tokens and get_design_guidelines \
             for foundations. Raw markdown files are available as file:// resources."
                .to_string(),
        )
    }

    fn list_tools(
        &self,
        _request: Option<PaginatedRequestParams>,
        _context: RequestContext<RoleServer>,
    ) -> impl std::future::Future<Output = Result<ListToolsResult, McpError>> + Send + '_ {
        let tools = self
            .dispatcher
            .tools()
            .iter()
            .map(Self::to_mcp_tool)
            .collect();
        std::future::ready(Ok(ListToolsResult::with_all_items(tools)))
    }

    async fn call_tool(
        &self,
        request: CallToolRequestParams,
        _context: RequestContext<RoleServer>,
    ) -> Result<CallToolResult, McpError> {
        let request = ToolRequest::new(
            request.name.to_string(),
            request.arguments.map(serde_json::Value::Object),
        );

        let response = self.run_dispatch(request).await?;

        Ok(CallToolResult::success(
            response
                .content
                .into_iter()
                .map(|item| Content::text(item.text))
                .collect(),
        ))
    }

    async fn list_resources(
        &self,
        _request: Option<PaginatedRequestParams>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListResourcesResult, McpError> {
        let root = self.dispatcher.config().root().to_path_buf();
        let descriptors = tokio::task::spawn_blocking(move || list_resources(&root))
            .await
            .map_err(|e| McpError::internal_error(e.to_string(), None))?;

        let resources = descriptors
            .into_iter()
            .map(|descriptor| {
                let mut raw = RawResource::new(descriptor.uri, descriptor.name);
                raw.mime_type = Some(descriptor.mime_type);
                raw.no_annotation()
            })
            .collect();

        Ok(ListResourcesResult::with_all_items(resources))
    }

    async fn read_resource(
        &self,
        request: ReadResourceRequestParams,
        _context: RequestContext<RoleServer>,
    ) -> Result<ReadResourceResult, McpError> {
        let root = self.dispatcher.config().root().to_path_buf();
        let uri = request.uri.clone();
        let content = tokio::task::spawn_blocking(move || read_resource(&root, &uri))
            .await
            .map_err(|e| McpError::internal_error(e.to_string(), None))?
            .map_err(|e| to_mcp_error(&e))?;

        Ok(ReadResourceResult::new(vec![
            ResourceContents::TextResourceContents {
                uri: content.uri,
                mime_type: Some(content.mime_type),
                text: content.text,
                meta: None,
            },
        ]))
    }
}
