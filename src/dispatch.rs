//! Tool dispatch: the single entry point for `{name, arguments}` tool calls.
//!
//! The registry is fixed at compile time. Arguments are validated by
//! deserializing them into each tool's request type before the handler runs,
//! so malformed calls fail without touching the filesystem.

use crate::config::DocsConfig;
use crate::error::{DocsError, Result};
use crate::schema::tool_input_schema;
use crate::tools::{
    AnalyzeMentionsRequest, ComponentInfoRequest, ComponentPropsRequest, DesignGuidelinesRequest,
    DesignTokensRequest, FindComponentRequest, ListComponentsRequest, SearchDocsRequest,
    UsageExamplesRequest, handle_analyze_mentions, handle_component_info, handle_component_props,
    handle_design_guidelines, handle_design_tokens, handle_find_component, handle_list_components,
    handle_search_docs, handle_usage_examples,
};
use rmcp::model::JsonObject;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::Arc;
use tracing::debug;

type Handler = fn(&DocsConfig, JsonObject) -> Result<String>;
type SchemaFn = fn() -> Arc<JsonObject>;

/// One registered tool.
#[derive(Debug, Clone, Copy)]
pub struct ToolSpec {
    pub name: &'static str,
    pub description: &'static str,
    schema: SchemaFn,
    handler: Handler,
}

impl ToolSpec {
    /// JSON schema of the tool's arguments.
    pub fn input_schema(&self) -> Arc<JsonObject> {
        (self.schema)()
    }
}

/// Every tool exposed to clients, in listing order.
pub const TOOLS: &[ToolSpec] = &[
    ToolSpec {
        name: "find_component",
        description: "Find Iress Design System documentation files by component name or keyword. \
                      Lists matching files by category and the best match for the name.",
        schema: tool_input_schema::<FindComponentRequest>,
        handler: |config, args| {
            handle_find_component(config, parse_arguments("find_component", args)?)
        },
    },
    ToolSpec {
        name: "get_component_props",
        description: "Get the props documentation for an Iress component (e.g. IressButton).",
        schema: tool_input_schema::<ComponentPropsRequest>,
        handler: |config, args| {
            handle_component_props(config, parse_arguments("get_component_props", args)?)
        },
    },
    ToolSpec {
        name: "get_usage_examples",
        description: "Get code examples for an Iress component, optionally only those containing a pattern.",
        schema: tool_input_schema::<UsageExamplesRequest>,
        handler: |config, args| {
            handle_usage_examples(config, parse_arguments("get_usage_examples", args)?)
        },
    },
    ToolSpec {
        name: "search_ids_docs",
        description: "Full-text search across all Iress Design System documentation. \
                      Returns matching lines with surrounding context.",
        schema: tool_input_schema::<SearchDocsRequest>,
        handler: |config, args| {
            handle_search_docs(config, parse_arguments("search_ids_docs", args)?)
        },
    },
    ToolSpec {
        name: "list_components",
        description: "List available documentation grouped by category (components, foundations, \
                      resources, introduction, other).",
        schema: tool_input_schema::<ListComponentsRequest>,
        handler: |config, args| {
            handle_list_components(config, parse_arguments("list_components", args)?)
        },
    },
    ToolSpec {
        name: "get_design_tokens",
        description: "Extract design tokens (CSS custom properties) from the foundations documentation, \
                      optionally filtered by category.",
        schema: tool_input_schema::<DesignTokensRequest>,
        handler: |config, args| {
            handle_design_tokens(config, parse_arguments("get_design_tokens", args)?)
        },
    },
    ToolSpec {
        name: "get_iress_component_info",
        description: "Get an overview of an Iress component: documentation file, description, \
                      sections, props and examples.",
        schema: tool_input_schema::<ComponentInfoRequest>,
        handler: |config, args| {
            handle_component_info(config, parse_arguments("get_iress_component_info", args)?)
        },
    },
    ToolSpec {
        name: "analyze_component_mentions",
        description: "Find Iress component names (e.g. IressButton) in free text and report which \
                      ones have documentation.",
        schema: tool_input_schema::<AnalyzeMentionsRequest>,
        handler: |config, args| {
            handle_analyze_mentions(config, parse_arguments("analyze_component_mentions", args)?)
        },
    },
    ToolSpec {
        name: "get_design_guidelines",
        description: "Get the Iress design guidelines, optionally limited to a section and/or lines \
                      matching a query.",
        schema: tool_input_schema::<DesignGuidelinesRequest>,
        handler: |config, args| {
            handle_design_guidelines(config, parse_arguments("get_design_guidelines", args)?)
        },
    },
];

/// A tool call as received from the transport.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ToolRequest {
    #[serde(alias = "toolName")]
    pub name: String,
    #[serde(default)]
    pub arguments: Option<Value>,
}

impl ToolRequest {
    pub fn new(name: impl Into<String>, arguments: Option<Value>) -> Self {
        Self {
            name: name.into(),
            arguments,
        }
    }
}

/// One content item of a response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ToolContent {
    #[serde(rename = "type")]
    pub kind: String,
    pub text: String,
}

/// The response shape shared by every tool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ToolResponse {
    pub content: Vec<ToolContent>,
}

impl ToolResponse {
    /// A response with a single text item.
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            content: vec![ToolContent {
                kind: "text".to_string(),
                text: text.into(),
            }],
        }
    }

    /// All text items joined by blank lines.
    pub fn joined_text(&self) -> String {
        self.content
            .iter()
            .map(|c| c.text.as_str())
            .collect::<Vec<_>>()
            .join("\n\n")
    }
}

/// Routes tool calls to their handlers.
#[derive(Debug, Clone)]
pub struct Dispatcher {
    config: Arc<DocsConfig>,
}

impl Dispatcher {
    pub fn new(config: DocsConfig) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    pub fn config(&self) -> &DocsConfig {
        &self.config
    }

    /// The fixed tool registry.
    pub const fn tools(&self) -> &'static [ToolSpec] {
        TOOLS
    }

    /// Look a tool up by name.
    pub fn find(name: &str) -> Option<&'static ToolSpec> {
        TOOLS.iter().find(|tool| tool.name == name)
    }

    /// Validate and run a tool call.
    ///
    /// Absent or `null` arguments become an empty object. Unknown tools and
    /// invalid arguments are errors; "nothing found" is a normal response.
    pub fn dispatch(&self, request: ToolRequest) -> Result<ToolResponse> {
        let tool =
            Self::find(&request.name).ok_or_else(|| DocsError::UnknownTool(request.name.clone()))?;

        let arguments = match request.arguments {
            None | Some(Value::Null) => JsonObject::new(),
            Some(Value::Object(map)) => map,
            Some(other) => {
                return Err(DocsError::InvalidArguments {
                    tool: tool.name.to_string(),
                    message: format!("arguments must be an object, got {}", json_kind(&other)),
                });
            }
        };

        debug!(tool = tool.name, "Dispatching tool call");
        let text = (tool.handler)(&self.config, arguments)?;
        Ok(ToolResponse::text(text))
    }
}

/// Deserialize a tool's arguments into its request type.
fn parse_arguments<T: DeserializeOwned>(tool: &str, arguments: JsonObject) -> Result<T> {
    serde_json::from_value(Value::Object(arguments)).map_err(|e| DocsError::InvalidArguments {
        tool: tool.to_string(),
        message: e.to_string(),
    })
}

const fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
