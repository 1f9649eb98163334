//! MCP (Model Context Protocol) server implementation.
//!
//! Exposes the case converters over MCP so AI assistants can call them via
//! stdio transport. Each `#[tool]` method delegates to `recase-core`.
//!
//! Tool inputs are arbitrary JSON values: a number or object is answered with
//! the `NotAString` error rather than a schema failure. Conversion failures
//! come back as tool results with `is_error` set, not as protocol errors.

use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{CallToolResult, Content, Implementation, ServerCapabilities, ServerInfo};
use rmcp::schemars;
use rmcp::{ErrorData as McpError, ServerHandler, tool, tool_handler, tool_router};

use recase_core::{Case, ConvertResult};

/// Parameters for the `get_info` tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct GetInfoParams {
    /// Output format: "text" or "json"
    #[serde(default = "default_format")]
    pub format: String,
}

fn default_format() -> String {
    "text".to_string()
}

/// Parameters for the `to_camel_case` and `to_dot_case` tools.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct ConvertParams {
    /// The value to convert. Only strings are accepted.
    pub input: serde_json::Value,
}

/// Parameters for the `to_kebab_case` tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct KebabParams {
    /// The value to convert. Only strings are accepted.
    pub input: serde_json::Value,
    /// Validate the input first. Defaults to the server's configured setting.
    pub strict: Option<bool>,
}

/// MCP server exposing the case converters.
#[derive(Clone)]
pub struct ProjectServer {
    strict_kebab: bool,
    tool_router: rmcp::handler::server::router::tool::ToolRouter<Self>,
}

impl Default for ProjectServer {
    fn default() -> Self {
        Self::new(false)
    }
}

#[tool_router]
impl ProjectServer {
    /// Create a new MCP server instance.
    ///
    /// `strict_kebab` is the default for `to_kebab_case` calls that do not
    /// pass `strict`.
    pub fn new(strict_kebab: bool) -> Self {
        Self {
            strict_kebab,
            tool_router: Self::tool_router(),
        }
    }

    /// Get project information.
    #[tool(description = "Get project name, version, and description")]
    #[tracing::instrument(skip(self), fields(otel.kind = "server"))]
    fn get_info(
        &self,
        Parameters(params): Parameters<GetInfoParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::debug!(tool = "get_info", format = %params.format, "executing MCP tool");

        let info = serde_json::json!({
            "name": env!("CARGO_PKG_NAME"),
            "version": env!("CARGO_PKG_VERSION"),
            "description": env!("CARGO_PKG_DESCRIPTION"),
            "cases": Case::ALL.map(|c| c.as_str()),
        });

        let text = if params.format == "json" {
            serde_json::to_string_pretty(&info)
                .map_err(|e| McpError::internal_error(format!("serialization error: {e}"), None))?
        } else {
            format!(
                "{} v{}\n{}",
                env!("CARGO_PKG_NAME"),
                env!("CARGO_PKG_VERSION"),
                env!("CARGO_PKG_DESCRIPTION"),
            )
        };

        tracing::info!(tool = "get_info", "MCP tool completed");
        Ok(CallToolResult::success(vec![Content::text(text)]))
    }

    /// Convert a string to camelCase.
    #[tool(
        description = "Convert text to camelCase. Accepts letters, digits, spaces, '-' and '_'; words are split on spaces, hyphens and underscores."
    )]
    #[tracing::instrument(skip(self, params), fields(otel.kind = "server"))]
    fn to_camel_case(
        &self,
        Parameters(params): Parameters<ConvertParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::debug!(tool = "to_camel_case", "executing MCP tool");
        Ok(tool_result(
            "to_camel_case",
            Case::Camel.convert_value(&params.input, false),
        ))
    }

    /// Convert a string to dot.case.
    #[tool(
        description = "Convert text to dot.case. Accepts letters, digits, spaces, '-' and '_'; words are lowercased and joined with '.'."
    )]
    #[tracing::instrument(skip(self, params), fields(otel.kind = "server"))]
    fn to_dot_case(
        &self,
        Parameters(params): Parameters<ConvertParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::debug!(tool = "to_dot_case", "executing MCP tool");
        Ok(tool_result(
            "to_dot_case",
            Case::Dot.convert_value(&params.input, false),
        ))
    }

    /// Convert a string to kebab-case.
    #[tool(
        description = "Convert text to kebab-case, splitting camelCase humps. Set strict to reject empty input and symbols."
    )]
    #[tracing::instrument(skip(self, params), fields(otel.kind = "server"))]
    fn to_kebab_case(
        &self,
        Parameters(params): Parameters<KebabParams>,
    ) -> Result<CallToolResult, McpError> {
        let strict = params.strict.unwrap_or(self.strict_kebab);
        tracing::debug!(tool = "to_kebab_case", strict, "executing MCP tool");
        Ok(tool_result(
            "to_kebab_case",
            Case::Kebab.convert_value(&params.input, strict),
        ))
    }
}

/// Turn a conversion result into a tool result.
fn tool_result(tool: &str, result: ConvertResult<String>) -> CallToolResult {
    match result {
        Ok(output) => {
            tracing::info!(tool, "MCP tool completed");
            CallToolResult::success(vec![Content::text(output)])
        }
        Err(e) => {
            tracing::info!(tool, error = e.kind(), "MCP tool rejected input");
            CallToolResult::error(vec![Content::text(e.sentinel())])
        }
    }
}

#[tool_handler]
impl ServerHandler for ProjectServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: Default::default(),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: env!("CARGO_PKG_NAME").to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                ..Default::default()
            },
            instructions: Some(format!(
                "{} MCP server. Use to_camel_case, to_dot_case and to_kebab_case to convert identifiers.",
                env!("CARGO_PKG_NAME"),
            )),
        }
    }
}
