//! MCP server handler: the tool catalog plus the static analysis prompts.

use crate::prompts;
use nsekit_market_tools::error::MarketToolsError;
use nsekit_market_tools::source::NseToolSource;
use rmcp::model::{
    CallToolRequestParam, CallToolResult, Content, GetPromptRequestParam, GetPromptResult,
    Implementation, ListPromptsResult, ListToolsResult, PaginatedRequestParam, Prompt,
    PromptMessage, PromptMessageContent, PromptMessageRole, ServerCapabilities, ServerInfo,
};
use rmcp::service::{RequestContext, RoleServer};
use rmcp::{ErrorData as McpError, ServerHandler};

#[derive(Clone)]
pub struct NseKitServer {
    source: NseToolSource,
}

impl NseKitServer {
    pub fn new(source: NseToolSource) -> Self {
        Self { source }
    }
}

impl ServerHandler for NseKitServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            capabilities: ServerCapabilities::builder()
                .enable_tools()
                .enable_prompts()
                .build(),
            server_info: Implementation::from_build_env(),
            instructions: Some(
                "NSE (National Stock Exchange of India) market data: live quotes, indices, \
                 derivatives, corporate events and end-of-day reports. All tool calls share one \
                 rate gate (~3 calls/sec to the exchange), so batches of calls are spaced \
                 automatically."
                    .to_string(),
            ),
            ..Default::default()
        }
    }

    async fn list_tools(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListToolsResult, McpError> {
        Ok(ListToolsResult {
            tools: self.source.list_tools(),
            ..Default::default()
        })
    }

    async fn call_tool(
        &self,
        request: CallToolRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> Result<CallToolResult, McpError> {
        let arguments = request.arguments.unwrap_or_default();

        match self.source.call_tool(&request.name, arguments).await {
            Ok(value) => {
                let text =
                    serde_json::to_string(&value).unwrap_or_else(|_| value.to_string());
                Ok(CallToolResult::success(vec![Content::text(text)]))
            }
            Err(MarketToolsError::UnknownTool(name)) => Err(McpError::invalid_params(
                format!("Tool not found: {name}"),
                None,
            )),
            // Everything else surfaces as a failed tool call with the feed's
            // message unmodified.
            Err(e) => {
                tracing::warn!(tool = %request.name, error = %e, "tool call failed");
                Ok(CallToolResult {
                    content: vec![Content::text(e.to_string())],
                    structured_content: None,
                    is_error: Some(true),
                    meta: None,
                })
            }
        }
    }

    async fn list_prompts(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListPromptsResult, McpError> {
        Ok(ListPromptsResult {
            prompts: prompts::all()
                .iter()
                .map(|p| Prompt::new(p.name, Some(p.description), None))
                .collect(),
            ..Default::default()
        })
    }

    async fn get_prompt(
        &self,
        request: GetPromptRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> Result<GetPromptResult, McpError> {
        let Some(prompt) = prompts::find(&request.name) else {
            return Err(McpError::invalid_params(
                format!("Prompt not found: {}", request.name),
                None,
            ));
        };

        Ok(GetPromptResult {
            description: Some(prompt.description.to_string()),
            messages: vec![PromptMessage {
                role: PromptMessageRole::User,
                content: PromptMessageContent::Text {
                    text: prompt.text.to_string(),
                },
            }],
        })
    }
}
