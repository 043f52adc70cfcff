use crate::app::App;
use crate::constants::protocol::{PROTOCOL_VERSION, SERVER_NAME, SERVER_VERSION};
use crate::errors::{ErrorCode, McpError, ToolError, ToolErrorKind};
use crate::mcp::catalog::{tool_catalog, validate_tool_args};
use crate::mcp::envelope::build_tool_result;
use crate::mcp::protocol::{JsonRpcRequest, JsonRpcResponse};
use serde_json::Value;
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader, BufWriter};

fn map_tool_error(tool: &str, error: &ToolError) -> McpError {
    let mut lines = vec![
        format!("tool: {}", tool),
        format!("code: {}", error.code),
        format!("message: {}", error.message),
    ];
    if let Some(hint) = &error.hint {
        lines.push(format!("hint: {}", hint));
    }
    let message = lines.join("\n");

    match error.kind {
        ToolErrorKind::InvalidParams | ToolErrorKind::NotFound => {
            McpError::new(ErrorCode::InvalidParams, message)
        }
        ToolErrorKind::Config | ToolErrorKind::Internal => {
            McpError::new(ErrorCode::InternalError, message)
        }
    }
}

pub struct McpServer {
    app: Arc<App>,
}

impl McpServer {
    pub fn new(app: App) -> Self {
        Self { app: Arc::new(app) }
    }

    pub fn from_env() -> Result<Self, ToolError> {
        Ok(Self::new(App::from_env()?))
    }

    fn handle_initialize(&self) -> Value {
        serde_json::json!({
            "protocolVersion": PROTOCOL_VERSION,
            "capabilities": {"tools": {"listChanged": false}},
            "serverInfo": {"name": SERVER_NAME, "version": SERVER_VERSION},
        })
    }

    fn handle_tools_list(&self) -> Value {
        serde_json::json!({ "tools": tool_catalog() })
    }

    async fn handle_tools_call(&self, name: &str, args: Value) -> Result<Value, McpError> {
        if !self.app.tool_executor.has_handler(name) {
            let err = self.app.tool_executor.unknown_tool_error(name);
            return Err(map_tool_error(name, &err));
        }
        validate_tool_args(name, &args)?;
        let outcome = self
            .app
            .tool_executor
            .execute(name, args)
            .await
            .map_err(|err| map_tool_error(name, &err))?;
        Ok(build_tool_result(&outcome))
    }

    async fn handle_request(&self, request: JsonRpcRequest) -> Option<JsonRpcResponse> {
        let id = request.id.clone();
        match request.method.as_str() {
            _ if request.method.starts_with("notifications/") && request.is_notification() => None,
            "initialize" => id.map(|id| JsonRpcResponse::success(id, self.handle_initialize())),
            "ping" => id.map(|id| JsonRpcResponse::success(id, serde_json::json!({}))),
            "tools/list" => id.map(|id| JsonRpcResponse::success(id, self.handle_tools_list())),
            "tools/call" => {
                let id = id?;
                let params = request.params.as_object().cloned().unwrap_or_default();
                let name = params.get("name").and_then(|v| v.as_str()).unwrap_or("");
                if name.is_empty() {
                    return Some(JsonRpcResponse::failure(
                        id,
                        ErrorCode::InvalidParams.as_i32(),
                        "Missing tool name",
                    ));
                }
                let args = params.get("arguments").cloned().unwrap_or(Value::Null);
                Some(match self.handle_tools_call(name, args).await {
                    Ok(result) => JsonRpcResponse::success(id, result),
                    Err(err) => JsonRpcResponse::failure(id, err.code.as_i32(), err.message),
                })
            }
            _ => id.map(|id| {
                JsonRpcResponse::failure(id, ErrorCode::MethodNotFound.as_i32(), "Method not found")
            }),
        }
    }

    /// Handles one line of the stdio stream. `None` means nothing is written
    /// back (notifications and blank lines).
    pub async fn handle_line(&self, line: &str) -> Option<JsonRpcResponse> {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return None;
        }
        let parsed: Value = match serde_json::from_str(trimmed) {
            Ok(value) => value,
            Err(_) => {
                return Some(JsonRpcResponse::failure(
                    Value::Null,
                    ErrorCode::ParseError.as_i32(),
                    "Parse error",
                ))
            }
        };
        match serde_json::from_value::<JsonRpcRequest>(parsed) {
            Ok(request) => self.handle_request(request).await,
            Err(_) => Some(JsonRpcResponse::failure(
                Value::Null,
                ErrorCode::InvalidRequest.as_i32(),
                "Invalid request",
            )),
        }
    }

    pub async fn run_stdio(&self) -> Result<(), ToolError> {
        let mut reader = BufReader::new(tokio::io::stdin()).lines();
        let mut writer = BufWriter::new(tokio::io::stdout());
        self.app.logger.info("serving MCP over stdio", None);

        while let Some(line) = reader.next_line().await? {
            let Some(response) = self.handle_line(&line).await else {
                continue;
            };
            let payload = serde_json::to_string(&response)
                .map_err(|err| ToolError::internal(err.to_string()))?;
            writer.write_all(payload.as_bytes()).await?;
            writer.write_all(b"\n").await?;
            writer.flush().await?;
        }

        let stats = self.app.logger.stats();
        self.app.logger.info("stdin closed, shutting down", Some(&stats));
        Ok(())
    }
}

pub async fn run_stdio() -> Result<(), ToolError> {
    let server = McpServer::from_env()?;
    server.run_stdio().await
}
