use async_trait::async_trait;
use serde::Serialize;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;

use crate::constants::limits::SUGGESTION_LIMIT;
use crate::constants::settings::API_KEY;
use crate::errors::ToolError;
use crate::mcp::aliases::canonical_tool_name;
use crate::services::logger::Logger;
use crate::utils::suggest::suggest;

/// What every action resolves to. Action-level failures are reported here
/// with `succeeded == false`; they never surface as `Err`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ActionOutcome {
    pub succeeded: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

impl ActionOutcome {
    pub fn success(message: impl Into<String>, data: Option<Value>) -> Self {
        Self {
            succeeded: true,
            message: message.into(),
            data,
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            succeeded: false,
            message: message.into(),
            data: None,
        }
    }
}

#[async_trait]
pub trait ToolHandler: Send + Sync {
    /// Whether the action can run at all (credentials present).
    fn validate(&self) -> bool {
        true
    }

    /// `Err` is reserved for arguments that cannot be decoded.
    async fn handle(&self, args: Value) -> Result<ActionOutcome, ToolError>;
}

#[derive(Clone)]
pub struct ToolExecutor {
    logger: Logger,
    handlers: Arc<HashMap<String, Arc<dyn ToolHandler>>>,
}

impl ToolExecutor {
    pub fn new(logger: Logger, handlers: HashMap<String, Arc<dyn ToolHandler>>) -> Self {
        Self {
            logger: logger.child("executor"),
            handlers: Arc::new(handlers),
        }
    }

    pub fn has_handler(&self, tool: &str) -> bool {
        self.handlers.contains_key(canonical_tool_name(tool))
    }

    pub fn unknown_tool_error(&self, tool: &str) -> ToolError {
        let mut known: Vec<&str> = self.handlers.keys().map(String::as_str).collect();
        known.sort_unstable();
        let suggestions = suggest(tool, &known, SUGGESTION_LIMIT);
        let mut hint = format!("Use one of: {}.", known.join(", "));
        if !suggestions.is_empty() {
            hint = format!("Did you mean: {}? {}", suggestions.join(", "), hint);
        }
        ToolError::not_found(format!("Unknown tool: {}", tool))
            .with_hint(hint)
            .with_details(serde_json::json!({
                "known_tools": known,
                "did_you_mean": suggestions,
            }))
    }

    pub async fn execute(&self, tool: &str, args: Value) -> Result<ActionOutcome, ToolError> {
        let canonical = canonical_tool_name(tool);
        let handler = self
            .handlers
            .get(canonical)
            .cloned()
            .ok_or_else(|| self.unknown_tool_error(tool))?;

        let trace_id = uuid::Uuid::new_v4().to_string();
        let started_at = chrono::Utc::now();
        self.logger.debug(
            "tool call",
            Some(&serde_json::json!({
                "tool": canonical,
                "invoked_as": if canonical != tool { Some(tool) } else { None },
                "trace_id": trace_id,
                "args": args,
            })),
        );

        let outcome = if handler.validate() {
            handler.handle(args).await?
        } else {
            ActionOutcome::failure(format!(
                "xProof is not configured: set {} to use {}.",
                API_KEY, canonical
            ))
        };

        let duration_ms = (chrono::Utc::now() - started_at).num_milliseconds();
        let meta = serde_json::json!({
            "tool": canonical,
            "trace_id": trace_id,
            "duration_ms": duration_ms,
            "succeeded": outcome.succeeded,
        });
        if outcome.succeeded {
            self.logger.info("tool call finished", Some(&meta));
        } else {
            self.logger.warn("tool call failed", Some(&meta));
        }
        Ok(outcome)
    }
}
