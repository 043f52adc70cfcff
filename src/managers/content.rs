use crate::constants::paths::PROOF;
use crate::errors::ToolError;
use crate::managers::parse_request;
use crate::services::config::ProofConfig;
use crate::services::logger::Logger;
use crate::services::proof_client::ProofClient;
use crate::services::proof_types::{CertificationRequest, CertificationResult};
use crate::services::tool_executor::{ActionOutcome, ToolHandler};
use crate::utils::summary::{format_certification, format_failure};
use serde::Deserialize;
use serde_json::{Map, Value};
use std::sync::Arc;

pub const TOOL_NAME: &str = "certify_content";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ContentRequest {
    #[serde(default)]
    pub content: Option<String>,
    /// Text of the message that triggered the action; used when `content`
    /// is blank.
    #[serde(default)]
    pub message_text: Option<String>,
    #[serde(default)]
    pub metadata: Option<Map<String, Value>>,
}

impl ContentRequest {
    /// Blank checks ignore whitespace, but the content is sent untouched so
    /// the certified hash matches the caller's bytes.
    fn resolved_content(&self) -> Option<&str> {
        [self.content.as_deref(), self.message_text.as_deref()]
            .into_iter()
            .flatten()
            .find(|text| !text.trim().is_empty())
    }
}

#[derive(Clone)]
pub struct ContentManager {
    logger: Logger,
    config: ProofConfig,
    client: Arc<ProofClient>,
}

impl ContentManager {
    pub fn new(logger: Logger, config: ProofConfig, client: Arc<ProofClient>) -> Self {
        Self {
            logger: logger.child(TOOL_NAME),
            config,
            client,
        }
    }

    pub async fn handle_action(&self, request: ContentRequest) -> ActionOutcome {
        let Some(content) = request.resolved_content() else {
            return ActionOutcome::failure(
                "No content to certify: pass `content` or a non-empty message.",
            );
        };
        let metadata = request.metadata.clone().unwrap_or_default();
        let payload = CertificationRequest::for_content(content, metadata);

        match self
            .client
            .submit_proof::<CertificationResult, _>(&self.config, PROOF, &payload)
            .await
        {
            Ok(result) => {
                let message = format_certification("Content certified on the blockchain.", &result);
                ActionOutcome::success(message, serde_json::to_value(&result).ok())
            }
            Err(err) => {
                self.logger.error(
                    "certification failed",
                    Some(&serde_json::json!({ "error": err.to_string() })),
                );
                ActionOutcome::failure(format_failure("certify content", &err.to_string()))
            }
        }
    }
}

#[async_trait::async_trait]
impl ToolHandler for ContentManager {
    fn validate(&self) -> bool {
        self.config.has_access_token()
    }

    async fn handle(&self, args: Value) -> Result<ActionOutcome, ToolError> {
        let request: ContentRequest = parse_request(TOOL_NAME, args)?;
        Ok(self.handle_action(request).await)
    }
}
