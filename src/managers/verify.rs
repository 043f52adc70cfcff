use crate::errors::ToolError;
use crate::managers::parse_request;
use crate::services::config::ProofConfig;
use crate::services::logger::Logger;
use crate::services::proof_client::ProofClient;
use crate::services::tool_executor::{ActionOutcome, ToolHandler};
use crate::utils::summary::{format_failure, format_verification};
use crate::utils::text::non_blank;
use serde::Deserialize;
use serde_json::Value;
use std::sync::Arc;

pub const TOOL_NAME: &str = "verify_proof";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct VerifyRequest {
    #[serde(default)]
    pub cert_id: Option<String>,
}

#[derive(Clone)]
pub struct VerifyManager {
    logger: Logger,
    config: ProofConfig,
    client: Arc<ProofClient>,
}

impl VerifyManager {
    pub fn new(logger: Logger, config: ProofConfig, client: Arc<ProofClient>) -> Self {
        Self {
            logger: logger.child(TOOL_NAME),
            config,
            client,
        }
    }

    pub async fn handle_action(&self, request: VerifyRequest) -> ActionOutcome {
        let Some(cert_id) = request
            .cert_id
            .filter(|id| non_blank(Some(id.as_str())).is_some())
        else {
            return ActionOutcome::failure("No certificate to verify: pass `cert_id`.");
        };

        match self.client.fetch_proof(&self.config, &cert_id).await {
            Ok(result) => ActionOutcome::success(
                format_verification(&result),
                serde_json::to_value(&result).ok(),
            ),
            Err(err) => {
                self.logger.error(
                    "verification failed",
                    Some(&serde_json::json!({ "cert_id": cert_id, "error": err.to_string() })),
                );
                ActionOutcome::failure(format_failure("verify proof", &err.to_string()))
            }
        }
    }
}

#[async_trait::async_trait]
impl ToolHandler for VerifyManager {
    fn validate(&self) -> bool {
        self.config.has_access_token()
    }

    async fn handle(&self, args: Value) -> Result<ActionOutcome, ToolError> {
        let request: VerifyRequest = parse_request(TOOL_NAME, args)?;
        Ok(self.handle_action(request).await)
    }
}
