use crate::constants::paths::PROOF;
use crate::errors::ToolError;
use crate::managers::parse_request;
use crate::services::config::ProofConfig;
use crate::services::logger::Logger;
use crate::services::proof_client::ProofClient;
use crate::services::proof_types::{CertificationRequest, CertificationResult};
use crate::services::tool_executor::{ActionOutcome, ToolHandler};
use crate::utils::summary::{format_certification, format_failure};
use crate::utils::text::non_blank;
use serde::Deserialize;
use serde_json::{Map, Value};
use std::sync::Arc;

pub const TOOL_NAME: &str = "certify_hash";

/// `hash` is expected as `sha256:<hex>` but only checked for presence; the
/// service owns format validation.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HashRequest {
    #[serde(default)]
    pub hash: Option<String>,
    #[serde(default)]
    pub metadata: Option<Map<String, Value>>,
}

#[derive(Clone)]
pub struct HashManager {
    logger: Logger,
    config: ProofConfig,
    client: Arc<ProofClient>,
}

impl HashManager {
    pub fn new(logger: Logger, config: ProofConfig, client: Arc<ProofClient>) -> Self {
        Self {
            logger: logger.child(TOOL_NAME),
            config,
            client,
        }
    }

    pub async fn handle_action(&self, request: HashRequest) -> ActionOutcome {
        let HashRequest { hash, metadata } = request;
        let Some(hash) = hash.filter(|hash| non_blank(Some(hash.as_str())).is_some()) else {
            return ActionOutcome::failure("No hash to certify: pass `hash` (e.g. sha256:<hex>).");
        };
        let payload = CertificationRequest::for_hash(hash, metadata.unwrap_or_default());

        match self
            .client
            .submit_proof::<CertificationResult, _>(&self.config, PROOF, &payload)
            .await
        {
            Ok(result) => ActionOutcome::success(
                format_certification("Hash certified on the blockchain.", &result),
                serde_json::to_value(&result).ok(),
            ),
            Err(err) => {
                self.logger.error(
                    "certification failed",
                    Some(&serde_json::json!({ "error": err.to_string(), "status": err.status() })),
                );
                ActionOutcome::failure(format_failure("certify hash", &err.to_string()))
            }
        }
    }
}

#[async_trait::async_trait]
impl ToolHandler for HashManager {
    fn validate(&self) -> bool {
        self.config.has_access_token()
    }

    async fn handle(&self, args: Value) -> Result<ActionOutcome, ToolError> {
        let request: HashRequest = parse_request(TOOL_NAME, args)?;
        Ok(self.handle_action(request).await)
    }
}
