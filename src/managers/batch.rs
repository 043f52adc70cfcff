use crate::constants::limits::MAX_BATCH_SIZE;
use crate::constants::paths::BATCH;
use crate::errors::ToolError;
use crate::managers::parse_request;
use crate::services::config::ProofConfig;
use crate::services::logger::Logger;
use crate::services::proof_client::ProofClient;
use crate::services::proof_types::{
    BatchCertificationRequest, BatchCertificationResult, CertificationRequest,
};
use crate::services::tool_executor::{ActionOutcome, ToolHandler};
use crate::utils::summary::{format_batch, format_failure};
use serde::Deserialize;
use serde_json::Value;
use std::sync::Arc;

pub const TOOL_NAME: &str = "certify_batch";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BatchRequest {
    #[serde(default)]
    pub proofs: Option<Vec<CertificationRequest>>,
}

#[derive(Clone)]
pub struct BatchManager {
    logger: Logger,
    config: ProofConfig,
    client: Arc<ProofClient>,
}

impl BatchManager {
    pub fn new(logger: Logger, config: ProofConfig, client: Arc<ProofClient>) -> Self {
        Self {
            logger: logger.child(TOOL_NAME),
            config,
            client,
        }
    }

    pub async fn handle_action(&self, request: BatchRequest) -> ActionOutcome {
        let proofs = match request.proofs {
            Some(proofs) if !proofs.is_empty() => proofs,
            _ => {
                return ActionOutcome::failure(
                    "No proofs to certify: pass a non-empty `proofs` list.",
                )
            }
        };
        if proofs.len() > MAX_BATCH_SIZE {
            return ActionOutcome::failure(format!(
                "Too many proofs in one batch: {} given, maximum is {}.",
                proofs.len(),
                MAX_BATCH_SIZE
            ));
        }

        let count = proofs.len();
        let payload = BatchCertificationRequest { proofs };
        match self
            .client
            .submit_proof::<BatchCertificationResult, _>(&self.config, BATCH, &payload)
            .await
        {
            Ok(result) => {
                self.logger.info(
                    "batch certified",
                    Some(&serde_json::json!({
                        "submitted": count,
                        "succeeded": result.succeeded,
                        "failed": result.failed,
                    })),
                );
                ActionOutcome::success(format_batch(&result), serde_json::to_value(&result).ok())
            }
            Err(err) => {
                self.logger.error(
                    "batch certification failed",
                    Some(&serde_json::json!({ "error": err.to_string(), "submitted": count })),
                );
                ActionOutcome::failure(format_failure("certify batch", &err.to_string()))
            }
        }
    }
}

#[async_trait::async_trait]
impl ToolHandler for BatchManager {
    fn validate(&self) -> bool {
        self.config.has_access_token()
    }

    async fn handle(&self, args: Value) -> Result<ActionOutcome, ToolError> {
        let request: BatchRequest = parse_request(TOOL_NAME, args)?;
        Ok(self.handle_action(request).await)
    }
}
