use crate::errors::ToolError;
use crate::managers::{BatchManager, ContentManager, HashManager, VerifyManager};
use crate::mcp::catalog::tool_catalog;
use crate::services::config::{EnvSettings, ProofConfig, RuntimeSettings};
use crate::services::logger::Logger;
use crate::services::proof_client::ProofClient;
use crate::services::tool_executor::{ToolExecutor, ToolHandler};
use std::collections::HashMap;
use std::sync::Arc;

pub struct App {
    pub logger: Logger,
    pub config: ProofConfig,
    pub tool_executor: Arc<ToolExecutor>,
}

impl App {
    fn validate_tool_wiring(
        handlers: &HashMap<String, Arc<dyn ToolHandler>>,
    ) -> Result<(), ToolError> {
        let mut missing: Vec<String> = tool_catalog()
            .iter()
            .filter(|tool| !handlers.contains_key(&tool.name))
            .map(|tool| tool.name.clone())
            .collect();
        if missing.is_empty() {
            return Ok(());
        }
        missing.sort();
        Err(ToolError::internal("Tool wiring is incomplete")
            .with_hint("Every tool in tool_catalog.json must have a handler.")
            .with_details(serde_json::json!({ "missing_tools": missing })))
    }

    /// Resolves configuration from `XPROOF_SETTINGS_FILE` and the process
    /// environment, then wires the app.
    pub fn from_env() -> Result<Self, ToolError> {
        let runtime = RuntimeSettings::from_env_file()?;
        let config = ProofConfig::resolve(&runtime, &EnvSettings);
        Self::initialize(config)
    }

    pub fn initialize(config: ProofConfig) -> Result<Self, ToolError> {
        let logger = Logger::new("xproof").with_secrets([config.access_token.clone()]);
        if !config.has_access_token() {
            logger.warn(
                "XPROOF_API_KEY is not set; certification tools will report failure",
                None,
            );
        }
        logger.info(
            "configuration resolved",
            Some(&serde_json::json!({ "base_url": config.base_url })),
        );

        let client = Arc::new(ProofClient::new(logger.clone())?);

        let content_manager = Arc::new(ContentManager::new(
            logger.clone(),
            config.clone(),
            client.clone(),
        ));
        let hash_manager = Arc::new(HashManager::new(
            logger.clone(),
            config.clone(),
            client.clone(),
        ));
        let batch_manager = Arc::new(BatchManager::new(
            logger.clone(),
            config.clone(),
            client.clone(),
        ));
        let verify_manager = Arc::new(VerifyManager::new(
            logger.clone(),
            config.clone(),
            client.clone(),
        ));

        let mut handlers: HashMap<String, Arc<dyn ToolHandler>> = HashMap::new();
        handlers.insert(crate::managers::content::TOOL_NAME.to_string(), content_manager);
        handlers.insert(crate::managers::hash::TOOL_NAME.to_string(), hash_manager);
        handlers.insert(crate::managers::batch::TOOL_NAME.to_string(), batch_manager);
        handlers.insert(crate::managers::verify::TOOL_NAME.to_string(), verify_manager);

        Self::validate_tool_wiring(&handlers)?;

        let tool_executor = Arc::new(ToolExecutor::new(logger.clone(), handlers));

        Ok(Self {
            logger,
            config,
            tool_executor,
        })
    }
}
