pub mod config;
pub mod logger;
pub mod proof_client;
pub mod proof_types;
pub mod tool_executor;
