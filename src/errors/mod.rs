mod mcp_error;
mod proof_error;
mod tool_error;

pub use mcp_error::{ErrorCode, McpError};
pub use proof_error::ProofClientError;
pub use tool_error::{ToolError, ToolErrorKind};
