//! One manager per agent-callable action.
//!
//! Every manager decodes its arguments into a strict request record, checks
//! the input before touching the network, and turns both success and
//! failure into an [`ActionOutcome`](crate::services::tool_executor::ActionOutcome).

pub mod batch;
pub mod content;
pub mod hash;
pub mod verify;

use crate::errors::ToolError;
use serde::de::DeserializeOwned;
use serde_json::Value;

pub use batch::{BatchManager, BatchRequest};
pub use content::{ContentManager, ContentRequest};
pub use hash::{HashManager, HashRequest};
pub use verify::{VerifyManager, VerifyRequest};

pub(crate) fn parse_request<T: DeserializeOwned>(tool: &str, args: Value) -> Result<T, ToolError> {
    let args = if args.is_null() {
        Value::Object(Default::default())
    } else {
        args
    };
    serde_json::from_value(args).map_err(|err| {
        ToolError::invalid_params(format!("Invalid arguments for {}: {}", tool, err))
    })
}
