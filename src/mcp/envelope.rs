use crate::services::tool_executor::ActionOutcome;
use serde_json::Value;

/// MCP `tools/call` result for an action outcome: the readable summary as
/// text content, the raw service response as structured content, and
/// `isError` set on failure.
pub fn build_tool_result(outcome: &ActionOutcome) -> Value {
    let mut result = serde_json::json!({
        "content": [ { "type": "text", "text": outcome.message } ],
        "isError": !outcome.succeeded,
    });
    if let (Some(data), Some(obj)) = (outcome.data.as_ref(), result.as_object_mut()) {
        obj.insert("structuredContent".to_string(), data.clone());
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_carries_structured_content() {
        let outcome = ActionOutcome::success(
            "Content certified.",
            Some(serde_json::json!({"id": "cert_1"})),
        );
        let result = build_tool_result(&outcome);
        assert_eq!(result["isError"], false);
        assert_eq!(result["content"][0]["text"], "Content certified.");
        assert_eq!(result["structuredContent"]["id"], "cert_1");
    }

    #[test]
    fn failure_is_flagged_without_data() {
        let result = build_tool_result(&ActionOutcome::failure("Failed to verify proof: boom"));
        assert_eq!(result["isError"], true);
        assert!(result.get("structuredContent").is_none());
    }
}
