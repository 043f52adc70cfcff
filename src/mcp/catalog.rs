use crate::constants::limits::SUGGESTION_LIMIT;
use crate::errors::{ErrorCode, McpError};
use crate::mcp::aliases::canonical_tool_name;
use crate::utils::suggest::suggest;
use jsonschema::error::ValidationErrorKind;
use jsonschema::JSONSchema;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolDef {
    pub name: String,
    pub description: String,
    #[serde(rename = "inputSchema")]
    pub input_schema: Value,
}

static TOOL_CATALOG: Lazy<Vec<ToolDef>> = Lazy::new(|| {
    let raw = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/tool_catalog.json"));
    serde_json::from_str(raw).expect("tool_catalog.json must be valid JSON")
});

static TOOL_MAP: Lazy<HashMap<String, ToolDef>> = Lazy::new(|| {
    TOOL_CATALOG
        .iter()
        .cloned()
        .map(|tool| (tool.name.clone(), tool))
        .collect()
});

static TOOL_VALIDATORS: Lazy<HashMap<String, JSONSchema>> = Lazy::new(|| {
    let mut map = HashMap::new();
    for tool in TOOL_CATALOG.iter() {
        if let Ok(schema) = JSONSchema::compile(&tool.input_schema) {
            map.insert(tool.name.clone(), schema);
        }
    }
    map
});

pub fn tool_catalog() -> &'static Vec<ToolDef> {
    &TOOL_CATALOG
}

/// Resolves aliases before the lookup.
pub fn tool_by_name(name: &str) -> Option<&'static ToolDef> {
    TOOL_MAP.get(canonical_tool_name(name))
}

pub fn validate_tool_args(tool_name: &str, args: &Value) -> Result<(), McpError> {
    let canonical = canonical_tool_name(tool_name);
    let (Some(tool), Some(schema)) = (tool_by_name(canonical), TOOL_VALIDATORS.get(canonical))
    else {
        return Ok(());
    };
    let empty = Value::Object(Default::default());
    let instance = if args.is_null() { &empty } else { args };
    if let Err(errors) = schema.validate(instance) {
        let mut rendered = Vec::new();
        let mut did_you_means = Vec::new();
        for err in errors.take(10) {
            let path = err.instance_path.to_string();
            let path = if path.is_empty() { "(root)".to_string() } else { path };
            if let ValidationErrorKind::AdditionalProperties { unexpected } = &err.kind {
                let known: Vec<&str> = tool
                    .input_schema
                    .get("properties")
                    .and_then(|v| v.as_object())
                    .map(|props| props.keys().map(String::as_str).collect())
                    .unwrap_or_default();
                for field in unexpected {
                    rendered.push(format!("{}: unknown field '{}'", path, field));
                    let suggestions = suggest(field, &known, SUGGESTION_LIMIT);
                    if !suggestions.is_empty() {
                        did_you_means.push(format!("'{}' -> {}", field, suggestions.join(", ")));
                    }
                }
                continue;
            }
            rendered.push(format!("{}: {}", path, err));
        }
        let mut message = format!("Invalid arguments for {}: {}", canonical, rendered.join("; "));
        if !did_you_means.is_empty() {
            message.push_str(&format!(". Did you mean: {}", did_you_means.join("; ")));
        }
        return Err(McpError::new(ErrorCode::InvalidParams, message));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_lists_the_four_actions() {
        let names: Vec<&str> = tool_catalog().iter().map(|t| t.name.as_str()).collect();
        assert_eq!(
            names,
            vec!["certify_content", "certify_hash", "certify_batch", "verify_proof"]
        );
        assert_eq!(TOOL_VALIDATORS.len(), 4, "every schema must compile");
    }

    #[test]
    fn wrong_types_are_rejected() {
        let err = validate_tool_args("certify_content", &serde_json::json!({"content": 42}))
            .expect_err("content must be a string");
        assert_eq!(err.code, ErrorCode::InvalidParams);
        assert!(err.message.contains("/content"), "{}", err.message);
    }

    #[test]
    fn unknown_fields_get_suggestions() {
        let err = validate_tool_args("VERIFY_PROOF", &serde_json::json!({"cert": "cert_1"}))
            .expect_err("unknown field");
        assert!(err.message.contains("unknown field 'cert'"), "{}", err.message);
        assert!(err.message.contains("cert_id"), "{}", err.message);
    }

    #[test]
    fn oversized_batches_pass_schema_validation() {
        let proofs: Vec<Value> = (0..51)
            .map(|i| serde_json::json!({"content": format!("item {}", i)}))
            .collect();
        assert!(validate_tool_args("certify_batch", &serde_json::json!({"proofs": proofs})).is_ok());
        assert!(validate_tool_args("certify_batch", &Value::Null).is_ok());
    }
}
