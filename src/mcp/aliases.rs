use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Alternate names agents use for the certification actions.
pub const BUILTIN_TOOL_ALIASES: &[(&str, &str)] = &[
    ("CERTIFY_CONTENT", "certify_content"),
    ("certify", "certify_content"),
    ("notarize", "certify_content"),
    ("CERTIFY_HASH", "certify_hash"),
    ("notarize_hash", "certify_hash"),
    ("CERTIFY_BATCH", "certify_batch"),
    ("batch_certify", "certify_batch"),
    ("VERIFY_PROOF", "verify_proof"),
    ("verify", "verify_proof"),
    ("check_certificate", "verify_proof"),
];

static BUILTIN_TOOL_ALIAS_MAP: Lazy<HashMap<&'static str, &'static str>> =
    Lazy::new(|| BUILTIN_TOOL_ALIASES.iter().copied().collect());

pub fn canonical_tool_name(tool: &str) -> &str {
    BUILTIN_TOOL_ALIAS_MAP.get(tool).copied().unwrap_or(tool)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aliases_resolve_to_canonical_names() {
        assert_eq!(canonical_tool_name("CERTIFY_HASH"), "certify_hash");
        assert_eq!(canonical_tool_name("verify"), "verify_proof");
        assert_eq!(canonical_tool_name("certify_batch"), "certify_batch");
        assert_eq!(canonical_tool_name("unknown"), "unknown");
    }

    #[test]
    fn every_alias_targets_a_catalog_tool() {
        for (alias, target) in BUILTIN_TOOL_ALIASES {
            assert!(
                crate::mcp::catalog::tool_by_name(target).is_some(),
                "{} -> {}",
                alias,
                target
            );
            assert!(crate::mcp::catalog::tool_by_name(alias).is_some());
        }
    }
}
