use crate::constants::service::DEFAULT_BASE_URL;
use crate::constants::settings::{API_KEY, BASE_URL, SETTINGS_FILE};
use crate::errors::ToolError;
use serde_json::Value;
use std::collections::HashMap;
use std::path::Path;
use url::Url;

/// Named-setting lookup. Blank values are reported as absent.
pub trait SettingsLookup: Send + Sync {
    fn get_setting(&self, key: &str) -> Option<String>;
}

/// Reads settings from the process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnvSettings;

impl SettingsLookup for EnvSettings {
    fn get_setting(&self, key: &str) -> Option<String> {
        std::env::var(key).ok().and_then(non_blank)
    }
}

/// Settings handed over by the agent runtime, typically loaded from a flat
/// JSON object of strings.
#[derive(Debug, Clone, Default)]
pub struct RuntimeSettings {
    values: HashMap<String, String>,
}

impl RuntimeSettings {
    pub fn new(values: HashMap<String, String>) -> Self {
        Self { values }
    }

    pub fn from_json(value: &Value) -> Result<Self, ToolError> {
        let obj = value
            .as_object()
            .ok_or_else(|| ToolError::config("Runtime settings must be a JSON object"))?;
        let mut values = HashMap::new();
        for (key, entry) in obj.iter() {
            let rendered = match entry {
                Value::Null => continue,
                Value::String(text) => text.clone(),
                Value::Bool(_) | Value::Number(_) => entry.to_string(),
                _ => {
                    return Err(ToolError::config(format!(
                        "Runtime setting '{}' must be a string",
                        key
                    )))
                }
            };
            values.insert(key.clone(), rendered);
        }
        Ok(Self { values })
    }

    pub fn from_file(path: &Path) -> Result<Self, ToolError> {
        let raw = std::fs::read_to_string(path).map_err(|err| {
            ToolError::config(format!("Failed to read settings file: {}", err))
                .with_details(serde_json::json!({ "path": path.display().to_string() }))
        })?;
        let parsed: Value = serde_json::from_str(&raw).map_err(|err| {
            ToolError::config(format!("Settings file is not valid JSON: {}", err))
                .with_details(serde_json::json!({ "path": path.display().to_string() }))
        })?;
        Self::from_json(&parsed)
    }

    /// Loads the file named by `XPROOF_SETTINGS_FILE`, or empty settings when
    /// the variable is unset.
    pub fn from_env_file() -> Result<Self, ToolError> {
        match EnvSettings.get_setting(SETTINGS_FILE) {
            Some(path) => Self::from_file(Path::new(&path)),
            None => Ok(Self::default()),
        }
    }
}

impl SettingsLookup for RuntimeSettings {
    fn get_setting(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned().and_then(non_blank)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProofConfig {
    pub access_token: String,
    pub base_url: String,
}

impl ProofConfig {
    pub fn new(access_token: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            access_token: access_token.into(),
            base_url: normalize_base_url(&base_url.into()),
        }
    }

    /// Runtime settings win over the environment. A missing token is not an
    /// error here; handlers report it when they are invoked.
    pub fn resolve(runtime: &dyn SettingsLookup, env: &dyn SettingsLookup) -> Self {
        let access_token = runtime
            .get_setting(API_KEY)
            .or_else(|| env.get_setting(API_KEY))
            .unwrap_or_default();
        let base_url = runtime
            .get_setting(BASE_URL)
            .or_else(|| env.get_setting(BASE_URL))
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        Self::new(access_token, base_url)
    }

    pub fn has_access_token(&self) -> bool {
        !self.access_token.trim().is_empty()
    }

    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

fn non_blank(value: String) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

fn normalize_base_url(raw: &str) -> String {
    let raw = raw.trim();
    match Url::parse(raw) {
        Ok(mut url) if url.has_host() => {
            url.set_fragment(None);
            url.set_query(None);
            let normalized = format!("{}{}", url.origin().ascii_serialization(), url.path());
            normalized.trim_end_matches('/').to_string()
        }
        _ => raw.trim_end_matches('/').to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ToolErrorKind;

    fn settings(pairs: &[(&str, &str)]) -> RuntimeSettings {
        RuntimeSettings::new(
            pairs
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        )
    }

    #[test]
    fn runtime_settings_take_precedence_over_env() {
        let runtime = settings(&[(API_KEY, "runtime-key"), (BASE_URL, "https://runtime.test")]);
        let env = settings(&[(API_KEY, "env-key"), (BASE_URL, "https://env.test")]);
        let config = ProofConfig::resolve(&runtime, &env);
        assert_eq!(config.access_token, "runtime-key");
        assert_eq!(config.base_url, "https://runtime.test");
    }

    #[test]
    fn env_fills_in_missing_runtime_values() {
        let runtime = settings(&[(BASE_URL, "  ")]);
        let env = settings(&[(API_KEY, "env-key"), (BASE_URL, "https://env.test/")]);
        let config = ProofConfig::resolve(&runtime, &env);
        assert_eq!(config.access_token, "env-key");
        assert_eq!(config.base_url, "https://env.test");
    }

    #[test]
    fn defaults_apply_when_nothing_is_set() {
        let config = ProofConfig::resolve(&settings(&[]), &settings(&[]));
        assert_eq!(config.access_token, "");
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert!(!config.has_access_token());
    }

    #[test]
    fn base_url_keeps_path_prefix_and_drops_query() {
        let config = ProofConfig::new("k", "https://proxy.example.com/xproof/?debug=1#frag");
        assert_eq!(config.base_url, "https://proxy.example.com/xproof");
        assert_eq!(
            config.endpoint("/api/proof"),
            "https://proxy.example.com/xproof/api/proof"
        );
    }

    #[test]
    fn base_url_with_port_is_preserved() {
        let config = ProofConfig::new("k", "http://127.0.0.1:8080");
        assert_eq!(config.endpoint("/api/batch"), "http://127.0.0.1:8080/api/batch");
    }

    #[test]
    fn runtime_settings_from_json_rejects_nested_values() {
        let ok = RuntimeSettings::from_json(&serde_json::json!({
            "XPROOF_API_KEY": "abc",
            "RETRIES": 2,
            "UNUSED": null
        }))
        .expect("flat settings");
        assert_eq!(ok.get_setting(API_KEY).as_deref(), Some("abc"));
        assert_eq!(ok.get_setting("RETRIES").as_deref(), Some("2"));
        assert_eq!(ok.get_setting("UNUSED"), None);

        let err = RuntimeSettings::from_json(&serde_json::json!({"nested": {"a": 1}}))
            .expect_err("nested values are rejected");
        assert!(err.message.contains("nested"));
    }

    fn settings_path(name: &str) -> std::path::PathBuf {
        std::env::temp_dir().join(format!("xproof-settings-{}-{}", std::process::id(), name))
    }

    #[test]
    fn missing_settings_file_is_a_config_error() {
        let path = settings_path("missing.json");
        let _ = std::fs::remove_file(&path);

        let err = RuntimeSettings::from_file(&path).expect_err("file does not exist");
        assert_eq!(err.kind, ToolErrorKind::Config);
        let details = err.details.expect("details");
        assert_eq!(details["path"], path.display().to_string());
    }

    #[test]
    fn malformed_settings_file_is_a_config_error() {
        let path = settings_path("malformed.json");
        std::fs::write(&path, "XPROOF_API_KEY=abc").expect("write settings");

        let err = RuntimeSettings::from_file(&path).expect_err("not json");
        let _ = std::fs::remove_file(&path);
        assert_eq!(err.kind, ToolErrorKind::Config);
        assert!(err.message.contains("not valid JSON"), "{}", err.message);
    }

    #[test]
    fn settings_file_overrides_env() {
        let path = settings_path("flat.json");
        std::fs::write(
            &path,
            r#"{"XPROOF_API_KEY": "file-key", "XPROOF_BASE_URL": "https://file.test/"}"#,
        )
        .expect("write settings");

        let runtime = RuntimeSettings::from_file(&path).expect("flat settings file");
        let _ = std::fs::remove_file(&path);
        let env = settings(&[(API_KEY, "env-key"), (BASE_URL, "https://env.test")]);
        let config = ProofConfig::resolve(&runtime, &env);
        assert_eq!(config.access_token, "file-key");
        assert_eq!(config.base_url, "https://file.test");
    }
}
