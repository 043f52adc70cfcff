use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// Remote certificate status. Strings the service may add later are kept
/// verbatim in `Other` and treated like a failure when reporting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum CertificationStatus {
    Pending,
    Confirmed,
    Failed,
    Other(String),
}

impl CertificationStatus {
    pub fn as_str(&self) -> &str {
        match self {
            CertificationStatus::Pending => "pending",
            CertificationStatus::Confirmed => "confirmed",
            CertificationStatus::Failed => "failed",
            CertificationStatus::Other(raw) => raw.as_str(),
        }
    }
}

impl From<String> for CertificationStatus {
    fn from(raw: String) -> Self {
        match raw.trim().to_lowercase().as_str() {
            "pending" => CertificationStatus::Pending,
            "confirmed" => CertificationStatus::Confirmed,
            "failed" => CertificationStatus::Failed,
            _ => CertificationStatus::Other(raw),
        }
    }
}

impl From<CertificationStatus> for String {
    fn from(status: CertificationStatus) -> Self {
        status.as_str().to_string()
    }
}

impl fmt::Display for CertificationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One certification request as sent to the service. Exactly one of
/// `content` / `hash` is expected but not enforced.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CertificationRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hash: Option<String>,
    #[serde(default)]
    pub metadata: Map<String, Value>,
}

impl CertificationRequest {
    pub fn for_content(content: impl Into<String>, metadata: Map<String, Value>) -> Self {
        Self {
            content: Some(content.into()),
            hash: None,
            metadata,
        }
    }

    pub fn for_hash(hash: impl Into<String>, metadata: Map<String, Value>) -> Self {
        Self {
            content: None,
            hash: Some(hash.into()),
            metadata,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CertificationResult {
    pub id: String,
    pub status: CertificationStatus,
    pub hash: String,
    #[serde(
        default,
        alias = "transactionHash",
        skip_serializing_if = "Option::is_none"
    )]
    pub transaction_ref: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub explorer_url: Option<String>,
    pub verify_url: String,
    pub certified_at: String,
    /// Fields the service returns beyond the known set, passed through.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BatchCertificationRequest {
    pub proofs: Vec<CertificationRequest>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchCertificationResult {
    pub results: Vec<CertificationResult>,
    pub total: u64,
    pub succeeded: u64,
    pub failed: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_status_is_preserved() {
        let status: CertificationStatus = serde_json::from_value(serde_json::json!("anchoring"))
            .expect("any string is a status");
        assert_eq!(status, CertificationStatus::Other("anchoring".to_string()));
        assert_eq!(serde_json::to_value(&status).unwrap(), "anchoring");
    }

    #[test]
    fn result_parses_camel_case_and_keeps_extra_fields() {
        let result: CertificationResult = serde_json::from_value(serde_json::json!({
            "id": "cert_1",
            "status": "confirmed",
            "hash": "sha256:aa",
            "transactionHash": "0xdead",
            "explorerUrl": "https://explorer.test/tx/0xdead",
            "verifyUrl": "https://xproof.app/verify/cert_1",
            "certifiedAt": "2026-02-20T14:00:05Z",
            "network": "mainnet"
        }))
        .expect("well-formed result");
        assert_eq!(result.status, CertificationStatus::Confirmed);
        assert_eq!(result.transaction_ref.as_deref(), Some("0xdead"));
        assert_eq!(result.extra.get("network"), Some(&serde_json::json!("mainnet")));

        let back = serde_json::to_value(&result).unwrap();
        assert_eq!(back["verifyUrl"], "https://xproof.app/verify/cert_1");
        assert_eq!(back["transactionRef"], "0xdead");
        assert_eq!(back["network"], "mainnet");
    }

    #[test]
    fn request_omits_absent_content_or_hash() {
        let req = CertificationRequest::for_hash("sha256:ab", Map::new());
        let value = serde_json::to_value(&req).unwrap();
        assert_eq!(value, serde_json::json!({"hash": "sha256:ab", "metadata": {}}));
    }
}
