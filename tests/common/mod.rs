#![allow(dead_code)]

use serde_json::Value;
use std::sync::Arc;
use wiremock::matchers::any;
use wiremock::{Mock, MockServer, ResponseTemplate};
use xproof::services::config::ProofConfig;
use xproof::services::logger::{LogLevel, Logger};
use xproof::services::proof_client::ProofClient;

pub const API_KEY: &str = "test-api-key";
pub const BEARER: &str = "Bearer test-api-key";

pub fn test_logger() -> Logger {
    Logger::with_level("test", LogLevel::Error)
}

pub fn config_for(server: &MockServer) -> ProofConfig {
    ProofConfig::new(API_KEY, server.uri())
}

pub fn proof_client() -> Arc<ProofClient> {
    Arc::new(ProofClient::new(test_logger()).expect("http client"))
}

pub fn certificate(id: &str, status: &str) -> Value {
    serde_json::json!({
        "id": id,
        "status": status,
        "hash": "sha256:3f4e...",
        "verifyUrl": format!("https://xproof.app/verify/{}", id),
        "certifiedAt": "2026-02-20T14:00:05Z",
    })
}

/// Mounts a catch-all mock that fails verification if any request arrives.
pub async fn expect_no_requests(server: &MockServer) {
    Mock::given(any())
        .respond_with(ResponseTemplate::new(500))
        .expect(0)
        .mount(server)
        .await;
}

pub async fn request_count(server: &MockServer) -> usize {
    server
        .received_requests()
        .await
        .map(|requests| requests.len())
        .unwrap_or(0)
}
