use crate::constants::paths::PROOF;
use crate::constants::service::USER_AGENT;
use crate::errors::{ProofClientError, ToolError};
use crate::services::config::ProofConfig;
use crate::services::logger::Logger;
use crate::services::proof_types::CertificationResult;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::Serialize;
use url::Url;

fn certificate_url(config: &ProofConfig, cert_id: &str) -> Result<Url, ProofClientError> {
    let mut url = Url::parse(&config.endpoint(PROOF))
        .map_err(|err| ProofClientError::InvalidUrl(err.to_string()))?;
    url.path_segments_mut()
        .map_err(|_| ProofClientError::InvalidUrl(format!("{} has no path", config.base_url)))?
        .push(cert_id);
    Ok(url)
}

/// Thin authenticated client for the xProof HTTP API.
///
/// One request per call: no retry, no explicit timeout, no caching.
#[derive(Clone)]
pub struct ProofClient {
    logger: Logger,
    client: Client,
}

impl ProofClient {
    pub fn new(logger: Logger) -> Result<Self, ToolError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(|err| ToolError::internal(format!("Failed to build HTTP client: {}", err)))?;
        Ok(Self {
            logger: logger.child("proof_client"),
            client,
        })
    }

    fn build_headers(&self, access_token: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        if let Ok(value) = HeaderValue::from_str(&format!("Bearer {}", access_token)) {
            headers.insert(AUTHORIZATION, value);
        }
        headers
    }

    async fn send_json<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
    ) -> Result<T, ProofClientError> {
        let response = request.send().await?;
        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            self.logger.warn(
                "xproof request rejected",
                Some(&serde_json::json!({ "status": status.as_u16() })),
            );
            return Err(ProofClientError::Api {
                status: status.as_u16(),
                body: text,
            });
        }

        Ok(serde_json::from_str(&text)?)
    }

    /// POST `payload` as JSON to `base_url + path`.
    ///
    /// Fails with [`ProofClientError::Authentication`] before any I/O when the
    /// access token is empty.
    pub async fn submit_proof<T, P>(
        &self,
        config: &ProofConfig,
        path: &str,
        payload: &P,
    ) -> Result<T, ProofClientError>
    where
        T: DeserializeOwned,
        P: Serialize + ?Sized,
    {
        if !config.has_access_token() {
            return Err(ProofClientError::Authentication);
        }
        let url = config.endpoint(path);
        self.logger
            .debug("submit_proof", Some(&serde_json::json!({ "url": url })));
        let request = self
            .client
            .post(&url)
            .headers(self.build_headers(&config.access_token))
            .header(CONTENT_TYPE, "application/json")
            .json(payload);
        self.send_json(request).await
    }

    /// GET `base_url + /api/proof/ + cert_id`. The id is sent as a single
    /// percent-encoded path segment.
    pub async fn fetch_proof(
        &self,
        config: &ProofConfig,
        cert_id: &str,
    ) -> Result<CertificationResult, ProofClientError> {
        let url = certificate_url(config, cert_id)?;
        self.logger
            .debug("fetch_proof", Some(&serde_json::json!({ "url": url.as_str() })));
        let request = self
            .client
            .get(url)
            .headers(self.build_headers(&config.access_token));
        self.send_json(request).await
    }
}
