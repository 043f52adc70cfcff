use thiserror::Error;

/// Failure of a single request against the xProof API.
#[derive(Error, Debug)]
pub enum ProofClientError {
    #[error("XPROOF_API_KEY is not configured")]
    Authentication,

    #[error("xProof API error ({status}): {body}")]
    Api { status: u16, body: String },

    #[error("invalid request URL: {0}")]
    InvalidUrl(String),

    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("invalid response body: {0}")]
    Decode(#[from] serde_json::Error),
}

impl ProofClientError {
    pub fn status(&self) -> Option<u16> {
        match self {
            ProofClientError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_error_message_carries_status_and_body() {
        let err = ProofClientError::Api {
            status: 500,
            body: "internal error".to_string(),
        };
        let text = err.to_string();
        assert!(text.contains("500"));
        assert!(text.contains("internal error"));
        assert_eq!(err.status(), Some(500));
    }

    #[test]
    fn authentication_error_names_the_setting() {
        assert!(ProofClientError::Authentication
            .to_string()
            .contains("XPROOF_API_KEY"));
        assert_eq!(ProofClientError::Authentication.status(), None);
    }
}
