use crate::services::proof_types::{
    BatchCertificationResult, CertificationResult, CertificationStatus,
};

fn certificate_lines(result: &CertificationResult) -> Vec<String> {
    let mut lines = vec![
        format!("Certificate ID: {}", result.id),
        format!("Status: {}", result.status),
        format!("Hash: {}", result.hash),
        format!("Verify: {}", result.verify_url),
    ];
    if let Some(explorer) = result.explorer_url.as_deref().filter(|s| !s.is_empty()) {
        lines.push(format!("Explorer: {}", explorer));
    }
    lines.push(format!("Certified at: {}", result.certified_at));
    lines
}

pub fn format_certification(headline: &str, result: &CertificationResult) -> String {
    let mut lines = vec![headline.to_string()];
    lines.extend(certificate_lines(result));
    lines.join("\n")
}

pub fn verification_headline(status: &CertificationStatus) -> &'static str {
    match status {
        CertificationStatus::Confirmed => "[confirmed] Proof verified on chain.",
        CertificationStatus::Pending => "[pending] Proof recorded, awaiting blockchain finality.",
        _ => "[failed] Proof is not confirmed on chain.",
    }
}

pub fn format_verification(result: &CertificationResult) -> String {
    format_certification(verification_headline(&result.status), result)
}

/// Result lines follow the service's order.
pub fn format_batch(result: &BatchCertificationResult) -> String {
    let mut lines = vec![format!(
        "Batch certification complete: {} total, {} succeeded, {} failed.",
        result.total, result.succeeded, result.failed
    )];
    for (idx, item) in result.results.iter().enumerate() {
        lines.push(format!(
            "{}. {} [{}] {}",
            idx + 1,
            item.id,
            item.status,
            item.verify_url
        ));
    }
    lines.join("\n")
}

pub fn format_failure(what: &str, reason: &str) -> String {
    format!("Failed to {}: {}", what, reason)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Map;

    fn cert(id: &str, status: CertificationStatus, explorer: Option<&str>) -> CertificationResult {
        CertificationResult {
            id: id.to_string(),
            status,
            hash: "sha256:3f4e...".to_string(),
            transaction_ref: None,
            explorer_url: explorer.map(str::to_string),
            verify_url: format!("https://xproof.app/verify/{}", id),
            certified_at: "2026-02-20T14:00:05Z".to_string(),
            extra: Map::new(),
        }
    }

    #[test]
    fn certification_fields_appear_in_order() {
        let text = format_certification(
            "Content certified.",
            &cert("cert_abc123", CertificationStatus::Pending, None),
        );
        let positions: Vec<usize> = [
            "cert_abc123",
            "pending",
            "sha256:3f4e...",
            "https://xproof.app/verify/cert_abc123",
            "2026-02-20T14:00:05Z",
        ]
        .iter()
        .map(|needle| text.find(needle).expect("field present"))
        .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]), "{}", text);
        assert!(!text.contains("Explorer"));
    }

    #[test]
    fn explorer_line_sits_between_verify_and_timestamp() {
        let text = format_certification(
            "Hash certified.",
            &cert(
                "cert_1",
                CertificationStatus::Confirmed,
                Some("https://explorer.test/tx/1"),
            ),
        );
        let verify = text.find("Verify:").unwrap();
        let explorer = text.find("Explorer: https://explorer.test/tx/1").unwrap();
        let at = text.find("Certified at:").unwrap();
        assert!(verify < explorer && explorer < at);
    }

    #[test]
    fn verification_headline_by_status() {
        assert!(verification_headline(&CertificationStatus::Confirmed).contains("verified"));
        assert!(verification_headline(&CertificationStatus::Pending).contains("finality"));
        assert!(verification_headline(&CertificationStatus::Failed).contains("not confirmed"));
        assert!(
            verification_headline(&CertificationStatus::Other("revoked".into()))
                .contains("not confirmed")
        );
    }

    #[test]
    fn batch_lines_keep_service_order() {
        let result = BatchCertificationResult {
            results: vec![
                cert("cert_c", CertificationStatus::Failed, None),
                cert("cert_a", CertificationStatus::Confirmed, None),
                cert("cert_b", CertificationStatus::Pending, None),
            ],
            total: 3,
            succeeded: 2,
            failed: 1,
        };
        let text = format_batch(&result);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(
            lines[0],
            "Batch certification complete: 3 total, 2 succeeded, 1 failed."
        );
        assert_eq!(
            lines[1],
            "1. cert_c [failed] https://xproof.app/verify/cert_c"
        );
        assert!(lines[2].starts_with("2. cert_a [confirmed]"));
        assert!(lines[3].starts_with("3. cert_b [pending]"));
    }
}
