//! Error types shared by the fetch client and the normalization pipeline.

/// A single failed request. Always retryable from the fetcher's point of view.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("http {status}")]
    Status { status: u16 },
    #[error("invalid json: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Terminal failure: every attempt for `url` failed. Aborts the run.
#[derive(Debug, thiserror::Error)]
#[error("failed to fetch {url} after {attempts} attempt(s): {source}")]
pub struct FetchError {
    pub url: String,
    pub attempts: u32,
    #[source]
    pub source: TransportError,
}

/// Rejected runtime configuration, reported before any network call.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("unknown league id: {0}")]
    UnknownLeague(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fetch_error_names_url_and_cause() {
        let err = FetchError {
            url: "https://example.test/teams/1".to_string(),
            attempts: 3,
            source: TransportError::Status { status: 503 },
        };
        let msg = err.to_string();
        assert!(msg.contains("https://example.test/teams/1"));
        assert!(msg.contains("http 503"));
        assert!(msg.contains("3 attempt"));
    }

    #[test]
    fn fetch_error_exposes_transport_source() {
        let err = FetchError {
            url: "u".to_string(),
            attempts: 1,
            source: TransportError::Status { status: 404 },
        };
        let source = std::error::Error::source(&err).map(|s| s.to_string());
        assert_eq!(source.as_deref(), Some("http 404"));
    }
}
