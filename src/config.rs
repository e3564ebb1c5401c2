//! Runtime settings: built-in defaults, then environment, then CLI flags.

use std::path::PathBuf;
use std::time::Duration;

use crate::http_cache::{DEFAULT_ATTEMPTS, DEFAULT_DELAY_MS, RetryPolicy};
use crate::http_client::{DEFAULT_TIMEOUT_SECS, DEFAULT_USER_AGENT};

pub const DEFAULT_OUTPUT: &str = "data/sports-data.js";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    pub output: PathBuf,
    pub retries: u32,
    pub delay: Duration,
    pub timeout: Duration,
    pub user_agent: String,
    /// Catalog ids to build; empty means the whole catalog.
    pub leagues: Vec<String>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            output: PathBuf::from(DEFAULT_OUTPUT),
            retries: DEFAULT_ATTEMPTS,
            delay: Duration::from_millis(DEFAULT_DELAY_MS),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            leagues: Vec::new(),
        }
    }
}

impl GeneratorConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Unparseable numbers fall back to the default; parsed ones are clamped.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let d = Self::default();
        let output = lookup("ALLSPORT_OUTPUT")
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or(d.output);
        let retries = lookup("FETCH_RETRIES")
            .and_then(|v| v.trim().parse::<u32>().ok())
            .unwrap_or(d.retries)
            .clamp(1, 10);
        let delay_ms = lookup("FETCH_DELAY_MS")
            .and_then(|v| v.trim().parse::<u64>().ok())
            .unwrap_or(DEFAULT_DELAY_MS)
            .min(10_000);
        let timeout_secs = lookup("REQUEST_TIMEOUT_SECS")
            .and_then(|v| v.trim().parse::<u64>().ok())
            .unwrap_or(DEFAULT_TIMEOUT_SECS)
            .clamp(1, 300);
        let user_agent = lookup("ALLSPORT_USER_AGENT")
            .filter(|v| !v.trim().is_empty())
            .unwrap_or(d.user_agent);
        let leagues = lookup("ALLSPORT_LEAGUES")
            .map(|v| split_list(&v))
            .unwrap_or_default();

        Self {
            output,
            retries,
            delay: Duration::from_millis(delay_ms),
            timeout: Duration::from_secs(timeout_secs),
            user_agent,
            leagues,
        }
    }

    pub fn retry_policy(&self) -> RetryPolicy {
        RetryPolicy {
            attempts: self.retries,
            delay: self.delay,
        }
    }
}

/// Comma separated, trimmed, lowercased, empties dropped.
pub fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_ascii_lowercase())
        .filter(|s| !s.is_empty())
        .collect()
}
