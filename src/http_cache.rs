use std::collections::HashMap;
use std::thread;
use std::time::Duration;

use serde_json::Value;

use crate::error::{FetchError, TransportError};
use crate::http_client::Transport;

pub const DEFAULT_ATTEMPTS: u32 = 3;
pub const DEFAULT_DELAY_MS: u64 = 80;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Total tries per URL, including the first.
    pub attempts: u32,
    /// Pause after every network success; retry `n` waits `delay * n`.
    pub delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            attempts: DEFAULT_ATTEMPTS,
            delay: Duration::from_millis(DEFAULT_DELAY_MS),
        }
    }
}

impl RetryPolicy {
    pub fn backoff(&self, attempt: u32) -> Duration {
        self.delay * attempt
    }
}

/// Memoizing, retrying JSON fetcher for a single run.
///
/// Calls are strictly sequential. A URL that succeeded once is never requested
/// again; failures are not cached.
pub struct Fetcher<T> {
    transport: T,
    policy: RetryPolicy,
    cache: HashMap<String, Value>,
    network_calls: usize,
}

impl<T: Transport> Fetcher<T> {
    pub fn new(transport: T, policy: RetryPolicy) -> Self {
        Self {
            transport,
            policy,
            cache: HashMap::new(),
            network_calls: 0,
        }
    }

    pub fn get(&mut self, url: &str) -> Result<Value, FetchError> {
        if let Some(cached) = self.cache.get(url) {
            log::debug!("cache hit {url}");
            return Ok(cached.clone());
        }

        let attempts = self.policy.attempts.max(1);
        let mut attempt = 0u32;
        loop {
            attempt += 1;
            self.network_calls += 1;
            match self.transport.get_json(url) {
                Ok(doc) => {
                    self.cache.insert(url.to_string(), doc.clone());
                    pause(self.policy.delay);
                    return Ok(doc);
                }
                Err(err) if attempt < attempts => {
                    log::warn!("{url}: attempt {attempt}/{attempts} failed: {err}, retrying");
                    pause(self.policy.backoff(attempt));
                }
                Err(err) => {
                    log::error!("{url}: failed permanently: {err}");
                    return Err(exhausted(url, attempt, err));
                }
            }
        }
    }

    /// Number of transport requests issued so far, retries included.
    pub fn network_calls(&self) -> usize {
        self.network_calls
    }

    pub fn cached_urls(&self) -> usize {
        self.cache.len()
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn into_transport(self) -> T {
        self.transport
    }
}

fn exhausted(url: &str, attempts: u32, source: TransportError) -> FetchError {
    FetchError {
        url: url.to_string(),
        attempts,
        source,
    }
}

fn pause(delay: Duration) {
    if !delay.is_zero() {
        thread::sleep(delay);
    }
}
