use std::time::Duration;

use anyhow::{Context, Result};
use once_cell::sync::OnceCell;
use reqwest::blocking::Client;
use reqwest::header::{ACCEPT, USER_AGENT};
use serde_json::Value;

use crate::error::TransportError;

pub const DEFAULT_USER_AGENT: &str = "AllSportDataGenerator/1.0 (+https://allsport.app)";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Resolves one URL to one JSON document. No caching, no retries.
pub trait Transport {
    fn get_json(&self, url: &str) -> Result<Value, TransportError>;
}

static CLIENT: OnceCell<Client> = OnceCell::new();

/// Process-wide client; the timeout of the first caller wins.
pub fn http_client(timeout: Duration) -> Result<&'static Client> {
    CLIENT.get_or_try_init(|| {
        Client::builder()
            .timeout(timeout)
            .build()
            .context("failed to build http client")
    })
}

pub struct HttpTransport {
    client: &'static Client,
    user_agent: String,
}

impl HttpTransport {
    pub fn new(timeout: Duration, user_agent: &str) -> Result<Self> {
        Ok(Self {
            client: http_client(timeout)?,
            user_agent: user_agent.to_string(),
        })
    }
}

impl Transport for HttpTransport {
    fn get_json(&self, url: &str) -> Result<Value, TransportError> {
        let resp = self
            .client
            .get(url)
            .header(USER_AGENT, self.user_agent.as_str())
            .header(ACCEPT, "application/json")
            .send()?;
        let status = resp.status();
        if !status.is_success() {
            return Err(TransportError::Status {
                status: status.as_u16(),
            });
        }
        decode_body(&resp.text()?)
    }
}

/// Parses a response body. An empty body is a decode failure like any other.
pub fn decode_body(body: &str) -> Result<Value, TransportError> {
    Ok(serde_json::from_str(body)?)
}
