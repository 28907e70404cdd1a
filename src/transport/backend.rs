//! # HTTP Backends
//!
//! [`HttpBackend`] is the seam between request classification and the actual
//! network. [`ReqwestBackend`] talks to the real server; the [`mock`](super::mock)
//! module provides in-memory backends for tests.
//!
//! A backend never fails: whatever happens is reported as a [`Completion`] and
//! left to [`classify`](super::classify::classify).

use super::classify::Completion;
use super::request::PreparedRequest;
use async_trait::async_trait;
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, warn};

#[async_trait]
pub trait HttpBackend: Send + Sync {
    /// Performs one request, exactly once.
    async fn send(&self, request: PreparedRequest) -> Completion;
}

/// Production backend built on a shared `reqwest` client.
///
/// The cookie store is enabled so server-set session cookies travel with every
/// later request, alongside the `Authorization` header.
#[derive(Debug, Clone)]
pub struct ReqwestBackend {
    client: reqwest::Client,
}

impl ReqwestBackend {
    pub fn new(timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .cookie_store(true)
            .timeout(timeout)
            .build()?;
        Ok(Self { client })
    }

    /// Wraps an already configured client.
    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl HttpBackend for ReqwestBackend {
    async fn send(&self, request: PreparedRequest) -> Completion {
        let mut builder = self
            .client
            .request(request.method.into(), request.url.as_str());
        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        if let Some(body) = &request.body {
            builder = builder.body(body.to_string());
        }

        let response = match builder.send().await {
            Ok(response) => response,
            Err(e) => {
                warn!(url = %request.url, error = %e, "Request failed before a response arrived");
                return Completion::NoResponse {
                    reason: e.to_string(),
                };
            }
        };

        let status = response.status().as_u16();
        match response.text().await {
            Ok(text) => {
                debug!(status, bytes = text.len(), "Response received");
                Completion::Response {
                    status,
                    body: parse_body(text),
                }
            }
            Err(e) => {
                warn!(url = %request.url, error = %e, "Response body could not be read");
                Completion::NoResponse {
                    reason: e.to_string(),
                }
            }
        }
    }
}

/// JSON bodies are parsed; anything else is kept as a JSON string.
fn parse_body(text: String) -> Value {
    if text.trim().is_empty() {
        return Value::Null;
    }
    serde_json::from_str(&text).unwrap_or(Value::String(text))
}
