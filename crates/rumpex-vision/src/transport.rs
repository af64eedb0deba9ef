//! Transport seam over the generateContent HTTP call.

use async_trait::async_trait;
use serde_json::Value;

use rumpex_core::{RumpexError, RumpexResult};

use crate::client::GenerateContentRequest;

/// Raw reply from the generative endpoint: HTTP status plus the body,
/// parsed as JSON when possible and string-wrapped otherwise.
#[derive(Debug, Clone)]
pub struct UpstreamReply {
    pub status: u16,
    pub body: Value,
}

/// One POST to a generateContent endpoint.
///
/// Implemented by [`HttpTransport`] in production and by stubs in tests, so
/// relay behavior can be verified without a live model call.
#[async_trait]
pub trait GenerateTransport: Send + Sync {
    async fn generate(&self, request: &GenerateContentRequest) -> RumpexResult<UpstreamReply>;
}

/// reqwest-backed transport. The API key travels as a query parameter, the
/// way the Gemini REST endpoint expects it. No retry and no timeout
/// override; the single attempt is bounded only by the hosting environment.
pub struct HttpTransport {
    url: String,
    api_key: String,
    client: reqwest::Client,
}

impl HttpTransport {
    pub fn new(url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            api_key: api_key.into(),
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl GenerateTransport for HttpTransport {
    async fn generate(&self, request: &GenerateContentRequest) -> RumpexResult<UpstreamReply> {
        let response = self
            .client
            .post(&self.url)
            .query(&[("key", self.api_key.as_str())])
            .json(request)
            .send()
            .await
            .map_err(|e| RumpexError::Http(e.to_string()))?;

        let status = response.status().as_u16();
        let text = response
            .text()
            .await
            .map_err(|e| RumpexError::Http(e.to_string()))?;
        let body = serde_json::from_str(&text).unwrap_or(Value::String(text));

        Ok(UpstreamReply { status, body })
    }
}
