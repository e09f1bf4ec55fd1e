use reqwest::{Client, StatusCode};
use serde_json::Value;

use crate::error::{Result, ServiceError};

pub const HEALTH_QUERY: &str = "{ health }";

/// One-shot GraphQL health probe. Issues a single POST with no retries and no
/// request timeout; a hung server keeps the caller waiting.
#[derive(Clone)]
pub struct HealthClient {
    client: Client,
    endpoint: String,
}

#[derive(Debug)]
pub struct HealthResponse {
    pub status: StatusCode,
    pub body: String,
}

impl HealthClient {
    pub fn new(endpoint: String) -> Self {
        Self {
            client: Client::new(),
            endpoint,
        }
    }

    /// Sends the fixed `{ health }` query and accumulates the full response
    /// body. Connection-level failures surface as `ServiceError::Http`.
    pub async fn send(&self) -> Result<HealthResponse> {
        let body = serde_json::json!({ "query": HEALTH_QUERY });
        let response = self
            .client
            .post(&self.endpoint)
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await?;
        let status = response.status();
        let body = response.text().await?;
        tracing::debug!(status = %status, endpoint = %self.endpoint, "health check response received");
        Ok(HealthResponse { status, body })
    }

    /// `send` + `verify` for callers that don't care about the status line.
    pub async fn check(&self) -> Result<Value> {
        let response = self.send().await?;
        verify(&response.body)
    }
}

/// Decodes a response body and asserts the canonical healthy envelope,
/// `data.health == "OK"`. HTTP status is deliberately not consulted.
pub fn verify(raw: &str) -> Result<Value> {
    let envelope: Value = serde_json::from_str(raw).map_err(|source| ServiceError::Parse {
        source,
        raw: raw.to_string(),
    })?;
    match envelope.pointer("/data/health").and_then(Value::as_str) {
        Some("OK") => Ok(envelope),
        _ => Err(ServiceError::Unhealthy { body: envelope }),
    }
}
