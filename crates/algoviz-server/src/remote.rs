//! Remote engine delegate.
//!
//! A remote engine speaks the same `/api/steps` contract. It is consulted
//! first when configured; the local generators remain the fallback of record.

use std::time::Duration;

use axum::http::StatusCode;
use reqwest::Client;
use serde_json::Value;
use tracing::debug;

use crate::error::Result;
use crate::request::Job;

const STEPS_PATH: &str = "/api/steps";

/// HTTP client for a remote steps engine.
#[derive(Debug, Clone)]
pub struct RemoteEngine {
    client: Client,
    endpoint: String,
}

impl RemoteEngine {
    /// Create a delegate targeting the given base URL (e.g. `http://engine:8000`).
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        let base_url = base_url.into();
        Ok(Self {
            client,
            endpoint: format!("{}{}", base_url.trim_end_matches('/'), STEPS_PATH),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Forward a validated job and return the remote status and JSON body.
    ///
    /// Any response that decodes as JSON is returned as-is, error statuses
    /// included; only transport and decode failures are errors.
    pub async fn forward(&self, job: &Job) -> Result<(StatusCode, Value)> {
        let response = self.client.post(self.endpoint.as_str()).json(job).send().await?;
        let status = StatusCode::from_u16(response.status().as_u16())
            .unwrap_or(StatusCode::BAD_GATEWAY);
        let body: Value = response.json().await?;
        debug!(endpoint = %self.endpoint, %status, "remote engine answered");
        Ok((status, body))
    }
}
