use anyhow::Context;
use async_trait::async_trait;

use super::IntakeEndpoint;
use crate::models::IntakePayload;

/// Spreadsheet-backed intake API. Posts the payload as JSON with no auth header.
pub struct SheetDbEndpoint {
    url: String,
    client: reqwest::Client,
}

impl SheetDbEndpoint {
    pub fn new(url: String) -> Self {
        Self {
            url,
            client: reqwest::Client::new(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl IntakeEndpoint for SheetDbEndpoint {
    async fn submit(&self, payload: &IntakePayload) -> anyhow::Result<serde_json::Value> {
        let resp = self
            .client
            .post(&self.url)
            .json(payload)
            .send()
            .await
            .context("failed to reach intake endpoint")?;

        let status = resp.status();
        let body: serde_json::Value = resp
            .json()
            .await
            .context("failed to parse intake endpoint response")?;

        // Any JSON body counts as delivered; only transport and parse errors fail.
        if !status.is_success() {
            tracing::warn!(%status, body = %body, "intake endpoint answered with non-success status");
        }

        Ok(body)
    }
}
