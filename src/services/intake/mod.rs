pub mod sheetdb;

use async_trait::async_trait;

use crate::models::{IntakePayload, SubmissionOutcome};

/// Where validated appointment requests are sent.
#[async_trait]
pub trait IntakeEndpoint: Send + Sync {
    async fn submit(&self, payload: &IntakePayload) -> anyhow::Result<serde_json::Value>;
}

/// Sends one payload and folds the result into an outcome the page can settle.
/// Failures are logged here and never retried.
pub async fn deliver(endpoint: &dyn IntakeEndpoint, payload: &IntakePayload) -> SubmissionOutcome {
    match endpoint.submit(payload).await {
        Ok(body) => {
            tracing::info!(
                preferred_date = %payload.data.preferred_date,
                "appointment request accepted"
            );
            SubmissionOutcome::Accepted(body)
        }
        Err(e) => {
            tracing::error!(error = %format!("{e:#}"), "appointment request failed");
            SubmissionOutcome::Failed(format!("{e:#}"))
        }
    }
}
