use std::time::Duration;

use anyhow::Context;
use async_trait::async_trait;
use folio_core::config::ContactConfig;
use folio_core::ports::{ContactSendError, ContactSenderPort};
use folio_core::ContactSubmission;
use serde::Deserialize;
use tracing::info;

/// Error body returned by the contact endpoint on failure.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: Option<String>,
}

/// Posts contact submissions as JSON to a configured endpoint.
pub struct HttpContactSender {
    http: reqwest::Client,
    endpoint: String,
}

impl HttpContactSender {
    pub fn new(config: &ContactConfig) -> anyhow::Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()
            .context("failed to build contact HTTP client")?;
        Ok(Self {
            http,
            endpoint: config.endpoint.clone(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl ContactSenderPort for HttpContactSender {
    async fn send(&self, submission: &ContactSubmission) -> Result<(), ContactSendError> {
        let response = self
            .http
            .post(&self.endpoint)
            .json(submission)
            .send()
            .await
            .map_err(|e| ContactSendError::Transport(e.to_string()))?;

        let status = response.status();
        if status.is_success() {
            info!(status = status.as_u16(), "contact message delivered");
            return Ok(());
        }

        // An unreadable or non-JSON body still counts as a rejection.
        let body = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<ErrorBody>(&body)
            .ok()
            .and_then(|b| b.error)
            .unwrap_or_default();
        Err(ContactSendError::Rejected(message))
    }
}
