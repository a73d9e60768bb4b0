//! Form submission over HTTP
//!
//! The completed form is POSTed once as a JSON object. The request runs on a
//! spawned task and reports back to the UI loop through a channel so the
//! wizard stays interactive while it is in flight.

pub mod errors;

use anyhow::{Context, Result};
use tokio::sync::mpsc;

use crate::config::EndpointConfig;
use crate::form::FormValues;
use errors::SubmitError;

/// Messages sent from the submission task to the UI
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitMessage {
    /// Endpoint answered 2xx
    Succeeded,
    /// Transport failure or non-2xx response
    Failed(SubmitError),
}

/// HTTP client bound to the submission endpoint
#[derive(Debug, Clone)]
pub struct SubmitClient {
    client: reqwest::Client,
    url: String,
}

impl SubmitClient {
    pub fn new(config: &EndpointConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(config.user_agent.as_str())
            .timeout(config.timeout())
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            url: config.url.clone(),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// POST the form values. Any 2xx counts as success.
    pub async fn submit(&self, values: &FormValues) -> Result<(), SubmitError> {
        tracing::info!("Submitting form to {}", self.url);

        let response = self.client.post(&self.url).json(values).send().await?;
        let status = response.status();
        if status.is_success() {
            return Ok(());
        }

        let body = response.text().await.unwrap_or_default();
        Err(SubmitError::status(status.as_u16(), &body))
    }
}

/// Spawn the request and report its outcome on `tx`
pub fn start_submission(tx: mpsc::Sender<SubmitMessage>, client: SubmitClient, values: FormValues) {
    tokio::spawn(async move {
        let msg = match client.submit(&values).await {
            Ok(()) => SubmitMessage::Succeeded,
            Err(e) => SubmitMessage::Failed(e),
        };
        // Channel may be closed if the UI already exited
        if let Err(e) = tx.send(msg).await {
            tracing::warn!("Failed to send submission result to channel: {}", e);
        }
    });
}
