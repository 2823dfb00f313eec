use std::time::Duration;

use reqwest::Client;
use tracing::{debug, warn};

use super::feed::InterviewFeedPayload;
use super::rows::InterviewRow;
use crate::config::InterviewFeedConfig;

#[derive(Debug, thiserror::Error)]
pub enum FeedError {
    #[error("interview feed endpoint is not configured")]
    MissingEndpoint,
    #[error("interview feed request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("interview feed returned status {status}")]
    Status { status: u16 },
}

/// Reads the total-interview feed for one company.
#[derive(Debug, Clone)]
pub struct InterviewFeedClient {
    client: Client,
    endpoint: String,
}

impl InterviewFeedClient {
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self, FeedError> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }

    pub fn from_config(config: &InterviewFeedConfig) -> Result<Self, FeedError> {
        let endpoint = config.endpoint.as_deref().ok_or(FeedError::MissingEndpoint)?;
        Self::new(endpoint, config.timeout)
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub async fn fetch(&self, company_id: &str) -> Result<Vec<InterviewRow>, FeedError> {
        let response = self
            .client
            .get(&self.endpoint)
            .query(&[("company_id", company_id)])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FeedError::Status {
                status: status.as_u16(),
            });
        }

        let payload: InterviewFeedPayload = response.json().await?;
        let rows = payload.flatten();
        debug!(company_id, rows = rows.len(), "interview feed loaded");
        Ok(rows)
    }

    /// Like `fetch`, but a failure is logged and yields an empty list.
    pub async fn fetch_or_empty(&self, company_id: &str) -> Vec<InterviewRow> {
        match self.fetch(company_id).await {
            Ok(rows) => rows,
            Err(error) => {
                warn!(%error, company_id, endpoint = %self.endpoint, "interview feed unavailable");
                Vec::new()
            }
        }
    }
}
