use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, info};

use super::{ScoringBackend, SubmissionError, SUBMIT_APPLICATION_PATH};
use crate::application::SubmissionPayload;
use crate::config::BackendConfig;
use crate::qualification::QualificationResult;

/// Scoring backend reached over HTTP. One request per submission: no retries, no timeout.
#[derive(Debug, Clone)]
pub struct HttpScoringClient {
    http: Client,
    endpoint: String,
}

impl HttpScoringClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            http: Client::new(),
            endpoint: format!(
                "{}{}",
                base_url.trim_end_matches('/'),
                SUBMIT_APPLICATION_PATH
            ),
        }
    }

    pub fn from_config(config: &BackendConfig) -> Self {
        Self::new(&config.base_url)
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl ScoringBackend for HttpScoringClient {
    async fn submit_application(
        &self,
        payload: &SubmissionPayload,
    ) -> Result<QualificationResult, SubmissionError> {
        debug!(endpoint = %self.endpoint, "submitting application");

        let response = self.http.post(&self.endpoint).json(payload).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(SubmissionError::Status {
                status: status.as_u16(),
            });
        }

        let body = response.text().await?;
        let result: QualificationResult = serde_json::from_str(&body)?;
        info!(
            score = ?result.qualification_score,
            status = %result.qualification_status,
            lenders = result.matched_lenders.len(),
            "qualification result received"
        );
        Ok(result)
    }
}
