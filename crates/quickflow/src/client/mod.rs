//! Seam between the form controller and the remote scoring service.

mod http;

use async_trait::async_trait;

use crate::application::SubmissionPayload;
use crate::qualification::QualificationResult;

pub use http::HttpScoringClient;

/// Path appended to the configured backend base URL.
pub const SUBMIT_APPLICATION_PATH: &str = "/api/submit-application";

/// Anything that can turn a submission into a qualification result.
#[async_trait]
pub trait ScoringBackend: Send + Sync {
    async fn submit_application(
        &self,
        payload: &SubmissionPayload,
    ) -> Result<QualificationResult, SubmissionError>;
}

/// Why a submission produced no result. Callers surface all variants identically.
#[derive(Debug, thiserror::Error)]
pub enum SubmissionError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("scoring service answered with status {status}")]
    Status { status: u16 },
    #[error("response body is not a qualification result: {0}")]
    Decode(#[from] serde_json::Error),
}
