//! Response model returned by the scoring backend.
//!
//! The client reads these values and renders them; it never interprets or validates them beyond
//! what deserialization requires. Unknown fields are ignored so the backend may grow its payload.

use serde::{Deserialize, Serialize};

/// Outcome of a successful prequalification submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QualificationResult {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub application_id: Option<String>,
    #[serde(default)]
    pub qualification_score: Option<f64>,
    #[serde(default)]
    pub qualification_status: String,
    #[serde(default)]
    pub risk_assessment: String,
    #[serde(default)]
    pub recommended_loan_amount: Option<f64>,
    #[serde(default)]
    pub interest_rate_range: String,
    #[serde(default)]
    pub ai_analysis: String,
    #[serde(default)]
    pub key_strengths: Vec<String>,
    #[serde(default)]
    pub key_concerns: Vec<String>,
    pub matched_lenders: Vec<MatchedLender>,
    pub next_steps: Vec<String>,
}

/// A lender the backend matched to the application, in the backend's ranking order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchedLender {
    #[serde(default)]
    pub lender_name: String,
    #[serde(default)]
    pub lender_type: String,
    #[serde(default)]
    pub interest_rate_range: String,
    #[serde(default)]
    pub match_score: Option<f64>,
    #[serde(default)]
    pub pre_approval_likelihood: String,
}
