use serde::Serialize;

use super::currency::format_usd;
use super::tone::{likelihood_tone, risk_tone, score_tone, status_tone, Tone};
use crate::application::numeric::display_number;
use crate::application::{ApplicationInput, FormField, FormSection, InputKind};
use crate::qualification::{MatchedLender, QualificationResult};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BadgeView {
    pub label: String,
    pub tone: Tone,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LenderView {
    pub name: String,
    pub lender_type: String,
    pub rate_label: String,
    pub match_label: String,
    pub likelihood: BadgeView,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NextStepView {
    pub number: usize,
    pub text: String,
}

/// Everything the results screen shows, already formatted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResultsView {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub application_id: Option<String>,
    pub score_label: String,
    pub score_tone: Tone,
    pub status: BadgeView,
    pub risk: BadgeView,
    pub recommended_amount: String,
    pub interest_rate_range: String,
    pub analysis: String,
    pub strengths: Vec<String>,
    pub concerns: Vec<String>,
    pub lenders: Vec<LenderView>,
    pub next_steps: Vec<NextStepView>,
}

impl ResultsView {
    pub fn from_result(result: &QualificationResult) -> Self {
        let score = result.qualification_score.unwrap_or(f64::NAN);

        Self {
            application_id: result.application_id.clone(),
            score_label: result
                .qualification_score
                .map(display_number)
                .unwrap_or_default(),
            score_tone: score_tone(score),
            status: BadgeView {
                label: result.qualification_status.clone(),
                tone: status_tone(&result.qualification_status),
            },
            risk: BadgeView {
                label: format!("{} Risk", result.risk_assessment),
                tone: risk_tone(&result.risk_assessment),
            },
            recommended_amount: format_usd(result.recommended_loan_amount.unwrap_or(f64::NAN)),
            interest_rate_range: result.interest_rate_range.clone(),
            analysis: result.ai_analysis.clone(),
            strengths: result.key_strengths.clone(),
            concerns: result.key_concerns.clone(),
            lenders: result.matched_lenders.iter().map(LenderView::from).collect(),
            next_steps: result
                .next_steps
                .iter()
                .enumerate()
                .map(|(index, text)| NextStepView {
                    number: index + 1,
                    text: text.clone(),
                })
                .collect(),
        }
    }
}

impl From<&MatchedLender> for LenderView {
    fn from(lender: &MatchedLender) -> Self {
        let match_score = lender
            .match_score
            .map(display_number)
            .unwrap_or_default();
        Self {
            name: lender.lender_name.clone(),
            lender_type: lender.lender_type.clone(),
            rate_label: format!("Rate: {}", lender.interest_rate_range),
            match_label: format!("Match Score: {match_score}%"),
            likelihood: BadgeView {
                label: format!("{} Pre-approval", lender.pre_approval_likelihood),
                tone: likelihood_tone(&lender.pre_approval_likelihood),
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldView {
    pub field: FormField,
    pub label: &'static str,
    pub value: String,
    pub placeholder: &'static str,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<&'static str>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FormSectionView {
    pub section: FormSection,
    pub label: &'static str,
    pub fields: Vec<FieldView>,
}

/// The form screen: current values, the error banner if any, and the submit control.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FormView {
    pub sections: Vec<FormSectionView>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub submit_label: &'static str,
    pub submit_disabled: bool,
}

impl FormView {
    pub fn new(
        input: &ApplicationInput,
        error: Option<&str>,
        submit_label: &'static str,
        submit_disabled: bool,
    ) -> Self {
        let sections = FormSection::ordered()
            .into_iter()
            .map(|section| FormSectionView {
                section,
                label: section.label(),
                fields: section
                    .fields()
                    .into_iter()
                    .map(|field| FieldView {
                        field,
                        label: field.label(),
                        value: input.get(field).to_string(),
                        placeholder: field.placeholder(),
                        options: match field.kind() {
                            InputKind::Select(options) => options.to_vec(),
                            _ => Vec::new(),
                        },
                    })
                    .collect(),
            })
            .collect();

        Self {
            sections,
            error: error.map(str::to_string),
            submit_label,
            submit_disabled,
        }
    }
}
