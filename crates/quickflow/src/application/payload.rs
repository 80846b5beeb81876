use serde::Serialize;

use super::input::ApplicationInput;
use super::numeric::{parse_float_prefix, parse_int_prefix, FormNumber};

/// Body of the submission request: the form record with its six numeric fields coerced.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SubmissionPayload {
    pub business_name: String,
    pub industry: String,
    pub years_in_business: FormNumber,
    pub annual_revenue: FormNumber,
    pub credit_score: FormNumber,
    pub monthly_cash_flow: FormNumber,
    pub existing_debt: FormNumber,
    pub loan_amount_requested: FormNumber,
    pub loan_purpose: String,
    pub contact_email: String,
    pub contact_phone: String,
}

impl From<&ApplicationInput> for SubmissionPayload {
    fn from(input: &ApplicationInput) -> Self {
        Self {
            business_name: input.business_name.clone(),
            industry: input.industry.clone(),
            years_in_business: FormNumber(parse_int_prefix(&input.years_in_business)),
            annual_revenue: FormNumber(parse_float_prefix(&input.annual_revenue)),
            credit_score: FormNumber(parse_int_prefix(&input.credit_score)),
            monthly_cash_flow: FormNumber(parse_float_prefix(&input.monthly_cash_flow)),
            existing_debt: FormNumber(parse_float_prefix(&input.existing_debt)),
            loan_amount_requested: FormNumber(parse_float_prefix(&input.loan_amount_requested)),
            loan_purpose: input.loan_purpose.clone(),
            contact_email: input.contact_email.clone(),
            contact_phone: input.contact_phone.clone(),
        }
    }
}
