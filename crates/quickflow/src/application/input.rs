use serde::{Deserialize, Serialize};

use super::catalog::FormField;
use super::constraints::{self, ConstraintViolation};

/// Applicant record exactly as typed. Numeric fields stay text until submission.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplicationInput {
    pub business_name: String,
    pub industry: String,
    pub years_in_business: String,
    pub annual_revenue: String,
    pub credit_score: String,
    pub monthly_cash_flow: String,
    pub existing_debt: String,
    pub loan_amount_requested: String,
    pub loan_purpose: String,
    pub contact_email: String,
    pub contact_phone: String,
}

impl ApplicationInput {
    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::BusinessName => &self.business_name,
            FormField::Industry => &self.industry,
            FormField::YearsInBusiness => &self.years_in_business,
            FormField::AnnualRevenue => &self.annual_revenue,
            FormField::CreditScore => &self.credit_score,
            FormField::MonthlyCashFlow => &self.monthly_cash_flow,
            FormField::ExistingDebt => &self.existing_debt,
            FormField::LoanAmountRequested => &self.loan_amount_requested,
            FormField::LoanPurpose => &self.loan_purpose,
            FormField::ContactEmail => &self.contact_email,
            FormField::ContactPhone => &self.contact_phone,
        }
    }

    pub fn set(&mut self, field: FormField, value: impl Into<String>) {
        *self.slot_mut(field) = value.into();
    }

    /// First native constraint failure in form order, if any.
    pub fn first_violation(&self) -> Option<(FormField, ConstraintViolation)> {
        FormField::ordered().into_iter().find_map(|field| {
            constraints::check(field, self.get(field))
                .err()
                .map(|violation| (field, violation))
        })
    }

    fn slot_mut(&mut self, field: FormField) -> &mut String {
        match field {
            FormField::BusinessName => &mut self.business_name,
            FormField::Industry => &mut self.industry,
            FormField::YearsInBusiness => &mut self.years_in_business,
            FormField::AnnualRevenue => &mut self.annual_revenue,
            FormField::CreditScore => &mut self.credit_score,
            FormField::MonthlyCashFlow => &mut self.monthly_cash_flow,
            FormField::ExistingDebt => &mut self.existing_debt,
            FormField::LoanAmountRequested => &mut self.loan_amount_requested,
            FormField::LoanPurpose => &mut self.loan_purpose,
            FormField::ContactEmail => &mut self.contact_email,
            FormField::ContactPhone => &mut self.contact_phone,
        }
    }
}
