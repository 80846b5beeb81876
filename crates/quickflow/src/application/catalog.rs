use serde::{Deserialize, Serialize};

/// Industries offered by the application form, in display order.
pub const INDUSTRIES: [&str; 16] = [
    "Technology",
    "Healthcare",
    "Manufacturing",
    "Retail",
    "Food Service",
    "Professional Services",
    "Construction",
    "Real Estate",
    "Agriculture",
    "Transportation",
    "E-commerce",
    "Marketing",
    "Education",
    "Finance",
    "Entertainment",
    "Other",
];

/// Loan purposes offered by the application form, in display order.
pub const LOAN_PURPOSES: [&str; 10] = [
    "Working Capital",
    "Equipment Purchase",
    "Business Expansion",
    "Real Estate",
    "Inventory",
    "Marketing",
    "Debt Consolidation",
    "Technology Upgrade",
    "Hiring Staff",
    "Other",
];

/// Groups fields the way the form lays them out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormSection {
    BusinessInformation,
    FinancialInformation,
    LoanDetails,
    ContactInformation,
}

impl FormSection {
    pub const fn ordered() -> [FormSection; 4] {
        [
            FormSection::BusinessInformation,
            FormSection::FinancialInformation,
            FormSection::LoanDetails,
            FormSection::ContactInformation,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            FormSection::BusinessInformation => "Business Information",
            FormSection::FinancialInformation => "Financial Information",
            FormSection::LoanDetails => "Loan Details",
            FormSection::ContactInformation => "Contact Information",
        }
    }

    pub fn fields(self) -> Vec<FormField> {
        FormField::ordered()
            .into_iter()
            .filter(|field| field.section() == self)
            .collect()
    }
}

/// Bounds applied to a numeric input before the form may be submitted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NumberBounds {
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub step: f64,
}

/// Input control backing a field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputKind {
    Text,
    Email,
    Tel,
    Select(&'static [&'static str]),
    Number(NumberBounds),
}

/// Every field collected by the application form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormField {
    BusinessName,
    Industry,
    YearsInBusiness,
    AnnualRevenue,
    CreditScore,
    MonthlyCashFlow,
    ExistingDebt,
    LoanAmountRequested,
    LoanPurpose,
    ContactEmail,
    ContactPhone,
}

impl FormField {
    pub const fn ordered() -> [FormField; 11] {
        [
            FormField::BusinessName,
            FormField::Industry,
            FormField::YearsInBusiness,
            FormField::AnnualRevenue,
            FormField::CreditScore,
            FormField::MonthlyCashFlow,
            FormField::ExistingDebt,
            FormField::LoanAmountRequested,
            FormField::LoanPurpose,
            FormField::ContactEmail,
            FormField::ContactPhone,
        ]
    }

    /// Wire name used in the submission body.
    pub const fn key(self) -> &'static str {
        match self {
            FormField::BusinessName => "business_name",
            FormField::Industry => "industry",
            FormField::YearsInBusiness => "years_in_business",
            FormField::AnnualRevenue => "annual_revenue",
            FormField::CreditScore => "credit_score",
            FormField::MonthlyCashFlow => "monthly_cash_flow",
            FormField::ExistingDebt => "existing_debt",
            FormField::LoanAmountRequested => "loan_amount_requested",
            FormField::LoanPurpose => "loan_purpose",
            FormField::ContactEmail => "contact_email",
            FormField::ContactPhone => "contact_phone",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            FormField::BusinessName => "Business Name",
            FormField::Industry => "Industry",
            FormField::YearsInBusiness => "Years in Business",
            FormField::AnnualRevenue => "Annual Revenue",
            FormField::CreditScore => "Credit Score",
            FormField::MonthlyCashFlow => "Monthly Cash Flow",
            FormField::ExistingDebt => "Existing Debt",
            FormField::LoanAmountRequested => "Requested Loan Amount",
            FormField::LoanPurpose => "Loan Purpose",
            FormField::ContactEmail => "Email",
            FormField::ContactPhone => "Phone",
        }
    }

    /// Hint shown while the field is empty. For selects this is the blank option.
    pub const fn placeholder(self) -> &'static str {
        match self {
            FormField::BusinessName => "Enter your business name",
            FormField::Industry => "Select industry",
            FormField::YearsInBusiness => "e.g., 5",
            FormField::AnnualRevenue => "e.g., 500000",
            FormField::CreditScore => "e.g., 720",
            FormField::MonthlyCashFlow => "e.g., 25000",
            FormField::ExistingDebt => "e.g., 50000",
            FormField::LoanAmountRequested => "e.g., 100000",
            FormField::LoanPurpose => "Select loan purpose",
            FormField::ContactEmail => "john@business.com",
            FormField::ContactPhone => "(555) 123-4567",
        }
    }

    pub const fn section(self) -> FormSection {
        match self {
            FormField::BusinessName
            | FormField::Industry
            | FormField::YearsInBusiness
            | FormField::AnnualRevenue => FormSection::BusinessInformation,
            FormField::CreditScore
            | FormField::MonthlyCashFlow
            | FormField::ExistingDebt
            | FormField::LoanAmountRequested => FormSection::FinancialInformation,
            FormField::LoanPurpose => FormSection::LoanDetails,
            FormField::ContactEmail | FormField::ContactPhone => FormSection::ContactInformation,
        }
    }

    pub const fn kind(self) -> InputKind {
        const MONEY_STEP: f64 = 0.01;
        match self {
            FormField::BusinessName => InputKind::Text,
            FormField::Industry => InputKind::Select(&INDUSTRIES),
            FormField::YearsInBusiness => InputKind::Number(NumberBounds {
                min: Some(0.0),
                max: Some(100.0),
                step: 1.0,
            }),
            FormField::AnnualRevenue
            | FormField::ExistingDebt
            | FormField::LoanAmountRequested => InputKind::Number(NumberBounds {
                min: Some(0.0),
                max: None,
                step: MONEY_STEP,
            }),
            FormField::CreditScore => InputKind::Number(NumberBounds {
                min: Some(300.0),
                max: Some(850.0),
                step: 1.0,
            }),
            FormField::MonthlyCashFlow => InputKind::Number(NumberBounds {
                min: None,
                max: None,
                step: MONEY_STEP,
            }),
            FormField::LoanPurpose => InputKind::Select(&LOAN_PURPOSES),
            FormField::ContactEmail => InputKind::Email,
            FormField::ContactPhone => InputKind::Tel,
        }
    }

    /// Fields converted from text to numbers at submission time.
    pub const fn is_numeric(self) -> bool {
        matches!(self.kind(), InputKind::Number(_))
    }
}
