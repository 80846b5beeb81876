//! Applicant form model: field catalog, native constraints, and the text-to-number coercion
//! applied when the form is submitted.

pub mod catalog;
pub mod constraints;
pub mod input;
pub mod numeric;
pub mod payload;

pub use catalog::{FormField, FormSection, InputKind, NumberBounds, INDUSTRIES, LOAN_PURPOSES};
pub use constraints::ConstraintViolation;
pub use input::ApplicationInput;
pub use numeric::FormNumber;
pub use payload::SubmissionPayload;
